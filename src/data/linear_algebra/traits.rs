//! # Capabilities shared by vector-like values
//!
//! Inner products and matrix-vector products accept any right-hand side that has a length and can
//! be read by index. Besides the vector types of this crate, plain slices, `Vec`s and arrays of
//! `f64` qualify.

/// A finite sequence of real numbers that can be read by index.
///
/// Implementors guarantee that `component(i)` is defined for every `i < len()`.
pub trait VectorLike {
    /// Number of components.
    fn len(&self) -> usize;
    /// Whether there are no components at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Value of the component at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.len()`.
    fn component(&self, index: usize) -> f64;
}

impl VectorLike for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl VectorLike for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<const N: usize> VectorLike for [f64; N] {
    fn len(&self) -> usize {
        N
    }

    fn component(&self, index: usize) -> f64 {
        self[index]
    }
}

impl<V: VectorLike + ?Sized> VectorLike for &V {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn component(&self, index: usize) -> f64 {
        (**self).component(index)
    }
}
