//! Helper algorithms for the `linear_algebra` module.
use std::fmt::LowerExp;

use num_traits::Float;

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};

/// Number of fractional digits used when rendering a component without an explicit precision.
pub const DEFAULT_PRECISION: usize = 3;

/// Verify that two operands have the same size.
///
/// # Arguments
///
/// * `operation`: Name of the operation, used in the error.
/// * `expected`: Size of the left-hand side.
/// * `found`: Size of the right-hand side.
pub(crate) fn check_len(operation: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(LinearAlgebraError::dimension_mismatch(operation, expected, found))
    }
}

/// Render a value in scientific notation with a signed, at least two digit exponent.
///
/// For example, `1f64` with precision 3 becomes `1.000e+00` and `-0.00123` becomes `-1.230e-03`.
/// Non-finite values are written as `nan`, `inf` and `-inf`.
pub(crate) fn format_scientific<F: Float + LowerExp>(value: F, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        // `{:e}` always produces an exponent for finite values
        None => rendered,
    }
}
