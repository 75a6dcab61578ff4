//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

mod properties;
mod scenarios;

/// Show log records of the crate while a test runs, when `RUST_LOG` asks for them.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
