pub mod float_ext;
pub mod log_setup;

pub use float_ext::FloatExt;
pub use log_setup::{setup_logging, setup_test_logging};

/// Default tolerance for approximate floating point comparison.
pub const EPSILON: f64 = 1e-6;
