pub(crate) mod error;
pub(crate) mod fixed_point;
pub(crate) mod geom;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use fixed_point::{quantize, quantize_ffff, FIXED_POINT_ONE};
pub use geom::{Point, Rect, Size};
