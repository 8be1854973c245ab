use crate::common::geom::Size;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "scaler is configured for {expected_dst} <- {expected_src} but was called with {actual_dst} <- {actual_src}"
    )]
    DimensionMismatch {
        expected_dst: Size,
        expected_src: Size,
        actual_dst: Size,
        actual_src: Size,
    },
    #[error("affine transform is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f64 },
    #[error("kernel weights sum to zero for destination index {index}")]
    ZeroTotalWeight { index: usize },
    #[error("kernel support must be finite and positive, got {support}")]
    InvalidKernel { support: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
