//! Kernel based image resampling.
//!
//! Scales a rectangle of a source image into a rectangle of a destination
//! image, or maps it through an affine transform, blending source pixels with
//! a symmetric interpolation [`Kernel`]. Scaling is a separable two-pass
//! convolution driven by per-axis weight [`Distribution`]s; building those
//! tables is the expensive step, so [`KernelScaler`] keeps them for reuse
//! across calls with the same widths and heights.

mod common;
mod distribution;
mod image;
mod kernel;
mod ops;

#[cfg(feature = "bench")]
pub mod bench;

pub mod prelude;

pub use prelude::*;

// Fixed point
pub use crate::common::{quantize, quantize_ffff, FIXED_POINT_ONE};

// Weight tables and custom kernels
pub use crate::distribution::{Contribution, Distribution, SourceRange};
pub use crate::kernel::FnKernel;

// Operations
pub use crate::ops::{copy, BILINEAR, CATMULL_ROM};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn prelude_covers_scaling() {
        let src = Rgba64Image::new_filled(Rect::new(0, 0, 6, 6), Rgba64::WHITE);
        let mut dst = Rgba64Image::new(Rect::new(0, 0, 3, 3));
        let scaler: KernelScaler<Interpolation> = Interpolator::new(Interpolation::default())
            .new_scaler(3, 3, 6, 6)
            .unwrap();

        let result: Result<()> =
            scaler.scale(&mut dst, Rect::new(0, 0, 3, 3), &src, src.bounds(), None);
        result.unwrap();

        assert!(dst.pixels().iter().all(|p| *p == Rgba64::WHITE));
        assert_eq!(crate::CATMULL_ROM.kernel().support(), 2.0);
    }
}
