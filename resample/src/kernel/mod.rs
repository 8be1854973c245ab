//! Symmetric interpolation kernels.
//!
//! A kernel is a weighting function of the distance `t >= 0` between a
//! destination sample and a source sample, with a finite support beyond which
//! the weight is zero. Callers always pass `|t|` and never evaluate at or past
//! the support.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub trait Kernel {
    /// Radius beyond which the weight is zero. Must be finite and positive.
    fn support(&self) -> f64;

    /// Weight at distance `t`, for `0 <= t < support()`.
    fn at(&self, t: f64) -> f64;
}

impl<K: Kernel + ?Sized> Kernel for &K {
    #[inline]
    fn support(&self) -> f64 {
        (**self).support()
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        (**self).at(t)
    }
}

impl<K: Kernel + ?Sized> Kernel for Box<K> {
    #[inline]
    fn support(&self) -> f64 {
        (**self).support()
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        (**self).at(t)
    }
}

impl<K: Kernel + ?Sized> Kernel for Arc<K> {
    #[inline]
    fn support(&self) -> f64 {
        (**self).support()
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        (**self).at(t)
    }
}

/// Tent kernel: bi-linear interpolation when upscaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Linear;

impl Kernel for Linear {
    #[inline]
    fn support(&self) -> f64 {
        1.0
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        1.0 - t
    }
}

/// Catmull-Rom spline, the cubic BC-spline with B = 0 and C = 0.5.
///
/// Interpolating (passes through the source samples) and sharp, with small
/// negative lobes between `t = 1` and `t = 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CatmullRom;

impl Kernel for CatmullRom {
    #[inline]
    fn support(&self) -> f64 {
        2.0
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        if t < 1.0 {
            (1.5 * t - 2.5) * t * t + 1.0
        } else {
            ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
        }
    }
}

/// Kernel from a plain function and a support radius.
#[derive(Debug, Clone, Copy)]
pub struct FnKernel {
    pub support: f64,
    pub at: fn(f64) -> f64,
}

impl FnKernel {
    pub const fn new(support: f64, at: fn(f64) -> f64) -> Self {
        Self { support, at }
    }
}

impl Kernel for FnKernel {
    #[inline]
    fn support(&self) -> f64 {
        self.support
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        (self.at)(t)
    }
}

/// Interpolation quality selectable from configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// Tent kernel, support 1.
    #[strum(to_string = "linear", serialize = "bilinear")]
    #[serde(alias = "bilinear")]
    Linear,
    /// Catmull-Rom cubic, support 2.
    #[default]
    #[strum(to_string = "catmull-rom", serialize = "catmullrom", serialize = "cubic")]
    #[serde(alias = "cubic")]
    CatmullRom,
}

impl Kernel for Interpolation {
    #[inline]
    fn support(&self) -> f64 {
        match self {
            Interpolation::Linear => Linear.support(),
            Interpolation::CatmullRom => CatmullRom.support(),
        }
    }

    #[inline]
    fn at(&self, t: f64) -> f64 {
        match self {
            Interpolation::Linear => Linear.at(t),
            Interpolation::CatmullRom => CatmullRom.at(t),
        }
    }
}

/// Footprint of a kernel on the source axis for a given source/destination
/// ratio.
///
/// When the ratio exceeds one (downscaling) the support is widened by the
/// ratio and the kernel argument compressed by its inverse, so every
/// destination sample blends all of the source samples it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Footprint {
    pub support: f64,
    pub half_width: f64,
    pub arg_scale: f64,
}

impl Footprint {
    pub fn new<K: Kernel + ?Sized>(kernel: &K, scale: f64) -> Self {
        let support = kernel.support();
        if scale > 1.0 {
            Self {
                support,
                half_width: support * scale,
                arg_scale: 1.0 / scale,
            }
        } else {
            Self {
                support,
                half_width: support,
                arg_scale: 1.0,
            }
        }
    }

    /// Kernel weight of the source sample at `coord` for a destination sample
    /// centered at `center`. Zero outside the support.
    #[inline]
    pub fn weight<K: Kernel + ?Sized>(&self, kernel: &K, center: f64, coord: f64) -> f64 {
        let t = ((center - coord) * self.arg_scale).abs();
        if t < self.support {
            kernel.at(t)
        } else {
            0.0
        }
    }
}

pub(crate) fn validate<K: Kernel + ?Sized>(kernel: &K) -> crate::Result<()> {
    let support = kernel.support();
    if support.is_finite() && support > 0.0 {
        Ok(())
    } else {
        Err(crate::Error::InvalidKernel { support })
    }
}
