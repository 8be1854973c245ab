mod copy;
mod scale;
mod transform;

pub use copy::copy;
pub use scale::{KernelScaler, Scaler};
pub use transform::{Affine, Transformer};

use serde::{Deserialize, Serialize};

use crate::common::Result;
use crate::kernel::{CatmullRom, Kernel, Linear};

/// Optional parameters for [`copy`], [`Scaler::scale`] and
/// [`Transformer::transform`].
///
/// Carries no fields yet. Passing `None` and passing the default value behave
/// identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Options {}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn resolve(opts: Option<&Options>) -> Options {
        opts.copied().unwrap_or_default()
    }
}

/// Scales and transforms by blending source pixels weighted by a kernel.
///
/// Running time depends on the destination area and, because the kernel is
/// widened when shrinking, on the source area too. Repeated scaling between
/// the same sizes should go through [`Interpolator::new_scaler`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interpolator<K> {
    kernel: K,
}

/// Bi-linear interpolation through the tent kernel.
pub const BILINEAR: Interpolator<Linear> = Interpolator::new(Linear);

/// Catmull-Rom interpolation. Slowest and usually the best looking.
pub const CATMULL_ROM: Interpolator<CatmullRom> = Interpolator::new(CatmullRom);

impl<K> Interpolator<K> {
    pub const fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }
}

impl<K: Kernel + Clone> Interpolator<K> {
    /// Returns a scaler for repeated scaling from `sw x sh` to `dw x dh`.
    pub fn new_scaler(&self, dw: u32, dh: u32, sw: u32, sh: u32) -> Result<KernelScaler<K>> {
        KernelScaler::new(self.kernel.clone(), dw, dh, sw, sh)
    }
}
