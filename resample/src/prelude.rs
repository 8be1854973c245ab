pub use crate::common::{Error, Point, Rect, Result, Size};
pub use crate::image::{ImageView, ImageViewMut, Rgba64, Rgba64Image};
pub use crate::kernel::{CatmullRom, Interpolation, Kernel, Linear};
pub use crate::ops::{Affine, Interpolator, KernelScaler, Options, Scaler, Transformer};
