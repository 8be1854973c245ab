//! Separable two-pass kernel scaling.


use super::{Interpolator, Options};
use crate::common::{quantize, Error, Rect, Result, Size};
use crate::distribution::Distribution;
use crate::image::{ImageView, ImageViewMut, Rgba64};
use crate::kernel::Kernel;

/// Scales the `sr` region of `src` into the `dr` region of `dst`.
///
/// Implementations are immutable and safe to share between threads scaling
/// into disjoint destination regions.
pub trait Scaler {
    /// # Errors
    /// Returns [`Error::DimensionMismatch`] when the scaler only supports
    /// fixed sizes and `dr`/`sr` do not match them. Empty rectangles are a
    /// no-op.
    fn scale<D, S>(
        &self,
        dst: &mut D,
        dr: Rect,
        src: &S,
        sr: Rect,
        opts: Option<&Options>,
    ) -> Result<()>
    where
        D: ImageViewMut + ?Sized,
        S: ImageView + ?Sized;
}

/// Scaler with precomputed weight tables for one fixed pair of sizes.
///
/// Building the horizontal and vertical [`Distribution`]s is the expensive
/// part of scaling. A `KernelScaler` builds them once and reuses them for any
/// rectangles with the configured widths and heights, wherever they are
/// positioned.
#[derive(Debug, Clone)]
pub struct KernelScaler<K> {
    kernel: K,
    dst_size: Size,
    src_size: Size,
    horizontal: Distribution,
    vertical: Distribution,
}

/// Premultiplied channel accumulator, `[r, g, b, a]`.
type Accum = [f64; 4];

impl<K: Kernel> KernelScaler<K> {
    /// Builds the weight tables for scaling `sw x sh` to `dw x dh`.
    ///
    /// # Errors
    /// Propagates [`Error::InvalidKernel`] and [`Error::ZeroTotalWeight`] from
    /// [`Distribution::new`].
    pub fn new(kernel: K, dw: u32, dh: u32, sw: u32, sh: u32) -> Result<Self> {
        let horizontal = Distribution::new(&kernel, dw, sw)?;
        let vertical = Distribution::new(&kernel, dh, sh)?;

        tracing::debug!(
            dst = %Size::new(dw, dh),
            src = %Size::new(sw, sh),
            contributions = horizontal.contributions().len() + vertical.contributions().len(),
            "created kernel scaler"
        );

        Ok(Self {
            kernel,
            dst_size: Size::new(dw, dh),
            src_size: Size::new(sw, sh),
            horizontal,
            vertical,
        })
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    pub fn dst_size(&self) -> Size {
        self.dst_size
    }

    pub fn src_size(&self) -> Size {
        self.src_size
    }

    pub fn horizontal(&self) -> &Distribution {
        &self.horizontal
    }

    pub fn vertical(&self) -> &Distribution {
        &self.vertical
    }

    /// Distributes source columns over destination columns, one source row at
    /// a time. The result is `dw x sh`, normalized to `[0, 1]`.
    fn scale_x<S: ImageView + ?Sized>(&self, src: &S, sr: Rect) -> Vec<Accum> {
        let mut tmp = Vec::with_capacity(self.dst_size.width as usize * self.src_size.height as usize);

        for y in 0..self.src_size.height as i32 {
            let sy = sr.min.y + y;
            for range in self.horizontal.ranges() {
                let mut sum: Accum = [0.0; 4];
                for c in &self.horizontal.contributions()[range.range()] {
                    let sx = sr.min.x + c.source as i32;
                    accumulate(&mut sum, src.pixel_or_transparent(sx, sy), c.weight);
                }
                tmp.push(sum.map(|v| v * range.inv_total_weight_ffff));
            }
        }

        tmp
    }

    /// Distributes the rows of `tmp` over the destination rows, writing only
    /// the destination pixels inside `adr`.
    fn scale_y<D: ImageViewMut + ?Sized>(&self, dst: &mut D, dr: Rect, adr: Rect, tmp: &[Accum]) {
        let dw = self.dst_size.width as usize;

        for y in adr.min.y..adr.max.y {
            let range = &self.vertical.ranges()[(y - dr.min.y) as usize];
            let contributions = &self.vertical.contributions()[range.range()];

            for x in adr.min.x..adr.max.x {
                let dx = (x - dr.min.x) as usize;
                let mut sum: Accum = [0.0; 4];
                for c in contributions {
                    let p = &tmp[c.source * dw + dx];
                    for (s, v) in sum.iter_mut().zip(p) {
                        *s += v * c.weight;
                    }
                }
                dst.set_pixel(x, y, to_color(sum.map(|v| v * range.inv_total_weight)));
            }
        }
    }
}

impl<K: Kernel> Scaler for KernelScaler<K> {
    fn scale<D, S>(
        &self,
        dst: &mut D,
        dr: Rect,
        src: &S,
        sr: Rect,
        opts: Option<&Options>,
    ) -> Result<()>
    where
        D: ImageViewMut + ?Sized,
        S: ImageView + ?Sized,
    {
        let _opts = Options::resolve(opts);

        if dr.is_empty() || sr.is_empty() {
            tracing::trace!(%dr, %sr, "scale: empty rectangle");
            return Ok(());
        }

        if dr.size() != self.dst_size || sr.size() != self.src_size {
            return Err(Error::DimensionMismatch {
                expected_dst: self.dst_size,
                expected_src: self.src_size,
                actual_dst: dr.size(),
                actual_src: sr.size(),
            });
        }

        // Affected destination pixels.
        let adr = dst.bounds().intersect(&dr);
        if adr.is_empty() {
            tracing::trace!(%dr, "scale: destination rectangle outside image bounds");
            return Ok(());
        }

        let tmp = self.scale_x(src, sr);
        self.scale_y(dst, dr, adr, &tmp);

        Ok(())
    }
}

impl<K: Kernel> Scaler for Interpolator<K> {
    /// One-shot scale: builds a temporary [`KernelScaler`] sized for `dr` and `sr`.
    fn scale<D, S>(
        &self,
        dst: &mut D,
        dr: Rect,
        src: &S,
        sr: Rect,
        opts: Option<&Options>,
    ) -> Result<()>
    where
        D: ImageViewMut + ?Sized,
        S: ImageView + ?Sized,
    {
        if dr.is_empty() || sr.is_empty() {
            return Ok(());
        }
        let dst_size = dr.size();
        let src_size = sr.size();
        KernelScaler::new(
            self.kernel(),
            dst_size.width,
            dst_size.height,
            src_size.width,
            src_size.height,
        )?
        .scale(dst, dr, src, sr, opts)
    }
}

#[inline]
pub(super) fn accumulate(sum: &mut Accum, p: Rgba64, weight: f64) {
    for (s, v) in sum.iter_mut().zip(p.channels()) {
        *s += f64::from(v) * weight;
    }
}

/// Quantizes normalized premultiplied channels. Color channels are clamped
/// to alpha, since negative kernel lobes can overshoot it.
#[inline]
fn to_color(sum: Accum) -> Rgba64 {
    let [r, g, b, a] = sum;
    Rgba64::new(
        quantize(r.min(a)),
        quantize(g.min(a)),
        quantize(b.min(a)),
        quantize(a),
    )
}
