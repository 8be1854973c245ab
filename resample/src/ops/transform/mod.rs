//! Affine transformation through a kernel.

mod affine;

pub use affine::Affine;

use glam::DVec2;

use super::scale::accumulate;
use super::{Interpolator, Options};
use crate::common::{quantize_ffff, Error, Point, Rect, Result};
use crate::image::{ImageView, ImageViewMut, Rgba64};
use crate::kernel::{self, Footprint, Kernel};

/// Maps the `sr` region of `src` into `dst` through a source-to-destination
/// affine transform.
pub trait Transformer {
    /// Destination pixels whose centers map back inside `sr` are overwritten,
    /// all others are left untouched.
    ///
    /// # Errors
    /// Returns [`Error::SingularTransform`] if `s2d` cannot be inverted and
    /// [`Error::ZeroTotalWeight`] if the kernel weights of some destination
    /// pixel sum to zero. `dst` is left unchanged on error.
    fn transform<D, S>(
        &self,
        dst: &mut D,
        s2d: &Affine,
        src: &S,
        sr: Rect,
        opts: Option<&Options>,
    ) -> Result<()>
    where
        D: ImageViewMut + ?Sized,
        S: ImageView + ?Sized;
}

/// Per-axis sampling window around a source coordinate, clamped to `sr`.
struct Window {
    start: i32,
    weights: Vec<f64>,
}

impl Window {
    /// A window never extends past the `extent` samples of `sr`, however
    /// wide the footprint.
    fn new(footprint: &Footprint, extent: u32) -> Self {
        let span = 1.0 + 2.0 * footprint.half_width.ceil();
        Self {
            start: 0,
            weights: Vec::with_capacity(span.min(extent as f64) as usize),
        }
    }

    /// Fills the normalized weights of the samples in `[lo, hi)` around
    /// `center`. Returns `None` if they sum to zero.
    fn fill<K: Kernel + ?Sized>(
        &mut self,
        kernel: &K,
        footprint: &Footprint,
        center: f64,
        lo: i32,
        hi: i32,
    ) -> Option<()> {
        let start = ((center - footprint.half_width).floor() as i32).max(lo);
        let end = ((center + footprint.half_width).ceil() as i32).min(hi);

        self.start = start;
        self.weights.clear();
        self.weights
            .extend((start..end).map(|k| footprint.weight(kernel, center, k as f64)));

        let total: f64 = self.weights.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        self.weights.iter_mut().for_each(|w| *w /= total);
        Some(())
    }

    fn samples(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        (self.start..).zip(self.weights.iter().copied())
    }
}

impl<K: Kernel> Transformer for Interpolator<K> {
    fn transform<D, S>(
        &self,
        dst: &mut D,
        s2d: &Affine,
        src: &S,
        sr: Rect,
        opts: Option<&Options>,
    ) -> Result<()>
    where
        D: ImageViewMut + ?Sized,
        S: ImageView + ?Sized,
    {
        let _opts = Options::resolve(opts);
        let kernel = self.kernel();
        kernel::validate(kernel)?;

        let d2s = s2d.try_inverse()?;

        let dr = s2d.bounding_box(&sr);
        let adr = dst.bounds().intersect(&dr);
        if adr.is_empty() || sr.is_empty() {
            tracing::trace!(%sr, %dr, "transform: nothing to write");
            return Ok(());
        }

        let m = &d2s.0;
        let x_scale = m[0].abs().max(m[1].abs());
        let y_scale = m[3].abs().max(m[4].abs());
        let x_footprint = Footprint::new(kernel, x_scale);
        let y_footprint = Footprint::new(kernel, y_scale);

        tracing::debug!(%sr, %adr, x_scale, y_scale, "transforming");

        let mut xw = Window::new(&x_footprint, sr.size().width);
        let mut yw = Window::new(&y_footprint, sr.size().height);

        // Written only once every pixel has resolved its weights.
        let mut out = Vec::with_capacity(adr.size().area());

        for (index, Point { x: dx, y: dy }) in adr.points().enumerate() {
            let s = d2s.apply(DVec2::new(dx as f64 + 0.5, dy as f64 + 0.5));
            let sp = s.floor();
            if !sp.is_finite() || !sr.contains(sp.as_ivec2()) {
                continue;
            }

            let (sx, sy) = (s.x - 0.5, s.y - 0.5);
            xw.fill(kernel, &x_footprint, sx, sr.min.x, sr.max.x)
                .ok_or(Error::ZeroTotalWeight { index })?;
            yw.fill(kernel, &y_footprint, sy, sr.min.y, sr.max.y)
                .ok_or(Error::ZeroTotalWeight { index })?;

            let mut sum = [0.0; 4];
            for (ky, y_weight) in yw.samples() {
                if y_weight == 0.0 {
                    continue;
                }
                for (kx, x_weight) in xw.samples() {
                    let w = x_weight * y_weight;
                    if w != 0.0 {
                        accumulate(&mut sum, src.pixel_or_transparent(kx, ky), w);
                    }
                }
            }

            let [r, g, b, a] = sum;
            out.push((
                Point::new(dx, dy),
                Rgba64::new(
                    quantize_ffff(r.min(a)),
                    quantize_ffff(g.min(a)),
                    quantize_ffff(b.min(a)),
                    quantize_ffff(a),
                ),
            ));
        }

        for (p, color) in out {
            dst.set_pixel(p.x, p.y, color);
        }

        Ok(())
    }
}
