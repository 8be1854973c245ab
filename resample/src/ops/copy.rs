use super::Options;
use crate::common::{Point, Rect};
use crate::image::{ImageView, ImageViewMut};

/// Copies the `sr` region of `src` into `dst` so that `sr.min` lands on `dp`.
///
/// Pixels are copied verbatim. Only positions inside both `dst.bounds()` and
/// the translated `src.bounds()` are written.
pub fn copy<D, S>(dst: &mut D, dp: Point, src: &S, sr: Rect, opts: Option<&Options>)
where
    D: ImageViewMut + ?Sized,
    S: ImageView + ?Sized,
{
    let _opts = Options::resolve(opts);

    let offset = dp - sr.min;
    let region = sr
        .intersect(&src.bounds())
        .translate(offset)
        .intersect(&dst.bounds());
    if region.is_empty() {
        tracing::trace!(%sr, %dp, "copy: nothing to write");
        return;
    }

    for p in region.points() {
        let s = p - offset;
        dst.set_pixel(p.x, p.y, src.pixel(s.x, s.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::gradient_image;
    use crate::image::{Rgba64, Rgba64Image};

    #[test]
    fn copy_translates_region() {
        let src = gradient_image(4, 4);
        let mut dst = Rgba64Image::new(Rect::new(0, 0, 10, 10));

        copy(&mut dst, Point::new(5, 6), &src, Rect::new(1, 1, 3, 3), None);

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(dst.pixel(5 + x, 6 + y), src.pixel(1 + x, 1 + y));
            }
        }
        let written = dst
            .pixels()
            .iter()
            .filter(|p| **p != Rgba64::TRANSPARENT)
            .count();
        assert_eq!(written, 4);
    }

    #[test]
    fn copy_clips_to_destination_bounds() {
        let src = Rgba64Image::new_filled(Rect::new(0, 0, 4, 4), Rgba64::WHITE);
        let mut dst = Rgba64Image::new(Rect::new(0, 0, 3, 3));

        copy(&mut dst, Point::new(-2, 1), &src, src.bounds(), None);

        assert_eq!(dst.pixel(0, 0), Rgba64::TRANSPARENT);
        assert_eq!(dst.pixel(0, 1), Rgba64::WHITE);
        assert_eq!(dst.pixel(1, 2), Rgba64::WHITE);
        assert_eq!(dst.pixel(2, 2), Rgba64::TRANSPARENT);
    }

    #[test]
    fn copy_skips_pixels_outside_source_bounds() {
        let src = Rgba64Image::new_filled(Rect::new(0, 0, 2, 2), Rgba64::WHITE);
        let mut dst = Rgba64Image::new_filled(Rect::new(0, 0, 4, 4), Rgba64::BLACK);

        copy(
            &mut dst,
            Point::new(0, 0),
            &src,
            Rect::new(-1, -1, 3, 3),
            Some(&Options::default()),
        );

        assert_eq!(dst.pixel(0, 0), Rgba64::BLACK);
        assert_eq!(dst.pixel(1, 1), Rgba64::WHITE);
        assert_eq!(dst.pixel(2, 2), Rgba64::WHITE);
        assert_eq!(dst.pixel(3, 3), Rgba64::BLACK);
    }

    #[test]
    fn copy_empty_region_is_noop() {
        let src = gradient_image(4, 4);
        let mut dst = Rgba64Image::new(Rect::new(0, 0, 4, 4));
        copy(&mut dst, Point::ZERO, &src, Rect::new(2, 2, 2, 4), None);
        assert!(dst.pixels().iter().all(|p| *p == Rgba64::TRANSPARENT));
    }
}
