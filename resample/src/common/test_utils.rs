use crate::common::{Point, Rect};
use crate::image::{ImageView, Rgba64, Rgba64Image};

/// Opaque image whose red channel grows along x and green along y.
pub(crate) fn gradient_image(width: u32, height: u32) -> Rgba64Image {
    let bounds = Rect::new(0, 0, width as i32, height as i32);
    let step = |i: i32, n: u32| ((i as u64 * 0xffff) / n.max(1) as u64) as u16;
    let pixels = bounds
        .points()
        .map(|p| Rgba64::opaque(step(p.x, width), step(p.y, height), 0x8000))
        .collect();
    Rgba64Image::from_pixels(bounds, pixels)
}

pub(crate) fn uniform_image(bounds: Rect, color: Rgba64) -> Rgba64Image {
    Rgba64Image::new_filled(bounds, color)
}

/// View that fails the test if a pixel outside the bounds is ever read.
pub(crate) struct StrictView<'a>(pub &'a Rgba64Image);

impl ImageView for StrictView<'_> {
    fn bounds(&self) -> Rect {
        self.0.bounds()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba64 {
        assert!(
            self.0.bounds().contains(Point::new(x, y)),
            "read outside source bounds at ({x}, {y})"
        );
        self.0.pixel(x, y)
    }
}

/// One-pixel black and white checkerboard.
pub(crate) fn checkerboard(width: u32, height: u32) -> Rgba64Image {
    let bounds = Rect::new(0, 0, width as i32, height as i32);
    let pixels = bounds
        .points()
        .map(|p| {
            if (p.x + p.y) % 2 == 0 {
                Rgba64::WHITE
            } else {
                Rgba64::BLACK
            }
        })
        .collect();
    Rgba64Image::from_pixels(bounds, pixels)
}

/// Nearest-neighbor scale of `src` to `width x height`, as a baseline
/// without any filtering.
pub(crate) fn point_sample(src: &Rgba64Image, width: u32, height: u32) -> Rgba64Image {
    let bounds = src.bounds();
    let sx = src.width() as f64 / width as f64;
    let sy = src.height() as f64 / height as f64;
    let dst_bounds = Rect::new(0, 0, width as i32, height as i32);
    let pixels = dst_bounds
        .points()
        .map(|p| {
            let x = bounds.min.x + ((p.x as f64 + 0.5) * sx) as i32;
            let y = bounds.min.y + ((p.y as f64 + 0.5) * sy) as i32;
            src.pixel(x, y)
        })
        .collect();
    Rgba64Image::from_pixels(dst_bounds, pixels)
}

/// Variance of the red channel, normalized to `[0, 1]`.
pub(crate) fn channel_variance(img: &Rgba64Image) -> f64 {
    let values: Vec<f64> = img.pixels().iter().map(|p| p.r as f64 / 65535.0).collect();
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Largest per-channel difference between two equally sized images.
pub(crate) fn max_channel_diff(a: &Rgba64Image, b: &Rgba64Image) -> u16 {
    assert_eq!(a.bounds().size(), b.bounds().size());
    a.as_channels()
        .iter()
        .zip(b.as_channels())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}

/// Asserts that every pixel of `img` inside `rect` equals `color`.
pub(crate) fn assert_region_eq(img: &Rgba64Image, rect: Rect, color: Rgba64) {
    for Point { x, y } in rect.points() {
        assert_eq!(img.pixel(x, y), color, "pixel ({x}, {y})");
    }
}
