
use bytemuck::{Pod, Zeroable};

use crate::common::{Point, Rect};

/// 16-bit per channel color with alpha-premultiplied components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba64 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Rgba64 {
    pub const TRANSPARENT: Rgba64 = Rgba64::new(0, 0, 0, 0);
    pub const BLACK: Rgba64 = Rgba64::new(0, 0, 0, u16::MAX);
    pub const WHITE: Rgba64 = Rgba64::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);

    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }

    pub const fn gray(value: u16) -> Self {
        Self::opaque(value, value, value)
    }

    #[inline]
    pub const fn channels(&self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_channels(channels: [u16; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }

    /// A premultiplied color never has a color channel above its alpha.
    pub fn is_premultiplied(&self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }
}

/// Read access to a raster image.
pub trait ImageView {
    /// Region of valid pixel coordinates.
    fn bounds(&self) -> Rect;

    /// Color at `(x, y)`. Only called for coordinates inside [`bounds`](Self::bounds).
    fn pixel(&self, x: i32, y: i32) -> Rgba64;

    /// Color at `(x, y)`, transparent outside the bounds.
    #[inline]
    fn pixel_or_transparent(&self, x: i32, y: i32) -> Rgba64 {
        if self.bounds().contains(Point::new(x, y)) {
            self.pixel(x, y)
        } else {
            Rgba64::TRANSPARENT
        }
    }
}

/// Write access to a raster image.
pub trait ImageViewMut: ImageView {
    /// Stores `color` at `(x, y)`. Only called for coordinates inside the bounds.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba64);
}

/// In-memory RGBA64 image. The bounds may start anywhere, not only at the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rgba64Image {
    bounds: Rect,
    pixels: Vec<Rgba64>,
}

impl Rgba64Image {
    /// Transparent image covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self::new_filled(bounds, Rgba64::TRANSPARENT)
    }

    pub fn new_filled(bounds: Rect, color: Rgba64) -> Self {
        let bounds = if bounds.is_empty() {
            Rect::EMPTY
        } else {
            bounds
        };
        Self {
            bounds,
            pixels: vec![color; bounds.size().area()],
        }
    }

    /// Wraps row-major `pixels` covering `bounds`.
    ///
    /// # Panics
    /// Panics if the pixel count does not match the bounds area.
    pub fn from_pixels(bounds: Rect, pixels: Vec<Rgba64>) -> Self {
        assert_eq!(
            pixels.len(),
            bounds.size().area(),
            "pixels length must equal bounds area"
        );
        let bounds = if bounds.is_empty() {
            Rect::EMPTY
        } else {
            bounds
        };
        Self { bounds, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.size().width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.size().height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba64] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba64] {
        &mut self.pixels
    }

    /// Pixel data as interleaved `r, g, b, a` channels.
    #[inline]
    pub fn as_channels(&self) -> &[u16] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_pixels(self) -> Vec<Rgba64> {
        self.pixels
    }

    /// Offset of `(x, y)` in [`pixels`](Self::pixels), if inside the bounds.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(Point::new(x, y)) {
            return None;
        }
        let row = (y - self.bounds.min.y) as usize;
        let col = (x - self.bounds.min.x) as usize;
        Some(row * self.width() as usize + col)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba64> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Rgba64) {
        self.pixels.fill(color);
    }

    /// Copies the pixels of `rect` (clipped to the bounds) in row-major order.
    pub fn region_pixels(&self, rect: Rect) -> Vec<Rgba64> {
        rect.intersect(&self.bounds)
            .points()
            .map(|p| self.pixel(p.x, p.y))
            .collect()
    }
}

impl ImageView for Rgba64Image {
    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Rgba64 {
        self.get(x, y).unwrap_or(Rgba64::TRANSPARENT)
    }
}

impl ImageViewMut for Rgba64Image {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba64) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = color;
        }
    }
}
