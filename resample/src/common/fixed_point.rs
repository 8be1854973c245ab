//! Conversion of accumulated channel values to 16-bit fixed point.

/// Denominator of the 16-bit fixed-point representation.
pub const FIXED_POINT_ONE: f64 = 65535.0;

/// Maps a normalized value to 16-bit fixed point, rounding to nearest.
///
/// The input is not assumed to be clamped: anything that rounds above
/// `0xffff` saturates to `0xffff`, anything that rounds to zero or below
/// (including NaN) becomes `0`.
#[inline]
pub fn quantize(value: f64) -> u16 {
    saturate((FIXED_POINT_ONE * value + 0.5).floor())
}

/// Like [`quantize`], for values already expressed on the `0..=0xffff` scale.
#[inline]
pub fn quantize_ffff(value: f64) -> u16 {
    saturate((value + 0.5).floor())
}

#[inline]
fn saturate(rounded: f64) -> u16 {
    if rounded >= FIXED_POINT_ONE {
        u16::MAX
    } else if rounded > 0.0 {
        rounded as u16
    } else {
        0
    }
}
