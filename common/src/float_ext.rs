pub trait FloatExt: Sized {
    fn approximately_eq(self, other: Self) -> bool;

    fn approximately_eq_within(self, other: Self, tolerance: Self) -> bool;

    /// Rounds to the nearest integer when already within `tolerance` of it,
    /// otherwise returns the value unchanged.
    fn snapped(self, tolerance: Self) -> Self;

    /// True when the value is within `tolerance` of an integer.
    fn is_near_integer(self, tolerance: Self) -> bool;
}

impl FloatExt for f64 {
    #[inline]
    fn approximately_eq(self, other: Self) -> bool {
        self.approximately_eq_within(other, crate::EPSILON)
    }

    #[inline]
    fn approximately_eq_within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() < tolerance
    }

    #[inline]
    fn snapped(self, tolerance: Self) -> Self {
        if self.is_near_integer(tolerance) {
            self.round()
        } else {
            self
        }
    }

    #[inline]
    fn is_near_integer(self, tolerance: Self) -> bool {
        (self - self.round()).abs() < tolerance
    }
}
