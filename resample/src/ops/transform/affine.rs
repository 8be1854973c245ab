use std::ops::Mul;

use common::FloatExt;
use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use crate::common::{Error, Point, Rect, Result};

/// Mapped corners closer than this to an integer are treated as lying on it.
const EDGE_SNAP: f64 = 1e-9;

/// 2D affine transform stored as the top two rows of a 3x3 matrix, row-major:
///
/// ```text
/// | m[0] m[1] m[2] |
/// | m[3] m[4] m[5] |
/// ```
///
/// `(x, y)` maps to `(m[0]*x + m[1]*y + m[2], m[3]*x + m[4]*y + m[5])`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine(pub [f64; 6]);

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    pub const fn new(m: [f64; 6]) -> Self {
        Self(m)
    }

    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self([1.0, 0.0, tx, 0.0, 1.0, ty])
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self([sx, 0.0, 0.0, 0.0, sy, 0.0])
    }

    /// Counter-clockwise rotation by `angle` radians about the origin.
    pub fn rotation(angle: f64) -> Self {
        DAffine2::from_angle(angle).into()
    }

    #[inline]
    pub fn apply(&self, p: DVec2) -> DVec2 {
        let m = &self.0;
        DVec2::new(
            m[0] * p.x + m[1] * p.y + m[2],
            m[3] * p.x + m[4] * p.y + m[5],
        )
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0] * m[4] - m[3] * m[1]
    }

    /// Cofactor inverse. A singular matrix yields infinite or NaN
    /// coefficients; use [`try_inverse`](Self::try_inverse) to detect it.
    pub fn inverse(&self) -> Affine {
        let m = &self.0;
        let m00 = m[4];
        let m01 = -m[1];
        let m02 = m[5] * m[1] - m[4] * m[2];
        let m10 = -m[3];
        let m11 = m[0];
        let m12 = m[3] * m[2] - m[5] * m[0];

        let det = m00 * m11 - m10 * m01;

        Affine([
            m00 / det,
            m01 / det,
            m02 / det,
            m10 / det,
            m11 / det,
            m12 / det,
        ])
    }

    /// # Errors
    /// Returns [`Error::SingularTransform`] if the matrix has no finite inverse.
    pub fn try_inverse(&self) -> Result<Affine> {
        let determinant = self.determinant();
        let inverse = self.inverse();
        if determinant == 0.0 || !inverse.is_finite() {
            return Err(Error::SingularTransform { determinant });
        }
        Ok(inverse)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Smallest pixel rectangle containing `rect` mapped through `self`.
    ///
    /// Each corner is floored for the minimum. For the exclusive maximum a
    /// corner that lands on an integer is used as-is, any other corner is
    /// floored and incremented.
    pub fn bounding_box(&self, rect: &Rect) -> Rect {
        let corners = [
            Point::new(rect.min.x, rect.min.y),
            Point::new(rect.max.x, rect.min.y),
            Point::new(rect.min.x, rect.max.y),
            Point::new(rect.max.x, rect.max.y),
        ];

        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for corner in corners {
            let p = self.apply(corner.as_dvec2());
            let p = DVec2::new(p.x.snapped(EDGE_SNAP), p.y.snapped(EDGE_SNAP));
            min = min.min(p.floor());
            max = max.max(exclusive_edge(p));
        }

        Rect {
            min: min.as_ivec2(),
            max: max.as_ivec2(),
        }
    }
}

#[inline]
fn exclusive_edge(p: DVec2) -> DVec2 {
    let edge = |v: f64| if v.fract() == 0.0 { v } else { v.floor() + 1.0 };
    DVec2::new(edge(p.x), edge(p.y))
}

impl From<DAffine2> for Affine {
    fn from(a: DAffine2) -> Self {
        Affine([
            a.matrix2.x_axis.x,
            a.matrix2.y_axis.x,
            a.translation.x,
            a.matrix2.x_axis.y,
            a.matrix2.y_axis.y,
            a.translation.y,
        ])
    }
}

impl From<Affine> for DAffine2 {
    fn from(a: Affine) -> Self {
        let m = a.0;
        DAffine2::from_cols(
            DVec2::new(m[0], m[3]),
            DVec2::new(m[1], m[4]),
            DVec2::new(m[2], m[5]),
        )
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        (DAffine2::from(self) * DAffine2::from(rhs)).into()
    }
}
