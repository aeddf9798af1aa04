//! Small value types for the phase plane.

use nalgebra::Vector2;

/// Point `(s, sd)` in the phase plane of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhasePoint {
    pub s: f64,
    pub sd: f64,
}

impl PhasePoint {
    #[inline]
    pub fn new(s: f64, sd: f64) -> Self {
        Self { s, sd }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.s, self.sd)
    }

    #[inline]
    pub fn from_vec2(v: Vector2<f64>) -> Self {
        Self { s: v.x, sd: v.y }
    }

    /// Point at parameter `t` on the straight segment `self → other`
    /// (`t = 0` is `self`, `t = 1` is `other`).
    #[inline]
    pub fn lerp(self, other: PhasePoint, t: f64) -> PhasePoint {
        let a = self.to_vec2();
        PhasePoint::from_vec2(a + (other.to_vec2() - a) * t)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.s.is_finite() && self.sd.is_finite()
    }
}

impl From<(f64, f64)> for PhasePoint {
    fn from((s, sd): (f64, f64)) -> Self {
        Self { s, sd }
    }
}

/// Closed interval `[alpha, beta]` of admissible path accelerations `sdd`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelBounds {
    pub alpha: f64,
    pub beta: f64,
}

impl AccelBounds {
    #[inline]
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// `alpha <= sdd <= beta`; false for an empty interval or NaN input.
    #[inline]
    pub fn admits(&self, sdd: f64) -> bool {
        self.alpha <= sdd && sdd <= self.beta
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(
            self.alpha.partial_cmp(&self.beta),
            None | Some(std::cmp::Ordering::Greater)
        )
    }
}

impl From<(f64, f64)> for AccelBounds {
    fn from((alpha, beta): (f64, f64)) -> Self {
        Self { alpha, beta }
    }
}
