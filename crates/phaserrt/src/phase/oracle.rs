//! Dynamics oracle trait and two small implementations.
//!
//! The search calls `bounds` many times per extension (`O(k_max · Δs / step)`),
//! so implementations should be cheap and must be pure: same input, same
//! output, no ordering constraints between calls.

use super::types::AccelBounds;

/// Capability set the search needs from the path and its dynamics.
pub trait PathDynamics {
    /// Total arc length of the path; the goal is any node with `s >= duration`.
    fn duration(&self) -> f64;

    /// Admissible path-acceleration interval at `(s, sd)`.
    fn bounds(&self, s: f64, sd: f64) -> AccelBounds;
}

impl<T: PathDynamics + ?Sized> PathDynamics for &T {
    #[inline]
    fn duration(&self) -> f64 {
        (**self).duration()
    }
    #[inline]
    fn bounds(&self, s: f64, sd: f64) -> AccelBounds {
        (**self).bounds(s, sd)
    }
}

/// Same `[alpha, beta]` everywhere on a path of length `duration`.
#[derive(Clone, Copy, Debug)]
pub struct ConstantBounds {
    pub duration: f64,
    pub bounds: AccelBounds,
}

impl ConstantBounds {
    pub fn new(duration: f64, alpha: f64, beta: f64) -> Self {
        Self {
            duration,
            bounds: AccelBounds::new(alpha, beta),
        }
    }
}

impl PathDynamics for ConstantBounds {
    #[inline]
    fn duration(&self) -> f64 {
        self.duration
    }
    #[inline]
    fn bounds(&self, _s: f64, _sd: f64) -> AccelBounds {
        self.bounds
    }
}

/// Closure adapter: `FnDynamics::new(duration, |s, sd| AccelBounds::new(..))`.
#[derive(Clone, Copy)]
pub struct FnDynamics<F> {
    duration: f64,
    f: F,
}

impl<F> FnDynamics<F>
where
    F: Fn(f64, f64) -> AccelBounds,
{
    pub fn new(duration: f64, f: F) -> Self {
        Self { duration, f }
    }
}

impl<F> std::fmt::Debug for FnDynamics<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDynamics")
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl<F> PathDynamics for FnDynamics<F>
where
    F: Fn(f64, f64) -> AccelBounds,
{
    #[inline]
    fn duration(&self) -> f64 {
        self.duration
    }
    #[inline]
    fn bounds(&self, s: f64, sd: f64) -> AccelBounds {
        (self.f)(s, sd)
    }
}
