//! Steering check: is a straight phase-plane segment dynamically feasible?

use std::cmp::Ordering;

use crate::phase::{PathDynamics, PhasePoint};

use super::error::RrtError;
use super::types::RrtCfg;

/// Check the straight segment `source → target` against the oracle's bounds.
///
/// Along the segment `sd(s) = source.sd + k (s − source.s)` with constant
/// slope `k = d sd / d s`, so the implied path acceleration is
/// `sdd = sd · d sd/ds = k · sd(s)`. The segment is sampled at
/// `s_i = source.s + i · step` on the half-open range `[source.s, target.s)`;
/// each sample must have `sd > 0` and `alpha <= k · sd <= beta`.
///
/// Returns `Ok(false)` at the first infeasible sample. Errors:
/// - `DegenerateSegment` if `target.s <= source.s` (no width, or reversed).
/// - `InvalidParams` for a non-positive `step` or non-finite endpoints.
pub fn steer<D>(
    source: PhasePoint,
    target: PhasePoint,
    step: f64,
    dynamics: &D,
) -> Result<bool, RrtError>
where
    D: PathDynamics + ?Sized,
{
    RrtCfg::check_step(step)?;
    if !(source.is_finite() && target.is_finite()) {
        return Err(RrtError::params(format!(
            "non-finite steering endpoints {source:?} → {target:?}"
        )));
    }
    let d = target.to_vec2() - source.to_vec2();
    if d.x.partial_cmp(&0.0) != Some(Ordering::Greater) {
        return Err(RrtError::DegenerateSegment {
            source_s: source.s,
            target_s: target.s,
        });
    }
    let k = d.y / d.x;
    // Index-based sampling avoids drift from repeated `s += step`.
    let n = (d.x / step).ceil() as usize;
    for i in 0..n {
        let ds = (i as f64) * step;
        if ds >= d.x {
            break;
        }
        let s = source.s + ds;
        let sd = source.sd + k * ds;
        if sd <= 0.0 {
            return Ok(false);
        }
        if !dynamics.bounds(s, sd).admits(k * sd) {
            return Ok(false);
        }
    }
    Ok(true)
}
