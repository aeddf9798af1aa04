//! Data types for the search tree, its configuration and run outcome.

use std::time::Duration;

use crate::phase::PhasePoint;

use super::error::RrtError;

/// Index of a node in `Tree`'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Tree node: a phase point and the node it was steered from (`None` for roots).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    pub point: PhasePoint,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Algorithm constants.
#[derive(Clone, Copy, Debug)]
pub struct RrtCfg {
    /// Number of root nodes spread over the start-velocity range.
    pub fan_out: usize,
    /// Max steering sources tried per extension.
    pub k_max: usize,
    /// Sampling step in `s` for the steering check; dominant cost/accuracy knob.
    pub step: f64,
    /// Probability of a uniform `s` sample instead of the frontier-biased one.
    pub p_explore: f64,
    /// Std-dev of the frontier-biased `s` sample, as a fraction of `duration`.
    pub sigma_frac: f64,
    /// Raise the velocity ceiling when a reached `sd` exceeds this fraction of it.
    pub sd_raise_threshold: f64,
    /// Multiplier applied to the velocity ceiling when raised.
    pub sd_raise_factor: f64,
    /// Probe the goal when the sampled `sd` is below this fraction of the ceiling.
    pub goal_probe_frac: f64,
}

impl Default for RrtCfg {
    fn default() -> Self {
        Self {
            fan_out: 42,
            k_max: 10,
            step: 1e-3,
            p_explore: 0.1,
            sigma_frac: 0.1,
            sd_raise_threshold: 0.75,
            sd_raise_factor: 1.25,
            goal_probe_frac: 0.1,
        }
    }
}

impl RrtCfg {
    pub(crate) fn check_step(step: f64) -> Result<(), RrtError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(RrtError::params(format!(
                "step must be finite and > 0, got {step}"
            )));
        }
        Ok(())
    }

    /// Checks used before a run starts.
    pub fn validate(&self) -> Result<(), RrtError> {
        Self::check_step(self.step)?;
        if self.fan_out == 0 {
            return Err(RrtError::params("fan_out must be >= 1"));
        }
        if self.k_max == 0 {
            return Err(RrtError::params("k_max must be >= 1 to make progress"));
        }
        for (name, p) in [
            ("p_explore", self.p_explore),
            ("goal_probe_frac", self.goal_probe_frac),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(RrtError::params(format!("{name} must lie in [0, 1], got {p}")));
            }
        }
        if !(self.sigma_frac.is_finite() && self.sigma_frac > 0.0) {
            return Err(RrtError::params("sigma_frac must be finite and > 0"));
        }
        if !(self.sd_raise_threshold.is_finite() && self.sd_raise_threshold > 0.0) {
            return Err(RrtError::params("sd_raise_threshold must be finite and > 0"));
        }
        if !(self.sd_raise_factor.is_finite() && self.sd_raise_factor >= 1.0) {
            return Err(RrtError::params("sd_raise_factor must be finite and >= 1"));
        }
        Ok(())
    }
}

/// Stopping limits for `run`.
#[derive(Clone, Copy, Debug)]
pub struct Budget {
    /// Stop once the tree holds more than this many nodes (roots included).
    pub max_nodes: usize,
    /// Wall-clock budget, checked at the top of each iteration.
    pub time_budget: Duration,
    /// Optional cap on scheduler iterations, for reproducible runs.
    pub max_iterations: Option<usize>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            max_nodes: 500,
            time_budget: Duration::from_secs(360),
            max_iterations: None,
        }
    }
}

impl Budget {
    pub fn new(max_nodes: usize, time_budget: Duration) -> Self {
        Self {
            max_nodes,
            time_budget,
            max_iterations: None,
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// `tree_len` is the node count when the run starts.
    pub fn validate(&self, tree_len: usize) -> Result<(), RrtError> {
        if self.max_nodes <= tree_len {
            return Err(RrtError::budget(format!(
                "max_nodes={} leaves no room beyond the {tree_len} existing nodes",
                self.max_nodes
            )));
        }
        if self.time_budget.is_zero() {
            return Err(RrtError::budget("time_budget must be > 0"));
        }
        if self.max_iterations == Some(0) {
            return Err(RrtError::budget("max_iterations must be >= 1 when set"));
        }
        Ok(())
    }
}

/// Why a run stopped without a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExhaustReason {
    NodeBudget,
    TimeBudget,
    IterationBudget,
}

/// Terminal state of the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Solved,
    Exhausted(ExhaustReason),
}

/// Summary of one `run` call.
#[derive(Clone, Copy, Debug)]
pub struct RunReport {
    pub status: SearchStatus,
    pub iterations: usize,
    pub extend_calls: usize,
    pub nodes_added: usize,
    pub elapsed: Duration,
}

impl RunReport {
    #[inline]
    pub fn solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(RrtCfg::default().validate().is_ok());
        assert!(Budget::default().validate(42).is_ok());
    }

    #[test]
    fn bad_cfg_is_rejected() {
        let bad = [
            RrtCfg {
                step: 0.0,
                ..RrtCfg::default()
            },
            RrtCfg {
                step: f64::NAN,
                ..RrtCfg::default()
            },
            RrtCfg {
                k_max: 0,
                ..RrtCfg::default()
            },
            RrtCfg {
                p_explore: 1.5,
                ..RrtCfg::default()
            },
            RrtCfg {
                sd_raise_factor: 0.5,
                ..RrtCfg::default()
            },
        ];
        for cfg in bad {
            assert!(
                matches!(cfg.validate(), Err(RrtError::InvalidParams { .. })),
                "{cfg:?}"
            );
        }
    }

    #[test]
    fn budget_must_leave_room_and_time() {
        let b = Budget::new(42, Duration::from_secs(1));
        assert!(matches!(b.validate(42), Err(RrtError::InvalidBudget { .. })));
        let b = Budget::new(100, Duration::ZERO);
        assert!(matches!(b.validate(42), Err(RrtError::InvalidBudget { .. })));
        let b = Budget::new(100, Duration::from_secs(1)).with_max_iterations(0);
        assert!(matches!(b.validate(42), Err(RrtError::InvalidBudget { .. })));
    }
}
