//! Errors surfaced by the phase-plane search.
//!
//! Infeasible segments are not errors (`steer` returns `Ok(false)`), and an
//! exhausted budget is a normal `RunReport` status. What remains here is
//! misconfiguration, internal contract violations, and asking for a path
//! that does not exist.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum RrtError {
    /// Steering segment with `target.s <= source.s` (zero or negative width).
    DegenerateSegment { source_s: f64, target_s: f64 },
    /// The tree holds no solution node.
    NoSolutionFound,
    /// Node/time/iteration budget that cannot start a search.
    InvalidBudget { reason: String },
    /// Bad configuration, start-velocity range, or path duration.
    InvalidParams { reason: String },
}

impl RrtError {
    pub(crate) fn budget(reason: impl Into<String>) -> Self {
        Self::InvalidBudget {
            reason: reason.into(),
        }
    }

    pub(crate) fn params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RrtError::DegenerateSegment { source_s, target_s } => write!(
                f,
                "degenerate steering segment: source s={source_s} must be < target s={target_s}"
            ),
            RrtError::NoSolutionFound => write!(f, "no feasible profile found"),
            RrtError::InvalidBudget { reason } => write!(f, "invalid search budget: {reason}"),
            RrtError::InvalidParams { reason } => write!(f, "invalid search params: {reason}"),
        }
    }
}

impl std::error::Error for RrtError {}
