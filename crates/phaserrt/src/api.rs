//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Convenience surface for callers in this workspace (CLI, benches,
//!   examples). Breaking changes are allowed.

// Phase plane and dynamics oracle
pub use crate::phase::{AccelBounds, ConstantBounds, FnDynamics, PathDynamics, PhasePoint};
// Search tree and algorithm
pub use crate::rrt::{
    extend, run, steer, try_rrt, Budget, ExhaustReason, NodeId, RrtCfg, RrtError, RunReport,
    SearchNode, SearchStatus, Tree,
};
