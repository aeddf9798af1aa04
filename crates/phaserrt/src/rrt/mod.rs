//! Phase-plane RRT: tree, steering check, extension and scheduler.
//!
//! Purpose
//! - Find *a* dynamically feasible speed profile from a range of start
//!   velocities at `s = 0` to the end of the path without integrating the
//!   velocity bounds directly (fragile near dynamic singularities).
//!
//! Model
//! - Nodes live in one arena (`Tree`) and point at their parent by index.
//!   Every edge strictly increases `s`, so parent chains are finite and
//!   acyclic.
//! - An edge is a straight segment in the phase plane. It is accepted iff,
//!   sampled every `step` in `s`, the implied acceleration `k · sd` stays in
//!   the oracle's `[alpha, beta]` and `sd` stays positive (`steer`).
//! - `extend` connects a target point from up to `k_max` random existing
//!   nodes to its left; `run` samples targets biased toward the frontier
//!   and the goal until solved or out of budget.
//!
//! Layout
//! - `types.rs` (ids, config, budget, report), `tree.rs` (arena and path
//!   reconstruction), `steer.rs`, `extend.rs`, `run.rs`, `error.rs`.

mod error;
mod extend;
mod run;
mod steer;
mod tree;
mod types;

pub use error::RrtError;
pub use extend::extend;
pub use run::{run, try_rrt};
pub use steer::steer;
pub use tree::Tree;
pub use types::{Budget, ExhaustReason, NodeId, RrtCfg, RunReport, SearchNode, SearchStatus};
