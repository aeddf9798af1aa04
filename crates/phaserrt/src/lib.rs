//! Phase-plane RRT: randomized search for feasible speed profiles.
//!
//! The search grows a tree in the `(s, sd)` phase plane of a fixed path,
//! starting from a fan of admissible start velocities at `s = 0`, until a
//! node reaches the end of the path. Feasibility of each tree edge is
//! checked against acceleration bounds `alpha(s, sd) <= sdd <= beta(s, sd)`
//! supplied by an external oracle (`PathDynamics`).
//!
//! API Policy
//! - The crate is small and project-internal; `api` and `prelude` are the
//!   intended import surfaces. Breaking changes are fine when they improve
//!   clarity.

pub mod api;
pub mod phase;
pub mod rrt;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::phase::{AccelBounds, ConstantBounds, FnDynamics, PathDynamics, PhasePoint};
    pub use crate::rrt::{
        extend, run, steer, try_rrt, Budget, NodeId, RrtCfg, RrtError, RunReport, SearchStatus,
        Tree,
    };
}
