//! Phase-plane values and the dynamics-oracle seam.
//!
//! Purpose
//! - `PhasePoint` is the `(s, sd)` value stored in search nodes.
//! - `PathDynamics` is the only view the search has of the robot and the
//!   path: total arc length plus acceleration bounds at a phase point.
//!
//! Conventions
//! - `s` is arc length in `[0, duration]`, `sd = ds/dt >= 0`.
//! - Bounds are on `sdd`: a motion through `(s, sd)` with path acceleration
//!   `sdd` is admissible iff `alpha <= sdd <= beta`. The oracle may report
//!   `alpha > beta` (empty interval) where no acceleration is admissible.

mod oracle;
mod types;

pub use oracle::{ConstantBounds, FnDynamics, PathDynamics};
pub use types::{AccelBounds, PhasePoint};
