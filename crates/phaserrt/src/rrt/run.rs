//! Scheduler: sample targets, extend, stop on goal or budget.

use std::time::Instant;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::phase::{PathDynamics, PhasePoint};

use super::error::RrtError;
use super::extend::extend;
use super::tree::Tree;
use super::types::{Budget, ExhaustReason, RrtCfg, RunReport, SearchStatus};

/// Grow `tree` until it holds a solution or a budget runs out.
///
/// Each iteration samples `s` either uniformly over `[0, duration]`
/// (probability `cfg.p_explore`) or from a normal centered halfway between
/// the frontier `max_reached_s` and the goal (std-dev
/// `cfg.sigma_frac · duration`, clamped to the path), and `sd` uniformly
/// below the current velocity ceiling. Low `sd` draws additionally probe
/// the goal `(duration, sd_end)` directly.
///
/// Budgets are checked at the top of each iteration only, so one in-flight
/// extension may overrun `time_budget`. Exhaustion is reported through
/// `RunReport::status`, not as an error; errors are reserved for
/// misconfiguration detected before the loop starts.
pub fn run<D, R>(
    tree: &mut Tree,
    dynamics: &D,
    cfg: &RrtCfg,
    budget: Budget,
    rng: &mut R,
) -> Result<RunReport, RrtError>
where
    D: PathDynamics + ?Sized,
    R: Rng,
{
    cfg.validate()?;
    budget.validate(tree.len())?;
    let duration = dynamics.duration();
    if !(duration.is_finite() && duration > 0.0) {
        return Err(RrtError::params(format!(
            "path duration must be finite and > 0, got {duration}"
        )));
    }
    let sigma = cfg.sigma_frac * duration;
    tracing::debug!(
        nodes = tree.len(),
        max_nodes = budget.max_nodes,
        time_budget_ms = budget.time_budget.as_millis() as u64,
        duration,
        step = cfg.step,
        "phase rrt start"
    );

    let start = Instant::now();
    let initial_len = tree.len();
    let mut iterations = 0usize;
    let mut extend_calls = 0usize;
    let status = loop {
        if tree.found_solution() {
            break SearchStatus::Solved;
        }
        if tree.len() > budget.max_nodes {
            break SearchStatus::Exhausted(ExhaustReason::NodeBudget);
        }
        if start.elapsed() > budget.time_budget {
            break SearchStatus::Exhausted(ExhaustReason::TimeBudget);
        }
        if budget.max_iterations.is_some_and(|cap| iterations >= cap) {
            break SearchStatus::Exhausted(ExhaustReason::IterationBudget);
        }
        iterations += 1;

        let s = if rng.gen::<f64>() < cfg.p_explore {
            rng.gen::<f64>() * duration
        } else {
            let z: f64 = rng.sample(StandardNormal);
            (0.5 * (duration + tree.max_reached_s()) + sigma * z).clamp(0.0, duration)
        };
        let sd = rng.gen::<f64>() * tree.max_reached_sd();
        extend(tree, PhasePoint::new(s, sd), dynamics, cfg, rng)?;
        extend_calls += 1;

        if sd < cfg.goal_probe_frac * tree.max_reached_sd() {
            let sd_end = rng.gen::<f64>() * tree.max_reached_sd();
            extend(tree, PhasePoint::new(duration, sd_end), dynamics, cfg, rng)?;
            extend_calls += 1;
        }
    };

    let report = RunReport {
        status,
        iterations,
        extend_calls,
        nodes_added: tree.len() - initial_len,
        elapsed: start.elapsed(),
    };
    tracing::info!(
        status = ?report.status,
        iterations,
        nodes = tree.len(),
        elapsed_ms = report.elapsed.as_millis() as u64,
        "phase rrt finished"
    );
    Ok(report)
}

/// Initialize a tree over `[sd_begin_min, sd_begin_max]`, run it, and return
/// the feasible profile from a root to the goal.
///
/// `NoSolutionFound` when the budget runs out first; callers retry with a
/// larger budget or give up on the request.
pub fn try_rrt<D, R>(
    dynamics: &D,
    sd_begin_min: f64,
    sd_begin_max: f64,
    cfg: &RrtCfg,
    budget: Budget,
    rng: &mut R,
) -> Result<Vec<PhasePoint>, RrtError>
where
    D: PathDynamics + ?Sized,
    R: Rng,
{
    let mut tree = Tree::initialize(sd_begin_min, sd_begin_max, cfg.fan_out)?;
    run(&mut tree, dynamics, cfg, budget, rng)?;
    tree.reconstruct_path()
}
