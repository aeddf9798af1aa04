//! Tree extension toward a sampled target point.

use rand::seq::index;
use rand::Rng;

use crate::phase::{PathDynamics, PhasePoint};

use super::error::RrtError;
use super::steer::steer;
use super::tree::Tree;
use super::types::RrtCfg;

/// Try to connect `target` to the tree; returns the number of nodes added.
///
/// Steering sources are the nodes strictly left of `target.s`, subsampled
/// uniformly without replacement down to `cfg.k_max`. Every source that
/// steers successfully gets its own child at `target` (siblings sharing a
/// point are kept for path diversity). After each addition the frontier
/// statistics are updated, and a child at `s >= duration` becomes the
/// solution unless one exists already.
pub fn extend<D, R>(
    tree: &mut Tree,
    target: PhasePoint,
    dynamics: &D,
    cfg: &RrtCfg,
    rng: &mut R,
) -> Result<usize, RrtError>
where
    D: PathDynamics + ?Sized,
    R: Rng,
{
    let mut candidates = tree.ids_left_of(target.s);
    if candidates.len() > cfg.k_max {
        candidates = index::sample(rng, candidates.len(), cfg.k_max)
            .into_iter()
            .map(|i| candidates[i])
            .collect();
    }
    let duration = dynamics.duration();
    let mut added = 0;
    for parent in candidates {
        let Some(source) = tree.node(parent).map(|n| n.point) else {
            continue;
        };
        if !steer(source, target, cfg.step, dynamics)? {
            continue;
        }
        let id = tree.push_child(parent, target)?;
        added += 1;
        if target.s >= duration && tree.mark_solution(id) {
            tracing::debug!(node = id.0, sd = target.sd, "solution reached");
        }
        tree.note_reached(target, cfg.sd_raise_threshold, cfg.sd_raise_factor);
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{AccelBounds, ConstantBounds, FnDynamics};
    use rand::{rngs::StdRng, SeedableRng};

    fn cfg(k_max: usize) -> RrtCfg {
        RrtCfg {
            k_max,
            step: 1e-2,
            ..RrtCfg::default()
        }
    }

    #[test]
    fn zero_k_max_never_adds() {
        let mut tree = Tree::initialize(1.0, 5.0, 42).unwrap();
        let o = ConstantBounds::new(10.0, -100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(0);
        let n = extend(&mut tree, PhasePoint::new(5.0, 2.0), &o, &cfg(0), &mut rng).unwrap();
        assert_eq!(n, 0);
        assert_eq!(tree.len(), 42);
        assert_eq!(tree.max_reached_s(), 0.0);
    }

    #[test]
    fn subsample_bounds_new_siblings() {
        let mut tree = Tree::initialize(1.0, 5.0, 42).unwrap();
        let o = ConstantBounds::new(10.0, -100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(1);
        let target = PhasePoint::new(1.0, 2.0);
        let n = extend(&mut tree, target, &o, &cfg(10), &mut rng).unwrap();
        // All roots steer under loose bounds; only k_max of them are tried.
        assert_eq!(n, 10);
        assert_eq!(tree.len(), 52);
        let children: Vec<_> = tree.nodes()[42..].iter().collect();
        assert!(children.iter().all(|c| c.point == target));
        let mut parents: Vec<_> = children.iter().map(|c| c.parent.unwrap()).collect();
        parents.sort();
        parents.dedup();
        assert_eq!(parents.len(), 10, "distinct sources, no replacement");
        assert_eq!(tree.max_reached_s(), 1.0);
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn only_nodes_left_of_target_are_sources() {
        let mut tree = Tree::initialize(1.0, 1.0, 1).unwrap();
        let o = ConstantBounds::new(4.0, -100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(2);
        let c = cfg(10);
        assert_eq!(extend(&mut tree, PhasePoint::new(2.0, 1.0), &o, &c, &mut rng), Ok(1));
        // Target at s = 1 can only connect from the root.
        assert_eq!(extend(&mut tree, PhasePoint::new(1.0, 1.0), &o, &c, &mut rng), Ok(1));
        assert_eq!(tree.nodes()[2].parent.unwrap().0, 0);
        // Target at s = 0 has no candidates at all.
        assert_eq!(extend(&mut tree, PhasePoint::new(0.0, 1.0), &o, &c, &mut rng), Ok(0));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn infeasible_target_leaves_tree_untouched() {
        let mut tree = Tree::initialize(2.0, 2.0, 3).unwrap();
        let o = ConstantBounds::new(5.0, 0.0, 0.0);
        let mut rng = StdRng::seed_from_u64(3);
        let n = extend(&mut tree, PhasePoint::new(5.0, 0.0), &o, &cfg(10), &mut rng).unwrap();
        assert_eq!(n, 0);
        assert_eq!(tree.len(), 3);
        assert!(!tree.found_solution());
        assert_eq!(tree.max_reached_sd(), 2.0);
    }

    #[test]
    fn goal_connection_sets_first_solution_only() {
        let mut tree = Tree::initialize(1.0, 2.0, 4).unwrap();
        let o = ConstantBounds::new(3.0, -100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(4);
        let n = extend(&mut tree, PhasePoint::new(3.0, 1.0), &o, &cfg(10), &mut rng).unwrap();
        assert_eq!(n, 4);
        let first = tree.solution().unwrap();
        assert_eq!(first.0, 4, "first added child wins");
        extend(&mut tree, PhasePoint::new(3.0, 1.5), &o, &cfg(10), &mut rng).unwrap();
        assert_eq!(tree.solution(), Some(first));
        let path = tree.reconstruct_path().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[1], PhasePoint::new(3.0, 1.0));
    }

    #[test]
    fn velocity_ceiling_grows_per_success() {
        let mut tree = Tree::initialize(1.0, 1.0, 2).unwrap();
        let o = FnDynamics::new(10.0, |_s, _sd| AccelBounds::new(-100.0, 100.0));
        let mut rng = StdRng::seed_from_u64(5);
        // sd = 0.9 > 0.75 · 1.0 → 1.25; then 0.9 > 0.75 · 1.25 = 0.9375? no.
        extend(&mut tree, PhasePoint::new(1.0, 0.9), &o, &cfg(10), &mut rng).unwrap();
        assert!((tree.max_reached_sd() - 1.25).abs() < 1e-12);
    }
}
