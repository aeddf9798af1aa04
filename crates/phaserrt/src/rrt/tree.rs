//! Node arena with frontier statistics and path reconstruction.

use std::cmp::Ordering;

use crate::phase::PhasePoint;

use super::error::RrtError;
use super::types::{NodeId, SearchNode};

/// Search tree rooted at a fan of `s = 0` nodes.
///
/// Invariants
/// - Nodes `0..root_count` are the roots; every later node has a parent with
///   strictly smaller `s` (checked on insertion).
/// - `max_reached_s`, `max_reached_sd` never decrease; `solution` is never
///   cleared once set.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<SearchNode>,
    root_count: usize,
    max_reached_s: f64,
    max_reached_sd: f64,
    solution: Option<NodeId>,
}

impl Tree {
    /// `fan_out` roots at `s = 0` with `sd` evenly spaced over
    /// `[sd_begin_min, sd_begin_max]`, both ends included.
    pub fn initialize(
        sd_begin_min: f64,
        sd_begin_max: f64,
        fan_out: usize,
    ) -> Result<Self, RrtError> {
        if fan_out == 0 {
            return Err(RrtError::params("fan_out must be >= 1"));
        }
        if !(sd_begin_min.is_finite() && sd_begin_max.is_finite()) {
            return Err(RrtError::params("start velocity range must be finite"));
        }
        if sd_begin_min < 0.0 {
            return Err(RrtError::params(format!(
                "sd_begin_min must be >= 0, got {sd_begin_min}"
            )));
        }
        if sd_begin_min > sd_begin_max {
            return Err(RrtError::params(format!(
                "empty start velocity range [{sd_begin_min}, {sd_begin_max}]"
            )));
        }
        let nodes = linspace(sd_begin_min, sd_begin_max, fan_out)
            .map(|sd| SearchNode {
                point: PhasePoint::new(0.0, sd),
                parent: None,
            })
            .collect();
        Ok(Self {
            nodes,
            root_count: fan_out,
            max_reached_s: 0.0,
            max_reached_sd: sd_begin_max,
            solution: None,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn roots(&self) -> &[SearchNode] {
        &self.nodes[..self.root_count]
    }

    #[inline]
    pub fn max_reached_s(&self) -> f64 {
        self.max_reached_s
    }

    #[inline]
    pub fn max_reached_sd(&self) -> f64 {
        self.max_reached_sd
    }

    #[inline]
    pub fn solution(&self) -> Option<NodeId> {
        self.solution
    }

    #[inline]
    pub fn found_solution(&self) -> bool {
        self.solution.is_some()
    }

    /// Ids of nodes strictly left of `s`, in insertion order.
    pub(crate) fn ids_left_of(&self, s: f64) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.point.s < s)
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Append `point` as a child of `parent`.
    pub(crate) fn push_child(
        &mut self,
        parent: NodeId,
        point: PhasePoint,
    ) -> Result<NodeId, RrtError> {
        let parent_s = self
            .node(parent)
            .map(|n| n.point.s)
            .ok_or_else(|| RrtError::params(format!("unknown parent node {}", parent.0)))?;
        if point.s.partial_cmp(&parent_s) != Some(Ordering::Greater) {
            return Err(RrtError::DegenerateSegment {
                source_s: parent_s,
                target_s: point.s,
            });
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            point,
            parent: Some(parent),
        });
        Ok(id)
    }

    /// Record a newly reached point: advance `max_reached_s`, and raise the
    /// velocity ceiling by `factor` when `point.sd > threshold · ceiling`.
    pub(crate) fn note_reached(&mut self, point: PhasePoint, threshold: f64, factor: f64) {
        self.max_reached_s = self.max_reached_s.max(point.s);
        if point.sd > threshold * self.max_reached_sd {
            self.max_reached_sd *= factor;
        }
    }

    /// First solution wins; later calls are ignored.
    pub(crate) fn mark_solution(&mut self, id: NodeId) -> bool {
        if self.solution.is_some() {
            return false;
        }
        self.solution = Some(id);
        true
    }

    /// Points from a root to `id`, following parent links iteratively.
    pub fn path_to(&self, id: NodeId) -> Option<Vec<PhasePoint>> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let n = self.node(c)?;
            out.push(n.point);
            cur = n.parent;
            // Parents strictly decrease in `s`, so the walk is bounded by the arena size.
            if out.len() > self.nodes.len() {
                return None;
            }
        }
        out.reverse();
        Some(out)
    }

    /// Feasible profile from a root to the solution node.
    pub fn reconstruct_path(&self) -> Result<Vec<PhasePoint>, RrtError> {
        let id = self.solution.ok_or(RrtError::NoSolutionFound)?;
        self.path_to(id).ok_or(RrtError::NoSolutionFound)
    }

    /// `(parent, child)` point pairs for every non-root node.
    pub fn edges(&self) -> impl Iterator<Item = (PhasePoint, PhasePoint)> + '_ {
        self.nodes.iter().filter_map(move |n| {
            n.parent
                .and_then(|p| self.node(p))
                .map(|p| (p.point, n.point))
        })
    }

    /// Structural checks (roots, parent ordering, sign of `sd`).
    pub fn check_invariants(&self) -> Result<(), String> {
        for (i, n) in self.nodes.iter().enumerate() {
            let is_root_slot = i < self.root_count;
            match n.parent {
                None if is_root_slot => {
                    if n.point.s != 0.0 {
                        return Err(format!("root {i} has s={} != 0", n.point.s));
                    }
                }
                None => return Err(format!("node {i} has no parent but is not a root")),
                Some(_) if is_root_slot => return Err(format!("root {i} has a parent")),
                Some(p) => {
                    if p.0 >= i {
                        return Err(format!("node {i} points forward to parent {}", p.0));
                    }
                    let ps = self.nodes[p.0].point.s;
                    if n.point.s.partial_cmp(&ps) != Some(Ordering::Greater) {
                        return Err(format!(
                            "node {i}: parent s={ps} not < node s={}",
                            n.point.s
                        ));
                    }
                }
            }
            if n.point.sd.is_nan() || n.point.sd < 0.0 {
                return Err(format!("node {i} has sd={} < 0", n.point.sd));
            }
        }
        Ok(())
    }
}

/// `n` evenly spaced values over `[lo, hi]`; `n = 1` yields `lo`.
fn linspace(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let dx = if n > 1 {
        (hi - lo) / ((n - 1) as f64)
    } else {
        0.0
    };
    (0..n).map(move |i| if i + 1 == n && n > 1 { hi } else { lo + dx * (i as f64) })
}
