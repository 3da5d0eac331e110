//! The A* kernel shared by all solvers. Nodes live in an insertion-ordered arena keyed by
//! [Cell]; parents are arena indices, so reconstructing a path never follows references.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{self, AtomicBool};

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Uniform cost of an orthogonal move.
const MOVE_COST: u32 = 1;

/// Lifecycle of a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Initialized,
    Searching,
    Found,
    NotFound,
    Cancelled,
}

/// Per-cell bookkeeping. Every node in the arena has been inserted into the open set exactly
/// once; it is a member of the open set for as long as it is not closed.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    h: f64,
    g: Option<u32>,
    f: f64,
    parent: Option<usize>,
    sequence: usize,
    closed: bool,
}

impl SearchNode {
    fn set_g(&mut self, g: u32, parent: usize) {
        self.g = Some(g);
        self.f = g as f64 + self.h;
        self.parent = Some(parent);
    }
}

/// Read-only copy of a node, for renderers that want to show the state of a finished search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSnapshot {
    pub cell: Cell,
    pub g: Option<u32>,
    pub h: f64,
    pub f: f64,
    pub parent: Option<Cell>,
    pub closed: bool,
}

#[derive(Clone, Debug)]
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: u32,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, ties go to the node that entered the open set first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Owns all state of one search: the node arena, the open heap and the closed flags. A context
/// can be reused; every search starts by clearing it. After a search the nodes remain available
/// through [nodes](Self::nodes) until the next one.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    nodes: FxIndexMap<Cell, SearchNode>,
    to_see: BinaryHeap<SmallestCostHolder<OrderedFloat<f64>>>,
    state: SearchState,
    next_sequence: usize,
    expanded: usize,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
        self.to_see.clear();
        self.state = SearchState::Initialized;
        self.next_sequence = 0;
        self.expanded = 0;
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes taken off the open set and closed by the last search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn push(&mut self, index: usize, g: u32, f: f64, sequence: usize) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost: OrderedFloat(f),
            cost: g,
            sequence,
            index,
        });
    }

    fn snapshot(&self, cell: &Cell, node: &SearchNode) -> NodeSnapshot {
        NodeSnapshot {
            cell: *cell,
            g: node.g,
            h: node.h,
            f: node.f,
            parent: node
                .parent
                .and_then(|p| self.nodes.get_index(p).map(|(c, _)| *c)),
            closed: node.closed,
        }
    }

    /// All nodes created by the last search, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeSnapshot> + '_ {
        self.nodes.iter().map(|(c, n)| self.snapshot(c, n))
    }

    pub fn node(&self, cell: &Cell) -> Option<NodeSnapshot> {
        self.nodes.get(cell).map(|n| self.snapshot(cell, n))
    }

    fn reverse_path(&self, index: usize) -> Vec<Cell> {
        let mut path = std::iter::successors(Some(index), |&i| {
            self.nodes.get_index(i).and_then(|(_, n)| n.parent)
        })
        .filter_map(|i| self.nodes.get_index(i).map(|(c, _)| *c))
        .collect::<Vec<Cell>>();
        path.reverse();
        path
    }

    /// Runs A* from `start` to `goal` over the open cells of `grid` with unit move costs.
    /// `heuristic` is evaluated once per cell, when the cell is first reached. Endpoints are
    /// assumed to be valid; see [GridSolver](crate::solver::GridSolver) for the checked entry
    /// points. If `cancel` is given it is polled before every expansion.
    pub fn astar<FH>(
        &mut self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        mut heuristic: FH,
        cancel: Option<&AtomicBool>,
    ) -> Result<Option<Vec<Cell>>>
    where
        FH: FnMut(&Cell) -> f64,
    {
        self.reset();
        self.state = SearchState::Searching;
        debug!("Searching from {} to {}", start, goal);

        let h = heuristic(&start);
        self.nodes.insert(
            start,
            SearchNode {
                h,
                g: Some(0),
                f: h,
                parent: None,
                sequence: 0,
                closed: false,
            },
        );
        self.next_sequence = 1;
        self.push(0, 0, h, 0);

        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            if cancel.is_some_and(|flag| flag.load(atomic::Ordering::Relaxed)) {
                warn!(
                    "Search from {} to {} cancelled after {} expansions",
                    start, goal, self.expanded
                );
                self.state = SearchState::Cancelled;
                return Err(Error::Cancelled);
            }
            let cell = {
                let Some((&cell, node)) = self.nodes.get_index_mut(index) else {
                    continue;
                };
                // A node is pushed again whenever its cost improves; skip the outdated entries.
                if node.closed || node.g.map_or(true, |g| cost > g) {
                    continue;
                }
                node.closed = true;
                trace!("Expanding {} (g = {}, f = {:.3})", cell, cost, node.f);
                cell
            };
            self.expanded += 1;

            if cell == goal {
                self.state = SearchState::Found;
                let path = self.reverse_path(index);
                debug!(
                    "Found path of {} cells after {} expansions",
                    path.len(),
                    self.expanded
                );
                return Ok(Some(path));
            }

            let new_g = cost + MOVE_COST;
            for successor in grid.neighbours(&cell) {
                let (n, f, sequence) = match self.nodes.entry(successor) {
                    Vacant(e) => {
                        let h = heuristic(e.key());
                        let n = e.index();
                        let sequence = self.next_sequence;
                        self.next_sequence += 1;
                        let node = e.insert(SearchNode {
                            h,
                            g: None,
                            f: f64::INFINITY,
                            parent: None,
                            sequence,
                            closed: false,
                        });
                        node.set_g(new_g, index);
                        (n, node.f, sequence)
                    }
                    Occupied(mut e) => {
                        let n = e.index();
                        let node = e.get_mut();
                        if node.closed || node.g.is_some_and(|g| new_g >= g) {
                            continue;
                        }
                        node.set_g(new_g, index);
                        (n, node.f, node.sequence)
                    }
                };
                self.push(n, new_g, f, sequence);
            }
        }

        self.state = SearchState::NotFound;
        debug!(
            "No path from {} to {} after {} expansions",
            start, goal, self.expanded
        );
        Ok(None)
    }
}
