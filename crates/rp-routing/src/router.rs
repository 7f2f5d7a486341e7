//! Shortest-path trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner calls the solver through the [`Router`] trait, so an
//! application can swap in A* or a precomputed table without touching the
//! planner.  The default [`DijkstraRouter`] is plenty for a landmark graph.
//!
//! # Outcomes
//!
//! An unknown or unreachable endpoint is a normal result, not an error:
//! [`ShortestPath::not_found`] (empty path, infinite distance).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::trace;

use rp_core::{NodeId, NodeIx};

use crate::graph::RouteGraph;

// ── ShortestPath ──────────────────────────────────────────────────────────────

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    /// Nodes from source to target inclusive.  Empty when no path exists.
    pub path: Vec<NodeId>,
    /// Sum of effective weights along `path`, km.  `f64::INFINITY` when no
    /// path exists.
    pub distance: f64,
}

impl ShortestPath {
    pub fn not_found() -> Self {
        Self { path: Vec::new(), distance: f64::INFINITY }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one planner can serve batched
/// requests on Rayon worker threads.
pub trait Router: Send + Sync {
    /// Minimum-weight path from `from` to `to` over `graph`.
    fn shortest_path(&self, graph: &RouteGraph, from: &str, to: &str) -> ShortestPath;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Label-setting Dijkstra over effective weights.
///
/// Equal tentative distances are settled lowest-`NodeIx` first.  Node
/// indices follow id order, so the outcome is reproducible for a given edge
/// list regardless of hashing or platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, graph: &RouteGraph, from: &str, to: &str) -> ShortestPath {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key.  Weights are validated finite and non-negative at build time,
/// so `total_cmp` agrees with the numeric order on every value we push.
#[derive(Copy, Clone, Debug)]
struct Cost(f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Shortest path from `from` to `to`.  Free-function form of
/// [`DijkstraRouter`].
pub fn dijkstra(graph: &RouteGraph, from: &str, to: &str) -> ShortestPath {
    let (Some(source), Some(target)) = (graph.index_of(from), graph.index_of(to)) else {
        trace!(from, to, "endpoint not in graph");
        return ShortestPath::not_found();
    };

    if source == target {
        return ShortestPath { path: vec![graph.node_id(source).clone()], distance: 0.0 };
    }

    let n = graph.node_count();
    // dist[v] = best known distance to v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = predecessor on the best known path; INVALID if unreached.
    let mut prev    = vec![NodeIx::INVALID; n];
    let mut settled = vec![false; n];

    dist[source.index()] = 0.0;

    // Min-heap: Reverse turns BinaryHeap (max) into a min-heap.  The NodeIx
    // secondary key decides ties.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeIx)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), source)));

    while let Some(Reverse((Cost(d), node))) = heap.pop() {
        // Stale entry for a node already settled at a lower distance.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        trace!(node = %graph.node_id(node), distance = d, "settled");

        if node == target {
            return ShortestPath { path: reconstruct(graph, &prev, target), distance: d };
        }

        for (neighbor, weight) in graph.neighbors_ix(node) {
            if settled[neighbor.index()] {
                continue;
            }
            let candidate = d + weight;
            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev[neighbor.index()] = node;
                heap.push(Reverse((Cost(candidate), neighbor)));
            }
        }
    }

    // Heap drained without settling the target: everything left is at
    // infinite distance.
    ShortestPath::not_found()
}

fn reconstruct(graph: &RouteGraph, prev: &[NodeIx], target: NodeIx) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cur = target;
    while cur != NodeIx::INVALID {
        path.push(graph.node_id(cur).clone());
        cur = prev[cur.index()];
    }
    path.reverse();
    path
}
