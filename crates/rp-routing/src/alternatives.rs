//! Diverse alternative routes by progressive edge exclusion.
//!
//! Each round runs a breadth-first search from source to target with every
//! edge used by an earlier round removed, and takes the first path the BFS
//! dequeues at the target.  The result is *a* path under the current
//! exclusions, not the shortest remaining one; diversity comes from the
//! exclusions, not from ranking.
//!
//! Because a round never reuses an earlier round's edges, the returned
//! paths are pairwise edge-disjoint.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::debug;

use rp_core::{NodeId, NodeIx};

use crate::graph::RouteGraph;

/// Number of alternatives asked for when the caller has no preference.
pub const DEFAULT_ALTERNATIVES: usize = 3;

/// Undirected edge key: smaller index first.
#[inline]
fn undirected(a: NodeIx, b: NodeIx) -> (NodeIx, NodeIx) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Up to `k` loop-free, pairwise edge-disjoint paths from `source` to
/// `target`, in discovery order.
///
/// Stops early once the exclusions disconnect the endpoints, so fewer than
/// `k` paths is a normal outcome.  Returns nothing when either endpoint is
/// unknown or when `source == target`.
pub fn find_alternatives(graph: &RouteGraph, source: &str, target: &str, k: usize) -> Vec<Vec<NodeId>> {
    let (Some(src), Some(dst)) = (graph.index_of(source), graph.index_of(target)) else {
        return Vec::new();
    };
    if src == dst {
        return Vec::new();
    }

    let mut used: FxHashSet<(NodeIx, NodeIx)> = FxHashSet::default();
    let mut found: Vec<Vec<NodeId>> = Vec::with_capacity(k);

    for round in 0..k {
        let Some(path) = bfs_path(graph, src, dst, &used) else {
            debug!(source, target, round, "alternatives exhausted");
            break;
        };
        used.extend(path.windows(2).map(|w| undirected(w[0], w[1])));
        found.push(path.into_iter().map(|ix| graph.node_id(ix).clone()).collect());
    }

    found
}

/// First path BFS reaches from `src` to `dst` without crossing `excluded`.
///
/// A node is expanded at most once, on dequeue, and never re-entered along
/// the path being extended.
fn bfs_path(
    graph: &RouteGraph,
    src: NodeIx,
    dst: NodeIx,
    excluded: &FxHashSet<(NodeIx, NodeIx)>,
) -> Option<Vec<NodeIx>> {
    let mut expanded = vec![false; graph.node_count()];
    let mut queue: VecDeque<(NodeIx, Vec<NodeIx>)> = VecDeque::new();
    queue.push_back((src, vec![src]));

    while let Some((node, path)) = queue.pop_front() {
        if node == dst {
            return Some(path);
        }
        if expanded[node.index()] {
            continue;
        }
        expanded[node.index()] = true;

        for (neighbor, _) in graph.neighbors_ix(node) {
            if excluded.contains(&undirected(node, neighbor)) || path.contains(&neighbor) {
                continue;
            }
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(&path);
            next.push(neighbor);
            queue.push_back((neighbor, next));
        }
    }

    None
}
