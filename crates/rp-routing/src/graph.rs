//! Landmark graph representation and builder.
//!
//! # Data layout
//!
//! The adjacency structure is stored in **Compressed Sparse Row (CSR)**
//! format.  Every undirected input edge `(u, v, w)` becomes two directed
//! half-edges, `u→v` and `v→u`, both with weight `w`.  Given a `NodeIx n`,
//! its neighbours occupy the slice:
//!
//! ```text
//! half_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Half-edges are grouped by source with a *stable* sort, so each node's
//! neighbour list keeps the order in which its edges appeared in the input.
//! Breadth-first expansion order in the alternative finder depends on this.
//!
//! # Node indices
//!
//! Nodes are numbered in ascending [`NodeId`] order.  The router breaks
//! distance ties on the lower `NodeIx`, which therefore means the lower id.
//!
//! A `RouteGraph` is immutable once built.  When weights change (new traffic
//! data) build a new one and swap it in; see
//! [`GraphSnapshot`](crate::GraphSnapshot).

use std::collections::BTreeSet;

use tracing::debug;

use rp_core::{Edge, NodeId, NodeIx, TrafficMultipliers};

use crate::{RoutingError, RoutingResult};

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected weighted landmark graph in CSR format.
///
/// Do not construct directly; use [`RouteGraphBuilder`] or
/// [`RouteGraph::from_edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Node keys, sorted ascending.  Indexed by `NodeIx`.
    node_ids: Vec<NodeId>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// CSR row pointer.  Half-edges of node `n` are at positions
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    node_out_start: Vec<u32>,

    /// Destination of each half-edge.
    half_to: Vec<NodeIx>,

    /// Effective weight (km) of each half-edge.
    half_weight: Vec<f64>,

    // ── Source edges ──────────────────────────────────────────────────────
    /// The undirected edges this graph was built from, in input order.
    edges: Vec<Edge>,
}

impl RouteGraph {
    /// Build straight from an edge list.
    pub fn from_edges(edges: &[Edge]) -> RoutingResult<Self> {
        let mut b = RouteGraphBuilder::with_capacity(edges.len());
        for e in edges {
            b.add_edge(e.u.clone(), e.v.clone(), e.weight)?;
        }
        Ok(b.build())
    }

    /// Apply `traffic` to the base edge list and build the effective-weight
    /// graph.  The usual way to produce a fresh snapshot after a traffic
    /// refresh.
    pub fn with_traffic(base: &[Edge], traffic: &TrafficMultipliers) -> RoutingResult<Self> {
        Self::from_edges(&traffic.apply(base))
    }

    /// Construct an empty graph with no nodes or edges.
    pub fn empty() -> Self {
        RouteGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of undirected edges (half of the stored half-edges).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    // ── Node lookup ───────────────────────────────────────────────────────

    /// Dense index of `id`, or `None` if no edge mentions it.
    pub fn index_of(&self, id: &str) -> Option<NodeIx> {
        self.node_ids
            .binary_search_by(|n| n.as_str().cmp(id))
            .ok()
            .map(|i| NodeIx(i as u32))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Key of the node at `ix`.
    ///
    /// # Panics
    /// If `ix` did not come from this graph.
    #[inline]
    pub fn node_id(&self, ix: NodeIx) -> &NodeId {
        &self.node_ids[ix.index()]
    }

    /// All node keys in ascending order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// `(neighbour, weight)` pairs of `node`, in input-edge order.
    ///
    /// Contiguous slice scan — no heap allocation.
    ///
    /// # Panics
    /// If `node` did not come from this graph.
    #[inline]
    pub fn neighbors_ix(&self, node: NodeIx) -> impl Iterator<Item = (NodeIx, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        self.half_to[start..end]
            .iter()
            .copied()
            .zip(self.half_weight[start..end].iter().copied())
    }

    /// `(neighbour id, weight)` pairs of `id`.  Empty for an unknown id and
    /// for an isolated node.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a NodeId, f64)> + 'a {
        self.index_of(id)
            .into_iter()
            .flat_map(move |ix| self.neighbors_ix(ix))
            .map(move |(to, w)| (self.node_id(to), w))
    }

    /// Number of neighbour entries of `node`.
    ///
    /// # Panics
    /// If `node` did not come from this graph.
    #[inline]
    pub fn degree(&self, node: NodeIx) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Effective weight of the edge joining `a` and `b`.
    ///
    /// Half-edges exist in both directions, so this matches either input
    /// orientation.  With parallel edges the first one in input order wins.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let from = self.index_of(a)?;
        let to   = self.index_of(b)?;
        self.neighbors_ix(from)
            .find(|&(n, _)| n == to)
            .map(|(_, w)| w)
    }

    /// The undirected edges, in input order, with effective weights.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Collect edges (and optionally isolated nodes), then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rp_routing::RouteGraphBuilder;
///
/// let mut b = RouteGraphBuilder::new();
/// b.add_edge("CP", "IG", 3.2).unwrap();
/// b.add_node("QUTUB");
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.neighbors("QUTUB").count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct RouteGraphBuilder {
    edges:    Vec<Edge>,
    isolated: BTreeSet<NodeId>,
}

struct HalfEdge {
    from:   NodeIx,
    to:     NodeIx,
    weight: f64,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(edges: usize) -> Self {
        Self { edges: Vec::with_capacity(edges), isolated: BTreeSet::new() }
    }

    /// Add an undirected edge.  Rejects negative, NaN and infinite weights.
    pub fn add_edge(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
        weight: f64,
    ) -> RoutingResult<()> {
        let (u, v) = (u.into(), v.into());
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(RoutingError::InvalidWeight { u, v, weight });
        }
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    /// Register a node that may have no edges.  A node that also appears in
    /// an edge is not duplicated.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.isolated.insert(id.into());
    }

    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Pure and deterministic: the same edges in the same order always give
    /// an equal graph.
    pub fn build(self) -> RouteGraph {
        // Sorted, de-duplicated node set → NodeIx assignment.
        let mut all: BTreeSet<NodeId> = self.isolated;
        for e in &self.edges {
            all.insert(e.u.clone());
            all.insert(e.v.clone());
        }
        let node_ids: Vec<NodeId> = all.into_iter().collect();
        let node_count = node_ids.len();

        let ix = |id: &NodeId| -> NodeIx {
            // Every endpoint was inserted above, so the search always hits.
            let i = node_ids.binary_search(id).unwrap_or_default();
            NodeIx(i as u32)
        };

        let mut raw: Vec<HalfEdge> = Vec::with_capacity(self.edges.len() * 2);
        for e in &self.edges {
            let (u, v) = (ix(&e.u), ix(&e.v));
            raw.push(HalfEdge { from: u, to: v, weight: e.weight });
            raw.push(HalfEdge { from: v, to: u, weight: e.weight });
        }

        // Stable: keeps per-node input order.
        raw.sort_by_key(|h| h.from);

        let half_to:     Vec<NodeIx> = raw.iter().map(|h| h.to).collect();
        let half_weight: Vec<f64>    = raw.iter().map(|h| h.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for h in &raw {
            node_out_start[h.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        debug!(nodes = node_count, edges = self.edges.len(), "built route graph");

        RouteGraph {
            node_ids,
            node_out_start,
            half_to,
            half_weight,
            edges: self.edges,
        }
    }
}
