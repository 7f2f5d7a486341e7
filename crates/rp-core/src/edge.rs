//! Undirected weighted edge, the unit of graph input.

use crate::NodeId;

/// One undirected connection between two landmarks.
///
/// `(u, v)` and `(v, u)` denote the same connection.  `weight` is in
/// kilometres: the base road distance, or the effective distance once a
/// traffic multiplier has been applied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: impl Into<NodeId>, v: impl Into<NodeId>, weight: f64) -> Self {
        Self { u: u.into(), v: v.into(), weight }
    }

    /// `true` if this edge joins `a` and `b`, in either orientation.
    #[inline]
    pub fn joins(&self, a: &NodeId, b: &NodeId) -> bool {
        (self.u == *a && self.v == *b) || (self.u == *b && self.v == *a)
    }

    /// `true` if `node` is one of the two endpoints.
    #[inline]
    pub fn touches(&self, node: &str) -> bool {
        self.u.as_str() == node || self.v.as_str() == node
    }
}
