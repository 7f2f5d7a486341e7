//! Traffic multipliers and congestion levels.
//!
//! A multiplier scales an edge's base distance into its *effective* weight.
//! The map is keyed by ordered pair but every write lands on both
//! orientations with the same value, so the graph is never treated as
//! directed.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use crate::{CoreError, CoreResult, Edge, NodeId};

/// Smallest multiplier the map will store.  Lower inputs are clamped.
pub const MIN_MULTIPLIER: f64 = 0.8;

/// Multiplier assumed for a pair with no entry.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

// ── TrafficLevel ──────────────────────────────────────────────────────────────

/// Coarse congestion bucket for display.  Ordered from best to worst.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    /// `< 1.3` low, `< 1.8` medium, anything else high.
    pub fn classify(multiplier: f64) -> Self {
        if multiplier < 1.3 {
            TrafficLevel::Low
        } else if multiplier < 1.8 {
            TrafficLevel::Medium
        } else {
            TrafficLevel::High
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrafficLevel::Low    => "low",
            TrafficLevel::Medium => "medium",
            TrafficLevel::High   => "high",
        };
        f.write_str(s)
    }
}

// ── TrafficMultipliers ────────────────────────────────────────────────────────

/// Symmetric `(u, v) → multiplier` map.
///
/// With the `serde` feature it serializes as a list of `(u, v, multiplier)`
/// entries, one per undirected pair, and deserializes through
/// [`insert`](Self::insert).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(NodeId, NodeId, f64)>", into = "Vec<(NodeId, NodeId, f64)>")
)]
pub struct TrafficMultipliers {
    by_pair: BTreeMap<(NodeId, NodeId), f64>,
}

impl TrafficMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ordered pairs (each undirected entry counts twice,
    /// once for a self-loop).
    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }

    /// Store `multiplier` for both `u-v` and `v-u`.
    ///
    /// Values below [`MIN_MULTIPLIER`] are clamped up; non-finite values are
    /// rejected.  Returns the value actually stored.
    pub fn insert(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
        multiplier: f64,
    ) -> CoreResult<f64> {
        let u = u.into();
        let v = v.into();
        if !multiplier.is_finite() {
            return Err(CoreError::InvalidMultiplier {
                key: format!("{u}-{v}"),
                value: multiplier,
            });
        }
        let stored = if multiplier < MIN_MULTIPLIER {
            warn!(%u, %v, multiplier, "traffic multiplier below minimum; clamping");
            MIN_MULTIPLIER
        } else {
            multiplier
        };
        self.by_pair.insert((v.clone(), u.clone()), stored);
        self.by_pair.insert((u, v), stored);
        Ok(stored)
    }

    /// Like [`insert`](Self::insert) with a `"u-v"` key.
    pub fn insert_keyed(&mut self, key: &str, multiplier: f64) -> CoreResult<f64> {
        let (u, v) = parse_pair_key(key)?;
        self.insert(u, v, multiplier)
    }

    /// Multiplier for the pair in either orientation, or
    /// [`NEUTRAL_MULTIPLIER`] when the pair is unknown.
    pub fn get(&self, u: &NodeId, v: &NodeId) -> f64 {
        self.by_pair
            .get(&(u.clone(), v.clone()))
            .or_else(|| self.by_pair.get(&(v.clone(), u.clone())))
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// Congestion bucket for the pair.
    pub fn level(&self, u: &NodeId, v: &NodeId) -> TrafficLevel {
        TrafficLevel::classify(self.get(u, v))
    }

    /// Effective-weight copy of `edges`: each base weight times its
    /// multiplier.  Input order is preserved.
    pub fn apply(&self, edges: &[Edge]) -> Vec<Edge> {
        edges
            .iter()
            .map(|e| Edge {
                u: e.u.clone(),
                v: e.v.clone(),
                weight: e.weight * self.get(&e.u, &e.v),
            })
            .collect()
    }

    /// Ordered pairs and their multipliers, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> + '_ {
        self.by_pair.iter().map(|((u, v), m)| (u, v, *m))
    }
}

impl TryFrom<Vec<(NodeId, NodeId, f64)>> for TrafficMultipliers {
    type Error = CoreError;

    /// Later entries for the same pair overwrite earlier ones in both
    /// orientations.
    fn try_from(entries: Vec<(NodeId, NodeId, f64)>) -> CoreResult<Self> {
        let mut traffic = TrafficMultipliers::new();
        for (u, v, m) in entries {
            traffic.insert(u, v, m)?;
        }
        Ok(traffic)
    }
}

impl From<TrafficMultipliers> for Vec<(NodeId, NodeId, f64)> {
    fn from(traffic: TrafficMultipliers) -> Self {
        traffic
            .by_pair
            .into_iter()
            .filter(|((u, v), _)| u <= v)
            .map(|((u, v), m)| (u, v, m))
            .collect()
    }
}

/// Split a `"u-v"` key.  Node ids therefore must not contain `-`.
pub fn parse_pair_key(key: &str) -> CoreResult<(NodeId, NodeId)> {
    match key.split_once('-') {
        Some((u, v)) if !u.is_empty() && !v.is_empty() && !v.contains('-') => {
            Ok((NodeId::from(u), NodeId::from(v)))
        }
        _ => Err(CoreError::InvalidKey(key.to_owned())),
    }
}
