//! Air-quality index readings per landmark.

use std::collections::BTreeMap;

use crate::NodeId;

/// `NodeId → AQI` readings from whatever sensor feed (or generator) the
/// application wires in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AqiIndex {
    readings: BTreeMap<NodeId, f64>,
}

impl AqiIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: impl Into<NodeId>, aqi: f64) {
        self.readings.insert(node.into(), aqi);
    }

    pub fn get(&self, node: &str) -> Option<f64> {
        self.readings.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Mean AQI over the nodes of `path` that have a reading.
    ///
    /// Returns 0 for an empty path or when no node on it has a reading.
    pub fn route_average(&self, path: &[NodeId]) -> f64 {
        let (sum, count) = path
            .iter()
            .filter_map(|n| self.get(n.as_str()))
            .fold((0.0, 0usize), |(s, c), aqi| (s + aqi, c + 1));
        if count == 0 { 0.0 } else { sum / count as f64 }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> + '_ {
        self.readings.iter().map(|(n, a)| (n, *a))
    }
}

impl FromIterator<(NodeId, f64)> for AqiIndex {
    fn from_iter<I: IntoIterator<Item = (NodeId, f64)>>(iter: I) -> Self {
        Self { readings: iter.into_iter().collect() }
    }
}
