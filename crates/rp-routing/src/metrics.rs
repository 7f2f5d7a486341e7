//! Distance, travel time and traffic annotation for a path.

use rp_core::config::DEFAULT_AVERAGE_SPEED_KMH;
use rp_core::{NodeId, TrafficLevel, TrafficMultipliers};

use crate::graph::RouteGraph;
use crate::{RoutingError, RoutingResult};

/// Sum of effective weights along `path`, km.
///
/// Paths with fewer than two nodes have distance 0.  A consecutive pair
/// that is not an edge of `graph` (including a pair with an unknown node)
/// is [`RoutingError::BrokenPath`]; no weight is ever guessed.
pub fn path_distance(graph: &RouteGraph, path: &[NodeId]) -> RoutingResult<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .edge_weight(pair[0].as_str(), pair[1].as_str())
            .map(|w| total + w)
            .ok_or_else(|| RoutingError::BrokenPath {
                from: pair[0].clone(),
                to:   pair[1].clone(),
            })
    })
}

/// Minutes to drive `distance_km` at the default city speed (25 km/h),
/// rounded to the nearest minute.
#[inline]
pub fn estimated_minutes(distance_km: f64) -> u32 {
    estimated_minutes_at(distance_km, DEFAULT_AVERAGE_SPEED_KMH)
}

/// Minutes to drive `distance_km` at `speed_kmh`, rounded to the nearest
/// minute.  Negative or non-finite inputs saturate.
#[inline]
pub fn estimated_minutes_at(distance_km: f64, speed_kmh: f64) -> u32 {
    (distance_km / speed_kmh * 60.0).round() as u32
}

/// Worst congestion level over the consecutive pairs of `path`.
/// [`TrafficLevel::Low`] for paths with no edges.
pub fn path_traffic_level(traffic: &TrafficMultipliers, path: &[NodeId]) -> TrafficLevel {
    path.windows(2)
        .map(|pair| traffic.level(&pair[0], &pair[1]))
        .max()
        .unwrap_or_default()
}
