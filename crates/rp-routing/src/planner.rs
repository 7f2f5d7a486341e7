//! Route planning: shortest route plus alternatives, annotated for display.
//!
//! A planning request is a pure computation over one immutable
//! [`RouteGraph`] and one set of [`Conditions`].  Nothing is cached between
//! requests.

use rayon::prelude::*;
use tracing::debug;

use rp_core::{AqiIndex, CoreResult, NodeId, PlannerConfig, TrafficLevel, TrafficMultipliers};

use crate::alternatives::find_alternatives;
use crate::graph::RouteGraph;
use crate::metrics::{estimated_minutes_at, path_distance, path_traffic_level};
use crate::router::{DijkstraRouter, Router};
use crate::RoutingResult;

/// Label of the shortest route.
pub const SHORTEST_LABEL: &str = "Dijkstra (Shortest Path)";

/// Label of the `rank`-th alternative (1-based).
pub fn alternative_label(rank: usize) -> String {
    format!("Alternative {rank} (BFS)")
}

// ── Inputs & outputs ──────────────────────────────────────────────────────────

/// Current traffic and air-quality readings.
///
/// The traffic map is used for display levels only; effective weights are
/// already baked into the graph the request runs on.
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    pub traffic: TrafficMultipliers,
    pub aqi: AqiIndex,
}

/// One route, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteResult {
    pub path: Vec<NodeId>,
    /// Effective distance, km.
    pub distance_km: f64,
    /// Estimated drive time, whole minutes.
    pub minutes: u32,
    /// Which algorithm and rank produced the route.
    pub label: String,
    /// Worst congestion level along the route.
    pub traffic: TrafficLevel,
    /// Mean AQI over the route's landmarks that have a reading.
    pub aqi: f64,
}

/// Everything one request returns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoutePlan {
    /// `None` when the endpoints are unknown or not connected.
    pub best: Option<RouteResult>,
    pub alternatives: Vec<RouteResult>,
}

impl RoutePlan {
    pub fn is_empty(&self) -> bool {
        self.best.is_none() && self.alternatives.is_empty()
    }

    /// Best route first, then alternatives in rank order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteResult> + '_ {
        self.best.iter().chain(self.alternatives.iter())
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

/// Runs the router and the alternative finder and annotates their paths.
pub struct RoutePlanner<R: Router = DijkstraRouter> {
    config: PlannerConfig,
    router: R,
}

impl RoutePlanner<DijkstraRouter> {
    /// Planner with the default Dijkstra router.
    pub fn new(config: PlannerConfig) -> CoreResult<Self> {
        Self::with_router(config, DijkstraRouter)
    }
}

impl<R: Router> RoutePlanner<R> {
    pub fn with_router(config: PlannerConfig, router: R) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config, router })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan one request.
    ///
    /// Unknown or unreachable endpoints give an empty plan, not an error.
    /// [`RoutingError::BrokenPath`](crate::RoutingError::BrokenPath) means a
    /// path failed validation against `graph`; only a faulty custom
    /// [`Router`] can cause it.
    pub fn plan(
        &self,
        graph: &RouteGraph,
        conditions: &Conditions,
        source: &str,
        target: &str,
    ) -> RoutingResult<RoutePlan> {
        let shortest = self.router.shortest_path(graph, source, target);

        let best = if shortest.is_found() {
            // Validation only; the router's own distance is reported.
            path_distance(graph, &shortest.path)?;
            Some(self.annotate(shortest.path, shortest.distance, SHORTEST_LABEL.to_owned(), conditions))
        } else {
            None
        };

        let alternatives = find_alternatives(graph, source, target, self.config.max_alternatives)
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                let distance = path_distance(graph, &path)?;
                Ok(self.annotate(path, distance, alternative_label(i + 1), conditions))
            })
            .collect::<RoutingResult<Vec<_>>>()?;

        debug!(
            source,
            target,
            best_km = ?best.as_ref().map(|r| r.distance_km),
            alternatives = alternatives.len(),
            "planned routes"
        );

        Ok(RoutePlan { best, alternatives })
    }

    /// Plan many independent requests against one snapshot, in parallel.
    /// Results are in request order.
    pub fn plan_batch(
        &self,
        graph: &RouteGraph,
        conditions: &Conditions,
        requests: &[(NodeId, NodeId)],
    ) -> Vec<RoutingResult<RoutePlan>> {
        requests
            .par_iter()
            .map(|(source, target)| self.plan(graph, conditions, source.as_str(), target.as_str()))
            .collect()
    }

    fn annotate(
        &self,
        path: Vec<NodeId>,
        distance_km: f64,
        label: String,
        conditions: &Conditions,
    ) -> RouteResult {
        RouteResult {
            minutes: estimated_minutes_at(distance_km, self.config.average_speed_kmh),
            traffic: path_traffic_level(&conditions.traffic, &path),
            aqi: conditions.aqi.route_average(&path),
            distance_km,
            label,
            path,
        }
    }
}
