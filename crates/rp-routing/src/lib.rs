//! `rp-routing` — landmark graph, shortest and alternative routes.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`graph`]        | `RouteGraph` (CSR), `RouteGraphBuilder`                   |
//! | [`router`]       | `Router` trait, `ShortestPath`, `DijkstraRouter`          |
//! | [`alternatives`] | `find_alternatives` — edge-disjoint BFS routes            |
//! | [`metrics`]      | `path_distance`, `estimated_minutes`, traffic level       |
//! | [`planner`]      | `RoutePlanner`, `RoutePlan`, `RouteResult`, `Conditions`  |
//! | [`snapshot`]     | `GraphSnapshot` — rebuild-then-swap holder                |
//! | [`loader`]       | CSV edge and landmark loaders                             |
//! | [`error`]        | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Flow
//!
//! ```text
//! base edges + traffic ─▶ RouteGraph ─┬─▶ Router (shortest)
//!                                     └─▶ find_alternatives
//!                                               │
//!                              metrics ◀────────┘ ─▶ RoutePlan
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on plan types and enables `rp-core/serde`.|

pub mod alternatives;
pub mod error;
pub mod graph;
pub mod loader;
pub mod metrics;
pub mod planner;
pub mod router;
pub mod snapshot;


pub use alternatives::{find_alternatives, DEFAULT_ALTERNATIVES};
pub use error::{RoutingError, RoutingResult};
pub use graph::{RouteGraph, RouteGraphBuilder};
pub use loader::{load_edges_csv, load_edges_reader, load_landmarks_csv, load_landmarks_reader};
pub use metrics::{estimated_minutes, estimated_minutes_at, path_distance, path_traffic_level};
pub use planner::{alternative_label, Conditions, RoutePlan, RoutePlanner, RouteResult, SHORTEST_LABEL};
pub use router::{dijkstra, DijkstraRouter, Router, ShortestPath};
pub use snapshot::GraphSnapshot;
