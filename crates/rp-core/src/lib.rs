//! `rp-core` — foundational types for the route planner.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and only a handful of external ones (`rand`, `rstar`,
//! `thiserror`, `tracing`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId` (string key), `NodeIx` (dense index)         |
//! | [`edge`]        | `Edge` — undirected weighted connection               |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`landmark`]    | `Landmark`, `Category`, `LandmarkRegistry` (R-tree)   |
//! | [`traffic`]     | `TrafficMultipliers`, `TrafficLevel`                  |
//! | [`aqi`]         | `AqiIndex`                                            |
//! | [`config`]      | `PlannerConfig`                                       |
//! | [`rng`]         | `SimRng` (seeded, for synthetic data)                 |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod aqi;
pub mod config;
pub mod edge;
pub mod error;
pub mod geo;
pub mod ids;
pub mod landmark;
pub mod rng;
pub mod traffic;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aqi::AqiIndex;
pub use config::PlannerConfig;
pub use edge::Edge;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{NodeId, NodeIx};
pub use landmark::{Category, Landmark, LandmarkRegistry, NearbyLandmark};
pub use rng::SimRng;
pub use traffic::{parse_pair_key, TrafficLevel, TrafficMultipliers, MIN_MULTIPLIER, NEUTRAL_MULTIPLIER};
