//! CSV loaders for edge lists and landmark tables.
//!
//! # Edge CSV
//!
//! One row per undirected edge, weight in kilometres:
//!
//! ```csv
//! u,v,weight
//! CP,IG,3.2
//! CP,NDR,1.8
//! ```
//!
//! # Landmark CSV
//!
//! ```csv
//! id,name,category,lat,lon
//! CP,Connaught Place,commercial,28.6315,77.2167
//! ```
//!
//! Loaders only parse; weight validation happens when the edges are fed to
//! [`RouteGraphBuilder`](crate::RouteGraphBuilder).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rp_core::{Category, Edge, GeoPoint, Landmark, LandmarkRegistry, NodeId};

use crate::{RoutingError, RoutingResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EdgeRecord {
    u:      String,
    v:      String,
    weight: f64,
}

#[derive(Deserialize)]
struct LandmarkRecord {
    id:       String,
    name:     String,
    category: String,
    lat:      f64,
    lon:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an edge list from a CSV file.
pub fn load_edges_csv(path: &Path) -> RoutingResult<Vec<Edge>> {
    let file = std::fs::File::open(path)?;
    load_edges_reader(file)
}

/// Like [`load_edges_csv`] but accepts any `Read` source.
pub fn load_edges_reader<R: Read>(reader: R) -> RoutingResult<Vec<Edge>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<EdgeRecord>()
        .map(|row| {
            let r = row.map_err(|e| RoutingError::Parse(e.to_string()))?;
            Ok(Edge::new(r.u.trim(), r.v.trim(), r.weight))
        })
        .collect()
}

/// Load a landmark table from a CSV file.
pub fn load_landmarks_csv(path: &Path) -> RoutingResult<LandmarkRegistry> {
    let file = std::fs::File::open(path)?;
    load_landmarks_reader(file)
}

/// Like [`load_landmarks_csv`] but accepts any `Read` source.
pub fn load_landmarks_reader<R: Read>(reader: R) -> RoutingResult<LandmarkRegistry> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut landmarks: Vec<(NodeId, Landmark)> = Vec::new();

    for row in csv_reader.deserialize::<LandmarkRecord>() {
        let r = row.map_err(|e| RoutingError::Parse(e.to_string()))?;
        let category: Category = r.category.parse()?;
        landmarks.push((
            NodeId::from(r.id.trim()),
            Landmark::new(r.name, category, GeoPoint::new(r.lat, r.lon)),
        ));
    }

    Ok(LandmarkRegistry::new(landmarks))
}
