//! Landmark metadata and spatial lookup.
//!
//! Landmarks are the display side of a graph node: a name, a category and a
//! coordinate.  The routing crates treat them as opaque; only presentation
//! and the nearby query read them.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[lat, lon]` answers "which landmark is
//! closest to this coordinate" and narrows the candidates for
//! [`LandmarkRegistry::nearby`] before the exact haversine check.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::{CoreError, GeoPoint, NodeId};

// ── Category ──────────────────────────────────────────────────────────────────

/// Kind of place a landmark is.  Used for map styling only.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Commercial,
    Monument,
    Hospital,
    Transport,
    Residential,
    Education,
    #[default]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Commercial  => "commercial",
            Category::Monument    => "monument",
            Category::Hospital    => "hospital",
            Category::Transport   => "transport",
            Category::Residential => "residential",
            Category::Education   => "education",
            Category::Other       => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commercial"  => Ok(Category::Commercial),
            "monument"    => Ok(Category::Monument),
            "hospital"    => Ok(Category::Hospital),
            "transport"   => Ok(Category::Transport),
            "residential" => Ok(Category::Residential),
            "education"   => Ok(Category::Education),
            "other"       => Ok(Category::Other),
            other => Err(CoreError::Parse(format!("unknown landmark category {other:?}"))),
        }
    }
}

// ── Landmark ──────────────────────────────────────────────────────────────────

/// Display metadata for one node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    pub name: String,
    pub category: Category,
    pub position: GeoPoint,
}

impl Landmark {
    pub fn new(name: impl Into<String>, category: Category, position: GeoPoint) -> Self {
        Self { name: name.into(), category, position }
    }
}

/// One hit from [`LandmarkRegistry::nearby`].
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyLandmark<'a> {
    pub id: &'a NodeId,
    pub landmark: &'a Landmark,
    pub distance_km: f64,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct LandmarkEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for LandmarkEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LandmarkEntry {
    /// Squared Euclidean distance in lat/lon space.  Only used for ordering
    /// candidates; reported distances are always haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── LandmarkRegistry ──────────────────────────────────────────────────────────

/// Id → [`Landmark`] map with a spatial index.
///
/// Built once from a complete landmark list; there is no in-place insert, so
/// the map and the R-tree can never disagree.
pub struct LandmarkRegistry {
    landmarks: BTreeMap<NodeId, Landmark>,
    spatial_idx: RTree<LandmarkEntry>,
}

impl LandmarkRegistry {
    /// Build the registry.  A repeated id keeps the last landmark given.
    pub fn new<I>(landmarks: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Landmark)>,
    {
        let landmarks: BTreeMap<NodeId, Landmark> = landmarks.into_iter().collect();
        let entries: Vec<LandmarkEntry> = landmarks
            .iter()
            .map(|(id, lm)| LandmarkEntry {
                point: [lm.position.lat, lm.position.lon],
                id: id.clone(),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);
        Self { landmarks, spatial_idx }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    /// Display name for `id`, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a NodeId) -> &'a str {
        self.get(id.as_str()).map_or(id.as_str(), |lm| lm.name.as_str())
    }

    /// All landmarks in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Landmark)> + '_ {
        self.landmarks.iter()
    }

    /// Id of the landmark nearest to `pos`.  `None` only when empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<&NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| &e.id)
    }

    /// Other landmarks within `max_km` (haversine) of landmark `id`, sorted
    /// by ascending distance, then id.  Unknown `id` gives an empty list.
    pub fn nearby(&self, id: &str, max_km: f64) -> Vec<NearbyLandmark<'_>> {
        let Some(origin) = self.landmarks.get(id) else {
            return Vec::new();
        };
        let center = origin.position;
        let (d_lat, d_lon) = center.degree_box(max_km);
        // Anything inside the radius is inside the degree box, so once the
        // candidate stream leaves the box's circumscribed circle we can stop.
        let cutoff_2 = d_lat * d_lat + d_lon * d_lon;

        let mut hits: Vec<NearbyLandmark<'_>> = Vec::new();
        for entry in self.spatial_idx.nearest_neighbor_iter(&[center.lat, center.lon]) {
            if entry.distance_2(&[center.lat, center.lon]) > cutoff_2 {
                break;
            }
            if entry.id.as_str() == id {
                continue;
            }
            let Some((key, landmark)) = self.landmarks.get_key_value(entry.id.as_str()) else {
                continue;
            };
            let distance_km = center.distance_km(landmark.position);
            if distance_km <= max_km {
                hits.push(NearbyLandmark { id: key, landmark, distance_km });
            }
        }

        hits.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.id.cmp(b.id))
        });
        hits
    }
}

impl FromIterator<(NodeId, Landmark)> for LandmarkRegistry {
    fn from_iter<I: IntoIterator<Item = (NodeId, Landmark)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
