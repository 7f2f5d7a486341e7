//! Delhi landmark graph.
//!
//! Twelve landmarks and twenty-two road links across central Delhi and the NCR.
//! Weights are base road distances in kilometres, before traffic.

use rp_core::{Category, Edge, GeoPoint, Landmark, LandmarkRegistry, NodeId};

/// `(id, name, category, lat, lon)`.
const LANDMARKS: &[(&str, &str, Category, f64, f64)] = &[
    ("CP",      "Connaught Place",           Category::Commercial,  28.6315, 77.2167),
    ("IG",      "India Gate",                Category::Monument,    28.6129, 77.2295),
    ("AIIMS",   "AIIMS Delhi",               Category::Hospital,    28.5672, 77.2100),
    ("NDR",     "New Delhi Railway Station", Category::Transport,   28.6430, 77.2194),
    ("ISBT",    "Kashmere Gate ISBT",        Category::Transport,   28.6655, 77.2273),
    ("HK",      "Hauz Khas",                 Category::Residential, 28.5494, 77.2001),
    ("IIT",     "IIT Delhi",                 Category::Education,   28.5450, 77.1926),
    ("QUTUB",   "Qutub Minar",               Category::Monument,    28.5244, 77.1855),
    ("DU",      "Delhi University",          Category::Education,   28.6962, 77.2137),
    ("LOTUS",   "Lotus Temple",              Category::Monument,    28.5535, 77.2588),
    ("AIRPORT", "IGI Airport",               Category::Transport,   28.5562, 77.1000),
    ("GURGAON", "Gurgaon City Center",       Category::Commercial,  28.4595, 77.0266),
];

/// `(u, v, km)`.
const ROADS: &[(&str, &str, f64)] = &[
    // Central
    ("CP",      "IG",      3.2),
    ("CP",      "NDR",     1.8),
    ("CP",      "AIIMS",   6.5),
    // North
    ("NDR",     "ISBT",    3.1),
    ("ISBT",    "DU",      4.2),
    ("CP",      "DU",      7.8),
    // South
    ("AIIMS",   "HK",      3.0),
    ("HK",      "IIT",     1.4),
    ("IIT",     "QUTUB",   2.8),
    ("AIIMS",   "IIT",     4.2),
    // East
    ("IG",      "LOTUS",   5.1),
    ("CP",      "LOTUS",   8.3),
    // West
    ("CP",      "AIRPORT", 15.2),
    ("AIIMS",   "AIRPORT", 12.8),
    ("IIT",     "AIRPORT", 8.9),
    // NCR
    ("AIIMS",   "GURGAON", 18.5),
    ("IIT",     "GURGAON", 16.2),
    ("AIRPORT", "GURGAON", 14.7),
    // Cross links
    ("IG",      "AIIMS",   5.8),
    ("IG",      "HK",      8.4),
    ("DU",      "IG",      9.1),
    ("HK",      "LOTUS",   12.3),
];

/// Landmarks that draw extra traffic onto every road touching them.
pub const TRANSPORT_HUBS: &[&str] = &["NDR", "ISBT", "AIRPORT"];

/// The busiest commercial district.
pub const COMMERCIAL_CORE: &str = "CP";

pub fn landmarks() -> LandmarkRegistry {
    LANDMARKS
        .iter()
        .map(|&(id, name, category, lat, lon)| {
            (NodeId::from(id), Landmark::new(name, category, GeoPoint::new(lat, lon)))
        })
        .collect()
}

pub fn base_edges() -> Vec<Edge> {
    ROADS.iter().map(|&(u, v, km)| Edge::new(u, v, km)).collect()
}
