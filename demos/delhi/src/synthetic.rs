//! Synthetic traffic and air-quality feeds.
//!
//! Stand-ins for live data.  The clock is an input: callers pass the hour
//! and month, so a fixed seed and time reproduce the same readings.

use rp_core::{AqiIndex, CoreResult, Edge, NodeId, SimRng, TrafficMultipliers, MIN_MULTIPLIER};

use crate::network::{COMMERCIAL_CORE, TRANSPORT_HUBS};

/// Baseline AQI per landmark, before seasonal and random variation.
const BASE_AQI: &[(&str, f64)] = &[
    ("CP",      180.0),
    ("IG",      160.0),
    ("AIIMS",   170.0),
    ("NDR",     190.0),
    ("ISBT",    185.0),
    ("HK",      150.0),
    ("IIT",     140.0),
    ("QUTUB",   135.0),
    ("DU",      165.0),
    ("LOTUS",   155.0),
    ("AIRPORT", 175.0),
    ("GURGAON", 195.0),
];

const AQI_FLOOR: f64 = 50.0;
const AQI_CEILING: f64 = 500.0;

/// Time-of-day multiplier for every road in `edges`, hour in `0..24`.
///
/// Rush hours raise it, late night lowers it, roads touching the commercial
/// core or a transport hub carry a fixed surcharge.
pub fn traffic_for_hour(edges: &[Edge], hour: u32, rng: &mut SimRng) -> CoreResult<TrafficMultipliers> {
    let mut traffic = TrafficMultipliers::new();
    for e in edges {
        traffic.insert(e.u.clone(), e.v.clone(), road_multiplier(e, hour, rng))?;
    }
    Ok(traffic)
}

/// One road's multiplier: floored at [`MIN_MULTIPLIER`], then rounded to two
/// decimals.
fn road_multiplier(e: &Edge, hour: u32, rng: &mut SimRng) -> f64 {
    let mut m: f64 = 1.0;
    m += match hour {
        7..=10  => rng.gen_range(0.3..0.7),
        17..=20 => rng.gen_range(0.4..0.9),
        12..=14 => rng.gen_range(0.2..0.4),
        22.. | 0..=6 => -rng.gen_range(0.2..0.3),
        _ => 0.0,
    };
    if e.touches(COMMERCIAL_CORE) {
        m += 0.2;
    }
    if TRANSPORT_HUBS.iter().any(|hub| e.touches(hub)) {
        m += 0.15;
    }
    (m.max(MIN_MULTIPLIER) * 100.0_f64).round() / 100.0
}

/// AQI reading per landmark for a month in `0..12` (January = 0).
///
/// Winter (Nov–Feb) is worst, monsoon (Jul–Sep) best.  Readings are whole
/// numbers in `50..=500`.
pub fn aqi_for_month(month: u32, rng: &mut SimRng) -> AqiIndex {
    BASE_AQI
        .iter()
        .map(|&(id, base)| {
            let seasonal = match month {
                10.. | 0..=1 => rng.gen_range(20.0..50.0),
                2..=5 => rng.gen_range(0.0..20.0),
                _ => -rng.gen_range(10.0..30.0),
            };
            let noise = rng.gen_range(-10.0..10.0);
            let aqi = (base + seasonal + noise).round().clamp(AQI_FLOOR, AQI_CEILING);
            (NodeId::from(id), aqi)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rp_core::{SimRng, MIN_MULTIPLIER};

    use super::{aqi_for_month, road_multiplier, traffic_for_hour};
    use crate::network::{base_edges, COMMERCIAL_CORE, TRANSPORT_HUBS};

    #[test]
    fn night_multipliers_are_floored_before_storage() {
        let edges = base_edges();
        let mut rng = SimRng::new(3);
        for hour in [22, 23, 0, 3, 6] {
            for e in &edges {
                let m = road_multiplier(e, hour, &mut rng);
                assert!(m >= MIN_MULTIPLIER, "hour {hour} {}-{}: {m}", e.u, e.v);
            }
        }
        // A plain night road would fall to 0.7..0.8 without the floor.
        let quiet = edges
            .iter()
            .find(|e| !e.touches(COMMERCIAL_CORE) && !TRANSPORT_HUBS.iter().any(|h| e.touches(h)))
            .unwrap();
        assert_eq!(road_multiplier(quiet, 3, &mut rng), MIN_MULTIPLIER);
    }

    #[test]
    fn traffic_is_symmetric_and_bounded() {
        let edges = base_edges();
        for hour in 0..24 {
            let t = traffic_for_hour(&edges, hour, &mut SimRng::new(7)).unwrap();
            for e in &edges {
                let fwd = t.get(&e.u, &e.v);
                assert_eq!(fwd, t.get(&e.v, &e.u));
                assert!(fwd >= MIN_MULTIPLIER, "hour {hour}: {fwd}");
            }
        }
    }

    #[test]
    fn rush_hour_is_slower_than_night() {
        let edges = base_edges();
        let rush = traffic_for_hour(&edges, 18, &mut SimRng::new(1)).unwrap();
        let night = traffic_for_hour(&edges, 3, &mut SimRng::new(1)).unwrap();
        for e in &edges {
            assert!(rush.get(&e.u, &e.v) > night.get(&e.u, &e.v));
        }
    }

    #[test]
    fn same_seed_same_readings() {
        let a = aqi_for_month(11, &mut SimRng::new(42));
        let b = aqi_for_month(11, &mut SimRng::new(42));
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        let cp = a.get("CP").unwrap();
        assert!((50.0..=500.0).contains(&cp));
        assert!(a.get("GURGAON").is_some());
    }
}
