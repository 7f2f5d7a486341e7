//! Unit tests for rp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, NodeIx};

    #[test]
    fn index_roundtrip() {
        let ix = NodeIx(42);
        assert_eq!(ix.index(), 42);
        assert_eq!(NodeIx::try_from(42usize).unwrap(), ix);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(NodeIx::INVALID.0, u32::MAX);
        assert_eq!(NodeIx::default(), NodeIx::INVALID);
    }

    #[test]
    fn node_id_orders_lexicographically() {
        let mut ids: Vec<NodeId> = ["IIT", "AIIMS", "CP"].into_iter().map(NodeId::from).collect();
        ids.sort();
        assert_eq!(ids, vec![NodeId::from("AIIMS"), NodeId::from("CP"), NodeId::from("IIT")]);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId::from("CP").to_string(), "CP");
        assert_eq!(NodeIx(7).to_string(), "NodeIx(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6315, 77.2167);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(28.0, 77.0);
        let b = GeoPoint::new(29.0, 77.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn degree_box_contains_radius() {
        let center = GeoPoint::new(28.6, 77.2);
        let (d_lat, d_lon) = center.degree_box(5.0);
        // East-west degrees shrink with latitude, so the box is wider in lon.
        assert!(d_lon > d_lat);
        let north = GeoPoint::new(center.lat + d_lat, center.lon);
        assert!((center.distance_km(north) - 5.0).abs() < 0.05);
    }
}

#[cfg(test)]
mod edge {
    use crate::{Edge, NodeId};

    #[test]
    fn joins_either_orientation() {
        let e = Edge::new("A", "B", 2.0);
        assert!(e.joins(&NodeId::from("A"), &NodeId::from("B")));
        assert!(e.joins(&NodeId::from("B"), &NodeId::from("A")));
        assert!(!e.joins(&NodeId::from("A"), &NodeId::from("C")));
        assert!(e.touches("B"));
        assert!(!e.touches("C"));
    }
}

#[cfg(test)]
mod traffic {
    use crate::{CoreError, Edge, NodeId, TrafficLevel, TrafficMultipliers, MIN_MULTIPLIER};

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn insert_is_symmetric() {
        let mut t = TrafficMultipliers::new();
        t.insert("CP", "IG", 1.45).unwrap();
        assert_eq!(t.get(&id("CP"), &id("IG")), 1.45);
        assert_eq!(t.get(&id("IG"), &id("CP")), 1.45);
        assert_eq!(t.len(), 2);

        // Overwriting through the reverse key updates both orientations.
        t.insert("IG", "CP", 2.0).unwrap();
        assert_eq!(t.get(&id("CP"), &id("IG")), 2.0);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn clamps_to_minimum() {
        let mut t = TrafficMultipliers::new();
        let stored = t.insert("A", "B", 0.5).unwrap();
        assert_eq!(stored, MIN_MULTIPLIER);
        assert_eq!(t.get(&id("B"), &id("A")), MIN_MULTIPLIER);
    }

    #[test]
    fn rejects_non_finite() {
        let mut t = TrafficMultipliers::new();
        let err = t.insert("A", "B", f64::NAN).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMultiplier { .. }));
        assert!(t.is_empty());
    }

    #[test]
    fn missing_pair_is_neutral() {
        let t = TrafficMultipliers::new();
        assert_eq!(t.get(&id("X"), &id("Y")), 1.0);
    }

    #[test]
    fn keyed_insert() {
        let mut t = TrafficMultipliers::new();
        t.insert_keyed("NDR-ISBT", 1.9).unwrap();
        assert_eq!(t.get(&id("ISBT"), &id("NDR")), 1.9);
        assert!(matches!(t.insert_keyed("NDR", 1.0), Err(CoreError::InvalidKey(_))));
        assert!(matches!(t.insert_keyed("A-B-C", 1.0), Err(CoreError::InvalidKey(_))));
        assert!(matches!(t.insert_keyed("-B", 1.0), Err(CoreError::InvalidKey(_))));
    }

    #[test]
    fn apply_scales_base_weights() {
        let mut t = TrafficMultipliers::new();
        t.insert("B", "A", 1.5).unwrap();
        let base = vec![Edge::new("A", "B", 2.0), Edge::new("B", "C", 3.0)];
        let eff = t.apply(&base);
        assert_eq!(eff[0], Edge::new("A", "B", 3.0));
        assert_eq!(eff[1], Edge::new("B", "C", 3.0));
    }

    #[test]
    fn level_buckets() {
        assert_eq!(TrafficLevel::classify(0.8), TrafficLevel::Low);
        assert_eq!(TrafficLevel::classify(1.29), TrafficLevel::Low);
        assert_eq!(TrafficLevel::classify(1.3), TrafficLevel::Medium);
        assert_eq!(TrafficLevel::classify(1.79), TrafficLevel::Medium);
        assert_eq!(TrafficLevel::classify(1.8), TrafficLevel::High);
        assert!(TrafficLevel::Low < TrafficLevel::High);
        assert_eq!(TrafficLevel::Medium.to_string(), "medium");
    }

    #[test]
    fn from_entries_goes_through_insert() {
        let t = TrafficMultipliers::try_from(vec![
            (id("A"), id("B"), 2.0),
            (id("B"), id("A"), 0.1),
        ])
        .unwrap();
        assert_eq!(t.get(&id("A"), &id("B")), MIN_MULTIPLIER);
        assert_eq!(t.get(&id("B"), &id("A")), MIN_MULTIPLIER);

        let err = TrafficMultipliers::try_from(vec![(id("A"), id("B"), f64::NAN)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidMultiplier { .. }));
    }

    #[test]
    fn into_entries_lists_each_pair_once() {
        let mut t = TrafficMultipliers::new();
        t.insert("B", "A", 1.5).unwrap();
        t.insert("C", "C", 1.1).unwrap();
        let entries: Vec<(NodeId, NodeId, f64)> = t.into();
        assert_eq!(entries, vec![(id("A"), id("B"), 1.5), (id("C"), id("C"), 1.1)]);
    }
}

#[cfg(feature = "serde")]
mod serde_format {
    use crate::{NodeId, TrafficMultipliers, MIN_MULTIPLIER};

    #[test]
    fn traffic_deserialize_keeps_map_symmetric_and_floored() {
        let t: TrafficMultipliers =
            serde_json::from_str(r#"[["A", "B", 2.0], ["B", "A", 0.1]]"#).unwrap();
        let (a, b) = (NodeId::from("A"), NodeId::from("B"));
        assert_eq!(t.get(&a, &b), t.get(&b, &a));
        assert_eq!(t.get(&a, &b), MIN_MULTIPLIER);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn traffic_serializes_one_entry_per_pair() {
        let mut t = TrafficMultipliers::new();
        t.insert("CP", "IG", 1.25).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[["CP","IG",1.25]]"#);
        let back: TrafficMultipliers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}

#[cfg(test)]
mod aqi {
    use crate::{AqiIndex, NodeId};

    #[test]
    fn average_over_known_nodes() {
        let mut aqi = AqiIndex::new();
        aqi.insert("CP", 180.0);
        aqi.insert("IG", 160.0);
        let path: Vec<NodeId> = ["CP", "IG", "UNKNOWN"].into_iter().map(NodeId::from).collect();
        assert_eq!(aqi.route_average(&path), 170.0);
    }

    #[test]
    fn empty_cases_are_zero() {
        let aqi = AqiIndex::new();
        assert_eq!(aqi.route_average(&[]), 0.0);
        assert_eq!(aqi.route_average(&[NodeId::from("CP")]), 0.0);
    }
}

#[cfg(test)]
mod landmark {
    use crate::{Category, GeoPoint, Landmark, LandmarkRegistry, NodeId};

    fn registry() -> LandmarkRegistry {
        [
            ("CP", "Connaught Place", Category::Commercial, 28.6315, 77.2167),
            ("IG", "India Gate", Category::Monument, 28.6129, 77.2295),
            ("NDR", "New Delhi Railway Station", Category::Transport, 28.6430, 77.2194),
            ("QUTUB", "Qutub Minar", Category::Monument, 28.5244, 77.1855),
        ]
        .into_iter()
        .map(|(id, name, cat, lat, lon)| {
            (NodeId::from(id), Landmark::new(name, cat, GeoPoint::new(lat, lon)))
        })
        .collect()
    }

    #[test]
    fn nearby_excludes_origin_and_far_nodes() {
        let reg = registry();
        let hits = reg.nearby("CP", 5.0);
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        // NDR ≈ 1.3 km, IG ≈ 2.4 km, QUTUB ≈ 12.3 km.
        assert_eq!(ids, vec!["NDR", "IG"]);
        assert!(hits[0].distance_km < hits[1].distance_km);
    }

    #[test]
    fn nearby_unknown_is_empty() {
        assert!(registry().nearby("NOPE", 100.0).is_empty());
    }

    #[test]
    fn nearest_snaps() {
        let reg = registry();
        let snapped = reg.nearest(GeoPoint::new(28.525, 77.186)).unwrap();
        assert_eq!(snapped.as_str(), "QUTUB");
        assert!(LandmarkRegistry::new(std::iter::empty()).nearest(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let reg = registry();
        assert_eq!(reg.display_name(&NodeId::from("IG")), "India Gate");
        assert_eq!(reg.display_name(&NodeId::from("ZZ")), "ZZ");
    }

    #[test]
    fn category_parse() {
        assert_eq!("Hospital".parse::<Category>().unwrap(), Category::Hospital);
        assert!("spaceport".parse::<Category>().is_err());
        assert_eq!(Category::Education.to_string(), "education");
    }
}

#[cfg(test)]
mod config {
    use crate::PlannerConfig;

    #[test]
    fn defaults() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.average_speed_kmh, 25.0);
        assert_eq!(cfg.max_alternatives, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_speed() {
        let cfg = PlannerConfig { average_speed_kmh: 0.0, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = PlannerConfig { nearby_radius_km: f64::NAN, ..PlannerConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0.0f64..1.0), r2.gen_range(0.0f64..1.0));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.2f64..0.6);
            assert!((0.2..0.6).contains(&v));
        }
    }
}
