//! delhi — route planning over twelve Delhi landmarks.
//!
//! Builds the landmark graph with synthetic traffic for a given hour, plans
//! the shortest route and up to three alternatives, then refreshes traffic
//! for the evening rush and plans again against the swapped-in graph.
//!
//! ```text
//! delhi [SOURCE] [TARGET] [HOUR] [MONTH] [SEED]
//! ```
//!
//! Defaults: `CP QUTUB 9 10 42`.  Set `RUST_LOG=debug` for planner events.

mod network;
mod synthetic;

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rp_core::{LandmarkRegistry, NodeId, PlannerConfig, SimRng};
use rp_routing::{Conditions, GraphSnapshot, RouteGraph, RoutePlan, RoutePlanner};

use network::{base_edges, landmarks};
use synthetic::{aqi_for_month, traffic_for_hour};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SOURCE: &str = "CP";
const DEFAULT_TARGET: &str = "QUTUB";
const DEFAULT_HOUR:   u32  = 9;
const DEFAULT_MONTH:  u32  = 10; // November
const DEFAULT_SEED:   u64  = 42;
const EVENING_RUSH:   u32  = 18;

// ── CLI ───────────────────────────────────────────────────────────────────────

struct Args {
    source: String,
    target: String,
    hour:   u32,
    month:  u32,
    seed:   u64,
}

fn positional<T: FromStr>(args: &[String], i: usize, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(i) {
        None => Ok(default),
        Some(raw) => raw.parse().with_context(|| format!("invalid {name} {raw:?}")),
    }
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = Args {
        source: positional(&args, 0, "source", DEFAULT_SOURCE.to_owned())?,
        target: positional(&args, 1, "target", DEFAULT_TARGET.to_owned())?,
        hour:   positional(&args, 2, "hour", DEFAULT_HOUR)?,
        month:  positional(&args, 3, "month", DEFAULT_MONTH)?,
        seed:   positional(&args, 4, "seed", DEFAULT_SEED)?,
    };
    if parsed.hour > 23 {
        bail!("hour must be in 0..=23, got {}", parsed.hour);
    }
    if parsed.month > 11 {
        bail!("month must be in 0..=11 (January = 0), got {}", parsed.month);
    }
    Ok(parsed)
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_plan(plan: &RoutePlan, registry: &LandmarkRegistry) {
    if plan.is_empty() {
        println!("  no route found");
        return;
    }
    println!(
        "  {:<26} {:>8} {:>6} {:>8} {:>5}  path",
        "algorithm", "km", "min", "traffic", "aqi"
    );
    println!("  {}", "-".repeat(72));
    for route in plan.routes() {
        let names: Vec<&str> = route.path.iter().map(|id| registry.display_name(id)).collect();
        println!(
            "  {:<26} {:>8.2} {:>6} {:>8} {:>5.0}  {}",
            route.label,
            route.distance_km,
            route.minutes,
            route.traffic,
            route.aqi,
            names.join(" → "),
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = parse_args()?;
    let registry = landmarks();
    for id in [&args.source, &args.target] {
        if registry.get(id).is_none() {
            let known: Vec<&str> = registry.iter().map(|(id, _)| id.as_str()).collect();
            bail!("unknown landmark {id:?}; known: {}", known.join(", "));
        }
    }

    println!("=== delhi — landmark route planner ===");
    println!(
        "{} → {}  |  hour {}  |  month {}  |  seed {}",
        registry.display_name(&NodeId::from(args.source.as_str())),
        registry.display_name(&NodeId::from(args.target.as_str())),
        args.hour,
        args.month,
        args.seed,
    );
    println!();

    let config = PlannerConfig::default();
    let planner = RoutePlanner::new(config.clone())?;
    let base = base_edges();

    // 1. Synthetic conditions for the requested time.
    let mut root = SimRng::new(args.seed);
    let traffic = traffic_for_hour(&base, args.hour, &mut root.child(0))?;
    let aqi = aqi_for_month(args.month, &mut root.child(1));
    let snapshot = GraphSnapshot::new(RouteGraph::with_traffic(&base, &traffic)?);
    let mut conditions = Conditions { traffic, aqi };

    let graph = snapshot.current();
    info!(nodes = graph.node_count(), edges = graph.edge_count(), "landmark graph ready");

    println!("Routes at {:02}:00", args.hour);
    let plan = planner.plan(&graph, &conditions, &args.source, &args.target)?;
    print_plan(&plan, &registry);
    println!();

    // 2. Evening refresh: rebuild, then swap.  `graph` still points at the
    //    morning weights.
    conditions.traffic = traffic_for_hour(&base, EVENING_RUSH, &mut root.child(2))?;
    snapshot.replace(RouteGraph::with_traffic(&base, &conditions.traffic)?);
    let evening = snapshot.current();

    println!("Routes at {EVENING_RUSH:02}:00 (traffic refreshed)");
    let plan = planner.plan(&evening, &conditions, &args.source, &args.target)?;
    print_plan(&plan, &registry);
    println!();

    // 3. Everything reachable from the source, planned in parallel.
    let source = NodeId::from(args.source.as_str());
    let requests: Vec<(NodeId, NodeId)> = evening
        .node_ids()
        .iter()
        .filter(|id| **id != source)
        .map(|id| (source.clone(), id.clone()))
        .collect();
    println!("Fastest from {} to every landmark", registry.display_name(&source));
    for ((_, target), plan) in requests.iter().zip(planner.plan_batch(&evening, &conditions, &requests)) {
        let plan = plan?;
        match plan.best {
            Some(best) => println!(
                "  {:<28} {:>6.2} km {:>4} min",
                registry.display_name(target),
                best.distance_km,
                best.minutes
            ),
            None => println!("  {:<28} unreachable", registry.display_name(target)),
        }
    }
    println!();

    // 4. Nearby landmarks around the destination.
    println!(
        "Within {:.0} km of {}",
        config.nearby_radius_km,
        registry.display_name(&NodeId::from(args.target.as_str()))
    );
    let nearby = registry.nearby(&args.target, config.nearby_radius_km);
    if nearby.is_empty() {
        println!("  nothing");
    }
    for hit in nearby {
        println!(
            "  {:<28} {:>5.2} km  ({})",
            hit.landmark.name, hit.distance_km, hit.landmark.category
        );
    }

    Ok(())
}
