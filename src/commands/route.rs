use anyhow::{bail, Result};
use log::info;

use crate::nav::config::ConfigOverrides;
use crate::nav::distance::planar_distance;
use crate::nav::{find_path_with, Location, PoiGraph, Route, TravelMode};

pub const NO_ROUTE_MESSAGE: &str = "No route found. Try increasing the walk distance.";

pub fn cmd_route(graph: &PoiGraph, from: &str, to: &str, settings: &ConfigOverrides, json: bool) -> Result<()> {
    // Unknown places are reported here; the planner folds them into "no route".
    for id in [from, to] {
        if !graph.contains(id) {
            bail!("unknown place: {}", id);
        }
    }
    let cfg = settings.resolve();
    cfg.validate()?;
    info!(
        "route: {} -> {} (max_walk={} walk_weight={} teleport_weight={})",
        from, to, cfg.max_walk_distance, cfg.walk_weight_multiplier, cfg.teleport_weight
    );

    let route = find_path_with(graph, from, to, &cfg);
    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }
    match route {
        Some(route) => {
            for line in describe_route(graph, &route) {
                println!("{}", line);
            }
        }
        None => println!("{}", NO_ROUTE_MESSAGE),
    }
    Ok(())
}

/// Human-readable steps for a route, one line each.
pub fn describe_route(graph: &PoiGraph, route: &Route) -> Vec<String> {
    let mut lines = Vec::with_capacity(route.segments.len() + 2);
    lines.push(format!("~{} minutes walk", route.walk_minutes()));

    for seg in &route.segments {
        let coords = graph.get_node(&seg.to).map(|n| format_coords(&n.location)).unwrap_or_default();
        let line = match seg.mode {
            TravelMode::Walk => format!("Walk to {}: {} blocks {}", seg.to, seg.distance, coords),
            TravelMode::Teleport => format!("Teleport to {}: Instant {}", seg.to, coords),
        };
        lines.push(line.trim_end().to_string());
    }

    let first = route.start().and_then(|id| graph.get_node(id));
    let last = route.end().and_then(|id| graph.get_node(id));
    let straight = match (first, last) {
        (Some(a), Some(b)) => planar_distance(&a.location, &b.location).round() as u64,
        _ => 0,
    };
    lines.push(format!(
        "Arrive at {}: {} blocks travelled ({} walked)",
        route.end().unwrap_or_default(),
        straight,
        route.total_distance
    ));
    lines
}

fn format_coords(l: &Location) -> String {
    format!("({}, {}, {})", l.x, l.y, l.z)
}
