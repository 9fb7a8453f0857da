use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::config::{ConfigOverrides, PathfindingConfig};
use super::distance::node_distance;
use super::graph::PoiGraph;
use super::models::{Node, NodeKind, Route, Segment, TravelMode};

/// Search vertex. `can_walk == false` means the agent walked onto a
/// translocator and the only legal move is its teleport.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct State<'g> {
    id: &'g str,
    can_walk: bool,
}

#[derive(Copy, Clone, Debug)]
struct Edge<'g> {
    to: State<'g>,
    cost: f64,
    mode: TravelMode,
}

/// Frontier entry ordered by (cost, hops, id, walk flag), smallest first.
#[derive(Copy, Clone, Debug)]
struct Open<'g> {
    cost: f64,
    hops: u32,
    state: State<'g>,
}

impl Ord for Open<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .total_cmp(&self.cost)
            .then(other.hops.cmp(&self.hops))
            .then_with(|| other.state.id.cmp(self.state.id))
            .then(other.state.can_walk.cmp(&self.state.can_walk))
    }
}

impl PartialOrd for Open<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Open<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Open<'_> {}

/// Finds the cheapest route from `start_id` to `end_id`, layering
/// `overrides` over the default configuration.
///
/// Returns `None` when either id is unknown or no route exists within the
/// walk range. Landmarks only ever appear as the first or last node.
pub fn find_path(graph: &PoiGraph, start_id: &str, end_id: &str, overrides: &ConfigOverrides) -> Option<Route> {
    find_path_with(graph, start_id, end_id, &overrides.resolve())
}

pub fn find_path_with(graph: &PoiGraph, start_id: &str, end_id: &str, cfg: &PathfindingConfig) -> Option<Route> {
    if let Err(e) = cfg.validate() {
        warn!("planner: rejecting query {} -> {}: {}", start_id, end_id, e);
        return None;
    }
    let start = graph.get_node(start_id)?;
    let end = graph.get_node(end_id)?;
    if start.id == end.id {
        return Some(Route::single(&start.id));
    }

    let start_state = State { id: start.id.as_str(), can_walk: true };
    let mut best: HashMap<State, (f64, u32)> = HashMap::new();
    let mut prev: HashMap<State, (State, TravelMode)> = HashMap::new();
    let mut settled: HashSet<State> = HashSet::new();
    let mut open: BinaryHeap<Open> = BinaryHeap::new();
    let mut edges: Vec<Edge> = Vec::new();

    best.insert(start_state, (0.0, 0));
    open.push(Open { cost: 0.0, hops: 0, state: start_state });

    let mut reached: Option<(State, f64)> = None;
    while let Some(Open { cost, hops, state }) = open.pop() {
        if !settled.insert(state) {
            continue;
        }
        if state.id == end.id {
            reached = Some((state, cost));
            break;
        }

        edges.clear();
        expand(graph, state, end, cfg, &mut edges);
        trace!("planner: settle {} (walk={}) cost={:.2} edges={}", state.id, state.can_walk, cost, edges.len());

        for edge in edges.iter() {
            if settled.contains(&edge.to) {
                continue;
            }
            let candidate = (cost + edge.cost, hops + 1);
            let improves = match best.get(&edge.to) {
                None => true,
                Some(&(c, h)) => candidate.0 < c || (candidate.0 == c && candidate.1 < h),
            };
            if improves {
                best.insert(edge.to, candidate);
                prev.insert(edge.to, (state, edge.mode));
                open.push(Open { cost: candidate.0, hops: candidate.1, state: edge.to });
            }
        }
    }

    let Some((end_state, cost)) = reached else {
        debug!(
            "planner: no route {} -> {} within {} (settled {} states)",
            start_id,
            end_id,
            cfg.max_walk_distance,
            settled.len()
        );
        return None;
    };
    debug!("planner: route {} -> {} cost={:.2} settled={}", start_id, end_id, cost, settled.len());
    reconstruct(graph, end_state, &prev)
}

/// Outgoing edges of `current`: teleport across its link, walk straight to
/// the target, or walk onto any other translocator in range.
fn expand<'g>(graph: &'g PoiGraph, current: State<'g>, end: &'g Node, cfg: &PathfindingConfig, out: &mut Vec<Edge<'g>>) {
    let Some(node) = graph.get_node(current.id) else { return };

    let partner = graph.partner(&node.id);
    if let Some(partner) = partner {
        out.push(Edge {
            to: State { id: partner.id.as_str(), can_walk: true },
            cost: cfg.teleport_weight,
            mode: TravelMode::Teleport,
        });
    }

    if !current.can_walk {
        return;
    }

    let to_end = node_distance(node, end);
    if to_end <= cfg.max_walk_distance {
        out.push(Edge {
            to: State { id: end.id.as_str(), can_walk: true },
            cost: to_end * cfg.walk_weight_multiplier,
            mode: TravelMode::Walk,
        });
    }

    for tl in graph.nodes_of_kind(NodeKind::Translocator) {
        // Own partner is left via the teleport, never on foot.
        if tl.id == node.id || partner.is_some_and(|p| p.id == tl.id) {
            continue;
        }
        let d = node_distance(node, tl);
        if d <= cfg.max_walk_distance {
            out.push(Edge {
                to: State { id: tl.id.as_str(), can_walk: false },
                cost: d * cfg.walk_weight_multiplier,
                mode: TravelMode::Walk,
            });
        }
    }
}

fn reconstruct<'g>(
    graph: &PoiGraph,
    end: State<'g>,
    prev: &HashMap<State<'g>, (State<'g>, TravelMode)>,
) -> Option<Route> {
    let mut chain: Vec<(State, Option<TravelMode>)> = Vec::new();
    let mut cur = end;
    while let Some(&(from, mode)) = prev.get(&cur) {
        chain.push((cur, Some(mode)));
        cur = from;
    }
    chain.push((cur, None));
    chain.reverse();

    let mut segments: Vec<Segment> = Vec::with_capacity(chain.len() - 1);
    for pair in chain.windows(2) {
        let (from, _) = pair[0];
        let (to, mode) = pair[1];
        let mode = mode?;
        let distance = match mode {
            TravelMode::Teleport => 0,
            TravelMode::Walk => node_distance(graph.get_node(from.id)?, graph.get_node(to.id)?).round() as u64,
        };
        segments.push(Segment { from: from.id.to_string(), to: to.id.to_string(), mode, distance });
    }

    Some(Route {
        nodes: chain.iter().map(|(s, _)| s.id.to_string()).collect(),
        total_distance: segments.iter().map(|s| s.distance).sum(),
        segments,
    })
}

impl PoiGraph {
    /// Convenience wrapper around [`find_path`].
    pub fn find_path(&self, start_id: &str, end_id: &str, overrides: &ConfigOverrides) -> Option<Route> {
        find_path(self, start_id, end_id, overrides)
    }
}
