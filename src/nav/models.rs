use serde::{Deserialize, Serialize};

/// Walking speed used for route time estimates, in blocks per minute.
pub const WALK_BLOCKS_PER_MINUTE: f64 = 204.0;

/// World-space coordinate. `y` is vertical and only carried for display.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub z: f64,
}

impl Location {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Landmark,
    Translocator,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Landmark => "landmark",
            NodeKind::Translocator => "translocator",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub location: Location,
    pub kind: NodeKind,
    pub description: String,
    /// Partner translocator, if this node is a linked translocator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Node {
    pub fn is_translocator(&self) -> bool {
        self.kind == NodeKind::Translocator
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Teleport,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub mode: TravelMode,
    /// Rounded planar distance for walks, always 0 for teleports.
    pub distance: u64,
}

/// A complete route. `segments.len() == nodes.len() - 1` always holds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    pub nodes: Vec<String>,
    pub total_distance: u64,
    pub segments: Vec<Segment>,
}

impl Route {
    pub(crate) fn single(id: &str) -> Self {
        Self { nodes: vec![id.to_string()], total_distance: 0, segments: Vec::new() }
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    pub fn walk_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.mode == TravelMode::Walk)
    }

    pub fn teleport_count(&self) -> usize {
        self.segments.iter().filter(|s| s.mode == TravelMode::Teleport).count()
    }

    /// Estimated minutes spent walking, rounded to the nearest minute.
    pub fn walk_minutes(&self) -> u64 {
        (self.total_distance as f64 / WALK_BLOCKS_PER_MINUTE).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(mode: TravelMode, distance: u64) -> Segment {
        Segment { from: "a".into(), to: "b".into(), mode, distance }
    }

    #[test]
    fn walk_minutes_rounds_to_nearest() {
        let mut r = Route::single("a");
        assert_eq!(r.walk_minutes(), 0);
        r.total_distance = 306;
        assert_eq!(r.walk_minutes(), 2);
        r.total_distance = 305;
        assert_eq!(r.walk_minutes(), 1);
    }

    #[test]
    fn segment_accessors_split_modes() {
        let r = Route {
            nodes: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            total_distance: 500,
            segments: vec![seg(TravelMode::Walk, 400), seg(TravelMode::Teleport, 0), seg(TravelMode::Walk, 100)],
        };
        assert_eq!(r.walk_segments().count(), 2);
        assert_eq!(r.teleport_count(), 1);
        assert_eq!(r.start(), Some("a"));
        assert_eq!(r.end(), Some("d"));
    }

    #[test]
    fn empty_route_has_no_endpoints() {
        let r = Route { nodes: Vec::new(), total_distance: 0, segments: Vec::new() };
        assert_eq!(r.start(), None);
        assert_eq!(r.end(), None);
        assert_eq!(r.walk_minutes(), 0);
    }

    #[test]
    fn modes_serialize_lowercase() {
        let json = serde_json::to_string(&seg(TravelMode::Teleport, 0)).unwrap();
        assert!(json.contains("\"mode\":\"teleport\""));
        assert_eq!(serde_json::to_string(&NodeKind::Landmark).unwrap(), "\"landmark\"");
    }
}
