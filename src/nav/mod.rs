//! Navigation graph engine: POI store, planar distance model and the
//! walk/teleport route planner.

pub mod config;
pub mod distance;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod models;
pub mod planner;

pub use config::{ConfigOverrides, PathfindingConfig};
pub use graph::{GraphError, PoiGraph};
pub use models::{Location, Node, NodeKind, Route, Segment, TravelMode};
pub use planner::{find_path, find_path_with};
