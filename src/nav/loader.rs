use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::graph::{GraphError, PoiGraph};
use super::models::{Location, NodeKind};

pub const ORIGIN_SUFFIX: &str = " Origin";
pub const DESTINATION_SUFFIX: &str = " Destination";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LandmarkRecord {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub desc: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TranslocatorRecord {
    pub name: String,
    pub origin: Location,
    pub destination: Location,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl TranslocatorRecord {
    pub fn origin_id(&self) -> String {
        format!("{}{}", self.name, ORIGIN_SUFFIX)
    }

    pub fn destination_id(&self) -> String {
        format!("{}{}", self.name, DESTINATION_SUFFIX)
    }
}

/// Reads a list of records from a YAML or JSON file (chosen by extension).
/// An empty file yields an empty list.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        anyhow::bail!("data file not found: {}", path.display());
    }
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let is_json = path.extension().map(|e| e.eq_ignore_ascii_case("json")).unwrap_or(false);
    let records: Vec<T> = if is_json {
        serde_json::from_str(&text).with_context(|| format!("parse JSON {}", path.display()))?
    } else {
        serde_yaml::from_str(&text).with_context(|| format!("parse YAML {}", path.display()))?
    };
    Ok(records)
}

/// Builds a graph: one node per landmark, two linked nodes per translocator.
pub fn build_graph(landmarks: &[LandmarkRecord], translocators: &[TranslocatorRecord]) -> Result<PoiGraph, GraphError> {
    let mut graph = PoiGraph::new();
    for lm in landmarks {
        if graph.contains(&lm.name) {
            warn!("loader: duplicate landmark {} replaces earlier entry", lm.name);
        }
        graph.add_node(&lm.name, lm.location, NodeKind::Landmark, lm.desc.as_deref(), None);
    }
    for tl in translocators {
        let origin = tl.origin_id();
        let destination = tl.destination_id();
        for (id, location) in [(&origin, tl.origin), (&destination, tl.destination)] {
            if graph.contains(id) {
                warn!("loader: duplicate node {} replaces earlier entry", id);
            }
            graph.add_node(id, location, NodeKind::Translocator, tl.desc.as_deref(), tl.color.as_deref());
        }
        graph.link_translocators(&origin, &destination)?;
    }
    info!(
        "loader: graph built with {} landmarks and {} translocator pairs ({} nodes)",
        landmarks.len(),
        translocators.len(),
        graph.len()
    );
    Ok(graph)
}

pub fn load_graph(landmarks_path: &Path, translocators_path: &Path) -> Result<PoiGraph> {
    let landmarks: Vec<LandmarkRecord> = load_records(landmarks_path)?;
    let translocators: Vec<TranslocatorRecord> = load_records(translocators_path)?;
    let graph = build_graph(&landmarks, &translocators)
        .with_context(|| format!("link translocators from {}", translocators_path.display()))?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LANDMARKS_YAML: &str = r#"
- name: Spawn
  icon: home
  location: { x: 0, y: 110, z: 400 }
  desc: World spawn
- name: Copper Mine
  location: { x: 0, y: 90, z: 2100 }
"#;

    const TRANSLOCATORS_YAML: &str = r##"
- name: North Line
  origin: { x: 0, y: 100, z: 0 }
  destination: { x: 0, y: 95, z: 2000 }
  color: "#33aaff"
"##;

    fn temp_with(suffix: &str, body: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parses_yaml_records() -> Result<()> {
        let f = temp_with(".yaml", LANDMARKS_YAML);
        let lms: Vec<LandmarkRecord> = load_records(f.path())?;
        assert_eq!(lms.len(), 2);
        assert_eq!(lms[0].name, "Spawn");
        assert_eq!(lms[0].icon.as_deref(), Some("home"));
        assert_eq!(lms[0].location, Location::new(0.0, 110.0, 400.0));
        assert_eq!(lms[1].desc, None);
        Ok(())
    }

    #[test]
    fn parses_json_records() -> Result<()> {
        let f = temp_with(
            ".json",
            r#"[{"name":"Ferry","origin":{"x":1,"y":2,"z":3},"destination":{"x":4,"y":5,"z":6}}]"#,
        );
        let tls: Vec<TranslocatorRecord> = load_records(f.path())?;
        assert_eq!(tls[0].origin_id(), "Ferry Origin");
        assert_eq!(tls[0].destination, Location::new(4.0, 5.0, 6.0));
        assert_eq!(tls[0].color, None);
        Ok(())
    }

    #[test]
    fn empty_file_is_empty_list() -> Result<()> {
        let f = temp_with(".yaml", "\n");
        let lms: Vec<LandmarkRecord> = load_records(f.path())?;
        assert!(lms.is_empty());
        Ok(())
    }

    #[test]
    fn missing_or_malformed_files_error() {
        assert!(load_records::<LandmarkRecord>(Path::new("/definitely/not/here.yaml")).is_err());
        let f = temp_with(".yaml", "- name: [unterminated");
        assert!(load_records::<LandmarkRecord>(f.path()).is_err());
    }

    #[test]
    fn build_graph_links_endpoints() -> Result<()> {
        let lf = temp_with(".yaml", LANDMARKS_YAML);
        let tf = temp_with(".yml", TRANSLOCATORS_YAML);
        let g = load_graph(lf.path(), tf.path())?;
        assert_eq!(g.len(), 4);
        let origin = g.get_node("North Line Origin").unwrap();
        assert_eq!(origin.kind, NodeKind::Translocator);
        assert_eq!(origin.linked_id.as_deref(), Some("North Line Destination"));
        assert_eq!(g.node_color("North Line Destination"), Some("#33aaff"));
        assert_eq!(g.get_node("Spawn").unwrap().description, "World spawn");
        Ok(())
    }

    #[test]
    fn translocator_endpoint_overwrites_same_named_landmark() {
        let lms = vec![LandmarkRecord {
            name: "Gate Origin".into(),
            icon: None,
            location: Location::default(),
            desc: None,
        }];
        let tls = vec![TranslocatorRecord {
            name: "Gate".into(),
            origin: Location::new(1.0, 0.0, 1.0),
            destination: Location::new(2.0, 0.0, 2.0),
            color: None,
            desc: None,
        }];
        let g = build_graph(&lms, &tls).unwrap();
        assert_eq!(g.get_node("Gate Origin").unwrap().kind, NodeKind::Translocator);
    }
}
