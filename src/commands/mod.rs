use anyhow::Result;
use clap::{Args, ValueEnum};
use log::debug;
use std::path::PathBuf;

use crate::nav::config::ConfigOverrides;
use crate::nav::{loader, logging, NodeKind, PoiGraph};

pub mod nodes;
pub mod route;

#[derive(Args, Debug, Clone, Default)]
pub struct DataOpts {
    /// Landmarks YAML/JSON file (default: repo_root/landmarks.yaml or NAV_LANDMARKS)
    #[arg(long)]
    pub landmarks: Option<PathBuf>,
    /// Translocators YAML/JSON file (default: repo_root/translocators.yaml or NAV_TRANSLOCATORS)
    #[arg(long)]
    pub translocators: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PlannerOpts {
    /// Longest distance covered by a single walk, in blocks (default: 500)
    #[arg(long = "max-walk")]
    pub max_walk: Option<f64>,
    /// Multiplier on walking cost; higher values avoid walking (default: 1.0)
    #[arg(long = "walk-weight")]
    pub walk_weight: Option<f64>,
    /// Fixed cost of each teleport hop (default: 0.1)
    #[arg(long = "teleport-weight")]
    pub teleport_weight: Option<f64>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Landmark,
    Translocator,
}

impl From<KindArg> for NodeKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Landmark => NodeKind::Landmark,
            KindArg::Translocator => NodeKind::Translocator,
        }
    }
}

/// CLI values layered over environment values layered over defaults.
pub fn merge_settings(data: &DataOpts, planner: &PlannerOpts, env: ConfigOverrides) -> ConfigOverrides {
    let cli = ConfigOverrides {
        max_walk_distance: planner.max_walk,
        walk_weight_multiplier: planner.walk_weight,
        teleport_weight: planner.teleport_weight,
        landmarks: data.landmarks.clone(),
        translocators: data.translocators.clone(),
        log_level: data.log_level.clone(),
    };
    env.overlay(cli)
}

/// Initialises logging and loads the graph named by `settings`.
pub fn prepare(settings: &ConfigOverrides) -> Result<PoiGraph> {
    logging::init(settings.log_level.as_deref());
    let (def_landmarks, def_translocators) = crate::util::default_paths();
    let landmarks = settings.landmarks.clone().unwrap_or(def_landmarks);
    let translocators = settings.translocators.clone().unwrap_or(def_translocators);
    debug!("data: landmarks={} translocators={}", landmarks.display(), translocators.display());
    loader::load_graph(&landmarks, &translocators)
}
