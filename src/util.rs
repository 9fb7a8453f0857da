use std::path::PathBuf;

pub const LANDMARKS_FILE: &str = "landmarks.yaml";
pub const TRANSLOCATORS_FILE: &str = "translocators.yaml";

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn default_paths() -> (PathBuf, PathBuf) {
    let root = repo_root();
    (root.join(LANDMARKS_FILE), root.join(TRANSLOCATORS_FILE))
}
