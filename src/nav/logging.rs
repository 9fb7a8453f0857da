use env_logger::{Builder, Env, Target};

const CRATE: &str = env!("CARGO_CRATE_NAME");

/// Logs go to stderr so `route --json` output stays parseable. `RUST_LOG`
/// applies when no level is given; otherwise `level` is layered on top.
pub fn init(level: Option<&str>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(filters) = level.and_then(directives) {
        builder.parse_filters(&filters);
    }
    let _ = builder.target(Target::Stderr).format_timestamp(None).format_module_path(false).try_init();
}

/// A bare level (`debug`) is scoped to this crate; full directive strings
/// (`warn,poi_navigator::nav::planner=trace`) pass through unchanged.
fn directives(level: &str) -> Option<String> {
    let level = level.trim();
    if level.is_empty() {
        None
    } else if level.contains('=') || level.contains(',') {
        Some(level.to_string())
    } else {
        Some(format!("{}={}", CRATE, level))
    }
}
