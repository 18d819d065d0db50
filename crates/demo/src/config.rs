use std::{path::PathBuf, sync::LazyLock};

/// Points at a JSON style object to run on the demo node instead of the
/// built-in one.
pub const STYLE_PATH_ENV: &str = "AWSM_TRANSITION_STYLE";

#[derive(Debug, Clone)]
pub struct Config {
    pub frame_rate: f64,
    // simulated seconds per tick
    pub tick: f64,
    pub max_ticks: usize,
    // log engine state every n ticks
    pub report_every: usize,
    pub log_animation_timings: bool,
    pub style_path: Option<PathBuf>,
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| Config {
    frame_rate: 60.0,
    tick: 1.0 / 60.0,
    max_ticks: 60 * 10,
    report_every: if cfg!(debug_assertions) { 15 } else { 60 },
    log_animation_timings: cfg!(debug_assertions),
    style_path: std::env::var_os(STYLE_PATH_ENV).map(PathBuf::from),
});
