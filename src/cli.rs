//! Command line options and their validated form.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_KEY_HOLD, DEFAULT_PLAYER_SPEED, DEFAULT_TICK};
use crate::window::WindowConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "deskhop",
    version = env!("CARGO_PKG_VERSION"),
    about = "Platformer where the windows are the platforms"
)]
pub struct Cli {
    /// Level to start on, counting from 1.
    #[arg(short = 'l', long = "level", value_name = "N", default_value_t = 1)]
    pub level: usize,

    /// Player speed in cells per second.
    #[arg(short = 's', long = "speed", value_name = "CELLS", default_value_t = DEFAULT_PLAYER_SPEED)]
    pub speed: f64,

    /// Simulation tick interval.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = DEFAULT_TICK.as_millis() as u64)]
    pub tick_ms: u64,

    /// How long a movement key stays held after its last press when the
    /// terminal does not report releases.
    #[arg(long = "key-hold-ms", value_name = "MS", default_value_t = DEFAULT_KEY_HOLD.as_millis() as u64)]
    pub key_hold_ms: u64,

    /// Write diagnostics to this file instead of the in-app debug log.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Extra window added to every level, as `title@x,y,WxH:flag,flag`.
    /// May be repeated.
    #[arg(short = 'w', long = "window", value_name = "TEMPLATE")]
    pub windows: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Zero-based level index.
    pub start_level: usize,
    pub speed: f64,
    pub tick: Duration,
    pub key_hold: Duration,
    pub log_file: Option<PathBuf>,
    pub windows: Vec<WindowConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: 0,
            speed: DEFAULT_PLAYER_SPEED,
            tick: DEFAULT_TICK,
            key_hold: DEFAULT_KEY_HOLD,
            log_file: None,
            windows: Vec::new(),
        }
    }
}

impl TryFrom<&Cli> for GameConfig {
    type Error = String;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.level == 0 {
            return Err("levels are numbered from 1".to_string());
        }
        if !cli.speed.is_finite() || !(0.5..=200.0).contains(&cli.speed) {
            return Err("speed must be between 0.5 and 200 cells per second".to_string());
        }
        if !(1..=1000).contains(&cli.tick_ms) {
            return Err("tick must be between 1 and 1000 ms".to_string());
        }
        if cli.key_hold_ms > 5000 {
            return Err("key hold must be at most 5000 ms".to_string());
        }
        let windows = cli
            .windows
            .iter()
            .map(|template| {
                template
                    .parse::<WindowConfig>()
                    .map_err(|err| format!("--window {template}: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            start_level: cli.level - 1,
            speed: cli.speed,
            tick: Duration::from_millis(cli.tick_ms),
            key_hold: Duration::from_millis(cli.key_hold_ms),
            log_file: cli.log_file.clone(),
            windows,
        })
    }
}
