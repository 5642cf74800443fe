use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use deskhop::layout::{Point, Rect, Size};
use deskhop::{
    BehaviorKind, DirectionInput, PlayerController, RecordingHost, WindowConfig, WindowId,
    WindowRegistry,
};

#[derive(Parser, Debug)]
#[command(
    name = "hop-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Headless benchmark for window placement and player motion"
)]
struct BenchCli {
    /// Number of windows on the field.
    #[arg(short = 'n', long = "windows", value_name = "COUNT", default_value_t = 64)]
    windows: usize,

    /// Number of drag steps and player steps to run.
    #[arg(short = 'i', long = "iterations", value_name = "COUNT", default_value_t = 10_000)]
    iterations: usize,
}

struct BenchConfig {
    windows: usize,
    iterations: usize,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(2..=10_000).contains(&cli.windows) {
            return Err("windows must be between 2 and 10000".to_string());
        }
        if !(1..=10_000_000).contains(&cli.iterations) {
            return Err("iterations must be between 1 and 10000000".to_string());
        }
        Ok(Self {
            windows: cli.windows,
            iterations: cli.iterations,
        })
    }
}

const FIELD: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 1080,
};

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let (mut registry, dragged) = build_field(config.windows)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let placement = run_drags(&mut registry, dragged, config.iterations);
    let motion = run_player(&registry, config.iterations);
    let host_calls = registry.host().calls().len();

    println!("hop-bench: {} windows, {} iterations", config.windows, config.iterations);
    println!("{}", placement.report("placement"));
    println!("{}", motion.report("player"));
    println!("host calls: {host_calls}");
    Ok(())
}

/// Lays windows out on a grid with a mix of behaviors. Returns the registry
/// and the window the benchmark drags around.
fn build_field(
    count: usize,
) -> Result<(WindowRegistry<RecordingHost>, WindowId), deskhop::WindowError> {
    use BehaviorKind::*;
    let mut registry = WindowRegistry::with_host(RecordingHost::new());
    let columns = (count as f64).sqrt().ceil() as i32;
    let cell = Size::new(FIELD.width / columns.max(1), FIELD.height / columns.max(1));
    let mut dragged = None;
    for index in 0..count as i32 {
        let rect = Rect::new(
            (index % columns) * cell.width,
            (index / columns) * cell.height,
            (cell.width - 4).max(8),
            (cell.height - 4).max(4),
        );
        let behaviors: &[BehaviorKind] = match index % 5 {
            0 => &[Walkable, Movable],
            1 => &[Passable],
            2 => &[Walkable, Passable],
            3 => &[Unblockable, Walkable],
            _ => &[],
        };
        let config = WindowConfig::new(format!("w{index}"), rect).with_behaviors(behaviors);
        let id = registry.create_window(&config)?;
        if dragged.is_none() && index % 5 == 0 {
            dragged = Some(id);
        }
    }
    registry.take_events();
    let dragged = dragged.ok_or_else(|| {
        deskhop::WindowError::Configuration("no movable window was created".to_string())
    })?;
    Ok((registry, dragged))
}

fn run_drags(
    registry: &mut WindowRegistry<RecordingHost>,
    id: WindowId,
    iterations: usize,
) -> BenchStats {
    let mut stats = BenchStats::default();
    let start = registry.window(id).map(|w| w.rect()).unwrap_or_default();
    let _ = registry.begin_move(id, start.position());
    for step in 0..iterations {
        // sweep back and forth across the field
        let phase = (step % 400) as i32;
        let offset = if phase < 200 { phase } else { 400 - phase };
        let pointer = Point::new(start.x + offset * 8, start.y + offset * 4);
        let begin = Instant::now();
        let _ = registry.drag_to(pointer);
        stats.record(begin.elapsed());
        registry.take_events();
    }
    registry.end_drag();
    stats
}

fn run_player(registry: &WindowRegistry<RecordingHost>, iterations: usize) -> BenchStats {
    let mut stats = BenchStats::default();
    let mut player = PlayerController::new(60.0, Size::new(2.0, 2.0));
    player.center_in(FIELD, Size::new(2.0, 2.0));
    let inputs = [
        DirectionInput {
            right: true,
            ..Default::default()
        },
        DirectionInput {
            down: true,
            ..Default::default()
        },
        DirectionInput {
            left: true,
            ..Default::default()
        },
        DirectionInput {
            up: true,
            ..Default::default()
        },
    ];
    for step in 0..iterations {
        let input = inputs[(step / 50) % inputs.len()];
        let begin = Instant::now();
        player.step(input, Duration::from_millis(16), registry.windows(), FIELD);
        stats.record(begin.elapsed());
    }
    stats
}

#[derive(Default)]
struct BenchStats {
    samples: Vec<Duration>,
}

impl BenchStats {
    fn record(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    fn report(&self, label: &str) -> String {
        if self.samples.is_empty() {
            return format!("{label}: no samples");
        }
        let mut sorted = self.samples.clone();
        sorted.sort();
        let total: Duration = sorted.iter().sum();
        let mean = total / sorted.len() as u32;
        let percentile = |p: f64| sorted[((sorted.len() - 1) as f64 * p).round() as usize];
        format!(
            "{label}: mean {:.2}us  p50 {:.2}us  p99 {:.2}us  max {:.2}us  total {:.2}ms",
            mean.as_secs_f64() * 1e6,
            percentile(0.5).as_secs_f64() * 1e6,
            percentile(0.99).as_secs_f64() * 1e6,
            sorted[sorted.len() - 1].as_secs_f64() * 1e6,
            total.as_secs_f64() * 1e3,
        )
    }
}
