//! Meteor Rush entry point
//!
//! Headless native runner: drives the world through the fixed timestep
//! scheduler and records each frame into a sprite draw list.
//!
//! Usage: `meteor-rush [--settings FILE] [--sprites FILE] [--seconds N] [--manual]`

use std::path::PathBuf;

use clap::Parser;
use meteor_rush::platform::{Action, FixedTimestep, ScriptedInput, autopilot_input};
use meteor_rush::renderer::DrawList;
use meteor_rush::sim::{GameEvent, TickInput, World};
use meteor_rush::{Assets, Settings};

/// Host frame time (a 60 Hz display)
const FRAME_DT: f64 = 1.0 / 60.0;

/// Settings file picked up when `--settings` is not given
const DEFAULT_SETTINGS_PATH: &str = "meteor-rush.json";

#[derive(Parser, Debug)]
#[command(name = "meteor-rush")]
#[command(about = "Run the meteor shooter headless and print a summary")]
struct Args {
    /// Settings JSON; required to exist when given
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Sprite manifest JSON (stock sprite sizes when omitted)
    #[arg(long)]
    sprites: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,

    /// Hold fire instead of running the autopilot
    #[arg(long)]
    manual: bool,
}

#[derive(Debug, Default)]
struct RunStats {
    ticks: u64,
    bullets_fired: usize,
    meteors_spawned: usize,
    meteors_destroyed: usize,
    deaths: usize,
}

impl RunStats {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::BulletFired => self.bullets_fired += 1,
                GameEvent::MeteorSpawned => self.meteors_spawned += 1,
                GameEvent::MeteorsDestroyed { meteors, .. } => self.meteors_destroyed += meteors,
                GameEvent::PlayerDestroyed => {
                    self.deaths += 1;
                    log::info!("Ship destroyed after {} ticks", self.ticks);
                }
            }
        }
    }
}

fn run(args: Args) -> meteor_rush::Result<RunStats> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::load_or_default(DEFAULT_SETTINGS_PATH),
    };
    let assets = match &args.sprites {
        Some(path) => Assets::load_manifest(path)?,
        None => Assets::default(),
    };

    let mut timestep = FixedTimestep::new(settings.ticks_per_second);
    let mut world = World::new(settings, assets)?;
    let mut draw_list = DrawList::new();
    let mut held = ScriptedInput::new();
    if args.manual {
        held.press(Action::Fire);
    }

    let frames = (args.seconds.max(0.0) / FRAME_DT).round() as u64;
    let mut stats = RunStats::default();

    for _ in 0..frames {
        for _ in 0..timestep.advance(FRAME_DT) {
            let input = if args.manual {
                TickInput::poll(&held)
            } else {
                autopilot_input(&world)
            };
            let events = world.update(&input);
            stats.ticks += 1;
            stats.record(&events);
        }

        draw_list.clear();
        world.draw(&mut draw_list);
        log::trace!(
            "Frame: {} sprites, {} bytes of instance data",
            draw_list.len(),
            draw_list.as_bytes().len()
        );
    }

    log::info!(
        "Finished with {} meteors and {} bullets alive",
        world.meteors.len(),
        world.bullets.len()
    );
    Ok(stats)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Meteor Rush (headless) starting...");

    let args = Args::parse();
    match run(args) {
        Ok(stats) => {
            println!(
                "{} ticks: {} meteors spawned, {} destroyed, {} bullets fired, {} deaths",
                stats.ticks,
                stats.meteors_spawned,
                stats.meteors_destroyed,
                stats.bullets_fired,
                stats.deaths
            );
        }
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding page instead
}
