//! Headless command-line runner for the Skulk demo level.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;
use log::{debug, info};
use skulk::plugin::{ActionInput, SimulationPlugin, SimulationResource};
use skulk::presentation::{replay_animations, EffectLog};
use skulk::{init_logging, spawn_world, InputSnapshot, SimulationConfig};

/// Fixed frame time used by the headless run.
const FRAME: Duration = Duration::from_millis(16);

/// Headless run of the Skulk demo level
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 240)]
    ticks: u64,
    /// JSON file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimulationConfig> {
    let Some(path) = path else {
        return Ok(SimulationConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    SimulationConfig::from_json_reader(BufReader::new(file))
        .with_context(|| format!("loading {}", path.display()))
}

/// Input held on frame `tick` of the demo script: walk right, sprint,
/// crouch, hop, walk up, then rest.
fn scripted_input(tick: u64) -> InputSnapshot {
    let mut input = InputSnapshot::default();
    match tick % 240 {
        0..=59 => input.right = true,
        60..=89 => {
            input.right = true;
            input.run = true;
        }
        90..=119 => input.crouch = true,
        120..=129 => input.jump = true,
        130..=179 => input.up = true,
        _ => {}
    }
    input
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    let (simulation, mut animator) = spawn_world(config).context("building demo world")?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(SimulationResource(simulation))
        .add_plugins(SimulationPlugin);

    for tick in 0..args.ticks {
        app.world_mut().resource_mut::<ActionInput>().0 = scripted_input(tick);
        app.update();

        let effects = app.world_mut().resource_mut::<EffectLog>().drain();
        if !effects.is_empty() {
            debug!("frame {tick}: {effects:?}");
        }
        replay_animations(&effects, &mut animator);
        animator.advance_all();
    }

    let simulation = app.world().resource::<SimulationResource>();
    let snapshot = serde_json::to_string_pretty(&simulation.snapshot())?;
    info!(
        "final state after {} ticks:\n{snapshot}",
        simulation.tick_count()
    );
    Ok(())
}
