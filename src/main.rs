//! Hexspin headless runner
//!
//! Runs the simulation without a window: either a scripted input replay or a
//! number of free ticks, then reports where the ball ended up.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use hexspin::SimConfig;
use hexspin::sim::{Script, ScriptStep, Simulation, Snapshot, replay};

#[derive(Parser, Debug)]
#[command(name = "hexspin", about = "Ball in a rotating hexagon, simulated headless")]
struct Args {
    /// JSON configuration file (defaults used when absent)
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// JSON input script to replay
    #[arg(long)]
    script: Option<std::path::PathBuf>,

    /// Ticks to run when no script is given
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Print every tick's snapshot as a line of JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Hexspin (headless) starting...");

    let script = match &args.script {
        Some(path) => Script::load(path)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => Script {
            config: None,
            steps: vec![ScriptStep {
                dt: None,
                repeat: args.ticks,
                events: Vec::new(),
            }],
        },
    };

    // A config file wins over one embedded in the script
    let config = match (&args.config, &script.config) {
        (Some(path), _) => SimConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        (None, Some(embedded)) => embedded.clone(),
        (None, None) => {
            log::info!("Using default config");
            SimConfig::default()
        }
    };
    config.validate().context("invalid configuration")?;

    let mut sim = Simulation::new(config);
    let dt = sim.config.dt();
    log::info!("Running {} ticks at {} Hz", script.total_ticks(), sim.config.step_hz);

    if args.json {
        let mut out = std::io::stdout().lock();
        let mut result: Result<()> = Ok(());
        replay(&mut sim, &script, dt, |sim| {
            if result.is_ok() {
                result = serde_json::to_writer(&mut out, &Snapshot::of(sim))
                    .map_err(anyhow::Error::from)
                    .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
            }
        });
        result.context("writing snapshots")?;
    } else {
        replay(&mut sim, &script, dt, |_| {});
        let last = Snapshot::of(&sim);
        log::info!("Finished after {} ticks", last.tick);
        println!(
            "tick {}: position ({:.2}, {:.2}) velocity ({:.2}, {:.2}){}",
            last.tick,
            last.position.x,
            last.position.y,
            last.velocity.x,
            last.velocity.y,
            if last.held { " [held]" } else { "" }
        );
        println!("container angle: {:.4} rad", sim.container.angle);
    }

    Ok(())
}
