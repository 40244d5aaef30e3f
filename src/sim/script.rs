//! Scripted input replay
//!
//! A script is a list of steps, each one or more ticks with the pointer
//! events to feed in on its first tick. Since the simulation is fully
//! determined by its configuration and input, replaying a script always
//! produces the same snapshots.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::interaction::InputEvent;
use super::state::Simulation;
use crate::config::{ConfigError, SimConfig};

fn one() -> u32 {
    1
}

/// A run of ticks sharing one step size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Step size override (seconds); the run's default when absent
    #[serde(default)]
    pub dt: Option<f32>,
    /// Number of ticks this step covers
    #[serde(default = "one")]
    pub repeat: u32,
    /// Events applied on the first of those ticks
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// A replayable input script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Configuration to run with (the caller's when absent)
    #[serde(default)]
    pub config: Option<SimConfig>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let script = Self::from_json(&json)?;
        log::info!(
            "Loaded script from {} ({} steps, {} ticks)",
            path.as_ref().display(),
            script.steps.len(),
            script.total_ticks()
        );
        Ok(script)
    }

    /// Total ticks the script advances
    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| s.repeat as u64).sum()
    }
}

/// State after one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub held: bool,
}

impl Snapshot {
    pub fn of(sim: &Simulation) -> Self {
        Self {
            tick: sim.time_ticks,
            position: sim.ball_position(),
            velocity: sim.ball_velocity(),
            held: sim.is_held(),
        }
    }
}

/// Replay `script` on `sim`, handing the state to `on_tick` after every tick.
///
/// Nothing is buffered, so a run can be as long as the script says.
pub fn replay(
    sim: &mut Simulation,
    script: &Script,
    default_dt: f32,
    mut on_tick: impl FnMut(&Simulation),
) {
    for step in &script.steps {
        let dt = step.dt.unwrap_or(default_dt);
        for i in 0..step.repeat {
            let events: &[InputEvent] = if i == 0 { &step.events } else { &[] };
            sim.advance(dt, events);
            on_tick(sim);
        }
    }
}

/// Replay `script` on `sim`, returning a snapshot per tick
pub fn run_script(sim: &mut Simulation, script: &Script, default_dt: f32) -> Vec<Snapshot> {
    let mut snapshots = Vec::new();
    replay(sim, script, default_dt, |sim| snapshots.push(Snapshot::of(sim)));
    snapshots
}
