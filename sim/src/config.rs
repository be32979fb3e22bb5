use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use flight::{Action, AirplaneSpec, NodeRole, Side};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct Config {
    /// Frame ticks per second (control surfaces, engine).
    pub frame_hz: f64,
    /// Physics steps per second (force model, integration).
    pub physics_hz: f64,
    pub gravity: f32,
    pub ground_height: f32,
    /// Hard cap the integrator applies to body speed (m/s).
    pub speed_limit: f32,
    pub wheel_count: usize,
    pub telemetry_interval_secs: f32,
    pub airplane: AirplaneSpec,
    /// Named scene nodes of the airplane asset.
    pub nodes: Vec<NodeSpec>,
    /// Scripted pilot input, ordered by start time.
    pub script: Vec<ScriptPhase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub role: Option<NodeRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptPhase {
    /// Seconds since start at which this phase takes over.
    pub start: f32,
    #[serde(default = "default_piloted")]
    pub piloted: bool,
    #[serde(default)]
    pub actions: Vec<Action>,
}

fn default_piloted() -> bool {
    true
}

/// Stock airplane and stock gravity. At full power the stock engine drives
/// the airplane into `speed_limit` within seconds; the shipped `sim.toml`
/// tunes for a steady climb instead.
impl Default for Config {
    fn default() -> Self {
        Self {
            frame_hz: 60.0,
            physics_hz: 60.0,
            gravity: 9.81,
            ground_height: 0.0,
            speed_limit: 120.0,
            wheel_count: 3,
            telemetry_interval_secs: 1.0,
            airplane: AirplaneSpec::default(),
            nodes: trainer_nodes(),
            script: vec![
                ScriptPhase {
                    start: 0.0,
                    piloted: true,
                    actions: vec![Action::WheelBrake],
                },
                ScriptPhase {
                    start: 2.0,
                    piloted: true,
                    actions: vec![Action::Throttle],
                },
                ScriptPhase {
                    start: 8.0,
                    piloted: true,
                    actions: vec![Action::Throttle, Action::PitchUp],
                },
                ScriptPhase {
                    start: 12.0,
                    piloted: true,
                    actions: vec![Action::RollLeft, Action::YawLeft],
                },
                ScriptPhase {
                    start: 20.0,
                    piloted: false,
                    actions: vec![],
                },
            ],
        }
    }
}

/// Node layout of the stock trainer asset.
pub fn trainer_nodes() -> Vec<NodeSpec> {
    let node = |name: &str, role: Option<NodeRole>| NodeSpec {
        name: name.to_string(),
        role,
    };
    vec![
        node("fuselage", None),
        node("rotor", Some(NodeRole::Rotor)),
        node("aileron_left", Some(NodeRole::Aileron(Side::Left))),
        node("aileron_right", Some(NodeRole::Aileron(Side::Right))),
        node("elevator_left", Some(NodeRole::Elevator)),
        node("elevator_right", Some(NodeRole::Elevator)),
        node("rudder", Some(NodeRole::Rudder)),
    ]
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(path = %path.display(), "No config file; using defaults");
        return Ok(Config::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let mut cfg: Config =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.script.sort_by(|a, b| a.start.total_cmp(&b.start));
    Ok(cfg)
}
