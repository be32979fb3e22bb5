//! Headless host for the airplane flight controller.
//!
//! The bevy app plays the collaborators the controller expects: a frame loop
//! (`Update`), a fixed-rate physics engine (`FixedUpdate`), a scene graph of
//! named nodes and a scripted pilot.

use std::time::Duration;

use anyhow::{Context, Result};
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use flight::{Airplane, BodyState, SurfaceRig};
use tracing::info;

pub mod airplane;
pub mod args;
pub mod config;
pub mod physics;
pub mod pilot;
pub mod scene;
pub mod telemetry;

pub use airplane::{AirplaneComp, FlightTelemetry, Rig};
pub use args::Args;
pub use config::{load_config, Config, NodeSpec, ScriptPhase};
pub use physics::{Body, PhysicsSettings, Position, Wheels};
pub use pilot::{InputScript, PilotInput};
pub use scene::{NodeId, SceneGraph};
pub use telemetry::RunFor;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSet;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicsSet;

/// Builds the simulator app and spawns the configured airplane.
///
/// Fails if the airplane's node layout cannot be bound to a surface rig.
pub fn build_sim_app(cfg: Config) -> Result<App> {
    let frame_hz = cfg.frame_hz.max(1.0);
    let physics_hz = cfg.physics_hz.max(1.0);

    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / frame_hz,
        ))),
    );

    app.insert_resource(Time::<Fixed>::from_hz(physics_hz))
        .insert_resource(PhysicsSettings {
            gravity: cfg.gravity,
            ground_height: cfg.ground_height,
            speed_limit: cfg.speed_limit,
        })
        .insert_resource(InputScript::new(cfg.script.clone()))
        .insert_resource(telemetry::TelemetryTimer {
            interval: cfg.telemetry_interval_secs,
            next: 0.0,
        })
        .init_resource::<PilotInput>();

    let scene = SceneGraph::from_specs(&cfg.nodes);
    let rig = SurfaceRig::bind(&scene).context("binding airplane surface rig")?;
    let spec = cfg.airplane.clone();
    let entity = app
        .world_mut()
        .spawn((
            AirplaneComp(Airplane::new(spec.clone())),
            Rig(rig),
            FlightTelemetry::default(),
            scene,
            Body(BodyState {
                mass: spec.flight.base_mass,
                ..BodyState::default()
            }),
            Position(Vec3::new(0.0, cfg.ground_height, 0.0)),
            Wheels {
                count: cfg.wheel_count,
                on_ground: cfg.wheel_count,
                ..Default::default()
            },
        ))
        .id();
    info!(?entity, frame_hz, physics_hz, "Spawned airplane");

    app.configure_sets(Update, FrameSet)
        .configure_sets(FixedUpdate, PhysicsSet)
        .add_systems(
            Update,
            (
                pilot::apply_script,
                airplane::tick_airplanes,
                telemetry::log_telemetry,
                telemetry::stop_after,
            )
                .chain()
                .in_set(FrameSet),
        )
        .add_systems(
            FixedUpdate,
            (
                physics::update_ground_contact,
                airplane::flight_pre_step,
                physics::integrate_bodies,
            )
                .chain()
                .in_set(PhysicsSet),
        );

    app.insert_resource(cfg);
    Ok(app)
}
