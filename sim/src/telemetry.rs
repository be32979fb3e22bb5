use bevy::prelude::*;
use tracing::info;

use crate::airplane::{AirplaneComp, FlightTelemetry};
use crate::physics::{Body, Position, Wheels};

#[derive(Resource, Debug, Clone, Copy)]
pub struct TelemetryTimer {
    pub interval: f32,
    pub next: f32,
}

pub fn log_telemetry(
    time: Res<Time>,
    mut timer: ResMut<TelemetryTimer>,
    q: Query<(&AirplaneComp, &FlightTelemetry, &Body, &Position, &Wheels)>,
) {
    let now = time.elapsed_secs();
    if timer.interval <= 0.0 || now < timer.next {
        return;
    }
    timer.next = now + timer.interval;

    for (plane, flight, body, pos, wheels) in &q {
        info!(
            elapsed = now,
            engine_power = plane.0.engine_power(),
            speed = body.0.velocity.length(),
            forward_speed = flight.0.forward_speed,
            altitude = pos.y,
            mass = body.0.mass,
            on_ground = wheels.on_ground,
            mode = ?flight.0.thrust_mode,
            aileron = plane.0.surfaces().aileron().position,
            "Airplane telemetry"
        );
    }
}

/// Exits once the configured run time has elapsed.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RunFor {
    pub seconds: f32,
}

pub fn stop_after(time: Res<Time>, run_for: Option<Res<RunFor>>, mut exit: EventWriter<AppExit>) {
    let Some(run_for) = run_for else {
        return;
    };
    if time.elapsed_secs() >= run_for.seconds {
        info!(elapsed = time.elapsed_secs(), "Run time reached; exiting");
        exit.write(AppExit::Success);
    }
}
