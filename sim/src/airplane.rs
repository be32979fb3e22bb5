use bevy::prelude::*;
use flight::{Airplane, FlightStepDebug, SurfaceRig};

use crate::physics::{Body, Wheels};
use crate::pilot::PilotInput;
use crate::scene::{NodeId, SceneGraph};

#[derive(Component, Debug, Clone)]
pub struct AirplaneComp(pub Airplane);

#[derive(Component, Debug, Clone)]
pub struct Rig(pub SurfaceRig<NodeId>);

/// Intermediates of this airplane's last pre-step.
#[derive(Component, Debug, Clone, Default)]
pub struct FlightTelemetry(pub FlightStepDebug);

/// Frame tick: engine, control-surface springs, node poses, wheel channels.
pub fn tick_airplanes(
    time: Res<Time>,
    input: Res<PilotInput>,
    mut q: Query<(&mut AirplaneComp, &Rig, &mut SceneGraph, &mut Wheels)>,
) {
    let dt = time.delta_secs();
    for (mut plane, rig, mut scene, mut wheels) in &mut q {
        let tick = plane.0.advance(dt, &input.0);
        plane.0.present(&tick, &rig.0, &mut *scene, &mut *wheels);
    }
}

/// Runs in `FixedUpdate` ahead of integration, every step.
pub fn flight_pre_step(
    input: Res<PilotInput>,
    mut q: Query<(&mut AirplaneComp, &mut Body, &Wheels, &mut FlightTelemetry)>,
) {
    for (mut plane, mut body, wheels, mut telemetry) in &mut q {
        let mut dbg = FlightStepDebug::default();
        plane
            .0
            .apply_pre_physics_step_dbg(&mut body.0, &input.0, wheels, Some(&mut dbg));
        telemetry.0 = dbg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use flight::{planespecs::trainer_spec, BodyState};

    fn spawn_plane(world: &mut World, forward_speed: f32, on_ground: usize) -> Entity {
        world
            .spawn((
                AirplaneComp(Airplane::new(trainer_spec())),
                Body(BodyState {
                    velocity: Vec3::new(0.0, 0.0, forward_speed),
                    ..BodyState::default()
                }),
                Wheels {
                    count: 3,
                    on_ground,
                    ..Default::default()
                },
                FlightTelemetry::default(),
            ))
            .id()
    }

    #[test]
    fn each_airplane_keeps_its_own_step_telemetry() {
        let mut world = World::new();
        world.init_resource::<PilotInput>();
        let parked = spawn_plane(&mut world, 0.0, 3);
        let cruising = spawn_plane(&mut world, 20.0, 0);

        world.run_system_once(flight_pre_step).expect("pre-step");

        let parked = &world.get::<FlightTelemetry>(parked).expect("telemetry").0;
        let cruising = &world.get::<FlightTelemetry>(cruising).expect("telemetry").0;
        assert_eq!(parked.forward_speed, 0.0);
        assert_eq!(parked.thrust_mode, Some(flight::ThrustMode::GroundIdle));
        assert_eq!(cruising.forward_speed, 20.0);
        assert_eq!(cruising.flight_mode_influence, 1.0);
        assert_eq!(cruising.thrust_mode, Some(flight::ThrustMode::AirborneIdle));
    }
}
