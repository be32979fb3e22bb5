//! Minimal rigid-body integrator standing in for a full physics engine.
//!
//! Gravity, a flat ground plane, wheel brake friction and nose-wheel yaw.
//! The flight model runs before `integrate_bodies` in the same fixed step.

use bevy::prelude::*;
use flight::{BodyState, GroundContactInfo, SteeringChannel, WheelBrakeChannel};
use tracing::warn;

// Distance between nose wheel and main gear (m).
const WHEELBASE: f32 = 2.5;
// Height above ground still counted as wheel contact (m).
const CONTACT_SLOP: f32 = 0.01;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Body(pub BodyState);

#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct Position(pub Vec3);

/// Landing gear: reports ground contact and receives steering and brake.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Wheels {
    pub count: usize,
    pub on_ground: usize,
    pub steering: f32,
    pub brake: f32,
}

impl GroundContactInfo for Wheels {
    fn wheels_on_ground(&self) -> usize {
        self.on_ground
    }
}

impl SteeringChannel for Wheels {
    fn set_steering_value(&mut self, value: f32) {
        self.steering = value;
    }
}

impl WheelBrakeChannel for Wheels {
    fn set_wheel_brake(&mut self, force: f32) {
        self.brake = force;
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub ground_height: f32,
    pub speed_limit: f32,
}

pub fn update_ground_contact(
    settings: Res<PhysicsSettings>,
    mut q: Query<(&Position, &mut Wheels)>,
) {
    for (pos, mut wheels) in &mut q {
        wheels.on_ground = if pos.y <= settings.ground_height + CONTACT_SLOP {
            wheels.count
        } else {
            0
        };
    }
}

pub fn integrate_bodies(
    time: Res<Time>,
    settings: Res<PhysicsSettings>,
    mut q: Query<(Entity, &mut Body, &mut Position, &Wheels)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (entity, mut body, mut pos, wheels) in &mut q {
        let body = &mut body.0;
        if !body.velocity.is_finite() || !body.angular_velocity.is_finite() {
            warn!(?entity, ?body, "Non-finite body state; zeroing velocities");
            body.velocity = Vec3::ZERO;
            body.angular_velocity = Vec3::ZERO;
        }

        body.velocity.y -= settings.gravity * dt;

        if wheels.on_ground > 0 {
            let forward = body.orientation * Vec3::Z;
            let forward_speed = body.velocity.dot(forward);
            body.angular_velocity.y = wheels.steering * forward_speed / WHEELBASE;
            if wheels.brake > 0.0 {
                let keep = (1.0 - wheels.brake * dt).max(0.0);
                body.velocity.x *= keep;
                body.velocity.z *= keep;
            }
        }

        body.velocity = body.velocity.clamp_length_max(settings.speed_limit.max(0.0));
        **pos += body.velocity * dt;
        if pos.y < settings.ground_height {
            pos.y = settings.ground_height;
            body.velocity.y = body.velocity.y.max(0.0);
        }

        let delta = Quat::from_scaled_axis(body.angular_velocity * dt);
        body.orientation = (delta * body.orientation).normalize();
    }
}
