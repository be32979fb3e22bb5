use crate::{ControlInputState, Quatf, Vec3f};

use super::terms::ThrustMode;

/// The part of the physics engine's rigid body the flight model touches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Orientation as quaternion (body→world).
    /// Body axes: +Z forward, +Y up, +X right.
    pub orientation: Quatf,
    /// World-space linear velocity (m/s).
    pub velocity: Vec3f,
    /// World-space angular velocity (rad/s).
    pub angular_velocity: Vec3f,
    pub mass: f32,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            orientation: Quatf::IDENTITY,
            velocity: Vec3f::ZERO,
            angular_velocity: Vec3f::ZERO,
            mass: 50.0,
        }
    }
}

/// Everything one pre-step needs, passed explicitly by the physics host.
#[derive(Debug)]
pub struct PreStepContext<'a> {
    pub body: &'a mut BodyState,
    pub input: ControlInputState,
    pub engine_power: f32,
    pub wheels_on_ground: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlightStepDebug {
    pub inputs: ControlInputState,
    pub engine_power: f32,
    pub wheels_on_ground: usize,
    // Orientation basis (world)
    pub right: Vec3f,
    pub up: Vec3f,
    pub forward: Vec3f,
    pub forward_speed: f32,
    pub flight_mode_influence: f32,
    pub lower_mass_influence: f32,
    pub mass: f32,
    pub thrust_mode: Option<ThrustMode>,
    pub speed_modifier: f32,
    pub last_drag_in: f32,
    pub thrust: f32,
    pub speed_after_thrust: f32,
    pub drag: f32,
    pub lift: f32,
    pub velocity_out: Vec3f,
    pub angular_velocity_out: Vec3f,
}
