use super::terms::*;
use super::types::{FlightStepDebug, PreStepContext};
use super::util::body_axes;
use crate::FlightModelSpec;

/// Arcade force model run by the physics engine right before it integrates
/// the airplane body.
///
/// The only state carried between steps is the previous step's drag
/// coefficient, which feeds back into the next step's thrust.
#[derive(Debug, Clone, Default)]
pub struct FlightForceModel {
    last_drag: f32,
}

impl FlightForceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_drag(last_drag: f32) -> Self {
        Self { last_drag }
    }

    pub fn last_drag(&self) -> f32 {
        self.last_drag
    }

    /// Mutates body velocity, angular velocity and mass for one physics step.
    /// See `apply_pre_physics_step_dbg` for the intermediate values.
    pub fn apply_pre_physics_step(&mut self, spec: &FlightModelSpec, ctx: PreStepContext<'_>) {
        self.apply_pre_physics_step_dbg(spec, ctx, None);
    }

    /// Variant of `apply_pre_physics_step` that fills out an optional debug
    /// telemetry struct.
    pub fn apply_pre_physics_step_dbg(
        &mut self,
        spec: &FlightModelSpec,
        ctx: PreStepContext<'_>,
        dbg: Option<&mut FlightStepDebug>,
    ) {
        let PreStepContext {
            body,
            input,
            engine_power,
            wheels_on_ground,
        } = ctx;

        let (right, up, forward) = body_axes(body.orientation);
        let forward_speed = body.velocity.dot(forward);

        let flight_mode_influence = flight_mode_influence(spec, forward_speed);
        let lower_mass_influence = lower_mass_influence(spec, forward_speed);
        body.mass = effective_mass(spec, lower_mass_influence);

        let thrust_mode = ThrustMode::select(input.throttle, input.brake, wheels_on_ground);
        let speed_modifier = thrust_mode.speed_modifier(spec);

        // Thrust uses last step's drag, not this one's.
        let last_drag_in = self.last_drag;
        let thrust = thrust_gain(body.velocity.length(), last_drag_in, speed_modifier, engine_power);
        body.velocity += forward * thrust;

        let speed = body.velocity.length();
        let drag = drag_coefficient(spec, speed, engine_power);
        body.velocity -= body.velocity * drag;
        self.last_drag = drag;

        let lift = lift_amount(spec, speed, engine_power);
        body.velocity += up * lift;

        body.angular_velocity =
            damp_angular_velocity(spec, body.angular_velocity, flight_mode_influence);

        if let Some(d) = dbg {
            d.inputs = input;
            d.engine_power = engine_power;
            d.wheels_on_ground = wheels_on_ground;
            d.right = right;
            d.up = up;
            d.forward = forward;
            d.forward_speed = forward_speed;
            d.flight_mode_influence = flight_mode_influence;
            d.lower_mass_influence = lower_mass_influence;
            d.mass = body.mass;
            d.thrust_mode = Some(thrust_mode);
            d.speed_modifier = speed_modifier;
            d.last_drag_in = last_drag_in;
            d.thrust = thrust;
            d.speed_after_thrust = speed;
            d.drag = drag;
            d.lift = lift;
            d.velocity_out = body.velocity;
            d.angular_velocity_out = body.angular_velocity;
        }
    }
}
