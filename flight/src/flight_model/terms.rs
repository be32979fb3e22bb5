use crate::{FlightModelSpec, Vec3f};

/// Which thrust branch drives the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThrustMode {
    FullThrottle,
    Braking,
    GroundIdle,
    AirborneIdle,
}

impl ThrustMode {
    /// Throttle beats brake beats ground contact beats idle.
    pub fn select(throttle: bool, brake: bool, wheels_on_ground: usize) -> Self {
        if throttle && !brake {
            ThrustMode::FullThrottle
        } else if brake && !throttle {
            ThrustMode::Braking
        } else if wheels_on_ground > 0 {
            ThrustMode::GroundIdle
        } else {
            ThrustMode::AirborneIdle
        }
    }

    pub fn speed_modifier(self, spec: &FlightModelSpec) -> f32 {
        match self {
            ThrustMode::FullThrottle => spec.throttle_modifier,
            ThrustMode::Braking => spec.brake_modifier,
            ThrustMode::GroundIdle => spec.ground_idle_modifier,
            ThrustMode::AirborneIdle => spec.air_idle_modifier,
        }
    }
}

// ----- Regime blending -----

pub(super) fn flight_mode_influence(spec: &FlightModelSpec, forward_speed: f32) -> f32 {
    speed_fraction(forward_speed, spec.flight_speed)
}

pub(super) fn lower_mass_influence(spec: &FlightModelSpec, forward_speed: f32) -> f32 {
    speed_fraction(forward_speed, spec.lower_mass_speed)
}

fn speed_fraction(speed: f32, full_at: f32) -> f32 {
    if full_at <= 0.0 {
        return 1.0;
    }
    (speed / full_at).clamp(0.0, 1.0)
}

pub(super) fn effective_mass(spec: &FlightModelSpec, lower_mass_influence: f32) -> f32 {
    spec.base_mass * (1.0 - lower_mass_influence * spec.mass_reduction)
}

// ----- Linear terms -----

/// Velocity gained along forward this step. `last_drag` is the previous
/// step's drag coefficient.
pub(super) fn thrust_gain(speed: f32, last_drag: f32, speed_modifier: f32, engine_power: f32) -> f32 {
    (speed * last_drag + speed_modifier) * engine_power
}

pub(super) fn drag_coefficient(spec: &FlightModelSpec, speed: f32, engine_power: f32) -> f32 {
    speed.powf(spec.drag_exponent) * spec.drag_factor * engine_power
}

pub(super) fn lift_amount(spec: &FlightModelSpec, speed: f32, engine_power: f32) -> f32 {
    (speed * spec.lift_factor * engine_power).clamp(0.0, spec.max_lift.max(0.0))
}

// ----- Angular -----

pub(super) fn damp_angular_velocity(
    spec: &FlightModelSpec,
    angular_velocity: Vec3f,
    flight_mode_influence: f32,
) -> Vec3f {
    angular_velocity.lerp(angular_velocity * spec.angular_damping, flight_mode_influence)
}
