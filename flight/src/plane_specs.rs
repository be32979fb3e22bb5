use serde::{Deserialize, Serialize};

use crate::SpringParams;

/// Tuning constants for one airplane type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirplaneSpec {
    /// Nominal frame rate the control-surface springs are normalized to.
    pub frame_rate: f32,
    pub steering: SpringParams,
    pub aileron: SpringParams,
    pub elevator: SpringParams,
    pub rudder: SpringParams,
    /// Aileron/elevator/rudder deflection target in radians.
    pub surface_amplitude: f32,
    /// Nose-wheel steering target.
    pub steering_amplitude: f32,
    pub wheel_brake_force: f32,
    pub engine: EngineSpec,
    pub flight: FlightModelSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSpec {
    pub max_power: f32,
    /// Power gained per second while piloted.
    pub spool_up_rate: f32,
    /// Power lost per second while unpiloted.
    pub spool_down_rate: f32,
    /// Rotor radians per second per unit of power.
    pub rotor_spin_rate: f32,
}

/// Constants of the pre-step force model. Every force term is additionally
/// scaled by engine power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightModelSpec {
    /// Forward airspeed at which angular damping is fully engaged.
    pub flight_speed: f32,
    /// Forward airspeed at which the mass reduction is fully applied.
    pub lower_mass_speed: f32,
    pub base_mass: f32,
    /// Fraction of `base_mass` shed at full lower-mass influence.
    pub mass_reduction: f32,
    pub throttle_modifier: f32,
    pub brake_modifier: f32,
    pub ground_idle_modifier: f32,
    pub air_idle_modifier: f32,
    pub drag_factor: f32,
    pub drag_exponent: f32,
    pub lift_factor: f32,
    pub max_lift: f32,
    /// Angular velocity kept per step at full flight-mode influence.
    pub angular_damping: f32,
}

impl Default for AirplaneSpec {
    fn default() -> Self {
        planespecs::trainer_spec()
    }
}

impl Default for EngineSpec {
    fn default() -> Self {
        Self {
            max_power: 10.0,
            spool_up_rate: 4.0,
            spool_down_rate: 0.12,
            rotor_spin_rate: 60.0,
        }
    }
}

impl Default for FlightModelSpec {
    fn default() -> Self {
        Self {
            flight_speed: 10.0,
            lower_mass_speed: 10.0,
            base_mass: 50.0,
            mass_reduction: 0.6,
            throttle_modifier: 0.6,
            brake_modifier: -0.05,
            ground_idle_modifier: 0.0,
            air_idle_modifier: 0.02,
            drag_factor: 0.001,
            drag_exponent: 1.0,
            lift_factor: 0.005,
            max_lift: 0.05,
            angular_damping: 0.98,
        }
    }
}

pub mod planespecs {
    use super::*;

    // Single-prop trainer tuned for arcade handling at a 60 Hz frame rate.
    pub fn trainer_spec() -> AirplaneSpec {
        AirplaneSpec {
            frame_rate: 60.0,
            steering: SpringParams::new(10.0, 0.6),
            aileron: SpringParams::new(5.0, 0.6),
            elevator: SpringParams::new(7.0, 0.6),
            rudder: SpringParams::new(10.0, 0.6),
            surface_amplitude: 0.7,
            steering_amplitude: 0.8,
            wheel_brake_force: 5.0,
            engine: EngineSpec::default(),
            flight: FlightModelSpec::default(),
        }
    }
}
