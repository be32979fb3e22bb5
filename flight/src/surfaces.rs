use crate::{opposed_pair_target, AirplaneSpec, ControlInputState, SpringSimulator};

/// Per-channel spring targets chosen from the current input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceTargets {
    pub steering: f32,
    pub aileron: f32,
    pub elevator: f32,
    pub rudder: f32,
}

impl SurfaceTargets {
    /// Positive deflection: roll left, pitch up, yaw left. The nose wheel
    /// follows the yaw pedals.
    pub fn select(spec: &AirplaneSpec, input: &ControlInputState) -> Self {
        let amp = spec.surface_amplitude;
        Self {
            steering: opposed_pair_target(input.yaw_left, input.yaw_right, spec.steering_amplitude),
            aileron: opposed_pair_target(input.roll_left, input.roll_right, amp),
            elevator: opposed_pair_target(input.pitch_up, input.pitch_down, amp),
            rudder: opposed_pair_target(input.yaw_left, input.yaw_right, amp),
        }
    }
}

/// Rotations to write to the airplane's control-surface nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfacePose {
    pub left_aileron: f32,
    /// Always `-left_aileron`.
    pub right_aileron: f32,
    /// Shared by every elevator node.
    pub elevator: f32,
    pub rudder: f32,
    pub steering: f32,
}

/// The four spring channels of one airplane.
#[derive(Debug, Clone)]
pub struct ControlSurfaces {
    steering: SpringSimulator,
    aileron: SpringSimulator,
    elevator: SpringSimulator,
    rudder: SpringSimulator,
}

impl ControlSurfaces {
    pub fn new(spec: &AirplaneSpec) -> Self {
        Self {
            steering: SpringSimulator::new(spec.frame_rate, spec.steering),
            aileron: SpringSimulator::new(spec.frame_rate, spec.aileron),
            elevator: SpringSimulator::new(spec.frame_rate, spec.elevator),
            rudder: SpringSimulator::new(spec.frame_rate, spec.rudder),
        }
    }

    pub fn advance(&mut self, time_step: f32, targets: SurfaceTargets) {
        self.steering.target = targets.steering;
        self.aileron.target = targets.aileron;
        self.elevator.target = targets.elevator;
        self.rudder.target = targets.rudder;

        self.steering.simulate(time_step);
        self.aileron.simulate(time_step);
        self.elevator.simulate(time_step);
        self.rudder.simulate(time_step);
    }

    pub fn pose(&self) -> SurfacePose {
        SurfacePose {
            left_aileron: self.aileron.position,
            right_aileron: -self.aileron.position,
            elevator: self.elevator.position,
            rudder: self.rudder.position,
            steering: self.steering.position,
        }
    }

    pub fn steering(&self) -> &SpringSimulator {
        &self.steering
    }

    pub fn aileron(&self) -> &SpringSimulator {
        &self.aileron
    }

    pub fn elevator(&self) -> &SpringSimulator {
        &self.elevator
    }

    pub fn rudder(&self) -> &SpringSimulator {
        &self.rudder
    }
}
