//! Capabilities the enclosing vehicle exposes to the airplane.
//!
//! The airplane does not own wheels or suspension. It only needs to know how
//! many wheels currently touch the ground, and it hands back one steering
//! value and one wheel-brake force per frame.

/// Ground contact as reported by the vehicle's wheel/raycast layer.
pub trait GroundContactInfo {
    fn wheels_on_ground(&self) -> usize;
}

impl GroundContactInfo for usize {
    fn wheels_on_ground(&self) -> usize {
        *self
    }
}

/// Receives the smoothed nose-wheel steering value once per frame.
pub trait SteeringChannel {
    fn set_steering_value(&mut self, value: f32);
}

/// Receives the wheel brake force once per frame (0 when released).
pub trait WheelBrakeChannel {
    fn set_wheel_brake(&mut self, force: f32);
}
