use serde::{Deserialize, Serialize};

/// Responsiveness of one spring-driven channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    /// Inertia-like divisor on the pull toward the target; larger is slower.
    pub mass: f32,
    /// Fraction of velocity kept per frame, in (0, 1).
    pub damping: f32,
}

impl SpringParams {
    pub const fn new(mass: f32, damping: f32) -> Self {
        Self { mass, damping }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SpringFrame {
    position: f32,
    velocity: f32,
}

// Fraction of a frame treated as a whole frame when splitting a time step.
const FRAME_EPSILON: f32 = 1e-4;

/// Damped second-order tracker that smooths `target` into `position`.
///
/// The spring itself runs in fixed frames of `1 / frame_rate` seconds. A
/// variable `time_step` produces however many whole frames fit, carries the
/// remainder, and reports `position`/`velocity` interpolated between the two
/// latest frames. Output therefore does not depend on how the caller slices
/// time.
#[derive(Debug, Clone)]
pub struct SpringSimulator {
    frame_time: f32,
    params: SpringParams,
    offset: f32,
    // [previous, latest]
    frames: [SpringFrame; 2],
    pub target: f32,
    pub position: f32,
    pub velocity: f32,
}

impl SpringSimulator {
    pub fn new(frame_rate: f32, params: SpringParams) -> Self {
        Self::with_start(frame_rate, params, 0.0, 0.0)
    }

    pub fn with_start(frame_rate: f32, params: SpringParams, position: f32, velocity: f32) -> Self {
        let start = SpringFrame { position, velocity };
        Self {
            frame_time: frame_rate.max(1.0).recip(),
            params: SpringParams {
                mass: params.mass.max(1e-3),
                damping: params.damping,
            },
            offset: 0.0,
            frames: [start; 2],
            target: position,
            position,
            velocity,
        }
    }

    pub fn frame_rate(&self) -> f32 {
        self.frame_time.recip()
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Advances toward `target` by `time_step` seconds.
    pub fn simulate(&mut self, time_step: f32) {
        if time_step > 0.0 {
            self.generate_frames(time_step);
        }
        let t = (self.offset / self.frame_time).clamp(0.0, 1.0);
        let [prev, latest] = self.frames;
        self.position = lerp(prev.position, latest.position, t);
        self.velocity = lerp(prev.velocity, latest.velocity, t);
    }

    fn generate_frames(&mut self, time_step: f32) {
        let total = self.offset + time_step;
        let count = (total / self.frame_time + FRAME_EPSILON).floor();
        self.offset = (total - count * self.frame_time).max(0.0);
        for _ in 0..count as u32 {
            let next = self.next_frame(self.frames[1]);
            self.frames = [self.frames[1], next];
        }
    }

    fn next_frame(&self, last: SpringFrame) -> SpringFrame {
        let acceleration = (self.target - last.position) / self.params.mass;
        let velocity = (last.velocity + acceleration) * self.params.damping;
        SpringFrame {
            position: last.position + velocity,
            velocity,
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn no_snap_on_target_change() {
        let mut s = SpringSimulator::new(60.0, SpringParams::new(5.0, 0.6));
        s.target = 0.7;
        s.simulate(DT);
        s.simulate(DT);
        assert!(s.position > 0.0 && s.position < 0.2, "position={}", s.position);
    }

    #[test]
    fn keeps_frame_rate_and_guards_zero_mass() {
        let s = SpringSimulator::new(144.0, SpringParams::new(0.0, 0.6));
        assert_abs_diff_eq!(s.frame_rate(), 144.0, epsilon = 1e-3);
        assert!(s.params().mass > 0.0);
        assert_eq!(s.params().damping, 0.6);
    }

    #[test]
    fn zero_step_holds_position() {
        let mut s = SpringSimulator::with_start(60.0, SpringParams::new(7.0, 0.6), 0.3, 0.0);
        s.target = -0.7;
        s.simulate(0.0);
        assert_abs_diff_eq!(s.position, 0.3);
    }

    #[test]
    fn step_size_does_not_change_the_trajectory() {
        let params = SpringParams::new(5.0, 0.6);
        let mut coarse = SpringSimulator::new(60.0, params);
        let mut fine = SpringSimulator::new(60.0, params);
        coarse.target = 0.7;
        fine.target = 0.7;
        for _ in 0..30 {
            coarse.simulate(2.0 * DT);
            fine.simulate(DT);
            fine.simulate(DT);
        }
        assert_abs_diff_eq!(coarse.position, fine.position, epsilon = 1e-4);
    }

    #[test]
    fn partial_frames_interpolate() {
        let mut s = SpringSimulator::new(60.0, SpringParams::new(10.0, 0.6));
        s.target = 1.0;
        s.simulate(DT);
        let before = s.position;
        s.simulate(DT);
        let after = s.position;
        let mut half = SpringSimulator::new(60.0, SpringParams::new(10.0, 0.6));
        half.target = 1.0;
        half.simulate(DT);
        half.simulate(0.5 * DT);
        assert!(half.position > before && half.position < after);
    }
}
