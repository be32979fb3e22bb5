use crate::EngineSpec;

/// Engine output in `[0, spec.max_power]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnginePower {
    power: f32,
}

impl EnginePower {
    /// Out-of-range values are pulled back into range by the next `update`.
    pub fn new(power: f32) -> Self {
        Self { power }
    }

    pub fn get(self) -> f32 {
        self.power
    }

    pub fn set(&mut self, power: f32, spec: &EngineSpec) {
        self.power = power.clamp(0.0, spec.max_power.max(0.0));
    }

    /// Spools up while piloted, winds down otherwise. Returns the rotor spin
    /// for this tick in radians.
    pub fn update(&mut self, spec: &EngineSpec, time_step: f32, piloted: bool) -> f32 {
        let rate = if piloted {
            spec.spool_up_rate
        } else {
            -spec.spool_down_rate
        };
        self.power = (self.power + time_step * rate).clamp(0.0, spec.max_power.max(0.0));
        self.rotor_spin(spec, time_step)
    }

    pub fn rotor_spin(self, spec: &EngineSpec, time_step: f32) -> f32 {
        self.power * time_step * spec.rotor_spin_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn spools_up_to_max_and_stops() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::new(9.9);
        engine.update(&spec, 0.1, true);
        assert_abs_diff_eq!(engine.get(), 10.0);
        engine.update(&spec, 0.1, true);
        assert_abs_diff_eq!(engine.get(), 10.0);
    }

    #[test]
    fn winds_down_to_zero_and_stops() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::new(0.01);
        engine.update(&spec, 1.0, false);
        assert_eq!(engine.get(), 0.0);
        engine.update(&spec, 1.0, false);
        assert_eq!(engine.get(), 0.0);
    }

    #[test]
    fn rotor_spin_scales_with_power() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::new(10.0);
        let spin = engine.update(&spec, 0.5, true);
        assert_abs_diff_eq!(spin, 10.0 * 0.5 * 60.0);
        assert_eq!(EnginePower::new(0.0).rotor_spin(&spec, 1.0), 0.0);
    }

    #[test]
    fn update_pulls_out_of_range_power_back() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::new(42.0);
        engine.update(&spec, 1.0 / 60.0, true);
        assert_eq!(engine.get(), 10.0);

        let mut engine = EnginePower::new(-3.0);
        engine.update(&spec, 1.0 / 60.0, false);
        assert_eq!(engine.get(), 0.0);
    }

    #[test]
    fn negative_time_step_never_drops_below_zero() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::new(0.0);
        engine.update(&spec, -0.1, true);
        assert_eq!(engine.get(), 0.0);

        let mut engine = EnginePower::new(10.0);
        engine.update(&spec, -0.1, false);
        assert_eq!(engine.get(), 10.0);
    }

    #[test]
    fn set_clamps() {
        let spec = EngineSpec::default();
        let mut engine = EnginePower::default();
        engine.set(42.0, &spec);
        assert_eq!(engine.get(), 10.0);
        engine.set(-1.0, &spec);
        assert_eq!(engine.get(), 0.0);
    }
}
