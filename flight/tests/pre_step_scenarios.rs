use approx::assert_abs_diff_eq;
use flight::{
    planespecs::trainer_spec, Airplane, BodyState, ControlInputState, FlightForceModel,
    FlightStepDebug, PreStepContext, Quatf, ThrustMode, Vec3f,
};

fn level_body(velocity: Vec3f) -> BodyState {
    BodyState {
        orientation: Quatf::IDENTITY,
        velocity,
        angular_velocity: Vec3f::ZERO,
        mass: 50.0,
    }
}

#[test]
fn full_power_throttle_step() {
    let spec = trainer_spec();
    let mut model = FlightForceModel::with_last_drag(0.0);
    let mut body = level_body(Vec3f::new(0.0, 0.0, 5.0));
    let input = ControlInputState {
        throttle: true,
        piloted: true,
        ..Default::default()
    };
    let mut dbg = FlightStepDebug::default();

    model.apply_pre_physics_step_dbg(
        &spec.flight,
        PreStepContext {
            body: &mut body,
            input,
            engine_power: 10.0,
            wheels_on_ground: 0,
        },
        Some(&mut dbg),
    );

    assert_eq!(dbg.thrust_mode, Some(ThrustMode::FullThrottle));
    assert_abs_diff_eq!(dbg.speed_modifier, 0.6);
    assert_abs_diff_eq!(dbg.speed_after_thrust, 11.0, epsilon = 1e-4);
    assert_abs_diff_eq!(dbg.drag, 0.11, epsilon = 1e-5);
    assert_abs_diff_eq!(model.last_drag(), 0.11, epsilon = 1e-5);
    assert_abs_diff_eq!(body.velocity.z, 9.79, epsilon = 1e-4);
    // 11 * 0.005 * 10 = 0.55 clamps to 0.05 along up.
    assert_abs_diff_eq!(dbg.lift, 0.05, epsilon = 1e-6);
    assert_abs_diff_eq!(body.velocity.y, 0.05, epsilon = 1e-6);
    assert_abs_diff_eq!(body.velocity.x, 0.0, epsilon = 1e-6);
    // Forward speed 5 → half influence → 50 * (1 - 0.3).
    assert_abs_diff_eq!(dbg.flight_mode_influence, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(body.mass, 35.0, epsilon = 1e-4);
}

#[test]
fn speed_modifier_branches_are_exclusive() {
    let spec = trainer_spec();
    let cases = [
        (true, false, 0, ThrustMode::FullThrottle, 0.6),
        (true, false, 3, ThrustMode::FullThrottle, 0.6),
        (false, true, 0, ThrustMode::Braking, -0.05),
        (false, true, 3, ThrustMode::Braking, -0.05),
        (true, true, 3, ThrustMode::GroundIdle, 0.0),
        (false, false, 1, ThrustMode::GroundIdle, 0.0),
        (true, true, 0, ThrustMode::AirborneIdle, 0.02),
        (false, false, 0, ThrustMode::AirborneIdle, 0.02),
    ];
    for (throttle, brake, wheels, mode, modifier) in cases {
        let mut model = FlightForceModel::new();
        let mut body = level_body(Vec3f::ZERO);
        let mut dbg = FlightStepDebug::default();
        model.apply_pre_physics_step_dbg(
            &spec.flight,
            PreStepContext {
                body: &mut body,
                input: ControlInputState {
                    throttle,
                    brake,
                    piloted: true,
                    ..Default::default()
                },
                engine_power: 1.0,
                wheels_on_ground: wheels,
            },
            Some(&mut dbg),
        );
        assert_eq!(dbg.thrust_mode, Some(mode), "throttle={throttle} brake={brake} wheels={wheels}");
        assert_abs_diff_eq!(dbg.speed_modifier, modifier);
        // From rest the whole thrust is the modifier along forward.
        assert_abs_diff_eq!(dbg.thrust, modifier, epsilon = 1e-6);
    }
}

#[test]
fn lift_stays_clamped_at_extremes() {
    let spec = trainer_spec();
    for speed in [0.0_f32, 0.5, 10.0, 500.0, 10_000.0] {
        for power in [0.0_f32, 0.1, 1.0, 10.0] {
            let mut model = FlightForceModel::new();
            let mut body = level_body(Vec3f::new(0.0, 0.0, speed));
            let mut dbg = FlightStepDebug::default();
            model.apply_pre_physics_step_dbg(
                &spec.flight,
                PreStepContext {
                    body: &mut body,
                    input: ControlInputState::default(),
                    engine_power: power,
                    wheels_on_ground: 0,
                },
                Some(&mut dbg),
            );
            assert!(
                (0.0..=0.05).contains(&dbg.lift),
                "lift {} out of range at speed {speed} power {power}",
                dbg.lift
            );
        }
    }
}

#[test]
fn angular_damping_scales_with_airspeed() {
    let spec = trainer_spec();
    let spin = Vec3f::new(0.0, 1.0, 0.0);
    let damped_y = |forward_speed: f32| {
        let mut airplane = Airplane::new(spec.clone());
        let mut body = BodyState {
            angular_velocity: spin,
            ..level_body(Vec3f::new(0.0, 0.0, forward_speed))
        };
        airplane.apply_pre_physics_step(&mut body, &ControlInputState::default(), &0usize);
        body.angular_velocity.y
    };
    assert_abs_diff_eq!(damped_y(0.0), 1.0);
    assert_abs_diff_eq!(damped_y(5.0), 0.99, epsilon = 1e-6);
    assert_abs_diff_eq!(damped_y(25.0), 0.98, epsilon = 1e-6);
}

#[test]
fn brake_pushes_backward_on_the_runway() {
    let spec = trainer_spec();
    let mut airplane = Airplane::new(spec);
    airplane.set_engine_power(10.0);
    let mut body = level_body(Vec3f::ZERO);
    let input = ControlInputState {
        brake: true,
        piloted: true,
        ..Default::default()
    };
    airplane.apply_pre_physics_step(&mut body, &input, &3usize);
    assert!(body.velocity.z < 0.0, "velocity={:?}", body.velocity);
}

#[test]
fn airplane_carries_drag_into_the_next_step() {
    let mut airplane = Airplane::new(trainer_spec());
    airplane.set_engine_power(10.0);
    assert_eq!(airplane.forces().last_drag(), 0.0);

    let mut body = level_body(Vec3f::new(0.0, 0.0, 5.0));
    let input = ControlInputState {
        piloted: true,
        ..Default::default()
    };
    let mut dbg = FlightStepDebug::default();
    airplane.apply_pre_physics_step_dbg(&mut body, &input, &0usize, Some(&mut dbg));

    assert!(airplane.forces().last_drag() > 0.0);
    assert_abs_diff_eq!(airplane.forces().last_drag(), dbg.drag, epsilon = 1e-6);
}
