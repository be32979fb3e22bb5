use crate::{
    AirplaneSpec, BodyState, ControlInputState, ControlSurfaces, EnginePower, FlightForceModel,
    FlightStepDebug, GroundContactInfo, PreStepContext, SceneNodes, SteeringChannel, SurfacePose,
    SurfaceRig, SurfaceTargets, WheelBrakeChannel,
};

/// Result of one frame tick, ready to be presented.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutput {
    pub pose: SurfacePose,
    /// Rotor rotation for this tick (radians).
    pub rotor_spin: f32,
    pub wheel_brake: f32,
}

/// One airplane: engine, control-surface springs and force model.
///
/// Driven from two places: [`Airplane::advance`] once per rendered frame and
/// [`Airplane::apply_pre_physics_step`] once per physics step.
#[derive(Debug, Clone)]
pub struct Airplane {
    spec: AirplaneSpec,
    engine: EnginePower,
    surfaces: ControlSurfaces,
    forces: FlightForceModel,
}

impl Airplane {
    pub fn new(spec: AirplaneSpec) -> Self {
        let surfaces = ControlSurfaces::new(&spec);
        Self {
            spec,
            engine: EnginePower::default(),
            surfaces,
            forces: FlightForceModel::new(),
        }
    }

    pub fn spec(&self) -> &AirplaneSpec {
        &self.spec
    }

    pub fn engine_power(&self) -> f32 {
        self.engine.get()
    }

    pub fn set_engine_power(&mut self, power: f32) {
        self.engine.set(power, &self.spec.engine);
    }

    pub fn surfaces(&self) -> &ControlSurfaces {
        &self.surfaces
    }

    pub fn forces(&self) -> &FlightForceModel {
        &self.forces
    }

    /// Frame tick: engine spool, target selection and spring advance.
    /// Runs whether or not anyone is flying.
    pub fn advance(&mut self, time_step: f32, input: &ControlInputState) -> TickOutput {
        let rotor_spin = self.engine.update(&self.spec.engine, time_step, input.piloted);
        let targets = SurfaceTargets::select(&self.spec, input);
        self.surfaces.advance(time_step, targets);
        TickOutput {
            pose: self.surfaces.pose(),
            rotor_spin,
            wheel_brake: if input.wheel_brake {
                self.spec.wheel_brake_force
            } else {
                0.0
            },
        }
    }

    /// Writes a tick's output to the scene and the vehicle.
    pub fn present<S, V>(&self, tick: &TickOutput, rig: &SurfaceRig<S::Handle>, scene: &mut S, vehicle: &mut V)
    where
        S: SceneNodes,
        V: SteeringChannel + WheelBrakeChannel,
    {
        rig.apply(scene, &tick.pose, tick.rotor_spin);
        vehicle.set_steering_value(tick.pose.steering);
        vehicle.set_wheel_brake(tick.wheel_brake);
    }

    /// Physics pre-step at the current engine power.
    pub fn apply_pre_physics_step(
        &mut self,
        body: &mut BodyState,
        input: &ControlInputState,
        ground: &impl GroundContactInfo,
    ) {
        self.apply_pre_physics_step_dbg(body, input, ground, None);
    }

    pub fn apply_pre_physics_step_dbg(
        &mut self,
        body: &mut BodyState,
        input: &ControlInputState,
        ground: &impl GroundContactInfo,
        dbg: Option<&mut FlightStepDebug>,
    ) {
        let ctx = PreStepContext {
            body,
            input: *input,
            engine_power: self.engine.get(),
            wheels_on_ground: ground.wheels_on_ground(),
        };
        self.forces.apply_pre_physics_step_dbg(&self.spec.flight, ctx, dbg);
    }
}
