//! Arcade flight controller for a rigid-body airplane.
//!
//! This crate intentionally avoids any Bevy app types. The host physics
//! engine, scene graph and input bindings talk to it through the small traits
//! in [`channels`], [`rig`] and [`controls`]; everything else is plain numeric
//! state advanced once per frame ([`Airplane::advance`]) and once per physics
//! step ([`Airplane::apply_pre_physics_step`]).

mod math;
pub use math::{Quatf, Vec3f};

pub mod channels;
pub use channels::{GroundContactInfo, SteeringChannel, WheelBrakeChannel};

pub mod controls;
pub use controls::{opposed_pair_target, Action, ActionParseError, ActionSource, ControlInputState};

pub mod spring;
pub use spring::{SpringParams, SpringSimulator};

pub mod engine;
pub use engine::EnginePower;

pub mod flight_model;
pub use flight_model::{BodyState, FlightForceModel, FlightStepDebug, PreStepContext, ThrustMode};

pub mod surfaces;
pub use surfaces::{ControlSurfaces, SurfacePose, SurfaceTargets};

pub mod rig;
pub use rig::{NodeRole, RigError, SceneNodes, Side, SurfaceRig};

mod airplane;
pub use airplane::{Airplane, TickOutput};

mod plane_specs;
pub use plane_specs::planespecs;
pub use plane_specs::{AirplaneSpec, EngineSpec, FlightModelSpec};
