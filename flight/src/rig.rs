//! Binding between the airplane and the nodes of its scene asset.
//!
//! Handles are resolved once when the airplane is built. A missing node is a
//! construction error; nothing is looked up per frame.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::SurfacePose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// Role tag a scene node carries in the airplane asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Rotor,
    Aileron(Side),
    Elevator,
    Rudder,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Rotor => f.write_str("rotor"),
            NodeRole::Aileron(Side::Left) => f.write_str("left aileron"),
            NodeRole::Aileron(Side::Right) => f.write_str("right aileron"),
            NodeRole::Elevator => f.write_str("elevator"),
            NodeRole::Rudder => f.write_str("rudder"),
        }
    }
}

/// Scene graph operations the airplane needs.
pub trait SceneNodes {
    type Handle: Copy + fmt::Debug;

    /// Every node tagged with `role`, in scene order.
    fn nodes_with_role(&self, role: NodeRole) -> Vec<Self::Handle>;

    /// Sets the node's local rotation about its hinge axis (radians).
    fn set_local_rotation(&mut self, node: Self::Handle, angle: f32);

    /// Rotates the node further about its spin axis (radians).
    fn rotate_by(&mut self, node: Self::Handle, delta: f32);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RigError {
    #[error("airplane asset has no {0} node")]
    MissingNode(NodeRole),
}

/// Resolved node handles of one airplane.
#[derive(Debug, Clone)]
pub struct SurfaceRig<H> {
    rotor: H,
    left_aileron: H,
    right_aileron: H,
    elevators: Vec<H>,
    rudder: H,
}

impl<H: Copy + fmt::Debug> SurfaceRig<H> {
    pub fn bind<S>(scene: &S) -> Result<Self, RigError>
    where
        S: SceneNodes<Handle = H>,
    {
        let elevators = scene.nodes_with_role(NodeRole::Elevator);
        if elevators.is_empty() {
            return Err(RigError::MissingNode(NodeRole::Elevator));
        }
        let rig = Self {
            rotor: single(scene, NodeRole::Rotor)?,
            left_aileron: single(scene, NodeRole::Aileron(Side::Left))?,
            right_aileron: single(scene, NodeRole::Aileron(Side::Right))?,
            elevators,
            rudder: single(scene, NodeRole::Rudder)?,
        };
        debug!(?rig, "Bound airplane surface rig");
        Ok(rig)
    }

    pub fn rotor(&self) -> H {
        self.rotor
    }

    pub fn elevators(&self) -> &[H] {
        &self.elevators
    }

    /// Writes the surface pose and spins the rotor.
    pub fn apply<S>(&self, scene: &mut S, pose: &SurfacePose, rotor_spin: f32)
    where
        S: SceneNodes<Handle = H>,
    {
        scene.rotate_by(self.rotor, rotor_spin);
        scene.set_local_rotation(self.left_aileron, pose.left_aileron);
        scene.set_local_rotation(self.right_aileron, pose.right_aileron);
        for &elevator in &self.elevators {
            scene.set_local_rotation(elevator, pose.elevator);
        }
        scene.set_local_rotation(self.rudder, pose.rudder);
    }
}

fn single<S: SceneNodes>(scene: &S, role: NodeRole) -> Result<S::Handle, RigError> {
    let nodes = scene.nodes_with_role(role);
    if nodes.len() > 1 {
        warn!(%role, count = nodes.len(), "Multiple nodes share a role; using the first");
    }
    nodes.first().copied().ok_or(RigError::MissingNode(role))
}
