use bevy::prelude::*;
use flight::{NodeRole, SceneNodes};

use crate::config::NodeSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub role: Option<NodeRole>,
    /// Local rotation about the node's hinge or spin axis (radians).
    pub rotation: f32,
}

/// Flat stand-in for the airplane's loaded asset hierarchy.
#[derive(Component, Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    pub fn from_specs(specs: &[NodeSpec]) -> Self {
        Self {
            nodes: specs
                .iter()
                .map(|s| SceneNode {
                    name: s.name.clone(),
                    role: s.role,
                    rotation: 0.0,
                })
                .collect(),
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn rotation_of(&self, name: &str) -> Option<f32> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.rotation)
    }
}

impl SceneNodes for SceneGraph {
    type Handle = NodeId;

    fn nodes_with_role(&self, role: NodeRole) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.role == Some(role))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn set_local_rotation(&mut self, node: NodeId, angle: f32) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.rotation = angle;
        }
    }

    fn rotate_by(&mut self, node: NodeId, delta: f32) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.rotation = (n.rotation + delta).rem_euclid(std::f32::consts::TAU);
        }
    }
}
