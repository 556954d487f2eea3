//! Render adapter
//!
//! Projects the simulator's current kinematic state plus the static topology
//! into drawable primitives for one frame. Pure read-only projection: called
//! after the simulator's update for the frame, owns no state, mutates
//! nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::colors;
use crate::simulation::Simulation;
use crate::topology::Topology;

/// Point size used for every node.
pub const POINT_SIZE: f32 = 6.0;

/// A drawable point (one per node).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointPrimitive {
    /// World-space position
    pub position: [f32; 3],
    /// RGBA color from the node's category
    pub color: [f32; 4],
    /// Point size in display units
    pub size: f32,
}

/// A drawable line segment (one per edge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinePrimitive {
    /// Current position of the edge's first endpoint
    pub start: [f32; 3],
    /// Current position of the edge's second endpoint
    pub end: [f32; 3],
    /// Source node's category color at reduced alpha
    pub color: [f32; 4],
}

/// Everything the host draws for one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FramePrimitives {
    pub points: Vec<PointPrimitive>,
    pub lines: Vec<LinePrimitive>,
}

impl FramePrimitives {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }
}

/// Project the current simulation state into one frame's primitives.
///
/// A zero-node simulation projects to empty lists; an edge whose endpoint
/// falls outside the current kinematic array is skipped rather than drawn.
pub fn frame_primitives(sim: &Simulation, topology: &Topology) -> FramePrimitives {
    let kinematics = sim.nodes();

    let points = topology
        .nodes
        .iter()
        .zip(kinematics)
        .map(|(node, state)| PointPrimitive {
            position: state.position,
            color: node.color,
            size: POINT_SIZE,
        })
        .collect();

    let mut lines = Vec::with_capacity(topology.edges.len());
    for &(a, b) in &topology.edges {
        if a >= kinematics.len() || b >= kinematics.len() {
            continue;
        }
        let mut color = topology.nodes[a].color;
        color[3] *= colors::EDGE_ALPHA;
        lines.push(LinePrimitive {
            start: kinematics[a].position,
            end: kinematics[b].position,
            color,
        });
    }

    FramePrimitives { points, lines }
}
