//! Force-directed simulator
//!
//! Owns the per-node kinematic state (position, velocity, target) and
//! advances it once per delivered animation frame. The physics is a
//! spring-to-target / damping pair perturbed by the pointer; the Y-axis
//! wobble and the slow whole-graph rotation are a separate cosmetic pass so
//! the spring/damper subsystem can be exercised on its own.
//!
//! The tick is frame-coupled: one [`Simulation::step`] call advances the
//! system by exactly one frame, and the default constants are sized for
//! roughly 60 deliveries per second. Hosts with variable frame rates will
//! see proportionally variable perceived speed.

use std::collections::hash_map::DefaultHasher;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::topology::Topology;

/// Default spring constant (displacement fraction added to velocity per frame)
pub const DEFAULT_SPRING: f32 = 0.02;

/// Default damping factor (velocity retained per frame)
pub const DEFAULT_DAMPING: f32 = 0.95;

/// Default world-space span of a full pointer swing
pub const DEFAULT_POINTER_INFLUENCE: f32 = 40.0;

/// Default radius of the initial ring layout
pub const DEFAULT_LAYOUT_RADIUS: f32 = 100.0;

/// Default maximum speed (prevents numerical explosion)
pub const DEFAULT_MAX_SPEED: f32 = 50.0;

/// Normalized pointer position, 0..1 in each axis.
///
/// `(0.5, 0.5)` is the viewport center and contributes no offset. Supplied
/// fresh by the host every frame; never retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub x: f32,
    pub y: f32,
}

impl PointerInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pointer at the viewport center (no influence).
    pub fn centered() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl Default for PointerInput {
    fn default() -> Self {
        Self::centered()
    }
}

/// Tunable constants for the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Spring constant; must stay small relative to damping or the system diverges
    pub spring: f32,
    /// Velocity retained per frame (0.95 = 5% loss per frame)
    pub damping: f32,
    /// World-space offset of a full pointer swing across the viewport
    pub pointer_influence: f32,
    /// Radius of the initial ring layout
    pub layout_radius: f32,
    /// Per-node radius jitter applied at seeding
    pub radius_jitter: f32,
    /// Per-node height jitter applied at seeding
    pub height_jitter: f32,
    /// Amplitude of the cosmetic Y-axis wobble
    pub wobble_amplitude: f32,
    /// Phase advance of the wobble per frame
    pub wobble_frequency: f32,
    /// Whole-graph rotation around the vertical axis, radians per frame
    pub rotation_per_frame: f32,
    /// Hard speed clamp keeping the state finite regardless of tuning
    pub max_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spring: DEFAULT_SPRING,
            damping: DEFAULT_DAMPING,
            pointer_influence: DEFAULT_POINTER_INFLUENCE,
            layout_radius: DEFAULT_LAYOUT_RADIUS,
            radius_jitter: 12.0,
            height_jitter: 8.0,
            wobble_amplitude: 0.04,
            wobble_frequency: 0.05,
            rotation_per_frame: 0.0015,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

/// Per-node kinematic record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimNode {
    /// Current position
    pub position: [f32; 3],
    /// Current velocity
    pub velocity: [f32; 3],
    /// Rest position the spring pulls toward
    pub target: [f32; 3],
}

/// The force-directed simulator.
///
/// Single writer of its own kinematic array; the render adapter only reads
/// it, and teardown is simply dropping the value. An empty topology yields
/// an empty simulation whose `step` is a no-op.
pub struct Simulation {
    nodes: Vec<SimNode>,
    config: SimulationConfig,
}

impl Simulation {
    /// Seed a simulation from a topology with the default config.
    pub fn from_topology(topology: &Topology) -> Self {
        Self::with_config(topology, SimulationConfig::default())
    }

    /// Seed a simulation from a topology.
    ///
    /// Nodes are spaced evenly on a ring of `layout_radius` in the XZ plane,
    /// with deterministic per-id radius and height jitter so the initial
    /// graph reads as a loose constellation rather than a perfect circle.
    /// Velocity starts at zero and each target is the seeded position.
    pub fn with_config(topology: &Topology, config: SimulationConfig) -> Self {
        let total = topology.nodes.len();
        let nodes = topology
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let angle = TAU * (i as f32) / (total.max(1) as f32);
                let (jr, jh) = stable_jitter(&node.id);
                let radius = config.layout_radius + jr * config.radius_jitter;
                let position = [
                    radius * angle.cos(),
                    jh * config.height_jitter,
                    radius * angle.sin(),
                ];
                SimNode {
                    position,
                    velocity: [0.0; 3],
                    target: position,
                }
            })
            .collect::<Vec<_>>();

        debug!(nodes = nodes.len(), "simulation seeded");
        Self { nodes, config }
    }

    /// Read-only view of the kinematic array, in topology node order.
    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advance the simulation by one frame.
    ///
    /// Runs the physical pass, then the cosmetic pass. `frame` only feeds
    /// the cosmetic wobble phase; the physics itself is frame-coupled and
    /// takes no timestep.
    pub fn step(&mut self, pointer: PointerInput, frame: u64) {
        self.step_physics(pointer);
        self.apply_drift(frame);
    }

    /// The physical pass: pointer-shifted spring to target, damping,
    /// integration, speed clamp.
    ///
    /// With the pointer centered this settles every node onto its target;
    /// damping strictly shrinks velocity faster than the spring feeds it for
    /// any spring constant small against the damping factor, which is what
    /// keeps the state bounded for all time.
    pub fn step_physics(&mut self, pointer: PointerInput) {
        let offset_x = (pointer.x - 0.5) * self.config.pointer_influence;
        let offset_y = (pointer.y - 0.5) * self.config.pointer_influence;
        let max_speed_sq = self.config.max_speed * self.config.max_speed;

        for node in &mut self.nodes {
            // Pointer shifts the rest position on X/Y only; Z is untouched.
            let displacement = [
                node.target[0] + offset_x - node.position[0],
                node.target[1] + offset_y - node.position[1],
                node.target[2] - node.position[2],
            ];

            for axis in 0..3 {
                node.velocity[axis] += displacement[axis] * self.config.spring;
                node.velocity[axis] *= self.config.damping;
            }

            let speed_sq = node.velocity[0] * node.velocity[0]
                + node.velocity[1] * node.velocity[1]
                + node.velocity[2] * node.velocity[2];
            if speed_sq > max_speed_sq {
                let scale = self.config.max_speed / speed_sq.sqrt();
                for axis in 0..3 {
                    node.velocity[axis] *= scale;
                }
            }

            for axis in 0..3 {
                node.position[axis] += node.velocity[axis];
            }
        }
    }

    /// The cosmetic pass: low-amplitude Y wobble keyed by frame and node
    /// index, then a rigid whole-graph rotation around the vertical axis.
    ///
    /// The rotation turns position, velocity and target together, so it
    /// never injects energy into the spring system.
    pub fn apply_drift(&mut self, frame: u64) {
        let t = frame as f32 * self.config.wobble_frequency;
        if self.config.wobble_amplitude != 0.0 {
            for (i, node) in self.nodes.iter_mut().enumerate() {
                let phase = t + (i as f32) * 0.9;
                node.position[1] += phase.sin() * self.config.wobble_amplitude;
            }
        }

        let angle = self.config.rotation_per_frame;
        if angle != 0.0 {
            let (sin, cos) = angle.sin_cos();
            for node in &mut self.nodes {
                rotate_y(&mut node.position, sin, cos);
                rotate_y(&mut node.velocity, sin, cos);
                rotate_y(&mut node.target, sin, cos);
            }
        }
    }
}

/// Rotate a vector around the Y axis.
fn rotate_y(v: &mut [f32; 3], sin: f32, cos: f32) {
    let (x, z) = (v[0], v[2]);
    v[0] = x * cos - z * sin;
    v[2] = x * sin + z * cos;
}

/// Deterministic per-id jitter pair in [-1, 1], hash-based so seeding needs
/// no random source and tests are reproducible.
fn stable_jitter(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let a = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let b = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((a * 2.0) - 1.0, (b * 2.0) - 1.0)
}
