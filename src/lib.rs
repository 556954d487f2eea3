//! constellate - a force-directed technology-graph animator.
//!
//! Builds an immutable graph topology from a declarative technology table,
//! advances per-node kinematics once per host-delivered frame (spring to
//! target, pointer influence, damping, plus a cosmetic drift pass), and
//! projects the result into drawable point and line primitives. A small
//! vector-similarity module rides along for "similar item" demo surfaces.
//!
//! The host owns scheduling and drawing: it calls [`Simulation::step`] once
//! per frame and reads that frame's primitives afterwards.
//!
//! ```
//! use constellate::{
//!     PointerInput, Simulation, build_topology, default_catalog, frame_primitives,
//! };
//!
//! let topology = build_topology(default_catalog());
//! let mut sim = Simulation::from_topology(&topology);
//!
//! sim.step(PointerInput::new(0.7, 0.4), 0);
//! let frame = frame_primitives(&sim, &topology);
//! assert_eq!(frame.points.len(), topology.node_count());
//! ```

pub mod catalog;
pub mod render;
pub mod similarity;
pub mod simulation;
pub mod topology;

pub use catalog::{Category, TechEntry, default_catalog};
pub use render::{FramePrimitives, LinePrimitive, PointPrimitive, frame_primitives};
pub use similarity::{SimilarityError, cosine_similarity, normalize};
pub use simulation::{PointerInput, SimNode, Simulation, SimulationConfig};
pub use topology::{Topology, TopologyNode, build_topology};
