//! # ji-lattice — Interval Lattice Layouts
//!
//! Graph layouts for musical interval lattices, ready for vector
//! rendering.
//!
//! Given prime-exponent vectors ("monzos") and a coordinate table per
//! screen axis, [`span_lattice`] produces vertices and typed edges. Pairs
//! two steps apart can be bridged with auxiliary vertices so the drawing
//! stays connected. [`span_grid`] does the same for equal-tempered scales
//! laid out on a periodic grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use ji_lattice::{kraig_grady_9, span_lattice, EdgeType};
//!
//! # fn example() -> ji_lattice::Result<()> {
//! // 1/1, 3/2 and 5/4 with the octave projected out
//! let monzos = vec![vec![0.0], vec![-1.0, 1.0], vec![-2.0, 0.0, 1.0]];
//! let layout = span_lattice(&monzos, &kraig_grady_9(0))?;
//!
//! assert_eq!(layout.vertices.len(), 3);
//! assert!(layout.edges.iter().all(|e| e.edge_type == EdgeType::Primary));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Projector | `lattice::project` | Drop prime axes no screen axis uses |
//! | Connector | `lattice::connect` | Unit-step links, distance-2 bridging |
//! | Spanner | `lattice` | Place vertices, resolve edges, custom edges |
//! | EdgeMerger | `merge` | Fuse collinear runs |
//! | ValSolver | `val` | Distinct steps for circular presets |
//! | GridSpanner | `grid` | Equal-tempered grids with gridlines |
//!
//! Every call is synchronous and stateless. Logging goes through
//! `tracing`; install a subscriber to see it.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod vector;
pub mod primes;
pub mod lattice;
pub mod merge;
pub mod val;
pub mod grid;
pub mod presets;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Connection, Edge, Edge3D, EdgeType, GridLayout, GridVertex, Layout, Layout3D, Monzo,
    StepIndices, Vertex, Vertex3D,
};

// ============================================================================
// Re-exports: Engines
// ============================================================================

pub use lattice::{
    Connectivity, LatticeConfig, LatticeConfig3D, connect, project, span_lattice,
    span_lattice_3d, taxicab_distance, unproject,
};
pub use merge::{merge_edges, merge_edges_3d};
pub use val::mod_val;
pub use grid::{GridConfig, GridLines, Viewport, shortest_edge, span_grid};
pub use presets::{kraig_grady_9, prime_ring_72, prime_sphere, scott_dakota_24, wgp_9};
pub use primes::{LOG_PRIMES, PRIMES};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
