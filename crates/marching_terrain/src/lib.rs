//! marching_terrain - Engine independent marching cubes terrain cells
//!
//! This crate turns a cubic region of space into a triangle mesh. A layered
//! Perlin density field is sampled on a regular lattice, and the iso-surface
//! at a configurable threshold is extracted with classic marching cubes.
//!
//! # Features
//!
//! - **Marching Cubes**: Canonical 256-case triangle table with interpolated
//!   or midpoint edge vertices
//! - **Layered Perlin Noise**: Pairwise 2D or true 3D Perlin basis summed
//!   over configurable octaves
//! - **Pluggable Fields**: Any `Fn(Vec3) -> f32` can replace the noise
//! - **Parallel**: Lattice sampling and extraction run on rayon, with
//!   deterministic output order
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use marching_terrain::{generate_cell, CellConfig, NoiseConfig};
//!
//! let cell = CellConfig::new().with_extent(64.0).with_resolution(32);
//! let noise = NoiseConfig::new().with_scale(4.0).with_layers(4);
//!
//! let mesh = generate_cell(Vec3::ZERO, &cell, &noise)?;
//!
//! println!("Generated {} vertices, {} triangles",
//!     mesh.vertex_count(), mesh.triangle_count());
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod lattice;
pub mod tables;
pub mod types;

// Re-export commonly used items
pub use cancel::CancelToken;
pub use config::{CellConfig, EdgePlacement, NoiseConfig, WindingOrder, PRACTICAL_MAX_RESOLUTION};
pub use error::{ConfigError, GenerateError};
pub use lattice::{Lattice, LatticeSample};
pub use tables::{EDGE_CORNERS, EDGE_TABLE, TRIANGLE_TABLE};
pub use types::{CellMesh, GenerationStats, MinMaxAABB};

// Density fields
pub mod noise;
pub use noise::{DensityField, NoiseBasis, NoiseField};

// Marching cubes extraction
pub mod marching;
pub use marching::{extract, extract_cancellable};

// Cell orchestration
pub mod cell;
pub use cell::{
  generate_cell, generate_cell_cancellable, generate_cell_with, generate_cells, CellGenerator,
};

// Host-side settings diffing
pub mod regen;
pub use regen::{CellRegenerator, RegenOutcome};

#[cfg(test)]
mod test_utils;
