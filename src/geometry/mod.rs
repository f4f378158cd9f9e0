// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the 3×3×3 cube.
//!
//! This module contains pure, dependency-free geometry:
//! - FaceName: the six faces, in canonical order
//! - Faces: a total per-face container
//! - FaceGrid / Rotation: 3×3 grids and their 90° rotations
//! - SubcubePosition / SubcubeFacelets / SubcubeId: which facelets meet at
//!   each small cube, and an order-independent fingerprint of them

pub mod constants;
pub mod face_name;
pub mod grid;
pub mod subcube;

// Re-export for convenience
pub use constants::*;
pub use face_name::{FaceName, Faces, FACE_NAMES};
pub use grid::{rotate_face_grid, FaceGrid, Rotation, ROTATIONS};
pub use subcube::{
    facelet_index, facelet_position, is_geometrically_valid, subcube_facelets, subcube_id,
    SubcubeFacelets, SubcubeId, SubcubeKind, SubcubePosition,
};
