// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the 3×3×3 cube geometry.
//!
//! The cube is a 3×3×3 lattice of small cubes ("subcubes"). Each outer
//! face shows a 3×3 grid of facelets. Everything else in the crate is
//! derived from these numbers.

/// Side length of the lattice, and of every face grid.
pub const GRID_SIZE: usize = 3;

/// Number of faces of the cube.
pub const NFACES: usize = 6;

/// Facelets on a single face.
pub const FACELETS_PER_FACE: usize = GRID_SIZE * GRID_SIZE;

/// Facelets on the whole cube (54 samples per scan).
pub const NFACELETS: usize = NFACES * FACELETS_PER_FACE;

/// Subcube positions in the lattice, including the hidden core.
pub const NPOSITIONS: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;

/// Corner subcubes (3 facelets each).
pub const NCORNERS: usize = 8;

/// Edge subcubes (2 facelets each).
pub const NEDGES: usize = 12;

/// Face-center subcubes (1 facelet each).
pub const NCENTERS: usize = NFACES;

/// Number of per-face rotation choices (0°, 90°, 180°, 270°).
pub const NROTATIONS: usize = 4;

/// Size of the orientation search space: one rotation per face.
pub const NROTATION_COMBINATIONS: usize = NROTATIONS.pow(NFACES as u32);

/// Hue and saturation are measured on a 0..256 scale (8-bit full-range HSV).
pub const HSV_RANGE: f64 = 256.0;

// Every non-core position is a corner, an edge or a center.
const _: () = assert!(
    NCORNERS + NEDGES + NCENTERS == NPOSITIONS - 1,
    "subcube classification must cover the lattice"
);

// Every facelet belongs to exactly one subcube.
const _: () = assert!(
    NCORNERS * 3 + NEDGES * 2 + NCENTERS == NFACELETS,
    "facelet count must match subcube shapes"
);
