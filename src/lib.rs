// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning a camera scan of a 3×3×3 cube into a validated cube state, and
//! deciding whether that state can be solved.
//!
//! # Architecture
//!
//! The pipeline has three stages, each a pure function of its input:
//!
//! 1. **Classification** ([`classify`]): 54 averaged colors become 54 face
//!    labels. The default classifier groups the least saturated nine as one
//!    face, then cuts the hue ring of the remaining 45 into five clusters of
//!    nine with exactly one known center each.
//! 2. **Orientation** ([`orientation`]): the scan does not record which way
//!    up each face was held, so all `4^6` per-face rotations are tried and
//!    the first that yields a geometrically valid cube wins.
//! 3. **Solvability** ([`checker`]): permutation parity, corner twist and
//!    edge flip are checked without running a solver.
//!
//! [`scanner::Scanner`] runs all three, configured by
//! [`config::ScanConfig`].
//!
//! # Coordinates
//!
//! Subcubes live on a lattice `(x, y, z)` with `x` left → right, `y`
//! back → front and `z` top → down. How each face's 3×3 grid maps onto the
//! lattice is fixed in [`geometry::subcube`]; everything downstream relies on
//! that table.
//!
//! # Parallelization
//!
//! With the `parallel` feature (on by default) the orientation search can
//! run on the rayon thread pool. It returns the same result as the
//! sequential search.

pub mod checker;
pub mod classify;
pub mod color;
pub mod config;
pub mod cube;
pub mod errors;
pub mod geometry;
pub mod orientation;
pub mod sampling;
pub mod scanner;

// Re-export commonly used types
pub use checker::{check_solvability, ParityPolicy, SolvabilityVerdict};
pub use classify::{Classifier, ClassifierKind};
pub use color::Color;
pub use config::ScanConfig;
pub use cube::{solved_cube, Cube, Move};
pub use errors::{ErrorKind, ScanError};
pub use geometry::{FaceGrid, FaceName, Faces, Rotation};
pub use scanner::{ScanReport, ScanResult, Scanner};
