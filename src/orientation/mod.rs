// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recovering which way up each face was scanned.
//!
//! The classifier labels facelets correctly but cannot know how each face
//! was held in front of the camera. The resolver tries all `4^6 = 4096`
//! per-face rotations and keeps the first that yields a geometrically valid
//! cube.
//!
//! # Search order
//!
//! Combination `i` in `0..4096` rotates face `f` by
//! `(i >> (2 * (5 - f.index()))) & 3` quarter turns: front varies slowest,
//! down fastest. "First" always means lowest `i`, so the sequential and
//! parallel searches agree even when several combinations are valid.

use crate::cube::Cube;
use crate::errors::OrientationError;
use crate::geometry::{
    is_geometrically_valid, FaceGrid, FaceName, Faces, Rotation, NFACES, NROTATION_COMBINATIONS,
};
use log::{debug, info, warn};
use serde::Serialize;

/// A geometrically valid cube together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub cube: Cube,
    /// Rotation applied to each scanned grid.
    pub rotations: Faces<Rotation>,
    /// Combinations examined in search order, including the successful one.
    pub combinations_tried: usize,
}

/// Per-face rotations for combination `index`.
pub fn rotations_for_combination(index: usize) -> Faces<Rotation> {
    Faces::from_fn(|face| {
        let shift = 2 * (NFACES - 1 - face.index());
        Rotation::from_quarter_turns((index >> shift) & 3)
    })
}

/// Apply `rotations` face by face.
pub fn apply_rotations(faces: &Faces<FaceGrid<FaceName>>, rotations: &Faces<Rotation>) -> Cube {
    Faces::from_fn(|face| faces[face].rotated(rotations[face]))
}

fn try_combination(faces: &Faces<FaceGrid<FaceName>>, index: usize) -> Option<Resolution> {
    let rotations = rotations_for_combination(index);
    let cube = apply_rotations(faces, &rotations);
    is_geometrically_valid(&cube).then_some(Resolution {
        cube,
        rotations,
        combinations_tried: index + 1,
    })
}

fn found(
    resolution: Option<Resolution>,
    faces: &Faces<FaceGrid<FaceName>>,
) -> Result<Resolution, OrientationError> {
    match resolution {
        Some(resolution) => {
            info!(
                "orientation found after {} combinations: {:?}",
                resolution.combinations_tried, resolution.rotations
            );
            Ok(resolution)
        }
        None => {
            warn!("no valid orientation among {} combinations", NROTATION_COMBINATIONS);
            Err(OrientationError::NoValidRotation {
                cube: Box::new(*faces),
                combinations_tried: NROTATION_COMBINATIONS,
            })
        }
    }
}

/// Find the first per-face rotation that makes `faces` geometrically valid.
pub fn resolve_orientation(
    faces: &Faces<FaceGrid<FaceName>>,
) -> Result<Resolution, OrientationError> {
    debug!("sequential orientation search");
    let resolution = (0..NROTATION_COMBINATIONS).find_map(|index| try_combination(faces, index));
    found(resolution, faces)
}

/// As [`resolve_orientation`], spread over the rayon thread pool.
///
/// Returns exactly what the sequential search returns.
#[cfg(feature = "parallel")]
pub fn resolve_orientation_parallel(
    faces: &Faces<FaceGrid<FaceName>>,
) -> Result<Resolution, OrientationError> {
    use rayon::prelude::*;

    debug!(
        "parallel orientation search on {} threads",
        rayon::current_num_threads()
    );
    let resolution = (0..NROTATION_COMBINATIONS)
        .into_par_iter()
        .find_map_first(|index| try_combination(faces, index));
    found(resolution, faces)
}
