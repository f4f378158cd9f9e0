// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use cube_scan::color::{paint, standard_palette};
use cube_scan::cube::parse_moves;
use cube_scan::geometry::{SubcubePosition, FACE_NAMES};
use cube_scan::{solved_cube, Color, Cube, FaceGrid, FaceName, Faces, Rotation};

/// A 20-move scramble.
pub const SCRAMBLE: &str = "U L2 U L2 R2 B2 L2 D2 L2 U R' U B2 F L2 R2 U' L2 R B'";

/// Apply a move sequence to the solved cube.
pub fn scrambled(moves: &str) -> Cube {
    let moves = parse_moves(moves).unwrap_or_else(|err| panic!("bad moves {:?}: {}", moves, err));
    solved_cube().apply_moves(&moves)
}

/// Colors of `cube` under the standard palette.
pub fn colors_of(cube: &Cube) -> Faces<FaceGrid<Color>> {
    paint(cube, &standard_palette())
}

/// Simulate holding each face the wrong way up: the scan of face `f` needs
/// `held[f]` to be undone.
pub fn held_askew<T: Clone>(
    faces: &Faces<FaceGrid<T>>,
    held: &Faces<Rotation>,
) -> Faces<FaceGrid<T>> {
    Faces::from_fn(|face| faces[face].rotated(held[face].inverse()))
}

/// A fixed, non-trivial choice of per-face rotations.
pub fn askew_rotations() -> Faces<Rotation> {
    Faces {
        front: Rotation::Zero,
        right: Rotation::Left90,
        back: Rotation::Left180,
        left: Rotation::Left270,
        top: Rotation::Left90,
        down: Rotation::Left180,
    }
}

/// Overwrite the labels of the subcube at `pos`, given as
/// `(direction, label)` pairs.
pub fn relabel(cube: &mut Cube, pos: SubcubePosition, pairs: &[(FaceName, FaceName)]) {
    for &(direction, label) in pairs {
        assert!(
            cube.set_facelet(direction, pos, label),
            "{} has no {} facelet",
            pos,
            direction
        );
    }
}

/// Labels of the subcube at `pos`, in canonical direction order.
pub fn labels_at(cube: &Cube, pos: SubcubePosition) -> Vec<(FaceName, FaceName)> {
    FACE_NAMES
        .into_iter()
        .filter_map(|direction| cube.facelet(direction, pos).map(|label| (direction, label)))
        .collect()
}
