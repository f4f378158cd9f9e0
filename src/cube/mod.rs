// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The validated cube model.
//!
//! A [`Cube`] records, for every facelet of every face, which logical face it
//! currently shows. The center facelet `[1][1]` of each face always shows that
//! face's own name in a correctly classified, correctly oriented cube.

pub mod turn;

pub use turn::{parse_moves, Move};

use crate::geometry::{facelet_index, FaceGrid, FaceName, Faces, SubcubePosition};

/// For every face, which logical face each facelet shows.
pub type Cube = Faces<FaceGrid<FaceName>>;

/// The solved reference cube: every facelet of face `F` shows `F`.
pub fn solved_cube() -> Cube {
    Faces::from_fn(FaceGrid::filled)
}

impl Faces<FaceGrid<FaceName>> {
    /// Label shown in `direction` at `pos`, if that facelet exists.
    pub fn facelet(&self, direction: FaceName, pos: SubcubePosition) -> Option<FaceName> {
        facelet_index(direction, pos).map(|cell| self[direction][cell])
    }

    /// Overwrite the label shown in `direction` at `pos`.
    ///
    /// Returns `false` (and changes nothing) if `pos` has no facelet facing
    /// `direction`.
    pub fn set_facelet(&mut self, direction: FaceName, pos: SubcubePosition, label: FaceName) -> bool {
        match facelet_index(direction, pos) {
            Some(cell) => {
                self[direction][cell] = label;
                true
            }
            None => false,
        }
    }

    /// Whether every face's center shows its own name.
    pub fn has_canonical_centers(&self) -> bool {
        self.iter().all(|(face, grid)| *grid.center() == face)
    }

    /// Whether every facelet shows the face it sits on.
    pub fn is_solved(&self) -> bool {
        self.iter()
            .all(|(face, grid)| grid.cells().all(|(_, _, &label)| label == face))
    }
}
