// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 3×3 face grids and their rotations.
//!
//! A [`FaceGrid`] is indexed `[row][col]`: row 0 is the top of the face as it
//! was held in front of the camera, col 0 is its left. The scan does not know
//! which way up each face was held, so grids are routinely re-read under one
//! of four [`Rotation`]s.

use crate::geometry::constants::GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A counter-clockwise ("left") rotation by a multiple of 90°.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, EnumCountMacro,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rotation {
    #[default]
    #[serde(rename = "0")]
    Zero,
    Left90,
    Left180,
    Left270,
}

/// All rotations in enumeration order (0° → 90° → 180° → 270°).
pub const ROTATIONS: [Rotation; 4] = [
    Rotation::Zero,
    Rotation::Left90,
    Rotation::Left180,
    Rotation::Left270,
];

impl Rotation {
    /// Rotation by `quarter_turns` × 90°, taken modulo a full turn.
    pub fn from_quarter_turns(quarter_turns: usize) -> Self {
        ROTATIONS[quarter_turns % ROTATIONS.len()]
    }

    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    pub fn degrees(self) -> u32 {
        self.quarter_turns() as u32 * 90
    }

    /// Apply `self` then `other`.
    pub fn then(self, other: Rotation) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that undoes `self`.
    pub fn inverse(self) -> Self {
        Self::from_quarter_turns(ROTATIONS.len() - self.quarter_turns())
    }

    /// Exact `(cos, sin)` of the angle.
    fn cos_sin(self) -> (i32, i32) {
        match self {
            Rotation::Zero => (1, 0),
            Rotation::Left90 => (0, 1),
            Rotation::Left180 => (-1, 0),
            Rotation::Left270 => (0, -1),
        }
    }
}

/// A fixed 3×3 matrix of `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceGrid<T>(pub [[T; GRID_SIZE]; GRID_SIZE]);

impl<T> FaceGrid<T> {
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self(std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T, usize, usize) -> U) -> FaceGrid<U> {
        FaceGrid::from_fn(|row, col| f(&self.0[row][col], row, col))
    }

    /// The center facelet, which never moves relative to its face.
    pub fn center(&self) -> &T {
        &self.0[1][1]
    }

    /// Iterate `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, v)| (row, col, v)))
    }
}

impl<T: Clone> FaceGrid<T> {
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_, _| value.clone())
    }

    /// Re-read the grid rotated counter-clockwise by `rotation`.
    ///
    /// Each output cell `(row, col)` takes the input cell obtained by rotating
    /// `(row - 1, col - 1)` about the grid center and offsetting back by one.
    /// Multiples of 90° land exactly on grid cells.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let (cos, sin) = rotation.cos_sin();
        Self::from_fn(|row, col| {
            let x = col as i32 - 1;
            let y = row as i32 - 1;
            let source_col = (x * cos - y * sin + 1) as usize;
            let source_row = (x * sin + y * cos + 1) as usize;
            self.0[source_row][source_col].clone()
        })
    }
}

/// Free-function form of [`FaceGrid::rotated`].
pub fn rotate_face_grid<T: Clone>(grid: &FaceGrid<T>, rotation: Rotation) -> FaceGrid<T> {
    grid.rotated(rotation)
}

impl<T> Index<(usize, usize)> for FaceGrid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for FaceGrid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}
