// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subcube positions and the facelets that meet at them.
//!
//! The lattice coordinates are `x` (left → right), `y` (back → front) and
//! `z` (top → down), each in `0..3`. A facelet of direction `d` exists at a
//! position exactly when that position touches face `d`:
//!
//! | direction | present iff | grid cell read      |
//! |-----------|-------------|---------------------|
//! | front     | `y == 2`    | `front[z][x]`       |
//! | right     | `x == 2`    | `right[z][2 - y]`   |
//! | back      | `y == 0`    | `back[z][2 - x]`    |
//! | left      | `x == 0`    | `left[z][y]`        |
//! | top       | `z == 0`    | `top[y][x]`         |
//! | down      | `z == 2`    | `down[2 - y][x]`    |
//!
//! The reflections in this table encode how each face is held in front of
//! the camera. They must stay in lock-step with [`facelet_position`], and
//! every solvability invariant depends on them.

use crate::cube::Cube;
use crate::geometry::constants::{GRID_SIZE, NFACES};
use crate::geometry::face_name::{FaceName, FACE_NAMES};
use serde::Serialize;
use std::fmt;

/// A coordinate in the 3×3×3 lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubcubePosition {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

/// Shape of the subcube at a position, by number of visible facelets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubcubeKind {
    /// The hidden core at (1,1,1).
    Core,
    Center,
    Edge,
    Corner,
}

impl SubcubePosition {
    /// Create a position, panicking if a coordinate is out of range.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= 3`.
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        assert!(
            (x as usize) < GRID_SIZE && (y as usize) < GRID_SIZE && (z as usize) < GRID_SIZE,
            "SubcubePosition out of range: ({}, {}, {})",
            x,
            y,
            z
        );
        Self { x, y, z }
    }

    /// All 27 positions, nested `x`, then `y`, then `z` ascending.
    pub fn all() -> impl Iterator<Item = SubcubePosition> {
        (0..GRID_SIZE as u8).flat_map(|x| {
            (0..GRID_SIZE as u8)
                .flat_map(move |y| (0..GRID_SIZE as u8).map(move |z| SubcubePosition { x, y, z }))
        })
    }

    /// Coordinates relative to the lattice center, each in `-1..=1`.
    pub fn centered(self) -> [i8; 3] {
        [self.x as i8 - 1, self.y as i8 - 1, self.z as i8 - 1]
    }

    /// Inverse of [`SubcubePosition::centered`].
    pub fn from_centered(c: [i8; 3]) -> Self {
        Self::new((c[0] + 1) as u8, (c[1] + 1) as u8, (c[2] + 1) as u8)
    }

    pub fn kind(self) -> SubcubeKind {
        let extremes = [self.x, self.y, self.z]
            .iter()
            .filter(|&&c| c != 1)
            .count();
        match extremes {
            0 => SubcubeKind::Core,
            1 => SubcubeKind::Center,
            2 => SubcubeKind::Edge,
            _ => SubcubeKind::Corner,
        }
    }

    /// Whether a facelet of `direction` exists at this position.
    pub fn has_direction(self, direction: FaceName) -> bool {
        facelet_index(direction, self).is_some()
    }
}

impl fmt::Display for SubcubePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Grid cell `(row, col)` of face `direction` that shows the facelet at `pos`,
/// or `None` if `pos` does not touch that face.
pub fn facelet_index(direction: FaceName, pos: SubcubePosition) -> Option<(usize, usize)> {
    let (x, y, z) = (pos.x as usize, pos.y as usize, pos.z as usize);
    let last = GRID_SIZE - 1;
    match direction {
        FaceName::Front if y == last => Some((z, x)),
        FaceName::Right if x == last => Some((z, last - y)),
        FaceName::Back if y == 0 => Some((z, last - x)),
        FaceName::Left if x == 0 => Some((z, y)),
        FaceName::Top if z == 0 => Some((y, x)),
        FaceName::Down if z == last => Some((last - y, x)),
        _ => None,
    }
}

/// Inverse of [`facelet_index`]: the position shown by cell `(row, col)` of
/// face `direction`.
pub fn facelet_position(direction: FaceName, row: usize, col: usize) -> SubcubePosition {
    let last = GRID_SIZE - 1;
    let (x, y, z) = match direction {
        FaceName::Front => (col, last, row),
        FaceName::Right => (last, last - col, row),
        FaceName::Back => (last - col, 0, row),
        FaceName::Left => (0, col, row),
        FaceName::Top => (col, row, 0),
        FaceName::Down => (col, last - row, last),
    };
    SubcubePosition::new(x as u8, y as u8, z as u8)
}

/// The facelets present at one subcube: a partial map from physical
/// direction to the label scanned there.
///
/// Which directions are present depends only on the position; the labels
/// depend on the scanned cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubcubeFacelets {
    labels: [Option<FaceName>; NFACES],
}

impl SubcubeFacelets {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(direction, label)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs(pairs: &[(FaceName, FaceName)]) -> Self {
        let mut facelets = Self::empty();
        for &(direction, label) in pairs {
            facelets.insert(direction, label);
        }
        facelets
    }

    pub fn insert(&mut self, direction: FaceName, label: FaceName) {
        self.labels[direction.index()] = Some(label);
    }

    /// Label shown in `direction`, if a facelet is there.
    pub fn get(&self, direction: FaceName) -> Option<FaceName> {
        self.labels[direction.index()]
    }

    /// Number of facelets present.
    pub fn len(&self) -> usize {
        self.labels.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present `(direction, label)` pairs in canonical direction order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceName, FaceName)> + '_ {
        FACE_NAMES
            .into_iter()
            .filter_map(move |direction| self.get(direction).map(|label| (direction, label)))
    }

    pub fn directions(&self) -> impl Iterator<Item = FaceName> + '_ {
        self.iter().map(|(direction, _)| direction)
    }

    pub fn labels(&self) -> impl Iterator<Item = FaceName> + '_ {
        self.iter().map(|(_, label)| label)
    }

    /// Fingerprint of the directions present (where this subcube should be).
    pub fn key_id(&self) -> SubcubeId {
        subcube_id(self.directions())
    }

    /// Fingerprint of the labels scanned (which subcube is actually here).
    pub fn value_id(&self) -> SubcubeId {
        subcube_id(self.labels())
    }
}

impl fmt::Display for SubcubeFacelets {
    /// Format as `{back: top, top: front}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (direction, label)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", direction, label)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for SubcubeFacelets {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Order-independent fingerprint of a multiset of face names.
///
/// Stored as a count per face, so two ids are equal exactly when they hold the
/// same names the same number of times. Displays as the names in canonical
/// order joined by commas, e.g. `front,left,top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SubcubeId {
    counts: [u8; NFACES],
}

impl SubcubeId {
    /// Total number of names, counting repeats.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, face: FaceName) -> bool {
        self.counts[face.index()] > 0
    }

    /// Names in canonical order, repeats included.
    pub fn faces(&self) -> impl Iterator<Item = FaceName> + '_ {
        FACE_NAMES
            .into_iter()
            .flat_map(move |face| std::iter::repeat(face).take(self.counts[face.index()] as usize))
    }
}

impl fmt::Display for SubcubeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}

impl Serialize for SubcubeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromIterator<FaceName> for SubcubeId {
    fn from_iter<I: IntoIterator<Item = FaceName>>(iter: I) -> Self {
        let mut id = SubcubeId::default();
        for face in iter {
            id.counts[face.index()] += 1;
        }
        id
    }
}

/// Canonicalize a collection of face names into a [`SubcubeId`].
pub fn subcube_id(faces: impl IntoIterator<Item = FaceName>) -> SubcubeId {
    faces.into_iter().collect()
}

/// The facelets of `cube` meeting at `pos`.
pub fn subcube_facelets(cube: &Cube, pos: SubcubePosition) -> SubcubeFacelets {
    let mut facelets = SubcubeFacelets::empty();
    for direction in FACE_NAMES {
        if let Some((row, col)) = facelet_index(direction, pos) {
            facelets.insert(direction, cube[direction][(row, col)]);
        }
    }
    facelets
}

/// Whether every subcube shape scanned is one that exists on a real cube,
/// each exactly once.
///
/// Compares the multiset of direction fingerprints with the multiset of label
/// fingerprints over all 26 visible positions.
pub fn is_geometrically_valid(cube: &Cube) -> bool {
    let mut key_ids = Vec::with_capacity(26);
    let mut value_ids = Vec::with_capacity(26);
    for pos in SubcubePosition::all() {
        let facelets = subcube_facelets(cube, pos);
        if facelets.is_empty() {
            continue;
        }
        key_ids.push(facelets.key_id());
        value_ids.push(facelets.value_id());
    }
    key_ids.sort_unstable();
    value_ids.sort_unstable();
    key_ids == value_ids
}
