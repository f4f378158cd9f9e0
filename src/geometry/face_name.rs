// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face names and per-face containers.
//!
//! A [`FaceName`] plays two roles: it names a physical *direction* of the
//! cube (which side a facelet sits on) and a logical *label* (which face's
//! color a facelet shows). In a solved cube the two agree everywhere.
//!
//! The derived `Ord` is the canonical order used for tie-breaking and for
//! building subcube fingerprints:
//! `front < right < back < left < top < down`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// One of the six faces of the cube.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum FaceName {
    Front,
    Right,
    Back,
    Left,
    Top,
    Down,
}

/// All faces in canonical order.
pub const FACE_NAMES: [FaceName; 6] = [
    FaceName::Front,
    FaceName::Right,
    FaceName::Back,
    FaceName::Left,
    FaceName::Top,
    FaceName::Down,
];

impl FaceName {
    /// Position in the canonical order (0..6), usable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            FaceName::Front => FaceName::Back,
            FaceName::Back => FaceName::Front,
            FaceName::Right => FaceName::Left,
            FaceName::Left => FaceName::Right,
            FaceName::Top => FaceName::Down,
            FaceName::Down => FaceName::Top,
        }
    }

    /// Outward unit normal in lattice coordinates.
    ///
    /// The lattice axes are `x` (left → right), `y` (back → front) and
    /// `z` (top → down), which form a right-handed frame.
    pub fn normal(self) -> [i8; 3] {
        match self {
            FaceName::Front => [0, 1, 0],
            FaceName::Right => [1, 0, 0],
            FaceName::Back => [0, -1, 0],
            FaceName::Left => [-1, 0, 0],
            FaceName::Top => [0, 0, -1],
            FaceName::Down => [0, 0, 1],
        }
    }

    /// Inverse of [`FaceName::normal`].
    pub fn from_normal(normal: [i8; 3]) -> Option<Self> {
        FACE_NAMES.into_iter().find(|face| face.normal() == normal)
    }

    /// Singmaster letter for this face (`U` for top).
    pub fn letter(self) -> char {
        match self {
            FaceName::Front => 'F',
            FaceName::Right => 'R',
            FaceName::Back => 'B',
            FaceName::Left => 'L',
            FaceName::Top => 'U',
            FaceName::Down => 'D',
        }
    }

    /// Inverse of [`FaceName::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        FACE_NAMES.into_iter().find(|face| face.letter() == letter)
    }

    /// True for the two faces on the vertical axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, FaceName::Top | FaceName::Down)
    }
}

/// Exactly one value per face.
///
/// The six named fields make the mapping total by construction: there is no
/// way to build a `Faces` with a key missing or an extra key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Faces<T> {
    pub front: T,
    pub right: T,
    pub back: T,
    pub left: T,
    pub top: T,
    pub down: T,
}

impl<T> Faces<T> {
    /// Build a value for each face, visiting faces in canonical order.
    pub fn from_fn(mut f: impl FnMut(FaceName) -> T) -> Self {
        Self {
            front: f(FaceName::Front),
            right: f(FaceName::Right),
            back: f(FaceName::Back),
            left: f(FaceName::Left),
            top: f(FaceName::Top),
            down: f(FaceName::Down),
        }
    }

    /// Fallible variant of [`Faces::from_fn`]; stops at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(FaceName) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            front: f(FaceName::Front)?,
            right: f(FaceName::Right)?,
            back: f(FaceName::Back)?,
            left: f(FaceName::Left)?,
            top: f(FaceName::Top)?,
            down: f(FaceName::Down)?,
        })
    }

    pub fn map<U>(&self, mut f: impl FnMut(FaceName, &T) -> U) -> Faces<U> {
        Faces::from_fn(|face| f(face, &self[face]))
    }

    /// Iterate `(face, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceName, &T)> {
        FACE_NAMES.into_iter().map(move |face| (face, &self[face]))
    }
}

impl<T> Index<FaceName> for Faces<T> {
    type Output = T;

    fn index(&self, face: FaceName) -> &T {
        match face {
            FaceName::Front => &self.front,
            FaceName::Right => &self.right,
            FaceName::Back => &self.back,
            FaceName::Left => &self.left,
            FaceName::Top => &self.top,
            FaceName::Down => &self.down,
        }
    }
}

impl<T> IndexMut<FaceName> for Faces<T> {
    fn index_mut(&mut self, face: FaceName) -> &mut T {
        match face {
            FaceName::Front => &mut self.front,
            FaceName::Right => &mut self.right,
            FaceName::Back => &mut self.back,
            FaceName::Left => &mut self.left,
            FaceName::Top => &mut self.top,
            FaceName::Down => &mut self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_canonical_order() {
        let order: Vec<FaceName> = FaceName::iter().collect();
        assert_eq!(order, FACE_NAMES.to_vec());
        assert!(FaceName::Front < FaceName::Right);
        assert!(FaceName::Left < FaceName::Top);
        assert!(FaceName::Top < FaceName::Down);
        assert_eq!(FaceName::COUNT, 6);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(FaceName::Top.to_string(), "top");
        assert_eq!(FaceName::from_str("down").unwrap(), FaceName::Down);
        assert!(FaceName::from_str("bottom").is_err());
    }

    #[test]
    fn test_opposite_normals_cancel() {
        for face in FACE_NAMES {
            let n = face.normal();
            let o = face.opposite().normal();
            assert_eq!([n[0] + o[0], n[1] + o[1], n[2] + o[2]], [0, 0, 0]);
            assert_eq!(FaceName::from_normal(n), Some(face));
        }
    }

    #[test]
    fn test_letters_round_trip() {
        for face in FACE_NAMES {
            assert_eq!(FaceName::from_letter(face.letter()), Some(face));
        }
        assert_eq!(FaceName::from_letter('X'), None);
    }

    #[test]
    fn test_faces_index_matches_fields() {
        let faces = Faces::from_fn(|face| face.index());
        assert_eq!(faces.front, 0);
        assert_eq!(faces.down, 5);
        for (face, &value) in faces.iter() {
            assert_eq!(faces[face], value);
        }
    }

    #[test]
    fn test_faces_try_from_fn_stops_on_error() {
        let mut visited = Vec::new();
        let result: Result<Faces<u8>, FaceName> = Faces::try_from_fn(|face| {
            visited.push(face);
            if face == FaceName::Back {
                Err(face)
            } else {
                Ok(0)
            }
        });
        assert_eq!(result, Err(FaceName::Back));
        assert_eq!(visited, vec![FaceName::Front, FaceName::Right, FaceName::Back]);
    }
}
