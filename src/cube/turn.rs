// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Legal face turns.
//!
//! Turns are used to build reachable cube states for diagnostics and tests.
//! They move facelets through the same direction → grid-cell transform that
//! [`subcube_facelets`](crate::geometry::subcube_facelets) reads, so any
//! sequence of turns applied to the solved cube passes every solvability
//! check.
//!
//! # Examples
//!
//! ```
//! use cube_scan::cube::{parse_moves, solved_cube};
//! use cube_scan::geometry::is_geometrically_valid;
//!
//! let moves = parse_moves("R U R' U'").unwrap();
//! let cube = solved_cube().apply_moves(&moves);
//! assert!(!cube.is_solved());
//! assert!(is_geometrically_valid(&cube));
//! ```

use crate::cube::Cube;
use crate::errors::MoveParseError;
use crate::geometry::{subcube_facelets, FaceName, SubcubePosition};
use std::fmt;
use std::str::FromStr;

/// A clockwise quarter turn count applied to one outer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceName,
    /// Clockwise quarter turns as seen from outside the face, reduced to
    /// `0..=3`. A count of `0` leaves the cube unchanged.
    pub quarter_turns: u8,
}

impl Move {
    pub fn new(face: FaceName, quarter_turns: u8) -> Self {
        Self {
            face,
            quarter_turns: quarter_turns % 4,
        }
    }

    pub fn inverse(self) -> Self {
        Self::new(self.face, 4 - self.quarter_turns % 4)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse Singmaster notation: `R`, `R'`, `R2` (and `R2'`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;
        let face = FaceName::from_letter(letter).ok_or_else(|| MoveParseError::UnknownFace {
            token: s.to_string(),
        })?;
        let quarter_turns = match chars.as_str() {
            "" => 1,
            "'" => 3,
            "2" | "2'" => 2,
            _ => {
                return Err(MoveParseError::UnknownSuffix {
                    token: s.to_string(),
                })
            }
        };
        Ok(Move::new(face, quarter_turns))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.quarter_turns {
            2 => "2",
            3 => "'",
            _ => "",
        };
        write!(f, "{}{}", self.face.letter(), suffix)
    }
}

/// Parse a whitespace-separated move sequence.
pub fn parse_moves(sequence: &str) -> Result<Vec<Move>, MoveParseError> {
    sequence.split_whitespace().map(str::parse).collect()
}

fn dot(a: [i8; 3], b: [i8; 3]) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [i8; 3], b: [i8; 3]) -> [i8; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotate `v` a quarter turn clockwise as seen looking down `axis` from outside.
fn rotate_clockwise(v: [i8; 3], axis: [i8; 3]) -> [i8; 3] {
    let along = dot(axis, v);
    let across = cross(axis, v);
    [
        along * axis[0] - across[0],
        along * axis[1] - across[1],
        along * axis[2] - across[2],
    ]
}

impl Cube {
    /// Turn the outer layer facing `face` clockwise by `quarter_turns`.
    pub fn turn(&self, face: FaceName, quarter_turns: u8) -> Cube {
        let axis = face.normal();
        let mut turned = *self;
        for pos in SubcubePosition::all().filter(|pos| dot(pos.centered(), axis) == 1) {
            for (direction, label) in subcube_facelets(self, pos).iter() {
                let mut c = pos.centered();
                let mut d = direction.normal();
                for _ in 0..quarter_turns % 4 {
                    c = rotate_clockwise(c, axis);
                    d = rotate_clockwise(d, axis);
                }
                // Rotations map unit axes to unit axes, so the lookup always succeeds.
                if let Some(target_direction) = FaceName::from_normal(d) {
                    turned.set_facelet(target_direction, SubcubePosition::from_centered(c), label);
                }
            }
        }
        turned
    }

    pub fn apply(&self, m: Move) -> Cube {
        self.turn(m.face, m.quarter_turns)
    }

    pub fn apply_moves(&self, moves: &[Move]) -> Cube {
        moves.iter().fold(*self, |cube, &m| cube.apply(m))
    }
}
