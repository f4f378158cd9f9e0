// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deciding whether a cube is reachable by legal moves.
//!
//! Three invariants are checked, none of which needs a solver:
//!
//! - **Permutation**: the arrangement of corners and edges is an even
//!   permutation of the solved arrangement.
//! - **Corner orientation**: the corner twists sum to a multiple of 3.
//! - **Edge orientation**: the edge flips sum to a multiple of 2.
//!
//! The cube must already be geometrically valid. Any other cube is rejected
//! up front with [`InvariantError::GeometricallyInvalid`] and no partial
//! verdict is produced.
//!
//! # Parity policy
//!
//! Corners and edges may be counted as one interleaved sequence
//! ([`ParityPolicy::Combined`]) or as two sequences whose counts are added
//! ([`ParityPolicy::Separate`]). On a geometrically valid cube the two
//! counts always have the same parity; both are reported.

pub mod corner;
pub mod edge;
pub mod parity;

pub use corner::{corner_rotation, CORNER_ROTATIONS};
pub use edge::{edge_rotation, EDGE_REFERENCE_PRIORITY};
pub use parity::{count_transpositions, sort_and_count_transpositions, TranspositionCounts};

use crate::cube::Cube;
use crate::errors::InvariantError;
use crate::geometry::{is_geometrically_valid, subcube_facelets, SubcubeKind, SubcubePosition};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Which transposition count decides permutation parity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ParityPolicy {
    /// One count over corners and edges interleaved in position order.
    #[default]
    Combined,
    /// Corner count plus edge count.
    Separate,
}

/// A sum that must be a multiple of `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvariantCheck {
    pub value: usize,
    pub modulus: usize,
}

impl InvariantCheck {
    pub fn new(value: usize, modulus: usize) -> Self {
        Self { value, modulus }
    }

    pub fn is_satisfied(&self) -> bool {
        self.value % self.modulus == 0
    }
}

/// The three sub-checks and the raw numbers behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolvabilityVerdict {
    /// Transposition count selected by `policy`, modulo 2.
    pub permutation: InvariantCheck,
    /// Sum of corner twists, modulo 3.
    pub corner_orientation: InvariantCheck,
    /// Sum of edge flips, modulo 2.
    pub edge_orientation: InvariantCheck,
    pub transpositions: TranspositionCounts,
    pub policy: ParityPolicy,
}

impl SolvabilityVerdict {
    pub fn is_solvable(&self) -> bool {
        self.permutation.is_satisfied()
            && self.corner_orientation.is_satisfied()
            && self.edge_orientation.is_satisfied()
    }
}

fn mark(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "FAIL"
    }
}

impl fmt::Display for SolvabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            if self.is_solvable() {
                "solvable"
            } else {
                "not solvable"
            }
        )?;
        writeln!(
            f,
            "  [{}] permutation: {} transpositions ({} parity, {} policy)",
            mark(self.permutation.is_satisfied()),
            self.permutation.value,
            if self.permutation.is_satisfied() {
                "even"
            } else {
                "odd"
            },
            self.policy
        )?;
        writeln!(
            f,
            "  [{}] corner orientation: twist sum {} (must be a multiple of {})",
            mark(self.corner_orientation.is_satisfied()),
            self.corner_orientation.value,
            self.corner_orientation.modulus
        )?;
        write!(
            f,
            "  [{}] edge orientation: flip sum {} (must be a multiple of {})",
            mark(self.edge_orientation.is_satisfied()),
            self.edge_orientation.value,
            self.edge_orientation.modulus
        )
    }
}

/// Check all three invariants of a geometrically valid cube.
pub fn check_solvability(
    cube: &Cube,
    policy: ParityPolicy,
) -> Result<SolvabilityVerdict, InvariantError> {
    if !is_geometrically_valid(cube) {
        warn!("refusing to check a cube whose subcube shapes do not match the solved cube");
        return Err(InvariantError::GeometricallyInvalid {
            cube: Box::new(cube.clone()),
        });
    }
    let transpositions = count_transpositions(cube)?;

    let mut corner_sum = 0usize;
    let mut edge_sum = 0usize;
    for pos in SubcubePosition::all() {
        let facelets = subcube_facelets(cube, pos);
        match pos.kind() {
            SubcubeKind::Corner => corner_sum += corner_rotation(&facelets)? as usize,
            SubcubeKind::Edge => edge_sum += edge_rotation(&facelets)? as usize,
            SubcubeKind::Center | SubcubeKind::Core => {}
        }
    }

    let permutation = match policy {
        ParityPolicy::Combined => transpositions.combined,
        ParityPolicy::Separate => transpositions.corners + transpositions.edges,
    };
    let verdict = SolvabilityVerdict {
        permutation: InvariantCheck::new(permutation, 2),
        corner_orientation: InvariantCheck::new(corner_sum, 3),
        edge_orientation: InvariantCheck::new(edge_sum, 2),
        transpositions,
        policy,
    };
    if verdict.is_solvable() {
        info!(
            "cube is solvable ({} transpositions, twist {}, flip {})",
            permutation, corner_sum, edge_sum
        );
    } else {
        warn!(
            "cube is not solvable ({} transpositions, twist {}, flip {})",
            permutation, corner_sum, edge_sum
        );
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{parse_moves, solved_cube};
    use crate::geometry::FaceName;
    use strum::IntoEnumIterator;

    #[test]
    fn test_solved_cube_passes_everything() {
        for policy in ParityPolicy::iter() {
            let verdict = check_solvability(&solved_cube(), policy).unwrap();
            assert!(verdict.is_solvable());
            assert_eq!(verdict.permutation.value, 0);
            assert_eq!(verdict.corner_orientation.value, 0);
            assert_eq!(verdict.edge_orientation.value, 0);
            assert_eq!(verdict.policy, policy);
        }
    }

    #[test]
    fn test_policies_agree_on_parity() {
        let moves = parse_moves("R U R' U' F2 L D' B").unwrap();
        let cube = solved_cube().apply_moves(&moves);
        let combined = check_solvability(&cube, ParityPolicy::Combined).unwrap();
        let separate = check_solvability(&cube, ParityPolicy::Separate).unwrap();
        assert!(combined.is_solvable());
        assert!(separate.is_solvable());
        assert_eq!(combined.transpositions, separate.transpositions);
        assert_eq!(
            combined.permutation.value % 2,
            separate.permutation.value % 2
        );
    }

    #[test]
    fn test_invalid_cube_is_an_error() {
        let mut cube = solved_cube();
        cube.top[(1, 0)] = FaceName::Down;
        for policy in ParityPolicy::iter() {
            assert_eq!(
                check_solvability(&cube, policy),
                Err(InvariantError::GeometricallyInvalid {
                    cube: Box::new(cube.clone())
                })
            );
        }
    }

    #[test]
    fn test_invariant_check() {
        assert!(InvariantCheck::new(6, 3).is_satisfied());
        assert!(!InvariantCheck::new(7, 2).is_satisfied());
    }

    #[test]
    fn test_display() {
        let verdict = check_solvability(&solved_cube(), ParityPolicy::Combined).unwrap();
        let text = verdict.to_string();
        assert!(text.starts_with("solvable\n"));
        assert!(text.contains("[ok] permutation: 0 transpositions (even parity, combined policy)"));
        assert!(text.contains("[ok] corner orientation: twist sum 0"));
        assert!(text.contains("[ok] edge orientation: flip sum 0"));
    }
}
