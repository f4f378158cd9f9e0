// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for each stage of the scan pipeline.
//!
//! Every error carries the intermediate data needed to diagnose it, and
//! every payload serializes, so a caller can show the raw context next to a
//! "please re-scan" prompt. Nothing here is retried internally.

use crate::classify::FaceletSample;
use crate::cube::Cube;
use crate::geometry::{FaceName, SubcubeFacelets, SubcubeId};
use serde::Serialize;
use strum_macros::{Display, EnumCount as EnumCountMacro};

/// The pipeline stage an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCountMacro)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ErrorKind {
    Classification,
    Orientation,
    Invariant,
}

/// Colors could not be grouped into six faces.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ClassificationError {
    /// None of the nine least saturated facelets is a face center.
    #[error("no center among the {} least saturated facelets", .samples.len())]
    AchromaticCenterMissing { samples: Vec<FaceletSample> },

    /// No rotation of the hue ring gives five clusters with one center each.
    #[error("no hue split puts exactly one center in each of the five color clusters")]
    NoFeasiblePartition { samples: Vec<FaceletSample> },

    /// A facelet ended classification without a face.
    #[error("facelet {face}[{row}][{col}] was not assigned to any face")]
    Unassigned {
        face: FaceName,
        row: usize,
        col: usize,
    },
}

/// No per-face rotation makes the classified cube geometrically valid.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum OrientationError {
    #[error("no valid face rotation found after {combinations_tried} combinations")]
    NoValidRotation {
        /// The classified cube, before any rotation was applied.
        cube: Box<Cube>,
        combinations_tried: usize,
    },
}

/// A subcube does not fit the corner/edge tables, or a permutation could not
/// be ranked.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum InvariantError {
    /// Some corner or edge shape occurs in the wrong number of places.
    #[error("cube is not geometrically valid: its corner and edge shapes do not match the solved cube")]
    GeometricallyInvalid { cube: Box<Cube> },

    #[error("corner {facelets} shows neither top nor down")]
    CornerBasisNotFound { facelets: SubcubeFacelets },

    #[error("corner {facelets} is not one of the eight corner shapes")]
    UnknownCorner { facelets: SubcubeFacelets },

    #[error("corner {facelets} has basis direction {basis} outside its table entry")]
    InvalidBasisDirection {
        facelets: SubcubeFacelets,
        basis: FaceName,
    },

    #[error("edge {facelets} has {count} facelets, expected 2")]
    WrongEdgeFaceletCount {
        facelets: SubcubeFacelets,
        count: usize,
    },

    #[error("edge {facelets} shows none of top, down, front or back")]
    EdgeBasisNotFound { facelets: SubcubeFacelets },

    #[error("edge {facelets} touches none of top, down, front or back")]
    UnknownEdge { facelets: SubcubeFacelets },

    #[error("subcube {id} does not occur among the solved positions")]
    UnknownSubcube { id: SubcubeId },
}

/// Any failure of [`Scanner::scan`](crate::scanner::Scanner::scan) or
/// [`Scanner::scan_and_check`](crate::scanner::Scanner::scan_and_check).
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ScanError {
    #[error("classification failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("orientation failed: {0}")]
    Orientation(#[from] OrientationError),

    #[error("solvability check failed: {0}")]
    Invariant(#[from] InvariantError),
}

impl ClassificationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Classification
    }
}

impl OrientationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Orientation
    }
}

impl InvariantError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Invariant
    }
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::Classification(err) => err.kind(),
            ScanError::Orientation(err) => err.kind(),
            ScanError::Invariant(err) => err.kind(),
        }
    }
}

/// A move sequence could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,

    #[error("unknown face in move {token:?} (expected one of U D F B L R)")]
    UnknownFace { token: String },

    #[error("unknown suffix in move {token:?} (expected none, ' or 2)")]
    UnknownSuffix { token: String },
}

/// Configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::solved_cube;
    use strum::EnumCount;

    #[test]
    fn test_kinds() {
        assert_eq!(ErrorKind::COUNT, 3);
        let err: ScanError = OrientationError::NoValidRotation {
            cube: Box::new(solved_cube()),
            combinations_tried: 4096,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Orientation);
        assert_eq!(err.kind().to_string(), "orientation");
    }

    #[test]
    fn test_messages() {
        let facelets = SubcubeFacelets::from_pairs(&[(FaceName::Top, FaceName::Left)]);
        let err = InvariantError::WrongEdgeFaceletCount { facelets, count: 1 };
        assert_eq!(err.to_string(), "edge {top: left} has 1 facelets, expected 2");
    }

    #[test]
    fn test_serializes_with_stage_and_error_tags() {
        let err: ScanError = ClassificationError::NoFeasiblePartition { samples: vec![] }.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["stage"], "classification");
        assert_eq!(json["error"], "no_feasible_partition");
    }
}
