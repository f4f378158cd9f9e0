// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The end-to-end pipeline.
//!
//! ```text
//! Faces<FaceGrid<Color>> ─classify─▶ labels ─orient─▶ Cube ─check─▶ verdict
//! ```
//!
//! Each stage either hands an immutable value to the next or stops with a
//! [`ScanError`] carrying what it was looking at.

use crate::checker::{check_solvability, SolvabilityVerdict};
use crate::classify::Classifier;
use crate::color::Color;
use crate::config::ScanConfig;
use crate::cube::Cube;
use crate::errors::{InvariantError, ScanError};
use crate::geometry::{FaceGrid, FaceName, Faces, Rotation};
use crate::orientation::{resolve_orientation, Resolution};
use log::{debug, info};
use serde::Serialize;

/// A classified, correctly oriented cube.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub cube: Cube,
    /// Rotation applied to each scanned face to orient it.
    pub rotations: Faces<Rotation>,
    /// The sampled center colors, for display.
    pub center_colors: Faces<Color>,
    pub combinations_tried: usize,
}

/// A scan together with its solvability verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub scan: ScanResult,
    pub verdict: SolvabilityVerdict,
}

impl ScanReport {
    pub fn is_solvable(&self) -> bool {
        self.verdict.is_solvable()
    }
}

pub struct Scanner {
    config: ScanConfig,
    classifier: Box<dyn Classifier + Send + Sync>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            classifier: config.classifier.build(),
            config,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Classify and orient 54 sampled colors.
    pub fn scan(&self, colors: &Faces<FaceGrid<Color>>) -> Result<ScanResult, ScanError> {
        debug!("classifying with {}", self.classifier.name());
        let labels = self.classifier.classify(colors)?;
        let Resolution {
            cube,
            rotations,
            combinations_tried,
        } = self.resolve(&labels)?;
        Ok(ScanResult {
            cube,
            rotations,
            center_colors: colors.map(|_, grid| *grid.center()),
            combinations_tried,
        })
    }

    /// Check the solvability invariants of an oriented cube.
    pub fn check(&self, cube: &Cube) -> Result<SolvabilityVerdict, InvariantError> {
        check_solvability(cube, self.config.parity_policy)
    }

    pub fn scan_and_check(&self, colors: &Faces<FaceGrid<Color>>) -> Result<ScanReport, ScanError> {
        let scan = self.scan(colors)?;
        let verdict = self.check(&scan.cube)?;
        info!(
            "scan {}",
            if verdict.is_solvable() {
                "is solvable"
            } else {
                "is not solvable"
            }
        );
        Ok(ScanReport { scan, verdict })
    }

    #[cfg(feature = "parallel")]
    fn resolve(
        &self,
        labels: &Faces<FaceGrid<FaceName>>,
    ) -> Result<Resolution, crate::errors::OrientationError> {
        if self.config.parallel_search {
            crate::orientation::resolve_orientation_parallel(labels)
        } else {
            resolve_orientation(labels)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve(
        &self,
        labels: &Faces<FaceGrid<FaceName>>,
    ) -> Result<Resolution, crate::errors::OrientationError> {
        resolve_orientation(labels)
    }
}
