// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-facelet working state for classification.
//!
//! The contexts are built once from the sampled colors, tagged with faces
//! while clustering runs, then frozen into an immutable grid of labels. The
//! mutable form never leaves the `classify` module.

use crate::color::{Color, Hsv};
use crate::errors::ClassificationError;
use crate::geometry::{FaceGrid, FaceName, Faces, FACELETS_PER_FACE, GRID_SIZE, NFACELETS};
use serde::Serialize;

/// Working record for one facelet.
#[derive(Debug, Clone)]
pub(crate) struct DetectionContext {
    pub color: Color,
    pub hsv: Hsv,
    /// Face assigned so far.
    pub face: Option<FaceName>,
    /// Set only on the six center facelets: the face they belong to, known
    /// from scan order rather than from color.
    pub center_face: Option<FaceName>,
    /// Where the sample came from.
    pub origin: (FaceName, usize, usize),
}

impl DetectionContext {
    pub fn sample(&self) -> FaceletSample {
        let (face, row, col) = self.origin;
        FaceletSample {
            face,
            row,
            col,
            hue: self.hsv.hue,
            saturation: self.hsv.saturation,
            center: self.center_face.is_some(),
            color: self.color,
        }
    }
}

/// Serializable snapshot of a facelet, attached to classification errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceletSample {
    pub face: FaceName,
    pub row: usize,
    pub col: usize,
    pub hue: u8,
    pub saturation: u8,
    pub center: bool,
    pub color: Color,
}

/// All 54 contexts, stored face by face in canonical order, row-major.
#[derive(Debug, Clone)]
pub(crate) struct DetectionContexts {
    contexts: Vec<DetectionContext>,
}

impl DetectionContexts {
    pub fn new(colors: &Faces<FaceGrid<Color>>) -> Self {
        let mut contexts = Vec::with_capacity(NFACELETS);
        for (face, grid) in colors.iter() {
            for (row, col, &color) in grid.cells() {
                let is_center = row == 1 && col == 1;
                contexts.push(DetectionContext {
                    color,
                    hsv: color.to_hsv(),
                    face: None,
                    center_face: is_center.then_some(face),
                    origin: (face, row, col),
                });
            }
        }
        Self { contexts }
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn get(&self, index: usize) -> &DetectionContext {
        &self.contexts[index]
    }

    /// Indices of all contexts, ordered by `key` (stable).
    pub fn indices_sorted_by<K: Ord>(&self, key: impl Fn(&DetectionContext) -> K) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.len()).collect();
        indices.sort_by_key(|&i| key(&self.contexts[i]));
        indices
    }

    /// Number of center facelets among `indices`.
    pub fn center_count(&self, indices: &[usize]) -> usize {
        indices
            .iter()
            .filter(|&&i| self.contexts[i].center_face.is_some())
            .count()
    }

    /// Tag every facelet in `cluster` with the face of the first center in it.
    ///
    /// Returns the face assigned, or `None` (tagging nothing) if the cluster
    /// holds no center.
    pub fn assign_cluster(&mut self, cluster: &[usize]) -> Option<FaceName> {
        let face = cluster
            .iter()
            .find_map(|&i| self.contexts[i].center_face)?;
        for &i in cluster {
            self.contexts[i].face = Some(face);
        }
        Some(face)
    }

    pub fn samples(&self, indices: &[usize]) -> Vec<FaceletSample> {
        indices.iter().map(|&i| self.contexts[i].sample()).collect()
    }

    /// Convert the tagged contexts into label grids.
    pub fn freeze(self) -> Result<Faces<FaceGrid<FaceName>>, ClassificationError> {
        Faces::try_from_fn(|face| {
            let mut grid = FaceGrid::filled(face);
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let index = face.index() * FACELETS_PER_FACE + row * GRID_SIZE + col;
                    grid[(row, col)] = self.contexts[index]
                        .face
                        .ok_or(ClassificationError::Unassigned { face, row, col })?;
                }
            }
            Ok(grid)
        })
    }
}
