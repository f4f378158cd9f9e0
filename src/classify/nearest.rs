// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Nearest-center classification.
//!
//! Each facelet is labelled with the face whose center sample is closest in
//! RGB. Simpler than hue clustering and never fails, but it does not enforce
//! nine facelets per face; geometric validation catches the fallout.

use crate::classify::Classifier;
use crate::color::Color;
use crate::errors::ClassificationError;
use crate::geometry::{FaceGrid, FaceName, Faces, FACE_NAMES};
use log::debug;

/// Classifier selected by `classifier = "nearest-center"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestCenter;

impl Classifier for NearestCenter {
    fn classify(
        &self,
        colors: &Faces<FaceGrid<Color>>,
    ) -> Result<Faces<FaceGrid<FaceName>>, ClassificationError> {
        Ok(classify_by_nearest_center(colors))
    }

    fn name(&self) -> &str {
        "nearest-center"
    }
}

/// Label every facelet with the face whose center color is nearest.
///
/// Ties go to the earlier face in canonical order.
pub fn classify_by_nearest_center(colors: &Faces<FaceGrid<Color>>) -> Faces<FaceGrid<FaceName>> {
    let centers = colors.map(|_, grid| *grid.center());
    let labels = colors.map(|_, grid| grid.map(|&color, _, _| nearest_face(&centers, color)));
    debug!("nearest-center labels: {:?}", labels);
    labels
}

fn nearest_face(centers: &Faces<Color>, color: Color) -> FaceName {
    let mut best = FACE_NAMES[0];
    let mut best_distance = f64::INFINITY;
    for face in FACE_NAMES {
        let distance = centers[face].distance(color);
        if distance < best_distance {
            best = face;
            best_distance = distance;
        }
    }
    best
}
