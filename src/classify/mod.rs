// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning 54 sampled colors into face labels.
//!
//! Two classifiers implement [`Classifier`]:
//! - [`HueClustering`]: unsupervised grouping by saturation then hue
//! - [`NearestCenter`]: each facelet takes the face whose center it is
//!   closest to in RGB
//!
//! Both rely on the scan order fixing which face each center facelet
//! belongs to. Neither knows which way up each face was held; that is the
//! job of [`crate::orientation`].

pub mod context;
pub mod hue_clustering;
pub mod nearest;

pub use context::FaceletSample;
pub use hue_clustering::{classify_by_hue, HueClustering, HueCut};
pub use nearest::{classify_by_nearest_center, NearestCenter};

use crate::color::Color;
use crate::errors::ClassificationError;
use crate::geometry::{FaceGrid, FaceName, Faces};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Assigns a logical face to every sampled facelet.
pub trait Classifier {
    /// Label every facelet. The output grids have the same shape and
    /// orientation as the input grids.
    fn classify(
        &self,
        colors: &Faces<FaceGrid<Color>>,
    ) -> Result<Faces<FaceGrid<FaceName>>, ClassificationError>;

    /// Name used in configuration and logs.
    fn name(&self) -> &str;
}

/// Which classifier a [`ScanConfig`](crate::config::ScanConfig) selects.
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
pub enum ClassifierKind {
    #[default]
    HueClustering,
    NearestCenter,
}

impl ClassifierKind {
    pub fn build(self) -> Box<dyn Classifier + Send + Sync> {
        match self {
            ClassifierKind::HueClustering => Box::new(HueClustering),
            ClassifierKind::NearestCenter => Box::new(NearestCenter),
        }
    }
}
