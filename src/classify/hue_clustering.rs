// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unsupervised grouping of the 54 samples into six faces.
//!
//! # Algorithm
//!
//! 1. The nine least saturated facelets form the achromatic face (a white
//!    face on most cubes). They take the name of the center among them.
//! 2. The remaining 45 facelets are sorted by hue. Hue is circular, so the
//!    sorted sequence is a ring that may need cutting somewhere other than
//!    at hue 0: the nine cut points `0..9` are tried, each giving five
//!    contiguous clusters of nine.
//! 3. A cut is feasible only if each cluster holds exactly one center.
//! 4. Feasible cuts are scored by the product of the per-cluster hue standard
//!    deviations, measured after adding 256 to hues that wrapped past the cut.
//!    The smallest score wins; ties go to the earliest cut.
//!
//! This is a heuristic: it picks the tightest grouping, not a provably
//! correct one. Geometric validation downstream is the real check.

use crate::classify::context::DetectionContexts;
use crate::classify::Classifier;
use crate::color::Color;
use crate::errors::ClassificationError;
use crate::geometry::{FaceGrid, FaceName, Faces, FACELETS_PER_FACE, HSV_RANGE};
use log::{debug, info, warn};

/// Score of one feasible cut of the hue ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCut {
    /// How many leading samples were moved to the end of the ring.
    pub rotation: usize,
    /// Product of per-cluster hue standard deviations.
    pub score: f64,
}

/// Classifier selected by `classifier = "hue-clustering"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HueClustering;

impl Classifier for HueClustering {
    fn classify(
        &self,
        colors: &Faces<FaceGrid<Color>>,
    ) -> Result<Faces<FaceGrid<FaceName>>, ClassificationError> {
        classify_by_hue(colors)
    }

    fn name(&self) -> &str {
        "hue-clustering"
    }
}

/// Label every facelet by clustering hue and saturation.
pub fn classify_by_hue(
    colors: &Faces<FaceGrid<Color>>,
) -> Result<Faces<FaceGrid<FaceName>>, ClassificationError> {
    let mut contexts = DetectionContexts::new(colors);

    let by_saturation = contexts.indices_sorted_by(|context| context.hsv.saturation);
    let (achromatic, chromatic) = by_saturation.split_at(FACELETS_PER_FACE);
    match contexts.assign_cluster(achromatic) {
        Some(face) => debug!("achromatic face is {}", face),
        None => {
            warn!("no center among the {} least saturated facelets", achromatic.len());
            return Err(ClassificationError::AchromaticCenterMissing {
                samples: contexts.samples(&by_saturation),
            });
        }
    }

    let mut by_hue = chromatic.to_vec();
    by_hue.sort_by_key(|&i| contexts.get(i).hsv.hue);
    let hues: Vec<f64> = by_hue
        .iter()
        .map(|&i| contexts.get(i).hsv.hue as f64)
        .collect();

    let cuts = feasible_cuts(&by_hue, &hues, |cluster| contexts.center_count(cluster));
    let Some(best) = best_cut(&cuts) else {
        warn!("no feasible hue split among {} candidates", FACELETS_PER_FACE);
        return Err(ClassificationError::NoFeasiblePartition {
            samples: contexts.samples(&by_hue),
        });
    };
    info!(
        "hue ring cut at {} (score {:.3}, {} feasible cuts)",
        best.rotation,
        best.score,
        cuts.len()
    );

    for cluster in rotate_left(&by_hue, best.rotation).chunks(FACELETS_PER_FACE) {
        if contexts.assign_cluster(cluster).is_none() {
            return Err(ClassificationError::NoFeasiblePartition {
                samples: contexts.samples(cluster),
            });
        }
    }

    contexts.freeze()
}

/// Evaluate each cut `0..9` of the hue-sorted ring.
///
/// `center_count` reports how many centers a cluster of sample indices
/// holds. Only cuts with exactly one center per cluster are returned, in
/// ascending rotation order.
pub(crate) fn feasible_cuts(
    sorted_indices: &[usize],
    sorted_hues: &[f64],
    center_count: impl Fn(&[usize]) -> usize,
) -> Vec<HueCut> {
    let mut cuts = Vec::new();
    for rotation in 0..FACELETS_PER_FACE.min(sorted_indices.len()) {
        let rotated = rotate_left(sorted_indices, rotation);
        if !rotated
            .chunks(FACELETS_PER_FACE)
            .all(|cluster| center_count(cluster) == 1)
        {
            debug!("hue cut {} rejected: clusters do not hold one center each", rotation);
            continue;
        }
        let score = unwrap_hues(sorted_hues, rotation)
            .chunks(FACELETS_PER_FACE)
            .map(std_dev)
            .product();
        debug!("hue cut {} score {:.3}", rotation, score);
        cuts.push(HueCut { rotation, score });
    }
    cuts
}

/// The cut with the smallest score; the earliest one on ties.
pub(crate) fn best_cut(cuts: &[HueCut]) -> Option<HueCut> {
    cuts.iter().fold(None, |best: Option<HueCut>, &cut| match best {
        Some(b) if b.score <= cut.score => Some(b),
        _ => Some(cut),
    })
}

fn rotate_left<T: Copy>(items: &[T], n: usize) -> Vec<T> {
    items[n..].iter().chain(&items[..n]).copied().collect()
}

/// Rotate hues left by `n`, lifting the wrapped ones by a full turn so the
/// ring stays monotone.
fn unwrap_hues(hues: &[f64], n: usize) -> Vec<f64> {
    hues[n..]
        .iter()
        .copied()
        .chain(hues[..n].iter().map(|h| h + HSV_RANGE))
        .collect()
}

/// Population standard deviation; zero for an empty slice.
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[4.0, 4.0, 4.0]), 0.0);
        assert_eq!(std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
    }

    #[test]
    fn test_rotate_left() {
        assert_eq!(rotate_left(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate_left(&[1, 2, 3, 4], 0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unwrap_hues() {
        assert_eq!(
            unwrap_hues(&[1.0, 5.0, 250.0], 1),
            vec![5.0, 250.0, 257.0]
        );
    }

    #[test]
    fn test_best_cut_prefers_earliest_on_tie() {
        let cuts = [
            HueCut { rotation: 1, score: 3.0 },
            HueCut { rotation: 3, score: 1.0 },
            HueCut { rotation: 5, score: 1.0 },
        ];
        assert_eq!(best_cut(&cuts).map(|c| c.rotation), Some(3));
        assert_eq!(best_cut(&[]), None);
    }

    #[test]
    fn test_feasible_cuts_require_one_center_per_cluster() {
        // 18 samples, two clusters; centers at 0 and 17 only fit cut 0.
        let indices: Vec<usize> = (0..18).collect();
        let hues: Vec<f64> = (0..18).map(|i| if i < 9 { 10.0 } else { 100.0 }).collect();
        let centers = [0usize, 17];
        let cuts = feasible_cuts(&indices, &hues, |cluster| {
            cluster.iter().filter(|i| centers.contains(i)).count()
        });
        assert_eq!(cuts.len(), 1);
        assert_eq!(cuts[0].rotation, 0);
        assert_eq!(cuts[0].score, 0.0);
    }

    #[test]
    fn test_wrapped_cluster_scores_tight() {
        // Reds straddle hue 0; cutting after the two low reds keeps them
        // together with the high reds.
        let hues = [
            1.0, 2.0, 36.0, 37.0, 38.0, 39.0, 40.0, 41.0, 42.0, 43.0, 44.0, 253.0, 254.0, 254.0,
            254.0, 254.0, 254.0, 255.0,
        ];
        let indices: Vec<usize> = (0..hues.len()).collect();
        let centers = [0usize, 5];
        let cuts = feasible_cuts(&indices, &hues, |cluster| {
            cluster.iter().filter(|i| centers.contains(i)).count()
        });
        let rotations: Vec<usize> = cuts.iter().map(|c| c.rotation).collect();
        assert_eq!(rotations, vec![1, 2, 3, 4, 5]);
        assert_eq!(best_cut(&cuts).map(|c| c.rotation), Some(2));
    }
}
