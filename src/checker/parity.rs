// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation parity by counting adjacent transpositions.

use crate::cube::Cube;
use crate::errors::InvariantError;
use crate::geometry::{subcube_facelets, SubcubeId, SubcubeKind, SubcubePosition};
use serde::Serialize;
use std::cmp::Ordering;

/// Bubble-sort a copy of `items`, counting every adjacent swap.
///
/// The count has the parity of the permutation that sorts `items`.
pub fn sort_and_count_transpositions<T: Clone>(
    items: &[T],
    compare: impl Fn(&T, &T) -> Ordering,
) -> (Vec<T>, usize) {
    let mut sorted = items.to_vec();
    let mut transpositions = 0;
    for end in (1..sorted.len()).rev() {
        for j in 0..end {
            if compare(&sorted[j], &sorted[j + 1]) == Ordering::Greater {
                sorted.swap(j, j + 1);
                transpositions += 1;
            }
        }
    }
    (sorted, transpositions)
}

/// Transposition counts for the subcubes of one cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TranspositionCounts {
    /// Corners and edges interleaved in position order.
    pub combined: usize,
    pub corners: usize,
    pub edges: usize,
}

/// Where each subcube should be and which one is there, position by position.
#[derive(Debug, Default)]
struct SubcubeOrder {
    correct: Vec<SubcubeId>,
    actual: Vec<SubcubeId>,
}

impl SubcubeOrder {
    fn push(&mut self, correct: SubcubeId, actual: SubcubeId) {
        self.correct.push(correct);
        self.actual.push(actual);
    }

    /// Swaps needed to bring `actual` into the order of `correct`.
    fn transpositions(&self) -> Result<usize, InvariantError> {
        let ranks = self
            .actual
            .iter()
            .map(|id| {
                self.correct
                    .iter()
                    .position(|c| c == id)
                    .ok_or(InvariantError::UnknownSubcube { id: *id })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        let (_, transpositions) = sort_and_count_transpositions(&ranks, |a, b| a.cmp(b));
        Ok(transpositions)
    }
}

/// Count transpositions over the 20 corners and edges of `cube`, visiting
/// positions `x`, then `y`, then `z` ascending.
pub fn count_transpositions(cube: &Cube) -> Result<TranspositionCounts, InvariantError> {
    let mut combined = SubcubeOrder::default();
    let mut corners = SubcubeOrder::default();
    let mut edges = SubcubeOrder::default();
    for pos in SubcubePosition::all() {
        let facelets = subcube_facelets(cube, pos);
        let (correct, actual) = (facelets.key_id(), facelets.value_id());
        match pos.kind() {
            SubcubeKind::Corner => corners.push(correct, actual),
            SubcubeKind::Edge => edges.push(correct, actual),
            SubcubeKind::Center | SubcubeKind::Core => continue,
        }
        combined.push(correct, actual);
    }
    Ok(TranspositionCounts {
        combined: combined.transpositions()?,
        corners: corners.transpositions()?,
        edges: edges.transpositions()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::solved_cube;
    use crate::geometry::FaceName;

    fn count(items: &[u32]) -> (Vec<u32>, usize) {
        sort_and_count_transpositions(items, |a, b| a.cmp(b))
    }

    #[test]
    fn test_even_permutations() {
        let (sorted, n) = count(&[2, 1, 4, 3, 5]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(n % 2, 0);
        let (sorted, n) = count(&[5, 4, 3, 2, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(n % 2, 0);
    }

    #[test]
    fn test_odd_permutations() {
        let (sorted, n) = count(&[5, 2, 3, 4, 1]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(n % 2, 1);
        let (sorted, n) = count(&[5, 2, 4, 1, 3]);
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
        assert_eq!(n % 2, 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(count(&[]), (vec![], 0));
    }

    #[test]
    fn test_count_is_inversion_count() {
        assert_eq!(count(&[5, 4, 3, 2, 1]).1, 10);
        assert_eq!(count(&[1, 2, 3]).1, 0);
    }

    #[test]
    fn test_solved_cube_has_no_transpositions() {
        assert_eq!(
            count_transpositions(&solved_cube()).unwrap(),
            TranspositionCounts::default()
        );
    }

    #[test]
    fn test_quarter_turn_is_odd_on_both_kinds() {
        // A quarter turn cycles four corners and four edges.
        let counts = count_transpositions(&solved_cube().turn(FaceName::Right, 1)).unwrap();
        assert_eq!(counts.corners % 2, 1);
        assert_eq!(counts.edges % 2, 1);
        assert_eq!(counts.combined % 2, 0);
    }

    #[test]
    fn test_unknown_subcube() {
        // `{top, down}` is not a subcube of any cube.
        let mut cube = solved_cube();
        cube.front[(0, 1)] = FaceName::Down;
        assert!(matches!(
            count_transpositions(&cube),
            Err(InvariantError::UnknownSubcube { .. })
        ));
    }
}
