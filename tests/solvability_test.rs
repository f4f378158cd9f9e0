// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solvability of legal scrambles and of cubes that were reassembled wrongly.

mod common;

use common::{colors_of, labels_at, relabel, scrambled, SCRAMBLE};
use cube_scan::checker::{check_solvability, count_transpositions, ParityPolicy};
use cube_scan::geometry::{is_geometrically_valid, SubcubePosition};
use cube_scan::errors::InvariantError;
use cube_scan::{solved_cube, Cube, ErrorKind, FaceName, Scanner};

use FaceName::{Back, Left, Right, Top};

const SCRAMBLES: [&str; 5] = [
    "",
    "R",
    "R U R' U'",
    "F2 B2 L2 R2 U2 D2",
    SCRAMBLE,
];

fn label(cube: &Cube, direction: FaceName, pos: SubcubePosition) -> FaceName {
    cube.facelet(direction, pos)
        .unwrap_or_else(|| panic!("{} has no {} facelet", pos, direction))
}

/// Twist the top-left-back corner in place.
fn twist_corner(cube: &mut Cube) {
    let pos = SubcubePosition::new(0, 0, 0);
    let (top, left, back) = (label(cube, Top, pos), label(cube, Left, pos), label(cube, Back, pos));
    relabel(cube, pos, &[(Top, back), (Left, top), (Back, left)]);
}

/// Flip the top-back edge in place.
fn flip_edge(cube: &mut Cube) {
    let pos = SubcubePosition::new(1, 0, 0);
    let (top, back) = (label(cube, Top, pos), label(cube, Back, pos));
    relabel(cube, pos, &[(Top, back), (Back, top)]);
}

/// Exchange the top-back and top-left edges.
fn swap_edges(cube: &mut Cube) {
    let a = SubcubePosition::new(1, 0, 0);
    let b = SubcubePosition::new(0, 1, 0);
    let (a_top, a_back) = (label(cube, Top, a), label(cube, Back, a));
    let (b_top, b_left) = (label(cube, Top, b), label(cube, Left, b));
    relabel(cube, a, &[(Top, b_top), (Back, b_left)]);
    relabel(cube, b, &[(Top, a_top), (Left, a_back)]);
}

/// Exchange the top-left-back and top-back-right corners.
fn swap_corners(cube: &mut Cube) {
    let a = SubcubePosition::new(0, 0, 0);
    let b = SubcubePosition::new(2, 0, 0);
    let (a_top, a_left, a_back) = (label(cube, Top, a), label(cube, Left, a), label(cube, Back, a));
    let (b_top, b_back, b_right) = (label(cube, Top, b), label(cube, Back, b), label(cube, Right, b));
    relabel(cube, a, &[(Top, b_top), (Left, b_back), (Back, b_right)]);
    relabel(cube, b, &[(Top, a_top), (Right, a_back), (Back, a_left)]);
}

#[test]
fn test_solved_cube_is_solvable() {
    let verdict = check_solvability(&solved_cube(), ParityPolicy::Combined).unwrap();
    assert!(verdict.is_solvable());
    assert_eq!(verdict.permutation.value, 0);
    assert_eq!(verdict.corner_orientation.value, 0);
    assert_eq!(verdict.edge_orientation.value, 0);
}

#[test]
fn test_legal_scrambles_stay_solvable() {
    for moves in SCRAMBLES {
        let cube = scrambled(moves);
        assert!(is_geometrically_valid(&cube), "{:?}", moves);
        for policy in [ParityPolicy::Combined, ParityPolicy::Separate] {
            let verdict = check_solvability(&cube, policy).unwrap();
            assert!(verdict.is_solvable(), "{:?} ({}):\n{}", moves, policy, verdict);
        }
    }
}

#[test]
fn test_scramble_counts() {
    let cube = scrambled(SCRAMBLE);
    let counts = count_transpositions(&cube).unwrap();
    assert_eq!(counts.corners % 2, counts.edges % 2);
    assert_eq!(counts.combined % 2, 0);
    let verdict = check_solvability(&cube, ParityPolicy::Combined).unwrap();
    assert_eq!(verdict.corner_orientation.value % 3, 0);
    assert_eq!(verdict.edge_orientation.value % 2, 0);
}

#[test]
fn test_twisted_corner() {
    for moves in SCRAMBLES {
        let mut cube = scrambled(moves);
        twist_corner(&mut cube);
        assert!(is_geometrically_valid(&cube));
        let verdict = check_solvability(&cube, ParityPolicy::Combined).unwrap();
        assert!(!verdict.is_solvable());
        assert!(!verdict.corner_orientation.is_satisfied(), "{:?}", moves);
        assert!(verdict.edge_orientation.is_satisfied());
        assert!(verdict.permutation.is_satisfied());
    }
}

#[test]
fn test_flipped_edge() {
    for moves in SCRAMBLES {
        let mut cube = scrambled(moves);
        flip_edge(&mut cube);
        assert!(is_geometrically_valid(&cube));
        let verdict = check_solvability(&cube, ParityPolicy::Combined).unwrap();
        assert!(!verdict.is_solvable());
        assert!(!verdict.edge_orientation.is_satisfied(), "{:?}", moves);
        assert!(verdict.corner_orientation.is_satisfied());
        assert!(verdict.permutation.is_satisfied());
    }
}

#[test]
fn test_swapped_edges() {
    for moves in SCRAMBLES {
        let mut cube = scrambled(moves);
        swap_edges(&mut cube);
        assert!(is_geometrically_valid(&cube));
        for policy in [ParityPolicy::Combined, ParityPolicy::Separate] {
            let verdict = check_solvability(&cube, policy).unwrap();
            assert!(!verdict.permutation.is_satisfied(), "{:?} ({})", moves, policy);
            assert!(verdict.corner_orientation.is_satisfied());
            assert!(verdict.edge_orientation.is_satisfied());
        }
    }
}

#[test]
fn test_swapped_corners() {
    let mut cube = solved_cube();
    swap_corners(&mut cube);
    assert!(is_geometrically_valid(&cube));
    let counts = count_transpositions(&cube).unwrap();
    assert_eq!(counts.corners % 2, 1);
    assert_eq!(counts.edges, 0);
    let verdict = check_solvability(&cube, ParityPolicy::Combined).unwrap();
    assert!(!verdict.permutation.is_satisfied());
    assert!(verdict.corner_orientation.is_satisfied());
}

#[test]
fn test_facelets_swapped_between_corners_change_shape() {
    let mut cube = solved_cube();
    let a = SubcubePosition::new(0, 0, 0);
    let b = SubcubePosition::new(0, 2, 0);
    relabel(&mut cube, a, &[(Top, Left)]);
    relabel(&mut cube, b, &[(Left, Top)]);
    assert_eq!(labels_at(&cube, a), vec![(Back, Back), (Left, Left), (Top, Left)]);
    assert!(!is_geometrically_valid(&cube));
    for policy in [ParityPolicy::Combined, ParityPolicy::Separate] {
        assert!(matches!(
            check_solvability(&cube, policy),
            Err(InvariantError::GeometricallyInvalid { .. })
        ));
    }
}

#[test]
fn test_duplicated_edge_is_rejected_before_counting() {
    // Two left-down edges and no top-left edge: every lookup still succeeds,
    // so only the shape check can catch it.
    let mut cube = solved_cube();
    cube.top[(1, 0)] = FaceName::Down;
    assert!(!is_geometrically_valid(&cube));
    let err = Scanner::default().check(&cube).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Invariant);
    assert_eq!(err, InvariantError::GeometricallyInvalid { cube: Box::new(cube) });
}

#[test]
fn test_twisted_corner_through_the_scanner() {
    let mut cube = scrambled(SCRAMBLE);
    twist_corner(&mut cube);
    let report = Scanner::default().scan_and_check(&colors_of(&cube)).unwrap();
    assert_eq!(report.scan.cube, cube);
    assert!(!report.is_solvable());
    assert!(report.verdict.to_string().starts_with("not solvable\n"));
}
