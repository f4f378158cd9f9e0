// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Where in a camera frame each facelet is sampled.
//!
//! The face is expected inside a centered square covering 90% of the
//! frame's shorter side. That square is divided into a 3×3 grid, and each
//! cell is shrunk toward its middle before sampling so sticker borders and
//! gaps do not bleed into the average.
//!
//! Pixel access itself lives outside this crate, behind [`ColorSampler`].

use crate::color::Color;
use crate::geometry::{FaceGrid, GRID_SIZE};
use serde::Serialize;

/// Fraction of the frame's shorter side covered by the cube square.
pub const CUBE_SQUARE_SIZE_RATIO: f64 = 0.9;

/// Fraction of a cell's width trimmed from each side before sampling.
pub const SUBCUBE_OFFSET_RATIO: f64 = 0.3;

/// Axis-aligned rectangle in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Averages the pixels of a frame region. Supplied by the camera layer.
pub trait ColorSampler {
    fn sample_color(&mut self, region: &Rect) -> Color;
}

impl<F: FnMut(&Rect) -> Color> ColorSampler for F {
    fn sample_color(&mut self, region: &Rect) -> Color {
        self(region)
    }
}

/// The centered square the face should fill.
pub fn cube_square(frame_width: f64, frame_height: f64) -> Rect {
    let size = frame_width.min(frame_height) * CUBE_SQUARE_SIZE_RATIO;
    Rect::new(
        (frame_width - size) / 2.0,
        (frame_height - size) / 2.0,
        size,
        size,
    )
}

/// Shrink `square` by `square.width * ratio` on every side.
pub fn inner_offset(square: &Rect, ratio: f64) -> Rect {
    let offset = square.width * ratio;
    Rect::new(
        square.x + offset,
        square.y + offset,
        square.width - 2.0 * offset,
        square.height - 2.0 * offset,
    )
}

/// Sampling region of cell `(row, col)` of `cube_square`.
pub fn subcube_square(cube_square: &Rect, row: usize, col: usize, ratio: f64) -> Rect {
    let size = cube_square.width / GRID_SIZE as f64;
    let cell = Rect::new(
        cube_square.x + size * col as f64,
        cube_square.y + size * row as f64,
        size,
        size,
    );
    inner_offset(&cell, ratio)
}

/// Sampling regions of all nine cells.
pub fn subcube_square_grid(cube_square: &Rect, ratio: f64) -> FaceGrid<Rect> {
    FaceGrid::from_fn(|row, col| subcube_square(cube_square, row, col, ratio))
}

/// Sample one face from a frame of the given size.
pub fn sample_face(
    sampler: &mut impl ColorSampler,
    frame_width: f64,
    frame_height: f64,
) -> FaceGrid<Color> {
    let square = cube_square(frame_width, frame_height);
    subcube_square_grid(&square, SUBCUBE_OFFSET_RATIO)
        .map(|region, _, _| sampler.sample_color(region))
}
