// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reference sticker colors, for synthesizing scans.

use crate::color::Color;
use crate::cube::Cube;
use crate::geometry::{FaceGrid, Faces};

/// The usual Western color scheme with green in front and white on top.
pub fn standard_palette() -> Faces<Color> {
    Faces {
        front: Color::new(0.0, 255.0, 0.0),
        right: Color::new(255.0, 0.0, 0.0),
        back: Color::new(0.0, 0.0, 255.0),
        left: Color::new(255.0, 128.0, 0.0),
        top: Color::new(255.0, 255.0, 255.0),
        down: Color::new(255.0, 255.0, 0.0),
    }
}

/// The colors a camera would see on `cube` painted with `palette`.
pub fn paint(cube: &Cube, palette: &Faces<Color>) -> Faces<FaceGrid<Color>> {
    cube.map(|_, grid| grid.map(|&label, _, _| palette[label]))
}
