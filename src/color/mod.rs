// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sampled colors and their hue/saturation view.
//!
//! A [`Color`] is the average of a small image region, so its channels are
//! real numbers on the 0..255 scale. Classification works on [`Hsv`], which
//! separates color family (hue) from how washed out it is (saturation) and
//! from shading (value).

pub mod hsv;
pub mod palette;

pub use hsv::Hsv;
pub use palette::{paint, standard_palette};

use serde::{Deserialize, Serialize};

/// An averaged RGB sample, channels on the 0..255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels saturated to 8 bits, as an image buffer would store them.
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.round().clamp(0.0, 255.0) as u8)
    }

    pub fn to_hsv(self) -> Hsv {
        Hsv::from_rgb8(self.to_rgb8())
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Color) -> f64 {
        let (dr, dg, db) = (self.r - other.r, self.g - other.g, self.b - other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Same hue, scaled brightness (`factor` in `0.0..=1.0` darkens).
    pub fn shaded(self, factor: f64) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }
}
