// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! 8-bit full-range HSV.
//!
//! Hue is spread over the whole byte (0..256 stands for 0°..360°) instead of
//! the usual 0..180, so adjacent color families stay well separated.
//! Saturation and value use 0..255.

use crate::geometry::constants::HSV_RANGE;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsv {
    /// Hue, circular: 255 is next to 0.
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv {
    /// Convert an 8-bit RGB triple.
    pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        let (rf, gf, bf) = (r as f64, g as f64, b as f64);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = (max - min) as f64;

        let saturation = if max == 0 {
            0
        } else {
            (255.0 * diff / max as f64).round() as u8
        };

        let degrees = if diff == 0.0 {
            0.0
        } else if max == r {
            60.0 * (gf - bf) / diff
        } else if max == g {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
        // 359.9° rounds up to a full turn, which is hue 0 again.
        let hue = ((degrees * HSV_RANGE / 360.0).round() as u32 % HSV_RANGE as u32) as u8;

        Self {
            hue,
            saturation,
            value: max,
        }
    }
}
