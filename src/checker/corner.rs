// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corner twist.
//!
//! A corner's twist is read off the direction in which its top or down
//! facelet currently points. Each of the eight corner shapes lists its three
//! directions clockwise starting from the vertical one, so the vertical
//! direction scores 0 and the other two score 1 and 2.

use crate::errors::InvariantError;
use crate::geometry::{subcube_id, FaceName, SubcubeFacelets};
use log::trace;

use FaceName::{Back, Down, Front, Left, Right, Top};

/// Twist score of each direction, one entry per corner shape.
pub const CORNER_ROTATIONS: [[(FaceName, u8); 3]; 8] = [
    [(Top, 0), (Left, 1), (Back, 2)],
    [(Top, 0), (Back, 1), (Right, 2)],
    [(Top, 0), (Front, 1), (Left, 2)],
    [(Top, 0), (Right, 1), (Front, 2)],
    [(Down, 0), (Back, 1), (Left, 2)],
    [(Down, 0), (Right, 1), (Back, 2)],
    [(Down, 0), (Left, 1), (Front, 2)],
    [(Down, 0), (Front, 1), (Right, 2)],
];

/// Twist of one corner: 0, 1 or 2.
pub fn corner_rotation(facelets: &SubcubeFacelets) -> Result<u8, InvariantError> {
    let basis = facelets
        .iter()
        .find(|(_, label)| label.is_vertical())
        .map(|(direction, _)| direction)
        .ok_or(InvariantError::CornerBasisNotFound {
            facelets: *facelets,
        })?;

    let id = facelets.key_id();
    let entry = CORNER_ROTATIONS
        .iter()
        .find(|entry| subcube_id(entry.iter().map(|&(direction, _)| direction)) == id)
        .ok_or(InvariantError::UnknownCorner {
            facelets: *facelets,
        })?;

    let rotation = entry
        .iter()
        .find(|&&(direction, _)| direction == basis)
        .map(|&(_, rotation)| rotation)
        .ok_or(InvariantError::InvalidBasisDirection {
            facelets: *facelets,
            basis,
        })?;
    trace!("corner {} twist {}", facelets, rotation);
    Ok(rotation)
}
