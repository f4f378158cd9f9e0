// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge flip.
//!
//! Each edge has a primary facelet: the one showing top or down, or failing
//! that front or back. Each edge position has a reference direction: the
//! first of top, down, front, back it touches. The edge is unflipped (0)
//! when its primary facelet faces the reference direction, flipped (1)
//! otherwise.

use crate::errors::InvariantError;
use crate::geometry::{FaceName, SubcubeFacelets};
use log::trace;

use FaceName::{Back, Down, Front, Top};

/// Reference directions, in priority order.
pub const EDGE_REFERENCE_PRIORITY: [FaceName; 4] = [Top, Down, Front, Back];

/// Flip of one edge: 0 or 1.
pub fn edge_rotation(facelets: &SubcubeFacelets) -> Result<u8, InvariantError> {
    let count = facelets.len();
    if count != 2 {
        return Err(InvariantError::WrongEdgeFaceletCount {
            facelets: *facelets,
            count,
        });
    }

    let basis = facelets
        .iter()
        .find(|(_, label)| matches!(label, Top | Down))
        .or_else(|| facelets.iter().find(|(_, label)| matches!(label, Front | Back)))
        .map(|(direction, _)| direction)
        .ok_or(InvariantError::EdgeBasisNotFound {
            facelets: *facelets,
        })?;

    let reference = EDGE_REFERENCE_PRIORITY
        .into_iter()
        .find(|&direction| facelets.get(direction).is_some())
        .ok_or(InvariantError::UnknownEdge {
            facelets: *facelets,
        })?;

    let rotation = u8::from(basis != reference);
    trace!("edge {} flip {}", facelets, rotation);
    Ok(rotation)
}
