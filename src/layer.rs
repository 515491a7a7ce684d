//! Layer selection and single quarter-turn application.
//!
//! Turning a face rotates every sticker whose cubelet sits in that face's
//! slice, which includes the edge rows of the four neighbouring faces.

use rustc_hash::FxHashMap;

use crate::facelet::{Face, FaceletKey, FaceletState, FACELET_COUNT};
use crate::geometry::{
    rotate_x_neg, rotate_x_pos, rotate_y_neg, rotate_y_pos, rotate_z_neg, rotate_z_pos, Coord,
};
use crate::tables::{FaceletTables, TableError};

impl Face {
    /// Whether a cubelet at `position` belongs to this face's layer.
    #[inline]
    pub const fn in_layer(self, (x, y, z): Coord) -> bool {
        match self {
            Face::U => y == 1,
            Face::R => x == 1,
            Face::F => z == 1,
            Face::D => y == -1,
            Face::L => x == -1,
            Face::B => z == -1,
        }
    }

    /// Rotation primitive for one clockwise quarter turn, as seen looking
    /// at the face from outside the cube.
    ///
    /// Clockwise from outside is a negative rotation about the outward
    /// normal, so the faces on the positive half of each axis take the
    /// `_neg` primitive and their opposites the `_pos` one.
    pub const fn clockwise(self) -> fn(Coord) -> Coord {
        match self {
            Face::U => rotate_y_neg,
            Face::R => rotate_x_neg,
            Face::F => rotate_z_neg,
            Face::D => rotate_y_pos,
            Face::L => rotate_x_pos,
            Face::B => rotate_z_pos,
        }
    }
}

/// Derives where each slot's label travels under one clockwise turn of `face`.
///
/// Entry `i` is the destination slot of the label currently at slot `i`.
/// Slots outside the layer map to themselves.
pub(crate) fn turn_permutation(
    slot_keys: &[FaceletKey; FACELET_COUNT],
    key_slots: &FxHashMap<FaceletKey, usize>,
    face: Face,
) -> Result<[u8; FACELET_COUNT], TableError> {
    let rotate = face.clockwise();
    let mut destinations = [0u8; FACELET_COUNT];

    for (slot, key) in slot_keys.iter().enumerate() {
        let dest = if face.in_layer(key.position) {
            *key_slots
                .get(&key.rotated(rotate))
                .ok_or(TableError::MissingDestination { face, slot })?
        } else {
            slot
        };
        destinations[slot] = dest as u8;
    }

    Ok(destinations)
}

/// Applies one clockwise quarter turn of `face` to `state`.
///
/// Every label is written into a fresh state in one pass, so the source is
/// never read after being overwritten.
pub fn apply_quarter_turn(
    tables: &FaceletTables,
    state: &FaceletState,
    face: Face,
) -> FaceletState {
    let source = state.labels();
    let mut labels = *source;

    for (slot, &dest) in tables.turn_permutation(face).iter().enumerate() {
        labels[dest as usize] = source[slot];
    }

    FaceletState::from_labels(labels)
}
