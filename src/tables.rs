//! The slot index <-> geometric key bijection.
//!
//! Built once from fixed geometric rules and never mutated afterwards. The
//! per-face quarter-turn permutations are derived at the same time, so a
//! rotated key with no matching slot is reported during construction and
//! never while applying a move.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::facelet::{Face, FaceletKey, FACELET_COUNT};
use crate::geometry::Coord;
use crate::layer::turn_permutation;

/// Inconsistencies in the geometric tables. Any of these is a bug in the
/// traversal order or rotation bindings, not a property of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("slot {slot} repeats the geometric key {key:?}")]
    DuplicateKey { slot: usize, key: FaceletKey },
    #[error("expected 54 facelet slots but enumerated {0}")]
    WrongSlotCount(usize),
    #[error("turning {face} sends slot {slot} to a key with no slot")]
    MissingDestination { face: Face, slot: usize },
    #[error("turning {face} maps two slots onto slot {slot}")]
    NotAPermutation { face: Face, slot: usize },
}

/// Lookup tables shared by every move application.
#[derive(Clone, Debug)]
pub struct FaceletTables {
    slot_keys: [FaceletKey; FACELET_COUNT],
    key_slots: FxHashMap<FaceletKey, usize>,
    /// `turns[face][slot]` is the slot the label at `slot` moves to.
    turns: [[u8; FACELET_COUNT]; 6],
}

static SHARED: LazyLock<FaceletTables> = LazyLock::new(|| match FaceletTables::build() {
    Ok(tables) => tables,
    Err(e) => panic!("facelet tables are inconsistent: {e}"),
});

/// Cubelet centre of the sticker at `(row, col)` on `face`.
///
/// Rows and columns are read with the face viewed head-on from outside,
/// U and D seen with F at the bottom and top respectively, and the four
/// side faces seen with U on top.
const fn grid_position(face: Face, row: i32, col: i32) -> Coord {
    match face {
        Face::U => (col - 1, 1, row - 1),
        Face::R => (1, 1 - row, 1 - col),
        Face::F => (col - 1, 1 - row, 1),
        Face::D => (col - 1, -1, 1 - row),
        Face::L => (-1, 1 - row, col - 1),
        Face::B => (1 - col, 1 - row, -1),
    }
}

/// Enumerates all keys in slot order.
fn enumerate_keys() -> Vec<FaceletKey> {
    Face::ALL
        .iter()
        .flat_map(|&face| {
            (0..3).flat_map(move |row| {
                (0..3).map(move |col| FaceletKey::new(grid_position(face, row, col), face.normal()))
            })
        })
        .collect()
}

impl FaceletTables {
    /// Builds and checks the tables.
    pub fn build() -> Result<Self, TableError> {
        let keys = enumerate_keys();

        let mut key_slots = FxHashMap::default();
        for (slot, &key) in keys.iter().enumerate() {
            if key_slots.insert(key, slot).is_some() {
                return Err(TableError::DuplicateKey { slot, key });
            }
        }

        let slot_keys: [FaceletKey; FACELET_COUNT] = keys
            .try_into()
            .map_err(|keys: Vec<FaceletKey>| TableError::WrongSlotCount(keys.len()))?;

        let mut turns = [[0u8; FACELET_COUNT]; 6];
        for face in Face::ALL {
            let destinations = turn_permutation(&slot_keys, &key_slots, face)?;
            let mut seen = [false; FACELET_COUNT];
            for &dest in &destinations {
                let dest = dest as usize;
                if seen[dest] {
                    return Err(TableError::NotAPermutation { face, slot: dest });
                }
                seen[dest] = true;
            }
            turns[face.index()] = destinations;
        }

        debug!(slots = FACELET_COUNT, "built facelet tables");

        Ok(Self {
            slot_keys,
            key_slots,
            turns,
        })
    }

    /// Process-wide instance, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the tables fail their construction checks.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    #[inline]
    pub fn key(&self, slot: usize) -> FaceletKey {
        self.slot_keys[slot]
    }

    #[inline]
    pub fn slot(&self, key: &FaceletKey) -> Option<usize> {
        self.key_slots.get(key).copied()
    }

    /// All keys in slot order.
    pub fn keys(&self) -> &[FaceletKey; FACELET_COUNT] {
        &self.slot_keys
    }

    #[inline]
    pub fn turn_permutation(&self, face: Face) -> &[u8; FACELET_COUNT] {
        &self.turns[face.index()]
    }
}
