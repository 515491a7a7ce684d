//! Faces, geometric keys and facelet states.
//!
//! A state is 54 single-byte labels in face-major order (U, R, F, D, L, B),
//! each face read row by row from its top-left sticker. This is the layout
//! two-phase solvers expect, so it is fixed rather than chosen here.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::Coord;

/// Number of stickers on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Stickers per face.
pub const FACE_SIZE: usize = 9;

/// One of the six outer faces, in facelet-string order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// All faces in facelet-string order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face in facelet-string order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Outward unit normal.
    pub const fn normal(self) -> Coord {
        match self {
            Face::U => (0, 1, 0),
            Face::R => (1, 0, 0),
            Face::F => (0, 0, 1),
            Face::D => (0, -1, 0),
            Face::L => (-1, 0, 0),
            Face::B => (0, 0, -1),
        }
    }

    /// Range of slot indices holding this face's own nine stickers.
    pub const fn slots(self) -> std::ops::Range<usize> {
        let start = self.index() * FACE_SIZE;
        start..start + FACE_SIZE
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// Geometric identity of a sticker: the centre of its cubelet plus the
/// outward normal of the side it is stuck on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceletKey {
    pub position: Coord,
    pub normal: Coord,
}

impl FaceletKey {
    pub const fn new(position: Coord, normal: Coord) -> Self {
        Self { position, normal }
    }

    /// Applies the same rotation to both vectors.
    #[inline]
    pub fn rotated(self, rotate: fn(Coord) -> Coord) -> Self {
        Self {
            position: rotate(self.position),
            normal: rotate(self.normal),
        }
    }
}

/// Errors from parsing a facelet string into a [`FaceletState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("state must be exactly 54 characters (found {0})")]
    WrongLength(usize),
    #[error("state labels must be ASCII (found {0:?})")]
    NonAscii(char),
}

/// The labels on all 54 stickers, indexed by slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceletState([u8; FACELET_COUNT]);

/// The solved cube: every slot carries its own face letter.
pub const SOLVED: FaceletState = FaceletState::solved();

impl FaceletState {
    pub const fn solved() -> Self {
        let mut labels = [0u8; FACELET_COUNT];
        let mut slot = 0;
        while slot < FACELET_COUNT {
            labels[slot] = Face::ALL[slot / FACE_SIZE].letter() as u8;
            slot += 1;
        }
        Self(labels)
    }

    #[inline]
    pub const fn from_labels(labels: [u8; FACELET_COUNT]) -> Self {
        Self(labels)
    }

    #[inline]
    pub const fn labels(&self) -> &[u8; FACELET_COUNT] {
        &self.0
    }

    /// Label at `slot` as a character.
    #[inline]
    pub fn label(&self, slot: usize) -> char {
        char::from(self.0[slot])
    }

    /// The nine labels on `face`, row-major.
    pub fn face(&self, face: Face) -> &[u8] {
        &self.0[face.slots()]
    }

    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        SOLVED
    }
}

impl FromStr for FaceletState {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().find(|c| !c.is_ascii()) {
            return Err(StateError::NonAscii(c));
        }
        let labels: [u8; FACELET_COUNT] = s
            .as_bytes()
            .try_into()
            .map_err(|_| StateError::WrongLength(s.len()))?;
        Ok(Self(labels))
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &label in &self.0 {
            f.write_char(char::from(label))?;
        }
        Ok(())
    }
}

impl fmt::Debug for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceletState({self})")
    }
}
