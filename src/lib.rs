//! 3x3x3 cube facelet engine.
//!
//! Represents a cube as 54 sticker labels, turns faces by rotating each
//! sticker's position and normal in 3D, and turns scramble notation into the
//! facelet string a two-phase solver consumes.

pub mod facelet;
pub mod geometry;
pub mod layer;
pub mod moves;
pub mod net;
pub mod scramble;
pub mod tables;
pub mod validate;

pub use facelet::{Face, FaceletKey, FaceletState, StateError, SOLVED};
pub use moves::{apply_scramble, Move, MoveError, Turn};
pub use tables::{FaceletTables, TableError};
pub use validate::{validate_state, ValidationError};

/// The solved cube in facelet-string order.
pub fn solved_state() -> FaceletState {
    SOLVED
}
