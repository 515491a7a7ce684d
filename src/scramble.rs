//! Random scramble generation.
//!
//! Each token picks a face uniformly among the five that differ from the
//! previous token's face, and a modifier uniformly among the three. No other
//! competition rules are applied (opposite-face runs such as `R L R` are
//! allowed).

use rand::Rng;

use crate::facelet::Face;
use crate::moves::{format_moves, Move, Turn};

/// Scramble length used when none is given.
pub const DEFAULT_LENGTH: usize = 20;

/// Draws `length` moves from `rng`, never turning the same face twice in a row.
pub fn random_scramble<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(length);

    for _ in 0..length {
        let previous = moves.last().map(|mv| mv.face);
        let face = loop {
            let candidate = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            if Some(candidate) != previous {
                break candidate;
            }
        };
        let turn = Turn::ALL[rng.gen_range(0..Turn::ALL.len())];
        moves.push(Move::new(face, turn));
    }

    moves
}

/// A fresh scramble from the thread-local generator, formatted as text.
pub fn generate_scramble(length: usize) -> String {
    format_moves(&random_scramble(&mut rand::thread_rng(), length))
}
