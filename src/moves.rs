//! Move tokens and scramble interpretation.
//!
//! A scramble is a whitespace-separated list of tokens such as `R`, `U'`
//! or `F2`. Every token is applied as one, three or two clockwise quarter
//! turns of its face; there is no separate counter-clockwise primitive.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::facelet::{Face, FaceletState, SOLVED};
use crate::layer::apply_quarter_turn;
use crate::tables::FaceletTables;

/// How far a face is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// No suffix: one clockwise quarter turn.
    Clockwise,
    /// `2`: a half turn.
    Double,
    /// `'`: one counter-clockwise quarter turn.
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

    /// Number of clockwise quarter turns this modifier stands for.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Turn> {
        match suffix {
            "" => Some(Turn::Clockwise),
            "2" => Some(Turn::Double),
            "'" => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// A single face turn, e.g. `R'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }
}

/// Malformed scramble tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face {face:?} in move {token:?} (expected one of U R F D L B)")]
    UnknownFace { token: String, face: char },
    #[error("unknown modifier {modifier:?} in move {token:?} (expected nothing, ' or 2)")]
    UnknownModifier { token: String, modifier: String },
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(MoveError::Empty)?;
        let face = Face::from_letter(letter).ok_or_else(|| MoveError::UnknownFace {
            token: token.to_string(),
            face: letter,
        })?;
        let modifier = chars.as_str();
        let turn = Turn::from_suffix(modifier).ok_or_else(|| MoveError::UnknownModifier {
            token: token.to_string(),
            modifier: modifier.to_string(),
        })?;
        Ok(Self::new(face, turn))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.face.letter())?;
        f.write_str(self.turn.suffix())
    }
}

/// Parses a whole scramble. An empty or all-whitespace string is an empty
/// sequence.
pub fn parse_moves(scramble: &str) -> Result<Vec<Move>, MoveError> {
    scramble.split_whitespace().map(str::parse).collect()
}

/// Formats moves as a space-separated scramble.
pub fn format_moves(moves: &[Move]) -> String {
    let mut output = String::new();
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        let _ = write!(output, "{mv}");
    }
    output
}

/// The sequence that undoes `moves`.
pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Applies one move by composing the clockwise quarter turn.
pub fn apply_move(tables: &FaceletTables, state: &FaceletState, mv: Move) -> FaceletState {
    let mut current = *state;
    for _ in 0..mv.turn.quarter_turns() {
        current = apply_quarter_turn(tables, &current, mv.face);
    }
    current
}

/// Applies moves left to right.
pub fn apply_moves(tables: &FaceletTables, state: &FaceletState, moves: &[Move]) -> FaceletState {
    moves
        .iter()
        .fold(*state, |current, &mv| apply_move(tables, &current, mv))
}

/// Applies a scramble to `start`, or to the solved cube when `start` is
/// `None`.
///
/// The scramble is fully parsed before any turn is made, so a bad token
/// never produces a partially scrambled state.
pub fn apply_scramble(
    scramble: &str,
    start: Option<&FaceletState>,
) -> Result<FaceletState, MoveError> {
    let moves = parse_moves(scramble)?;
    trace!(moves = moves.len(), "applying scramble");
    Ok(apply_moves(
        FaceletTables::shared(),
        start.unwrap_or(&SOLVED),
        &moves,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_state;
    use proptest::prelude::*;

    fn arb_move() -> impl Strategy<Value = Move> {
        (0..Face::ALL.len(), 0..Turn::ALL.len())
            .prop_map(|(face, turn)| Move::new(Face::ALL[face], Turn::ALL[turn]))
    }

    fn arb_moves() -> impl Strategy<Value = Vec<Move>> {
        prop::collection::vec(arb_move(), 0..40)
    }

    fn scrambled(moves: &[Move]) -> FaceletState {
        apply_moves(FaceletTables::shared(), &SOLVED, moves)
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("R".parse::<Move>(), Ok(Move::new(Face::R, Turn::Clockwise)));
        assert_eq!("U'".parse::<Move>(), Ok(Move::new(Face::U, Turn::CounterClockwise)));
        assert_eq!("B2".parse::<Move>(), Ok(Move::new(Face::B, Turn::Double)));
        assert_eq!("".parse::<Move>(), Err(MoveError::Empty));
    }

    #[test]
    fn test_parse_rejects_unknown_face() {
        let err = "X2".parse::<Move>().unwrap_err();
        assert_eq!(
            err,
            MoveError::UnknownFace {
                token: "X2".to_string(),
                face: 'X'
            }
        );
        // lowercase slice notation is not supported
        assert!(matches!("r".parse::<Move>(), Err(MoveError::UnknownFace { face: 'r', .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_modifier() {
        for token in ["R3", "R''", "R2'", "U'2", "Fw"] {
            assert!(
                matches!(token.parse::<Move>(), Err(MoveError::UnknownModifier { .. })),
                "Token {token} should have a bad modifier"
            );
        }
    }

    #[test]
    fn test_parse_moves_splits_on_any_whitespace() {
        let moves = parse_moves("  R U'\tF2\n D ").unwrap();
        assert_eq!(format_moves(&moves), "R U' F2 D");
        assert_eq!(parse_moves("").unwrap(), Vec::new());
        assert_eq!(parse_moves("   ").unwrap(), Vec::new());
    }

    #[test]
    fn test_empty_scramble_is_identity() {
        assert_eq!(apply_scramble("", None).unwrap(), SOLVED);
        let start = apply_scramble("R U", None).unwrap();
        assert_eq!(apply_scramble("", Some(&start)).unwrap(), start);
    }

    #[test]
    fn test_bad_token_reports_error() {
        let err = apply_scramble("R U X F", None).unwrap_err();
        assert!(matches!(err, MoveError::UnknownFace { face: 'X', .. }));
        assert_eq!(
            err.to_string(),
            "unknown face 'X' in move \"X\" (expected one of U R F D L B)"
        );
    }

    #[test]
    fn test_u_turn_keeps_down_face() {
        let state = apply_scramble("U", None).unwrap();
        assert_eq!(state.face(Face::D), SOLVED.face(Face::D));
        assert_eq!(state.face(Face::U), SOLVED.face(Face::U));
        assert_eq!(
            state.to_string(),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );
    }

    #[test]
    fn test_known_sequences() {
        let cases = [
            (
                "R U R' U'",
                "UULUUFUUFRRUBRRURRFFDFFUFFFDDRDDDDDDBLLLLLLLLBRRBBBBBB",
            ),
            (
                "U2 D2 F2 B2 L2 R2",
                "UDUDUDUDURLRLRLRLRFBFBFBFBFDUDUDUDUDLRLRLRLRLBFBFBFBFB",
            ),
            // T permutation swaps two corners and two edges of the top layer
            (
                "F R U' R' U' R U R' F' R U R' U' R' F R F'",
                "UUUUUUUUULRRRRRRRRFFBFFFFFFDDDDDDDDDRBLLLLLLLBLFBBBBBB",
            ),
        ];
        for (scramble, expected) in cases {
            let state = apply_scramble(scramble, None).unwrap();
            assert_eq!(state.to_string(), expected, "Scramble {scramble:?}");
        }
    }

    #[test]
    fn test_order_four_and_inverse_from_solved() {
        for face in Face::ALL {
            let letter = face.letter();
            let four = format!("{letter} {letter} {letter} {letter}");
            assert_eq!(apply_scramble(&four, None).unwrap(), SOLVED, "{face}^4");

            let undo = format!("{letter} {letter}'");
            assert_eq!(apply_scramble(&undo, None).unwrap(), SOLVED, "{face} {face}'");
        }
    }

    #[test]
    fn test_start_state_is_respected() {
        let start = apply_scramble("F", None).unwrap();
        let combined = apply_scramble("F R", None).unwrap();
        assert_eq!(apply_scramble("R", Some(&start)).unwrap(), combined);
    }

    #[test]
    fn test_invert_moves() {
        let moves = parse_moves("R U2 F'").unwrap();
        assert_eq!(format_moves(&invert_moves(&moves)), "F U2 R'");
    }

    proptest! {
        #[test]
        fn prop_scramble_preserves_label_counts(moves in arb_moves()) {
            let state = scrambled(&moves);
            prop_assert!(validate_state(&state.to_string()).is_ok());

            let mut labels = *state.labels();
            labels.sort_unstable();
            let mut solved = *SOLVED.labels();
            solved.sort_unstable();
            prop_assert_eq!(labels, solved);
        }

        #[test]
        fn prop_quarter_turn_has_order_four(moves in arb_moves(), face in 0..6usize) {
            let start = scrambled(&moves);
            let quarter = [Move::new(Face::ALL[face], Turn::Clockwise); 4];
            prop_assert_eq!(apply_moves(FaceletTables::shared(), &start, &quarter), start);
        }

        #[test]
        fn prop_three_clockwise_equal_prime(moves in arb_moves(), face in 0..6usize) {
            let start = scrambled(&moves);
            let face = Face::ALL[face];
            let three = [Move::new(face, Turn::Clockwise); 3];
            let prime = [Move::new(face, Turn::CounterClockwise)];
            let tables = FaceletTables::shared();
            prop_assert_eq!(
                apply_moves(tables, &start, &three),
                apply_moves(tables, &start, &prime)
            );
        }

        #[test]
        fn prop_inverse_sequence_restores_solved(moves in arb_moves()) {
            let state = scrambled(&moves);
            let restored = apply_moves(FaceletTables::shared(), &state, &invert_moves(&moves));
            prop_assert!(restored.is_solved());
        }

        #[test]
        fn prop_formatted_moves_reparse(moves in arb_moves()) {
            let text = format_moves(&moves);
            prop_assert_eq!(parse_moves(&text).unwrap(), moves);
        }
    }
}
