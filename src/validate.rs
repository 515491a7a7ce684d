//! Structural checks on facelet strings.
//!
//! Only symbol counts are checked. A string can pass and still describe a
//! cube no sequence of turns reaches (a twisted corner, a single flipped
//! edge); the solver downstream rejects those.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::facelet::{FACELET_COUNT, FACE_SIZE};

/// Number of distinct labels a valid state uses.
pub const SYMBOL_COUNT: usize = 6;

/// Why a facelet string failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("state must be exactly 54 characters (found {0})")]
    WrongLength(usize),
    #[error("state must use exactly 6 different colors (found {0})")]
    WrongSymbolCount(usize),
    /// Offending symbols with their counts, in order of first appearance.
    #[error("each color must appear exactly 9 times (bad counts: {})", format_counts(.0))]
    UnevenCounts(Vec<(char, usize)>),
}

fn format_counts(counts: &[(char, usize)]) -> String {
    counts
        .iter()
        .map(|(symbol, count)| format!("{symbol}={count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks length, distinct symbols and per-symbol counts, stopping at the
/// first failure.
pub fn validate_state(state: &str) -> Result<(), ValidationError> {
    let length = state.chars().count();
    if length != FACELET_COUNT {
        return Err(ValidationError::WrongLength(length));
    }

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    let mut order = Vec::with_capacity(SYMBOL_COUNT);
    for symbol in state.chars() {
        let count = counts.entry(symbol).or_insert(0);
        if *count == 0 {
            order.push(symbol);
        }
        *count += 1;
    }

    if order.len() != SYMBOL_COUNT {
        return Err(ValidationError::WrongSymbolCount(order.len()));
    }

    let uneven: Vec<(char, usize)> = order
        .into_iter()
        .map(|symbol| (symbol, counts[&symbol]))
        .filter(|&(_, count)| count != FACE_SIZE)
        .collect();
    if !uneven.is_empty() {
        return Err(ValidationError::UnevenCounts(uneven));
    }

    Ok(())
}
