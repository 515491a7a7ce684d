//! Text rendering of a state as an unfolded cube.
//!
//! U sits above F, D below it, and L F R B run left to right across the
//! middle band, so every face reads the way it does in the facelet string.

use crate::facelet::{Face, FaceletState};

/// Faces across the middle band, left to right.
const BAND: [Face; 4] = [Face::L, Face::F, Face::R, Face::B];

/// Indent that puts U and D above and below F.
const INDENT: &str = "    ";

/// One row of three labels from `face`.
fn face_row(state: &FaceletState, face: Face, row: usize) -> String {
    state.face(face)[row * 3..row * 3 + 3]
        .iter()
        .map(|&label| char::from(label))
        .collect()
}

/// Formats `state` as a nine-line net.
pub fn format_net(state: &FaceletState) -> String {
    let mut output = String::new();

    for row in 0..3 {
        output.push_str(INDENT);
        output.push_str(&face_row(state, Face::U, row));
        output.push('\n');
    }

    for row in 0..3 {
        let band: Vec<String> = BAND.iter().map(|&face| face_row(state, face, row)).collect();
        output.push_str(&band.join(" "));
        output.push('\n');
    }

    for row in 0..3 {
        output.push_str(INDENT);
        output.push_str(&face_row(state, Face::D, row));
        output.push('\n');
    }

    output
}
