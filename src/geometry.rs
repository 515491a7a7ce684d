//! Axis-aligned quarter-turn rotations on integer coordinates.
//!
//! Axes follow the usual cube convention: +X points through the R face,
//! +Y through U and +Z through F. A positive rotation is counter-clockwise
//! when looking from the tip of the axis back toward the origin (right-hand
//! rule), so it is clockwise when viewed from the opposite side.

/// A 3D integer vector. Positions and normals both use this type, with
/// every component in `-1..=1`.
pub type Coord = (i32, i32, i32);

/// +90 degrees about X.
#[inline(always)]
pub const fn rotate_x_pos((x, y, z): Coord) -> Coord {
    (x, -z, y)
}

/// -90 degrees about X.
#[inline(always)]
pub const fn rotate_x_neg((x, y, z): Coord) -> Coord {
    (x, z, -y)
}

/// +90 degrees about Y.
#[inline(always)]
pub const fn rotate_y_pos((x, y, z): Coord) -> Coord {
    (z, y, -x)
}

/// -90 degrees about Y.
#[inline(always)]
pub const fn rotate_y_neg((x, y, z): Coord) -> Coord {
    (-z, y, x)
}

/// +90 degrees about Z.
#[inline(always)]
pub const fn rotate_z_pos((x, y, z): Coord) -> Coord {
    (-y, x, z)
}

/// -90 degrees about Z.
#[inline(always)]
pub const fn rotate_z_neg((x, y, z): Coord) -> Coord {
    (y, -x, z)
}

/// The six primitives, paired so that `ROTATIONS[2 * axis + 1]` undoes
/// `ROTATIONS[2 * axis]`.
pub const ROTATIONS: [fn(Coord) -> Coord; 6] = [
    rotate_x_pos,
    rotate_x_neg,
    rotate_y_pos,
    rotate_y_neg,
    rotate_z_pos,
    rotate_z_neg,
];

/// Returns every vector in `{-1, 0, 1}^3`, including the origin.
pub fn unit_lattice() -> impl Iterator<Item = Coord> {
    (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| (x, y, z))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for (rot, rotate) in ROTATIONS.iter().enumerate() {
            for v in unit_lattice() {
                let turned = rotate(rotate(rotate(rotate(v))));
                assert_eq!(turned, v, "Rotation {rot} applied 4x moved {v:?}");
            }
        }
    }

    #[test]
    fn test_paired_rotations_cancel() {
        for axis in 0..3 {
            let (pos, neg) = (ROTATIONS[2 * axis], ROTATIONS[2 * axis + 1]);
            for v in unit_lattice() {
                assert_eq!(neg(pos(v)), v, "Axis {axis}: -90 did not undo +90 for {v:?}");
                assert_eq!(pos(neg(v)), v, "Axis {axis}: +90 did not undo -90 for {v:?}");
            }
        }
    }

    #[test]
    fn test_rotations_are_permutations_of_lattice() {
        let lattice: Vec<Coord> = unit_lattice().collect();
        assert_eq!(lattice.len(), 27);

        for (rot, rotate) in ROTATIONS.iter().enumerate() {
            let mut image: Vec<Coord> = lattice.iter().map(|&v| rotate(v)).collect();
            image.sort();
            let mut expected = lattice.clone();
            expected.sort();
            assert_eq!(image, expected, "Rotation {rot} is not a permutation");
        }
    }

    #[test]
    fn test_right_hand_rule() {
        // +X about Z lands on +Y, +Y about X lands on +Z, +Z about Y lands on +X
        assert_eq!(rotate_z_pos((1, 0, 0)), (0, 1, 0));
        assert_eq!(rotate_x_pos((0, 1, 0)), (0, 0, 1));
        assert_eq!(rotate_y_pos((0, 0, 1)), (1, 0, 0));
    }

    #[test]
    fn test_rotation_fixes_its_axis() {
        assert_eq!(rotate_x_pos((1, 0, 0)), (1, 0, 0));
        assert_eq!(rotate_y_neg((0, -1, 0)), (0, -1, 0));
        assert_eq!(rotate_z_neg((0, 0, 1)), (0, 0, 1));
    }
}
