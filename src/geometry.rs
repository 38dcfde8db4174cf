//! Sticker geometry of the 3x3x3 cube.
//!
//! Every facelet is described by the cubie it sits on (integer coordinates in
//! `-1..=1` per axis) and the outward normal of the face it shows. A face turn
//! is then just a rotation of both vectors about the face normal, which is how
//! the move tables are derived without hand-written cycles.
//!
//! Axes: `+x` points to R, `+y` to U and `+z` to F.

use crate::state::Face;

/// A 3D integer vector: either a cubie position or a face normal.
pub type Coord = (i32, i32, i32);

/// Outward unit normal of a face.
pub const fn face_normal(face: Face) -> Coord {
    match face {
        Face::Up => (0, 1, 0),
        Face::Right => (1, 0, 0),
        Face::Front => (0, 0, 1),
        Face::Down => (0, -1, 0),
        Face::Left => (-1, 0, 0),
        Face::Back => (0, 0, -1),
    }
}

/// Face whose outward normal is `normal`.
const fn face_from_normal(normal: Coord) -> Face {
    match normal {
        (0, 1, 0) => Face::Up,
        (1, 0, 0) => Face::Right,
        (0, 0, 1) => Face::Front,
        (0, -1, 0) => Face::Down,
        (-1, 0, 0) => Face::Left,
        _ => Face::Back,
    }
}

/// Cubie position of the facelet at `(row, col)` on `face`.
///
/// Rows and columns follow the net orientation: U is seen from above with B at
/// the top edge, D from below with F at the top edge, and the four side faces
/// from outside with U at the top edge.
pub const fn sticker_position(face: Face, row: i32, col: i32) -> Coord {
    match face {
        Face::Up => (col - 1, 1, row - 1),
        Face::Right => (1, 1 - row, 1 - col),
        Face::Front => (col - 1, 1 - row, 1),
        Face::Down => (col - 1, -1, 1 - row),
        Face::Left => (-1, 1 - row, col - 1),
        Face::Back => (1 - col, 1 - row, -1),
    }
}

/// Inverse of [`sticker_position`]: the facelet index showing `normal` on the
/// cubie at `position`.
pub const fn sticker_index(position: Coord, normal: Coord) -> usize {
    let face = face_from_normal(normal);
    let (x, y, z) = position;
    let (row, col) = match face {
        Face::Up => (z + 1, x + 1),
        Face::Right => (1 - y, 1 - z),
        Face::Front => (1 - y, x + 1),
        Face::Down => (1 - z, x + 1),
        Face::Left => (1 - y, z + 1),
        Face::Back => (1 - y, 1 - x),
    };
    face.index() * 9 + (row * 3 + col) as usize
}

/// Cubie position and outward normal of a facelet index.
pub const fn sticker(index: usize) -> (Coord, Coord) {
    let face = Face::from_index(index / 9);
    let position = sticker_position(face, (index % 9 / 3) as i32, (index % 3) as i32);
    (position, face_normal(face))
}

#[inline(always)]
pub const fn dot(a: Coord, b: Coord) -> i32 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

const fn cross(a: Coord, b: Coord) -> Coord {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// Rotates `v` a quarter turn clockwise as seen from outside the face whose
/// normal is `axis`.
///
/// Clockwise from outside is -90 degrees by the right-hand rule, which for a
/// unit axis reduces to `axis * (axis . v) - axis x v`.
pub const fn quarter_turn(axis: Coord, v: Coord) -> Coord {
    let along = dot(axis, v);
    let c = cross(axis, v);
    (
        axis.0 * along - c.0,
        axis.1 * along - c.1,
        axis.2 * along - c.2,
    )
}

/// Returns true if the facelet sits on the U layer.
#[inline]
pub const fn in_top_layer(index: usize) -> bool {
    let (position, _) = sticker(index);
    position.1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_index_inverts_position() {
        for index in 0..54 {
            let (position, normal) = sticker(index);
            assert_eq!(
                sticker_index(position, normal),
                index,
                "Roundtrip failed for facelet {index}"
            );
        }
    }

    #[test]
    fn test_stickers_lie_on_their_face() {
        for index in 0..54 {
            let (position, normal) = sticker(index);
            assert_eq!(dot(position, normal), 1, "Facelet {index} is off its face");
        }
    }

    #[test]
    fn test_quarter_turn_about_up_sends_front_to_left() {
        assert_eq!(quarter_turn((0, 1, 0), (0, 0, 1)), (-1, 0, 0));
    }

    #[test]
    fn test_quarter_turn_about_right_sends_front_up() {
        assert_eq!(quarter_turn((1, 0, 0), (0, 0, 1)), (0, 1, 0));
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let v = (1, -1, 1);
        for face in Face::ALL {
            let axis = face_normal(face);
            let mut w = v;
            for _ in 0..4 {
                w = quarter_turn(axis, w);
            }
            assert_eq!(w, v, "Four turns about {face:?} should be identity");
        }
    }

    #[test]
    fn test_layers() {
        // U face and the top rows of the side faces
        assert!(in_top_layer(0));
        assert!(in_top_layer(9));
        assert!(!in_top_layer(12));
        assert!(!in_top_layer(27));
    }
}
