//! Edge and corner positions as facelet index tuples.

use crate::state::{Color, CubeState, Face};

const U: u8 = 0;
const R: u8 = 9;
const F: u8 = 18;
const D: u8 = 27;
const L: u8 = 36;
const B: u8 = 45;

/// The 12 edge positions: UR UF UL UB DR DF DL DB FR FL BL BR.
pub(crate) const EDGES: [[u8; 2]; 12] = [
    [U + 5, R + 1],
    [U + 7, F + 1],
    [U + 3, L + 1],
    [U + 1, B + 1],
    [D + 5, R + 7],
    [D + 1, F + 7],
    [D + 3, L + 7],
    [D + 7, B + 7],
    [F + 5, R + 3],
    [F + 3, L + 5],
    [B + 5, L + 3],
    [B + 3, R + 5],
];

/// The 8 corner positions: URF UFL ULB UBR DFR DLF DBL DRB.
pub(crate) const CORNERS: [[u8; 3]; 8] = [
    [U + 8, R, F + 2],
    [U + 6, F, L + 2],
    [U, L, B + 2],
    [U + 2, B, R + 2],
    [D + 2, F + 8, R + 6],
    [D, L + 8, F + 6],
    [D + 6, B + 8, L + 6],
    [D + 8, R + 8, B + 6],
];

/// Facelet of the edge between `on` and `other` that lies on `on`, or `None`
/// if the faces are not adjacent.
pub(crate) fn edge_facelet(on: Face, other: Face) -> Option<usize> {
    EDGES.iter().find_map(|&[a, b]| {
        let (a, b) = (a as usize, b as usize);
        match (Face::of_facelet(a), Face::of_facelet(b)) {
            (fa, fb) if fa == on && fb == other => Some(a),
            (fa, fb) if fa == other && fb == on => Some(b),
            _ => None,
        }
    })
}

/// Locates the edge colored `first`/`second`.
///
/// Returns the facelets showing `first` and `second` respectively.
pub(crate) fn find_edge(state: &CubeState, first: Color, second: Color) -> Option<(usize, usize)> {
    EDGES.iter().find_map(|&[a, b]| {
        let (a, b) = (a as usize, b as usize);
        match (state.facelet(a), state.facelet(b)) {
            (ca, cb) if ca == first && cb == second => Some((a, b)),
            (ca, cb) if ca == second && cb == first => Some((b, a)),
            _ => None,
        }
    })
}

/// Locates the corner showing all of `colors`.
///
/// Returns the facelet showing each color, in the order given.
pub(crate) fn find_corner(state: &CubeState, colors: [Color; 3]) -> Option<[usize; 3]> {
    CORNERS.iter().find_map(|corner| {
        let stickers = corner.map(|i| i as usize);
        let mut found = [0usize; 3];
        for (slot, &color) in found.iter_mut().zip(&colors) {
            *slot = *stickers.iter().find(|&&i| state.facelet(i) == color)?;
        }
        Some(found)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::sticker;
    use crate::state::FACELET_COUNT;

    #[test]
    fn test_piece_stickers_share_a_cubie() {
        for edge in EDGES {
            let positions = edge.map(|i| sticker(i as usize).0);
            assert_eq!(positions[0], positions[1], "Edge {edge:?} spans two cubies");
        }
        for corner in CORNERS {
            let positions = corner.map(|i| sticker(i as usize).0);
            assert!(
                positions.iter().all(|&p| p == positions[0]),
                "Corner {corner:?} spans several cubies"
            );
        }
    }

    #[test]
    fn test_pieces_cover_all_non_centers() {
        let mut seen = [false; FACELET_COUNT];
        for i in EDGES.iter().flatten().chain(CORNERS.iter().flatten()) {
            assert!(!seen[*i as usize], "Facelet {i} listed twice");
            seen[*i as usize] = true;
        }
        for face in Face::ALL {
            assert!(!seen[face.center()]);
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 48);
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(edge_facelet(Face::Down, Face::Front), Some((D + 1) as usize));
        assert_eq!(edge_facelet(Face::Front, Face::Down), Some((F + 7) as usize));
        assert_eq!(edge_facelet(Face::Left, Face::Right), None);
        assert_eq!(edge_facelet(Face::Up, Face::Up), None);
    }

    #[test]
    fn test_find_pieces_on_solved() {
        let state = CubeState::solved();
        let white = state.center_color(Face::Down);
        let green = state.center_color(Face::Front);
        let orange = state.center_color(Face::Right);
        assert_eq!(find_edge(&state, white, green), Some((28, 25)));
        assert_eq!(find_corner(&state, [white, green, orange]), Some([29, 26, 15]));
        assert_eq!(find_edge(&state, white, state.center_color(Face::Up)), None);
    }
}
