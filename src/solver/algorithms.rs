//! Last-layer algorithm sets, in face-turn notation.
//!
//! Every sequence here keeps the first two layers intact. Recognition tables
//! are derived from these sequences at first use, so each entry is matched
//! by exactly the pattern it solves.

use crate::moves::{parse_sequence, Move};

/// The 57 orientation cases.
pub(crate) const OLL_ALGORITHMS: [(&str, &str); 57] = [
    ("OLL 1", "R U2 R2 F R F' U2 R' F R F'"),
    ("OLL 2", "F R U R' U' F' B U L U' L' B'"),
    ("OLL 3", "B U L U' L' B' U' F R U R' U' F'"),
    ("OLL 4", "B U L U' L' B' U F R U R' U' F'"),
    ("OLL 5", "L' B2 R B R' B L"),
    ("OLL 6", "L F2 R' F' R F' L'"),
    ("OLL 7", "L F R' F R F2 L'"),
    ("OLL 8", "R' F' L F' L' F2 R"),
    ("OLL 9", "R U R' U' R' F R2 U R' U' F'"),
    ("OLL 10", "R U R' U R' F R F' R U2 R'"),
    ("OLL 11", "L F R' F R' D R D' R F2 L'"),
    ("OLL 12", "R2 L F' R F' R' F2 R F' R L'"),
    ("OLL 13", "F U R U' R2 F' R U R U' R'"),
    ("OLL 14", "R' F R U R' F' R F U' F'"),
    ("OLL 15", "L' B' R' L U' R U L' B L"),
    ("OLL 16", "L F R L' U R' U' L F' L'"),
    ("OLL 17", "F R' F' R2 L' B R B' R' B' R' L"),
    ("OLL 18", "L F R' F R F2 L2 B' R B' R' B2 L"),
    ("OLL 19", "R L' B R B R' B' R2 L F R F'"),
    ("OLL 20", "L F R' F' R2 L2 B R B' R' B' R' L"),
    ("OLL 21", "R U2 R' U' R U R' U' R U' R'"),
    ("OLL 22", "R U2 R2 U' R2 U' R2 U2 R"),
    ("OLL 23", "R2 D' R U2 R' D R U2 R"),
    ("OLL 24", "L F R' F' L' F R F'"),
    ("OLL 25", "F' L F R' F' L' F R"),
    ("OLL 26", "R U2 R' U' R U' R'"),
    ("OLL 27", "R U R' U R U2 R'"),
    ("OLL 28", "L F R' F' R L' U R U' R'"),
    ("OLL 29", "R U R' U' R U' R' F' U' F R U R'"),
    ("OLL 30", "F R' F R2 U' R' U' R U R' F2"),
    ("OLL 31", "R' U' F U R U' R' F' R"),
    ("OLL 32", "L U F' U' L' U L F L'"),
    ("OLL 33", "R U R' U' R' F R F'"),
    ("OLL 34", "R U R2 U' R' F R U R U' F'"),
    ("OLL 35", "R U2 R2 F R F' R U2 R'"),
    ("OLL 36", "L' U' L U' L' U L U L F' L' F"),
    ("OLL 37", "F R' F' R U R U' R'"),
    ("OLL 38", "R U R' U R U' R' U' R' F R F'"),
    ("OLL 39", "L F' L' U' L U F U' L'"),
    ("OLL 40", "R' F R U R' U' F' U R"),
    ("OLL 41", "R U R' U R U2 R' F R U R' U' F'"),
    ("OLL 42", "R' U' R U' R' U2 R F R U R' U' F'"),
    ("OLL 43", "F' U' L' U L F"),
    ("OLL 44", "F U R U' R' F'"),
    ("OLL 45", "F R U R' U' F'"),
    ("OLL 46", "R' U' R' F R F' U R"),
    ("OLL 47", "R' U' R' F R F' R' F R F' U R"),
    ("OLL 48", "F R U R' U' R U R' U' F'"),
    ("OLL 49", "L F' L2 B L2 F L2 B' L"),
    ("OLL 50", "L' B L2 F' L2 B' L2 F L'"),
    ("OLL 51", "F U R U' R' U R U' R' F'"),
    ("OLL 52", "R U R' U R U' B U' B' R'"),
    ("OLL 53", "R' F2 L F L' F' L F L' F R"),
    ("OLL 54", "L F2 R' F' R F R' F' R F' L'"),
    ("OLL 55", "R' F R U R U' R2 F' R2 U' R' U R U R'"),
    ("OLL 56", "L' B' L U' R' U R U' R' U R L' B L"),
    ("OLL 57", "R U R' U' R' L F R F' L'"),
];

/// The 21 permutation cases.
pub(crate) const PLL_ALGORITHMS: [(&str, &str); 21] = [
    ("Aa", "R' F R' B2 R F' R' B2 R2"),
    ("Ab", "R2 B2 R F R' B2 R F' R"),
    ("E", "R B' R' F R B R' F' R B R' F R B' R' F'"),
    ("F", "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R"),
    ("Ga", "R2 U R' U R' U' R U' R2 U' D R' U R D'"),
    ("Gb", "R' U' R U D' R2 U R' U R U' R U' R2 D"),
    ("Gc", "R2 U' R U' R U R' U R2 U D' R U' R' D"),
    ("Gd", "R U R' U' D R2 U' R U' R' U R' U R2 D'"),
    ("H", "R2 L2 D R2 L2 U2 R2 L2 D R2 L2"),
    ("Ja", "L' U' L F L' U' L U L F' L2 U L"),
    ("Jb", "R U R' F' R U R' U' R' F R2 U' R'"),
    ("Na", "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'"),
    ("Nb", "R' U R U' R' F' U' F R U R' F R' F' R U' R"),
    ("Ra", "R U' R' U' R U R D R' U' R D' R' U2 R'"),
    ("Rb", "R2 F R U R U' R' F' R U2 R' U2 R"),
    ("T", "R U R' U' R' F R2 U' R' U' R U R' F'"),
    ("Ua", "R2 L2 D R L' F2 R' L D R2 L2"),
    ("Ub", "R2 L2 D' R L' F2 R' L D' R2 L2"),
    ("V", "R' U R' U' B' R' B2 U' B' U B' R B R"),
    ("Y", "F R U' R' U' R U R' F' R U R' U' R' F R F'"),
    ("Z", "R' L F R2 L2 B R2 L2 F R' L D2 R2 L2"),
];

/// Used when no orientation case matches.
pub(crate) const OLL_FALLBACK: &str = "R U R' U R U2 R'";

/// Used when no permutation case matches.
pub(crate) const PLL_FALLBACK: &str = "R U R' U' R' F R2 U' R' U' R U R' F'";

/// Parses an algorithm set, dropping (and logging) any entry that fails.
pub(crate) fn parse_set(set: &[(&'static str, &str)]) -> Vec<(&'static str, Vec<Move>)> {
    set.iter()
        .filter_map(|&(name, sequence)| match parse_sequence(sequence) {
            Ok(moves) => Some((name, moves)),
            Err(e) => {
                log::error!("Skipping algorithm {name}: {e}");
                None
            }
        })
        .collect()
}

/// Parses a fixed fallback sequence.
pub(crate) fn fallback(sequence: &str) -> Vec<Move> {
    parse_sequence(sequence).unwrap_or_default()
}
