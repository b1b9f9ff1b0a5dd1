//! The 21 Blokus pieces and the set of pieces a player still holds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Number of pieces each player owns.
pub const NUM_PIECES: usize = 21;

/// Piece identifier, as used in the first character of a move token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceId {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
    S = 18,
    T = 19,
    U = 20,
}

impl PieceId {
    /// Search order: `U` first, down to `A`.
    pub const ALPHABET: [PieceId; NUM_PIECES] = [
        PieceId::U,
        PieceId::T,
        PieceId::S,
        PieceId::R,
        PieceId::Q,
        PieceId::P,
        PieceId::O,
        PieceId::N,
        PieceId::M,
        PieceId::L,
        PieceId::K,
        PieceId::J,
        PieceId::I,
        PieceId::H,
        PieceId::G,
        PieceId::F,
        PieceId::E,
        PieceId::D,
        PieceId::C,
        PieceId::B,
        PieceId::A,
    ];

    /// Index into the catalog (`A` = 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert from catalog index (0-20) to PieceId.
    #[inline]
    pub fn from_index(idx: usize) -> Option<PieceId> {
        // ALPHABET is reversed catalog order
        NUM_PIECES
            .checked_sub(idx + 1)
            .map(|pos| PieceId::ALPHABET[pos])
    }

    /// Parse the wire character (`'A'`-`'U'`).
    #[inline]
    pub fn from_char(c: char) -> Option<PieceId> {
        if c.is_ascii_uppercase() {
            PieceId::from_index((c as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// The wire character for this piece.
    #[inline]
    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Canonical (unrotated, unflipped) pattern.
    #[inline]
    pub fn pattern(self) -> Pattern {
        CATALOG[self.index()]
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Canonical patterns, indexed by `PieceId::index`.
const CATALOG: [Pattern; NUM_PIECES] = [
    // A: monomino
    Pattern::parse(&["#"]),
    // B: domino
    Pattern::parse(&["##"]),
    // C: I-tromino
    Pattern::parse(&["###"]),
    // D: V-tromino
    Pattern::parse(&["#.", "##"]),
    // E: I-tetromino
    Pattern::parse(&["####"]),
    // F: L-tetromino
    Pattern::parse(&["..#", "###"]),
    // G: T-tetromino
    Pattern::parse(&[".#.", "###"]),
    // H: O-tetromino
    Pattern::parse(&["##", "##"]),
    // I: Z-tetromino
    Pattern::parse(&["##.", ".##"]),
    // J: I-pentomino
    Pattern::parse(&["#####"]),
    // K: L-pentomino
    Pattern::parse(&["...#", "####"]),
    // L: N-pentomino
    Pattern::parse(&["..##", "###."]),
    // M: P-pentomino
    Pattern::parse(&["##", "##", "#."]),
    // N: T-pentomino
    Pattern::parse(&["###", ".#.", ".#."]),
    // O: U-pentomino
    Pattern::parse(&["#.#", "###"]),
    // P: V-pentomino
    Pattern::parse(&["#..", "#..", "###"]),
    // Q: W-pentomino
    Pattern::parse(&["#..", "##.", ".##"]),
    // R: Z-pentomino
    Pattern::parse(&["##.", ".#.", ".##"]),
    // S: F-pentomino
    Pattern::parse(&[".##", "##.", ".#."]),
    // T: Y-pentomino
    Pattern::parse(&["..#.", "####"]),
    // U: X-pentomino
    Pattern::parse(&[".#.", "###", ".#."]),
];

/// Set of pieces, one bit per `PieceId::index`.
///
/// Iteration follows `PieceId::ALPHABET`, which is also the search order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PieceSet(u32);

impl PieceSet {
    const MASK: u32 = (1 << NUM_PIECES) - 1;

    /// No pieces.
    pub const EMPTY: PieceSet = PieceSet(0);

    /// Every piece in the catalog.
    #[inline]
    pub const fn full() -> PieceSet {
        PieceSet(Self::MASK)
    }

    #[inline]
    pub const fn contains(self, piece: PieceId) -> bool {
        self.0 & (1 << piece.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, piece: PieceId) {
        self.0 |= 1 << piece.index();
    }

    /// Remove a piece. Returns false if it was not in the set.
    #[inline]
    pub fn remove(&mut self, piece: PieceId) -> bool {
        let present = self.contains(piece);
        self.0 &= !(1 << piece.index());
        present
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Pieces in search order.
    pub fn iter(self) -> impl Iterator<Item = PieceId> {
        PieceId::ALPHABET.into_iter().filter(move |&p| self.contains(p))
    }
}

impl FromIterator<PieceId> for PieceSet {
    fn from_iter<I: IntoIterator<Item = PieceId>>(iter: I) -> Self {
        let mut set = PieceSet::EMPTY;
        for piece in iter {
            set.insert(piece);
        }
        set
    }
}

impl fmt::Debug for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceSet(")?;
        for piece in self.iter() {
            write!(f, "{}", piece)?;
        }
        write!(f, ")")
    }
}
