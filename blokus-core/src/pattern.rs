//! Occupancy patterns and their rotation / reflection transforms.
//!
//! A pattern is the filled-cell layout of a piece inside its bounding box.
//! Patterns are `Copy` values; every transform returns a new pattern.
//!
//! ```text
//! Bits 0-24: cell (x, y) of the bounding box is filled when bit (y * 5 + x) is set
//!
//!   .#.        bits 1, 5, 6, 7, 11
//!   ###        width 3, height 3
//!   .#.
//! ```

use std::fmt;

/// Largest bounding-box side of any piece.
pub const MAX_SPAN: usize = 5;

/// Filled-cell layout of a piece in one orientation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    bits: u32,
    width: u8,
    height: u8,
}

#[inline]
const fn bit(x: usize, y: usize) -> u32 {
    1 << (y * MAX_SPAN + x)
}

impl Pattern {
    /// Build a pattern from rows of `'#'` (filled) and `'.'` (empty).
    ///
    /// Usable in const context; malformed rows fail compilation of the
    /// constant that uses them.
    pub const fn parse(rows: &[&str]) -> Pattern {
        assert!(!rows.is_empty() && rows.len() <= MAX_SPAN, "pattern height out of range");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SPAN, "pattern width out of range");

        let mut bits = 0u32;
        let mut y = 0;
        while y < rows.len() {
            let row = rows[y].as_bytes();
            assert!(row.len() == width, "pattern rows must have equal width");
            let mut x = 0;
            while x < width {
                match row[x] {
                    b'#' => bits |= bit(x, y),
                    b'.' => {}
                    _ => panic!("pattern cells must be '#' or '.'"),
                }
                x += 1;
            }
            y += 1;
        }
        assert!(bits != 0, "pattern has no filled cells");

        Pattern {
            bits,
            width: width as u8,
            height: rows.len() as u8,
        }
    }

    /// Bounding-box width.
    #[inline]
    pub const fn width(self) -> usize {
        self.width as usize
    }

    /// Bounding-box height.
    #[inline]
    pub const fn height(self) -> usize {
        self.height as usize
    }

    /// Number of filled cells.
    #[inline]
    pub const fn cell_count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub const fn is_filled(self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && self.bits & bit(x, y) != 0
    }

    /// Filled cells as `(x, y)` offsets, in row-major order.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let bits = self.bits;
        (0..MAX_SPAN * MAX_SPAN)
            .filter(move |&i| bits & (1 << i) != 0)
            .map(|i| (i % MAX_SPAN, i / MAX_SPAN))
    }

    /// Rotate 90° counter-clockwise `k` times.
    pub fn rotate(self, k: u8) -> Pattern {
        (0..k % 4).fold(self, |p, _| p.rotate_once())
    }

    /// One counter-clockwise quarter turn: the right column becomes the top row.
    fn rotate_once(self) -> Pattern {
        let (w, h) = (self.width(), self.height());
        let mut bits = 0;
        for ny in 0..w {
            for nx in 0..h {
                if self.is_filled(w - 1 - ny, nx) {
                    bits |= bit(nx, ny);
                }
            }
        }
        Pattern {
            bits,
            width: h as u8,
            height: w as u8,
        }
    }

    /// Mirror the columns (left-right).
    pub fn flip_horizontal(self) -> Pattern {
        let w = self.width();
        let mut bits = 0;
        for (x, y) in self.cells() {
            bits |= bit(w - 1 - x, y);
        }
        Pattern { bits, ..self }
    }

    /// Orientation used throughout search and on the wire: flip first, then rotate.
    pub fn orient(self, rotation: u8, flip: bool) -> Pattern {
        let base = if flip { self.flip_horizontal() } else { self };
        base.rotate(rotation)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(")?;
        for y in 0..self.height() {
            if y > 0 {
                write!(f, "/")?;
            }
            for x in 0..self.width() {
                write!(f, "{}", if self.is_filled(x, y) { '#' } else { '.' })?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceId;

    const L_TROMINO: Pattern = Pattern::parse(&["#.", "##"]);
    const I_TROMINO: Pattern = Pattern::parse(&["###"]);
    const F_PENTOMINO: Pattern = Pattern::parse(&[".##", "##.", ".#."]);

    // ========== Construction ==========

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(F_PENTOMINO.width(), 3);
        assert_eq!(F_PENTOMINO.height(), 3);
        assert_eq!(F_PENTOMINO.cell_count(), 5);
        assert_eq!(I_TROMINO.width(), 3);
        assert_eq!(I_TROMINO.height(), 1);
    }

    #[test]
    fn test_is_filled() {
        assert!(L_TROMINO.is_filled(0, 0));
        assert!(!L_TROMINO.is_filled(1, 0));
        assert!(L_TROMINO.is_filled(0, 1));
        assert!(L_TROMINO.is_filled(1, 1));
        // Outside the bounding box
        assert!(!L_TROMINO.is_filled(2, 0));
        assert!(!L_TROMINO.is_filled(0, 2));
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = F_PENTOMINO.cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", L_TROMINO), "Pattern(#./##)");
    }

    // ========== Rotation ==========

    #[test]
    fn test_rotate_zero_is_identity() {
        assert_eq!(F_PENTOMINO.rotate(0), F_PENTOMINO);
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        // #.     .#
        // ##  -> ##
        assert_eq!(L_TROMINO.rotate(1), Pattern::parse(&[".#", "##"]));
        // ###  -> #
        //         #
        //         #
        assert_eq!(I_TROMINO.rotate(1), Pattern::parse(&["#", "#", "#"]));
    }

    #[test]
    fn test_rotate_swaps_dimensions_on_odd_turns() {
        let p = Pattern::parse(&["..#.", "####"]);
        for k in 0..4 {
            let r = p.rotate(k);
            if k % 2 == 1 {
                assert_eq!((r.width(), r.height()), (2, 4));
            } else {
                assert_eq!((r.width(), r.height()), (4, 2));
            }
            assert_eq!(r.cell_count(), p.cell_count());
        }
    }

    #[test]
    fn test_rotate_180() {
        assert_eq!(F_PENTOMINO.rotate(2), Pattern::parse(&[".#.", ".##", "##."]));
    }

    #[test]
    fn test_rotate_inverse_is_identity() {
        for piece in PieceId::ALPHABET {
            let p = piece.pattern();
            for k in 0..4u8 {
                assert_eq!(
                    p.rotate(k).rotate((4 - k) % 4),
                    p,
                    "rotate({}) then rotate({}) changed {:?}",
                    k,
                    (4 - k) % 4,
                    piece
                );
            }
        }
    }

    #[test]
    fn test_rotate_360_identity() {
        let mut current = F_PENTOMINO;
        for _ in 0..4 {
            current = current.rotate(1);
        }
        assert_eq!(current, F_PENTOMINO);
    }

    // ========== Reflection ==========

    #[test]
    fn test_flip_horizontal() {
        assert_eq!(L_TROMINO.flip_horizontal(), Pattern::parse(&[".#", "##"]));
        assert_eq!(F_PENTOMINO.flip_horizontal(), Pattern::parse(&["##.", ".##", ".#."]));
    }

    #[test]
    fn test_flip_twice_identity() {
        for piece in PieceId::ALPHABET {
            let p = piece.pattern();
            assert_eq!(p.flip_horizontal().flip_horizontal(), p, "{:?}", piece);
        }
    }

    #[test]
    fn test_flip_keeps_dimensions() {
        let p = Pattern::parse(&["..#.", "####"]);
        let f = p.flip_horizontal();
        assert_eq!((f.width(), f.height()), (4, 2));
        assert_eq!(f, Pattern::parse(&[".#..", "####"]));
    }

    // ========== Orientation ==========

    #[test]
    fn test_orient_flips_before_rotating() {
        let expected = F_PENTOMINO.flip_horizontal().rotate(1);
        assert_eq!(F_PENTOMINO.orient(1, true), expected);
        assert_ne!(F_PENTOMINO.orient(1, true), F_PENTOMINO.rotate(1).flip_horizontal());
    }

    #[test]
    fn test_orient_without_flip_is_rotation() {
        for k in 0..4 {
            assert_eq!(F_PENTOMINO.orient(k, false), F_PENTOMINO.rotate(k));
        }
    }

    #[test]
    fn test_f_pentomino_has_eight_orientations() {
        let mut seen = std::collections::HashSet::new();
        for k in 0..4 {
            for flip in [false, true] {
                seen.insert(F_PENTOMINO.orient(k, flip));
            }
        }
        assert_eq!(seen.len(), 8);
    }
}
