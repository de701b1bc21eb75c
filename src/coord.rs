//! GTP vertex notation.
//!
//! Columns are letters starting at `A` and skipping `I` (to avoid confusion
//! with `J`); rows are numbers starting at 1. Column `A` is `x = 0` and row
//! `1` is `y = 0`, so `"A1"` is the corner the board prints bottom-left.

use derive_more::{Display, Error};

use crate::game::Move;

/// Column letters in order. Limits vertex notation to boards up to 25.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Largest board that vertex notation can address.
pub const MAX_VERTEX_SIZE: usize = COLUMNS.len();

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    #[display("invalid vertex: {_0:?}")]
    Malformed(#[error(not(source))] String),
    #[display("vertex {vertex} is off a {size}x{size} board")]
    OffBoard { vertex: String, size: usize },
}

/// Parse a vertex (e.g. `"D4"`, `"pass"`) for a board of `size`.
pub fn parse_vertex(s: &str, size: usize) -> Result<Move, CoordError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Move::Pass);
    }

    let malformed = || CoordError::Malformed(s.to_string());
    let mut chars = s.chars();
    let col_char = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let col = COLUMNS
        .iter()
        .position(|&c| c as char == col_char)
        .ok_or_else(malformed)?;
    let row: usize = chars.as_str().parse().map_err(|_| malformed())?;

    if row == 0 || row > size || col >= size {
        return Err(CoordError::OffBoard {
            vertex: s.to_string(),
            size,
        });
    }
    Ok(Move::Play(col as i32, row as i32 - 1))
}

/// Format a move as a vertex. Returns `"pass"` for [`Move::Pass`].
///
/// Coordinates outside vertex range are rendered as `"(x,y)"`.
pub fn format_vertex(mv: Move) -> String {
    match mv {
        Move::Pass => "pass".into(),
        Move::Play(x, y) => match usize::try_from(x).ok().and_then(|x| COLUMNS.get(x)) {
            Some(&c) if y >= 0 => format!("{}{}", c as char, y + 1),
            _ => format!("({x},{y})"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_vertex("A1", 19), Ok(Move::Play(0, 0)));
        assert_eq!(parse_vertex("T19", 19), Ok(Move::Play(18, 18)));
        assert_eq!(parse_vertex("e5", 5), Ok(Move::Play(4, 4)));
    }

    #[test]
    fn test_parse_skips_i() {
        assert_eq!(parse_vertex("H5", 19), Ok(Move::Play(7, 4)));
        assert_eq!(parse_vertex("J5", 19), Ok(Move::Play(8, 4)));
        assert!(matches!(parse_vertex("I5", 19), Err(CoordError::Malformed(_))));
    }

    #[test]
    fn test_parse_pass() {
        for s in ["pass", "PASS", "Pass"] {
            assert_eq!(parse_vertex(s, 9), Ok(Move::Pass));
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_vertex("", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("D", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("4D", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("D-1", 9), Err(CoordError::Malformed(_))));
        assert!(matches!(parse_vertex("D0", 9), Err(CoordError::OffBoard { .. })));
        assert!(matches!(parse_vertex("K1", 9), Err(CoordError::OffBoard { .. })));
        assert!(matches!(parse_vertex("A10", 9), Err(CoordError::OffBoard { .. })));
    }

    #[test]
    fn test_format_roundtrip() {
        for size in [5, 9, 13, 19] {
            for y in 0..size as i32 {
                for x in 0..size as i32 {
                    let mv = Move::Play(x, y);
                    let s = format_vertex(mv);
                    assert_eq!(parse_vertex(&s, size), Ok(mv), "roundtrip failed for {s}");
                }
            }
        }
        assert_eq!(format_vertex(Move::Pass), "pass");
        assert_eq!(format_vertex(Move::Play(-1, 3)), "(-1,3)");
    }
}
