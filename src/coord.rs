//! Text coordinate conversion and board rendering.
//!
//! The rendering geometry — header/footer letter rows, left/right
//! row-number margins, and where the capture-count lines land — follows a
//! `board_size > 10` branch: boards of 10 or fewer points per side show
//! the capture counts on literal rows 1/0; larger boards show them on
//! `board_size - 9`/`board_size - 10`.

use crate::board::{BoardState, Color};
use crate::error::GoError;

/// Column letter for index `i`: `A..H`, then `J..` — `I` is never used.
pub fn label_column(i: u8) -> char {
    let shifted = if i >= 8 { i + 1 } else { i };
    (b'A' + shifted) as char
}

/// Inverse of `label_column`. Rejects `'I'`/`'i'` and out-of-range letters.
pub fn parse_column(c: char) -> Option<u8> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    if upper == 'I' {
        return None;
    }
    let value = upper as u8 - b'A';
    Some(if value > 8 { value - 1 } else { value })
}

/// Row label for index `j`, right-aligned to width 2: `j + 1`, with a
/// leading space instead of a leading zero for single-digit rows.
pub fn label_row_left(j: u8) -> String {
    let n = j as u32 + 1;
    if n < 10 { format!(" {n}") } else { format!("{n}") }
}

/// Row label for index `j`, left-aligned to width 2: `j + 1`, with no
/// padding for single-digit rows (trailing digit dropped instead of a
/// leading zero).
pub fn label_row_right(j: u8) -> String {
    (j as u32 + 1).to_string()
}

/// Parses a row number token (`"1".."25"`) into a zero-based index.
pub fn parse_row(s: &str) -> Option<u8> {
    let n: u32 = s.parse().ok()?;
    if n == 0 { None } else { u8::try_from(n - 1).ok() }
}

/// Whether `s` is the case-insensitive pass keyword.
pub fn is_vertex_pass(s: &str) -> bool {
    s.eq_ignore_ascii_case("pass")
}

/// Parses a vertex token such as `"A1"` or `"Q16"` into `(i, j)`.
pub fn parse_vertex(s: &str, size: u8) -> Result<(u8, u8), GoError> {
    let mut chars = s.chars();
    let column_char = chars.next().ok_or(GoError::InvalidCoordinate)?;
    let i = parse_column(column_char).ok_or(GoError::InvalidCoordinate)?;
    let rest: String = chars.collect();
    let j = parse_row(&rest).ok_or(GoError::InvalidCoordinate)?;
    if i >= size || j >= size {
        return Err(GoError::InvalidCoordinate);
    }
    Ok((i, j))
}

/// Renders the board: header letters, each row with left/right row numbers
/// and stone/hoshi/empty glyphs, capture-count annotations on the
/// computed rows, and footer letters.
pub fn render(board: &BoardState) -> String {
    let size = board.size();

    let (line_show_white, line_show_black) = if size > 10 {
        (size - 9, size - 10)
    } else {
        (1, 0)
    };

    let mut out = String::new();
    out.push('\n');

    out.push_str("   ");
    for i in 0..size {
        out.push(' ');
        out.push(label_column(i));
    }
    out.push('\n');

    for j in (0..size).rev() {
        out.push(' ');
        out.push_str(&label_row_left(j));

        for i in 0..size {
            out.push(' ');
            let glyph = match board.get_stone(i, j) {
                Color::White => '0',
                Color::Black => 'X',
                Color::Empty if board.is_hoshi(i, j) => '+',
                Color::Empty => '.',
            };
            out.push(glyph);
        }

        out.push(' ');
        out.push_str(&label_row_right(j));

        if j == line_show_white {
            out.push_str(&format!(
                "\t    WHITE (0) has captured {} stones",
                board.captured(Color::White)
            ));
        }
        if j == line_show_black {
            out.push_str(&format!(
                "\t    BLACK (X) has captured {} stones",
                board.captured(Color::Black)
            ));
        }

        out.push('\n');
    }

    out.push_str("   ");
    for i in 0..size {
        out.push(' ');
        out.push(label_column(i));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_labels_skip_i() {
        assert_eq!(label_column(0), 'A');
        assert_eq!(label_column(7), 'H');
        assert_eq!(label_column(8), 'J');
        assert_eq!(label_column(24), 'Z');
    }

    #[test]
    fn column_labels_are_monotone_and_never_i() {
        let mut prev = None;
        for i in 0..25u8 {
            let c = label_column(i);
            assert_ne!(c, 'I');
            if let Some(p) = prev {
                assert!(c > p);
            }
            prev = Some(c);
        }
    }

    #[test]
    fn parse_column_round_trips() {
        for i in 0..25u8 {
            let c = label_column(i);
            assert_eq!(parse_column(c), Some(i));
        }
        assert_eq!(parse_column('I'), None);
    }

    #[test]
    fn parse_vertex_rejects_i_and_out_of_range() {
        assert_eq!(parse_vertex("I5", 19).unwrap_err(), GoError::InvalidCoordinate);
        assert_eq!(parse_vertex("T1", 19).unwrap_err(), GoError::InvalidCoordinate);
        assert_eq!(parse_vertex("A20", 19).unwrap_err(), GoError::InvalidCoordinate);
        assert_eq!(parse_vertex("A1", 19), Ok((0, 0)));
        assert_eq!(parse_vertex("j10", 19), Ok((8, 9)));
    }

    #[test]
    fn render_header_and_footer_match_on_small_board() {
        let board = BoardState::new(9).unwrap();
        let text = render(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], lines[lines.len() - 1]);
    }

    #[test]
    fn capture_lines_use_literal_branch_for_n_in_seven_to_ten() {
        for size in [7u8, 8, 9, 10] {
            let board = BoardState::new(size).unwrap();
            let text = render(&board);
            assert!(text.contains("WHITE (0) has captured"));
            assert!(text.contains("BLACK (X) has captured"));
        }
    }
}
