//! Comma-delimited text tokenizer.
//! Turns a published sheet export into a grid of trimmed string cells.

/// Rows of cells as they appear in the sheet. Rows are not padded to a common length.
pub type Grid = Vec<Vec<String>>;

/// Byte-order mark some exporters prepend to UTF-8 text.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Splits delimited text into rows and fields.
///
/// Double quotes toggle quoting, a doubled quote inside a quoted field is a literal
/// quote, and commas or line breaks (CR, LF, CRLF) inside quotes are kept verbatim.
/// Malformed quoting never fails: an unterminated quote swallows the rest of the text
/// into one field.
pub fn tokenize(text: &str) -> Grid {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut rows: Grid = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut is_quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(character) = chars.next() {
        match character {
            '"' if is_quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => is_quoted = !is_quoted,
            ',' if !is_quoted => row.push(take_field(&mut field)),
            '\r' | '\n' if !is_quoted => {
                if character == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take_field(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(character),
        }
    }

    // Last row without a trailing line break
    if !field.is_empty() || !row.is_empty() {
        row.push(take_field(&mut field));
        rows.push(row);
    }
    rows
}

/// Moves the accumulated field out, trimmed.
fn take_field(field: &mut String) -> String {
    let value = field.trim().to_owned();
    field.clear();
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\u{FEFF}").is_empty());
    }

    #[test]
    fn quoted_field_with_comma_newline_and_quote() {
        let grid = tokenize("a,\"b,c\"\"d\ne\",f");
        assert_eq!(grid, vec![row(&["a", "b,c\"d\ne", "f"])]);
    }

    #[test]
    fn line_endings() {
        let grid = tokenize("a,b\r\nc,d\re,f\ng,h");
        assert_eq!(
            grid,
            vec![row(&["a", "b"]), row(&["c", "d"]), row(&["e", "f"]), row(&["g", "h"])]
        );
    }

    #[test]
    fn trailing_newline_does_not_add_row() {
        assert_eq!(tokenize("a,b\n"), vec![row(&["a", "b"])]);
    }

    #[test]
    fn blank_lines_are_single_empty_rows() {
        assert_eq!(tokenize("a\n\nb"), vec![row(&["a"]), row(&[""]), row(&["b"])]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(tokenize("  a , \" b \" ,c  "), vec![row(&["a", "b", "c"])]);
    }

    #[test]
    fn ragged_rows_are_not_padded() {
        let grid = tokenize("a,b,c\nd\ne,f");
        assert_eq!(grid.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        assert_eq!(tokenize("\u{FEFF}bar,bar"), vec![row(&["bar", "bar"])]);
    }

    #[test]
    fn unterminated_quote_consumes_rest() {
        let grid = tokenize("a,\"b,c\nd,e");
        assert_eq!(grid, vec![row(&["a", "b,c\nd,e"])]);
    }

    #[test]
    fn unterminated_quote_keeps_line_breaks_and_is_trimmed() {
        let grid = tokenize("a,\"  b\r\nc,d  ");
        assert_eq!(grid, vec![row(&["a", "b\r\nc,d"])]);
    }

    #[test]
    fn trailing_empty_field() {
        assert_eq!(tokenize("a,"), vec![row(&["a", ""])]);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics_and_cells_are_trimmed(text in "[a-z \",\r\n]{0,64}") {
                for row in tokenize(&text) {
                    for cell in row {
                        prop_assert_eq!(cell.trim(), cell.as_str());
                    }
                }
            }

            #[test]
            fn unquoted_text_splits_on_commas(cells in proptest::collection::vec("[a-z]{1,6}", 1..8)) {
                let grid = tokenize(&cells.join(","));
                prop_assert_eq!(grid, vec![cells]);
            }
        }
    }
}
