//! CSV row flattening.
//!
//! Each row's leading comma-separated fields are re-joined with single
//! spaces, one output line per row. No header handling, no schema
//! validation; a short row fails the whole operation.

use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("row {row} has {got} fields, expected at least {expected}")]
    TooFewFields {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Join the first `fields` comma-separated fields with single spaces.
///
/// Returns `None` when the row has fewer fields.
pub fn flatten_row(line: &str, fields: usize) -> Option<String> {
    let mut parts = line.split(',');
    let mut out = String::new();
    for idx in 0..fields {
        let part = parts.next()?;
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(part);
    }
    Some(out)
}

/// Flatten every row of a CSV stream.
pub fn flatten_rows<R: BufRead>(reader: R, fields: usize) -> Result<Vec<String>, CsvError> {
    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match flatten_row(&line, fields) {
            Some(flat) => out.push(flat),
            None => {
                return Err(CsvError::TooFewFields {
                    row: idx + 1,
                    expected: fields,
                    got: line.split(',').count(),
                })
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keeps_the_first_eight_fields() {
        let line = "a,b,c,d,e,f,g,h,i,j";
        assert_eq!(
            flatten_row(line, 8).unwrap(),
            "a b c d e f g h"
        );
    }

    #[test]
    fn fields_are_not_trimmed() {
        assert_eq!(flatten_row("a, b,c", 3).unwrap(), "a  b c");
    }

    #[test]
    fn short_row_fails_with_position() {
        let input = "1,2,3,4,5,6,7,8\n1,2,3\n";
        let err = flatten_rows(Cursor::new(input), 8).unwrap_err();
        assert!(matches!(
            err,
            CsvError::TooFewFields {
                row: 2,
                expected: 8,
                got: 3
            }
        ));
    }

    #[test]
    fn flattens_every_row() {
        let input = "1,2,3,4,5,6,7,8,extra\n9,10,11,12,13,14,15,16\n";
        let rows = flatten_rows(Cursor::new(input), 8).unwrap();
        assert_eq!(rows, vec!["1 2 3 4 5 6 7 8", "9 10 11 12 13 14 15 16"]);
    }
}
