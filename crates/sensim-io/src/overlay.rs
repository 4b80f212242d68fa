//! Overlay loading for external plotting.
//!
//! The plot tooling consumes a generator output file (`data.txt`: header
//! plus ground-truth and noisy blocks) together with an externally produced
//! `filtered_data.txt` holding one row per sample and no header. Rows may
//! carry several whitespace-separated columns; the caller picks one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::series_file::{SeriesFileError, SeriesHeader};

/// Three aligned series ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub header: SeriesHeader,
    pub truth: Vec<f64>,
    pub noisy: Vec<f64>,
    pub filtered: Vec<f64>,
}

/// Read `n` rows of whitespace-separated reals (no header line).
///
/// `BadValue::line` counts rows within the block being read.
pub fn read_rows<R: BufRead>(reader: R, n: usize) -> Result<Vec<Vec<f64>>, SeriesFileError> {
    let mut lines = reader.lines();
    let mut rows = Vec::with_capacity(n);
    for got in 0..n {
        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(SeriesFileError::Truncated { expected: n, got }),
        };
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| SeriesFileError::BadValue {
                    line: got + 1,
                    value: token.to_string(),
                })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Pick one column from every row.
pub fn select_column(rows: &[Vec<f64>], column: usize) -> Result<Vec<f64>, SeriesFileError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            row.get(column)
                .copied()
                .ok_or(SeriesFileError::ColumnOutOfRange {
                    row: idx + 1,
                    column,
                    width: row.len(),
                })
        })
        .collect()
}

/// Load the raw/noisy/filtered triple for one column.
///
/// `data_path` must follow the series file layout; `filtered_path` holds
/// `length` rows without a header, with the length taken from the data
/// file's header.
pub fn load_overlay(
    data_path: &Path,
    filtered_path: &Path,
    column: usize,
) -> Result<Overlay, SeriesFileError> {
    let mut reader = BufReader::new(File::open(data_path)?);

    let mut header_line = String::new();
    if reader.read_line(&mut header_line)? == 0 {
        return Err(SeriesFileError::MissingHeader);
    }
    let header = SeriesHeader::parse(header_line.trim_end())?;

    let truth_rows = read_rows(&mut reader, header.length)?;
    let noisy_rows = read_rows(&mut reader, header.length)?;
    let filtered_rows = read_rows(
        BufReader::new(File::open(filtered_path)?),
        header.length,
    )?;

    log::debug!(
        "loaded overlay: {} samples, column {column}",
        header.length
    );

    Ok(Overlay {
        header,
        truth: select_column(&truth_rows, column)?,
        noisy: select_column(&noisy_rows, column)?,
        filtered: select_column(&filtered_rows, column)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_multi_column_rows() {
        let rows = read_rows(Cursor::new("1 2 3\n4 5 6\n"), 2).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn missing_rows_are_truncation() {
        let err = read_rows(Cursor::new("1\n"), 3).unwrap_err();
        assert!(matches!(
            err,
            SeriesFileError::Truncated {
                expected: 3,
                got: 1
            }
        ));
    }

    #[test]
    fn non_numeric_token_is_bad_value() {
        let err = read_rows(Cursor::new("1 x\n"), 1).unwrap_err();
        assert!(matches!(err, SeriesFileError::BadValue { line: 1, .. }));
    }

    #[test]
    fn select_column_checks_row_width() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(select_column(&rows, 0).unwrap(), vec![1.0, 3.0]);

        let err = select_column(&rows, 1).unwrap_err();
        assert!(matches!(
            err,
            SeriesFileError::ColumnOutOfRange {
                row: 2,
                column: 1,
                width: 1
            }
        ));
    }
}
