//! The series text-file format.
//!
//! Layout, in order:
//! 1. header line: `<length> <noise_std>` with an optional trailing
//!    process-noise value,
//! 2. `length` ground-truth lines (integers),
//! 3. `length` noisy lines (reals),
//!
//! one number per line. Trailing lines after the two blocks are ignored.

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use sensim_core::SyntheticSeries;

#[derive(Debug, Error)]
pub enum SeriesFileError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("missing header line")]
    MissingHeader,
    #[error("malformed header: {0:?}")]
    BadHeader(String),
    #[error("bad value at line {line}: {value:?}")]
    BadValue { line: usize, value: String },
    #[error("truncated input: expected {expected} value lines, got {got}")]
    Truncated { expected: usize, got: usize },
    #[error("row {row} has {width} columns, column {column} requested")]
    ColumnOutOfRange {
        row: usize,
        column: usize,
        width: usize,
    },
}

/// Parsed first line of a series file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesHeader {
    /// Number of lines in each of the two value blocks.
    pub length: usize,
    /// Observation-noise standard deviation the series was generated with.
    pub noise_std: f64,
    /// Optional process-noise value; echoed by later generator variants,
    /// never consumed here.
    pub process_noise: Option<f64>,
}

impl SeriesHeader {
    /// Parse a header line.
    ///
    /// The length is accepted in float notation (`100.0`) as well, since
    /// some producers write it that way.
    pub fn parse(line: &str) -> Result<Self, SeriesFileError> {
        let bad = || SeriesFileError::BadHeader(line.to_string());
        let mut parts = line.split_whitespace();

        let length = parts
            .next()
            .and_then(|tok| tok.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as usize)
            .ok_or_else(bad)?;
        let noise_std = parts
            .next()
            .and_then(|tok| tok.parse::<f64>().ok())
            .ok_or_else(bad)?;
        let process_noise = match parts.next() {
            Some(tok) => Some(tok.parse::<f64>().map_err(|_| bad())?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(Self {
            length,
            noise_std,
            process_noise,
        })
    }
}

impl fmt::Display for SeriesHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.length, self.noise_std)?;
        if let Some(process_noise) = self.process_noise {
            write!(f, " {process_noise}")?;
        }
        Ok(())
    }
}

/// A complete series file: header plus both value blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFile {
    pub header: SeriesHeader,
    pub ground_truth: Vec<i64>,
    pub noisy: Vec<f64>,
}

impl SeriesFile {
    /// Wrap a generated series for writing.
    pub fn from_series(
        series: &SyntheticSeries,
        noise_std: f64,
        process_noise: Option<f64>,
    ) -> Self {
        Self {
            header: SeriesHeader {
                length: series.len(),
                noise_std,
                process_noise,
            },
            ground_truth: series.ground_truth.clone(),
            noisy: series.noisy.clone(),
        }
    }

    /// Write the file in the line format above.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self.header)?;
        for value in &self.ground_truth {
            writeln!(writer, "{value}")?;
        }
        for value in &self.noisy {
            writeln!(writer, "{value}")?;
        }
        Ok(())
    }

    /// Read and validate a complete series file.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, SeriesFileError> {
        let mut lines = reader.lines();

        let header_line = lines.next().ok_or(SeriesFileError::MissingHeader)??;
        let header = SeriesHeader::parse(&header_line)?;
        let expected = 2 * header.length;

        let mut ground_truth = Vec::with_capacity(header.length);
        for got in 0..header.length {
            let line = next_value_line(&mut lines, expected, got)?;
            let value = line.trim().parse::<i64>().map_err(|_| SeriesFileError::BadValue {
                line: got + 2,
                value: line.clone(),
            })?;
            ground_truth.push(value);
        }

        let mut noisy = Vec::with_capacity(header.length);
        for got in 0..header.length {
            let line = next_value_line(&mut lines, expected, header.length + got)?;
            let value = line.trim().parse::<f64>().map_err(|_| SeriesFileError::BadValue {
                line: header.length + got + 2,
                value: line.clone(),
            })?;
            noisy.push(value);
        }

        let trailing = lines
            .map_while(|line| line.ok())
            .filter(|line| !line.trim().is_empty())
            .count();
        if trailing > 0 {
            log::warn!("ignoring {trailing} trailing lines after the series blocks");
        }

        Ok(Self {
            header,
            ground_truth,
            noisy,
        })
    }
}

fn next_value_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    expected: usize,
    got: usize,
) -> Result<String, SeriesFileError> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(SeriesFileError::Truncated { expected, got }),
    }
}
