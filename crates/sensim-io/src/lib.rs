//! Flat text plumbing around synthetic sensor series.
//!
//! Everything here is ad hoc whitespace- or comma-delimited text, read and
//! written the way the surrounding tooling expects it:
//! - the series file format (`<length> <std> [<process_noise>]` header
//!   followed by one value per line),
//! - overlay loading for plotting pre-computed raw/noisy/filtered series,
//! - CSV row flattening,
//! - the device/axis → column lookup table.
//!
//! Failures are structured but final: malformed input aborts the operation
//! with an error, there is no recovery or partial result.

/// Device/axis column lookup and file-name interpolation.
pub mod columns;
/// CSV row flattening.
pub mod csv;
/// Overlay loading for external plotting.
pub mod overlay;
/// The series text-file format.
pub mod series_file;

pub use columns::{column_index, imu_data_file, noise_data_file, Axis, Device};
pub use csv::{flatten_row, flatten_rows, CsvError};
pub use overlay::{load_overlay, read_rows, select_column, Overlay};
pub use series_file::{SeriesFile, SeriesFileError, SeriesHeader};
