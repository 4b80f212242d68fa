//! Core generator for synthetic sensor-like time series.
//!
//! This crate produces pairs of sequences for exercising navigation and
//! filtering pipelines without real hardware:
//! - a ground-truth integer sequence (bounded random walk or independent
//!   uniform draws),
//! - a matching noisy sequence sampled from a normal distribution centered
//!   on each ground-truth value.
//!
//! Randomness is always owned by the caller: the generator takes any
//! [`rand::Rng`], and [`SplitMix64`] provides a platform-stable seeded
//! source for reproducible datasets.
//!
//! # Example
//!
//! ```
//! use sensim_core::{generate_seeded, SeriesConfig, WalkMode};
//!
//! let config = SeriesConfig {
//!     length: 50,
//!     noise_std: 2.0,
//!     mode: WalkMode::RandomWalk,
//!     step_range: 5.0,
//! };
//! let series = generate_seeded(&config, 42).unwrap();
//! assert_eq!(series.ground_truth.len(), 50);
//! assert_eq!(series.noisy.len(), 50);
//! ```

/// Generator configuration types.
pub mod config;
/// The series generator itself.
pub mod generate;
/// Deterministic random source.
pub mod rng;
/// Online mean/variance helpers.
pub mod stats;

pub use config::{SeriesConfig, WalkMode};
pub use generate::{generate, generate_seeded, GenerateError, SyntheticSeries};
pub use rng::SplitMix64;
pub use stats::OnlineStats;
