use serde::{Deserialize, Serialize};

/// How the ground-truth sequence is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkMode {
    /// First-order random walk: each value is the previous one plus a
    /// random step bounded by `step_range`.
    RandomWalk,
    /// Independent uniform draws in `[0, 100]`.
    Uniform,
}

/// Parameters for one synthetic series run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Number of samples in each sequence.
    pub length: usize,
    /// Standard deviation of the additive observation noise.
    pub noise_std: f64,
    /// Ground-truth generation mode.
    pub mode: WalkMode,
    /// Maximum absolute step of the random walk (unused in uniform mode).
    pub step_range: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            length: 100,
            noise_std: 10.0,
            mode: WalkMode::RandomWalk,
            step_range: 5.0,
        }
    }
}
