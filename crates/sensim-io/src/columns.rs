//! Device/axis column lookup and file-name interpolation.
//!
//! IMU log rows start with a timestamp, then accelerometer x/y/z, then
//! gyroscope x/y/z. The lookup is a pure function of the enumerated
//! inputs; nothing here touches process arguments or the filesystem.

use serde::{Deserialize, Serialize};

/// Sensor family within an IMU log row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Acc,
    Gyr,
}

/// Measurement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Column of a `(device, axis)` pair within an IMU log row.
pub fn column_index(device: Device, axis: Axis) -> usize {
    let base = match device {
        Device::Acc => 1,
        Device::Gyr => 4,
    };
    let offset = match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    };
    base + offset
}

/// Test-data file recorded for one IMU.
pub fn imu_data_file(imu: u32) -> String {
    format!("imu_{imu}_test.txt")
}

/// Filtered-output file for one IMU under a given process-noise tag.
pub fn noise_data_file(process_noise: &str, imu: u32) -> String {
    format!("noise_{process_noise}_imu_{imu}.txt")
}
