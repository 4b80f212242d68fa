use std::{
    error::Error,
    fs,
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand, ValueEnum};

use sensim_core::{generate_seeded, OnlineStats, SeriesConfig, WalkMode};
use sensim_io::{
    columns::{column_index, imu_data_file, noise_data_file, Axis, Device},
    csv::flatten_rows,
    series_file::SeriesFile,
};

/// Synthetic sensor-series toolbox.
#[derive(Debug, Parser)]
#[command(author, version, about = "Fake sensor series generation and text plumbing")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a ground-truth/noisy series pair in the series file format.
    Generate(GenerateArgs),
    /// Flatten the leading fields of a CSV file into space-separated lines.
    Flatten(FlattenArgs),
    /// Resolve the data column and file names for a device/axis pair.
    Column(ColumnArgs),
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Optional JSON file holding a SeriesConfig; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of samples.
    #[arg(long)]
    length: Option<usize>,

    /// Observation-noise standard deviation.
    #[arg(long)]
    noise_std: Option<f64>,

    /// Ground-truth generation mode.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Maximum absolute random-walk step.
    #[arg(long)]
    step_range: Option<f64>,

    /// RNG seed; equal seeds reproduce the output exactly.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Process-noise value echoed in the header (never consumed here).
    #[arg(long)]
    process_noise: Option<f64>,

    /// Output file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log mean/std of the noisy-minus-truth residuals.
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    RandomWalk,
    Uniform,
}

impl From<ModeArg> for WalkMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::RandomWalk => WalkMode::RandomWalk,
            ModeArg::Uniform => WalkMode::Uniform,
        }
    }
}

#[derive(Debug, clap::Args)]
struct FlattenArgs {
    /// Input CSV file.
    #[arg(long)]
    input: PathBuf,

    /// Number of leading fields to keep.
    #[arg(long, default_value_t = 8)]
    fields: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DeviceArg {
    Acc,
    Gyr,
}

impl From<DeviceArg> for Device {
    fn from(device: DeviceArg) -> Self {
        match device {
            DeviceArg::Acc => Device::Acc,
            DeviceArg::Gyr => Device::Gyr,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(Debug, clap::Args)]
struct ColumnArgs {
    #[arg(long, value_enum)]
    device: DeviceArg,

    #[arg(long, value_enum)]
    axis: AxisArg,

    /// IMU identifier used for file-name interpolation.
    #[arg(long)]
    imu: Option<u32>,

    /// Process-noise tag used for file-name interpolation.
    #[arg(long)]
    process_noise: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Generate(args) => run_generate(&args),
        Command::Flatten(args) => {
            for line in flatten_file(&args.input, args.fields)? {
                println!("{line}");
            }
            Ok(())
        }
        Command::Column(args) => {
            run_column(&args);
            Ok(())
        }
    }
}

fn load_config(args: &GenerateArgs) -> Result<SeriesConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str::<SeriesConfig>(&fs::read_to_string(path)?)?,
        None => SeriesConfig::default(),
    };
    if let Some(length) = args.length {
        config.length = length;
    }
    if let Some(noise_std) = args.noise_std {
        config.noise_std = noise_std;
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(step_range) = args.step_range {
        config.step_range = step_range;
    }
    Ok(config)
}

fn run_generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    let series = generate_seeded(&config, args.seed)?;

    if args.summary {
        let stats: OnlineStats = series
            .noisy
            .iter()
            .zip(&series.ground_truth)
            .map(|(&noisy, &truth)| noisy - truth as f64)
            .collect();
        log::info!(
            "residuals over {} samples: mean {:.4}, std {:.4}",
            stats.len(),
            stats.mean(),
            stats.std_dev()
        );
    }

    let file = SeriesFile::from_series(&series, config.noise_std, args.process_noise);
    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(fs::File::create(path)?);
            file.write_to(&mut writer)?;
        }
        None => {
            let stdout = io::stdout();
            file.write_to(&mut stdout.lock())?;
        }
    }
    Ok(())
}

fn flatten_file(path: &Path, fields: usize) -> Result<Vec<String>, Box<dyn Error>> {
    let reader = BufReader::new(fs::File::open(path)?);
    Ok(flatten_rows(reader, fields)?)
}

fn run_column(args: &ColumnArgs) {
    let column = column_index(args.device.into(), args.axis.into());
    println!("{column}");
    if let Some(imu) = args.imu {
        println!("{}", imu_data_file(imu));
        if let Some(process_noise) = &args.process_noise {
            println!("{}", noise_data_file(process_noise, imu));
        }
    }
}
