use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use chartgen::chart::{Chart, ChartType};
use chartgen::input::read_table;

#[derive(Parser)]
#[command(name = "chartgen")]
#[command(
    about = "SVG chart maker for CSV data",
    long_about = "Generates standardized SVG charts (stacked bar, histogram, line, doughnut, hexbin) from CSV data read from a file or stdin."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a stacked bar chart (requires: category, value... columns)
    Bar {
        /// CSV input file; reads stdin when omitted
        filename: Option<String>,
        /// Output SVG filename
        #[arg(short, long)]
        output: Option<String>,
        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Create a histogram (requires: id, value columns)
    Histogram {
        /// CSV input file; reads stdin when omitted
        filename: Option<String>,
        /// Output SVG filename
        #[arg(short, long)]
        output: Option<String>,
        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Number of histogram bins
        #[arg(long, default_value_t = 20)]
        bins: usize,
    },
    /// Create a line chart (requires: id, time, value columns)
    Line {
        /// CSV input file; reads stdin when omitted
        filename: Option<String>,
        /// Output SVG filename
        #[arg(short, long)]
        output: Option<String>,
        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Create a doughnut chart (requires: category, value columns)
    Doughnut {
        /// CSV input file; reads stdin when omitted
        filename: Option<String>,
        /// Output SVG filename
        #[arg(short, long)]
        output: Option<String>,
        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
    },
    /// Create a hexbin chart (requires: id, independent, dependent columns)
    Hexbin {
        /// CSV input file; reads stdin when omitted
        filename: Option<String>,
        /// Output SVG filename
        #[arg(short, long)]
        output: Option<String>,
        /// Chart width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Chart height in pixels
        #[arg(long, default_value_t = 600)]
        height: u32,
        /// Color ramp: Blues, Greens, Green-to-Blue
        #[arg(long, default_value = "Blues")]
        color_ramp: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    log_builder.init();

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    let (chart_type, filename, output, width, height) = match command {
        Commands::Bar {
            filename,
            output,
            width,
            height,
        } => (ChartType::Bar, filename, output, width, height),
        Commands::Histogram {
            filename,
            output,
            width,
            height,
            bins,
        } => (ChartType::Histogram { bins }, filename, output, width, height),
        Commands::Line {
            filename,
            output,
            width,
            height,
        } => (ChartType::Line, filename, output, width, height),
        Commands::Doughnut {
            filename,
            output,
            width,
            height,
        } => (ChartType::Doughnut, filename, output, width, height),
        Commands::Hexbin {
            filename,
            output,
            width,
            height,
            color_ramp,
        } => (
            ChartType::Hexbin { ramp: color_ramp },
            filename,
            output,
            width,
            height,
        ),
    };

    let chart_name = chart_type.name();
    let table = read_table(filename.as_deref().map(Path::new))
        .context("Error reading input data")?;
    info!(
        "{} chart: {} rows x {} columns",
        chart_name,
        table.len(),
        table.column_count()
    );

    let chart = Chart::new(chart_type, f64::from(width), f64::from(height))?;
    let svg = chart.generate(&table)?;

    write_output(&svg, output.as_deref(), filename.as_deref(), chart_name)
}

/// Write SVG to the explicit output path, to a name derived from the input
/// file (`<input>.<charttype>.svg`), or to stdout when reading from stdin.
fn write_output(
    svg: &str,
    output: Option<&str>,
    input: Option<&str>,
    chart_name: &str,
) -> anyhow::Result<()> {
    match (output, input) {
        (Some(path), _) => {
            std::fs::write(path, svg).with_context(|| format!("Error writing {}", path))?;
            info!("Wrote {}", path);
        }
        (None, Some(input)) => {
            let path = derive_output_path(input, chart_name);
            std::fs::write(&path, svg)
                .with_context(|| format!("Error writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        (None, None) => println!("{}", svg),
    }
    Ok(())
}

fn derive_output_path(input: &str, chart_name: &str) -> PathBuf {
    Path::new(input).with_extension(format!("{}.svg", chart_name))
}
