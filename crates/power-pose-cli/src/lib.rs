//! Power Pose CLI
//!
//! Command-line front end that replays recorded landmark frames through the
//! power pose classifier and reports the verdict for each frame.
//!
//! # Features
//!
//! - **classify**: Classify every frame of a JSON or JSON-lines recording
//! - **thresholds**: Print or write the classifier thresholds
//! - **version**: Display version information
//!
//! # Usage
//!
//! ```bash
//! # Classify a recording with the default template
//! power-pose classify --input frames.jsonl
//!
//! # Custom thresholds, JSON output, failing gate per frame
//! power-pose classify -i frames.json -t thresholds.json --format json --explain
//!
//! # Write the default thresholds as a starting point
//! power-pose thresholds --output thresholds.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod classify;
pub mod frames;
pub mod workflow;

/// Power Pose Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "power-pose")]
#[command(author, version, about = "Landmark-based power pose classification")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log level filter used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify recorded pose frames
    Classify(ClassifyArgs),

    /// Print or write classifier thresholds
    Thresholds(ThresholdsArgs),

    /// Display version information
    Version,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Recorded frames: a JSON array or one JSON frame per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Threshold file (defaults to the reference power pose template)
    #[arg(short, long, value_name = "FILE")]
    pub thresholds: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Report the first failing gate for frames that are not confirmed
    #[arg(short, long)]
    pub explain: bool,

    /// Only print frames where the verdict changed
    #[arg(long)]
    pub changes_only: bool,
}

/// Arguments for the thresholds command
#[derive(Args, Debug)]
pub struct ThresholdsArgs {
    /// Threshold file to validate and print (defaults to the built-in template)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the thresholds to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output format for per-frame results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// One JSON object per frame
    Json,
}
