//! Power Pose CLI Entry Point
//!
//! This is the main entry point for the power-pose command-line tool.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use power_pose_cli::{classify, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; results go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Classify(args) => classify::execute_classify(args)?,
        Commands::Thresholds(args) => classify::execute_thresholds(args)?,
        Commands::Version => {
            println!("power-pose {}", env!("CARGO_PKG_VERSION"));
            println!("Core library version: {}", power_pose_core::VERSION);
        }
    }

    Ok(())
}
