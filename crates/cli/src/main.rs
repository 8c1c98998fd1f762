//! `sight`: run targeting, volume, and drawing queries against a RON scene.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Capture, Draw, LineOfView, Nearest, Sight};
use config::CliConfig;

/// Spatial queries over voxel scenes
#[derive(Parser)]
#[command(name = "sight")]
#[command(about = "Targeting, volume capture, and particle drawing over voxel scenes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Living entities nearest to a point or actor
    Nearest(Nearest),

    /// Living entities inside an actor's view cone
    Sight(Sight),

    /// Living entities along an actor's line of view
    LineOfView(LineOfView),

    /// Capture (and optionally refill) a sphere of voxels
    Capture(Capture),

    /// Sample particle points along a shape
    #[command(subcommand)]
    Draw(Draw),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SIGHT_SCENE and step overrides)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    cli.command.execute(&config)
}

impl Command {
    fn execute(self, config: &CliConfig) -> Result<()> {
        match self {
            Command::Nearest(cmd) => cmd.execute(config),
            Command::Sight(cmd) => cmd.execute(config),
            Command::LineOfView(cmd) => cmd.execute(config),
            Command::Capture(cmd) => cmd.execute(config),
            Command::Draw(cmd) => cmd.execute(config),
        }
    }
}
