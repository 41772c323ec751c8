// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-walker")]
#[command(about = "Headless first-person walkthrough demo", long_about = None)]
pub struct Cli {
    /// Number of simulated frames to run
    #[arg(long, default_value_t = 400)]
    pub frames: usize,

    /// Simulated frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// JSON file overriding the default navigation settings
    #[arg(long)]
    pub settings: Option<PathBuf>,
}
