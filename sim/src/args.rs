use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone)]
#[command(name = "airplane-sim")]
#[command(about = "Headless airplane flight simulator", long_about = None)]
pub struct Args {
    /// Path to the TOML config; defaults are used when the file is absent
    #[arg(long, default_value = "sim.toml")]
    pub config: PathBuf,
    /// Simulated seconds to run before exiting
    #[arg(long, default_value_t = 30.0)]
    pub seconds: f32,
    /// Override the frame rate from the config
    #[arg(long)]
    pub frame_hz: Option<f64>,
}
