// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::{SceneConfig, MAX_DEPTH};
use crate::export::ExportFormat;
use crate::math::Hsv;
use crate::subdivision::SubdivisionPolicy;

#[derive(Parser, Debug, Clone)]
#[command(name = "sierpinski")]
#[command(about = "Sierpinski triangle vertex generator", long_about = None)]
pub struct Cli {
    /// JSON scene config; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subdivision policy
    #[arg(short, long, value_enum)]
    pub policy: Option<SubdivisionPolicy>,

    /// Recursion depth
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(..=MAX_DEPTH as i64)
    )]
    pub depth: Option<i32>,

    /// Color every triangle with this hue (degrees) instead of the policy default
    #[arg(long, allow_negative_numbers = true)]
    pub hue: Option<f32>,

    /// Number of render steps to simulate
    #[arg(long)]
    pub frames: Option<u32>,

    /// Write the vertex buffer here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Disable console summary output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Overlay command-line values onto `config`
    pub fn apply(&self, mut config: SceneConfig) -> SceneConfig {
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(hue) = self.hue {
            config.color = Some(Hsv::new(hue, config.saturation, config.value));
            config.colors = None;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        config
    }
}
