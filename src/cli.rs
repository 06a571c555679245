use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "test-events",
    version,
    about = "Logs window and input events on screen for manual testing"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of lines kept in the on-screen log
    #[arg(long, value_name = "N")]
    pub lines: Option<usize>,

    /// TTF/OTF font used for all text
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Append every logged message to this file
    #[arg(long, value_name = "PATH")]
    pub capture: Option<PathBuf>,

    /// Frame rate cap
    #[arg(long, value_name = "FPS")]
    pub fps: Option<u32>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Overrides config values given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(lines) = self.lines {
            config.log_lines = lines;
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(capture) = &self.capture {
            config.capture_path = Some(capture.clone());
        }
        if let Some(fps) = self.fps {
            config.frame_rate = fps;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
