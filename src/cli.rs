use clap::Parser;
use std::path::PathBuf;

use crate::theme::ThemePreference;

#[derive(Parser, Debug)]
#[command(name = "adminboard", about = "Terminal admin dashboard", version)]
pub struct Cli {
    /// Configuration file (defaults to ./adminboard.toml, then the XDG config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,

    /// Theme used until the saved preference loads (light, dark or system)
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemePreference>,
}

fn parse_theme(value: &str) -> Result<ThemePreference, String> {
    value.parse::<ThemePreference>().map_err(|e| e.to_string())
}
