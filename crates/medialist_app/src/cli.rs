use std::path::PathBuf;

use clap::Parser;
use medialist_core::MediaType;

use crate::config::LogTarget;

/// Terminal driver for the category-filtered media listing
#[derive(Debug, Parser)]
#[command(name = "medialist")]
#[command(about = "Browse catalog listings by category from the terminal", long_about = None)]
pub struct Cli {
    /// RON config file; missing files fall back to defaults
    #[arg(short, long, default_value = "medialist.ron")]
    pub config: PathBuf,
    /// Media type to open with (movie or tv)
    #[arg(short, long)]
    pub media_type: Option<MediaType>,
    /// Root URL of the backend API
    #[arg(long)]
    pub api_base_url: Option<String>,
    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogTarget>,
}
