use std::path::PathBuf;

use clap::Parser;

use crate::models::Coordinates;

#[derive(Parser, Debug)]
#[command(
    name = "risk-fillr",
    about = "Derive road-risk assessment form values from license, route, and weather signals",
    version
)]
pub struct Cli {
    /// License photo (JPG/PNG) to run through the OCR provider
    #[arg(long, value_name = "IMAGE")]
    pub license: Option<PathBuf>,

    /// Pre-extracted OCR text file; skips the OCR provider
    #[arg(long, value_name = "FILE", conflicts_with = "license")]
    pub license_text: Option<PathBuf>,

    /// Vehicle class code (MCWG, LMV, HMV, ...) to map without a license
    #[arg(long, value_name = "CODE")]
    pub vehicle_class: Option<String>,

    /// Trip origin; also used for the weather lookup
    #[arg(long, value_name = "LAT,LON")]
    pub from: Option<Coordinates>,

    /// Trip destination
    #[arg(long, value_name = "LAT,LON", requires = "from")]
    pub to: Option<Coordinates>,

    /// Skip the weather lookup even when --from is given
    #[arg(long)]
    pub no_weather: bool,

    /// Evaluate as if run at this time (RFC 3339 or HH:MM)
    #[arg(long, value_name = "WHEN")]
    pub at: Option<String>,

    /// Use canned provider fixtures instead of the network
    #[arg(long)]
    pub mock: bool,

    /// Config file [default: ./.risk-fillr/config.toml, fallback ~/.config/risk-fillr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show every extracted detail, not just the form fields
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
