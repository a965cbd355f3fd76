use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markcut")]
#[command(
    author,
    version,
    about = "Cut the intervals listed in a timestamp CSV out of a video and join them losslessly"
)]
pub struct Cli {
    /// CSV with one HH:MM:SS timestamp per row; rows pair up as start/end
    #[arg(short = 'c', long = "csv", value_name = "CSV")]
    pub csv: PathBuf,

    /// Media file to cut
    #[arg(short = 'i', long = "input", value_name = "INPUT")]
    pub input: PathBuf,

    /// Seconds added to every timestamp
    #[arg(
        short = 'd',
        long = "delay",
        value_name = "DELAY_SECS",
        allow_negative_numbers = true
    )]
    pub delay: i64,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Let ffmpeg overwrite existing chunks and output without asking
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Final output file (overrides the config)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of chunks to cut in parallel
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// ffmpeg binary to use
    #[arg(long, value_name = "PATH")]
    pub ffmpeg: Option<PathBuf>,

    /// Print the report without running ffmpeg or writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Render only this chunk (0-based), without joining
    #[arg(long, value_name = "N", conflicts_with = "dry_run")]
    pub chunk: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
