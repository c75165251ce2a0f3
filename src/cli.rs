use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tagprobe")]
#[command(author, version, about = "Inspect audio file tags and manage embedded lyrics")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show audio information and tags for a file
    Info {
        /// Audio file to inspect
        #[arg(required = true)]
        file: PathBuf,

        /// Also save the information as JSON to this path
        #[arg(long, value_name = "OUTPUT_PATH")]
        json: Option<PathBuf>,
    },

    /// Save embedded lyrics to a sidecar file, or import lyrics from online sources
    Lyrics {
        /// Audio file to read lyrics from (or embed lyrics into)
        #[arg(required = true)]
        file: PathBuf,

        /// Search online sources and embed the chosen lyrics into the file
        #[arg(long)]
        import: bool,

        /// Candidate number to embed, instead of prompting
        #[arg(long, requires = "import", value_name = "N")]
        choice: Option<String>,

        /// Directory for the sidecar lyrics file
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Check that ffprobe and ffmpeg are installed and the network is reachable
    CheckTools,
}
