use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filterbox")]
#[command(author, version, about = "Educational demo web app: image filters and friends")]
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
    /// Start the web server
    Start {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Apply a filter to a local image file
    Filter {
        /// Input image file
        #[arg(required = true)]
        input: PathBuf,

        /// Filter to apply (blur, contour, detail, edge-enhance, emboss,
        /// sharpen, smooth, grayscale)
        #[arg(required = true)]
        filter: String,

        /// Output path (defaults to `<filter>-<input>` next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
