use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for the Daisy monitor
#[derive(Parser, Debug)]
#[command(
    name = "daisy-monitor",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serial monitor for Daisy Seed boards",
    long_about = "Streams text output from a Daisy Seed over its USB serial port. \
                  If no port is given, the port is auto-detected."
)]
pub struct Args {
    /// Serial port to monitor (auto-detected when omitted)
    pub port: Option<String>,

    /// List available serial ports and exit
    #[arg(short, long)]
    pub list: bool,

    /// Output format for port listings
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}
