use crate::domain::port::PortDescriptor;
use thiserror::Error;

/// Daisy monitor unified error type
#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("No serial ports found")]
    NoPortsFound,

    #[error("Could not auto-detect Daisy Seed port ({} ports available)", .ports.len())]
    AutoDetectMiss { ports: Vec<PortDescriptor> },

    #[error("Error opening serial port {port}: {source}")]
    Connection {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Failed to list serial ports: {0}")]
    Enumeration(#[source] serialport::Error),

    #[error("Unexpected error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(String),
}

impl MonitorError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type MonitorResult<T> = Result<T, MonitorError>;
