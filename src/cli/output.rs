use crate::cli::args::OutputFormat;
use crate::domain::port::PortDescriptor;
use serde::Serialize;
use std::io;
use tabled::{Table, Tabled};

/// Width of the rules framing listings and the monitor banner
pub const RULE_WIDTH: usize = 60;

/// Column width for device paths in the text port listing
const DEVICE_COLUMN_WIDTH: usize = 20;

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_ports(
        &self,
        ports: &[PortDescriptor],
        detected: Option<&PortDescriptor>,
    ) -> Result<(), OutputError>;
    fn write_banner(&self, port: &str, baud_rate: u32) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
    fn write_checklist(&self, items: &[&str]) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::MonitorError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_ports(
        &self,
        ports: &[PortDescriptor],
        detected: Option<&PortDescriptor>,
    ) -> Result<(), OutputError> {
        println!("{}", render_ports(self.format, ports, detected)?);
        Ok(())
    }

    fn write_banner(&self, port: &str, baud_rate: u32) -> Result<(), OutputError> {
        println!("{}", render_banner(port, baud_rate));
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("{}", error);
            }
        }
        Ok(())
    }

    fn write_checklist(&self, items: &[&str]) -> Result<(), OutputError> {
        eprintln!("{}", render_checklist(items));
        Ok(())
    }
}

/// JSON shape of a port listing
#[derive(Serialize)]
struct PortListing<'a> {
    ports: &'a [PortDescriptor],
    detected: Option<&'a str>,
}

/// Table row for the port listing
#[derive(Tabled)]
struct PortTableRow {
    device: String,
    description: String,
    detected: String,
}

impl PortTableRow {
    fn new(port: &PortDescriptor, detected: Option<&PortDescriptor>) -> Self {
        let is_detected = detected.is_some_and(|d| d.device_path == port.device_path);
        Self {
            device: port.device_path.clone(),
            description: port.description.clone(),
            detected: if is_detected { "yes" } else { "" }.to_string(),
        }
    }
}

pub fn render_ports(
    format: OutputFormat,
    ports: &[PortDescriptor],
    detected: Option<&PortDescriptor>,
) -> Result<String, OutputError> {
    let rendered = match format {
        OutputFormat::Text => {
            let rule = "-".repeat(RULE_WIDTH);
            let mut text = format!("\nAvailable serial ports:\n{}\n", rule);
            for port in ports {
                text.push_str(&format!(
                    "  {:width$} - {}\n",
                    port.device_path,
                    port.description,
                    width = DEVICE_COLUMN_WIDTH
                ));
            }
            text.push_str(&rule);
            if let Some(port) = detected {
                text.push_str(&format!("\nAuto-detect would select: {}", port.device_path));
            }
            text
        }
        OutputFormat::Json => serde_json::to_string_pretty(&PortListing {
            ports,
            detected: detected.map(|p| p.device_path.as_str()),
        })?,
        OutputFormat::Table => {
            if ports.is_empty() {
                "No serial ports found".to_string()
            } else {
                let rows: Vec<PortTableRow> =
                    ports.iter().map(|p| PortTableRow::new(p, detected)).collect();
                Table::new(rows).to_string()
            }
        }
    };
    Ok(rendered)
}

pub fn render_banner(port: &str, baud_rate: u32) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\nDaisy Seed Serial Monitor\n{rule}\nPort: {port}\nBaud Rate: {baud_rate}\nPress Ctrl+C to exit\n{rule}\n"
    )
}

pub fn render_checklist(items: &[&str]) -> String {
    let mut text = String::from("\nMake sure:");
    for (index, item) in items.iter().enumerate() {
        text.push_str(&format!("\n  {}. {}", index + 1, item));
    }
    text
}
