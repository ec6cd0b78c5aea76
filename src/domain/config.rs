use serialport::{DataBits, FlowControl, Parity, StopBits};
use std::time::Duration;

/// Baud rate the Daisy Seed firmware logs at
pub const BAUD_RATE: u32 = 115_200;

/// Per-read timeout; a line read never blocks longer than this
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Sleep between polls for available bytes
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Substrings that identify a likely Daisy Seed port, checked in order.
/// Matched against the lowercased device path and description.
pub const PORT_KEYWORDS: &[&str] = &["daisy", "seed", "stm", "usbmodem", "usbserial", "slab"];

/// Serial line settings used to open the board's port
#[derive(Debug, Clone, PartialEq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    pub flow_control: FlowControl,
    pub read_timeout: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
            read_timeout: READ_TIMEOUT,
        }
    }
}
