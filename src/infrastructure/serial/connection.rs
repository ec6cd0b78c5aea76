use crate::core::line::read_line;
use crate::core::monitor::LineSource;
use crate::domain::config::SerialSettings;
use crate::domain::error::{MonitorError, MonitorResult};
use serialport::{ClearBuffer, SerialPort};
use std::io;
use tracing::{debug, info};

/// Exclusively owned connection to the board's serial device.
///
/// The OS handle is released when the connection is dropped.
pub struct SerialConnection {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialConnection {
    /// Open `path` with the given settings and discard any input the OS
    /// buffered before the connection was established.
    pub fn open(path: &str, settings: &SerialSettings) -> MonitorResult<Self> {
        let port = serialport::new(path, settings.baud_rate)
            .data_bits(settings.data_bits)
            .parity(settings.parity)
            .stop_bits(settings.stop_bits)
            .flow_control(settings.flow_control)
            .timeout(settings.read_timeout)
            .open()
            .map_err(|source| MonitorError::Connection {
                port: path.to_string(),
                source,
            })?;

        info!("Serial port {} opened at {} baud", path, settings.baud_rate);

        let mut connection = Self {
            port,
            path: path.to_string(),
        };
        connection.clear_input()?;
        Ok(connection)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn clear_input(&mut self) -> MonitorResult<()> {
        self.port
            .clear(ClearBuffer::Input)
            .map_err(|source| MonitorError::Connection {
                port: self.path.clone(),
                source,
            })?;
        debug!("Cleared stale input on {}", self.path);
        Ok(())
    }
}

impl LineSource for SerialConnection {
    fn bytes_available(&mut self) -> io::Result<u32> {
        self.port.bytes_to_read().map_err(io::Error::from)
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        read_line(&mut self.port)
    }
}

impl Drop for SerialConnection {
    fn drop(&mut self) {
        debug!("Serial port {} closed", self.path);
    }
}
