use crate::domain::error::{MonitorError, MonitorResult};
use crate::domain::port::PortDescriptor;
use tracing::debug;

/// Source of the serial ports currently visible to the system
pub trait PortEnumerator {
    fn list_ports(&self) -> MonitorResult<Vec<PortDescriptor>>;
}

/// Enumerates ports through the operating system
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPorts;

impl PortEnumerator for SystemPorts {
    fn list_ports(&self) -> MonitorResult<Vec<PortDescriptor>> {
        let ports: Vec<PortDescriptor> = serialport::available_ports()
            .map_err(MonitorError::Enumeration)?
            .into_iter()
            .map(PortDescriptor::from)
            .collect();

        debug!("Enumerated {} serial ports", ports.len());
        Ok(ports)
    }
}

/// Fixed port list, used when the ports are already known
impl PortEnumerator for Vec<PortDescriptor> {
    fn list_ports(&self) -> MonitorResult<Vec<PortDescriptor>> {
        Ok(self.clone())
    }
}
