use crate::domain::config::PORT_KEYWORDS;
use crate::domain::error::{MonitorError, MonitorResult};
use crate::domain::port::PortDescriptor;
use crate::infrastructure::serial::PortEnumerator;
use tracing::{debug, info};

/// Pick the first port, in enumeration order, whose lowercased device path
/// or description contains any of the board keywords.
///
/// This is a heuristic: generic USB-serial adapters match too.
pub fn find_target_port(ports: &[PortDescriptor]) -> Option<&PortDescriptor> {
    ports.iter().find(|port| {
        let description = port.description.to_lowercase();
        let device = port.device_path.to_lowercase();

        PORT_KEYWORDS
            .iter()
            .any(|keyword| description.contains(keyword) || device.contains(keyword))
    })
}

/// Decide which device to monitor.
///
/// An explicit path is used as-is and the enumerator is never consulted.
pub fn resolve_port<E>(explicit: Option<&str>, enumerator: &E) -> MonitorResult<String>
where
    E: PortEnumerator + ?Sized,
{
    if let Some(path) = explicit {
        debug!("Using explicit port {}", path);
        return Ok(path.to_string());
    }

    let ports = enumerator.list_ports()?;
    if let Some(port) = find_target_port(&ports) {
        info!("Auto-detected port {} ({})", port.device_path, port.description);
        return Ok(port.device_path.clone());
    }

    if ports.is_empty() {
        Err(MonitorError::NoPortsFound)
    } else {
        Err(MonitorError::AutoDetectMiss { ports })
    }
}
