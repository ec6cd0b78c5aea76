use serde::{Deserialize, Serialize};
use serialport::{SerialPortInfo, SerialPortType};

/// A serial port as reported by the operating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    /// Device path (e.g. /dev/ttyACM0, COM3)
    pub device_path: String,
    /// Human-readable description
    pub description: String,
}

impl PortDescriptor {
    pub fn new(device_path: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            device_path: device_path.into(),
            description: description.into(),
        }
    }
}

impl From<SerialPortInfo> for PortDescriptor {
    fn from(info: SerialPortInfo) -> Self {
        let description = match info.port_type {
            SerialPortType::UsbPort(usb) => usb
                .product
                .or(usb.manufacturer)
                .unwrap_or_else(|| "n/a".to_string()),
            SerialPortType::BluetoothPort => "Bluetooth device".to_string(),
            SerialPortType::PciPort => "PCI device".to_string(),
            SerialPortType::Unknown => "n/a".to_string(),
        };

        Self {
            device_path: info.port_name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::UsbPortInfo;

    fn usb(product: Option<&str>, manufacturer: Option<&str>) -> SerialPortInfo {
        SerialPortInfo {
            port_name: "/dev/ttyACM0".to_string(),
            port_type: SerialPortType::UsbPort(UsbPortInfo {
                vid: 0x0483,
                pid: 0x5740,
                serial_number: None,
                manufacturer: manufacturer.map(str::to_string),
                product: product.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_usb_description_prefers_product() {
        let port = PortDescriptor::from(usb(Some("Daisy Seed Built In"), Some("Electrosmith")));
        assert_eq!(port.device_path, "/dev/ttyACM0");
        assert_eq!(port.description, "Daisy Seed Built In");
    }

    #[test]
    fn test_usb_description_falls_back_to_manufacturer() {
        let port = PortDescriptor::from(usb(None, Some("STMicroelectronics")));
        assert_eq!(port.description, "STMicroelectronics");

        let port = PortDescriptor::from(usb(None, None));
        assert_eq!(port.description, "n/a");
    }

    #[test]
    fn test_non_usb_descriptions() {
        let info = SerialPortInfo {
            port_name: "/dev/ttyS0".to_string(),
            port_type: SerialPortType::Unknown,
        };
        assert_eq!(PortDescriptor::from(info).description, "n/a");

        let info = SerialPortInfo {
            port_name: "/dev/rfcomm0".to_string(),
            port_type: SerialPortType::BluetoothPort,
        };
        assert_eq!(PortDescriptor::from(info).description, "Bluetooth device");
    }
}
