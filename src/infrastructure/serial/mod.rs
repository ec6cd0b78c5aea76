// Serial module - OS serial port access
pub mod connection;
pub mod enumerator;

pub use connection::SerialConnection;
pub use enumerator::{PortEnumerator, SystemPorts};
