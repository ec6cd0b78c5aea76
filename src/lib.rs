//! Daisy Monitor Library
//!
//! Serial port discovery and line monitoring for Daisy Seed development
//! boards: auto-detect the board's port, open it at 115200 8N1 and stream
//! its text output until interrupted.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::{find_target_port, resolve_port, LineMonitor, LineSource, MonitorStats};
pub use domain::config::SerialSettings;
pub use domain::error::{MonitorError, MonitorResult};
pub use domain::port::PortDescriptor;
pub use infrastructure::serial::{PortEnumerator, SerialConnection, SystemPorts};
