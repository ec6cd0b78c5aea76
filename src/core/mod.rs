// Core module - Port resolution and the line monitor loop
pub mod line;
pub mod monitor;
pub mod resolver;

pub use monitor::{LineMonitor, LineSource, MonitorStats};
pub use resolver::{find_target_port, resolve_port};
