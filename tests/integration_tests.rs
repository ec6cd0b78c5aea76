use daisy_monitor::core::line::decode_line;
use daisy_monitor::{
    find_target_port, resolve_port, LineMonitor, LineSource, MonitorError, PortDescriptor,
    SerialSettings,
};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Replays a captured board session, one line per read
struct Replay {
    lines: VecDeque<Vec<u8>>,
}

impl LineSource for Replay {
    fn bytes_available(&mut self) -> io::Result<u32> {
        Ok(self.lines.front().map_or(0, |l| l.len() as u32))
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// Integration tests for the Daisy monitor library
#[cfg(test)]
mod integration_tests {
    use super::*;

    fn macos_ports() -> Vec<PortDescriptor> {
        vec![
            PortDescriptor::new("/dev/cu.Bluetooth-Incoming-Port", "n/a"),
            PortDescriptor::new("/dev/cu.usbmodem3859346E30391", "Daisy Seed Built In"),
        ]
    }

    #[test]
    fn test_auto_detect_then_resolve_agree() {
        let ports = macos_ports();
        let detected = find_target_port(&ports).expect("board should be detected");
        let resolved = resolve_port(None, &ports).unwrap();

        assert_eq!(detected.device_path, resolved);
    }

    #[test]
    fn test_empty_system_reports_no_ports() {
        let ports: Vec<PortDescriptor> = Vec::new();

        assert!(find_target_port(&ports).is_none());
        assert!(matches!(
            resolve_port(None, &ports),
            Err(MonitorError::NoPortsFound)
        ));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = SerialSettings::default();
        assert_eq!(settings.baud_rate, 115_200);
        assert_eq!(settings.read_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_decode_line_tolerates_noise() {
        assert_eq!(decode_line(b"ok\x80ay\n").as_deref(), Some("okay"));
        assert_eq!(decode_line(b"\t \r\n"), None);
    }

    #[tokio::test]
    async fn test_replayed_session_is_printed_until_interrupt() {
        let source = Replay {
            lines: vec![
                b"Daisy Seed ready\r\n".to_vec(),
                b"\r\n".to_vec(),
                b"cpu: 41%\xc3\n".to_vec(),
            ]
            .into(),
        };
        let mut out = Vec::new();

        let interrupt = async {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Ok(())
        };
        let stats = LineMonitor::new(source)
            .run_until(interrupt, &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Daisy Seed ready\ncpu: 41%\n");
        assert_eq!(stats.lines_printed, 2);
    }
}
