use std::process::Command;
use std::str;

fn daisy_monitor() -> Command {
    Command::new(env!("CARGO_BIN_EXE_daisy-monitor"))
}

/// CLI interface tests
#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help() {
        let output = daisy_monitor()
            .arg("--help")
            .output()
            .expect("Failed to execute command");

        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");

        assert!(output.status.success());
        assert!(stdout.contains("Usage:"));
        assert!(stdout.contains("[PORT]"));
        assert!(stdout.contains("--list"));
        assert!(stdout.contains("--output"));
    }

    #[test]
    fn test_cli_version() {
        let output = daisy_monitor()
            .arg("--version")
            .output()
            .expect("Failed to execute command");

        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");
        assert!(output.status.success());
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_unopenable_port_exits_with_one() {
        let output = daisy_monitor()
            .arg("/dev/ttyFAKE")
            .output()
            .expect("Failed to execute command");

        let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");
        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr.contains("Error opening serial port /dev/ttyFAKE"));
        assert!(stderr.contains("Make sure:"));
        assert!(stderr.contains("No other program is using the serial port"));

        // An explicit port never triggers auto-detection
        assert!(!stdout.contains("Searching for Daisy Seed"));
        assert!(!stdout.contains("Available serial ports"));
    }

    #[test]
    fn test_cli_list_json_is_parseable() {
        let output = daisy_monitor()
            .args(["--list", "--output", "json"])
            .output()
            .expect("Failed to execute command");

        // Enumeration may legitimately fail in a sandbox; only check success output
        if output.status.success() {
            let stdout = str::from_utf8(&output.stdout).expect("Invalid UTF-8");
            let value: serde_json::Value =
                serde_json::from_str(stdout).expect("listing should be JSON");
            assert!(value["ports"].is_array());
        } else {
            assert_eq!(output.status.code(), Some(1));
        }
    }

    #[test]
    fn test_cli_rejects_extra_arguments() {
        let output = daisy_monitor()
            .args(["/dev/ttyACM0", "/dev/ttyACM1"])
            .output()
            .expect("Failed to execute command");

        assert!(!output.status.success());
    }

    #[test]
    fn test_cli_invalid_output_format() {
        let output = daisy_monitor()
            .args(["--list", "--output", "xml"])
            .output()
            .expect("Failed to execute command");

        let stderr = str::from_utf8(&output.stderr).expect("Invalid UTF-8");
        assert!(!output.status.success());
        assert!(stderr.contains("invalid value 'xml'"));
    }
}
