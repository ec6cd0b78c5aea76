use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::{find_target_port, resolve_port, LineMonitor};
use crate::domain::config::SerialSettings;
use crate::domain::error::{MonitorError, MonitorResult};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::serial::{PortEnumerator, SerialConnection, SystemPorts};
use std::io;
use std::process::ExitCode;
use tracing::{debug, info};

const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

const CONNECTION_CHECKLIST: &[&str] = &[
    "Daisy Seed is connected via USB",
    "Daisy Seed is NOT in bootloader/DFU mode",
    "No other program is using the serial port",
];

const NO_PORTS_CHECKLIST: &[&str] = &[
    "Daisy Seed is connected via USB",
    "Daisy Seed is NOT in bootloader/DFU mode",
    "Daisy Seed firmware is running",
];

/// Execute the CLI and map the outcome to a process exit code.
///
/// Every failure is reported here; nothing escapes as a panic.
pub async fn execute_command(args: Args) -> ExitCode {
    if let Err(e) = init_logging(args.verbose, args.quiet) {
        eprintln!("{}", e);
    }

    let writer = ConsoleWriter::new(args.output);
    match run(&args, &writer, &SystemPorts).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(output_err) = report_failure(&writer, &e) {
                eprintln!("{}", output_err);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run the requested mode against the given port source
pub async fn run<E>(args: &Args, writer: &dyn OutputWriter, enumerator: &E) -> MonitorResult<()>
where
    E: PortEnumerator + ?Sized,
{
    if args.list {
        return list_ports(writer, enumerator);
    }

    if args.port.is_none() {
        writer.write_message("Searching for Daisy Seed...")?;
    }
    let port = resolve_port(args.port.as_deref(), enumerator)?;
    if args.port.is_none() {
        writer.write_message(&format!("Found port: {}", port))?;
    }

    monitor_port(&port, writer).await
}

/// Print every visible port and the one auto-detect would choose
pub fn list_ports<E>(writer: &dyn OutputWriter, enumerator: &E) -> MonitorResult<()>
where
    E: PortEnumerator + ?Sized,
{
    let ports = enumerator.list_ports()?;
    writer.write_ports(&ports, find_target_port(&ports))?;
    Ok(())
}

async fn monitor_port(port: &str, writer: &dyn OutputWriter) -> MonitorResult<()> {
    let settings = SerialSettings::default();
    let connection = SerialConnection::open(port, &settings)?;

    writer.write_banner(connection.path(), settings.baud_rate)?;

    let mut stdout = io::stdout();
    let stats = LineMonitor::new(connection)
        .run_until(tokio::signal::ctrl_c(), &mut stdout)
        .await?;

    info!(
        "Printed {} lines from {} bytes",
        stats.lines_printed, stats.bytes_read
    );
    writer.write_message("\n\nMonitoring stopped.")?;
    Ok(())
}

/// Turn a failure into the diagnostic the user sees
pub fn report_failure(writer: &dyn OutputWriter, error: &MonitorError) -> MonitorResult<()> {
    debug!("Reporting failure: {:?}", error);

    match error {
        MonitorError::NoPortsFound => {
            writer.write_error("Could not auto-detect Daisy Seed port.")?;
            writer.write_ports(&[], None)?;
            writer.write_error("\nNo serial ports found!")?;
            writer.write_checklist(NO_PORTS_CHECKLIST)?;
        }
        MonitorError::AutoDetectMiss { ports } => {
            writer.write_error("Could not auto-detect Daisy Seed port.")?;
            writer.write_ports(ports, None)?;
            writer.write_error(&format!(
                "\nPlease specify the port manually:\n  {} <port_name>",
                PROGRAM_NAME
            ))?;
            if let Some(first) = ports.first() {
                writer.write_error(&format!(
                    "\nExample:\n  {} {}",
                    PROGRAM_NAME, first.device_path
                ))?;
            }
        }
        MonitorError::Connection { .. } => {
            writer.write_error(&error.to_string())?;
            writer.write_checklist(CONNECTION_CHECKLIST)?;
        }
        other => {
            writer.write_error(&other.to_string())?;
        }
    }
    Ok(())
}
