use crate::core::line::decode_line;
use crate::domain::config::POLL_INTERVAL;
use crate::domain::error::MonitorResult;
use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};

/// A byte stream that can be polled for pending input and read line by line
pub trait LineSource {
    /// Number of bytes waiting to be read
    fn bytes_available(&mut self) -> io::Result<u32>;

    /// Read up to and including the next newline, or until the read timeout
    fn read_line(&mut self) -> io::Result<Vec<u8>>;
}

/// Counters reported when monitoring stops
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MonitorStats {
    pub lines_printed: u64,
    pub bytes_read: u64,
}

/// Streams decoded lines from a source to an output until interrupted.
///
/// The monitor owns its source; the source is dropped when `run_until`
/// returns, whichever way it returns.
pub struct LineMonitor<S> {
    source: S,
    poll_interval: Duration,
    stats: MonitorStats,
}

impl<S: LineSource> LineMonitor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            poll_interval: POLL_INTERVAL,
            stats: MonitorStats::default(),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Poll the source and print every non-empty line to `out` until
    /// `interrupt` resolves or a read fails.
    ///
    /// The loop sleeps for the poll interval only when nothing is waiting.
    /// The interrupt is checked between reads, so a stop request lands
    /// within one poll interval plus at most one read timeout.
    pub async fn run_until<F, W>(mut self, interrupt: F, out: &mut W) -> MonitorResult<MonitorStats>
    where
        F: Future<Output = io::Result<()>>,
        W: Write + ?Sized,
    {
        tokio::pin!(interrupt);
        let mut idle = false;

        loop {
            // Sleep only after an empty poll; a pending backlog just yields
            let poll_interval = self.poll_interval;
            let pause = async move {
                if idle {
                    tokio::time::sleep(poll_interval).await;
                } else {
                    tokio::task::yield_now().await;
                }
            };

            tokio::select! {
                biased;
                result = &mut interrupt => {
                    result?;
                    info!(
                        "Monitoring interrupted after {} lines ({} bytes)",
                        self.stats.lines_printed, self.stats.bytes_read
                    );
                    return Ok(self.stats);
                }
                _ = pause => {}
            }

            idle = self.source.bytes_available()? == 0;
            if idle {
                continue;
            }

            let raw = self.source.read_line()?;
            self.stats.bytes_read += raw.len() as u64;

            match decode_line(&raw) {
                Some(line) => {
                    writeln!(out, "{}", line)?;
                    out.flush()?;
                    self.stats.lines_printed += 1;
                }
                None => debug!("Skipped {} bytes with no printable text", raw.len()),
            }
        }
    }
}
