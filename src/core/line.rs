//! Newline framing and tolerant text decoding for the serial stream.

use std::io::{self, ErrorKind, Read};

/// Read bytes up to and including the next `\n`.
///
/// Stops early at a read timeout or end of stream and returns whatever was
/// collected so far, which may be empty.
pub fn read_line<R: Read + ?Sized>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut byte = [0u8; 1];

    loop {
        match reader.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                buffer.push(byte[0]);
                if byte[0] == b'\n' {
                    break;
                }
            }
            Err(ref e) if e.kind() == ErrorKind::TimedOut => break,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(buffer)
}

/// Decode a raw line as UTF-8, dropping invalid sequences, and trim it.
///
/// Returns `None` when nothing printable is left.
pub fn decode_line(bytes: &[u8]) -> Option<String> {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
