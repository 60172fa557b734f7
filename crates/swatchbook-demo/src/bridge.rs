//! JSON-lines IPC bridge between the UI process and the session.
//!
//! Each input line is one [`UiToCore`] message; each reply is written as
//! one [`CoreToUi`] line and flushed immediately so the UI never waits on
//! buffering. Lines that fail to parse are answered with an `Error`
//! message and the loop keeps going; only I/O failures end it.

use std::io::{BufRead, Write};

use crate::ipc::{CoreToUi, UiToCore};
use crate::session::Session;

/// Errors that stop the bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize CoreToUi: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Pump messages from `reader` through `session` into `writer` until EOF.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
) -> Result<(), BridgeError> {
    let mut handled = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let replies = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match serde_json::from_str::<UiToCore>(line.trim()) {
                Ok(msg) => {
                    tracing::debug!(?msg, "UiToCore");
                    session.handle(msg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse UiToCore: {e}");
                    vec![CoreToUi::Error {
                        message: format!("invalid message: {e}"),
                    }]
                }
            },
            Err(e) => {
                tracing::warn!("Dropping non UTF-8 line: {e}");
                vec![CoreToUi::Error {
                    message: format!("invalid message: {e}"),
                }]
            }
        };

        for reply in &replies {
            serde_json::to_writer(&mut writer, reply)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        handled += 1;
    }

    tracing::info!("UI closed the bridge after {handled} messages");
    Ok(())
}
