//! Host bridge writing outbound commands as text lines.
use std::io::Write;

use battle_core::OutboundCommand;
use client_frontend_core::{BridgeError, Capability, HostBridge};

/// Marker line printed when the screen is closed by the host.
pub const CLOSE_LINE: &str = "CLOSE";

/// Writes one command per line to `writer` (stdout in production).
pub struct StdioBridge<W> {
    writer: W,
    supports_close: bool,
    closed: bool,
}

impl<W: Write> StdioBridge<W> {
    pub fn new(writer: W, supports_close: bool) -> Self {
        Self {
            writer,
            supports_close,
            closed: false,
        }
    }

    /// True once a close call went through; the session should end.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn write_line(&mut self, line: &str) -> Result<(), BridgeError> {
        writeln!(self.writer, "{line}").map_err(BridgeError::Transport)?;
        self.writer.flush().map_err(BridgeError::Transport)
    }
}

impl<W: Write> HostBridge for StdioBridge<W> {
    fn send_command(&mut self, command: &OutboundCommand) -> Result<(), BridgeError> {
        self.write_line(&command.to_string())
    }

    fn close_screen(&mut self) -> Result<(), BridgeError> {
        if !self.supports_close {
            return Err(BridgeError::Unavailable(Capability::CloseScreen));
        }
        self.write_line(CLOSE_LINE)?;
        self.closed = true;
        Ok(())
    }
}
