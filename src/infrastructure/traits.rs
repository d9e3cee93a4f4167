//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crate::application::profile::{LoginRequest, LoginResponse, UpdateProfileRequest};
use crate::domain::OutgoingMessage;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file.
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// Receives finished messages; owns serialization and delivery.
pub trait MessageSink: Send + Sync {
    fn submit(&self, message: &OutgoingMessage) -> io::Result<()>;
}

/// Remote profile endpoints.
pub trait ProfileApi: Send + Sync {
    fn update_profile(&self, request: &UpdateProfileRequest) -> io::Result<()>;

    fn login(&self, request: &LoginRequest) -> io::Result<LoginResponse>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// Writes each message as one JSON document.
#[derive(Debug)]
pub struct JsonWriterSink<W> {
    writer: Mutex<W>,
    pretty: bool,
}

impl JsonWriterSink<io::Stdout> {
    pub fn stdout(pretty: bool) -> Self {
        Self::new(io::stdout(), pretty)
    }
}

impl<W: Write + Send> JsonWriterSink<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> MessageSink for JsonWriterSink<W> {
    fn submit(&self, message: &OutgoingMessage) -> io::Result<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(message)
        } else {
            serde_json::to_string(message)
        }
        .map_err(io::Error::other)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("message sink writer poisoned"))?;
        writeln!(writer, "{payload}")?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentTree;

    #[test]
    fn given_compact_sink_when_submitting_then_writes_one_line() {
        let sink = JsonWriterSink::new(Vec::new(), false);
        let message = OutgoingMessage::new(Some("hi".into()), ComponentTree::EMPTY);

        sink.submit(&message).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "{\"content\":\"hi\",\"components\":[]}\n");
    }
}
