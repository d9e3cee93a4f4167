//! Outgoing message service
//!
//! Loads layout documents, freezes them into component trees and hands the
//! resulting message to a [`MessageSink`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{LayoutDocument, OutgoingMessage};
use crate::infrastructure::traits::{FileSystem, MessageSink};
use crate::util::path::{is_json_layout, resolve_layout_path};

/// Service for composing and submitting messages with components.
pub struct MessageService {
    fs: Arc<dyn FileSystem>,
    sink: Arc<dyn MessageSink>,
    settings: Arc<Settings>,
}

impl MessageService {
    /// Create a new message service.
    pub fn new(fs: Arc<dyn FileSystem>, sink: Arc<dyn MessageSink>, settings: Arc<Settings>) -> Self {
        Self { fs, sink, settings }
    }

    /// Resolve a layout argument: an existing path, or a name under `layout_dir`.
    pub fn locate(&self, layout: &Path) -> ApplicationResult<PathBuf> {
        if self.fs.is_file(layout) {
            return Ok(layout.to_path_buf());
        }
        let candidate = resolve_layout_path(&self.settings.layout_dir, layout);
        if self.fs.is_file(&candidate) {
            debug!("locate: {} -> {}", layout.display(), candidate.display());
            Ok(candidate)
        } else {
            Err(ApplicationError::LayoutNotFound(layout.to_path_buf()))
        }
    }

    /// Read and parse a layout document (TOML, or JSON by extension).
    #[instrument(level = "debug", skip(self))]
    pub fn load_layout(&self, layout: &Path) -> ApplicationResult<LayoutDocument> {
        let path = self.locate(layout)?;
        let content = self
            .fs
            .read_to_string(&path)
            .with_path_context("read layout", &path)?;

        let parsed: Result<LayoutDocument, String> = if is_json_layout(&path) {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            toml::from_str(&content).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| ApplicationError::Layout { path, message })
    }

    /// Build the message described by `layout` without submitting it.
    #[instrument(level = "debug", skip(self))]
    pub fn compose(&self, layout: &Path) -> ApplicationResult<OutgoingMessage> {
        let document = self.load_layout(layout)?;
        let components = document.build(self.settings.default_style)?;
        debug!(
            rows = components.rows().len(),
            components = components.component_count(),
            "compose: built tree"
        );
        Ok(OutgoingMessage::new(document.content, components))
    }

    /// Hand a finished message to the sink.
    pub fn submit(&self, message: &OutgoingMessage) -> ApplicationResult<()> {
        self.sink.submit(message).with_context("submit message")
    }

    /// Compose and submit in one step.
    pub fn send(&self, layout: &Path) -> ApplicationResult<OutgoingMessage> {
        let message = self.compose(layout)?;
        self.submit(&message)?;
        Ok(message)
    }
}
