//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::MessageService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, JsonWriterSink, MessageSink, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Destination for finished messages
    pub sink: Arc<dyn MessageSink>,

    pub message_service: MessageService,
}

impl ServiceContainer {
    /// Create a new service container writing JSON payloads to stdout.
    pub fn new(settings: Settings) -> Self {
        let sink = Arc::new(JsonWriterSink::stdout(settings.pretty));
        Self::with_deps(settings, Arc::new(RealFileSystem), sink)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        sink: Arc<dyn MessageSink>,
    ) -> Self {
        let settings = Arc::new(settings);
        let message_service = MessageService::new(fs.clone(), sink.clone(), settings.clone());

        Self {
            settings,
            fs,
            sink,
            message_service,
        }
    }
}
