//! `io::Result` adapters for layout reads, sink writes and profile calls.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

pub trait IoResultExt<T> {
    /// Wrap an I/O failure on `path`, e.g. `with_path_context("read layout", &path)`.
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Wrap an I/O failure of a boundary call that has no path.
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.with_context(&format!("{action} {}", path.display()))
    }

    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}
