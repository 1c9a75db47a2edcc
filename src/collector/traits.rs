//! Abstractions for filesystem access to enable testing and mocking.
//!
//! The `FileSystem` trait lets every reader work against the real `/proc`
//! filesystem on Linux or an in-memory tree in tests.

use std::io;
use std::path::Path;

/// Abstraction for filesystem operations.
///
/// Each call opens its own handle and releases it before returning, so
/// implementations can be shared freely between readers.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as text.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a
    /// readable file never fails here because of its content. Process
    /// names and interface names are arbitrary bytes.
    ///
    /// # Arguments
    /// * `path` - Path to the file to read
    ///
    /// # Returns
    /// The file contents, or an I/O error if the file cannot be opened or read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to `std::fs`.
///
/// Use this in production to read from the actual `/proc` filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
