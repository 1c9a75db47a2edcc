//! Aggregate memory snapshot from `/proc/meminfo`.

use std::path::Path;

use tracing::{debug, error, info};

use crate::collector::procfs::error::{CollectError, SourceKind};
use crate::collector::procfs::parser::leading_lines;
use crate::collector::traits::FileSystem;
use crate::model::MemorySnapshot;

/// Number of leading `/proc/meminfo` lines kept by default
/// (MemTotal, MemFree, MemAvailable, Buffers, Cached on current kernels).
pub const DEFAULT_MEMINFO_LINES: usize = 5;

/// Reads the leading lines of `/proc/meminfo`.
pub struct MemorySnapshotReader<F: FileSystem> {
    fs: F,
    proc_path: String,
    line_limit: usize,
}

impl<F: FileSystem> MemorySnapshotReader<F> {
    /// Creates a new reader keeping `DEFAULT_MEMINFO_LINES` lines.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            line_limit: DEFAULT_MEMINFO_LINES,
        }
    }

    /// Overrides how many leading lines are kept.
    pub fn with_line_limit(mut self, line_limit: usize) -> Self {
        self.line_limit = line_limit;
        self
    }

    pub fn line_limit(&self) -> usize {
        self.line_limit
    }

    /// Returns up to `line_limit` leading lines in source order.
    ///
    /// A shorter source is not an error; whatever lines exist are returned.
    pub fn read(&self) -> Result<MemorySnapshot, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path)).map_err(|e| {
            error!("Failed to open {}: {}", path, e);
            CollectError::source_unavailable(SourceKind::Memory, &path)
        })?;

        let lines = leading_lines(&content, self.line_limit);
        debug!("Kept {} of at most {} meminfo lines", lines.len(), self.line_limit);
        info!("Read memory info");

        Ok(MemorySnapshot::new(lines))
    }
}
