//! Aggregate CPU snapshot from `/proc/stat`.

use std::path::Path;

use tracing::{error, info};

use crate::collector::procfs::error::{CollectError, SourceKind};
use crate::collector::procfs::parser::first_line;
use crate::collector::traits::FileSystem;
use crate::model::CpuSnapshot;

/// Reads the aggregate `cpu` line of `/proc/stat`.
pub struct CpuSnapshotReader<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> CpuSnapshotReader<F> {
    /// Creates a new reader.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Returns the first line of `/proc/stat` verbatim.
    ///
    /// A source that opens but has no lines yields an empty snapshot, not an error.
    pub fn read(&self) -> Result<CpuSnapshot, CollectError> {
        let path = format!("{}/stat", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path)).map_err(|e| {
            error!("Failed to open {}: {}", path, e);
            CollectError::source_unavailable(SourceKind::Cpu, &path)
        })?;

        let line = first_line(&content).unwrap_or_default();
        info!("Read CPU info: {}", line);

        Ok(CpuSnapshot::new(line))
    }
}
