//! Per-process status from `/proc/[pid]/status`.

use std::path::Path;

use tracing::{error, info};

use crate::collector::procfs::error::CollectError;
use crate::collector::traits::FileSystem;
use crate::model::ProcessStatus;

/// Reads every line of `/proc/[pid]/status`.
pub struct ProcessInfoReader<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> ProcessInfoReader<F> {
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

    /// Returns the status record of `pid`, all lines, in source order.
    ///
    /// The pid is not validated; zero or negative values produce a path that
    /// fails to open and report the same error as a vanished process.
    pub fn read(&self, pid: i32) -> Result<ProcessStatus, CollectError> {
        let path = format!("{}/{}/status", self.proc_path, pid);
        let content = self.fs.read_to_string(Path::new(&path)).map_err(|e| {
            error!("Failed to open {}: {}", path, e);
            CollectError::ProcessNotFoundOrDenied(pid)
        })?;

        let lines = content.lines().map(str::to_string).collect();
        info!("Read process info for PID: {}", pid);

        Ok(ProcessStatus::new(pid, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_read_all_lines() {
        let reader = ProcessInfoReader::new(MockFs::typical_system(), "/proc");
        let status = reader.read(1).unwrap();

        assert_eq!(status.pid(), 1);
        assert_eq!(status.lines().len(), 10);
        assert_eq!(status.lines()[0], "Name:\tsystemd");
        assert_eq!(status.get("PPid").as_deref(), Some("0"));
        assert!(status.to_string().ends_with("Threads:\t1\n"));
    }

    #[test]
    fn test_read_non_utf8_name() {
        let mut fs = MockFs::new();
        fs.add_bytes("/proc/7/status", &b"Name:\tab\xffcd\nPid:\t7\n"[..]);

        let status = ProcessInfoReader::new(fs, "/proc").read(7).unwrap();
        assert_eq!(status.lines().len(), 2);
        assert_eq!(status.get("Name").as_deref(), Some("ab\u{FFFD}cd"));
        assert_eq!(status.get("Pid").as_deref(), Some("7"));
    }

    #[test]
    fn test_read_missing_process() {
        let reader = ProcessInfoReader::new(MockFs::typical_system(), "/proc");
        let err = reader.read(9999).unwrap_err();
        assert!(matches!(err, CollectError::ProcessNotFoundOrDenied(9999)));
    }

    #[test]
    fn test_read_denied_process_same_error() {
        let mut fs = MockFs::typical_system();
        fs.add_unreadable("/proc/1000/status");

        let reader = ProcessInfoReader::new(fs, "/proc");
        let err = reader.read(1000).unwrap_err();
        assert!(matches!(err, CollectError::ProcessNotFoundOrDenied(1000)));
    }

    #[test]
    fn test_non_positive_pid() {
        let reader = ProcessInfoReader::new(MockFs::typical_system(), "/proc");
        assert!(matches!(
            reader.read(0),
            Err(CollectError::ProcessNotFoundOrDenied(0))
        ));
        assert!(matches!(
            reader.read(-5),
            Err(CollectError::ProcessNotFoundOrDenied(-5))
        ));
    }
}
