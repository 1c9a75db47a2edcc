//! In-memory mock filesystem for testing readers without real `/proc`.
//!
//! `MockFs` simulates a `/proc` tree in memory, including paths that exist
//! but cannot be opened, so every reader failure path can be exercised on
//! any host.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// In-memory filesystem for testing.
///
/// Contents are behind an `Arc`, so clones handed to several readers share
/// one tree without copying every fixture.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    inner: Arc<Tree>,
}

#[derive(Debug, Clone, Default)]
struct Tree {
    /// Map from path to raw file contents.
    files: HashMap<PathBuf, Vec<u8>>,
    /// Paths that exist but fail to open with `PermissionDenied`.
    denied: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    fn tree_mut(&mut self) -> &mut Tree {
        Arc::make_mut(&mut self.inner)
    }

    /// Adds a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.add_bytes(path, content.into().into_bytes());
    }

    /// Adds a file whose content need not be valid UTF-8.
    pub fn add_bytes(&mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref().to_path_buf();
        let tree = self.tree_mut();
        tree.denied.remove(&path);
        tree.files.insert(path, content.into());
    }

    /// Marks a path as present but unreadable.
    ///
    /// `read_to_string` on it fails with `PermissionDenied`, the way
    /// `/proc/[pid]/status` of a foreign process can on hardened kernels.
    pub fn add_unreadable(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        let tree = self.tree_mut();
        tree.files.remove(&path);
        tree.denied.insert(path);
    }

    /// Adds a process with its `/proc/[pid]/status` file.
    pub fn add_process(&mut self, pid: u32, status: &str) {
        self.add_file(format!("/proc/{}/status", pid), status);
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.inner.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {:?}", path),
            ));
        }
        self.inner
            .files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("file not found: {:?}", path),
                )
            })
    }
}
