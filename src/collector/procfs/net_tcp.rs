//! TCP connection table from `/proc/net/tcp` and `/proc/net/tcp6`.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::collector::procfs::error::{CollectError, SourceKind};
use crate::collector::procfs::parser::parse_tcp_row;
use crate::collector::traits::FileSystem;
use crate::model::TcpConnectionTable;

/// Address family of a connection table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TcpFamily {
    #[default]
    V4,
    V6,
}

impl TcpFamily {
    fn file_name(&self) -> &'static str {
        match self {
            TcpFamily::V4 => "tcp",
            TcpFamily::V6 => "tcp6",
        }
    }
}

/// Reads one kernel TCP socket table.
pub struct TcpConnectionTableReader<F: FileSystem> {
    fs: F,
    proc_path: String,
    family: TcpFamily,
}

impl<F: FileSystem> TcpConnectionTableReader<F> {
    /// Creates a reader for the IPv4 table, `/proc/net/tcp`.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
            family: TcpFamily::V4,
        }
    }

    /// Creates a reader for the IPv6 table, `/proc/net/tcp6`.
    pub fn ipv6(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            family: TcpFamily::V6,
            ..Self::new(fs, proc_path)
        }
    }

    pub fn family(&self) -> TcpFamily {
        self.family
    }

    /// Returns every row of the table in source order.
    ///
    /// Addresses stay in the kernel's hex `IP:PORT` form. Rows that do not
    /// decode are logged and skipped.
    pub fn read(&self) -> Result<TcpConnectionTable, CollectError> {
        let path = format!("{}/net/{}", self.proc_path, self.family.file_name());
        let content = self.fs.read_to_string(Path::new(&path)).map_err(|e| {
            error!("Failed to open {}: {}", path, e);
            CollectError::SourceUnavailable {
                kind: SourceKind::TcpTable,
                path: path.clone().into(),
                reason: Some(e.to_string()),
            }
        })?;

        let mut table = TcpConnectionTable::default();
        let mut skipped = 0;

        // First line is the column header.
        for (idx, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            match parse_tcp_row(line) {
                Ok(conn) => table.connections.push(conn),
                Err(e) => {
                    warn!("{}", CollectError::malformed(&path, idx + 1, e));
                    skipped += 1;
                }
            }
        }

        debug!(
            "Decoded {} connections, skipped {} rows",
            table.connections.len(),
            skipped
        );
        info!("Read TCP connections from {}", path);

        Ok(table)
    }
}
