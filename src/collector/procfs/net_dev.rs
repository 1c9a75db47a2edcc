//! Per-interface counters from `/proc/net/dev`.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::collector::procfs::error::{CollectError, SourceKind};
use crate::collector::procfs::parser::{parse_interface_counters, split_interface};
use crate::collector::traits::FileSystem;
use crate::model::NetworkInterfaceStats;

/// Column header lines at the top of `/proc/net/dev`.
const HEADER_LINES: usize = 2;

/// Interface left out of every snapshot.
const LOOPBACK: &str = "lo";

/// Reads `/proc/net/dev` into per-interface counters, loopback excluded.
pub struct NetworkInterfaceStatsReader<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> NetworkInterfaceStatsReader<F> {
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

    /// Returns counters for every interface except loopback, in source order.
    ///
    /// Lines that do not decode are logged and skipped; the rest of the
    /// table is still returned.
    pub fn read(&self) -> Result<NetworkInterfaceStats, CollectError> {
        let path = format!("{}/net/dev", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path)).map_err(|e| {
            error!("Failed to open {}: {}", path, e);
            CollectError::source_unavailable(SourceKind::NetworkDevices, &path)
        })?;

        let mut stats = NetworkInterfaceStats::new();
        let mut skipped = 0;

        for (idx, line) in content.lines().enumerate().skip(HEADER_LINES) {
            if line.trim().is_empty() {
                continue;
            }

            let decoded = split_interface(line).and_then(|(name, columns)| {
                if name == LOOPBACK {
                    return Ok(None);
                }
                parse_interface_counters(columns).map(|counters| Some((name, counters)))
            });

            match decoded {
                Ok(Some((name, counters))) => stats.insert(name, counters),
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", CollectError::malformed(&path, idx + 1, e));
                    skipped += 1;
                }
            }
        }

        debug!("Decoded {} interfaces, skipped {} lines", stats.len(), skipped);
        info!("Read network interface statistics");

        Ok(stats)
    }
}
