//! Facade that runs one reader by name and renders its snapshot.
//!
//! `Collector` is the boundary a host calls into: one `SnapshotKind` in,
//! one rendered string (or a `CollectError`) out. CPU, memory and process
//! snapshots are raw text; network and TCP snapshots are JSON.

use serde::Serialize;

use crate::collector::procfs::{
    CollectError, CpuSnapshotReader, DEFAULT_MEMINFO_LINES, MemorySnapshotReader,
    NetworkInterfaceStatsReader, ProcessInfoReader, TcpConnectionTableReader, TcpFamily,
};
use crate::collector::traits::FileSystem;

/// Where the readers look and how much of `/proc/meminfo` they keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Base path to proc filesystem.
    pub proc_path: String,
    /// Leading `/proc/meminfo` lines kept by the memory snapshot.
    pub meminfo_lines: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            proc_path: "/proc".to_string(),
            meminfo_lines: DEFAULT_MEMINFO_LINES,
        }
    }
}

/// A snapshot a host can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Cpu,
    Memory,
    Process(i32),
    NetworkInterfaces,
    Tcp(TcpFamily),
    TcpSummary(TcpFamily),
}

/// JSON layout for the structured snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    #[default]
    Compact,
    Pretty,
}

impl JsonStyle {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CollectError> {
        let json = match self {
            JsonStyle::Compact => serde_json::to_string(value)?,
            JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(json)
    }
}

/// Owns one reader per source over a shared filesystem.
pub struct Collector<F: FileSystem + Clone> {
    cpu: CpuSnapshotReader<F>,
    memory: MemorySnapshotReader<F>,
    process: ProcessInfoReader<F>,
    net_dev: NetworkInterfaceStatsReader<F>,
    tcp: TcpConnectionTableReader<F>,
    tcp6: TcpConnectionTableReader<F>,
}

impl<F: FileSystem + Clone> Collector<F> {
    /// Creates a collector with default configuration.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        let config = CollectorConfig {
            proc_path: proc_path.into(),
            ..Default::default()
        };
        Self::with_config(fs, &config)
    }

    pub fn with_config(fs: F, config: &CollectorConfig) -> Self {
        let proc_path = config.proc_path.as_str();
        Self {
            cpu: CpuSnapshotReader::new(fs.clone(), proc_path),
            memory: MemorySnapshotReader::new(fs.clone(), proc_path)
                .with_line_limit(config.meminfo_lines),
            process: ProcessInfoReader::new(fs.clone(), proc_path),
            net_dev: NetworkInterfaceStatsReader::new(fs.clone(), proc_path),
            tcp: TcpConnectionTableReader::new(fs.clone(), proc_path),
            tcp6: TcpConnectionTableReader::ipv6(fs, proc_path),
        }
    }

    pub fn cpu(&self) -> &CpuSnapshotReader<F> {
        &self.cpu
    }

    pub fn memory(&self) -> &MemorySnapshotReader<F> {
        &self.memory
    }

    pub fn process(&self) -> &ProcessInfoReader<F> {
        &self.process
    }

    pub fn net_dev(&self) -> &NetworkInterfaceStatsReader<F> {
        &self.net_dev
    }

    pub fn tcp(&self, family: TcpFamily) -> &TcpConnectionTableReader<F> {
        match family {
            TcpFamily::V4 => &self.tcp,
            TcpFamily::V6 => &self.tcp6,
        }
    }

    /// Takes one snapshot and renders it with compact JSON.
    pub fn collect(&self, kind: SnapshotKind) -> Result<String, CollectError> {
        self.collect_with(kind, JsonStyle::Compact)
    }

    /// Takes one snapshot and renders it. `style` only affects JSON output.
    pub fn collect_with(&self, kind: SnapshotKind, style: JsonStyle) -> Result<String, CollectError> {
        match kind {
            SnapshotKind::Cpu => Ok(self.cpu.read()?.to_string()),
            SnapshotKind::Memory => Ok(self.memory.read()?.to_string()),
            SnapshotKind::Process(pid) => Ok(self.process.read(pid)?.to_string()),
            SnapshotKind::NetworkInterfaces => style.encode(&self.net_dev.read()?),
            SnapshotKind::Tcp(family) => style.encode(&self.tcp(family).read()?),
            SnapshotKind::TcpSummary(family) => style.encode(&self.tcp(family).read()?.summary()),
        }
    }
}
