//! Error type shared by the `/proc` readers.

use std::path::PathBuf;

use crate::collector::procfs::parser::ParseError;

/// Which information source failed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Cpu,
    Memory,
    NetworkDevices,
    TcpTable,
}

impl SourceKind {
    fn failure_message(&self) -> &'static str {
        match self {
            SourceKind::Cpu => "Failed to read CPU information",
            SourceKind::Memory => "Failed to read memory information",
            SourceKind::NetworkDevices => "Failed to read network statistics",
            SourceKind::TcpTable => "Failed to read TCP connections",
        }
    }
}

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// The source could not be opened. `reason` carries the OS error text
    /// only where it is surfaced to the caller (the TCP table).
    SourceUnavailable {
        kind: SourceKind,
        path: PathBuf,
        reason: Option<String>,
    },
    /// `/proc/[pid]/status` could not be opened. A missing process and a
    /// denied open are indistinguishable from the failed open alone.
    ProcessNotFoundOrDenied(i32),
    /// A line of an otherwise readable source did not decode. `line` is 1-based.
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    /// A snapshot could not be encoded as JSON.
    Encode(String),
}

impl CollectError {
    pub fn source_unavailable(kind: SourceKind, path: impl Into<PathBuf>) -> Self {
        CollectError::SourceUnavailable {
            kind,
            path: path.into(),
            reason: None,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: usize, err: ParseError) -> Self {
        CollectError::MalformedRecord {
            path: path.into(),
            line,
            reason: err.message,
        }
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::SourceUnavailable {
                kind,
                reason: Some(reason),
                ..
            } => write!(f, "{}: {}", kind.failure_message(), reason),
            CollectError::SourceUnavailable { kind, .. } => f.write_str(kind.failure_message()),
            CollectError::ProcessNotFoundOrDenied(_) => {
                f.write_str("Process not found or permission denied")
            }
            CollectError::MalformedRecord { path, line, reason } => {
                write!(f, "malformed record at {}:{}: {}", path.display(), line, reason)
            }
            CollectError::Encode(msg) => write!(f, "encode error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<serde_json::Error> for CollectError {
    fn from(e: serde_json::Error) -> Self {
        CollectError::Encode(e.to_string())
    }
}
