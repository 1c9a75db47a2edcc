//! Snapshot records produced by the `/proc` readers.
//!
//! Every record is built once per call and never mutated afterwards.

mod network;
mod process;
mod system;
mod tcp;

pub use network::{InterfaceCounters, NetworkInterfaceStats};
pub use process::ProcessStatus;
pub use system::{CpuSnapshot, CpuTimes, MemorySnapshot};
pub use tcp::{ConnectionStatus, ConnectionSummary, TcpConnection, TcpConnectionTable};
