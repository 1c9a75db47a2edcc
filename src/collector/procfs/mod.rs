//! Readers for the Linux `/proc` filesystem.
//!
//! One reader per information source. Each call opens its own handle,
//! parses the fixed layout and returns a typed snapshot or a `CollectError`.

pub mod cpu;
pub mod error;
pub mod memory;
pub mod net_dev;
pub mod net_tcp;
pub mod parser;
pub mod process;

pub use cpu::CpuSnapshotReader;
pub use error::{CollectError, SourceKind};
pub use memory::{DEFAULT_MEMINFO_LINES, MemorySnapshotReader};
pub use net_dev::NetworkInterfaceStatsReader;
pub use net_tcp::{TcpConnectionTableReader, TcpFamily};
pub use parser::ParseError;
pub use process::ProcessInfoReader;
