//! System snapshot readers for Linux.
//!
//! This module reads point-in-time snapshots from the Linux `/proc`
//! filesystem, with support for mocking so tests run anywhere.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Collector                           │
//! │  ┌─────────────────────┐   ┌──────────────────────────────┐  │
//! │  │ CpuSnapshotReader   │   │ NetworkInterfaceStatsReader  │  │
//! │  │  - /proc/stat       │   │  - /proc/net/dev             │  │
//! │  │ MemorySnapshotReader│   │ TcpConnectionTableReader     │  │
//! │  │  - /proc/meminfo    │   │  - /proc/net/tcp             │  │
//! │  │ ProcessInfoReader   │   │  - /proc/net/tcp6            │  │
//! │  │  - /proc/[pid]/status   └──────────────┬───────────────┘  │
//! │  └──────────┬──────────┘                  │                  │
//! │             └──────────────┬──────────────┘                  │
//! │                     ┌──────▼──────┐                          │
//! │                     │  FileSystem │ (trait)                  │
//! │                     └──────┬──────┘                          │
//! └────────────────────────────┼─────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              │               │               │
//!       ┌──────▼──────┐ ┌──────▼──────┐ ┌──────▼──────┐
//!       │   RealFs    │ │   MockFs    │ │  Scenarios  │
//!       │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//!       └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use procsnap::collector::{Collector, RealFs, SnapshotKind};
//!
//! let collector = Collector::new(RealFs::new(), "/proc");
//! let json = collector.collect(SnapshotKind::NetworkInterfaces).unwrap();
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use procsnap::collector::{Collector, MockFs, SnapshotKind};
//!
//! let collector = Collector::new(MockFs::typical_system(), "/proc");
//! let json = collector.collect(SnapshotKind::NetworkInterfaces).unwrap();
//! assert!(!json.contains("\"lo\""));
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use collector::{Collector, CollectorConfig, JsonStyle, SnapshotKind};
pub use mock::MockFs;
pub use procfs::{CollectError, SourceKind, TcpFamily};
pub use traits::{FileSystem, RealFs};
