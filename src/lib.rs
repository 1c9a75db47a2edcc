//! procsnap - point-in-time system snapshots from `/proc`.
//!
//! Provides:
//! - `collector`: one reader per `/proc` source, the `FileSystem` seam and mocks
//! - `model`: typed snapshot records and their JSON shapes
//! - `fmt`: display helpers (byte sizes, socket addresses)

pub mod collector;
pub mod fmt;
pub mod model;
