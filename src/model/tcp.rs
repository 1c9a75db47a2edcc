//! TCP connection table records.

use std::fmt;

use serde::Serialize;

/// Socket state as encoded in the `st` column of `/proc/net/tcp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
    Unknown,
}

impl ConnectionStatus {
    /// Maps a kernel state code. Anything outside 1..=11 is `Unknown`.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => ConnectionStatus::Established,
            2 => ConnectionStatus::SynSent,
            3 => ConnectionStatus::SynRecv,
            4 => ConnectionStatus::FinWait1,
            5 => ConnectionStatus::FinWait2,
            6 => ConnectionStatus::TimeWait,
            7 => ConnectionStatus::Close,
            8 => ConnectionStatus::CloseWait,
            9 => ConnectionStatus::LastAck,
            10 => ConnectionStatus::Listen,
            11 => ConnectionStatus::Closing,
            _ => ConnectionStatus::Unknown,
        }
    }

    /// Parses a hexadecimal state token such as `0A`. Unparseable tokens are `Unknown`.
    pub fn from_hex(token: &str) -> Self {
        u32::from_str_radix(token, 16)
            .map(Self::from_code)
            .unwrap_or(ConnectionStatus::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Established => "ESTABLISHED",
            ConnectionStatus::SynSent => "SYN_SENT",
            ConnectionStatus::SynRecv => "SYN_RECV",
            ConnectionStatus::FinWait1 => "FIN_WAIT1",
            ConnectionStatus::FinWait2 => "FIN_WAIT2",
            ConnectionStatus::TimeWait => "TIME_WAIT",
            ConnectionStatus::Close => "CLOSE",
            ConnectionStatus::CloseWait => "CLOSE_WAIT",
            ConnectionStatus::LastAck => "LAST_ACK",
            ConnectionStatus::Listen => "LISTEN",
            ConnectionStatus::Closing => "CLOSING",
            ConnectionStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the connection table.
///
/// Addresses stay in the kernel's hexadecimal `IP:PORT` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TcpConnection {
    pub local_address: String,
    pub remote_address: String,
    pub status: ConnectionStatus,
    pub uid: u32,
    pub inode: String,
}

/// All rows of one table, serialized as `{"connections": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TcpConnectionTable {
    pub connections: Vec<TcpConnection>,
}

impl TcpConnectionTable {
    pub fn summary(&self) -> ConnectionSummary {
        ConnectionSummary::from_connections(&self.connections)
    }
}

/// Counts by state group for a quick overview of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionSummary {
    pub established: usize,
    pub listening: usize,
    /// `TIME_WAIT` plus `CLOSE_WAIT`.
    pub waiting: usize,
    pub total: usize,
}

impl ConnectionSummary {
    pub fn from_connections(connections: &[TcpConnection]) -> Self {
        let mut summary = ConnectionSummary {
            total: connections.len(),
            ..Default::default()
        };
        for conn in connections {
            match conn.status {
                ConnectionStatus::Established => summary.established += 1,
                ConnectionStatus::Listen => summary.listening += 1,
                ConnectionStatus::TimeWait | ConnectionStatus::CloseWait => summary.waiting += 1,
                _ => {}
            }
        }
        summary
    }
}
