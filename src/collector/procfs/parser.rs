//! Parsers for `/proc` filesystem files.
//!
//! These are pure functions over file content or single lines. Readers own
//! the I/O and decide what a parse failure means for the snapshot.

use crate::model::{ConnectionStatus, CpuTimes, InterfaceCounters, TcpConnection};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// First line of `content` without its terminator.
pub fn first_line(content: &str) -> Option<&str> {
    content.lines().next()
}

/// Up to `limit` leading lines of `content`, terminators stripped.
pub fn leading_lines(content: &str, limit: usize) -> Vec<String> {
    content.lines().take(limit).map(str::to_string).collect()
}

/// Decodes the aggregate `cpu` line of `/proc/stat` by position.
///
/// Format: `cpu  user nice system idle iowait irq softirq steal guest guest_nice`.
/// Older kernels omit the trailing columns; missing or unparseable values read as 0.
pub fn parse_cpu_times(line: &str) -> CpuTimes {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let get_val = |idx: usize| -> u64 { parts.get(idx).and_then(|s| s.parse().ok()).unwrap_or(0) };

    CpuTimes {
        user: get_val(1),
        nice: get_val(2),
        system: get_val(3),
        idle: get_val(4),
        iowait: get_val(5),
        irq: get_val(6),
        softirq: get_val(7),
        steal: get_val(8),
        guest: get_val(9),
        guest_nice: get_val(10),
    }
}

/// Splits `key: value` lines, trimming both sides. Lines without a colon
/// or with an empty key are skipped.
pub fn parse_key_value_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    lines
        .into_iter()
        .filter_map(|line| line.split_once(':'))
        .filter(|(key, _)| !key.trim().is_empty())
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

/// Decodes `/proc/meminfo` lines into `(key, kB)` pairs.
///
/// Format: `MemTotal:       16384 kB`. A value that is not a number reads as 0.
pub fn parse_meminfo_entries<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<(String, u64)> {
    parse_key_value_lines(lines)
        .into_iter()
        .map(|(key, value)| {
            let kb = value
                .split_whitespace()
                .next()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0);
            (key, kb)
        })
        .collect()
}

// ============ Network Device Stats Parser ============

/// Number of counter columns on a `/proc/net/dev` line.
const NET_DEV_COLUMNS: usize = 16;

/// Splits a `/proc/net/dev` line at its first colon into the interface name
/// (leading whitespace removed) and the counter columns.
pub fn split_interface(line: &str) -> Result<(&str, &str), ParseError> {
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| ParseError::new("missing ':' after interface name"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::new("empty interface name"));
    }
    Ok((name, rest))
}

/// Decodes the counter columns of a `/proc/net/dev` line.
///
/// Format:
/// Inter-|   Receive                                                |  Transmit
///  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
///
/// Columns 4..8 (fifo, frame, compressed, multicast) are skipped; anything
/// past the sixteenth column is ignored.
pub fn parse_interface_counters(columns: &str) -> Result<InterfaceCounters, ParseError> {
    let values: Vec<&str> = columns.split_whitespace().collect();
    if values.len() < NET_DEV_COLUMNS {
        return Err(ParseError::new(format!(
            "not enough fields in net/dev: expected {}+, got {}",
            NET_DEV_COLUMNS,
            values.len()
        )));
    }

    let parse_field = |idx: usize, name: &str| -> Result<u64, ParseError> {
        values[idx]
            .parse()
            .map_err(|_| ParseError::new(format!("invalid {}: {:?}", name, values[idx])))
    };

    Ok(InterfaceCounters {
        rx_bytes: parse_field(0, "rx_bytes")?,
        rx_packets: parse_field(1, "rx_packets")?,
        rx_errors: parse_field(2, "rx_errors")?,
        rx_dropped: parse_field(3, "rx_dropped")?,
        tx_bytes: parse_field(8, "tx_bytes")?,
        tx_packets: parse_field(9, "tx_packets")?,
        tx_errors: parse_field(10, "tx_errors")?,
        tx_dropped: parse_field(11, "tx_dropped")?,
    })
}

// ============ TCP Connection Table Parser ============

/// Whitespace-separated tokens a `/proc/net/tcp` row must carry.
const NET_TCP_TOKENS: usize = 10;

/// The twelve leading columns of a `/proc/net/tcp` row, borrowed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpRow<'a> {
    pub slot: &'a str,
    pub local_address: &'a str,
    pub remote_address: &'a str,
    pub status: &'a str,
    pub tx_queue: &'a str,
    pub rx_queue: &'a str,
    pub tr: &'a str,
    pub tm_when: &'a str,
    pub retransmit: &'a str,
    pub uid: &'a str,
    pub timeout: &'a str,
    pub inode: &'a str,
}

/// Splits one row of `/proc/net/tcp` or `/proc/net/tcp6` into its columns.
///
/// Format:
///   sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
///    0: 0100007F:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 12345 ...
///
/// The kernel prints `tx_queue:rx_queue` and `tr:tm->when` as single tokens,
/// so those two are split on their colon. Anything after the inode is ignored.
pub fn split_tcp_row(line: &str) -> Result<TcpRow<'_>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < NET_TCP_TOKENS {
        return Err(ParseError::new(format!(
            "not enough fields in net/tcp: expected {}+, got {}",
            NET_TCP_TOKENS,
            tokens.len()
        )));
    }

    let (tx_queue, rx_queue) = tokens[4]
        .split_once(':')
        .ok_or_else(|| ParseError::new(format!("invalid tx_queue:rx_queue: {:?}", tokens[4])))?;
    let (tr, tm_when) = tokens[5]
        .split_once(':')
        .ok_or_else(|| ParseError::new(format!("invalid tr:tm->when: {:?}", tokens[5])))?;

    Ok(TcpRow {
        slot: tokens[0].trim_end_matches(':'),
        local_address: tokens[1],
        remote_address: tokens[2],
        status: tokens[3],
        tx_queue,
        rx_queue,
        tr,
        tm_when,
        retransmit: tokens[6],
        uid: tokens[7],
        timeout: tokens[8],
        inode: tokens[9],
    })
}

/// Decodes one connection-table row.
///
/// An unparseable state maps to `UNKNOWN` rather than rejecting the row;
/// a non-numeric uid does reject it.
pub fn parse_tcp_row(line: &str) -> Result<TcpConnection, ParseError> {
    let row = split_tcp_row(line)?;

    let uid = row
        .uid
        .parse()
        .map_err(|_| ParseError::new(format!("invalid uid: {:?}", row.uid)))?;

    Ok(TcpConnection {
        local_address: row.local_address.to_string(),
        remote_address: row.remote_address.to_string(),
        status: ConnectionStatus::from_hex(row.status),
        uid,
        inode: row.inode.to_string(),
    })
}
