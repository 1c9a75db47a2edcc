//! Formatting helpers for displaying snapshots.
//!
//! Readers never call these; snapshots keep the kernel's own encoding and
//! display code converts at the edge.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Format byte count with a whole-number unit.
///
/// `"512 B"`, `"1 KB"`, `"50 MB"`, `"2 GB"` (1024 base, truncated).
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else if bytes < GB {
        format!("{} MB", bytes / MB)
    } else {
        format!("{} GB", bytes / GB)
    }
}

/// Decode a `/proc/net/tcp{,6}` address such as `0100007F:0016` into
/// `127.0.0.1:22`, or `[::1]:631` for IPv6.
///
/// The kernel prints each 32-bit word of the address in host byte order and
/// the port as plain hex. Returns `None` for anything that is not 8 or 32 hex
/// digits followed by a 4-digit port.
pub fn decode_socket_address(hex: &str) -> Option<String> {
    let (addr, port) = hex.split_once(':')?;
    let port = u16::from_str_radix(port, 16).ok()?;

    match addr.len() {
        8 => {
            let word = u32::from_str_radix(addr, 16).ok()?;
            let ip = Ipv4Addr::from(word.to_ne_bytes());
            Some(format!("{}:{}", ip, port))
        }
        32 => {
            let mut octets = [0u8; 16];
            for (i, chunk) in octets.chunks_mut(4).enumerate() {
                let word = u32::from_str_radix(addr.get(i * 8..i * 8 + 8)?, 16).ok()?;
                chunk.copy_from_slice(&word.to_ne_bytes());
            }
            Some(format!("[{}]:{}", Ipv6Addr::from(octets), port))
        }
        _ => None,
    }
}
