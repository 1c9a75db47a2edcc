//! Aggregate CPU and memory snapshots.

use std::fmt;

use serde::Serialize;

use crate::collector::procfs::parser::{parse_cpu_times, parse_meminfo_entries};

/// The aggregate `cpu` line of `/proc/stat`, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    line: String,
}

impl CpuSnapshot {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// Raw line without a trailing newline. Empty when the source had no lines.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Decodes the counters of the line by position.
    pub fn times(&self) -> CpuTimes {
        parse_cpu_times(&self.line)
    }
}

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Named counters of the aggregate CPU line, in jiffies since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuTimes {
    /// Sum of all counters except guest time, which the kernel already
    /// includes in `user` and `nice`. Saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
        ]
        .into_iter()
        .fold(self.user, u64::saturating_add)
    }

    /// Time not spent idle or waiting on I/O.
    pub fn busy(&self) -> u64 {
        self.total()
            .saturating_sub(self.idle)
            .saturating_sub(self.iowait)
    }
}

/// Leading lines of `/proc/meminfo`, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    lines: Vec<String>,
}

impl MemorySnapshot {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(key, value)` pairs with the value in kB; unparseable values read as 0.
    pub fn entries(&self) -> Vec<(String, u64)> {
        parse_meminfo_entries(self.lines.iter().map(String::as_str))
    }
}

impl fmt::Display for MemorySnapshot {
    /// Every line is newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_times_total_and_busy() {
        let snapshot = CpuSnapshot::new("cpu  100 10 50 800 20 5 5 10 3 0");
        let times = snapshot.times();

        assert_eq!(times.user, 100);
        assert_eq!(times.guest, 3);
        assert_eq!(times.total(), 1000);
        assert_eq!(times.busy(), 180);
    }

    #[test]
    fn test_cpu_times_saturate_on_huge_counters() {
        let times = CpuSnapshot::new("cpu  18446744073709551615 1 0 0 0 0 0 0 0 0").times();
        assert_eq!(times.user, u64::MAX);
        assert_eq!(times.total(), u64::MAX);
        assert_eq!(times.busy(), u64::MAX);

        let idle_heavy = CpuSnapshot::new("cpu  0 0 0 18446744073709551615 5 0 0 0 0 0").times();
        assert_eq!(idle_heavy.total(), u64::MAX);
        assert_eq!(idle_heavy.busy(), 0);
    }

    #[test]
    fn test_memory_snapshot_display_terminates_lines() {
        let snapshot = MemorySnapshot::new(vec![
            "MemTotal:       16384 kB".to_string(),
            "MemFree:         8192 kB".to_string(),
        ]);
        assert_eq!(
            snapshot.to_string(),
            "MemTotal:       16384 kB\nMemFree:         8192 kB\n"
        );
    }

    #[test]
    fn test_memory_entries() {
        let snapshot = MemorySnapshot::new(vec![
            "MemTotal:       16384 kB".to_string(),
            "MemFree:          abc kB".to_string(),
        ]);
        assert_eq!(
            snapshot.entries(),
            vec![("MemTotal".to_string(), 16384), ("MemFree".to_string(), 0)]
        );
    }

    #[test]
    fn test_empty_cpu_snapshot() {
        let snapshot = CpuSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_string(), "");
        assert_eq!(snapshot.times(), CpuTimes::default());
    }
}
