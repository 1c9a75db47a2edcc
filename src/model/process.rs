//! Per-process status record.

use std::fmt;

use crate::collector::procfs::parser::parse_key_value_lines;

/// Raw lines of `/proc/[pid]/status`, in source order.
///
/// Field values are left as text; callers pick out what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStatus {
    pid: i32,
    lines: Vec<String>,
}

impl ProcessStatus {
    pub fn new(pid: i32, lines: Vec<String>) -> Self {
        Self { pid, lines }
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(key, value)` pairs with both sides trimmed.
    pub fn fields(&self) -> Vec<(String, String)> {
        parse_key_value_lines(self.lines.iter().map(String::as_str))
    }

    /// Value of the first field named `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.fields()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
