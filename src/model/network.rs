//! Per-interface network counters.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Receive/transmit counters of one interface from `/proc/net/dev`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct InterfaceCounters {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub rx_errors: u64,
    pub rx_dropped: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub tx_errors: u64,
    pub tx_dropped: u64,
}

/// Interface name -> counters, in the order the source lists them.
///
/// Serializes as a JSON object keyed by interface name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterfaceStats {
    interfaces: Vec<(String, InterfaceCounters)>,
}

impl NetworkInterfaceStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the counters of `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, counters: InterfaceCounters) {
        let name = name.into();
        match self.interfaces.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = counters,
            None => self.interfaces.push((name, counters)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceCounters> {
        self.interfaces
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InterfaceCounters)> {
        self.interfaces.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl Serialize for NetworkInterfaceStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.interfaces.len()))?;
        for (name, counters) in &self.interfaces {
            map.serialize_entry(name, counters)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(rx_bytes: u64) -> InterfaceCounters {
        InterfaceCounters {
            rx_bytes,
            ..Default::default()
        }
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let mut stats = NetworkInterfaceStats::new();
        stats.insert("wlan0", counters(1));
        stats.insert("eth0", counters(2));

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.starts_with("{\"wlan0\":{\"rx_bytes\":1,"));
        assert!(json.find("\"wlan0\"").unwrap() < json.find("\"eth0\"").unwrap());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut stats = NetworkInterfaceStats::new();
        stats.insert("eth0", counters(1));
        stats.insert("wlan0", counters(2));
        stats.insert("eth0", counters(3));

        assert_eq!(stats.len(), 2);
        let names: Vec<&str> = stats.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["eth0", "wlan0"]);
        assert_eq!(stats.get("eth0").unwrap().rx_bytes, 3);
    }

    #[test]
    fn test_empty_serializes_to_empty_object() {
        let json = serde_json::to_string(&NetworkInterfaceStats::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_names_are_escaped() {
        let mut stats = NetworkInterfaceStats::new();
        stats.insert("we\"ird", counters(0));

        let json = serde_json::to_string(&stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("we\"ird").is_some());
    }
}
