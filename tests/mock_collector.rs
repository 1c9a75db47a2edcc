//! End-to-end snapshots through `Collector` over in-memory `/proc` trees.

use std::io;
use std::sync::{Arc, Mutex};

use procsnap::collector::mock::MockFs;
use procsnap::collector::{CollectError, Collector, SnapshotKind, TcpFamily};
use procsnap::model::ConnectionStatus;
use tracing::Level;

/// Log sink shared with the subscriber so tests can count entries.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn lines_at(&self, level: &str) -> usize {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter(|l| l.contains(level))
            .count()
    }
}

impl io::Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_logs<T>(f: impl FnOnce() -> T) -> (T, Capture) {
    let capture = Capture::default();
    let sink = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}

fn collector(fs: MockFs) -> Collector<MockFs> {
    Collector::new(fs, "/proc")
}

#[test]
fn cpu_is_first_line_without_newline() {
    let out = collector(MockFs::typical_system())
        .collect(SnapshotKind::Cpu)
        .unwrap();
    assert_eq!(
        out,
        "cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0"
    );
}

#[test]
fn memory_keeps_first_five_lines() {
    let out = collector(MockFs::typical_system())
        .collect(SnapshotKind::Memory)
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("MemTotal:"));
    assert!(lines[4].starts_with("Cached:"));
    assert!(out.ends_with('\n'));
}

#[test]
fn memory_with_fewer_lines_returns_all() {
    let out = collector(MockFs::minimal_system())
        .collect(SnapshotKind::Memory)
        .unwrap();
    assert_eq!(
        out,
        "MemTotal:        2048000 kB\nMemFree:         1024000 kB\nMemAvailable:    1536000 kB\n"
    );
}

#[test]
fn process_status_is_returned_whole() {
    let out = collector(MockFs::typical_system())
        .collect(SnapshotKind::Process(1))
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Name:\tsystemd");
    assert_eq!(lines[9], "Threads:\t1");
    assert!(out.ends_with('\n'));
}

#[test]
fn network_output_matches_exact_shape() {
    let out = collector(MockFs::minimal_system())
        .collect(SnapshotKind::NetworkInterfaces)
        .unwrap();
    assert_eq!(
        out,
        r#"{"eth0":{"rx_bytes":100,"rx_packets":1,"rx_errors":0,"rx_dropped":0,"tx_bytes":200,"tx_packets":2,"tx_errors":0,"tx_dropped":0}}"#
    );
}

#[test]
fn network_never_reports_loopback() {
    for fs in [
        MockFs::typical_system(),
        MockFs::minimal_system(),
        MockFs::malformed_network(),
    ] {
        let out = collector(fs)
            .collect(SnapshotKind::NetworkInterfaces)
            .unwrap();
        assert!(!out.contains("\"lo\""), "loopback in {}", out);
    }
}

#[test]
fn network_keeps_source_order() {
    let out = collector(MockFs::typical_system())
        .collect(SnapshotKind::NetworkInterfaces)
        .unwrap();
    let eth0 = out.find("\"eth0\"").unwrap();
    let wlan0 = out.find("\"wlan0\"").unwrap();
    assert!(eth0 < wlan0);
}

#[test]
fn malformed_network_lines_are_skipped() {
    let (out, logs) = with_logs(|| {
        collector(MockFs::malformed_network())
            .collect(SnapshotKind::NetworkInterfaces)
            .unwrap()
    });
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&String> = value.as_object().unwrap().keys().collect();

    assert_eq!(names.len(), 2);
    assert_eq!(value["eth0"]["tx_bytes"], 200);
    assert_eq!(value["eth2"]["tx_bytes"], 500);
    // eth1 and the colon-less line
    assert_eq!(logs.lines_at("WARN"), 2);
}

#[test]
fn tcp_rows_carry_raw_fields() {
    let out = collector(MockFs::typical_system())
        .collect(SnapshotKind::Tcp(TcpFamily::V4))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = value["connections"].as_array().unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2]["local_address"], "0F02000A:A2B4");
    assert_eq!(rows[2]["remote_address"], "2E1F5A8E:01BB");
    assert_eq!(rows[2]["status"], "ESTABLISHED");
    assert_eq!(rows[2]["uid"], 1000);
    assert_eq!(rows[2]["inode"], "67890");
    assert_eq!(rows[3]["status"], "TIME_WAIT");
    assert_eq!(rows[4]["status"], "CLOSE_WAIT");
}

#[test]
fn tcp_unknown_status_and_short_rows() {
    let (table, logs) = with_logs(|| {
        collector(MockFs::malformed_network())
            .tcp(TcpFamily::V4)
            .read()
            .unwrap()
    });
    let statuses: Vec<ConnectionStatus> = table.connections.iter().map(|c| c.status).collect();
    let inodes: Vec<&str> = table.connections.iter().map(|c| c.inode.as_str()).collect();

    assert_eq!(
        statuses,
        vec![
            ConnectionStatus::Listen,
            ConnectionStatus::Unknown,
            ConnectionStatus::Unknown
        ]
    );
    assert_eq!(inodes, vec!["100", "200", "300"]);
    assert_eq!(logs.lines_at("WARN"), 1);
}

#[test]
fn tcp6_table_and_summary() {
    let c = collector(MockFs::typical_system());
    let out = c.collect(SnapshotKind::Tcp(TcpFamily::V6)).unwrap();
    assert!(out.contains("\"00000000000000000000000001000000:0277\""));

    let summary = c.collect(SnapshotKind::TcpSummary(TcpFamily::V6)).unwrap();
    assert_eq!(
        summary,
        r#"{"established":0,"listening":2,"waiting":0,"total":2}"#
    );
}

#[test]
fn empty_tcp_table() {
    let out = collector(MockFs::minimal_system())
        .collect(SnapshotKind::Tcp(TcpFamily::V4))
        .unwrap();
    assert_eq!(out, r#"{"connections":[]}"#);
}

#[test]
fn empty_sources_are_not_errors() {
    let c = collector(MockFs::empty_sources());
    assert_eq!(c.collect(SnapshotKind::Cpu).unwrap(), "");
    assert_eq!(c.collect(SnapshotKind::Memory).unwrap(), "");
    assert_eq!(c.collect(SnapshotKind::NetworkInterfaces).unwrap(), "{}");
    assert_eq!(
        c.collect(SnapshotKind::Tcp(TcpFamily::V4)).unwrap(),
        r#"{"connections":[]}"#
    );
}

#[test]
fn repeated_reads_are_identical() {
    let c = collector(MockFs::typical_system());
    for kind in [
        SnapshotKind::Cpu,
        SnapshotKind::Memory,
        SnapshotKind::Process(1000),
        SnapshotKind::NetworkInterfaces,
        SnapshotKind::Tcp(TcpFamily::V4),
        SnapshotKind::Tcp(TcpFamily::V6),
        SnapshotKind::TcpSummary(TcpFamily::V4),
    ] {
        assert_eq!(c.collect(kind).unwrap(), c.collect(kind).unwrap());
    }
}

#[test]
fn missing_sources_fail_with_one_error_log() {
    let cases = [
        (SnapshotKind::Cpu, "Failed to read CPU information"),
        (SnapshotKind::Memory, "Failed to read memory information"),
        (
            SnapshotKind::Process(4242),
            "Process not found or permission denied",
        ),
        (
            SnapshotKind::NetworkInterfaces,
            "Failed to read network statistics",
        ),
    ];

    for (kind, message) in cases {
        let (result, logs) = with_logs(|| collector(MockFs::new()).collect(kind));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(logs.lines_at("ERROR"), 1, "{:?}", kind);
    }
}

#[test]
fn missing_tcp_table_embeds_os_error() {
    let (result, logs) =
        with_logs(|| collector(MockFs::new()).collect(SnapshotKind::Tcp(TcpFamily::V4)));
    let err = result.unwrap_err();

    assert!(matches!(err, CollectError::SourceUnavailable { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Failed to read TCP connections: "));
    assert!(message.contains("file not found"));
    assert_eq!(logs.lines_at("ERROR"), 1);
}

#[test]
fn denied_process_is_same_error_as_missing() {
    let mut fs = MockFs::typical_system();
    fs.add_unreadable("/proc/1/status");
    let c = collector(fs);

    let denied = c.collect(SnapshotKind::Process(1)).unwrap_err();
    let missing = c.collect(SnapshotKind::Process(99999)).unwrap_err();
    let negative = c.collect(SnapshotKind::Process(-1)).unwrap_err();

    assert!(matches!(denied, CollectError::ProcessNotFoundOrDenied(1)));
    assert!(matches!(missing, CollectError::ProcessNotFoundOrDenied(99999)));
    assert!(matches!(negative, CollectError::ProcessNotFoundOrDenied(-1)));
}
