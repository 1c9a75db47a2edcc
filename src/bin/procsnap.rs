//! procsnap - print one `/proc` snapshot and exit.
//!
//! CPU, memory and process snapshots print as raw text; network and TCP
//! snapshots print as JSON.

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "linux")]
use procsnap::collector::RealFs;
#[cfg(not(target_os = "linux"))]
use procsnap::collector::mock::MockFs;
use procsnap::collector::{
    CollectError, Collector, CollectorConfig, FileSystem, JsonStyle, SnapshotKind, TcpFamily,
};
use procsnap::fmt::decode_socket_address;
use procsnap::model::TcpConnectionTable;

/// Point-in-time system snapshots from /proc.
#[derive(Parser)]
#[command(name = "procsnap", about = "Point-in-time system snapshots from /proc", version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, global = true, default_value = "/proc")]
    proc_path: String,

    /// Number of leading /proc/meminfo lines in the memory snapshot.
    #[arg(long, global = true, default_value = "5")]
    meminfo_lines: usize,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Aggregate CPU counters (first line of /proc/stat).
    Cpu,
    /// Leading lines of /proc/meminfo.
    Mem,
    /// Contents of /proc/<PID>/status.
    Process {
        /// Process id.
        #[arg(allow_negative_numbers = true)]
        pid: i32,
    },
    /// Per-interface counters from /proc/net/dev as JSON.
    Net,
    /// TCP connection table as JSON.
    Tcp {
        /// Read /proc/net/tcp6 instead of /proc/net/tcp.
        #[arg(long)]
        ipv6: bool,
        /// Print one decoded connection per line instead of JSON.
        #[arg(long)]
        decode: bool,
    },
    /// Connection counts by state group as JSON.
    TcpSummary {
        /// Read /proc/net/tcp6 instead of /proc/net/tcp.
        #[arg(long)]
        ipv6: bool,
    },
}

fn family(ipv6: bool) -> TcpFamily {
    if ipv6 { TcpFamily::V6 } else { TcpFamily::V4 }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = CollectorConfig {
        proc_path: args.proc_path.clone(),
        meminfo_lines: args.meminfo_lines,
    };
    debug!(proc_path = %config.proc_path, meminfo_lines = config.meminfo_lines, "starting");

    #[cfg(target_os = "linux")]
    let fs = RealFs::new();
    #[cfg(not(target_os = "linux"))]
    let fs = MockFs::typical_system();

    let collector = Collector::with_config(fs, &config);
    let style = if args.pretty {
        JsonStyle::Pretty
    } else {
        JsonStyle::Compact
    };

    match run(&collector, &args.command, style) {
        Ok(output) => print_output(&output),
        Err(e) => {
            debug!(error = %e, "snapshot failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run<F: FileSystem + Clone>(
    collector: &Collector<F>,
    command: &Command,
    style: JsonStyle,
) -> Result<String, CollectError> {
    let kind = match *command {
        Command::Cpu => SnapshotKind::Cpu,
        Command::Mem => SnapshotKind::Memory,
        Command::Process { pid } => SnapshotKind::Process(pid),
        Command::Net => SnapshotKind::NetworkInterfaces,
        Command::Tcp { ipv6, decode: true } => {
            let table = collector.tcp(family(ipv6)).read()?;
            return Ok(render_decoded(&table));
        }
        Command::Tcp { ipv6, decode: false } => SnapshotKind::Tcp(family(ipv6)),
        Command::TcpSummary { ipv6 } => SnapshotKind::TcpSummary(family(ipv6)),
    };
    collector.collect_with(kind, style)
}

/// Renders `local remote status uid inode`, one connection per line.
fn render_decoded(table: &TcpConnectionTable) -> String {
    let decode = |addr: &str| decode_socket_address(addr).unwrap_or_else(|| addr.to_string());
    let mut out = String::new();
    for conn in &table.connections {
        out.push_str(&format!(
            "{:<24} {:<24} {:<12} {:>6} {}\n",
            decode(&conn.local_address),
            decode(&conn.remote_address),
            conn.status,
            conn.uid,
            conn.inode
        ));
    }
    out
}

/// Text snapshots already end with a newline; JSON and the CPU line do not.
fn print_output(output: &str) {
    if output.ends_with('\n') || output.is_empty() {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Initializes logging based on verbosity flags.
///
/// Logs go to stderr so stdout carries only the snapshot.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("procsnap={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
