//! Pre-built `/proc` trees for tests.

use super::MockFs;

impl MockFs {
    /// A small but realistic system: full `/proc/stat` and `/proc/meminfo`,
    /// two processes (1 and 1000), loopback plus two interfaces, and a few
    /// IPv4 and IPv6 sockets.
    pub fn typical_system() -> Self {
        let mut fs = MockFs::new();

        fs.add_file(
            "/proc/stat",
            "\
cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0
cpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0
cpu1 1335011 28880 544817 13360811 2967 0 2427 0 24026 0
intr 199292249 18 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0
ctxt 381015798
btime 1700000000
processes 302413
procs_running 2
procs_blocked 0
",
        );

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12288000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
SwapTotal:       8192000 kB
SwapFree:        8192000 kB
",
        );

        fs.add_process(
            1,
            "\
Name:\tsystemd
Umask:\t0000
State:\tS (sleeping)
Tgid:\t1
Pid:\t1
PPid:\t0
Uid:\t0\t0\t0\t0
Gid:\t0\t0\t0\t0
VmRSS:\t   12000 kB
Threads:\t1
",
        );

        fs.add_process(
            1000,
            "\
Name:\tbash
State:\tS (sleeping)
Pid:\t1000
PPid:\t999
Uid:\t1000\t1000\t1000\t1000
VmRSS:\t    8000 kB
",
        );

        fs.add_file(
            "/proc/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 12345678     9876    0    0    0     0          0         0 12345678     9876    0    0    0     0       0          0
  eth0: 987654321   654321    5   10    0     0          0       100 123456789   456789    2    5    0     0       0          0
 wlan0: 52428800     1500    2    0    0     0          0         0 10485760      800    0    1    0     0       0          0
",
        );

        fs.add_file(
            "/proc/net/tcp",
            "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 00000000:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 21325 1 0000000000000000 100 0 0 10 0
   1: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000  1000        0 31337 1 0000000000000000 100 0 0 10 0
   2: 0F02000A:A2B4 2E1F5A8E:01BB 01 00000000:00000000 02:000A1B2C 00000000  1000        0 67890 2 0000000000000000 20 4 30 10 -1
   3: 0F02000A:C350 2E1F5A8E:01BB 06 00000000:00000000 03:00001770 00000000     0        0 0 3 0000000000000000
   4: 0F02000A:9C40 0100007F:1F90 08 00000000:00000000 00:00000000 00000000  1000        0 67999 1 0000000000000000 20 4 30 10 -1
",
        );

        fs.add_file(
            "/proc/net/tcp6",
            "  sl  local_address                         remote_address                        st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 00000000000000000000000000000000:0016 00000000000000000000000000000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 21327 1 0000000000000000 100 0 0 10 0
   1: 00000000000000000000000001000000:0277 00000000000000000000000000000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 21400 1 0000000000000000 100 0 0 10 0
",
        );

        fs
    }

    /// The smallest tree that exercises every reader: a short `/proc/meminfo`,
    /// one interface next to loopback, and an empty connection table.
    pub fn minimal_system() -> Self {
        let mut fs = MockFs::new();

        fs.add_file("/proc/stat", "cpu  100 0 50 1000 0 0 0 0 0 0\n");
        fs.add_file(
            "/proc/meminfo",
            "MemTotal:        2048000 kB\nMemFree:         1024000 kB\nMemAvailable:    1536000 kB\n",
        );
        fs.add_process(42, "Name:\tinit\nPid:\t42\n");
        fs.add_file(
            "/proc/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
eth0: 100 1 0 0 0 0 0 0 200 2 0 0 0 0 0 0
lo: 5 5 0 0 0 0 0 0 5 5 0 0 0 0 0 0
",
        );
        fs.add_file(
            "/proc/net/tcp",
            "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode\n",
        );

        fs
    }

    /// Network sources with some rows that do not decode, next to good ones.
    pub fn malformed_network() -> Self {
        let mut fs = MockFs::new();

        fs.add_file(
            "/proc/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  eth0: 100 1 0 0 0 0 0 0 200 2 0 0 0 0 0 0
  eth1: 300 3 0 0
garbage without a colon
    lo: 1 2
  eth2: 400 4 0 0 0 0 0 0 500 5 0 0 0 0 0 0

",
        );

        fs.add_file(
            "/proc/net/tcp",
            "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:0016 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 100 1 0000000000000000 100 0 0 10 0
   1: 0100007F:0017 00000000:0000
   2: 0100007F:0018 00000000:0000 63 00000000:00000000 00:00000000 00000000     0        0 200 1 0000000000000000 100 0 0 10 0
   3: 0100007F:0019 00000000:0000 XY 00000000:00000000 00:00000000 00000000     0        0 300 1 0000000000000000 100 0 0 10 0
",
        );

        fs
    }

    /// Every global source exists but is empty.
    pub fn empty_sources() -> Self {
        let mut fs = MockFs::new();
        for path in [
            "/proc/stat",
            "/proc/meminfo",
            "/proc/net/dev",
            "/proc/net/tcp",
            "/proc/net/tcp6",
        ] {
            fs.add_file(path, "");
        }
        fs
    }
}
