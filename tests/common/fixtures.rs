//! Test fixtures - reusable artifact content for tests.

/// Agent stand-in that accepts any configuration
pub const AGENT_OK: &str = "#!/bin/sh\nexit 0\n";

/// Agent stand-in that reports on stdout and accepts the configuration
pub const AGENT_CHATTY: &str = "#!/bin/sh\necho 'I! config check: 4 inputs loaded'\nexit 0\n";

/// Agent stand-in that rejects the configuration
pub const AGENT_REJECTS: &str = "#!/bin/sh\necho 'E! [telegraf] Error parsing telegraf.conf' >&2\nexit 1\n";

pub const BASE_CONFIG: &str = r#"[agent]
  interval = "10s"
  flush_interval = "10s"

[[outputs.influxdb_v2]]
  urls = ["http://metrics.example.net:8086"]
"#;

pub const SYSTEM_CONFIG: &str = "[[inputs.cpu]]\n[[inputs.mem]]\n[[inputs.disk]]\n";

pub const ACTIVE_DIRECTORY_CONFIG: &str = "[[inputs.win_perf_counters]]\n  # NTDS\n";

pub const DNS_CONFIG: &str = "[[inputs.win_perf_counters]]\n  # DNS\n";

pub const DFS_REPLICATION_CONFIG: &str = "[[inputs.win_perf_counters]]\n  # DFS Replication\n";

pub const DFS_NAMESPACE_CONFIG: &str = "[[inputs.win_perf_counters]]\n  # DFS Namespace\n";

/// `[host]` section for a member server running DNS
pub const HOST_DNS_SERVER: &str = r#"[host]
server = true
domain_controller = false
services = ["dns-server"]
"#;

/// `[host]` section for a workstation that still reports role services
pub const HOST_WORKSTATION: &str = r#"[host]
server = false
domain_controller = true
services = ["dns-server", "dfs-replication", "dfs-namespace"]
"#;
