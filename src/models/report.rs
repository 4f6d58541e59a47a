// Aggregate report models: host identity, per-worker view, cluster totals

use serde::{Deserialize, Serialize};

/// Static host identity; resolved once at startup and shared via Arc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostIdentity {
    pub hostname: String,
    pub node_version: String,
    pub os_type: String,
    pub os_release: String,
}

/// Normalized view of one worker's current sample. Field names are the
/// response wire format; `start_time` is epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerStats {
    pub pid: u32,
    pub cpu: f64,
    pub mem: f64,
    pub cpu_per_req: f64,
    pub jiffy_per_req: f64,
    pub rps: f64,
    pub events: f64,
    pub open_conns: u64,
    pub open_requests: u64,
    pub total_requests: u64,
    pub kbs_out: f64,
    pub kbs_transferred: f64,
    pub start_time: i64,
}

/// Cluster-wide totals plus the per-worker list, built fresh per request
/// and never mutated after construction. The worker list preserves the
/// watcher payload's key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub hostname: String,
    pub node_version: String,
    pub os_type: String,
    pub os_release: String,
    /// Epoch milliseconds; process-wide, set once at startup.
    pub cluster_start_time: i64,
    pub total_requests: u64,
    pub total_kbs_out: f64,
    pub total_kbs_transferred: f64,
    pub total_rps: f64,
    #[serde(rename = "worker")]
    pub workers: Vec<WorkerStats>,
}
