// Watcher wire input: per-worker metric samples keyed by PID string

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One metrics sample for a single worker, as the watcher reports it.
/// Field names match the watcher wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSample {
    pub cluster: u32,
    pub title: String,
    pub pid: u32,
    pub cpu: f64,
    pub user_cpu: f64,
    pub sys_cpu: f64,
    pub cpuperreq: f64,
    pub jiffyperreq: f64,
    pub events: f64,
    pub elapsed: f64,
    pub ts: f64,
    pub mem: f64,
    pub reqstotal: u64,
    pub rps: f64,
    pub oreqs: u64,
    pub utcstart: f64,
    pub oconns: u64,
    pub kb_trans: f64,
    pub kbs_out: f64,
}

/// Current and previous sample for one worker. `curr` is always present;
/// `last` is kept for rate/delta consumers and unused by aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSnapshot {
    #[serde(default)]
    pub last: Option<WorkerSample>,
    pub curr: WorkerSample,
    /// Set when the watcher has marked the worker for termination.
    #[serde(default)]
    pub kill: bool,
}

/// The full snapshot the watcher writes per connection: a JSON object whose
/// keys are PID strings. Key order is the watcher's worker registration
/// order and is observable in the report, so entries are kept as a Vec
/// instead of a map.
#[derive(Debug, Clone, Default)]
pub struct WatcherPayload {
    pub workers: Vec<(String, WorkerSnapshot)>,
}

impl WatcherPayload {
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }
}

impl<'de> Deserialize<'de> for WatcherPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = WatcherPayload;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of PID strings to worker snapshots")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut workers = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((pid, snapshot)) = map.next_entry::<String, WorkerSnapshot>()? {
                    workers.push((pid, snapshot));
                }
                Ok(WatcherPayload { workers })
            }
        }

        deserializer.deserialize_map(PayloadVisitor)
    }
}
