// Domain models: watcher wire input and aggregate report output

mod report;
mod snapshot;

pub use report::{HostIdentity, StatusReport, WorkerStats};
pub use snapshot::{WatcherPayload, WorkerSample, WorkerSnapshot};
