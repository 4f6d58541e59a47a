// Pure aggregation: watcher payload -> cluster totals + per-worker list

use crate::models::{HostIdentity, StatusReport, WatcherPayload, WorkerStats};

/// Builds a StatusReport from one watcher payload. Workers are emitted in
/// payload key order; totals are plain sums over each worker's `curr`
/// sample. Pure over its inputs, no retained state.
pub fn aggregate(
    payload: &WatcherPayload,
    identity: &HostIdentity,
    cluster_start_time: i64,
) -> StatusReport {
    let mut total_requests: u64 = 0;
    let mut total_kbs_out = 0.0;
    let mut total_kbs_transferred = 0.0;
    let mut total_rps = 0.0;

    let mut workers = Vec::with_capacity(payload.len());
    for (_pid, snapshot) in &payload.workers {
        let curr = &snapshot.curr;
        total_requests += curr.reqstotal;
        total_kbs_out += curr.kbs_out;
        total_kbs_transferred += curr.kb_trans;
        total_rps += curr.rps;

        workers.push(WorkerStats {
            pid: curr.pid,
            cpu: curr.cpu,
            mem: curr.mem,
            cpu_per_req: curr.cpuperreq,
            jiffy_per_req: curr.jiffyperreq,
            rps: curr.rps,
            events: curr.events,
            open_conns: curr.oconns,
            open_requests: curr.oreqs,
            total_requests: curr.reqstotal,
            kbs_out: curr.kbs_out,
            kbs_transferred: curr.kb_trans,
            start_time: (curr.utcstart * 1000.0) as i64,
        });
    }

    StatusReport {
        hostname: identity.hostname.clone(),
        node_version: identity.node_version.clone(),
        os_type: identity.os_type.clone(),
        os_release: identity.os_release.clone(),
        cluster_start_time,
        total_requests,
        total_kbs_out,
        total_kbs_transferred,
        total_rps,
        workers,
    }
}
