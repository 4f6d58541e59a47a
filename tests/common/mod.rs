// Shared test helpers
#![allow(dead_code)]

use std::path::Path;

use statuspage::models::HostIdentity;
use tokio::io::AsyncWriteExt;
use tokio::net::UnixListener;

/// Two-worker snapshot mirroring a real watcher document. PID 20799 has
/// 100 requests at 20 rps, PID 22760 has 50 at 5 rps; key order is
/// 20799 then 22760.
pub const TWO_WORKER_PAYLOAD: &str = r#"{
  "20799": {
    "last": {
      "cluster": 20799, "title": "/usr/libexec/worker", "pid": 20799,
      "cpu": 0, "user_cpu": 0, "sys_cpu": 0, "cpuperreq": 0,
      "jiffyperreq": 0, "events": 0.03225806451612906, "elapsed": 151001.72,
      "ts": 1337011626, "mem": 0.57, "reqstotal": 100, "rps": 20,
      "oreqs": 10, "utcstart": 1337010906, "oconns": 0,
      "kb_trans": 0, "kbs_out": 0
    },
    "kill": false,
    "curr": {
      "cluster": 20799, "title": "/usr/libexec/worker", "pid": 20799,
      "cpu": 0, "user_cpu": 0, "sys_cpu": 0, "cpuperreq": 0,
      "jiffyperreq": 0, "events": 0, "elapsed": 0.01,
      "ts": 1337011841, "mem": 0.55, "reqstotal": 100, "rps": 20,
      "oreqs": 2, "utcstart": 1337010906, "oconns": 0,
      "kb_trans": 150, "kbs_out": 100
    }
  },
  "22760": {
    "last": {
      "cluster": 22760, "title": "/usr/libexec/worker", "pid": 22760,
      "cpu": 6.252776074688882e-13, "user_cpu": 5.5, "sys_cpu": 0,
      "cpuperreq": 0, "jiffyperreq": 0, "events": 0.12903225806610408,
      "elapsed": 0, "ts": 1337011798.44, "mem": 0, "reqstotal": 0,
      "rps": 0, "oreqs": 0, "utcstart": 1337011798, "oconns": 0,
      "kb_trans": 0, "kbs_out": 0
    },
    "kill": false,
    "curr": {
      "cluster": 22760, "title": "/usr/libexec/worker", "pid": 22760,
      "cpu": 0, "user_cpu": 0, "sys_cpu": 0, "cpuperreq": 0,
      "jiffyperreq": 0, "events": 0, "elapsed": 0.01,
      "ts": 1337011841.45, "mem": 0.59, "reqstotal": 50, "rps": 5,
      "oreqs": 2, "utcstart": 1337011798, "oconns": 1,
      "kb_trans": 500, "kbs_out": 125
    }
  }
}"#;

pub fn test_identity() -> HostIdentity {
    HostIdentity {
        hostname: "testhost".into(),
        node_version: "v0.3.0".into(),
        os_type: "Linux".into(),
        os_release: "6.1.0".into(),
    }
}

/// Binds a mock watcher on `socket_path`: per connection, writes `payload`
/// and closes, like the real watcher does.
pub fn spawn_watcher(socket_path: &Path, payload: &'static str) -> tokio::task::JoinHandle<()> {
    let listener = UnixListener::bind(socket_path).expect("bind mock watcher socket");
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let _ = stream.write_all(payload.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    })
}
