// Host identity via sysinfo

use sysinfo::System;

use crate::models::HostIdentity;
use crate::version::VERSION;

/// Resolves the static host identity (hostname, service version, OS type
/// and release). Fetched once at startup and shared via Arc; none of these
/// change for the process lifetime.
pub async fn get_host_identity() -> anyhow::Result<HostIdentity> {
    tokio::task::spawn_blocking(|| {
        let hostname = System::host_name().unwrap_or_default();
        let os_type = System::name().unwrap_or_else(|| std::env::consts::OS.into());
        let os_release = System::kernel_version().unwrap_or_default();
        Ok(HostIdentity {
            hostname,
            node_version: format!("v{}", VERSION),
            os_type,
            os_release,
        })
    })
    .await
    .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
}
