// Report rendering: JSON (wire schema) or a minimal HTML page

use axum::Json;
use axum::response::{Html, IntoResponse, Response};

use crate::models::StatusReport;

/// Rendering mode, selected once at construction from the configured
/// response content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Json,
    Html,
}

impl RenderFormat {
    /// "json" selects JSON; any other value (or none) selects HTML.
    pub fn from_content_type(value: Option<&str>) -> Self {
        match value {
            Some("json") => RenderFormat::Json,
            _ => RenderFormat::Html,
        }
    }
}

pub fn render(report: &StatusReport, format: RenderFormat) -> Response {
    match format {
        RenderFormat::Json => Json(report).into_response(),
        RenderFormat::Html => Html(render_html(report)).into_response(),
    }
}

/// Total for any well-formed report; the page always contains "html".
pub fn render_html(report: &StatusReport) -> String {
    let mut rows = String::new();
    for w in &report.workers {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            w.pid,
            w.cpu,
            w.mem,
            w.rps,
            w.total_requests,
            w.open_requests,
            w.open_conns,
            w.start_time,
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Cluster status - {hostname}</title></head>\n<body>\n\
         <h1>Cluster status</h1>\n\
         <p>{hostname} &middot; {node_version} &middot; {os_type} {os_release} &middot; started {cluster_start_time}</p>\n\
         <p>requests: {total_requests} &middot; rps: {total_rps} &middot; kbs out: {total_kbs_out} &middot; kbs transferred: {total_kbs_transferred}</p>\n\
         <table border=\"1\">\n\
         <tr><th>pid</th><th>cpu</th><th>mem</th><th>rps</th><th>requests</th><th>open reqs</th><th>open conns</th><th>started</th></tr>\n\
         {rows}</table>\n</body>\n</html>\n",
        hostname = report.hostname,
        node_version = report.node_version,
        os_type = report.os_type,
        os_release = report.os_release,
        cluster_start_time = report.cluster_start_time,
        total_requests = report.total_requests,
        total_rps = report.total_rps,
        total_kbs_out = report.total_kbs_out,
        total_kbs_transferred = report.total_kbs_transferred,
        rows = rows,
    )
}
