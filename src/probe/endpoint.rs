use std::path::Path;
use std::time::Instant;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::enrich::json_shape::shape_of;
use crate::output::artifact::save_artifact;
use crate::output::reporter;

/// Classified outcome of one GET against one candidate URL.
#[derive(Debug, Clone, Serialize)]
pub enum ProbeOutcome {
    /// 200 response. `payload` holds the decoded body when it parsed as
    /// JSON; `raw` always carries the body text for the preview line.
    Success {
        status: u16,
        content_type: Option<String>,
        payload: Option<Value>,
        raw: String,
    },
    /// Response arrived with a non-200 status.
    Http { status: u16 },
    /// DNS, connect or timeout failure before the body could be read.
    Transport { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub url: String,
    pub outcome: ProbeOutcome,
    pub response_ms: u64,
}

fn extract_host(url: &str) -> Option<String> {
    Url::parse(url).ok().and_then(|u| u.host_str().map(|s| s.to_string()))
}

/// Issue exactly one GET against `url` and classify the result. The timeout
/// and user agent are fixed on the client. Never returns an error: every
/// failure mode is folded into the outcome.
pub async fn probe_url(client: &Client, url: &str) -> ProbeReport {
    let start = Instant::now();
    let host = extract_host(url).unwrap_or_default();
    tracing::debug!(%url, %host, "probing candidate");

    let outcome = match client.get(url).send().await {
        Err(e) => ProbeOutcome::Transport { message: e.to_string() },
        Ok(resp) => {
            let status = resp.status().as_u16();
            if status != 200 {
                ProbeOutcome::Http { status }
            } else {
                let content_type = resp
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_string());
                match resp.text().await {
                    Err(e) => ProbeOutcome::Transport { message: e.to_string() },
                    Ok(text) => {
                        let payload = serde_json::from_str::<Value>(&text).ok();
                        if payload.is_none() {
                            tracing::debug!(%url, bytes = text.len(), "body did not decode as JSON");
                        }
                        ProbeOutcome::Success { status, content_type, payload, raw: text }
                    }
                }
            }
        }
    };

    let response_ms = start.elapsed().as_millis() as u64;
    tracing::debug!(%url, response_ms, "candidate classified");

    ProbeReport { url: url.to_string(), outcome, response_ms }
}

/// Probe every candidate in order, printing the outcome trace as it goes.
/// Each successful JSON decode overwrites `artifact_path`, so the last
/// decoded payload in list order is what survives the pass. Nothing here is
/// fatal; the pass always visits every URL.
pub async fn run_pass(client: &Client, urls: &[&str], artifact_path: &Path) -> Vec<ProbeReport> {
    let mut reports = Vec::with_capacity(urls.len());
    for url in urls {
        let report = probe_url(client, url).await;
        match &report.outcome {
            ProbeOutcome::Success { status, content_type, payload, raw } => {
                reporter::print_found(&report.url, *status, content_type.as_deref());
                match payload {
                    Some(value) => {
                        reporter::print_shape(&shape_of(value));
                        match save_artifact(artifact_path, value) {
                            Ok(()) => reporter::print_saved(artifact_path),
                            Err(e) => eprintln!("   [!] Failed to save artifact: {}", e),
                        }
                    }
                    None => reporter::print_preview(raw),
                }
            }
            ProbeOutcome::Http { status } => reporter::print_status_miss(&report.url, *status),
            ProbeOutcome::Transport { message } => reporter::print_error(&report.url, message),
        }
        reports.push(report);
    }
    reports
}
