use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// User agent sent with every probe request.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// Per-request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Create the HTTP client used for the probe pass: pooled connections,
/// compressed transfer, bounded redirects, fixed user agent and timeout.
pub fn create_probe_client() -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = create_probe_client();
        let _ = client;
    }
}
