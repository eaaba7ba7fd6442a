use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::net::TcpStream;
use tokio::time::timeout;

use super::Connectivity;

/// How long a single probe may take before the endpoint counts as down.
const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Well-known public resolvers; one successful connect means online.
const DEFAULT_ENDPOINTS: &[&str] = &["1.1.1.1:53", "8.8.8.8:53"];

/// [`Connectivity`] via a short TCP dial against a list of endpoints.
pub struct SystemConnectivity {
    endpoints: Vec<String>,
}

impl SystemConnectivity {
    pub fn new() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Probes the given `host:port` endpoints instead of the defaults.
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        Self { endpoints }
    }
}

impl Default for SystemConnectivity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connectivity for SystemConnectivity {
    async fn is_reachable(&self) -> bool {
        for endpoint in &self.endpoints {
            match timeout(PROBE_TIMEOUT, TcpStream::connect(endpoint.as_str())).await {
                Ok(Ok(_)) => return true,
                Ok(Err(err)) => debug!("connectivity probe {} failed: {}", endpoint, err),
                Err(_) => debug!("connectivity probe {} timed out", endpoint),
            }
        }
        false
    }
}
