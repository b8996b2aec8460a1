/// Upstream classification service the proxy relays to.
pub const DEFAULT_UPSTREAM: &str = "http://13.204.62.156";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub bind: String,
    pub port: u16,
    /// Base URL of the upstream service, without the `/classify` path.
    pub upstream_url: String,
    /// Answer browser preflight requests from any origin.
    pub cors: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM.to_string(),
            cors: false,
        }
    }
}

impl ProxyConfig {
    pub fn with_upstream(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            ..Self::default()
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Full URL every proxied request is sent to.
    pub fn classify_url(&self) -> String {
        format!("{}/classify", self.upstream_url.trim_end_matches('/'))
    }
}
