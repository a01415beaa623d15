use std::net::IpAddr;
use std::time::Duration;

use reqwest::header;
use tracing::debug;

use crate::error::{Error, Result};
use crate::mac::clean_mac;

pub(crate) const API_URI_PREFIX: &str = "https://api.maclookup.app";
pub(crate) const API_MAC_PATH: &str = "/v2/macs/";
pub(crate) const COMPANY_NAME_SUFFIX: &str = "/company/name";
pub(crate) const API_KEY_PARAM: &str = "?apiKey=";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub(crate) const USER_AGENT: &str =
    concat!("MacLookupClient/", env!("CARGO_PKG_VERSION"), " (https://maclookup.app)");

/// Client for the maclookup.app API v2.
///
/// Configuration (prefix URI, API key, timeout) is set up front with
/// the `with_*` builders; lookups never mutate the client, so one
/// instance can serve concurrent calls.
///
/// ```no_run
/// # async fn run() -> maclookup::Result<()> {
/// let client = maclookup::Client::new().with_timeout(std::time::Duration::from_secs(10));
/// let resp = client.lookup("00:00:00").await?;
/// println!("{}", resp.info.company);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) prefix_uri: String,
    pub(crate) api_key: Option<String>,
    pub(crate) timeout: Duration,
}

impl Client {
    pub fn new() -> Self {
        Client {
            http: reqwest::Client::new(),
            prefix_uri: API_URI_PREFIX.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sends the given API key with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Per-request deadline covering connect, send and body read.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Points the client at a different API host.
    ///
    /// Trailing slashes are stripped. An explicit `http://` or
    /// `https://` scheme is kept; a bare literal IP (optionally with
    /// port or path) defaults to `http://` so local test servers work
    /// unchanged, and anything else defaults to `https://`.
    pub fn with_prefix_uri(mut self, prefix_uri: &str) -> Self {
        self.prefix_uri = normalize_prefix_uri(prefix_uri);
        self
    }

    /// Issues the GET shared by both endpoints: fixed User-Agent,
    /// accept-anything, per-request deadline.
    pub(crate) async fn get(&self, url: &str) -> Result<reqwest::Response> {
        // Keep the apiKey query parameter out of the logs.
        let path = url.split('?').next().unwrap_or(url);
        debug!("GET {path}");
        self.http
            .get(url)
            .timeout(self.timeout)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::ACCEPT, "*")
            .send()
            .await
            .map_err(Error::from_send)
    }

    pub(crate) fn endpoint(&self, mac: &str, suffix: &str) -> String {
        let mut url = format!("{}{}{}{}", self.prefix_uri, API_MAC_PATH, clean_mac(mac), suffix);
        if let Some(key) = &self.api_key {
            url.push_str(API_KEY_PARAM);
            url.push_str(key);
        }
        url
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new()
    }
}

fn normalize_prefix_uri(prefix_uri: &str) -> String {
    let trimmed = prefix_uri.trim_end_matches('/');

    if prefix_uri.starts_with("http://") || prefix_uri.starts_with("https://") {
        return trimmed.to_string();
    }

    if is_ip(trimmed) {
        format!("http://{trimmed}")
    } else {
        format!("https://{trimmed}")
    }
}

/// Does `host` name a literal IP? Handles `1.2.3.4`, `1.2.3.4:8080`,
/// `1.2.3.4/path` and raw IPv6 literals such as `::1`.
fn is_ip(host: &str) -> bool {
    // Two or more colons can only be an IPv6 literal.
    if host.matches(':').count() >= 2 {
        return host.parse::<IpAddr>().is_ok();
    }

    host.split(':')
        .next()
        .and_then(|h| h.split('/').next())
        .map(|h| h.parse::<IpAddr>().is_ok())
        .unwrap_or(false)
}
