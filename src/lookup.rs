use std::time::Instant;

use reqwest::StatusCode;
use tracing::debug;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::model::{ApiErrorResponse, ApiMacResponse, LookupResponse};
use crate::rate_limit::RateLimit;

impl Client {
    /// Full vendor lookup for a MAC address or prefix.
    ///
    /// The MAC is normalized first, so any common separator style is
    /// accepted. On a 429 the returned [`Error::RateLimitExceeded`]
    /// carries the server-reported window and reset instant.
    pub async fn lookup(&self, mac: &str) -> Result<LookupResponse> {
        let url = self.endpoint(mac, "");
        let start = Instant::now();

        let resp = self.get(&url).await?;
        let status = resp.status();
        let rate_limit = RateLimit::from_headers(resp.headers());
        debug!("lookup response: status={} remaining={}", status, rate_limit.remaining);

        match status {
            StatusCode::OK => {
                let body = resp.bytes().await.map_err(|e| Error::Transport {
                    message: e.to_string(),
                    source: Some(e),
                    rate_limit: Some(rate_limit),
                })?;
                let response_time = start.elapsed();

                let api: ApiMacResponse = match serde_json::from_slice(&body) {
                    Ok(api) => api,
                    Err(e) => {
                        return Err(Error::MalformedResponse {
                            source: Some(e),
                            rate_limit,
                        })
                    }
                };
                if !api.success {
                    return Err(Error::MalformedResponse {
                        source: None,
                        rate_limit,
                    });
                }

                Ok(LookupResponse {
                    response_time,
                    rate_limit,
                    info: api.into(),
                })
            }

            StatusCode::BAD_REQUEST => {
                let message = match resp.json::<ApiErrorResponse>().await {
                    Ok(e) => e.error,
                    Err(_) => "client request error".to_string(),
                };
                Err(Error::BadRequest {
                    message: message.to_lowercase(),
                    rate_limit,
                })
            }

            StatusCode::UNAUTHORIZED => {
                let message = match resp.json::<ApiErrorResponse>().await {
                    Ok(e) => e.error,
                    Err(_) => "bad api key".to_string(),
                };
                Err(Error::BadApiKey { message, rate_limit })
            }

            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimitExceeded { rate_limit }),

            other => Err(Error::transport(
                format!("unexpected http status: {}", other.as_u16()),
                Some(rate_limit),
            )),
        }
    }
}
