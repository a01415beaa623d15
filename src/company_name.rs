use std::time::Instant;

use reqwest::StatusCode;
use tracing::debug;

use crate::client::{Client, COMPANY_NAME_SUFFIX};
use crate::error::{Error, Result};
use crate::model::{CompanyInfo, VendorNameResponse};
use crate::rate_limit::RateLimit;

/// Sentinel body for a prefix with no registered vendor.
const NO_COMPANY: &str = "*NO COMPANY*";
/// Sentinel body for a private registration.
const PRIVATE: &str = "*PRIVATE*";

impl Client {
    /// Company-name-only lookup, served as plain text.
    ///
    /// Unlike [`Client::lookup`], this endpoint reports a missing
    /// route with 404, which surfaces as a transport error reading
    /// "endpoint not found".
    pub async fn company_name(&self, mac: &str) -> Result<VendorNameResponse> {
        let url = self.endpoint(mac, COMPANY_NAME_SUFFIX);
        let start = Instant::now();

        let resp = self.get(&url).await?;
        let status = resp.status();
        let rate_limit = RateLimit::from_headers(resp.headers());
        debug!(
            "company name response: status={} remaining={}",
            status, rate_limit.remaining
        );

        let body = resp.text().await.map_err(|e| Error::Transport {
            message: e.to_string(),
            source: Some(e),
            rate_limit: Some(rate_limit),
        })?;
        let response_time = start.elapsed();

        match status {
            StatusCode::OK => {
                let found = body != NO_COMPANY;
                let is_private = body == PRIVATE;
                let company = if found && !is_private {
                    body
                } else {
                    String::new()
                };

                Ok(VendorNameResponse {
                    response_time,
                    rate_limit,
                    info: CompanyInfo {
                        found,
                        is_private,
                        company,
                    },
                })
            }

            StatusCode::BAD_REQUEST => {
                let message = if body.is_empty() {
                    "client request error".to_string()
                } else {
                    body
                };
                Err(Error::BadRequest {
                    message: message.to_lowercase(),
                    rate_limit,
                })
            }

            StatusCode::UNAUTHORIZED => {
                let message = if body.is_empty() {
                    "bad api key".to_string()
                } else {
                    body
                };
                Err(Error::BadApiKey { message, rate_limit })
            }

            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimitExceeded { rate_limit }),

            StatusCode::NOT_FOUND => Err(Error::transport("endpoint not found", Some(rate_limit))),

            other => Err(Error::transport(
                format!("unexpected http status: {}", other.as_u16()),
                Some(rate_limit),
            )),
        }
    }
}
