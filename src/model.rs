use std::time::Duration;

use serde::Deserialize;

use crate::rate_limit::RateLimit;

/// Vendor/ownership record for a MAC address block.
///
/// When `found` is false every string field is empty and every flag
/// is false, mirroring what the server sends for unassigned prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacInfo {
    pub found: bool,
    pub mac_prefix: String,
    pub company: String,
    pub address: String,
    pub country: String,
    pub block_start: String,
    pub block_end: String,
    pub block_size: i64,
    pub block_type: String,
    pub updated: String,
    /// Prefix belongs to the locally-administered (randomized) range.
    pub is_rand: bool,
    /// Registration is private; the owner is not published.
    pub is_private: bool,
}

/// Company-name-only view served by the `/company/name` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyInfo {
    pub found: bool,
    pub is_private: bool,
    pub company: String,
}

/// Outcome of [`Client::lookup`](crate::Client::lookup).
#[derive(Debug, Clone)]
pub struct LookupResponse {
    /// Wall time from dispatch to the body being fully read.
    pub response_time: Duration,
    pub rate_limit: RateLimit,
    pub info: MacInfo,
}

/// Outcome of [`Client::company_name`](crate::Client::company_name).
#[derive(Debug, Clone)]
pub struct VendorNameResponse {
    pub response_time: Duration,
    pub rate_limit: RateLimit,
    pub info: CompanyInfo,
}

/// Wire shape of a v2 full-lookup success body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ApiMacResponse {
    pub success: bool,
    pub found: bool,
    pub mac_prefix: String,
    pub company: String,
    pub address: String,
    pub country: String,
    pub block_start: String,
    pub block_end: String,
    pub block_size: i64,
    pub block_type: String,
    pub updated: String,
    pub is_rand: bool,
    pub is_private: bool,
}

/// Wire shape of a v2 error body (400/401). Only `error` feeds the
/// returned message; the rest is kept for completeness of the format.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(dead_code)]
pub(crate) struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: i64,
    pub more_info: String,
}

impl From<ApiMacResponse> for MacInfo {
    fn from(api: ApiMacResponse) -> Self {
        MacInfo {
            found: api.found,
            mac_prefix: api.mac_prefix,
            company: api.company,
            address: api.address,
            country: api.country,
            block_start: api.block_start,
            block_end: api.block_end,
            block_size: api.block_size,
            block_type: api.block_type,
            updated: api.updated,
            is_rand: api.is_rand,
            is_private: api.is_private,
        }
    }
}
