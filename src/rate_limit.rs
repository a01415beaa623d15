use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;

pub(crate) const X_RATE_LIMIT: &str = "X-RateLimit-Limit";
pub(crate) const X_RATE_REMAINING: &str = "X-RateLimit-Remaining";
pub(crate) const X_RATE_RESET: &str = "X-RateLimit-Reset";

/// Server-reported rate-limit window, parsed from the `X-RateLimit-*`
/// response headers on every response, error or not.
///
/// Parsing is best-effort: a missing or malformed `limit`/`remaining`
/// header yields `-1`, a malformed `reset` yields the Unix epoch. The
/// library never paces requests itself; callers use this snapshot to
/// schedule their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window, `-1` when unknown.
    pub limit: i64,
    /// Requests left in the current window, `-1` when unknown.
    pub remaining: i64,
    /// Instant the window resets, Unix epoch when unknown.
    pub reset: DateTime<Utc>,
}

impl Default for RateLimit {
    fn default() -> Self {
        RateLimit {
            limit: -1,
            remaining: -1,
            reset: DateTime::UNIX_EPOCH,
        }
    }
}

impl RateLimit {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        RateLimit {
            limit: parse_limit(header_str(headers, X_RATE_LIMIT)),
            remaining: parse_int(header_str(headers, X_RATE_REMAINING)),
            reset: parse_epoch(header_str(headers, X_RATE_RESET)),
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// The limit header may carry policy annotations, e.g. `"2, 2;window=1"`.
/// Only the integer before the first `", "` counts.
fn parse_limit(value: &str) -> i64 {
    let first = value.split(", ").next().unwrap_or_default();
    first.parse().unwrap_or(-1)
}

fn parse_int(value: &str) -> i64 {
    value.parse().unwrap_or(-1)
}

fn parse_epoch(value: &str) -> DateTime<Utc> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or(DateTime::UNIX_EPOCH)
}
