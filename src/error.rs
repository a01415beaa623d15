use crate::rate_limit::RateLimit;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a lookup can fail with.
///
/// Variants produced after response headers arrive carry the parsed
/// [`RateLimit`] snapshot, so a caller hitting `RateLimitExceeded`
/// can read the window and reset instant straight off the error.
#[derive(Debug)]
pub enum Error {
    /// The request could not be built, e.g. a malformed URL.
    Request(reqwest::Error),
    /// Network-level failure, including timeouts, or an HTTP status
    /// outside the API contract.
    Transport {
        message: String,
        source: Option<reqwest::Error>,
        rate_limit: Option<RateLimit>,
    },
    /// Status 400: the server rejected the input.
    BadRequest { message: String, rate_limit: RateLimit },
    /// Status 401: missing or invalid API key.
    BadApiKey { message: String, rate_limit: RateLimit },
    /// Status 429: quota exhausted for the current window.
    RateLimitExceeded { rate_limit: RateLimit },
    /// Status 200 but the body failed to decode or reported failure.
    MalformedResponse {
        source: Option<serde_json::Error>,
        rate_limit: RateLimit,
    },
}

impl Error {
    /// Rate-limit snapshot parsed from the failing response, if one
    /// was received.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            Error::Request(_) => None,
            Error::Transport { rate_limit, .. } => rate_limit.as_ref(),
            Error::BadRequest { rate_limit, .. }
            | Error::BadApiKey { rate_limit, .. }
            | Error::RateLimitExceeded { rate_limit }
            | Error::MalformedResponse { rate_limit, .. } => Some(rate_limit),
        }
    }

    pub(crate) fn transport(message: impl Into<String>, rate_limit: Option<RateLimit>) -> Self {
        Error::Transport {
            message: message.into(),
            source: None,
            rate_limit,
        }
    }

    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::Request(err)
        } else {
            Error::Transport {
                message: err.to_string(),
                source: Some(err),
                rate_limit: None,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Request(e) => write!(f, "{e}"),
            Error::Transport { message, .. } => f.write_str(message),
            Error::BadRequest { message, .. } => f.write_str(message),
            Error::BadApiKey { message, .. } => f.write_str(message),
            Error::RateLimitExceeded { rate_limit } => write!(
                f,
                "rate limits exceeded. current limit is {}. next reset {}",
                rate_limit.limit,
                rate_limit.reset.to_rfc3339(),
            ),
            Error::MalformedResponse { source: Some(e), .. } => {
                write!(f, "unexpected api response: {e}")
            }
            Error::MalformedResponse { source: None, .. } => {
                f.write_str("unexpected api response")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(e) => Some(e),
            Error::Transport { source: Some(e), .. } => Some(e),
            Error::MalformedResponse { source: Some(e), .. } => Some(e),
            _ => None,
        }
    }
}
