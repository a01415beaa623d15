//! maclookup: async client for the [maclookup.app](https://maclookup.app)
//! MAC address vendor API v2.
//!
//! Two operations are exposed: [`Client::lookup`] returns the full
//! vendor record for a MAC address or prefix, [`Client::company_name`]
//! returns just the company name. Every response carries the server's
//! rate-limit headers as a [`RateLimit`] snapshot; pacing requests to
//! stay inside that window is the caller's job.
//!
//! ```no_run
//! # async fn run() -> maclookup::Result<()> {
//! let client = maclookup::Client::new();
//! let resp = client.lookup("00:00:5e:00:53:00").await?;
//! if resp.info.found {
//!     println!("{} ({})", resp.info.company, resp.info.country);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod rate_limit;

mod company_name;
mod lookup;
mod mac;

pub use client::Client;
pub use error::{Error, Result};
pub use model::{CompanyInfo, LookupResponse, MacInfo, VendorNameResponse};
pub use rate_limit::RateLimit;
