//! Fires a burst of lookups to show what a 429 carries. The library
//! reports the server's window but never paces; spreading the calls
//! out is up to the caller.

use anyhow::Result;
use maclookup::{Client, Error};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::new();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            match client.company_name("00:00:00").await {
                Ok(resp) => {
                    println!("{} - (response in {:?})", resp.info.company, resp.response_time);
                }
                Err(err @ Error::RateLimitExceeded { .. }) => {
                    let rl = err.rate_limit().cloned();
                    println!("rate limits exceeded: {err}");
                    if let Some(rl) = rl {
                        println!("window of {} requests, next reset {}", rl.limit, rl.reset);
                    }
                }
                Err(err) => println!("lookup failed: {err}"),
            }
        }));
    }

    for handle in handles {
        handle.await?;
    }

    Ok(())
}
