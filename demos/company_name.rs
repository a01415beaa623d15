use anyhow::Result;
use maclookup::Client;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mac = std::env::args().nth(1).unwrap_or_else(|| "00:00:00".to_string());

    let mut client = Client::new();
    if let Ok(key) = std::env::var("MACLOOKUP_API_KEY") {
        client = client.with_api_key(key);
    }

    let resp = client.company_name(&mac).await?;

    println!("MAC found in database: {}", resp.info.found);
    println!("MAC is private (no company name): {}", resp.info.is_private);
    println!("Company name: {}", resp.info.company);
    println!("Api response in: {:?}", resp.response_time);
    println!(
        "Rate limits - remaining request for current time window: {}",
        resp.rate_limit.remaining
    );
    println!("Rate limits - next reset: {}", resp.rate_limit.reset);

    Ok(())
}
