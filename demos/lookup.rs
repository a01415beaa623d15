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

    let resp = client.lookup(&mac).await?;
    println!("{:#?}", resp);

    Ok(())
}
