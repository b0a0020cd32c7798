//! Examples for using the CareCost Server API
//!
//! Start the server first (`cargo run -p carecost-server`), then run
//! `cargo run -p carecost-server --example api_client`.

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Providers and plans
    println!("2. Insurance Providers:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/insurance"))
        .send()
        .await?;
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Type-ahead suggestions
    println!("3. Procedure Suggestions for 'mri':");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/procedures"))
        .query(&[("q", "mri"), ("limit", "5")])
        .send()
        .await?;
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Cash search
    println!("4. Cash Search:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/search"))
        .json(&json!({
            "procedure": "72148",
            "zipCode": "10016"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Insurance search with a plan, nearest first
    println!("5. Aetna PPO Search by Distance:");
    let resp = client
        .post(format!("{SERVER_URL}/api/v1/search"))
        .json(&json!({
            "procedure": "MRI Lumbar",
            "zipCode": "10016",
            "insurance": "aetna",
            "plan": "PPO",
            "sort": "distance"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Invalid query
    println!("6. Invalid ZIP:");
    let resp = client
        .get(format!("{SERVER_URL}/api/v1/search"))
        .query(&[("procedure", "72148"), ("zipCode", "123")])
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
