use reqwest::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url =
        std::env::var("MENU_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    println!("Fetching today's menu from {}", base_url);

    let response = client.get(format!("{}/menu", base_url)).send().await?;

    println!("Status: {}", response.status());
    let menu: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&menu)?);

    Ok(())
}
