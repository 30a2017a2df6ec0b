use festivo_rs::{FestivoClient, FestivoError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("FESTIVO_API_KEY")
        .expect("Set FESTIVO_API_KEY before running the example");
    let client = FestivoClient::new(api_key);

    for (country, date, regions) in [
        ("US", "2026-12-25", None),
        ("IT", "2026-12-07", Some("IT-MILAN")),
    ] {
        match client.check_holiday(country, date, regions).await {
            Ok(result) => {
                let name = result.holiday()?.map(|h| h.name).unwrap_or_default();
                println!(
                    "{} {}: holiday={:?} {}",
                    country,
                    date,
                    result.is_holiday(),
                    name
                );
            }
            Err(FestivoError::Request { status }) => {
                eprintln!("{} {}: API returned {}", country, date, status);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
