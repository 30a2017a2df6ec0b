//! List national, regional and city holidays for a year

use festivo_rs::{FestivoClient, HolidayOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = FestivoClient::from_env()?;

    println!("=== US holidays, 2026 ===");
    let national = client.get_holidays("US", 2026, None).await?;
    for holiday in national.typed()? {
        println!("{}  {}", holiday.date, holiday.name);
    }

    println!("\n=== Scotland, 2026 ===");
    let options = HolidayOptions::new().with_type("public").with_language("en");
    let scotland = client
        .get_regional_holidays("GB", "GB-SCT", 2026, Some(&options))
        .await?;
    for holiday in scotland.typed()? {
        println!("{}  {}", holiday.date, holiday.name);
    }

    println!("\n=== Milan, 2026 ===");
    let milan = client
        .get_city_holidays("IT", "IT-MILAN", 2026, None)
        .await?;
    println!("{} holidays", milan.len());

    Ok(())
}
