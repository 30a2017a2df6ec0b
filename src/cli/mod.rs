use crate::{FestivoClient, HolidayOptions};
use anyhow::{anyhow, Context};
use clap::{Arg, ArgMatches, Command};
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::{error, info};

/// CLI entry point for the festivo tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("FESTIVO_API_KEY").ok())
        .ok_or_else(|| {
            anyhow!("Festivo API key is required. Set FESTIVO_API_KEY environment variable or use --api-key")
        })?;

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("FESTIVO_BASE_URL").ok());

    let timeout_seconds: u64 = matches
        .get_one::<String>("timeout")
        .map(String::as_str)
        .unwrap_or("30")
        .parse()
        .context("--timeout must be a whole number of seconds")?;

    let mut client =
        FestivoClient::new(api_key).with_timeout(Duration::from_secs(timeout_seconds));
    if let Some(base_url) = base_url {
        client = client.with_base_url(base_url);
    }
    info!("Base URL: {}", client.base_url());

    let output = match execute(&client, &matches).await {
        Ok(output) => output,
        Err(e) => {
            error!("Festivo request failed: {}", e);
            println!("{}", serde_json::to_string_pretty(&e.to_error_payload())?);
            return Err(e.into());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn execute(client: &FestivoClient, matches: &ArgMatches) -> crate::Result<Value> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            let options = holiday_options(sub);
            let response = client
                .get_holidays(required(sub, "country"), year(sub), Some(&options))
                .await?;
            Ok(Value::Array(response.into_holidays()))
        }
        Some(("city", sub)) => {
            let options = holiday_options(sub);
            let response = client
                .get_city_holidays(
                    required(sub, "country"),
                    required(sub, "code"),
                    year(sub),
                    Some(&options),
                )
                .await?;
            Ok(Value::Array(response.into_holidays()))
        }
        Some(("region", sub)) => {
            let options = holiday_options(sub);
            let response = client
                .get_regional_holidays(
                    required(sub, "country"),
                    required(sub, "code"),
                    year(sub),
                    Some(&options),
                )
                .await?;
            Ok(Value::Array(response.into_holidays()))
        }
        Some(("check", sub)) => {
            let regions = sub.get_one::<String>("regions").map(String::as_str);
            let result = client
                .check_holiday(required(sub, "country"), required(sub, "date"), regions)
                .await?;
            Ok(result.into_inner())
        }
        _ => unreachable!("clap enforces a subcommand"),
    }
}

fn command() -> Command {
    Command::new("festivo")
        .version("0.1.0")
        .about("Look up public holidays with the Festivo API")
        .subcommand_required(true)
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .global(true)
                .help("Festivo API key (or set FESTIVO_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .global(true)
                .help("Festivo base URL (or set FESTIVO_BASE_URL env var)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .global(true)
                .help("Request timeout in seconds")
                .default_value("30"),
        )
        .subcommand(list_command(
            "list",
            "List holidays for a country and year",
            None,
        ))
        .subcommand(list_command(
            "city",
            "List holidays for a city (e.g. IT-MILAN)",
            Some("City code in the form {COUNTRY}-{CITY}"),
        ))
        .subcommand(list_command(
            "region",
            "List holidays for an ISO 3166-2 region (e.g. GB-SCT)",
            Some("ISO 3166-2 subdivision code"),
        ))
        .subcommand(
            Command::new("check")
                .about("Check whether a date is a holiday")
                .arg(country_arg())
                .arg(
                    Arg::new("date")
                        .help("Date in YYYY-MM-DD format")
                        .required(true),
                )
                .arg(
                    Arg::new("regions")
                        .short('r')
                        .long("regions")
                        .value_name("CODES")
                        .help("Comma-separated region or city codes"),
                ),
        )
}

fn list_command(
    name: &'static str,
    about: &'static str,
    code_help: Option<&'static str>,
) -> Command {
    let mut command = Command::new(name).about(about).arg(country_arg());
    if let Some(help) = code_help {
        command = command.arg(Arg::new("code").help(help).required(true));
    }
    command
        .arg(
            Arg::new("year")
                .help("Year, e.g. 2026")
                .required(true)
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("regions")
                .short('r')
                .long("regions")
                .value_name("CODES")
                .help("Comma-separated region or city codes"),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("TYPE")
                .help("Holiday type filter, e.g. public"),
        )
        .arg(
            Arg::new("language")
                .short('l')
                .long("language")
                .value_name("LANG")
                .help("Language for holiday names"),
        )
        .arg(
            Arg::new("timezone")
                .long("timezone")
                .value_name("TZ")
                .help("IANA timezone, e.g. Europe/London"),
        )
}

fn country_arg() -> Arg {
    Arg::new("country")
        .help("ISO 3166-1 alpha-2 country code")
        .required(true)
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn year(matches: &ArgMatches) -> i32 {
    matches.get_one::<i32>("year").copied().unwrap_or_default()
}

fn holiday_options(matches: &ArgMatches) -> HolidayOptions {
    let mut options = HolidayOptions::new();
    if let Some(regions) = matches.get_one::<String>("regions") {
        options = options.with_regions(regions);
    }
    if let Some(holiday_type) = matches.get_one::<String>("type") {
        options = options.with_type(holiday_type);
    }
    if let Some(language) = matches.get_one::<String>("language") {
        options = options.with_language(language);
    }
    if let Some(timezone) = matches.get_one::<String>("timezone") {
        options = options.with_timezone(timezone);
    }
    options
}
