//! festivo-rs: A lightweight, async Rust client for the Festivo public holidays API
//!
//! The client is a thin pass-through: it builds the query, issues an
//! authenticated GET and hands back the decoded JSON. Holiday records are kept
//! as [`serde_json::Value`]; typed accessors are available when you want them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use festivo_rs::{FestivoClient, HolidayOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_key = std::env::var("FESTIVO_API_KEY")?;
//!     let client = FestivoClient::new(api_key);
//!
//!     let holidays = client.get_holidays("US", 2026, None).await?;
//!     for holiday in holidays.typed()? {
//!         println!("{} {}", holiday.date, holiday.name);
//!     }
//!
//!     let scotland = HolidayOptions::new().with_language("en");
//!     let regional = client
//!         .get_regional_holidays("GB", "GB-SCT", 2026, Some(&scotland))
//!         .await?;
//!     println!("{} Scottish holidays", regional.len());
//!
//!     let check = client.check_holiday("US", "2026-12-25", None).await?;
//!     println!("{:?}", check.is_holiday());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub(crate) mod services;
pub mod types;

pub use client::FestivoClient;
pub use error::{FestivoError, Result};
pub use types::{CheckHolidayResult, Holiday, HolidayOptions, HolidaysResponse, QueryParams};

#[cfg(feature = "cli")]
pub mod cli;
