use std::time::Duration;

use tracing::debug;

use crate::{
    error::{FestivoError, Result},
    services::api_client::ApiTransport,
    types::{CheckHolidayResult, HolidayOptions, HolidaysResponse, QueryParams},
};

const LIST_PATH: &str = "/v3/public-holidays/list";
const CHECK_PATH: &str = "/v3/public-holidays/check";

/// Client for the Festivo public holidays API
#[derive(Clone, Debug)]
pub struct FestivoClient {
    transport: ApiTransport,
}

impl FestivoClient {
    /// Create a client against the default endpoint. An empty key sends no
    /// `Authorization` header.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            transport: ApiTransport::new(api_key.into()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.transport.set_base_url(base_url);
        self
    }

    /// Per-request timeout, covering connect through body read
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.set_timeout(timeout);
        self
    }

    /// Build a client from `FESTIVO_API_KEY` and, if set, `FESTIVO_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FESTIVO_API_KEY").map_err(|_| {
            FestivoError::Config(
                "FESTIVO_API_KEY environment variable must be set before creating a client"
                    .to_string(),
            )
        })?;
        let mut client = Self::new(api_key);
        if let Ok(base_url) = std::env::var("FESTIVO_BASE_URL") {
            client.transport.set_base_url(base_url);
        }
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.transport.timeout()
    }

    pub fn has_api_key(&self) -> bool {
        self.transport.has_api_key()
    }

    /// All holidays for `country` in `year`.
    ///
    /// `options` may add filters such as `regions`, but never replaces
    /// `country` or `year`.
    pub async fn get_holidays(
        &self,
        country: &str,
        year: i32,
        options: Option<&HolidayOptions>,
    ) -> Result<HolidaysResponse> {
        let params = list_params(country, year, options);
        let body = self.transport.get_json(LIST_PATH, &params).await?;
        let response = HolidaysResponse::from_body(body)?;
        debug!(country, year, count = response.len(), "listed holidays");
        Ok(response)
    }

    /// Holidays for a city, e.g. `IT-MILAN`. Any `regions` in `options` is
    /// replaced by `city_code`.
    pub async fn get_city_holidays(
        &self,
        country: &str,
        city_code: &str,
        year: i32,
        options: Option<&HolidayOptions>,
    ) -> Result<HolidaysResponse> {
        let options = with_forced_regions(options, city_code);
        self.get_holidays(country, year, Some(&options)).await
    }

    /// Holidays for an ISO 3166-2 subdivision, e.g. `GB-SCT`. Any `regions`
    /// in `options` is replaced by `region_code`.
    pub async fn get_regional_holidays(
        &self,
        country: &str,
        region_code: &str,
        year: i32,
        options: Option<&HolidayOptions>,
    ) -> Result<HolidaysResponse> {
        let options = with_forced_regions(options, region_code);
        self.get_holidays(country, year, Some(&options)).await
    }

    /// Whether `date` (`YYYY-MM-DD`) is a holiday. The body is returned as is.
    pub async fn check_holiday(
        &self,
        country: &str,
        date: &str,
        regions: Option<&str>,
    ) -> Result<CheckHolidayResult> {
        let params = check_params(country, date, regions);
        let body = self.transport.get_json(CHECK_PATH, &params).await?;
        Ok(CheckHolidayResult::new(body))
    }
}

fn list_params(country: &str, year: i32, options: Option<&HolidayOptions>) -> QueryParams {
    let mut params = QueryParams::new();
    params.set("country", country);
    params.set("year", year.to_string());

    if let Some(options) = options {
        for (key, value) in options.to_query().iter() {
            if !params.set_if_absent(key, value) {
                debug!(key, "ignoring option that would override a fixed parameter");
            }
        }
    }

    params
}

fn check_params(country: &str, date: &str, regions: Option<&str>) -> QueryParams {
    let mut params = QueryParams::new();
    params.set("country", country);
    params.set("date", date);
    if let Some(regions) = regions.filter(|r| !r.is_empty()) {
        params.set("regions", regions);
    }
    params
}

fn with_forced_regions(options: Option<&HolidayOptions>, regions: &str) -> HolidayOptions {
    let mut options = options.cloned().unwrap_or_default();
    options.set_regions(regions);
    options
}
