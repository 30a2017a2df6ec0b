use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{FestivoError, Result},
    types::holiday::Holiday,
};

/// Holidays returned by the list endpoint, passed through undecoded.
#[derive(Clone, Debug, PartialEq)]
pub struct HolidaysResponse {
    holidays: Vec<Value>,
    total: Option<u64>,
}

impl HolidaysResponse {
    /// Extract the `holidays` array from a list response body
    pub fn from_body(body: Value) -> Result<Self> {
        let mut object = match body {
            Value::Object(object) => object,
            other => {
                return Err(FestivoError::Decode(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let total = object.get("total").and_then(Value::as_u64);

        let holidays = match object.remove("holidays") {
            Some(Value::Array(holidays)) => holidays,
            Some(other) => {
                return Err(FestivoError::Decode(format!(
                    "`holidays` must be an array, got {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(FestivoError::Decode(
                    "response body has no `holidays` array".to_string(),
                ))
            }
        };

        Ok(Self { holidays, total })
    }

    pub fn holidays(&self) -> &[Value] {
        &self.holidays
    }

    pub fn into_holidays(self) -> Vec<Value> {
        self.holidays
    }

    /// `total` as reported by the service, when present
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Decode every record into [`Holiday`]
    pub fn typed(&self) -> Result<Vec<Holiday>> {
        self.typed_as()
    }

    /// Decode every record into a caller-supplied type
    pub fn typed_as<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.holidays
            .iter()
            .enumerate()
            .map(|(index, record)| {
                deserialize_record(record).map_err(|err| match err {
                    FestivoError::Decode(message) => {
                        FestivoError::Decode(format!("holidays[{}]: {}", index, message))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

impl IntoIterator for HolidaysResponse {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.into_iter()
    }
}

/// Body of the check endpoint, returned verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckHolidayResult {
    body: Value,
}

impl CheckHolidayResult {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_inner(self) -> Value {
        self.body
    }

    /// `is_holiday` flag, if the body carries one
    pub fn is_holiday(&self) -> Option<bool> {
        self.body.get("is_holiday").and_then(Value::as_bool)
    }

    /// The matching holiday, decoded. `Ok(None)` when absent or null.
    pub fn holiday(&self) -> Result<Option<Holiday>> {
        match self.body.get("holiday") {
            None | Some(Value::Null) => Ok(None),
            Some(record) => deserialize_record(record).map(Some),
        }
    }
}

fn deserialize_record<T: DeserializeOwned>(record: &Value) -> Result<T> {
    serde_path_to_error::deserialize(record).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        FestivoError::Decode(format!(
            "failed to decode holiday at {}: {}",
            location,
            err.inner()
        ))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
