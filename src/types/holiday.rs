use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of a single holiday record.
///
/// The service owns the record shape; fields it does not document here are
/// kept in `extra` rather than rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_local: Option<String>,
    #[serde(rename = "type", default)]
    pub holiday_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub subdivisions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
