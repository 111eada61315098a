//! GraphQL request bodies and response envelopes for the frain backend.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::service::{Service, TimeRange};

const SERVICE_FIELDS: &str = "id, name, statusPageUrl, provider, indicator, isActive, createdAt, updatedAt";
const COMPONENT_FIELDS: &str = "id, name, status, description";
const INCIDENT_FIELDS: &str = "id, name, impact, status, isActive, createdAt, shortlink, updatedAt, resolvedAt, \
     incidentUpdates{id, body, status, createdAt, updatedAt}";

/// Body for the `getService` query of a single service.
pub fn service_query(name: &str, range: &TimeRange) -> Value {
    let query = format!(
        "{{getService(name:{name}){{{SERVICE_FIELDS}, components{{{COMPONENT_FIELDS}}}, \
         incidents(startTime:\"{start}\", endTime:\"{end}\"){{{INCIDENT_FIELDS}}}, \
         highLevelComponents{{{COMPONENT_FIELDS}}}}}}}",
        start = range.start.format("%Y-%m-%d"),
        end = range.end.format("%Y-%m-%d"),
    );
    json!({ "query": query })
}

/// Whether `name` is a GraphQL name token (`[_A-Za-z][_0-9A-Za-z]*`).
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Body for the `getAllServices` query.
pub fn service_list_query() -> Value {
    json!({ "query": "{getAllServices {name}}" })
}

/// `{"data": {"getService": ...}}`
#[derive(Debug, Deserialize)]
pub struct ServiceResponse {
    pub data: Option<ServiceData>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceData {
    #[serde(rename = "getService")]
    pub service: Option<Service>,
}

/// `{"data": {"getAllServices": [...]}}`
#[derive(Debug, Deserialize)]
pub struct ServiceListResponse {
    pub data: Option<ServiceListData>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceListData {
    #[serde(rename = "getAllServices", default)]
    pub all: Vec<ServiceName>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceName {
    pub name: String,
}
