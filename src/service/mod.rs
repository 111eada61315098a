//! Status records returned by the frain backend.
//!
//! Field names follow the backend's camelCase JSON. Anything the query did not
//! ask for is left at its default.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Services known to the frain backend at the time of writing.
///
/// The authoritative list comes from [`crate::client::ServiceDirectory::service_names`].
pub const SUPPORTED_SERVICES: &[&str] = &[
    "github",
    "twilio",
    "fastly",
    "bitbucket",
    "circle_ci",
    "status_page",
];

/// An external service whose availability is being checked
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub page_id: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub status_page_url: String,
    #[serde(deserialize_with = "nullable")]
    pub provider: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub indicator: String,

    pub is_active: bool,

    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(deserialize_with = "nullable")]
    pub components: Vec<Component>,
    #[serde(deserialize_with = "nullable")]
    pub high_level_components: Vec<Component>,
    #[serde(deserialize_with = "nullable")]
    pub incidents: Vec<Incident>,
}

impl Service {
    /// Number of components reporting `operational`.
    pub fn operational_components(&self) -> usize {
        self.components
            .iter()
            .filter(|c| c.status == "operational")
            .count()
    }
}

/// A single component of a service, e.g. "API Requests"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Component {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub service_id: String,
    #[serde(deserialize_with = "nullable")]
    pub component_id: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,

    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// An incident reported on a service's status page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub service_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub incident_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub impact: String,
    #[serde(default, deserialize_with = "nullable")]
    pub shortlink: String,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub resolved_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "nullable")]
    pub incident_updates: Vec<IncidentUpdate>,
}

/// A progress update posted to an existing incident
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncidentUpdate {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub incident_update_id: String,
    #[serde(deserialize_with = "nullable")]
    pub incident_id: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub body: String,

    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// Date window for incident queries, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    /// Everything from the Unix epoch up to `today`.
    pub fn until(today: NaiveDate) -> Self {
        Self {
            start: NaiveDate::default(),
            end: today,
        }
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::until(Utc::now().date_naive())
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
