//! Client for the frain status backend.
//!
//! The backend speaks GraphQL over a single POST endpoint. [`ServiceDirectory`]
//! is the seam the CLI depends on; [`GraphQlClient`] is the HTTP implementation.

mod query;

use std::collections::BTreeSet;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FrainError, Result};
use crate::service::{Service, TimeRange};

use query::{ServiceListResponse, ServiceResponse};

/// Backend used when neither `--host`, `FRAIN_HOST` nor a config file names one
pub const DEFAULT_HOST: &str = "https://frain-server.herokuapp.com/graphql";

/// Upper bound for a single backend request (30 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of service status records.
#[allow(async_fn_in_trait)]
pub trait ServiceDirectory {
    /// Fetches `name` with its components and the incidents inside `range`.
    async fn service(&self, name: &str, range: &TimeRange) -> Result<Service>;

    /// Lower-cased, de-duplicated names of every service the backend tracks.
    async fn service_names(&self) -> Result<Vec<String>>;
}

/// [`ServiceDirectory`] backed by the frain GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    host: String,
}

impl GraphQlClient {
    /// Creates a client posting to `host`.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("frain/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            host: host.into(),
        })
    }

    async fn post<T: DeserializeOwned>(&self, body: &Value) -> Result<T> {
        log::debug!("POST {}", self.host);

        let response = self
            .http
            .post(&self.host)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            log::warn!("Undecodable response from {}: {}", self.host, e);
            FrainError::Decode(e)
        })
    }
}

impl ServiceDirectory for GraphQlClient {
    async fn service(&self, name: &str, range: &TimeRange) -> Result<Service> {
        // the name is spliced into the query text unquoted
        if !query::is_name(name) {
            log::debug!("Refusing to query malformed service name {:?}", name);
            return Err(FrainError::UnknownService {
                name: name.to_string(),
            });
        }

        let response: ServiceResponse = self.post(&query::service_query(name, range)).await?;

        let service = response
            .data
            .and_then(|data| data.service)
            .filter(|service| service.name == name)
            .ok_or_else(|| FrainError::UnknownService {
                name: name.to_string(),
            })?;

        log::info!(
            "Fetched {}: {} components, {} incidents",
            service.name,
            service.components.len(),
            service.incidents.len()
        );
        Ok(service)
    }

    async fn service_names(&self) -> Result<Vec<String>> {
        let response: ServiceListResponse = self.post(&query::service_list_query()).await?;

        Ok(unique_names(
            response
                .data
                .map(|data| data.all)
                .unwrap_or_default()
                .into_iter()
                .map(|s| s.name),
        ))
    }
}

fn unique_names(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
