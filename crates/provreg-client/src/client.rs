//! Registry search client.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;
use crate::filter::SearchFilter;

/// Path of the search endpoint, relative to the registry base URL.
const SEARCH_PATH: &str = "/api/v1/events/search";

/// A source of event search results.
///
/// The HTTP client implements this; tests substitute in-memory doubles.
pub trait EventSearch {
    /// Returns the events matching `filter`, restricted to `fields`.
    ///
    /// Result order is the service's order; no reordering happens here.
    fn search(
        &self,
        filter: &SearchFilter,
        fields: &BTreeSet<String>,
    ) -> Result<Vec<Value>, ClientError>;
}

/// Wire shape of a search request.
#[derive(Serialize)]
struct SearchRequest<'a> {
    filters: &'a SearchFilter,
    fields: &'a BTreeSet<String>,
}

/// Blocking HTTP client for the event registry service.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RegistryClient {
    /// Creates a client for the registry at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("provreg/", env!("CARGO_PKG_VERSION")))
            .use_rustls_tls()
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }
}

impl EventSearch for RegistryClient {
    fn search(
        &self,
        filter: &SearchFilter,
        fields: &BTreeSet<String>,
    ) -> Result<Vec<Value>, ClientError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        let request = SearchRequest {
            filters: filter,
            fields,
        };

        debug!(url = %url, "searching events");
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .map_err(ClientError::Transport)?;

        let status = response.status();
        let body = response.text().map_err(ClientError::Transport)?;
        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        let events: Vec<Value> = serde_json::from_str(&body)?;
        debug!(count = events.len(), "search returned");
        Ok(events)
    }
}
