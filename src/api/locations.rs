//! Locations service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{Location, WebexId};
use crate::Result;

/// Service for organization locations.
pub struct LocationsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing locations.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsQuery {
    /// Location name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Location ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<WebexId>,
    /// Organization to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl LocationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List locations.
    pub fn list(&self, query: LocationsQuery) -> PaginatedStream<Location> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/locations").build_with_query(&query)
    }

    /// Get a location by ID.
    pub async fn get(&self, location_id: &WebexId) -> Result<Location> {
        self.inner
            .get(&format!("/locations/{}", location_id))
            .await
    }
}
