//! Workspaces service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{Workspace, WorkspaceCallingType, WorkspaceType, WorkspaceUpdate, WebexId};
use crate::{Error, Result};

/// Service for workspaces.
pub struct WorkspacesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing workspaces.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacesQuery {
    /// Organization to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// Webex Calling location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Floor within the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_id: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Capacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Kind of workspace
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workspace_type: Option<WorkspaceType>,
    /// Calling service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling: Option<WorkspaceCallingType>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl WorkspacesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List workspaces.
    pub fn list(&self, query: WorkspacesQuery) -> PaginatedStream<Workspace> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/workspaces").build_with_query(&query)
    }

    /// Get a workspace by ID.
    pub async fn get(&self, workspace_id: &WebexId) -> Result<Workspace> {
        self.inner
            .get(&format!("/workspaces/{}", workspace_id))
            .await
    }

    /// Create a workspace. `display_name` is required.
    pub async fn create(&self, workspace: &WorkspaceUpdate) -> Result<Workspace> {
        if !workspace.display_name.is_value() {
            return Err(Error::InvalidInput(
                "display_name is required to create a workspace".to_string(),
            ));
        }
        tracing::info!(display_name = ?workspace.display_name.as_ref(), "Creating workspace");
        self.inner.post("/workspaces", workspace).await
    }

    /// Update a workspace.
    pub async fn update(
        &self,
        workspace_id: &WebexId,
        update: &WorkspaceUpdate,
    ) -> Result<Workspace> {
        self.inner
            .put(&format!("/workspaces/{}", workspace_id), update)
            .await
    }

    /// Delete a workspace and the devices in it.
    pub async fn delete(&self, workspace_id: &WebexId) -> Result<()> {
        tracing::info!(%workspace_id, "Deleting workspace");
        self.inner
            .delete(&format!("/workspaces/{}", workspace_id))
            .await
    }
}
