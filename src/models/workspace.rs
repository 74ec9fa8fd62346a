//! Workspace models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{HotdeskingStatus, WorkspaceCallingType, WorkspaceType};
use super::field::Field;
use super::primitives::WebexId;

/// A room, desk or shared area holding Webex devices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Unique identifier
    pub id: WebexId,
    /// Organization the workspace belongs to
    #[serde(default)]
    pub org_id: Option<WebexId>,
    /// Webex Calling location
    #[serde(default)]
    pub location_id: Option<WebexId>,
    /// Legacy workspace location
    #[serde(default)]
    pub workspace_location_id: Option<String>,
    /// Floor within the location
    #[serde(default)]
    pub floor_id: Option<String>,
    /// Name
    #[serde(default)]
    pub display_name: Option<String>,
    /// How many people fit
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Kind of workspace
    #[serde(default, rename = "type")]
    pub workspace_type: Option<WorkspaceType>,
    /// SIP address to call
    #[serde(default)]
    pub sip_address: Option<String>,
    /// When the workspace was created
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Calling setup
    #[serde(default)]
    pub calling: Option<WorkspaceCalling>,
    /// Calendar integration
    #[serde(default)]
    pub calendar: Option<WorkspaceCalendar>,
    /// Whether the workspace can be booked as a hot desk
    #[serde(default)]
    pub hotdesking_status: Option<HotdeskingStatus>,
    /// Device platform, `collaborationDevices` or `phones`
    #[serde(default)]
    pub supported_devices: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Calling configuration of a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCalling {
    /// Calling service
    #[serde(rename = "type")]
    pub calling_type: WorkspaceCallingType,
    /// Webex Calling details, present for `webexCalling`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webex_calling: Option<WorkspaceWebexCalling>,
}

/// Webex Calling details of a workspace.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceWebexCalling {
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Calling location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Calling licenses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<WebexId>,
}

/// Calendar integration of a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceCalendar {
    /// Calendar service, e.g. `none`, `google` or `microsoft`
    #[serde(rename = "type")]
    pub calendar_type: String,
    /// Calendar email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// Request body for creating or updating a workspace.
///
/// Creating requires `display_name`. Updating replaces the whole workspace,
/// so start from [`WorkspaceUpdate::from_workspace`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceUpdate {
    /// Name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub display_name: Field<String>,
    /// Webex Calling location
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<WebexId>,
    /// Floor within the location
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub floor_id: Field<String>,
    /// How many people fit
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub capacity: Field<u32>,
    /// Kind of workspace
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub workspace_type: Field<WorkspaceType>,
    /// Calling setup
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub calling: Field<WorkspaceCalling>,
    /// Calendar integration
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub calendar: Field<WorkspaceCalendar>,
    /// Hot desking
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub hotdesking_status: Field<HotdeskingStatus>,
    /// Device platform
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub supported_devices: Field<String>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub notes: Field<String>,
}

impl WorkspaceUpdate {
    /// A create request for a workspace with this name.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Field::Value(display_name.into()),
            ..Default::default()
        }
    }

    /// Start an update from an existing workspace.
    pub fn from_workspace(workspace: &Workspace) -> Self {
        fn opt<T: Clone>(v: &Option<T>) -> Field<T> {
            v.clone().map(Field::Value).unwrap_or_default()
        }

        Self {
            display_name: opt(&workspace.display_name),
            location_id: opt(&workspace.location_id),
            floor_id: opt(&workspace.floor_id),
            capacity: opt(&workspace.capacity),
            workspace_type: opt(&workspace.workspace_type),
            calling: opt(&workspace.calling),
            calendar: opt(&workspace.calendar),
            hotdesking_status: opt(&workspace.hotdesking_status),
            supported_devices: opt(&workspace.supported_devices),
            notes: opt(&workspace.notes),
        }
    }
}
