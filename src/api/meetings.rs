//! Meetings service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{Meeting, MeetingCreate, MeetingState, MeetingType, MeetingUpdate};
use crate::Result;

/// Service for scheduling and listing meetings.
pub struct MeetingsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing meetings.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsQuery {
    /// Meeting number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_number: Option<String>,
    /// Join link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    /// Space the meeting is associated with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// Occurrences and instances of this series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_series_id: Option<String>,
    /// Kind of meeting object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<MeetingType>,
    /// Meeting state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<MeetingState>,
    /// Only the current occurrence of each series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    /// Start of the time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// End of the time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// List on behalf of this host (admin only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// Webex site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    send_email: Option<bool>,
}

impl MeetingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List meetings.
    pub fn list(&self, query: MeetingsQuery) -> PaginatedStream<Meeting> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/meetings").build_with_query(&query)
    }

    /// Get a meeting by ID.
    pub async fn get(&self, meeting_id: &str) -> Result<Meeting> {
        self.inner.get(&format!("/meetings/{}", meeting_id)).await
    }

    /// Schedule a meeting.
    pub async fn create(&self, meeting: &MeetingCreate) -> Result<Meeting> {
        tracing::info!(title = %meeting.title, start = %meeting.start, "Scheduling meeting");
        self.inner.post("/meetings", meeting).await
    }

    /// Update a meeting.
    pub async fn update(&self, meeting_id: &str, update: &MeetingUpdate) -> Result<Meeting> {
        self.inner
            .put(&format!("/meetings/{}", meeting_id), update)
            .await
    }

    /// Delete a meeting, optionally emailing attendees about it.
    pub async fn delete(&self, meeting_id: &str, send_email: Option<bool>) -> Result<()> {
        tracing::info!(meeting_id, "Deleting meeting");
        self.inner
            .delete_with_query(
                &format!("/meetings/{}", meeting_id),
                Some(&DeleteParams { send_email }),
            )
            .await
    }
}
