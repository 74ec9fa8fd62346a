//! Meeting recordings service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ByteStream, ClientInner};
use crate::models::{Recording, RecordingFormat, RecordingStatus, ServiceType};
use crate::Result;

/// Service for meeting recordings.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
/// let recording = client.recordings().get("4f914b1dfe3c4d11a61730f18c0f5387").await?;
///
/// if let Some(link) = recording.direct_download_link() {
///     let mut chunks = client.recordings().download(link).await?;
///     let mut size = 0;
///     while let Some(chunk) = chunks.next().await {
///         size += chunk?.len();
///     }
///     println!("downloaded {} bytes", size);
/// }
/// # Ok(())
/// # }
/// ```
pub struct RecordingsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing recordings.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingsQuery {
    /// Start of the time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    /// End of the time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    /// Recordings of this meeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    /// List on behalf of this host (admin only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// Webex site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Webex service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    /// File format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<RecordingFormat>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordingStatus>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl RecordingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List recordings.
    pub fn list(&self, query: RecordingsQuery) -> PaginatedStream<Recording> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/recordings").build_with_query(&query)
    }

    /// Get a recording, including its temporary download links.
    pub async fn get(&self, recording_id: &str) -> Result<Recording> {
        self.inner
            .get(&format!("/recordings/{}", recording_id))
            .await
    }

    /// Move a recording to the recycle bin.
    pub async fn delete(&self, recording_id: &str) -> Result<()> {
        tracing::info!(recording_id, "Deleting recording");
        self.inner
            .delete(&format!("/recordings/{}", recording_id))
            .await
    }

    /// Download a file from a temporary direct download link.
    ///
    /// The body is streamed chunk by chunk and never buffered whole.
    pub async fn download(&self, url: &str) -> Result<ByteStream> {
        self.inner.download(url).await
    }
}
