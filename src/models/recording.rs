//! Meeting recording models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{RecordingFormat, RecordingStatus, ServiceType};

/// A recording of a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    /// Unique identifier
    pub id: String,
    /// Meeting instance that was recorded
    #[serde(default)]
    pub meeting_id: Option<String>,
    /// Scheduled occurrence that was recorded
    #[serde(default)]
    pub scheduled_meeting_id: Option<String>,
    /// Series that was recorded
    #[serde(default)]
    pub meeting_series_id: Option<String>,
    /// Title
    #[serde(default)]
    pub topic: Option<String>,
    /// When the recording was created
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    /// When recording started
    #[serde(default)]
    pub time_recorded: Option<DateTime<Utc>>,
    /// Host's email
    #[serde(default)]
    pub host_email: Option<String>,
    /// Webex site the meeting ran on
    #[serde(default)]
    pub site_url: Option<String>,
    /// Download page, requires a login
    #[serde(default)]
    pub download_url: Option<String>,
    /// Playback page, requires a login
    #[serde(default)]
    pub playback_url: Option<String>,
    /// Password protecting the recording
    #[serde(default)]
    pub password: Option<String>,
    /// File format
    #[serde(default)]
    pub format: Option<RecordingFormat>,
    /// Webex service the meeting ran on
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    /// Length in seconds
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    /// Size in bytes
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Whether the recording was shared with the caller
    #[serde(default)]
    pub share_to_me: Option<bool>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<RecordingStatus>,
    /// Pre-signed download links, only returned by a single-recording lookup
    #[serde(default)]
    pub temporary_direct_download_links: Option<TemporaryDownloadLinks>,
}

impl Recording {
    /// Pre-signed link to the recording file, if the API returned one.
    pub fn direct_download_link(&self) -> Option<&str> {
        self.temporary_direct_download_links
            .as_ref()
            .and_then(|links| links.recording_download_link.as_deref())
    }
}

/// Pre-signed links to the files of a recording.
///
/// The links work without credentials until `expiration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryDownloadLinks {
    /// Recording file
    #[serde(default)]
    pub recording_download_link: Option<String>,
    /// Audio-only file
    #[serde(default)]
    pub audio_download_link: Option<String>,
    /// Transcript
    #[serde(default)]
    pub transcript_download_link: Option<String>,
    /// When the links stop working
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_with_links() {
        let recording: Recording = serde_json::from_value(json!({
            "id": "4f914b1dfe3c4d11a61730f18c0f5387",
            "topic": "Quarterly review",
            "format": "MP4",
            "serviceType": "MeetingCenter",
            "durationSeconds": 4472,
            "sizeBytes": 248023188,
            "status": "available",
            "temporaryDirectDownloadLinks": {
                "recordingDownloadLink": "https://cdn.example.com/rec.mp4?sig=abc",
                "expiration": "2024-03-05T10:00:00Z"
            }
        }))
        .unwrap();

        assert_eq!(recording.format, Some(RecordingFormat::Mp4));
        assert_eq!(recording.size_bytes, Some(248023188));
        assert_eq!(
            recording.direct_download_link(),
            Some("https://cdn.example.com/rec.mp4?sig=abc")
        );
    }

    #[test]
    fn test_recording_without_links() {
        let recording: Recording =
            serde_json::from_value(json!({ "id": "r1", "format": "ARF" })).unwrap();
        assert_eq!(recording.direct_download_link(), None);
    }
}
