//! Meeting models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MeetingState, MeetingType};
use super::field::Field;
use super::primitives::WebexId;

/// A meeting series, scheduled occurrence or meeting instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Unique identifier
    pub id: String,
    /// Series this meeting belongs to
    #[serde(default)]
    pub meeting_series_id: Option<String>,
    /// Scheduled occurrence this instance started from
    #[serde(default)]
    pub scheduled_meeting_id: Option<String>,
    /// Meeting number used to join
    #[serde(default)]
    pub meeting_number: Option<String>,
    /// Title
    #[serde(default)]
    pub title: Option<String>,
    /// Agenda
    #[serde(default)]
    pub agenda: Option<String>,
    /// Attendee password
    #[serde(default)]
    pub password: Option<String>,
    /// Kind of meeting object
    #[serde(default)]
    pub meeting_type: Option<MeetingType>,
    /// Current state
    #[serde(default)]
    pub state: Option<MeetingState>,
    /// Time zone of `start` and `end`
    #[serde(default)]
    pub timezone: Option<String>,
    /// Start time
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// End time
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Recurrence rule (RFC 2445)
    #[serde(default)]
    pub recurrence: Option<String>,
    /// Host's person ID
    #[serde(default)]
    pub host_user_id: Option<WebexId>,
    /// Host's name
    #[serde(default)]
    pub host_display_name: Option<String>,
    /// Host's email
    #[serde(default)]
    pub host_email: Option<String>,
    /// Host key
    #[serde(default)]
    pub host_key: Option<String>,
    /// Webex site hosting the meeting
    #[serde(default)]
    pub site_url: Option<String>,
    /// Link to join
    #[serde(default)]
    pub web_link: Option<String>,
    /// SIP address to join
    #[serde(default)]
    pub sip_address: Option<String>,
    /// Whether the meeting is recorded automatically
    #[serde(default)]
    pub enabled_auto_record_meeting: Option<bool>,
    /// Whether any attendee with a host account can be cohost
    #[serde(default)]
    pub allow_any_user_to_be_co_host: Option<bool>,
    /// Whether attendees can join before the host
    #[serde(default)]
    pub enabled_join_before_host: Option<bool>,
    /// Minutes attendees can join before the host
    #[serde(default)]
    pub join_before_host_minutes: Option<u32>,
    /// Whether the meeting is listed publicly
    #[serde(default)]
    pub public_meeting: Option<bool>,
    /// Whether a recording exists
    #[serde(default)]
    pub has_recording: Option<bool>,
    /// Whether a transcript exists
    #[serde(default)]
    pub has_transcription: Option<bool>,
}

/// An invitee of a new meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingInvitee {
    /// Email address
    pub email: String,
    /// Name shown in the invitation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the invitee is a cohost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_host: Option<bool>,
}

/// Request body for scheduling a meeting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCreate {
    /// Title
    pub title: String,
    /// Start time
    pub start: DateTime<Utc>,
    /// End time
    pub end: DateTime<Utc>,
    /// Time zone for the invitation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Agenda
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    /// Attendee password; generated when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Recurrence rule (RFC 2445)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    /// Record automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_auto_record_meeting: Option<bool>,
    /// Allow attendees to join before the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_join_before_host: Option<bool>,
    /// Minutes attendees can join before the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_before_host_minutes: Option<u32>,
    /// Invitees
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub invitees: Vec<MeetingInvitee>,
    /// Schedule on behalf of this host (admin only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_email: Option<String>,
    /// Webex site to schedule on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Send invitation emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
}

impl MeetingCreate {
    /// Start a request with the required fields.
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            timezone: None,
            agenda: None,
            password: None,
            recurrence: None,
            enabled_auto_record_meeting: None,
            enabled_join_before_host: None,
            join_before_host_minutes: None,
            invitees: Vec::new(),
            host_email: None,
            site_url: None,
            send_email: None,
        }
    }

    /// Add an invitee.
    pub fn invite(mut self, email: impl Into<String>) -> Self {
        self.invitees.push(MeetingInvitee {
            email: email.into(),
            display_name: None,
            co_host: None,
        });
        self
    }
}

/// Request body for updating a meeting.
///
/// Webex requires `title`, `password`, `start` and `end` on every update;
/// [`MeetingUpdate::from_meeting`] fills them from the current meeting.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingUpdate {
    /// Title
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Attendee password
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub password: Field<String>,
    /// Start time
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub start: Field<DateTime<Utc>>,
    /// End time
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub end: Field<DateTime<Utc>>,
    /// Time zone
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub timezone: Field<String>,
    /// Agenda
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub agenda: Field<String>,
    /// Recurrence rule
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub recurrence: Field<String>,
    /// Record automatically
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub enabled_auto_record_meeting: Field<bool>,
    /// Allow attendees to join before the host
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub enabled_join_before_host: Field<bool>,
    /// Minutes attendees can join before the host
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub join_before_host_minutes: Field<u32>,
    /// Send update emails
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub send_email: Field<bool>,
}

impl MeetingUpdate {
    /// Start an update carrying the fields Webex requires.
    pub fn from_meeting(meeting: &Meeting) -> Self {
        fn opt<T: Clone>(v: &Option<T>) -> Field<T> {
            v.clone().map(Field::Value).unwrap_or_default()
        }

        Self {
            title: opt(&meeting.title),
            password: opt(&meeting.password),
            start: opt(&meeting.start),
            end: opt(&meeting.end),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_meeting_deserialize() {
        let meeting: Meeting = serde_json::from_value(json!({
            "id": "870f51ff287b41be84648412901e0402",
            "meetingNumber": "123456789",
            "title": "Weekly sync",
            "meetingType": "meetingSeries",
            "state": "active",
            "timezone": "America/New_York",
            "start": "2024-03-04T14:00:00-05:00",
            "end": "2024-03-04T15:00:00-05:00",
            "hostEmail": "alice@example.com",
            "someFutureField": { "nested": true }
        }))
        .unwrap();

        assert_eq!(meeting.meeting_type, Some(MeetingType::MeetingSeries));
        assert_eq!(meeting.state, Some(MeetingState::Active));
        assert_eq!(
            meeting.start,
            Some(Utc.with_ymd_and_hms(2024, 3, 4, 19, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_create_body() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 19, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 4, 20, 0, 0).unwrap();
        let body = serde_json::to_value(
            MeetingCreate::new("Planning", start, end).invite("bob@example.com"),
        )
        .unwrap();

        assert_eq!(body["title"], "Planning");
        assert_eq!(body["invitees"][0]["email"], "bob@example.com");
        assert!(body.get("agenda").is_none());
    }

    #[test]
    fn test_update_from_meeting() {
        let meeting: Meeting = serde_json::from_value(json!({
            "id": "m1",
            "title": "Weekly sync",
            "password": "s3cret",
            "start": "2024-03-04T19:00:00Z",
            "end": "2024-03-04T20:00:00Z"
        }))
        .unwrap();

        let mut update = MeetingUpdate::from_meeting(&meeting);
        update.agenda = Field::Null;
        let body = serde_json::to_value(&update).unwrap();

        assert_eq!(body["title"], "Weekly sync");
        assert_eq!(body["password"], "s3cret");
        assert!(body["agenda"].is_null());
        assert!(body.get("timezone").is_none());
    }
}
