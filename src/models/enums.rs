//! Enumeration types for the Webex API.
//!
//! Each enum mirrors a documented set of API string constants. Webex adds
//! values over time, so every enum carries an `Other` variant holding
//! unrecognized strings instead of failing to decode.

wire_enum! {
    /// Kind of account behind a person record.
    pub enum PersonType {
        /// A human user
        Person => "person",
        /// A bot account
        Bot => "bot",
        /// A guest issuer application user
        AppUser => "appuser",
    }
}

wire_enum! {
    /// Presence status of a person.
    pub enum PersonStatus {
        /// Active within the last 10 minutes
        Active => "active",
        /// In a call
        Call => "call",
        /// Do not disturb
        DoNotDisturb => "DoNotDisturb",
        /// Inactive for more than 10 minutes
        Inactive => "inactive",
        /// In a meeting
        Meeting => "meeting",
        /// Out of office
        OutOfOffice => "OutOfOffice",
        /// Has not logged in yet
        Pending => "pending",
        /// Sharing content
        Presenting => "presenting",
        /// Status could not be determined
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Kind of a phone number attached to a person.
    pub enum PhoneNumberKind {
        /// Work number
        Work => "work",
        /// Work extension
        WorkExtension => "work_extension",
        /// Mobile number
        Mobile => "mobile",
        /// Fax number
        Fax => "fax",
    }
}

wire_enum! {
    /// Kind of a meeting object.
    pub enum MeetingType {
        /// The master of a scheduled series
        MeetingSeries => "meetingSeries",
        /// One occurrence of a series
        ScheduledMeeting => "scheduledMeeting",
        /// A meeting instance that actually happened or is happening
        Meeting => "meeting",
    }
}

wire_enum! {
    /// State of a meeting.
    pub enum MeetingState {
        /// Series is active
        Active => "active",
        /// Scheduled and not started
        Scheduled => "scheduled",
        /// Ready to start
        Ready => "ready",
        /// Participants waiting in the lobby
        Lobby => "lobby",
        /// Meeting in progress
        InProgress => "inProgress",
        /// Meeting ended
        Ended => "ended",
        /// Scheduled but nobody joined
        Missed => "missed",
        /// Series ended
        Expired => "expired",
    }
}

impl MeetingState {
    /// Returns `true` if the meeting will not happen again.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            MeetingState::Ended | MeetingState::Missed | MeetingState::Expired
        )
    }
}

wire_enum! {
    /// File format of a recording.
    pub enum RecordingFormat {
        /// MPEG-4 video
        Mp4 => "MP4",
        /// Advanced recording format
        Arf => "ARF",
    }
}

wire_enum! {
    /// Lifecycle status of a recording.
    pub enum RecordingStatus {
        /// Available for playback and download
        Available => "available",
        /// In the recycle bin
        Deleted => "deleted",
        /// Still being processed
        Processing => "processing",
    }
}

wire_enum! {
    /// Webex service a recording or meeting belongs to.
    pub enum ServiceType {
        /// Webex Meetings
        MeetingCenter => "MeetingCenter",
        /// Webex Events
        EventCenter => "EventCenter",
        /// Webex Training
        TrainingCenter => "TrainingCenter",
        /// Webex Support
        SupportCenter => "SupportCenter",
    }
}

wire_enum! {
    /// Kind of a workspace.
    pub enum WorkspaceType {
        /// No type set
        NotSet => "notSet",
        /// Focus room
        Focus => "focus",
        /// Huddle room
        Huddle => "huddle",
        /// Meeting room
        MeetingRoom => "meetingRoom",
        /// Open area
        Open => "open",
        /// Desk
        Desk => "desk",
        /// Anything else
        Unspecified => "other",
    }
}

wire_enum! {
    /// Calling service a workspace is provisioned with.
    pub enum WorkspaceCallingType {
        /// Free calling between Webex devices
        FreeCalling => "freeCalling",
        /// Hybrid calling via on-premises call control
        HybridCalling => "hybridCalling",
        /// Webex Calling
        WebexCalling => "webexCalling",
        /// Webex Edge for Devices
        WebexEdgeForDevices => "webexEdgeForDevices",
        /// Third-party SIP calling
        ThirdPartySipCalling => "thirdPartySipCalling",
        /// No calling
        None => "none",
    }
}

wire_enum! {
    /// Whether a workspace supports hot desking.
    pub enum HotdeskingStatus {
        /// Hot desking enabled
        On => "on",
        /// Hot desking disabled
        Off => "off",
    }
}

wire_enum! {
    /// Resource a webhook listens to.
    pub enum WebhookResource {
        /// Webex Calling telephony calls
        TelephonyCalls => "telephony_calls",
        /// Webex Calling conference controls
        TelephonyConference => "telephony_conference",
        /// Memberships in spaces
        Memberships => "memberships",
        /// Messages in spaces
        Messages => "messages",
        /// Spaces
        Rooms => "rooms",
        /// Meetings
        Meetings => "meetings",
        /// Meeting recordings
        Recordings => "recordings",
        /// Meeting participants
        MeetingParticipants => "meetingParticipants",
        /// Meeting transcripts
        MeetingTranscripts => "meetingTranscripts",
        /// Adaptive card submissions
        AttachmentActions => "attachmentActions",
        /// Organization-wide data sources
        DataSources => "dataSources",
    }
}

wire_enum! {
    /// Event a webhook fires on.
    pub enum WebhookEvent {
        /// Resource created
        Created => "created",
        /// Resource updated
        Updated => "updated",
        /// Resource deleted
        Deleted => "deleted",
        /// Meeting started
        Started => "started",
        /// Meeting ended
        Ended => "ended",
        /// Participant joined
        Joined => "joined",
        /// Participant left
        Left => "left",
        /// Call or meeting migrated
        Migrated => "migrated",
        /// Any event
        All => "all",
    }
}

wire_enum! {
    /// Delivery status of a webhook.
    pub enum WebhookStatus {
        /// Deliveries enabled
        Active => "active",
        /// Disabled after repeated delivery failures
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Provisioning state of a calling phone number.
    pub enum NumberState {
        /// Number is active
        Active => "ACTIVE",
        /// Number is inactive
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Kind of a calling phone number.
    pub enum NumberType {
        /// Primary number
        Primary => "PRIMARY",
        /// Alternate number
        Alternate => "ALTERNATE",
        /// Fax number
        Fax => "FAX",
        /// Dialed number identification service number
        Dnis => "DNIS",
    }
}

wire_enum! {
    /// Kind of entity that owns a calling phone number.
    pub enum OwnerType {
        /// A user
        People => "PEOPLE",
        /// A workspace
        Place => "PLACE",
        /// A virtual line
        VirtualLine => "VIRTUAL_LINE",
        /// An auto attendant
        AutoAttendant => "AUTO_ATTENDANT",
        /// A call queue
        CallCenter => "CALL_CENTER",
        /// A hunt group
        HuntGroup => "HUNT_GROUP",
        /// A paging group
        GroupPaging => "GROUP_PAGING",
        /// Voicemail
        VoiceMessaging => "VOICE_MESSAGING",
        /// A voicemail group
        VoicemailGroup => "VOICEMAIL_GROUP",
        /// Receptionist client directory
        ContactCenterLink => "CONTACT_CENTER_LINK",
    }
}

wire_enum! {
    /// Routing policy of a call queue or hunt group.
    pub enum HuntPolicy {
        /// Ring the next agent after the last one that answered
        Circular => "CIRCULAR",
        /// Ring agents in list order
        Regular => "REGULAR",
        /// Ring all agents at once
        Simultaneous => "SIMULTANEOUS",
        /// Ring the agent idle the longest
        Uniform => "UNIFORM",
        /// Distribute by configured weights
        Weighted => "WEIGHTED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value_roundtrip() {
        let status: PersonStatus = serde_json::from_str("\"DoNotDisturb\"").unwrap();
        assert_eq!(status, PersonStatus::DoNotDisturb);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"DoNotDisturb\"");
    }

    #[test]
    fn test_unknown_value_is_preserved() {
        let state: MeetingState = serde_json::from_str("\"suspended\"").unwrap();
        assert_eq!(state, MeetingState::Other("suspended".into()));
        assert!(state.is_other());
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"suspended\"");
    }

    #[test]
    fn test_wire_value_named_unknown() {
        let status: PersonStatus = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(status, PersonStatus::Unknown);
        assert!(!status.is_other());
    }

    #[test]
    fn test_from_str_and_display() {
        let resource: WebhookResource = "telephony_calls".parse().unwrap();
        assert_eq!(resource, WebhookResource::TelephonyCalls);
        assert_eq!(resource.to_string(), "telephony_calls");
        assert_eq!(WorkspaceType::Unspecified.as_str(), "other");
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(RecordingFormat::from("mp4"), RecordingFormat::Other("mp4".into()));
        assert_eq!(RecordingFormat::from("MP4"), RecordingFormat::Mp4);
    }

    #[test]
    fn test_meeting_state_finished() {
        assert!(MeetingState::Ended.is_finished());
        assert!(!MeetingState::InProgress.is_finished());
        assert!(!MeetingState::Other("new".into()).is_finished());
    }
}
