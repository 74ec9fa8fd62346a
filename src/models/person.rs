//! People models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{PersonStatus, PersonType, PhoneNumberKind};
use super::field::Field;
use super::primitives::{plus1, WebexId};

/// A person in a Webex organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier
    pub id: WebexId,
    /// Email addresses; the first one is the primary address
    #[serde(default)]
    pub emails: Vec<String>,
    /// Phone numbers
    #[serde(default)]
    pub phone_numbers: Vec<PersonPhoneNumber>,
    /// SIP addresses
    #[serde(default)]
    pub sip_addresses: Vec<SipAddress>,
    /// Webex Calling extension
    #[serde(default)]
    pub extension: Option<String>,
    /// Webex Calling location
    #[serde(default)]
    pub location_id: Option<WebexId>,
    /// Full name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Nickname
    #[serde(default)]
    pub nick_name: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Organization the person belongs to
    #[serde(default)]
    pub org_id: Option<WebexId>,
    /// Assigned admin roles
    #[serde(default)]
    pub roles: Vec<WebexId>,
    /// Assigned licenses
    #[serde(default)]
    pub licenses: Vec<WebexId>,
    /// Department
    #[serde(default)]
    pub department: Option<String>,
    /// Manager's name
    #[serde(default)]
    pub manager: Option<String>,
    /// Manager's person ID
    #[serde(default)]
    pub manager_id: Option<WebexId>,
    /// Job title
    #[serde(default)]
    pub title: Option<String>,
    /// When the person was created
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// When the person was last changed
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
    /// Time zone in IANA format
    #[serde(default)]
    pub timezone: Option<String>,
    /// Last activity in Webex
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
    /// Presence status
    #[serde(default)]
    pub status: Option<PersonStatus>,
    /// Whether the invitation is still pending
    #[serde(default)]
    pub invite_pending: Option<bool>,
    /// Whether the person can log in
    #[serde(default)]
    pub login_enabled: Option<bool>,
    /// Kind of account
    #[serde(default, rename = "type")]
    pub person_type: Option<PersonType>,
}

impl Person {
    /// The primary email address.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Returns `true` if the person has a Webex Calling license and location.
    pub fn has_calling(&self) -> bool {
        self.location_id.is_some()
    }
}

/// A phone number of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPhoneNumber {
    /// Kind of number
    #[serde(rename = "type")]
    pub kind: PhoneNumberKind,
    /// The number
    pub value: String,
    /// Whether this is the primary number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
}

impl PersonPhoneNumber {
    /// Create a phone number, normalizing bare ten digit numbers to `+1`.
    pub fn new(kind: PhoneNumberKind, value: &str) -> Self {
        Self {
            kind,
            value: plus1(value),
            primary: None,
        }
    }
}

/// A SIP address of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipAddress {
    /// Kind of address, e.g. `personal-room` or `enterprise`
    #[serde(rename = "type")]
    pub kind: String,
    /// The address
    pub value: String,
    /// Whether this is the primary address
    #[serde(default)]
    pub primary: Option<bool>,
}

/// Request body for creating a person.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonCreate {
    /// Email addresses; exactly one is allowed on create
    pub emails: Vec<String>,
    /// Phone numbers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PersonPhoneNumber>,
    /// Webex Calling extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Webex Calling location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Organization, defaults to the caller's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// Admin roles
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<WebexId>,
    /// Licenses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<WebexId>,
    /// Department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PersonCreate {
    /// Start a create request for an email address.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            emails: vec![email.into()],
            ..Default::default()
        }
    }
}

/// Request body for updating a person.
///
/// Only fields that were set are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    /// Email addresses
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub emails: Field<Vec<String>>,
    /// Phone numbers
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub phone_numbers: Field<Vec<PersonPhoneNumber>>,
    /// Webex Calling extension
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub extension: Field<String>,
    /// Webex Calling location
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub location_id: Field<WebexId>,
    /// Full name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub display_name: Field<String>,
    /// Nickname
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub nick_name: Field<String>,
    /// First name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    /// Last name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub avatar: Field<String>,
    /// Admin roles
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub roles: Field<Vec<WebexId>>,
    /// Licenses
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub licenses: Field<Vec<WebexId>>,
    /// Department
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub department: Field<String>,
    /// Job title
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Whether the person can log in
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub login_enabled: Field<bool>,
}

impl PersonUpdate {
    /// Start an update from an existing person, carrying over every field
    /// the API accepts on update.
    ///
    /// Webex replaces the whole record on `PUT`, so updating from the
    /// current state avoids clearing fields by accident.
    pub fn from_person(person: &Person) -> Self {
        fn opt<T: Clone>(v: &Option<T>) -> Field<T> {
            v.clone().map(Field::Value).unwrap_or_default()
        }

        Self {
            emails: Field::Value(person.emails.clone()),
            phone_numbers: Field::Value(person.phone_numbers.clone()),
            extension: opt(&person.extension),
            location_id: opt(&person.location_id),
            display_name: opt(&person.display_name),
            nick_name: opt(&person.nick_name),
            first_name: opt(&person.first_name),
            last_name: opt(&person.last_name),
            avatar: opt(&person.avatar),
            roles: Field::Value(person.roles.clone()),
            licenses: Field::Value(person.licenses.clone()),
            department: opt(&person.department),
            title: opt(&person.title),
            login_enabled: opt(&person.login_enabled),
        }
    }
}
