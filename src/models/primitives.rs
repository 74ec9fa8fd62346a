//! Primitive types and helpers for type-safe API interactions.
//!
//! Webex identifiers are opaque strings: the base64 encoding (without
//! padding) of `ciscospark://<cluster>/<KIND>/<id>`, where `<id>` is
//! usually a UUID. [`WebexId`] converts between both forms.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{Error, Result};

const ID_SCHEME: &str = "ciscospark://";

/// Cluster used when encoding IDs unless told otherwise.
pub const DEFAULT_CLUSTER: &str = "us";

wire_enum! {
    /// Resource type embedded in a Webex ID.
    pub enum ResourceKind {
        /// A person
        People => "PEOPLE",
        /// An organization
        Organization => "ORGANIZATION",
        /// A location
        Location => "LOCATION",
        /// A space
        Room => "ROOM",
        /// A message
        Message => "MESSAGE",
        /// A team
        Team => "TEAM",
        /// A license
        License => "LICENSE",
        /// A role
        Role => "ROLE",
        /// A webhook
        Webhook => "WEBHOOK",
        /// A call queue
        CallQueue => "CALL_QUEUE",
        /// A hunt group
        HuntGroup => "HUNT_GROUP",
        /// A call park
        CallPark => "CALL_PARK",
    }
}

/// A Webex resource identifier.
///
/// # Example
///
/// ```
/// use webex_rs::models::{ResourceKind, WebexId};
/// use uuid::Uuid;
///
/// let uuid = Uuid::parse_str("9a6f5d3e-8d2c-4d8b-9b1a-1f0e2d3c4b5a").unwrap();
/// let id = WebexId::encode(ResourceKind::People, uuid);
/// assert_eq!(id.uuid().unwrap(), uuid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebexId(String);

/// The parts of a decoded [`WebexId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedId {
    /// Cluster the resource lives in, e.g. `us`
    pub cluster: String,
    /// Resource type
    pub kind: ResourceKind,
    /// Resource-local identifier, usually a UUID
    pub id: String,
}

impl DecodedId {
    /// The resource-local identifier as a UUID, if it is one.
    pub fn uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

impl WebexId {
    /// Wrap an ID as returned by the API.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode a UUID into a Webex ID in the default cluster.
    pub fn encode(kind: ResourceKind, uuid: Uuid) -> Self {
        Self::encode_in(DEFAULT_CLUSTER, kind, &uuid.to_string())
    }

    /// Encode any resource-local id into a Webex ID.
    pub fn encode_in(cluster: &str, kind: ResourceKind, id: &str) -> Self {
        let raw = format!("{}{}/{}/{}", ID_SCHEME, cluster, kind, id);
        Self(STANDARD_NO_PAD.encode(raw))
    }

    /// Decode the ID into its parts.
    ///
    /// Accepts standard and URL-safe alphabets, with or without padding.
    pub fn decode(&self) -> Result<DecodedId> {
        let trimmed = self.0.trim().trim_end_matches('=');
        let bytes = STANDARD_NO_PAD
            .decode(trimmed)
            .or_else(|_| URL_SAFE_NO_PAD.decode(trimmed))
            .map_err(|e| Error::InvalidId(format!("{}: {}", self.0, e)))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| Error::InvalidId(format!("{}: not UTF-8", self.0)))?;

        let rest = text
            .strip_prefix(ID_SCHEME)
            .ok_or_else(|| Error::InvalidId(format!("{}: unexpected scheme", self.0)))?;

        let mut parts = rest.splitn(3, '/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(cluster), Some(kind), Some(id))
                if !cluster.is_empty() && !kind.is_empty() && !id.is_empty() =>
            {
                Ok(DecodedId {
                    cluster: cluster.to_string(),
                    kind: ResourceKind::from(kind),
                    id: id.to_string(),
                })
            }
            _ => Err(Error::InvalidId(format!("{}: expected cluster/kind/id", self.0))),
        }
    }

    /// Decode the ID and return its UUID.
    pub fn uuid(&self) -> Result<Uuid> {
        let decoded = self.decode()?;
        decoded
            .uuid()
            .ok_or_else(|| Error::InvalidId(format!("{}: '{}' is not a UUID", self.0, decoded.id)))
    }
}

impl fmt::Display for WebexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for WebexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for WebexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WebexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Normalize a North American number to E.164.
///
/// Bare ten digit numbers (separators allowed) get a `+1` prefix. Anything
/// else, including numbers that already carry a `+`, comes back trimmed but
/// otherwise untouched.
///
/// ```
/// use webex_rs::models::plus1;
///
/// assert_eq!(plus1("9195551234"), "+19195551234");
/// assert_eq!(plus1("(919) 555-1234"), "+19195551234");
/// assert_eq!(plus1("+4930123456"), "+4930123456");
/// assert_eq!(plus1("5001"), "5001");
/// ```
pub fn plus1(number: &str) -> String {
    let trimmed = number.trim();
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }

    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    if digits.len() == 10 && digits.bytes().all(|b| b.is_ascii_digit()) {
        format!("+1{}", digits)
    } else {
        trimmed.to_string()
    }
}

/// Environment configuration for the Webex API.
///
/// # Example
///
/// ```
/// use webex_rs::Environment;
///
/// let env = Environment::Commercial;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Commercial Webex cloud.
    #[default]
    Commercial,
    /// Webex for US government (FedRAMP).
    UsGov,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Commercial => "https://webexapis.com/v1",
            Environment::UsGov => "https://api-usgov.webex.com/v1",
        }
    }

    /// Returns `true` if this is the US government environment.
    pub fn is_gov(&self) -> bool {
        matches!(self, Environment::UsGov)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Commercial => write!(f, "commercial"),
            Environment::UsGov => write!(f, "usgov"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON_UUID: &str = "9a6f5d3e-8d2c-4d8b-9b1a-1f0e2d3c4b5a";

    #[test]
    fn test_encode_decode() {
        let uuid = Uuid::parse_str(PERSON_UUID).unwrap();
        let id = WebexId::encode(ResourceKind::People, uuid);
        assert!(!id.as_str().ends_with('='));

        let decoded = id.decode().unwrap();
        assert_eq!(decoded.cluster, "us");
        assert_eq!(decoded.kind, ResourceKind::People);
        assert_eq!(decoded.uuid(), Some(uuid));
        assert_eq!(id.uuid().unwrap(), uuid);
    }

    #[test]
    fn test_decode_known_id() {
        // base64 of "ciscospark://us/LOCATION/9a6f5d3e-8d2c-4d8b-9b1a-1f0e2d3c4b5a"
        let raw = STANDARD_NO_PAD.encode(format!("ciscospark://us/LOCATION/{}", PERSON_UUID));
        let decoded = WebexId::new(raw).decode().unwrap();
        assert_eq!(decoded.kind, ResourceKind::Location);
        assert_eq!(decoded.id, PERSON_UUID);
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let padded = base64::engine::general_purpose::STANDARD
            .encode(format!("ciscospark://us/ROOM/{}", PERSON_UUID));
        let decoded = WebexId::new(padded).decode().unwrap();
        assert_eq!(decoded.kind, ResourceKind::Room);
    }

    #[test]
    fn test_decode_non_uuid_id() {
        let id = WebexId::encode_in("us", ResourceKind::CallQueue, "Y2FsbHF1ZXVlMQ");
        let decoded = id.decode().unwrap();
        assert_eq!(decoded.kind, ResourceKind::CallQueue);
        assert_eq!(decoded.uuid(), None);
        assert!(matches!(id.uuid(), Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_decode_unknown_kind_is_kept() {
        let id = WebexId::encode_in("eu", ResourceKind::from("DEVICE"), PERSON_UUID);
        let decoded = id.decode().unwrap();
        assert_eq!(decoded.cluster, "eu");
        assert_eq!(decoded.kind, ResourceKind::Other("DEVICE".into()));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(WebexId::new("not base64 !!").decode().is_err());
        let wrong_scheme = STANDARD_NO_PAD.encode("https://us/PEOPLE/x");
        assert!(WebexId::new(wrong_scheme).decode().is_err());
        let short = STANDARD_NO_PAD.encode("ciscospark://us/PEOPLE");
        assert!(WebexId::new(short).decode().is_err());
    }

    #[test]
    fn test_plus1() {
        assert_eq!(plus1("9195551234"), "+19195551234");
        assert_eq!(plus1(" 919.555.1234 "), "+19195551234");
        assert_eq!(plus1("+19195551234"), "+19195551234");
        assert_eq!(plus1("19195551234"), "19195551234");
        assert_eq!(plus1("1234"), "1234");
        assert_eq!(plus1("91955512ab"), "91955512ab");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Commercial.api_base_url(),
            "https://webexapis.com/v1"
        );
        assert_eq!(
            Environment::UsGov.api_base_url(),
            "https://api-usgov.webex.com/v1"
        );
        assert!(Environment::UsGov.is_gov());
    }
}
