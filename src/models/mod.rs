//! Data models for the Webex API.
//!
//! This module contains the strongly-typed data structures used to
//! interact with the Webex API. Models are organized by domain:
//!
//! - [`primitives`] - Identifiers, environments and phone number helpers
//! - [`enums`] - Enumerations mirroring the API's string constants
//! - [`field`] - Tri-state fields for update requests
//! - [`person`] - People and their phone numbers
//! - [`meeting`] - Meetings and meeting series
//! - [`recording`] - Meeting recordings
//! - [`workspace`] - Workspaces (rooms, desks, shared devices)
//! - [`webhook`] - Webhook registrations
//! - [`location`] - Organization locations
//! - [`telephony`] - Calling configuration: queues, hunt groups, parks, numbers

/// Declare an enum mirroring a set of API string constants.
///
/// Every variant maps to a fixed wire string. Values the crate does not
/// know decode into `Other` and serialize back unchanged.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this crate, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The wire string for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(s) => s.as_str(),
                }
            }

            /// Returns `true` if the value was not recognized.
            pub fn is_other(&self) -> bool {
                matches!(self, $name::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $wire => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match $name::from(s.as_str()) {
                    $name::Other(_) => $name::Other(s),
                    known => known,
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(s))
            }
        }
    };
}

pub mod primitives;
pub mod enums;
pub mod field;
pub mod person;
pub mod meeting;
pub mod recording;
pub mod workspace;
pub mod webhook;
pub mod location;
pub mod telephony;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use field::*;
pub use person::*;
pub use meeting::*;
pub use recording::*;
pub use workspace::*;
pub use webhook::*;
pub use location::*;
pub use telephony::*;
