//! # webex-rs
//!
//! An async Rust client for the Webex REST API.
//!
//! Every list endpoint is exposed as a lazy [`PaginatedStream`]: pages are
//! fetched one at a time as records are consumed, following the `Link`
//! header cursors Webex returns, and each record is decoded into its typed
//! model as it is handed out.
//!
//! ## Features
//!
//! - **Authentication**: access tokens and OAuth integrations with refresh
//! - **People, meetings, recordings, workspaces, webhooks, locations**
//! - **Webex Calling**: call queues, hunt groups, call parks, phone numbers
//! - **Lazy pagination**: one request per page, only when needed
//! - **Retries**: backoff on 429 and transient server errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use webex_rs::WebexClient;
//! use webex_rs::api::PeopleQuery;
//!
//! #[tokio::main]
//! async fn main() -> webex_rs::Result<()> {
//!     let client = WebexClient::from_env()?;
//!
//!     let me = client.people().me().await?;
//!     println!("Signed in as {:?}", me.display_name);
//!
//!     let mut people = client.people().list(PeopleQuery::default());
//!     while let Some(person) = people.next().await {
//!         let person = person?;
//!         println!("{:?} <{:?}>", person.display_name, person.primary_email());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Endpoints without a wrapper
//!
//! ```rust,no_run
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Room {
//!     id: String,
//!     title: String,
//! }
//!
//! # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
//! let rooms: Vec<Room> = client
//!     .paginate("/rooms")
//!     .param("max", 100)
//!     .build()
//!     .collect_vec()
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{ClientConfig, PaginatedStream, RetryConfig, WebexClient};
pub use error::{Error, Result};
pub use models::{Environment, Field, WebexId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use webex_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CallingQuery, LocationsQuery, MeetingsQuery, NumbersQuery, PeopleQuery,
        RecordingsQuery, WebhooksQuery, WorkspacesQuery,
    };
    pub use crate::auth::Session;
    pub use crate::client::{ClientConfig, PaginatedStream, RetryConfig, WebexClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        plus1, Environment, Field, ResourceKind, WebexId,
        // Models
        CallPark, CallQueue, HuntGroup, Location, Meeting, MeetingCreate, MeetingUpdate,
        NumberListPhoneNumber, Person, PersonCreate, PersonUpdate, Recording, Webhook,
        WebhookCreate, WebhookUpdate, Workspace, WorkspaceUpdate,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webex_id_creation() {
        let id = WebexId::new("Y2lzY29zcGFyazovL3VzL1BFT1BMRS8xMjM");
        assert_eq!(id.as_str(), "Y2lzY29zcGFyazovL3VzL1BFT1BMRS8xMjM");
        assert_eq!(id.decode().unwrap().id, "123");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Commercial.api_base_url(),
            "https://webexapis.com/v1"
        );
        assert_eq!(Environment::default(), Environment::Commercial);
    }

    #[test]
    fn test_client_is_cheap_to_clone() {
        let client = WebexClient::new("token").unwrap();
        let other = client.clone();
        assert_eq!(
            other.config().calling_data_page_size,
            client.config().calling_data_page_size
        );
    }
}
