//! HTTP client and service layer for the Webex API.
//!
//! This module provides the main entry point [`WebexClient`] for
//! interacting with the Webex API, and the pagination machinery every
//! list call is built on.
//!
//! # Example
//!
//! ```no_run
//! use webex_rs::WebexClient;
//! use webex_rs::api::WorkspacesQuery;
//!
//! # async fn example() -> webex_rs::Result<()> {
//! let client = WebexClient::from_env()?;
//!
//! let workspaces = client
//!     .workspaces()
//!     .list(WorkspacesQuery::default())
//!     .collect_vec()
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod page;
pub mod paginated;

pub use config::{ClientConfig, RetryConfig, DEFAULT_CALLING_DATA_PAGE_SIZE};
pub use http::{ByteStream, WebexClient, ACCESS_TOKEN_ENV, BASE_URL_ENV};
pub use page::{parse_link_header, Cursor, Page, DEFAULT_ITEM_KEY};
pub use paginated::{
    PageFuture, PageRequest, PaginatedStream, PaginatedStreamBuilder, DEFAULT_CURSOR_PARAM,
};
pub(crate) use http::ClientInner;
