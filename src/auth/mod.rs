//! Authentication and session management for the Webex API.
//!
//! Two kinds of credentials are supported:
//!
//! 1. **Access token** - a personal, bot or service app token used as is
//! 2. **OAuth integration** - client credentials plus a refresh token; the
//!    access token is exchanged and refreshed automatically
//!
//! ```no_run
//! use webex_rs::{Session, Environment};
//!
//! # async fn example() -> webex_rs::Result<()> {
//! let bot = Session::from_token("bot-token", Environment::Commercial);
//!
//! let integration = Session::from_integration(
//!     "client-id",
//!     "client-secret",
//!     "refresh-token",
//!     Environment::Commercial,
//! ).await?;
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::Session;
