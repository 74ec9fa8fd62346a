//! API service modules for Webex endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Webex API. List operations return a lazy
//! [`PaginatedStream`](crate::PaginatedStream).

mod locations;
mod meetings;
mod people;
mod recordings;
mod telephony;
mod webhooks;
mod workspaces;

pub use locations::{LocationsQuery, LocationsService};
pub use meetings::{MeetingsQuery, MeetingsService};
pub use people::{PeopleQuery, PeopleService};
pub use recordings::{RecordingsQuery, RecordingsService};
pub use telephony::{CallingQuery, NumbersQuery, TelephonyService};
pub use webhooks::{WebhooksQuery, WebhooksService};
pub use workspaces::{WorkspacesQuery, WorkspacesService};
