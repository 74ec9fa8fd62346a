//! People service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{Person, PersonCreate, PersonUpdate, WebexId};
use crate::Result;

/// Service for managing people in an organization.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use webex_rs::api::PeopleQuery;
///
/// # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
/// let query = PeopleQuery {
///     calling_data: Some(true),
///     ..Default::default()
/// };
///
/// let mut people = client.people().list(query);
/// while let Some(person) = people.next().await {
///     let person = person?;
///     println!("{:?} {:?}", person.display_name, person.extension);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PeopleService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing people.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleQuery {
    /// Exact email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Specific people, at most 85
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub id: Vec<WebexId>,
    /// Organization to list, defaults to the caller's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// People holding all of these roles
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<WebexId>,
    /// Include Webex Calling details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calling_data: Option<bool>,
    /// Webex Calling location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Serialize)]
struct CallingData {
    #[serde(rename = "callingData", skip_serializing_if = "std::ops::Not::not")]
    calling_data: bool,
}

impl PeopleService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the person the access token belongs to.
    pub async fn me(&self) -> Result<Person> {
        self.inner.get("/people/me").await
    }

    /// List people.
    ///
    /// Calling data is expensive to compute, so listings that ask for it
    /// use the configured calling data page size unless `max` is set.
    pub fn list(&self, query: PeopleQuery) -> PaginatedStream<Person> {
        let mut query = query;
        if query.calling_data == Some(true) && query.max.is_none() {
            query.max = Some(self.inner.config.calling_data_page_size);
        }

        PaginatedStreamBuilder::new(self.inner.clone(), "/people").build_with_query(&query)
    }

    /// Get a person by ID.
    pub async fn get(&self, person_id: &WebexId, calling_data: bool) -> Result<Person> {
        self.inner
            .get_with_query(
                &format!("/people/{}", person_id),
                &CallingData { calling_data },
            )
            .await
    }

    /// Create a person.
    pub async fn create(&self, person: &PersonCreate, calling_data: bool) -> Result<Person> {
        tracing::info!(emails = ?person.emails, "Creating person");
        self.inner
            .post_with_query("/people", &CallingData { calling_data }, person)
            .await
    }

    /// Update a person.
    ///
    /// The API replaces the record, so fields left unset are cleared.
    /// Use [`PersonUpdate::from_person`] to start from the current state.
    pub async fn update(
        &self,
        person_id: &WebexId,
        update: &PersonUpdate,
        calling_data: bool,
    ) -> Result<Person> {
        self.inner
            .put_with_query(
                &format!("/people/{}", person_id),
                &CallingData { calling_data },
                update,
            )
            .await
    }

    /// Delete a person.
    pub async fn delete(&self, person_id: &WebexId) -> Result<()> {
        tracing::info!(%person_id, "Deleting person");
        self.inner.delete(&format!("/people/{}", person_id)).await
    }
}
