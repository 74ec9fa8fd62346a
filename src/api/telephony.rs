//! Webex Calling configuration service.
//!
//! Calling listings wrap their records in resource-specific keys
//! (`queues`, `huntGroups`, ...) rather than `items`, and page through
//! `start`/`max` offsets linked from the `Link` header.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{
    plus1, CallPark, CallQueue, HuntGroup, NumberListPhoneNumber, NumberState, NumberType,
    OwnerType, WebexId,
};

/// Service for Webex Calling features.
///
/// # Example
///
/// ```no_run
/// use webex_rs::api::CallingQuery;
///
/// # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
/// let queues = client
///     .telephony()
///     .call_queues(CallingQuery::default())
///     .collect_vec()
///     .await?;
///
/// for queue in queues {
///     println!("{} ({:?})", queue.name, queue.location_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TelephonyService {
    inner: Arc<ClientInner>,
}

/// Query parameters shared by call queue, hunt group and call park listings.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallingQuery {
    /// Organization to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// Only this location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Name contains this string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number contains this string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

/// Query parameters for listing phone numbers.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumbersQuery {
    /// Organization to list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<WebexId>,
    /// Only this location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<WebexId>,
    /// Exact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Only numbers with or without an owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Kind of number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_type: Option<NumberType>,
    /// Provisioning state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<NumberState>,
    /// Kind of owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
    /// Owner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<WebexId>,
    /// Extension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Only toll-free numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toll_free_numbers: Option<bool>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl TelephonyService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List call queues.
    pub fn call_queues(&self, query: CallingQuery) -> PaginatedStream<CallQueue> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/telephony/config/queues")
            .item_key("queues")
            .build_with_query(&query)
    }

    /// List hunt groups.
    pub fn hunt_groups(&self, query: CallingQuery) -> PaginatedStream<HuntGroup> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/telephony/config/huntGroups")
            .item_key("huntGroups")
            .build_with_query(&query)
    }

    /// List the call parks of a location.
    ///
    /// `query.location_id` is ignored; the location is part of the path.
    pub fn call_parks(
        &self,
        location_id: &WebexId,
        query: CallingQuery,
    ) -> PaginatedStream<CallPark> {
        let query = CallingQuery {
            location_id: None,
            ..query
        };
        let path = format!("/telephony/config/locations/{}/callParks", location_id);
        PaginatedStreamBuilder::new(self.inner.clone(), path)
            .item_key("callParks")
            .build_with_query(&query)
    }

    /// List phone numbers.
    ///
    /// Ten digit North American numbers in the filter get a `+1` prefix.
    pub fn phone_numbers(&self, query: NumbersQuery) -> PaginatedStream<NumberListPhoneNumber> {
        let query = NumbersQuery {
            phone_number: query.phone_number.as_deref().map(plus1),
            ..query
        };
        PaginatedStreamBuilder::new(self.inner.clone(), "/telephony/config/numbers")
            .item_key("phoneNumbers")
            .build_with_query(&query)
    }
}
