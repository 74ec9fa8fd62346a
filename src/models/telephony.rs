//! Webex Calling configuration models.

use serde::{Deserialize, Serialize};

use super::enums::{HuntPolicy, NumberState, NumberType, OwnerType};
use super::primitives::WebexId;

/// A call queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallQueue {
    /// Unique identifier
    pub id: WebexId,
    /// Name
    pub name: String,
    /// Location the queue belongs to
    #[serde(default)]
    pub location_id: Option<WebexId>,
    /// Name of that location
    #[serde(default)]
    pub location_name: Option<String>,
    /// Primary number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Extension
    #[serde(default)]
    pub extension: Option<String>,
    /// Whether the queue takes calls
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Routing policy, only on detail lookups
    #[serde(default)]
    pub call_policies: Option<CallPolicies>,
}

/// A hunt group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuntGroup {
    /// Unique identifier
    pub id: WebexId,
    /// Name
    pub name: String,
    /// Location the hunt group belongs to
    #[serde(default)]
    pub location_id: Option<WebexId>,
    /// Name of that location
    #[serde(default)]
    pub location_name: Option<String>,
    /// Primary number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Extension
    #[serde(default)]
    pub extension: Option<String>,
    /// Whether the hunt group takes calls
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Routing policy, only on detail lookups
    #[serde(default)]
    pub call_policies: Option<CallPolicies>,
}

/// How a queue or hunt group distributes calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPolicies {
    /// Routing policy
    pub policy: HuntPolicy,
    /// Whether to wait for an agent when all are busy
    #[serde(default)]
    pub waiting_enabled: Option<bool>,
}

/// A call park extension group of a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPark {
    /// Unique identifier
    pub id: WebexId,
    /// Name
    pub name: String,
    /// Location the call park belongs to
    #[serde(default)]
    pub location_id: Option<WebexId>,
    /// Name of that location
    #[serde(default)]
    pub location_name: Option<String>,
}

/// A phone number provisioned in Webex Calling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberListPhoneNumber {
    /// Number in E.164 format
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Extension
    #[serde(default)]
    pub extension: Option<String>,
    /// Routing prefix of the location
    #[serde(default)]
    pub routing_prefix: Option<String>,
    /// Provisioning state
    #[serde(default)]
    pub state: Option<NumberState>,
    /// Kind of number
    #[serde(default)]
    pub phone_number_type: Option<NumberType>,
    /// Whether this is the main number of the location
    #[serde(default)]
    pub main_number: bool,
    /// Whether this is a toll-free number
    #[serde(default)]
    pub toll_free_number: bool,
    /// Location the number is assigned to
    #[serde(default)]
    pub location: Option<NumberLocation>,
    /// Owner of the number
    #[serde(default)]
    pub owner: Option<NumberOwner>,
}

impl NumberListPhoneNumber {
    /// Returns `true` if no entity owns the number.
    pub fn is_unassigned(&self) -> bool {
        self.owner.is_none()
    }
}

/// Location reference on a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocation {
    /// Location ID
    pub id: WebexId,
    /// Location name
    #[serde(default)]
    pub name: Option<String>,
}

/// Owner of a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOwner {
    /// Owner ID
    #[serde(default)]
    pub id: Option<WebexId>,
    /// Kind of owner
    #[serde(default, rename = "type")]
    pub owner_type: Option<OwnerType>,
    /// First name, for people and workspaces
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name, for people and workspaces
    #[serde(default)]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phone_number_with_owner() {
        let number: NumberListPhoneNumber = serde_json::from_value(json!({
            "phoneNumber": "+19195551234",
            "extension": "1234",
            "state": "ACTIVE",
            "phoneNumberType": "PRIMARY",
            "mainNumber": false,
            "tollFreeNumber": false,
            "location": { "id": "bG9j", "name": "Raleigh" },
            "owner": { "id": "b3du", "type": "PEOPLE", "firstName": "Alice", "lastName": "Example" }
        }))
        .unwrap();

        assert_eq!(number.state, Some(NumberState::Active));
        assert_eq!(number.phone_number_type, Some(NumberType::Primary));
        assert_eq!(
            number.owner.as_ref().and_then(|o| o.owner_type.clone()),
            Some(OwnerType::People)
        );
        assert!(!number.is_unassigned());
    }

    #[test]
    fn test_unassigned_number() {
        let number: NumberListPhoneNumber =
            serde_json::from_value(json!({ "phoneNumber": "+19195550000", "state": "INACTIVE" }))
                .unwrap();
        assert!(number.is_unassigned());
        assert!(!number.main_number);
    }

    #[test]
    fn test_queue_with_policy() {
        let queue: CallQueue = serde_json::from_value(json!({
            "id": "cXVldWU",
            "name": "Support",
            "extension": "5001",
            "enabled": true,
            "callPolicies": { "policy": "CIRCULAR", "waitingEnabled": false }
        }))
        .unwrap();

        assert_eq!(queue.call_policies.unwrap().policy, HuntPolicy::Circular);
    }
}
