//! Location models.

use serde::{Deserialize, Serialize};

use super::primitives::WebexId;

/// A physical location of an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier
    pub id: WebexId,
    /// Name
    pub name: String,
    /// Organization the location belongs to
    #[serde(default)]
    pub org_id: Option<WebexId>,
    /// Time zone in IANA format
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Preferred language, e.g. `en_us`
    #[serde(default)]
    pub preferred_language: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<Address>,
    /// Latitude
    #[serde(default)]
    pub latitude: Option<String>,
    /// Longitude
    #[serde(default)]
    pub longitude: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street address
    #[serde(default)]
    pub address1: Option<String>,
    /// Suite, floor or building
    #[serde(default)]
    pub address2: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// State or province
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code
    #[serde(default)]
    pub postal_code: Option<String>,
    /// ISO 3166-1 country code
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_deserialize() {
        let location: Location = serde_json::from_value(json!({
            "id": "Y2lzY29zcGFyazovL3VzL0xPQ0FUSU9OLzE",
            "name": "Raleigh",
            "timeZone": "America/New_York",
            "address": {
                "address1": "7200 Kit Creek Rd",
                "city": "Durham",
                "state": "NC",
                "postalCode": "27709",
                "country": "US"
            }
        }))
        .unwrap();

        assert_eq!(location.name, "Raleigh");
        let address = location.address.unwrap();
        assert_eq!(address.postal_code.as_deref(), Some("27709"));
        assert_eq!(address.address2, None);
    }
}
