use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A vehicle row rendered as a JSON object
///
/// The vehicle table carries listing attributes this server never
/// interprets, so rows keep whatever columns the query selected.
pub type Listing = Map<String, Value>;

/// Primary key of the `vehicle` table
///
/// Clients send it either as a JSON integer or as a string of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleId(pub i64);

impl<'de> Deserialize<'de> for VehicleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(id) => Ok(VehicleId(id)),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map(VehicleId)
                .map_err(|_| de::Error::custom("vehicleID must be an integer")),
        }
    }
}
