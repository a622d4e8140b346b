use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Accept any JSON value and keep it only if it is a number.
fn number_or_none<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => Some(number),
        _ => None,
    })
}

/// Accept any JSON value and keep it only if it is a string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

pub mod simulator {
    use super::*;

    /// Request body for `POST /simulator`.
    ///
    /// Every field is optional and tolerant: a value of the wrong JSON type is
    /// read as if it were missing, so a well-formed object always deserializes.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SimulationRequest {
        #[serde(default, deserialize_with = "number_or_none")]
        pub current_score: Option<Number>,
        #[serde(default, deserialize_with = "string_or_none")]
        pub action: Option<String>,
        #[serde(default, deserialize_with = "number_or_none")]
        pub amount: Option<Number>,
    }

    /// Response body for `POST /simulator`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SimulationResponse {
        /// Score as sent by the client, `null` when it was missing.
        pub original_score: Option<Number>,
        pub simulated_score: i64,
        /// Delta before clamping, see `engine::SimulationOutcome::change`.
        pub change: i64,
        pub message: String,
    }
}

pub mod health {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}
