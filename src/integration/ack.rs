//! The success body returned with a 202.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::IntegrationError;

/// Acknowledgment of an accepted event.
///
/// Only its decodability is meaningful; `result` is usually `"ok"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    #[serde(default)]
    pub result: Option<String>,
}

impl Acknowledgment {
    /// Decodes an acknowledgment from a response body.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::Decode`] if the body is not a JSON object
    /// of the expected shape.
    pub fn decode(body: &[u8]) -> Result<Self, IntegrationError> {
        let value: Value = serde_json::from_slice(body).map_err(IntegrationError::Decode)?;

        // The derived deserializer would also take a sequence.
        if !value.is_object() {
            return Err(IntegrationError::Decode(serde_json::Error::invalid_type(
                unexpected(&value),
                &"an acknowledgment object",
            )));
        }

        serde_json::from_value(value).map_err(IntegrationError::Decode)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
