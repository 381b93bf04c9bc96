use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The dashboard API reports outcomes in the response body, not in the HTTP
/// status line: every JSON body carries a `status` field, and failures add a
/// human-readable `message`. The rest of the body is endpoint-specific and
/// passed through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Value);

impl Envelope {
    pub fn new(body: Value) -> Self {
        Envelope(body)
    }

    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Whether `status` is truthy. The upstream service is loosely typed
    /// about this field, so truthiness follows its conventions: `true`,
    /// non-zero numbers, and non-empty strings count; `false`, `0`, `""`,
    /// `null`, and a missing field do not.
    pub fn ok(&self) -> bool {
        self.0.get("status").is_some_and(truthy)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Deserializes a single top-level field, e.g. `field::<String>("token")`.
    /// Returns `None` when the field is absent or has the wrong shape.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.0.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }
}

impl From<Value> for Envelope {
    fn from(body: Value) -> Self {
        Envelope(body)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
