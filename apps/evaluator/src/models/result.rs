use serde::{Deserialize, Deserializer};

/// One evaluated resume as returned by the remote service.
///
/// Only `filename` is guaranteed. Which of the optional fields show up depends
/// on the mode. The outer `Option` is key presence, the inner one the value,
/// so a key sent as `null` still counts as present. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultRecord {
    pub filename: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub modern_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub matched: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub missing: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub career_path: Option<Option<String>>,
}

/// Only called when the key exists, so the field is present even if `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of a non-success response. `error` may be missing or not a string.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ServiceErrorBody {
    /// The structured message, if the service sent a non-empty string.
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|m| !m.is_empty())
    }
}
