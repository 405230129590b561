use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{GuideStore, Tour};

/// Envelope wrapping every successful storefront API response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// The payload, only when the API flagged the call as successful
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

pub type GuideStoreResponse = ApiEnvelope<GuideStore>;

/// `data` of `GET {base}/{slug}/tours`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ToursData {
    #[serde(default, deserialize_with = "skip_invalid")]
    pub tours: Option<Vec<Tour>>,
}

pub type ToursResponse = ApiEnvelope<ToursData>;

/// Error body the API may attach to a non-2xx response
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole-number count that tolerates `null`, negatives and fractions.
/// Anything unusable becomes 0.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if !n.is_finite() || n < 1.0 {
        return Ok(0);
    }
    Ok(n.min(u32::MAX as f64) as u32)
}

/// Decodes a list item by item, dropping the entries that do not fit `T`.
fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let total = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("Skipping malformed list entry: {e}");
                None
            }
        })
        .collect();
    if kept.len() < total {
        log::warn!("Kept {} of {} entries", kept.len(), total);
    }
    Ok(Some(kept))
}
