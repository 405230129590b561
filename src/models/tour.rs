use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    #[serde(default, deserialize_with = "crate::types::lenient_count")]
    pub day: u32,
    #[serde(default)]
    pub time_label: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ItineraryDay {
    /// "Day N" unless the guide gave the slot its own label.
    pub fn label(&self) -> String {
        match self.time_label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("Day {}", self.day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "crate::types::lenient_count")]
    pub max_guests: u32,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub duration: f64,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub itinerary_days: Vec<ItineraryDay>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub includes: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub excludes: Vec<String>,
}

impl Tour {
    pub fn price_label(&self) -> String {
        format!("{} {}", self.price, self.currency)
    }
}
