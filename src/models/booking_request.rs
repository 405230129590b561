use serde::{Deserialize, Serialize};

/// Extra details required from travelers who are not residents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalInfo {
    pub nationality: String,
    pub passport_number: String,
    pub country_of_residence: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

/// Body of `POST {base}/{slug}/tours/{tour_id}/book`.
///
/// Absent sections are omitted from the JSON rather than sent as `null`
/// or empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub tour_date: String,
    pub guests: u32,
    pub is_international_traveler: bool,
    #[serde(flatten)]
    pub international: Option<InternationalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_allergies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
}
