use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub store_slug: String,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub about_text: Option<String>,
}

/// Guide profile and store branding, as served by `GET {base}/{slug}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideStore {
    pub guide: Guide,
    pub store: Store,
}

impl GuideStore {
    pub const FALLBACK_STORE_NAME: &'static str = "Guide Store";
    pub const FALLBACK_GUIDE_NAME: &'static str = "Your Guide";

    pub fn store_name(&self) -> &str {
        non_blank(&self.store.store_name).unwrap_or(Self::FALLBACK_STORE_NAME)
    }

    pub fn guide_name(&self) -> &str {
        non_blank(&self.guide.full_name).unwrap_or(Self::FALLBACK_GUIDE_NAME)
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}
