//! Icon data models shared between the frontend, the session state and the
//! generation endpoint's wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Minimalist,
    #[serde(rename = "3d")]
    ThreeD,
    Flat,
    Gradient,
    Glassmorphism,
    Abstract,
    Skeuomorphic,
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle::Minimalist
    }
}

impl IconStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Minimalist => "minimalist",
            IconStyle::ThreeD => "3d",
            IconStyle::Flat => "flat",
            IconStyle::Gradient => "gradient",
            IconStyle::Glassmorphism => "glassmorphism",
            IconStyle::Abstract => "abstract",
            IconStyle::Skeuomorphic => "skeuomorphic",
        }
    }
}

/// Form fields driving one generation request. Edited freely in place;
/// a clone is frozen at submit time and travels with the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    pub app_name: String,
    pub description: String,
    pub style: IconStyle,
    pub primary_color: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            description: String::new(),
            style: IconStyle::Minimalist,
            primary_color: "#2563eb".into(),
        }
    }
}

/// One successful generation. Created once, never mutated, removed only by
/// explicit user deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedIcon {
    pub id: String,
    pub url: String,
    pub config: IconConfig,
    pub created_at: DateTime<Utc>,
}
