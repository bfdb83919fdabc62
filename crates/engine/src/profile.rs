use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mapping::Platform;
use serde::{Deserialize, Serialize};

/// Everything the engine knows about one person. Text fields keep whatever
/// case the caller supplied; matching lowercases on the fly.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub demographics: Demographics,
    /// Ad topics the user reports seeing or liking, per platform.
    #[serde(default)]
    pub ad_preferences: BTreeMap<Platform, Vec<String>>,
    #[serde(default)]
    pub installed_apps: Vec<AppUsage>,
    #[serde(default)]
    pub searches: Vec<SearchRecord>,
    #[serde(default)]
    pub purchases: Vec<PurchaseRecord>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn preferences_for(&self, platform: Platform) -> &[String] {
        self.ad_preferences
            .get(&platform)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Demographics {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppUsage {
    #[serde(default)]
    pub package_name: String,
    pub app_name: String,
    #[serde(alias = "usageTime", default)]
    pub usage_time_minutes: f64,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRecord {
    pub query: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub item: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
