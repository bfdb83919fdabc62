use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MappingError;

/// The advertising surfaces a dataset can describe. Declaration order is the
/// fixed enumeration order used for batch runs and map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Google,
    Youtube,
    Tiktok,
    Linkedin,
    Amazon,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Google,
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Linkedin,
        Platform::Amazon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Google => "google",
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Linkedin => "linkedin",
            Platform::Amazon => "amazon",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = MappingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lower = input.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == lower)
            .ok_or_else(|| MappingError::UnsupportedPlatform(input.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMapping {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    Interest,
    Search,
    Purchase,
    App,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleTrigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleResult {
    pub categories: Vec<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRule {
    pub trigger: RuleTrigger,
    pub result: RuleResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformMapping {
    /// Display name, e.g. "Facebook".
    pub name: String,
    pub categories: Vec<CategoryMapping>,
    #[serde(default)]
    pub rules: Vec<PredictionRule>,
}

impl PlatformMapping {
    pub fn category(&self, id: &str) -> Option<&CategoryMapping> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Declaration index of a category id.
    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|category| category.id == id)
    }
}

/// Serialized dataset: `{ "version": ..., "platforms": { <id>: {...} } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdMapping {
    #[serde(default)]
    pub version: Option<String>,
    pub platforms: BTreeMap<Platform, PlatformMapping>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert_eq!(" tiktok ".parse::<Platform>().unwrap(), Platform::Tiktok);
    }

    #[test]
    fn unknown_platform_is_unsupported() {
        let err = "myspace".parse::<Platform>().unwrap_err();
        assert!(matches!(err, MappingError::UnsupportedPlatform(ref id) if id == "myspace"));
    }

    #[test]
    fn trigger_type_reads_lowercase_tag() {
        let rule: PredictionRule = serde_json::from_str(
            r#"{"trigger":{"type":"app","keywords":["fitness"]},
                "result":{"categories":["health"],"confidence":0.8}}"#,
        )
        .unwrap();
        assert_eq!(rule.trigger.kind, TriggerType::App);
        assert_eq!(rule.result.categories, vec!["health".to_string()]);
    }
}
