use std::collections::HashSet;
use std::path::Path;

use common::text::content_fingerprint;
use tracing::{debug, warn};

use crate::errors::{ConfigIssue, MappingError, Result};
use crate::models::{AdMapping, Platform, PlatformMapping};

const BUILTIN_DATASET: &str = include_str!("../data/ad_mappings.json");

/// Read-only view over one loaded dataset. Share it behind an `Arc`; nothing
/// here mutates after construction.
#[derive(Debug, Clone)]
pub struct MappingStore {
    dataset: AdMapping,
    fingerprint: String,
}

impl MappingStore {
    pub fn new(dataset: AdMapping) -> Result<Self> {
        let canonical = serde_json::to_vec(&dataset)?;
        let store = Self {
            fingerprint: content_fingerprint(&canonical),
            dataset,
        };
        for issue in store.validate() {
            warn!(%issue, "mapping dataset issue");
        }
        debug!(
            version = store.version().unwrap_or("unversioned"),
            platforms = store.dataset.platforms.len(),
            fingerprint = %store.fingerprint,
            "mapping dataset loaded"
        );
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: AdMapping = serde_json::from_str(json)?;
        Self::new(dataset)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// The dataset compiled into the crate, covering every platform.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn version(&self) -> Option<&str> {
        self.dataset.version.as_deref()
    }

    /// SHA-256 of the re-serialized dataset; equal content, equal fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn dataset(&self) -> &AdMapping {
        &self.dataset
    }

    /// Platforms present in the dataset, in enumeration order.
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        self.dataset.platforms.keys().copied()
    }

    pub fn get_platform(&self, platform: Platform) -> Result<&PlatformMapping> {
        self.dataset
            .platforms
            .get(&platform)
            .ok_or_else(|| MappingError::UnsupportedPlatform(platform.to_string()))
    }

    pub fn get_platform_by_id(&self, platform_id: &str) -> Result<&PlatformMapping> {
        let platform: Platform = platform_id.parse()?;
        self.get_platform(platform)
    }

    pub fn platform_info(&self, platform: Platform) -> Option<&PlatformMapping> {
        self.dataset.platforms.get(&platform)
    }

    /// Example ad copy for one category; empty when either side is unknown.
    pub fn ad_examples(&self, platform: Platform, category_id: &str) -> &[String] {
        self.platform_info(platform)
            .and_then(|mapping| mapping.category(category_id))
            .map(|category| category.examples.as_slice())
            .unwrap_or(&[])
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (&platform, mapping) in &self.dataset.platforms {
            let mut seen = HashSet::new();
            for category in &mapping.categories {
                if !seen.insert(category.id.as_str()) {
                    issues.push(ConfigIssue::DuplicateCategoryId {
                        platform,
                        category: category.id.clone(),
                    });
                }
                if category.keywords.is_empty() {
                    issues.push(ConfigIssue::EmptyKeywords {
                        platform,
                        category: category.id.clone(),
                    });
                }
                if !(category.weight.is_finite() && category.weight > 0.0) {
                    issues.push(ConfigIssue::NonPositiveWeight {
                        platform,
                        category: category.id.clone(),
                        weight: category.weight,
                    });
                }
            }
            for (index, rule) in mapping.rules.iter().enumerate() {
                if !(0.0..=1.0).contains(&rule.result.confidence) {
                    issues.push(ConfigIssue::ConfidenceOutOfRange {
                        platform,
                        rule: index,
                        confidence: rule.result.confidence,
                    });
                }
                for id in &rule.result.categories {
                    if mapping.category(id).is_none() {
                        issues.push(ConfigIssue::UnknownRuleCategory {
                            platform,
                            rule: index,
                            category: id.clone(),
                        });
                    }
                }
            }
        }
        issues
    }
}
