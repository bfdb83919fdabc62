use std::fmt;

use crate::models::Platform;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("platform {0} not supported")]
    UnsupportedPlatform(String),
    #[error("invalid mapping dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read mapping dataset: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MappingError>;

/// A dataset defect the engine tolerates by skipping the offending
/// contribution. Reported by `MappingStore::validate`, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    UnknownRuleCategory {
        platform: Platform,
        rule: usize,
        category: String,
    },
    EmptyKeywords {
        platform: Platform,
        category: String,
    },
    NonPositiveWeight {
        platform: Platform,
        category: String,
        weight: f64,
    },
    ConfidenceOutOfRange {
        platform: Platform,
        rule: usize,
        confidence: f64,
    },
    DuplicateCategoryId {
        platform: Platform,
        category: String,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::UnknownRuleCategory {
                platform,
                rule,
                category,
            } => write!(
                f,
                "{platform}: rule #{rule} references unknown category {category}"
            ),
            ConfigIssue::EmptyKeywords { platform, category } => {
                write!(f, "{platform}: category {category} has no keywords")
            }
            ConfigIssue::NonPositiveWeight {
                platform,
                category,
                weight,
            } => write!(f, "{platform}: category {category} has weight {weight}"),
            ConfigIssue::ConfidenceOutOfRange {
                platform,
                rule,
                confidence,
            } => write!(
                f,
                "{platform}: rule #{rule} confidence {confidence} outside [0, 1]"
            ),
            ConfigIssue::DuplicateCategoryId { platform, category } => {
                write!(f, "{platform}: category id {category} declared twice")
            }
        }
    }
}
