pub mod errors;
pub mod models;
pub mod store;

pub use errors::{ConfigIssue, MappingError};
pub use models::{
    AdMapping, CategoryMapping, Platform, PlatformMapping, PredictionRule, RuleResult,
    RuleTrigger, TriggerType,
};
pub use store::MappingStore;
