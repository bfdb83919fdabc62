pub mod aggregate;
pub mod confidence;
pub mod errors;
pub mod prediction;
pub mod predictor;
pub mod profile;
pub mod reasoning;
pub mod rules;
pub mod signals;

pub use errors::PredictionError;
pub use prediction::{AdCategory, AdPrediction};
pub use predictor::Predictor;
pub use profile::{AppUsage, Demographics, PurchaseRecord, SearchRecord, UserProfile};
pub use rules::{RuleEvaluator, RuleOutcome};
pub use signals::{KeywordMatcher, ScoreDelta, Signal};
