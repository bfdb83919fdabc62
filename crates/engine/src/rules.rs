use mapping::{PlatformMapping, PredictionRule, TriggerType};
use tracing::debug;

use crate::profile::UserProfile;
use crate::signals::{KeywordMatcher, ScoreDelta, Signal};

pub const RULE_BOOST_FACTOR: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleOutcome {
    pub deltas: Vec<ScoreDelta>,
    /// Indices of the rules that matched, in declaration order.
    pub fired: Vec<usize>,
}

impl RuleOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, category: usize, amount: f64) {
        self.deltas.push(ScoreDelta {
            category,
            amount,
            source: Signal::Rule,
        });
    }
}

/// Applies a platform's trigger rules. Rules are independent: every matching
/// rule contributes, and boosts on the same category add up.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEvaluator {
    matcher: KeywordMatcher,
}

impl RuleEvaluator {
    pub fn new(matcher: KeywordMatcher) -> Self {
        Self { matcher }
    }

    pub fn evaluate(&self, profile: &UserProfile, mapping: &PlatformMapping) -> RuleOutcome {
        let mut outcome = RuleOutcome::new();
        for (index, rule) in mapping.rules.iter().enumerate() {
            if !self.matches(rule, profile) {
                continue;
            }
            let confidence = rule.result.confidence;
            if !(0.0..=1.0).contains(&confidence) {
                debug!(rule = index, confidence, "rule confidence outside [0, 1], skipping");
                continue;
            }
            outcome.fired.push(index);
            let boost = confidence * RULE_BOOST_FACTOR;
            for id in &rule.result.categories {
                match mapping.category_index(id) {
                    Some(category) => outcome.push(category, boost),
                    None => debug!(
                        rule = index,
                        category = %id,
                        "rule targets unknown category, skipping"
                    ),
                }
            }
        }
        outcome
    }

    pub fn matches(&self, rule: &PredictionRule, profile: &UserProfile) -> bool {
        let keywords = &rule.trigger.keywords;
        match rule.trigger.kind {
            TriggerType::Interest => profile
                .interests
                .iter()
                .any(|interest| self.matcher.any_contained(&[interest.as_str()], keywords)),
            TriggerType::Search => profile
                .searches
                .iter()
                .any(|search| self.matcher.any_contained(&[search.query.as_str()], keywords)),
            TriggerType::Purchase => profile
                .purchases
                .iter()
                .any(|purchase| self.matcher.any_contained(&[purchase.item.as_str()], keywords)),
            TriggerType::App => profile.installed_apps.iter().any(|app| {
                self.matcher
                    .any_contained(&[app.category.as_str(), app.app_name.as_str()], keywords)
            }),
        }
    }
}
