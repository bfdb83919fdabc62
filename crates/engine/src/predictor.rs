use std::collections::BTreeMap;
use std::sync::Arc;

use common::EngineConfig;
use mapping::{MappingStore, Platform, PlatformMapping};
use tracing::{debug, warn};

use crate::aggregate::{fold_deltas, rank, seed_scores, source_totals};
use crate::confidence::overall_confidence;
use crate::errors::Result;
use crate::prediction::{AdCategory, AdPrediction};
use crate::profile::UserProfile;
use crate::reasoning::generate_reasoning;
use crate::rules::RuleEvaluator;
use crate::signals::{
    score_ad_preferences, score_app_usage, score_interests, score_purchases, score_searches,
    KeywordMatcher, ScoreDelta,
};

/// Turns a profile into per-platform ad predictions against one mapping
/// dataset. Holds no mutable state, so a single instance can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Predictor {
    store: Arc<MappingStore>,
    config: EngineConfig,
    matcher: KeywordMatcher,
}

impl Predictor {
    pub fn new(store: Arc<MappingStore>, config: EngineConfig) -> Self {
        let matcher = KeywordMatcher::new(config.min_keyword_len);
        Self {
            store,
            config,
            matcher,
        }
    }

    pub fn with_defaults(store: Arc<MappingStore>) -> Self {
        Self::new(store, EngineConfig::default())
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    pub fn generate_predictions(
        &self,
        profile: &UserProfile,
        platform: Platform,
    ) -> Result<AdPrediction> {
        let mapping = self.store.get_platform(platform)?;
        let ranked = self.rank_categories(profile, platform, mapping);
        let confidence = overall_confidence(profile, &ranked);
        let reasoning = generate_reasoning(profile, mapping, &ranked);

        debug!(
            %platform,
            profile = %profile.id,
            top = ranked.first().map(|c| c.name.as_str()).unwrap_or("-"),
            confidence,
            "prediction generated"
        );

        let mut categories = ranked;
        categories.truncate(self.config.top_n);
        Ok(AdPrediction {
            platform,
            categories,
            confidence,
            reasoning,
        })
    }

    /// Same as [`Predictor::generate_predictions`] for a raw platform id.
    pub fn generate_predictions_for(
        &self,
        profile: &UserProfile,
        platform_id: &str,
    ) -> Result<AdPrediction> {
        let platform: Platform = platform_id.parse()?;
        self.generate_predictions(profile, platform)
    }

    /// Runs every platform. A platform that fails is left out of the map and
    /// never affects the others.
    pub fn generate_all_predictions(
        &self,
        profile: &UserProfile,
    ) -> BTreeMap<Platform, AdPrediction> {
        let mut predictions = BTreeMap::new();
        for platform in Platform::ALL {
            match self.generate_predictions(profile, platform) {
                Ok(prediction) => {
                    predictions.insert(platform, prediction);
                }
                Err(err) => warn!(%platform, error = %err, "skipping platform"),
            }
        }
        predictions
    }

    pub fn ad_examples(&self, platform: Platform, category_id: &str) -> &[String] {
        self.store.ad_examples(platform, category_id)
    }

    pub fn platform_info(&self, platform: Platform) -> Option<&PlatformMapping> {
        self.store.platform_info(platform)
    }

    /// Full ranking, before truncation.
    pub fn rank_categories(
        &self,
        profile: &UserProfile,
        platform: Platform,
        mapping: &PlatformMapping,
    ) -> Vec<AdCategory> {
        let deltas = self.collect_deltas(profile, platform, mapping);
        let scores = fold_deltas(seed_scores(mapping), deltas);
        rank(mapping, &scores)
    }

    fn collect_deltas(
        &self,
        profile: &UserProfile,
        platform: Platform,
        mapping: &PlatformMapping,
    ) -> Vec<ScoreDelta> {
        let matcher = &self.matcher;
        let rules = RuleEvaluator::new(self.matcher).evaluate(profile, mapping);
        if !rules.fired.is_empty() {
            debug!(%platform, fired = ?rules.fired, "prediction rules matched");
        }

        let mut deltas = score_interests(&profile.interests, mapping, matcher);
        deltas.extend(score_ad_preferences(
            profile.preferences_for(platform),
            mapping,
            matcher,
        ));
        deltas.extend(score_app_usage(&profile.installed_apps, mapping, matcher));
        deltas.extend(score_searches(&profile.searches, mapping, matcher));
        deltas.extend(score_purchases(&profile.purchases, mapping, matcher));
        deltas.extend(rules.deltas);
        debug!(%platform, sources = ?source_totals(&deltas), "signal contributions");
        deltas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "platforms": {
            "linkedin": {
                "name": "LinkedIn",
                "categories": [
                    {"id": "jobs", "name": "Jobs", "keywords": ["job", "career"],
                     "examples": ["We're hiring"], "weight": 1.0}
                ],
                "rules": []
            }
        }
    }"#;

    fn predictor() -> Predictor {
        Predictor::with_defaults(Arc::new(MappingStore::from_json_str(SINGLE).unwrap()))
    }

    #[test]
    fn unknown_platform_id_is_rejected() {
        let err = predictor()
            .generate_predictions_for(&UserProfile::default(), "myspace")
            .unwrap_err();
        assert!(err.is_unsupported_platform());
    }

    #[test]
    fn absent_platform_is_rejected() {
        let err = predictor()
            .generate_predictions(&UserProfile::default(), Platform::Amazon)
            .unwrap_err();
        assert!(err.is_unsupported_platform());
    }

    #[test]
    fn ad_preferences_only_count_for_their_platform() {
        let predictor = predictor();
        let mut profile = UserProfile::default();
        profile
            .ad_preferences
            .insert(Platform::Facebook, vec!["career coaching".into()]);
        let prediction = predictor
            .generate_predictions(&profile, Platform::Linkedin)
            .unwrap();
        assert!((prediction.categories[0].probability - 0.1).abs() < 1e-12);

        profile
            .ad_preferences
            .insert(Platform::Linkedin, vec!["career coaching".into()]);
        let prediction = predictor
            .generate_predictions(&profile, Platform::Linkedin)
            .unwrap();
        assert!((prediction.categories[0].probability - (0.1 + 0.5 * 0.4)).abs() < 1e-12);
    }

    #[test]
    fn helpers_pass_through_store() {
        let predictor = predictor();
        assert_eq!(predictor.ad_examples(Platform::Linkedin, "jobs"), ["We're hiring"]);
        assert_eq!(
            predictor.platform_info(Platform::Linkedin).map(|m| m.name.as_str()),
            Some("LinkedIn")
        );
        assert!(predictor.platform_info(Platform::Google).is_none());
    }
}
