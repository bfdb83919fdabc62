use common::text::{contains_keyword, loose_match, passes_floor};
use mapping::{CategoryMapping, PlatformMapping};

use crate::profile::{AppUsage, PurchaseRecord, SearchRecord};

pub const INTEREST_FACTOR: f64 = 0.3;
pub const AD_PREFERENCE_FACTOR: f64 = 0.4;
pub const APP_USAGE_FACTOR: f64 = 0.2;
pub const SEARCH_FACTOR: f64 = 0.25;
pub const PURCHASE_FACTOR: f64 = 0.35;
/// Usage beyond this many hours counts the same as this many.
pub const USAGE_HOURS_CAP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Interest,
    AdPreference,
    AppUsage,
    Search,
    Purchase,
    Rule,
}

impl Signal {
    pub const ALL: [Signal; 6] = [
        Signal::Interest,
        Signal::AdPreference,
        Signal::AppUsage,
        Signal::Search,
        Signal::Purchase,
        Signal::Rule,
    ];
}

/// A non-negative boost for the category at `category` (declaration index).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreDelta {
    pub category: usize,
    pub amount: f64,
    pub source: Signal,
}

/// Keyword matching with an optional length floor. The default floor of 0
/// keeps every keyword in play.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher {
    min_keyword_len: usize,
}

impl KeywordMatcher {
    pub fn new(min_keyword_len: usize) -> Self {
        Self { min_keyword_len }
    }

    fn usable<'a>(&self, keywords: &'a [String]) -> impl Iterator<Item = &'a String> + 'a {
        let floor = self.min_keyword_len;
        keywords.iter().filter(move |k| passes_floor(k, floor))
    }

    /// Keywords that either contain or are contained in `text`.
    pub fn loose_count(&self, text: &str, keywords: &[String]) -> usize {
        self.usable(keywords)
            .filter(|keyword| loose_match(text, keyword))
            .count()
    }

    /// Keywords contained in `text`.
    pub fn contained_count(&self, text: &str, keywords: &[String]) -> usize {
        self.usable(keywords)
            .filter(|keyword| contains_keyword(text, keyword))
            .count()
    }

    /// True when any of `texts` contains any keyword.
    pub fn any_contained(&self, texts: &[&str], keywords: &[String]) -> bool {
        self.usable(keywords)
            .any(|keyword| texts.iter().any(|text| contains_keyword(text, keyword)))
    }
}

/// Categories with a zero, negative or non-finite weight contribute nothing.
pub fn scorable(category: &CategoryMapping) -> bool {
    category.weight.is_finite() && category.weight > 0.0
}

fn ratio_boost(category: &CategoryMapping, matches: usize, factor: f64) -> Option<f64> {
    let total = category.keywords.len();
    if matches == 0 || total == 0 || !scorable(category) {
        return None;
    }
    Some((matches as f64 / total as f64) * category.weight * factor)
}

fn ratio_deltas<'a, I, F>(
    texts: I,
    mapping: &PlatformMapping,
    factor: f64,
    source: Signal,
    count: F,
) -> Vec<ScoreDelta>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str, &[String]) -> usize,
{
    let mut deltas = Vec::new();
    for text in texts {
        for (index, category) in mapping.categories.iter().enumerate() {
            let matches = count(text, &category.keywords);
            if let Some(amount) = ratio_boost(category, matches, factor) {
                deltas.push(ScoreDelta {
                    category: index,
                    amount,
                    source,
                });
            }
        }
    }
    deltas
}

pub fn score_interests(
    interests: &[String],
    mapping: &PlatformMapping,
    matcher: &KeywordMatcher,
) -> Vec<ScoreDelta> {
    ratio_deltas(
        interests.iter().map(String::as_str),
        mapping,
        INTEREST_FACTOR,
        Signal::Interest,
        |text, keywords| matcher.loose_count(text, keywords),
    )
}

/// `preferences` must already be the list recorded for the platform being
/// scored.
pub fn score_ad_preferences(
    preferences: &[String],
    mapping: &PlatformMapping,
    matcher: &KeywordMatcher,
) -> Vec<ScoreDelta> {
    ratio_deltas(
        preferences.iter().map(String::as_str),
        mapping,
        AD_PREFERENCE_FACTOR,
        Signal::AdPreference,
        |text, keywords| matcher.loose_count(text, keywords),
    )
}

pub fn score_searches(
    searches: &[SearchRecord],
    mapping: &PlatformMapping,
    matcher: &KeywordMatcher,
) -> Vec<ScoreDelta> {
    ratio_deltas(
        searches.iter().map(|search| search.query.as_str()),
        mapping,
        SEARCH_FACTOR,
        Signal::Search,
        |text, keywords| matcher.contained_count(text, keywords),
    )
}

/// 0 for no usage, 1 at the hours cap and above.
pub fn usage_weight(minutes: f64) -> f64 {
    let hours = (minutes.max(0.0) / 60.0).min(USAGE_HOURS_CAP);
    hours / USAGE_HOURS_CAP
}

pub fn score_app_usage(
    apps: &[AppUsage],
    mapping: &PlatformMapping,
    matcher: &KeywordMatcher,
) -> Vec<ScoreDelta> {
    let mut deltas = Vec::new();
    for app in apps {
        let usage = usage_weight(app.usage_time_minutes);
        if usage == 0.0 {
            continue;
        }
        let texts = [app.category.as_str(), app.app_name.as_str()];
        for (index, category) in mapping.categories.iter().enumerate() {
            if scorable(category) && matcher.any_contained(&texts, &category.keywords) {
                deltas.push(ScoreDelta {
                    category: index,
                    amount: category.weight * APP_USAGE_FACTOR * usage,
                    source: Signal::AppUsage,
                });
            }
        }
    }
    deltas
}

pub fn score_purchases(
    purchases: &[PurchaseRecord],
    mapping: &PlatformMapping,
    matcher: &KeywordMatcher,
) -> Vec<ScoreDelta> {
    let mut deltas = Vec::new();
    for purchase in purchases {
        let texts = [purchase.item.as_str(), purchase.category.as_str()];
        for (index, category) in mapping.categories.iter().enumerate() {
            if scorable(category) && matcher.any_contained(&texts, &category.keywords) {
                deltas.push(ScoreDelta {
                    category: index,
                    amount: category.weight * PURCHASE_FACTOR,
                    source: Signal::Purchase,
                });
            }
        }
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> PlatformMapping {
        PlatformMapping {
            name: "Test".into(),
            categories: vec![
                CategoryMapping {
                    id: "tech".into(),
                    name: "Tech & Gadgets".into(),
                    keywords: vec!["tech".into(), "programming".into(), "gadget".into()],
                    examples: vec![],
                    weight: 1.0,
                },
                CategoryMapping {
                    id: "empty".into(),
                    name: "No keywords".into(),
                    keywords: vec![],
                    examples: vec![],
                    weight: 1.0,
                },
            ],
            rules: vec![],
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interests_score_each_string_independently() {
        let interests = vec!["technology".to_string(), "Programming".to_string()];
        let deltas = score_interests(&interests, &platform(), &KeywordMatcher::default());
        assert_eq!(deltas.len(), 2);
        assert!(deltas.iter().all(|d| d.category == 0));
        let total: f64 = deltas.iter().map(|d| d.amount).sum();
        assert!(close(total, 0.2));
    }

    #[test]
    fn generic_interest_matches_longer_keyword() {
        let deltas = score_interests(&["gad".to_string()], &platform(), &KeywordMatcher::default());
        assert_eq!(deltas.len(), 1);
        assert!(close(deltas[0].amount, 0.1));
    }

    #[test]
    fn searches_only_match_in_one_direction() {
        let searches = vec![SearchRecord {
            query: "gad".into(),
            platform: "google".into(),
            timestamp: None,
        }];
        assert!(score_searches(&searches, &platform(), &KeywordMatcher::default()).is_empty());
    }

    #[test]
    fn usage_weight_caps_at_five_hours() {
        assert!(close(usage_weight(60.0), 0.2));
        assert!(close(usage_weight(300.0), 1.0));
        assert!(close(usage_weight(10_000.0), 1.0));
        assert_eq!(usage_weight(-30.0), 0.0);
    }

    #[test]
    fn app_usage_uses_flat_weight() {
        let apps = vec![AppUsage {
            package_name: "io.gadgets".into(),
            app_name: "Gadget Hub".into(),
            usage_time_minutes: 150.0,
            category: "shopping".into(),
        }];
        let deltas = score_app_usage(&apps, &platform(), &KeywordMatcher::default());
        assert_eq!(deltas.len(), 1);
        assert!(close(deltas[0].amount, 1.0 * 0.2 * 0.5));
    }

    #[test]
    fn purchases_match_item_or_category() {
        let purchases = vec![PurchaseRecord {
            item: "usb hub".into(),
            category: "Tech accessories".into(),
            platform: "amazon".into(),
            timestamp: None,
        }];
        let deltas = score_purchases(&purchases, &platform(), &KeywordMatcher::default());
        assert_eq!(deltas.len(), 1);
        assert!(close(deltas[0].amount, 0.35));
    }

    #[test]
    fn non_positive_weight_never_boosts() {
        let mut mapping = platform();
        mapping.categories[0].weight = -1.0;
        let matcher = KeywordMatcher::default();
        assert!(score_interests(&["tech".to_string()], &mapping, &matcher).is_empty());
        let purchases = vec![PurchaseRecord {
            item: "tech gadget".into(),
            category: String::new(),
            platform: String::new(),
            timestamp: None,
        }];
        assert!(score_purchases(&purchases, &mapping, &matcher).is_empty());
        mapping.categories[0].weight = f64::NAN;
        let apps = vec![AppUsage {
            package_name: String::new(),
            app_name: "Gadget Hub".into(),
            usage_time_minutes: 120.0,
            category: "tech".into(),
        }];
        assert!(score_app_usage(&apps, &mapping, &matcher).is_empty());
    }

    #[test]
    fn keyword_floor_drops_short_keywords() {
        let matcher = KeywordMatcher::new(5);
        let deltas = score_interests(&["technology".to_string()], &platform(), &matcher);
        assert!(deltas.is_empty());
    }
}
