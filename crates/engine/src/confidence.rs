use crate::prediction::AdCategory;
use crate::profile::UserProfile;

pub const BASE_CONFIDENCE: f64 = 0.1;
pub const INTERESTS_BONUS: f64 = 0.2;
pub const APPS_BONUS: f64 = 0.15;
pub const SEARCHES_BONUS: f64 = 0.15;
pub const PURCHASES_BONUS: f64 = 0.2;
pub const AD_PREFERENCES_BONUS: f64 = 0.15;
pub const TOP_CATEGORY_FACTOR: f64 = 0.15;

/// Overall confidence from profile completeness plus the strength of the
/// best category. `ranked` must be the full, untruncated ranking.
pub fn overall_confidence(profile: &UserProfile, ranked: &[AdCategory]) -> f64 {
    let bonuses = [
        (!profile.interests.is_empty(), INTERESTS_BONUS),
        (!profile.installed_apps.is_empty(), APPS_BONUS),
        (!profile.searches.is_empty(), SEARCHES_BONUS),
        (!profile.purchases.is_empty(), PURCHASES_BONUS),
        // any platform counts, not just the one being predicted
        (!profile.ad_preferences.is_empty(), AD_PREFERENCES_BONUS),
    ];
    let completeness: f64 = bonuses
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, bonus)| bonus)
        .sum();
    let top = ranked.first().map_or(0.0, |category| category.probability);
    (BASE_CONFIDENCE + completeness + top * TOP_CATEGORY_FACTOR).clamp(0.0, 1.0)
}
