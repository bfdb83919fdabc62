use mapping::PlatformMapping;

use crate::prediction::AdCategory;
use crate::profile::UserProfile;

/// The top category is called out only above this probability.
pub const HIGH_LIKELIHOOD_THRESHOLD: f64 = 0.3;

/// Justification lines in a fixed order: collection sizes, the standout
/// category, then the platform.
pub fn generate_reasoning(
    profile: &UserProfile,
    mapping: &PlatformMapping,
    ranked: &[AdCategory],
) -> Vec<String> {
    let mut reasoning = Vec::new();

    if !profile.interests.is_empty() {
        reasoning.push(format!(
            "Based on {} stated interests",
            profile.interests.len()
        ));
    }
    if !profile.installed_apps.is_empty() {
        reasoning.push(format!(
            "Analyzed {} installed apps",
            profile.installed_apps.len()
        ));
    }
    if !profile.searches.is_empty() {
        reasoning.push(format!(
            "Considered {} search queries",
            profile.searches.len()
        ));
    }
    if !profile.purchases.is_empty() {
        reasoning.push(format!(
            "Factored in {} purchase records",
            profile.purchases.len()
        ));
    }

    if let Some(top) = ranked.first() {
        if top.probability > HIGH_LIKELIHOOD_THRESHOLD {
            reasoning.push(format!(
                "High likelihood of {} ads due to strong profile match",
                top.name
            ));
        }
    }

    reasoning.push(format!(
        "Predictions tailored for {} advertising algorithms",
        mapping.name
    ));
    reasoning
}
