use mapping::PlatformMapping;

use crate::prediction::AdCategory;
use crate::signals::{ScoreDelta, Signal};

/// Every category starts here before any signal is applied.
pub const BASE_SCORE: f64 = 0.1;

pub fn seed_scores(mapping: &PlatformMapping) -> Vec<f64> {
    vec![BASE_SCORE; mapping.categories.len()]
}

/// Adds each delta onto its category. Deltas pointing past the end are
/// ignored.
pub fn fold_deltas<I>(scores: Vec<f64>, deltas: I) -> Vec<f64>
where
    I: IntoIterator<Item = ScoreDelta>,
{
    deltas.into_iter().fold(scores, |mut acc, delta| {
        if let Some(score) = acc.get_mut(delta.category) {
            *score += delta.amount;
        }
        acc
    })
}

/// Total boost per signal source, in `Signal::ALL` order. Sources with no
/// deltas are left out.
pub fn source_totals(deltas: &[ScoreDelta]) -> Vec<(Signal, f64)> {
    Signal::ALL
        .into_iter()
        .filter_map(|source| {
            let mut matched = deltas.iter().filter(|d| d.source == source).peekable();
            matched.peek()?;
            Some((source, matched.map(|d| d.amount).sum()))
        })
        .collect()
}

/// Clamps to `[0, 1]` and sorts by probability, highest first. The sort is
/// stable so ties keep declaration order.
pub fn rank(mapping: &PlatformMapping, scores: &[f64]) -> Vec<AdCategory> {
    let mut ranked: Vec<AdCategory> = mapping
        .categories
        .iter()
        .zip(scores)
        .map(|(category, &score)| AdCategory {
            id: category.id.clone(),
            name: category.name.clone(),
            probability: score.clamp(0.0, 1.0),
            examples: category.examples.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    ranked
}
