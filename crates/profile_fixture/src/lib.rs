use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use engine::{AppUsage, PurchaseRecord, SearchRecord, UserProfile};
use mapping::{MappingStore, Platform};

/// Small dataset with one "Tech & Gadgets" category plus filler categories
/// that share no keywords with the archetypes.
pub const TECH_DATASET: &str = r#"{
    "version": "test-1",
    "platforms": {
        "google": {
            "name": "Google",
            "categories": [
                {"id": "garden", "name": "Home & Garden", "keywords": ["garden", "plants"],
                 "examples": ["Spring bulbs on sale"], "weight": 0.7},
                {"id": "tech", "name": "Tech & Gadgets", "keywords": ["tech", "programming", "gadget"],
                 "examples": ["New laptop deals", "Smart home gadgets"], "weight": 1.0},
                {"id": "pets", "name": "Pet Supplies", "keywords": ["pet", "dog", "cat"],
                 "examples": ["Premium dog food"], "weight": 0.6}
            ],
            "rules": [
                {"trigger": {"type": "search", "keywords": ["laptop"]},
                 "result": {"categories": ["tech"], "confidence": 0.5}},
                {"trigger": {"type": "interest", "keywords": ["programming"]},
                 "result": {"categories": ["tech"], "confidence": 0.4}}
            ]
        }
    }
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    TechEnthusiast,
    FashionLover,
    FitnessFocused,
    BusinessProfessional,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::TechEnthusiast,
        Archetype::FashionLover,
        Archetype::FitnessFocused,
        Archetype::BusinessProfessional,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Archetype::TechEnthusiast => "tech_enthusiast",
            Archetype::FashionLover => "fashion_lover",
            Archetype::FitnessFocused => "fitness_focused",
            Archetype::BusinessProfessional => "business_professional",
        }
    }
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn app(package: &str, name: &str, minutes: f64, category: &str) -> AppUsage {
    AppUsage {
        package_name: package.into(),
        app_name: name.into(),
        usage_time_minutes: minutes,
        category: category.into(),
    }
}

fn search(query: &str, platform: Platform) -> SearchRecord {
    SearchRecord {
        query: query.into(),
        platform: platform.to_string(),
        timestamp: Some(fixed_time()),
    }
}

fn purchase(item: &str, category: &str, platform: Platform) -> PurchaseRecord {
    PurchaseRecord {
        item: item.into(),
        category: category.into(),
        platform: platform.to_string(),
        timestamp: Some(fixed_time()),
    }
}

pub fn empty_profile() -> UserProfile {
    UserProfile::new("empty", "Empty Profile")
}

pub fn archetype(kind: Archetype) -> UserProfile {
    let slug = kind.slug();
    let mut profile = UserProfile::new(
        format!("simulated_{slug}"),
        format!("Simulated {} Profile", slug.replace('_', " ")),
    );
    profile.created_at = Some(fixed_time());
    profile.last_updated = Some(fixed_time());

    match kind {
        Archetype::TechEnthusiast => {
            profile.interests = strings(&[
                "technology",
                "programming",
                "gadgets",
                "AI",
                "smartphones",
                "gaming",
            ]);
            profile.installed_apps = vec![
                app("com.github.android", "GitHub", 120.0, "productivity"),
                app("com.twitter.android", "Twitter", 90.0, "social"),
                app("com.android.chrome", "Chrome", 180.0, "web"),
            ];
            profile.searches = vec![
                search("best programming laptop 2024", Platform::Google),
                search("iPhone 15 pro review", Platform::Youtube),
            ];
        }
        Archetype::FashionLover => {
            profile.interests = strings(&[
                "fashion",
                "style",
                "beauty",
                "makeup",
                "designer brands",
                "trends",
            ]);
            profile.installed_apps = vec![
                app("com.instagram.android", "Instagram", 150.0, "social"),
                app("com.pinterest", "Pinterest", 75.0, "lifestyle"),
            ];
            profile.purchases = vec![
                purchase("designer handbag", "fashion", Platform::Amazon),
                purchase("skincare routine products", "beauty", Platform::Amazon),
            ];
        }
        Archetype::FitnessFocused => {
            profile.interests = strings(&[
                "fitness",
                "health",
                "nutrition",
                "workout",
                "wellness",
                "sports",
            ]);
            profile.installed_apps = vec![
                app("com.myfitnesspal.android", "MyFitnessPal", 45.0, "health"),
                app("com.nike.ntc", "Nike Training", 60.0, "fitness"),
            ];
        }
        Archetype::BusinessProfessional => {
            profile.interests = strings(&[
                "business",
                "entrepreneurship",
                "leadership",
                "finance",
                "networking",
            ]);
            profile.installed_apps = vec![
                app("com.linkedin.android", "LinkedIn", 90.0, "professional"),
                app("com.microsoft.office.outlook", "Outlook", 120.0, "productivity"),
            ];
        }
    }
    profile
}

pub fn tech_store() -> Result<Arc<MappingStore>> {
    let store = MappingStore::from_json_str(TECH_DATASET).context("parse tech fixture dataset")?;
    Ok(Arc::new(store))
}

pub fn builtin_store() -> Result<Arc<MappingStore>> {
    let store = MappingStore::builtin().context("load builtin dataset")?;
    Ok(Arc::new(store))
}

/// The builtin dataset with one platform removed.
pub fn builtin_store_without(platform: Platform) -> Result<Arc<MappingStore>> {
    let mut dataset = MappingStore::builtin()?.dataset().clone();
    dataset.platforms.remove(&platform);
    let store = MappingStore::new(dataset).context("rebuild dataset")?;
    Ok(Arc::new(store))
}
