use mapping::{MappingStore, Platform};

#[test]
fn builtin_dataset_covers_every_platform() {
    let store = MappingStore::builtin().expect("builtin dataset");
    let platforms: Vec<Platform> = store.platforms().collect();
    assert_eq!(platforms, Platform::ALL.to_vec());
    for platform in Platform::ALL {
        let mapping = store.get_platform(platform).expect("platform present");
        assert!(!mapping.categories.is_empty(), "{platform} has no categories");
        assert!(!mapping.name.is_empty());
    }
}

#[test]
fn builtin_dataset_is_clean() {
    let store = MappingStore::builtin().unwrap();
    let issues = store.validate();
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn builtin_dataset_is_versioned_and_fingerprinted() {
    let first = MappingStore::builtin().unwrap();
    let second = MappingStore::builtin().unwrap();
    assert_eq!(first.version(), Some("2024.1"));
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint().len(), 64);
}

#[test]
fn platform_info_and_examples_pass_through() {
    let store = MappingStore::builtin().unwrap();
    let google = store.platform_info(Platform::Google).expect("google");
    assert_eq!(google.name, "Google");
    let examples = store.ad_examples(Platform::Google, "tech");
    assert_eq!(examples, google.category("tech").unwrap().examples.as_slice());
    assert!(!examples.is_empty());
}

#[test]
fn keywords_are_lowercase() {
    let store = MappingStore::builtin().unwrap();
    for platform in store.platforms() {
        for category in &store.get_platform(platform).unwrap().categories {
            for keyword in &category.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }
}
