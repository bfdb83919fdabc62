use std::sync::Arc;
use std::thread;

use engine::Predictor;
use mapping::Platform;
use profile_fixture::{archetype, builtin_store, builtin_store_without, Archetype};

#[test]
fn batch_covers_every_platform() {
    let predictor = Predictor::with_defaults(builtin_store().unwrap());
    let predictions = predictor.generate_all_predictions(&archetype(Archetype::TechEnthusiast));
    let platforms: Vec<Platform> = predictions.keys().copied().collect();
    assert_eq!(platforms, Platform::ALL.to_vec());
    for (platform, prediction) in &predictions {
        assert_eq!(prediction.platform, *platform);
    }
}

#[test]
fn missing_platform_is_left_out_of_batch() {
    let predictor = Predictor::with_defaults(builtin_store_without(Platform::Tiktok).unwrap());
    let profile = archetype(Archetype::FashionLover);

    assert!(predictor
        .generate_predictions(&profile, Platform::Tiktok)
        .unwrap_err()
        .is_unsupported_platform());

    let predictions = predictor.generate_all_predictions(&profile);
    assert_eq!(predictions.len(), 6);
    assert!(!predictions.contains_key(&Platform::Tiktok));
    for platform in Platform::ALL.into_iter().filter(|p| *p != Platform::Tiktok) {
        let single = predictor.generate_predictions(&profile, platform).unwrap();
        assert_eq!(predictions[&platform], single);
    }
}

#[test]
fn concurrent_callers_see_identical_results() {
    let predictor = Arc::new(Predictor::with_defaults(builtin_store().unwrap()));
    let profile = Arc::new(archetype(Archetype::BusinessProfessional));
    let expected = predictor.generate_all_predictions(&profile);

    let handles: Vec<_> = Platform::ALL
        .into_iter()
        .map(|platform| {
            let predictor = Arc::clone(&predictor);
            let profile = Arc::clone(&profile);
            thread::spawn(move || {
                let prediction = predictor.generate_predictions(&profile, platform);
                (platform, prediction)
            })
        })
        .collect();

    for handle in handles {
        let (platform, prediction) = handle.join().expect("worker panicked");
        assert_eq!(prediction.unwrap(), expected[&platform]);
    }
}
