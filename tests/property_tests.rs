use formcorpus::features::{FEATURE_COUNT, FieldFeatures};
use formcorpus::patterns::{PatternCategory, match_score};
use formcorpus::serialize::CorpusRecord;
use proptest::prelude::*;

static ALL_CATEGORIES: &[PatternCategory] = &[
    PatternCategory::Username,
    PatternCategory::Login,
    PatternCategory::Email,
    PatternCategory::Password,
    PatternCategory::Totp,
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Match scores are bounded in [0, 1] for any input text.
    #[test]
    fn match_score_bounded(text in ".{0,64}") {
        for category in ALL_CATEGORIES {
            let score = match_score(&text, *category);
            prop_assert!((0.0..=1.0).contains(&score),
                "score {} out of range for {:?} on {:?}", score, category, text);
        }
    }

    // Appending text never makes a substring stop matching.
    #[test]
    fn match_score_monotone_under_extension(prefix in "[a-z]{0,16}", suffix in "[a-z]{0,16}") {
        let extended = format!("{}login{}", prefix, suffix);
        for category in ALL_CATEGORIES {
            prop_assert!(
                match_score(&extended, *category) >= match_score("login", *category)
            );
        }
    }

    // features → vector → features is lossless.
    #[test]
    fn vector_round_trip(slots in proptest::collection::vec(0.0f32..=1.0, FEATURE_COUNT)) {
        let vector: [f32; FEATURE_COUNT] = slots.as_slice().try_into().unwrap();
        let features = FieldFeatures::from_vector(&vector);
        prop_assert_eq!(features.to_vector(), vector);
    }

    // Corpus records survive a JSON round trip bit-exactly.
    #[test]
    fn record_json_round_trip(
        slots in proptest::collection::vec(0.0f32..=1.0, FEATURE_COUNT),
        source in "[A-Za-z ]{1,24}",
        name in "[a-z_\\[\\]]{0,16}",
    ) {
        let record = CorpusRecord {
            feature_vector: slots,
            label: "username".to_string(),
            source,
            element_id: String::new(),
            element_name: name,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: CorpusRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, record);
    }
}

/// Empty text scores zero against every category (degenerate case pinned
/// outside the random suite).
#[test]
fn empty_text_zero_rule() {
    for category in ALL_CATEGORIES {
        assert_eq!(match_score("", *category), 0.0);
    }
}
