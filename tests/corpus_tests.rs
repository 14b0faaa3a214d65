use formcorpus::augment::augment;
use formcorpus::catalog::{CatalogEntry, builtin_catalog, builtin_negatives};
use formcorpus::corpus::{TrainingSample, build_corpus, label_distribution};
use formcorpus::enums::FieldRole;
use formcorpus::error::AugmentErrorKind;

fn entry(name: &str, html: &str, labels: &[(&str, FieldRole)]) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        url: None,
        html: html.to_string(),
        labels: labels
            .iter()
            .map(|(field, role)| (field.to_string(), *role))
            .collect(),
    }
}

fn base_corpus() -> Vec<TrainingSample> {
    build_corpus(&builtin_catalog(), &builtin_negatives()).unwrap()
}

/// A mapped field name takes the label from the map; an unmapped one in the
/// same form defaults to none.
#[test]
fn labels_come_from_the_entry_map() {
    let github = entry(
        "GitHub Login",
        r#"
        <form action="/session" method="post">
          <input type="text" name="login" id="login_field" />
          <input type="text" name="webauthn_hint" />
        </form>
        "#,
        &[("login", FieldRole::Username)],
    );

    let samples = build_corpus(&[github], &[]).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].label, FieldRole::Username);
    assert_eq!(samples[0].element_name, "login");
    assert_eq!(samples[0].source, "GitHub Login");
    assert_eq!(samples[1].label, FieldRole::None);
    assert_eq!(samples[1].element_name, "webauthn_hint");
}

/// Every field of a negative example is labelled none, even when the entry
/// carries a label map.
#[test]
fn negative_example_fields_are_all_none() {
    let negative = entry(
        "Search Form",
        r#"<form><input type="text" name="login" /></form>"#,
        &[("login", FieldRole::Username)],
    );

    let samples = build_corpus(&[], &[negative]).unwrap();
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].label, FieldRole::None);
}

/// Output order: catalog iteration order, then negatives; document order
/// within each form.
#[test]
fn sample_order_follows_catalog_then_negatives() {
    let samples = base_corpus();

    assert_eq!(samples[0].source, "GitHub Login");
    assert_eq!(samples[0].element_name, "login");
    assert_eq!(samples[1].element_name, "password");

    let first_negative = samples
        .iter()
        .position(|s| s.source == "Search Form")
        .unwrap();
    // Everything from the first negative on is a negative sample.
    assert!(samples[first_negative..]
        .iter()
        .all(|s| s.label == FieldRole::None));
    // Everything before it comes from the labelled catalog.
    assert!(samples[..first_negative]
        .iter()
        .all(|s| s.source != "Search Form"));
}

/// The built-in catalog yields a fixed base corpus: 26 labelled-site fields
/// plus 10 negative fields.
#[test]
fn builtin_corpus_size_and_distribution() {
    let samples = base_corpus();
    assert_eq!(samples.len(), 36);

    let counts = label_distribution(&samples);
    assert_eq!(counts[&FieldRole::Password], 12);
    assert_eq!(counts[&FieldRole::Username], 6);
    assert_eq!(counts[&FieldRole::Email], 7);
    assert_eq!(counts[&FieldRole::Totp], 1);
    assert_eq!(counts[&FieldRole::None], 10);
}

/// An empty snippet is the hard build failure.
#[test]
fn empty_snippet_is_a_build_error() {
    let broken = entry("Broken", "   \n  ", &[]);
    let err = build_corpus(&[broken], &[]).unwrap_err();
    assert_eq!(err.entry, "Broken");
}

// ─── Augmentation ────────────────────────────────────────────────────────────

/// The result starts with the base samples unchanged, in order, and reaches
/// exactly the target size.
#[test]
fn augment_preserves_base_prefix_and_hits_target() {
    let base = base_corpus();
    let mut rng = fastrand::Rng::with_seed(7);
    let augmented = augment(&base, 200, &mut rng).unwrap();

    assert_eq!(augmented.len(), 200);
    assert_eq!(&augmented[..base.len()], &base[..]);
}

/// No synthesized sample is labelled none, and every one carries the
/// `_augmented` provenance suffix.
#[test]
fn synthesized_samples_are_positive_with_marked_provenance() {
    let base = base_corpus();
    let mut rng = fastrand::Rng::with_seed(7);
    let augmented = augment(&base, 150, &mut rng).unwrap();

    for sample in &augmented[base.len()..] {
        assert_ne!(sample.label, FieldRole::None);
        assert!(sample.source.ends_with("_augmented"), "{}", sample.source);
    }
}

/// Autocomplete dropout keeps the auto one-hot group mutually exclusive.
#[test]
fn synthesized_samples_keep_autocomplete_one_hot() {
    let base = base_corpus();
    let mut rng = fastrand::Rng::with_seed(11);
    let augmented = augment(&base, 300, &mut rng).unwrap();

    for sample in &augmented[base.len()..] {
        let f = &sample.features;
        let auto_sum = f.auto_username
            + f.auto_email
            + f.auto_current_password
            + f.auto_new_password
            + f.auto_one_time_code
            + f.auto_off
            + f.auto_other;
        assert_eq!(auto_sum, 1.0);
    }
}

/// The same base and seed reproduce the same corpus.
#[test]
fn augmentation_is_seed_reproducible() {
    let base = base_corpus();

    let mut rng_a = fastrand::Rng::with_seed(42);
    let mut rng_b = fastrand::Rng::with_seed(42);
    let a = augment(&base, 120, &mut rng_a).unwrap();
    let b = augment(&base, 120, &mut rng_b).unwrap();
    assert_eq!(a, b);

    let mut rng_c = fastrand::Rng::with_seed(43);
    let c = augment(&base, 120, &mut rng_c).unwrap();
    assert_ne!(a, c);
}

/// A base already at or above the target is returned unchanged.
#[test]
fn augment_is_noop_when_base_meets_target() {
    let base = base_corpus();
    let mut rng = fastrand::Rng::with_seed(7);
    let augmented = augment(&base, base.len(), &mut rng).unwrap();
    assert_eq!(augmented, base);
}

/// An all-negative base corpus is a fatal precondition violation, not an
/// infinite loop.
#[test]
fn all_negative_base_is_rejected() {
    let negative = entry(
        "Search Form",
        r#"<form><input type="text" name="q" /></form>"#,
        &[],
    );
    let base = build_corpus(&[], &[negative]).unwrap();

    let mut rng = fastrand::Rng::with_seed(7);
    let err = augment(&base, 10, &mut rng).unwrap_err();
    assert_eq!(err.kind, AugmentErrorKind::NoPositiveSamples);
}

/// An empty base below the target is rejected.
#[test]
fn empty_base_is_rejected() {
    let mut rng = fastrand::Rng::with_seed(7);
    let err = augment(&[], 10, &mut rng).unwrap_err();
    assert_eq!(err.kind, AugmentErrorKind::EmptyBase);
}

/// The trainer's label → class index mapping is positionally bound to the
/// model's output head: username 0, password 1, email 2, totp 3, none 4.
#[test]
fn class_indices_match_the_trainer_contract() {
    let roles = [
        (FieldRole::Username, 0),
        (FieldRole::Password, 1),
        (FieldRole::Email, 2),
        (FieldRole::Totp, 3),
        (FieldRole::None, 4),
    ];

    for (role, index) in roles {
        assert_eq!(role.class_index(), index, "{}", role);
        assert_eq!(FieldRole::from_class_index(role.class_index()), role);
    }

    // Out-of-range indices degrade to none, like unknown label strings.
    assert_eq!(FieldRole::from_class_index(5), FieldRole::None);
    assert_eq!(FieldRole::from_class_index(u32::MAX), FieldRole::None);
}

/// The convenience entry point composes build and augment over the built-in
/// catalog.
#[test]
fn generate_composes_the_pipeline() {
    let result = formcorpus::generate(&formcorpus::GenerateOptions {
        target_size: 100,
        seed: 1,
    })
    .unwrap();

    assert_eq!(result.base_count, 36);
    assert_eq!(result.samples.len(), 100);
    assert_eq!(&result.samples[..36], &base_corpus()[..]);
}
