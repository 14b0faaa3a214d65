//! Corpus augmentation: synthesize labelled samples by perturbing existing
//! feature vectors until a target size is reached.
//!
//! Only the augmentation stage introduces randomness in the pipeline. The
//! random source is an explicit parameter so corpus generation is
//! reproducible: the same base corpus and seed produce the same output.

use crate::corpus::TrainingSample;
use crate::enums::FieldRole;
use crate::error::{AugmentError, AugmentErrorKind};

/// Enlarge `base` to `target_size` samples.
///
/// The result starts with every base sample unchanged, in order, followed by
/// synthesized clones of uniformly drawn non-`none` base samples. Each clone
/// keeps its original label, element id and name, with the provenance string
/// suffixed `_augmented`, and independently applies:
///
/// - 30%: drop the autocomplete hint — zero every specific `auto_*` flag and
///   force `auto_other` to 1 (preserves one-hot exclusivity).
/// - 20%, username-labelled samples only: set `name_has_user` and
///   `name_has_login` to independent uniform values in [0.3, 0.8],
///   simulating partial textual matches.
///
/// The loop appends one sample per iteration and stops at exactly
/// `target_size`; it never overshoots. A base already at or above the target
/// is returned as-is.
///
/// # Errors
///
/// Returns [`AugmentError`] if `base` is empty or contains no non-`none`
/// sample — negatives are never augmented, so such a base would reject
/// forever.
pub fn augment(
    base: &[TrainingSample],
    target_size: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<TrainingSample>, AugmentError> {
    if base.len() >= target_size {
        return Ok(base.to_vec());
    }

    if base.is_empty() {
        return Err(AugmentError {
            kind: AugmentErrorKind::EmptyBase,
            message: "cannot augment an empty base corpus".to_string(),
        });
    }
    if !base.iter().any(|s| s.label != FieldRole::None) {
        return Err(AugmentError {
            kind: AugmentErrorKind::NoPositiveSamples,
            message: "base corpus contains only \"none\" samples; nothing to augment".to_string(),
        });
    }

    let mut augmented = base.to_vec();

    while augmented.len() < target_size {
        // Draw from the original base only, never from synthesized samples.
        let sample = &base[rng.usize(..base.len())];
        if sample.label == FieldRole::None {
            continue;
        }

        let mut features = sample.features.clone();

        if rng.f32() < 0.3 {
            features.auto_username = 0.0;
            features.auto_email = 0.0;
            features.auto_current_password = 0.0;
            features.auto_new_password = 0.0;
            features.auto_one_time_code = 0.0;
            features.auto_off = 0.0;
            features.auto_other = 1.0;
        }

        if rng.f32() < 0.2 && sample.label == FieldRole::Username {
            features.name_has_user = uniform_in(rng, 0.3, 0.8);
            features.name_has_login = uniform_in(rng, 0.3, 0.8);
        }

        augmented.push(TrainingSample {
            features,
            label: sample.label,
            source: format!("{}_augmented", sample.source),
            element_id: sample.element_id.clone(),
            element_name: sample.element_name.clone(),
        });
    }

    Ok(augmented)
}

fn uniform_in(rng: &mut fastrand::Rng, low: f32, high: f32) -> f32 {
    low + rng.f32() * (high - low)
}
