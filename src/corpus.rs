//! Corpus building: catalog entries → labelled training samples.

use crate::catalog::CatalogEntry;
use crate::enums::FieldRole;
use crate::error::BuildError;
use crate::extract::extract_fields;
use crate::features::FieldFeatures;
use std::collections::HashMap;

/// One labelled feature record.
///
/// Created once by the builder or the augmentation stage and never mutated
/// afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSample {
    pub features: FieldFeatures,
    pub label: FieldRole,
    /// Provenance: the catalog entry name, suffixed `_augmented` for
    /// synthesized samples.
    pub source: String,
    pub element_id: String,
    pub element_name: String,
}

/// Build the base (non-augmented) corpus.
///
/// Catalog entries are processed in order, then negative examples; within
/// each form, fields appear in document order. Labels come from the entry's
/// map keyed by the field's `name` attribute, defaulting to `none` when
/// absent. Every field of a negative example is labelled `none` regardless
/// of any map it carries.
///
/// # Errors
///
/// Returns [`BuildError`] for an entry whose snippet is empty or
/// whitespace-only — the one form of input the HTML parser cannot recover
/// any fields from.
pub fn build_corpus(
    catalog: &[CatalogEntry],
    negatives: &[CatalogEntry],
) -> Result<Vec<TrainingSample>, BuildError> {
    let mut samples = Vec::new();

    for site in catalog {
        for field in extract_entry(site)? {
            let label = site
                .labels
                .get(&field.element_name)
                .copied()
                .unwrap_or(FieldRole::None);
            samples.push(TrainingSample {
                features: field.features,
                label,
                source: site.name.clone(),
                element_id: field.element_id,
                element_name: field.element_name,
            });
        }
    }

    for example in negatives {
        for field in extract_entry(example)? {
            samples.push(TrainingSample {
                features: field.features,
                label: FieldRole::None,
                source: example.name.clone(),
                element_id: field.element_id,
                element_name: field.element_name,
            });
        }
    }

    Ok(samples)
}

fn extract_entry(entry: &CatalogEntry) -> Result<Vec<crate::extract::ExtractedField>, BuildError> {
    if entry.html.trim().is_empty() {
        return Err(BuildError {
            entry: entry.name.clone(),
            message: "empty HTML snippet".to_string(),
        });
    }
    Ok(extract_fields(&entry.html))
}

/// Per-label sample counts, for corpus balance reporting.
pub fn label_distribution(samples: &[TrainingSample]) -> HashMap<FieldRole, usize> {
    let mut counts = HashMap::new();
    for sample in samples {
        *counts.entry(sample.label).or_insert(0) += 1;
    }
    counts
}
