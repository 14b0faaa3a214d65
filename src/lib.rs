//! Training corpus builder for HTML form field role classification.
//!
//! Maps each `<input>` element of a form snippet to a fixed 45-slot numeric
//! feature vector, mirroring the scoring heuristic the inference runtime
//! applies at prediction time, and assembles labelled vectors into a corpus
//! an external gradient-boosted-tree trainer consumes:
//!
//! ```text
//! catalog → extract(field) → build_corpus → augment → serialize → (trainer)
//! ```
//!
//! Extraction is pure and deterministic; only augmentation draws randomness,
//! from an explicit seedable source.
//!
//! # Quick Start
//!
//! ```rust
//! let options = formcorpus::GenerateOptions {
//!     target_size: 2000,
//!     seed: 42,
//! };
//! let corpus = formcorpus::generate(&options).expect("built-in catalog is valid");
//! assert!(corpus.samples.len() >= 2000);
//! ```

pub mod augment;
pub mod catalog;
pub mod corpus;
pub mod enums;
pub mod error;
pub mod extract;
pub mod features;
pub mod patterns;
pub mod serialize;

pub use enums::FieldRole;
pub use error::*;
pub use features::{FEATURE_COUNT, FEATURE_NAMES, FieldFeatures};

// Re-export entry-point functions at the crate root for convenience.
pub use augment::augment;
pub use corpus::{TrainingSample, build_corpus, label_distribution};
pub use extract::{extract, extract_fields};
pub use serialize::{read_corpus, write_corpus};

/// Options for the [`generate`] convenience entry point.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Total corpus size after augmentation.
    pub target_size: usize,
    /// Seed for the augmentation random source.
    pub seed: u64,
}

/// Result of the [`generate`] convenience entry point.
pub struct GenerateResult {
    /// Base samples followed by synthesized ones.
    pub samples: Vec<TrainingSample>,
    /// Number of samples extracted before augmentation.
    pub base_count: usize,
}

/// Convenience entry point composing the built-in catalog, the corpus
/// builder, and augmentation.
///
/// # Errors
///
/// Returns [`CorpusError`] if a catalog snippet is unusable or the base
/// corpus cannot be augmented.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult, CorpusError> {
    let base = corpus::build_corpus(&catalog::builtin_catalog(), &catalog::builtin_negatives())?;
    let base_count = base.len();

    let mut rng = fastrand::Rng::with_seed(options.seed);
    let samples = augment::augment(&base, options.target_size, &mut rng)?;

    Ok(GenerateResult {
        samples,
        base_count,
    })
}
