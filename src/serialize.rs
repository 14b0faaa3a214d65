//! Corpus serialization: labelled samples → portable JSON records.
//!
//! The on-disk format is a JSON array of records, each carrying the
//! 45-element feature vector in schema slot order plus label and provenance.
//! No transformation or filtering happens here.

use crate::corpus::TrainingSample;
use crate::enums::FieldRole;
use crate::error::{ReadError, ReadErrorKind, WriteError};
use crate::features::{FEATURE_COUNT, FieldFeatures};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One corpus file record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Feature slots in schema order; always length 45.
    pub feature_vector: Vec<f32>,
    pub label: String,
    pub source: String,
    pub element_id: String,
    pub element_name: String,
}

/// Flatten samples to file records, preserving order.
pub fn to_records(samples: &[TrainingSample]) -> Vec<CorpusRecord> {
    samples
        .iter()
        .map(|sample| CorpusRecord {
            feature_vector: sample.features.to_vector().to_vec(),
            label: sample.label.as_label().to_string(),
            source: sample.source.clone(),
            element_id: sample.element_id.clone(),
            element_name: sample.element_name.clone(),
        })
        .collect()
}

/// Rebuild samples from file records.
///
/// Unknown label strings map to `none` (closed vocabulary). A record whose
/// vector is not exactly 45 elements is rejected: slot count is the
/// positional contract the trained model depends on.
pub fn from_records(records: &[CorpusRecord]) -> Result<Vec<TrainingSample>, ReadError> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let vector: &[f32; FEATURE_COUNT] = record
                .feature_vector
                .as_slice()
                .try_into()
                .map_err(|_| ReadError {
                    kind: ReadErrorKind::VectorLength,
                    message: format!(
                        "record {}: feature_vector has {} elements, expected {}",
                        i,
                        record.feature_vector.len(),
                        FEATURE_COUNT
                    ),
                })?;
            Ok(TrainingSample {
                features: FieldFeatures::from_vector(vector),
                label: FieldRole::from_label(&record.label),
                source: record.source.clone(),
                element_id: record.element_id.clone(),
                element_name: record.element_name.clone(),
            })
        })
        .collect()
}

/// Write the corpus file atomically.
///
/// Serializes to pretty-printed JSON, writes to `<path>.tmp` in the same
/// directory, then renames over `path`, so a failed run never leaves a
/// partial corpus behind.
///
/// # Errors
///
/// Returns [`WriteError`] on serialization or I/O failure; the temporary
/// file is removed on a failed rename.
pub fn write_corpus(samples: &[TrainingSample], path: &Path) -> Result<(), WriteError> {
    let records = to_records(samples);
    let json = serde_json::to_string_pretty(&records).map_err(|e| WriteError {
        path: path.display().to_string(),
        message: format!("failed to serialize corpus: {}", e),
    })?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    std::fs::write(&tmp, json).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        WriteError {
            path: tmp.display().to_string(),
            message: format!("failed to write corpus: {}", e),
        }
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        WriteError {
            path: path.display().to_string(),
            message: format!("failed to move corpus into place: {}", e),
        }
    })
}

/// Read a corpus file written by [`write_corpus`].
pub fn read_corpus(path: &Path) -> Result<Vec<TrainingSample>, ReadError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReadError {
        kind: ReadErrorKind::Io,
        message: format!("{}: {}", path.display(), e),
    })?;
    let records: Vec<CorpusRecord> = serde_json::from_str(&content).map_err(|e| ReadError {
        kind: ReadErrorKind::Syntax,
        message: format!("{}: {}", path.display(), e),
    })?;
    from_records(&records)
}
