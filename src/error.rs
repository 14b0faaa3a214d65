use serde::{Deserialize, Serialize};
use std::fmt;

/// Produced by the corpus builder when a catalog snippet cannot be parsed.
///
/// The HTML parser error-recovers from arbitrary malformed markup, so in
/// practice this only fires for empty or whitespace-only snippets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildError {
    /// Display name of the catalog entry that failed.
    pub entry: String,
    pub message: String,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entry, self.message)
    }
}

impl std::error::Error for BuildError {}

/// Error kind for augmentation failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AugmentErrorKind {
    EmptyBase,
    NoPositiveSamples,
}

/// Produced when the augmentation precondition is violated.
///
/// Augmentation only synthesizes from non-"none" samples; a base corpus with
/// no positive samples would loop forever and is rejected up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentError {
    pub kind: AugmentErrorKind,
    pub message: String,
}

impl fmt::Display for AugmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AugmentError {}

/// Produced when writing the corpus file fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for WriteError {}

/// Error kind for corpus read failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadErrorKind {
    Io,
    Syntax,
    VectorLength,
}

/// Produced when reading a corpus file back fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub message: String,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ReadError {}

/// Combined error type for the `generate` entry point.
#[derive(Clone, Debug)]
pub enum CorpusError {
    Build(BuildError),
    Augment(AugmentError),
    Write(WriteError),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Build(e) => write!(f, "build error: {}", e),
            CorpusError::Augment(e) => write!(f, "augmentation error: {}", e),
            CorpusError::Write(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for CorpusError {}

impl From<BuildError> for CorpusError {
    fn from(e: BuildError) -> Self {
        CorpusError::Build(e)
    }
}

impl From<AugmentError> for CorpusError {
    fn from(e: AugmentError) -> Self {
        CorpusError::Augment(e)
    }
}

impl From<WriteError> for CorpusError {
    fn from(e: WriteError) -> Self {
        CorpusError::Write(e)
    }
}
