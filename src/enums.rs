//! Closed enumerations used throughout the corpus type system.
//!
//! The label vocabulary is closed — only the five defined roles are valid.
//! Any label string a consumer does not recognize must degrade to
//! [`FieldRole::None`] rather than error.

use serde::{Deserialize, Serialize};

/// Semantic role a form input serves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Username,
    Password,
    Email,
    Totp,
    #[default]
    None,
}

impl FieldRole {
    /// The label string written to the corpus file.
    pub fn as_label(&self) -> &'static str {
        match self {
            FieldRole::Username => "username",
            FieldRole::Password => "password",
            FieldRole::Email => "email",
            FieldRole::Totp => "totp",
            FieldRole::None => "none",
        }
    }

    /// Parse a label string. Unknown labels fall back to `None` — the
    /// vocabulary is closed and consumers must not reject a corpus over an
    /// unrecognized label.
    pub fn from_label(label: &str) -> FieldRole {
        match label {
            "username" => FieldRole::Username,
            "password" => FieldRole::Password,
            "email" => FieldRole::Email,
            "totp" => FieldRole::Totp,
            _ => FieldRole::None,
        }
    }

    /// Class index used by the downstream trainer. Positionally bound to the
    /// trained model's output head; do not reorder.
    pub fn class_index(&self) -> u32 {
        match self {
            FieldRole::Username => 0,
            FieldRole::Password => 1,
            FieldRole::Email => 2,
            FieldRole::Totp => 3,
            FieldRole::None => 4,
        }
    }

    /// Inverse of [`class_index`](Self::class_index); out-of-range indices
    /// fall back to `None`.
    pub fn from_class_index(index: u32) -> FieldRole {
        match index {
            0 => FieldRole::Username,
            1 => FieldRole::Password,
            2 => FieldRole::Email,
            3 => FieldRole::Totp,
            _ => FieldRole::None,
        }
    }
}

impl std::fmt::Display for FieldRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}
