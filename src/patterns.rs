//! Hand-curated pattern registry and match scoring.
//!
//! The pattern lists are static constants, reproduced verbatim from the
//! scoring heuristic the inference runtime uses. Model parity depends on the
//! exact lists, their count per category, and the ×3 score scaling; do not
//! tune them independently of the runtime.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Pattern category a text fragment can be scored against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternCategory {
    Username,
    /// Single-pattern category backing the `*_has_login` slots.
    Login,
    Email,
    Password,
    Totp,
}

static USERNAME_SOURCES: &[&str] = &[
    "user", "login", "usr", "uname", "account", "acct", "signin", "sign-in", "session", "member",
    "alias",
];

static LOGIN_SOURCES: &[&str] = &["login"];

static EMAIL_SOURCES: &[&str] = &["email", "e-mail", "mail"];

static PASSWORD_SOURCES: &[&str] = &[
    "pass",
    "password",
    "pwd",
    "secret",
    "passphrase",
    "key",
    "credential",
];

static TOTP_SOURCES: &[&str] = &[
    "totp",
    "otp",
    "2fa",
    "mfa",
    "two-factor",
    "twofactor",
    "authenticat",
    "verification",
    "code",
    "pin",
    "token",
];

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| {
            RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .expect("static pattern source is a valid regex")
        })
        .collect()
}

static USERNAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(USERNAME_SOURCES));
static LOGIN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(LOGIN_SOURCES));
static EMAIL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(EMAIL_SOURCES));
static PASSWORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(PASSWORD_SOURCES));
static TOTP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(TOTP_SOURCES));

/// Matches form `action` attributes that suggest an authentication endpoint.
static AUTH_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("login|signin|auth|session")
        .case_insensitive(true)
        .build()
        .expect("static pattern source is a valid regex")
});

impl PatternCategory {
    fn patterns(&self) -> &'static [Regex] {
        match self {
            PatternCategory::Username => &USERNAME_PATTERNS,
            PatternCategory::Login => &LOGIN_PATTERNS,
            PatternCategory::Email => &EMAIL_PATTERNS,
            PatternCategory::Password => &PASSWORD_PATTERNS,
            PatternCategory::Totp => &TOTP_PATTERNS,
        }
    }

    /// Number of patterns in this category (the score denominator).
    pub fn len(&self) -> usize {
        self.patterns().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns().is_empty()
    }
}

/// Score `text` against a category's pattern list.
///
/// Counts how many distinct patterns match anywhere in the text
/// (case-insensitive) and returns `min(matches / patterns * 3, 1.0)`.
/// Empty text scores 0.0. Pure and deterministic.
///
/// The ×3 scaling stretches the common one-or-two-match case into a usable
/// signal range while still saturating at 1.0.
pub fn match_score(text: &str, category: PatternCategory) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    let patterns = category.patterns();
    let matches = patterns.iter().filter(|p| p.is_match(text)).count();
    (matches as f32 / patterns.len() as f32 * 3.0).min(1.0)
}

/// Whether a form `action` attribute textually suggests authentication.
pub fn action_suggests_auth(action: &str) -> bool {
    AUTH_ACTION.is_match(action)
}
