//! Per-element feature extraction.
//!
//! Maps one `<input>` element plus its surrounding DOM context to a
//! [`FieldFeatures`] instance. Extraction is pure and deterministic and never
//! fails: missing or malformed attributes degrade to empty strings and
//! zero-valued slots.

use crate::features::FieldFeatures;
use crate::patterns::{PatternCategory, action_suggests_auth, match_score};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Input types that carry no classifiable role and are skipped during
/// enumeration.
static EXCLUDED_TYPES: &[&str] = &["hidden", "submit", "button", "image", "reset"];

static INPUT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("static selector is valid"));

/// One qualifying input field pulled out of a snippet.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedField {
    pub features: FieldFeatures,
    pub element_id: String,
    pub element_name: String,
    pub input_type: String,
}

/// Extract the feature vector for a single input element.
///
/// Calling this twice on the same element produces bit-identical results.
/// Exactly one `type_*` flag and exactly one `auto_*` flag is set.
pub fn extract(element: ElementRef<'_>) -> FieldFeatures {
    let mut features = FieldFeatures::default();

    let input_type = element
        .value()
        .attr("type")
        .unwrap_or("text")
        .to_ascii_lowercase();
    set_input_type(&mut features, &input_type);

    let autocomplete = element
        .value()
        .attr("autocomplete")
        .unwrap_or("")
        .to_ascii_lowercase();
    set_autocomplete(&mut features, &autocomplete);

    let name = element.value().attr("name").unwrap_or("");
    features.name_has_user = match_score(name, PatternCategory::Username);
    features.name_has_login = match_score(name, PatternCategory::Login);
    features.name_has_email = match_score(name, PatternCategory::Email);
    features.name_has_pass = match_score(name, PatternCategory::Password);
    features.name_length = name.chars().count() as f32 / 50.0;

    let id = element.value().attr("id").unwrap_or("");
    features.id_has_user = match_score(id, PatternCategory::Username);
    features.id_has_login = match_score(id, PatternCategory::Login);
    features.id_has_email = match_score(id, PatternCategory::Email);
    features.id_has_pass = match_score(id, PatternCategory::Password);
    features.id_length = id.chars().count() as f32 / 50.0;

    let placeholder = element.value().attr("placeholder").unwrap_or("");
    features.placeholder_has_user = match_score(placeholder, PatternCategory::Username);
    features.placeholder_has_email = match_score(placeholder, PatternCategory::Email);
    features.placeholder_has_pass = match_score(placeholder, PatternCategory::Password);
    features.placeholder_length = placeholder.chars().count() as f32 / 100.0;

    let aria_label = element.value().attr("aria-label").unwrap_or("");
    features.aria_label_has_user = match_score(aria_label, PatternCategory::Username);
    features.aria_label_has_email = match_score(aria_label, PatternCategory::Email);
    features.aria_label_has_pass = match_score(aria_label, PatternCategory::Password);
    features.aria_label_length = aria_label.chars().count() as f32 / 100.0;

    set_context(&mut features, element);

    features.is_required = flag(element.value().attr("required").is_some());
    features.has_placeholder = flag(!placeholder.is_empty());
    features.has_aria_label = flag(!aria_label.is_empty());
    features.inputmode_numeric = flag(element.value().attr("inputmode") == Some("numeric"));

    features
}

/// Enumerate all qualifying `<input>` elements of a snippet in document
/// order and extract each one.
///
/// Fields whose declared type is hidden/submit/button/image/reset yield no
/// record. Malformed markup is error-recovered by the HTML parser; an empty
/// snippet simply yields no fields (the corpus builder treats that as fatal).
pub fn extract_fields(html: &str) -> Vec<ExtractedField> {
    let document = Html::parse_fragment(html);

    let mut fields = Vec::new();
    for element in document.select(&INPUT_SELECTOR) {
        let input_type = element
            .value()
            .attr("type")
            .unwrap_or("text")
            .to_ascii_lowercase();
        if EXCLUDED_TYPES.contains(&input_type.as_str()) {
            continue;
        }

        fields.push(ExtractedField {
            features: extract(element),
            element_id: element.value().attr("id").unwrap_or("").to_string(),
            element_name: element.value().attr("name").unwrap_or("").to_string(),
            input_type,
        });
    }

    fields
}

fn flag(condition: bool) -> f32 {
    if condition { 1.0 } else { 0.0 }
}

fn set_input_type(features: &mut FieldFeatures, input_type: &str) {
    match input_type {
        "text" => features.type_text = 1.0,
        "email" => features.type_email = 1.0,
        "password" => features.type_password = 1.0,
        "tel" => features.type_tel = 1.0,
        "number" => features.type_number = 1.0,
        "search" => features.type_search = 1.0,
        "url" => features.type_url = 1.0,
        _ => features.type_other = 1.0,
    }
}

/// First-match-wins classification of the (lower-cased) autocomplete value.
///
/// Priority order matters: a value containing both "username" and "email"
/// classifies as username because it is checked first.
fn set_autocomplete(features: &mut FieldFeatures, autocomplete: &str) {
    if autocomplete.contains("username") {
        features.auto_username = 1.0;
    } else if autocomplete.contains("email") {
        features.auto_email = 1.0;
    } else if autocomplete.contains("current-password") {
        features.auto_current_password = 1.0;
    } else if autocomplete.contains("new-password") {
        features.auto_new_password = 1.0;
    } else if autocomplete.contains("one-time-code") {
        features.auto_one_time_code = 1.0;
    } else if autocomplete == "off" {
        features.auto_off = 1.0;
    } else {
        features.auto_other = 1.0;
    }
}

fn set_context(features: &mut FieldFeatures, element: ElementRef<'_>) {
    if let Some(parent) = element.parent().and_then(ElementRef::wrap) {
        match parent.value().name() {
            "form" => features.parent_is_form = 1.0,
            "div" => features.parent_is_div = 1.0,
            "section" => features.parent_is_section = 1.0,
            _ => {}
        }

        // Direct child inputs of the parent, excluding the element itself.
        let mut sibling_count = 0usize;
        for sibling in parent.children().filter_map(ElementRef::wrap) {
            if sibling.value().name() != "input" || sibling.id() == element.id() {
                continue;
            }
            sibling_count += 1;
            match sibling
                .value()
                .attr("type")
                .unwrap_or("")
                .to_ascii_lowercase()
                .as_str()
            {
                "password" => features.has_password_sibling = 1.0,
                "email" => features.has_email_sibling = 1.0,
                _ => {}
            }
        }
        features.sibling_count = sibling_count as f32 / 10.0;
    }

    let form = element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "form");
    if let Some(form) = form {
        let has_submit = form.descendants().filter_map(ElementRef::wrap).any(|e| {
            matches!(e.value().name(), "button" | "input")
                && e.value()
                    .attr("type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("submit"))
        });
        features.form_has_submit = flag(has_submit);

        let action = form.value().attr("action").unwrap_or("");
        features.form_action_has_login = flag(action_suggests_auth(action));
    }
}
