//! The fixed 45-slot feature schema.
//!
//! This is the contract between extraction and every downstream consumer.
//! The trained model's weights are positionally bound to the slot order of
//! [`FieldFeatures::to_vector`], so the field order here, the vector order,
//! and [`FEATURE_NAMES`] must all stay in lockstep.

use serde::{Deserialize, Serialize};

/// Number of feature slots.
pub const FEATURE_COUNT: usize = 45;

/// Observable attributes of one form input, as fixed-position numeric slots.
///
/// Three groups: intrinsic attribute one-hots (`type_*`, `auto_*`), textual
/// signal scores (`name_*`, `id_*`, `placeholder_*`, `aria_label_*`), and
/// structural context flags. One-hot flags hold 0.0 or 1.0; match scores lie
/// in [0, 1]; lengths are raw character counts over a per-field scale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldFeatures {
    pub type_text: f32,
    pub type_email: f32,
    pub type_password: f32,
    pub type_tel: f32,
    pub type_number: f32,
    pub type_search: f32,
    pub type_url: f32,
    pub type_other: f32,
    pub auto_username: f32,
    pub auto_email: f32,
    pub auto_current_password: f32,
    pub auto_new_password: f32,
    pub auto_one_time_code: f32,
    pub auto_off: f32,
    pub auto_other: f32,
    pub name_has_user: f32,
    pub name_has_login: f32,
    pub name_has_email: f32,
    pub name_has_pass: f32,
    pub name_length: f32,
    pub id_has_user: f32,
    pub id_has_login: f32,
    pub id_has_email: f32,
    pub id_has_pass: f32,
    pub id_length: f32,
    pub placeholder_has_user: f32,
    pub placeholder_has_email: f32,
    pub placeholder_has_pass: f32,
    pub placeholder_length: f32,
    pub aria_label_has_user: f32,
    pub aria_label_has_email: f32,
    pub aria_label_has_pass: f32,
    pub aria_label_length: f32,
    pub parent_is_form: f32,
    pub parent_is_div: f32,
    pub parent_is_section: f32,
    pub sibling_count: f32,
    pub has_password_sibling: f32,
    pub has_email_sibling: f32,
    pub form_has_submit: f32,
    pub form_action_has_login: f32,
    pub is_required: f32,
    pub has_placeholder: f32,
    pub has_aria_label: f32,
    pub inputmode_numeric: f32,
}

/// Slot names in vector order.
pub static FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "type_text",
    "type_email",
    "type_password",
    "type_tel",
    "type_number",
    "type_search",
    "type_url",
    "type_other",
    "auto_username",
    "auto_email",
    "auto_current_password",
    "auto_new_password",
    "auto_one_time_code",
    "auto_off",
    "auto_other",
    "name_has_user",
    "name_has_login",
    "name_has_email",
    "name_has_pass",
    "name_length",
    "id_has_user",
    "id_has_login",
    "id_has_email",
    "id_has_pass",
    "id_length",
    "placeholder_has_user",
    "placeholder_has_email",
    "placeholder_has_pass",
    "placeholder_length",
    "aria_label_has_user",
    "aria_label_has_email",
    "aria_label_has_pass",
    "aria_label_length",
    "parent_is_form",
    "parent_is_div",
    "parent_is_section",
    "sibling_count",
    "has_password_sibling",
    "has_email_sibling",
    "form_has_submit",
    "form_action_has_login",
    "is_required",
    "has_placeholder",
    "has_aria_label",
    "inputmode_numeric",
];

impl FieldFeatures {
    /// Flatten to the fixed-order vector consumed by the trainer.
    pub fn to_vector(&self) -> [f32; FEATURE_COUNT] {
        [
            self.type_text,
            self.type_email,
            self.type_password,
            self.type_tel,
            self.type_number,
            self.type_search,
            self.type_url,
            self.type_other,
            self.auto_username,
            self.auto_email,
            self.auto_current_password,
            self.auto_new_password,
            self.auto_one_time_code,
            self.auto_off,
            self.auto_other,
            self.name_has_user,
            self.name_has_login,
            self.name_has_email,
            self.name_has_pass,
            self.name_length,
            self.id_has_user,
            self.id_has_login,
            self.id_has_email,
            self.id_has_pass,
            self.id_length,
            self.placeholder_has_user,
            self.placeholder_has_email,
            self.placeholder_has_pass,
            self.placeholder_length,
            self.aria_label_has_user,
            self.aria_label_has_email,
            self.aria_label_has_pass,
            self.aria_label_length,
            self.parent_is_form,
            self.parent_is_div,
            self.parent_is_section,
            self.sibling_count,
            self.has_password_sibling,
            self.has_email_sibling,
            self.form_has_submit,
            self.form_action_has_login,
            self.is_required,
            self.has_placeholder,
            self.has_aria_label,
            self.inputmode_numeric,
        ]
    }

    /// Rebuild a `FieldFeatures` from a vector in slot order.
    ///
    /// Exact inverse of [`to_vector`](Self::to_vector): round-tripping is
    /// bit-identical.
    pub fn from_vector(vector: &[f32; FEATURE_COUNT]) -> FieldFeatures {
        FieldFeatures {
            type_text: vector[0],
            type_email: vector[1],
            type_password: vector[2],
            type_tel: vector[3],
            type_number: vector[4],
            type_search: vector[5],
            type_url: vector[6],
            type_other: vector[7],
            auto_username: vector[8],
            auto_email: vector[9],
            auto_current_password: vector[10],
            auto_new_password: vector[11],
            auto_one_time_code: vector[12],
            auto_off: vector[13],
            auto_other: vector[14],
            name_has_user: vector[15],
            name_has_login: vector[16],
            name_has_email: vector[17],
            name_has_pass: vector[18],
            name_length: vector[19],
            id_has_user: vector[20],
            id_has_login: vector[21],
            id_has_email: vector[22],
            id_has_pass: vector[23],
            id_length: vector[24],
            placeholder_has_user: vector[25],
            placeholder_has_email: vector[26],
            placeholder_has_pass: vector[27],
            placeholder_length: vector[28],
            aria_label_has_user: vector[29],
            aria_label_has_email: vector[30],
            aria_label_has_pass: vector[31],
            aria_label_length: vector[32],
            parent_is_form: vector[33],
            parent_is_div: vector[34],
            parent_is_section: vector[35],
            sibling_count: vector[36],
            has_password_sibling: vector[37],
            has_email_sibling: vector[38],
            form_has_submit: vector[39],
            form_action_has_login: vector[40],
            is_required: vector[41],
            has_placeholder: vector[42],
            has_aria_label: vector[43],
            inputmode_numeric: vector[44],
        }
    }
}
