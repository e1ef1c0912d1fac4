//! Raw form fields -> `ResumeRecord`.
//!
//! Multi-value fields (education, projects, certifications) arrive as one
//! newline-delimited block each. Blank blocks yield no entries; otherwise
//! every line is an entry, including empty ones, which then render as
//! malformed entries and still take up their spacing.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::layout::TemplateName;
use crate::models::resume::{null_as_default, ResumeRecord};

pub const FIELD_TEMPLATE: &str = "template";

/// A parsed submission: the record plus the requested template name, which
/// is resolved (with fallback) only at layout time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub record: ResumeRecord,
    #[serde(default = "default_template", deserialize_with = "null_as_default_template")]
    pub template: String,
}

fn default_template() -> String {
    TemplateName::default().as_str().to_string()
}

fn null_as_default_template<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_template))
}

/// Builds a submission from flat form fields. Missing fields become empty.
pub fn submission_from_fields(fields: &HashMap<String, String>) -> Submission {
    let text = |key: &str| fields.get(key).cloned().unwrap_or_default();
    let entries = |key: &str| fields.get(key).map(|block| split_entries(block)).unwrap_or_default();

    Submission {
        record: ResumeRecord {
            name: text("name"),
            phone: text("phone"),
            email: text("email"),
            linkedin: text("linkedin"),
            github: text("github"),
            objective: text("objective"),
            education: entries("education"),
            projects: entries("projects"),
            skills: text("skills"),
            certifications: entries("certifications"),
            soft_skills: text("soft_skills"),
        },
        template: fields
            .get(FIELD_TEMPLATE)
            .cloned()
            .unwrap_or_else(default_template),
    }
}

/// Splits a newline-delimited block into entries. Browsers submit `\r\n`, so
/// one trailing `\r` is dropped from each line.
pub fn split_entries(block: &str) -> Vec<String> {
    if block.is_empty() {
        return Vec::new();
    }
    block
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
