use serde::{Deserialize, Deserializer};

/// Flat résumé input, one per render. Every field defaults to empty, and an
/// explicit `null` reads as empty too, so a partially filled form still
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub objective: String,
    /// Raw `degree|institution|coursework|year` lines.
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<String>,
    /// Raw `title|bullet\nbullet` lines (literal backslash-n between bullets).
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    /// Comma-delimited, rejoined verbatim at layout time.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub soft_skills: String,
}

/// Reads `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResumeRecord {
    /// Contact line in the fixed `phone • linkedin • github • email` order.
    /// Empty fields stay as empty segments.
    pub fn contact_line(&self) -> String {
        format!(
            "{} • {} • {} • {}",
            self.phone, self.linkedin, self.github, self.email
        )
    }
}

/// Separator between fields of an education or project line.
pub const FIELD_DELIMITER: char = '|';

/// Separator between bullets inside a project's bullet block. This is the
/// two-character sequence backslash + `n`, not a line break.
pub const BULLET_DELIMITER: &str = "\\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry<'a> {
    pub degree: &'a str,
    pub institution: &'a str,
    pub coursework: &'a str,
    pub year: &'a str,
}

impl<'a> EducationEntry<'a> {
    /// Parses a raw education line. Returns the observed part count on
    /// anything other than exactly four parts.
    pub fn parse(raw: &'a str) -> Result<Self, usize> {
        let parts: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
        match parts.as_slice() {
            [degree, institution, coursework, year] => Ok(Self {
                degree,
                institution,
                coursework,
                year,
            }),
            _ => Err(parts.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry<'a> {
    pub title: &'a str,
    pub bullets: Vec<&'a str>,
}

impl<'a> ProjectEntry<'a> {
    /// Parses a raw project line. Needs at least a title and a bullet block;
    /// anything after the second `|` is ignored. Returns the observed part
    /// count when there are fewer than two parts.
    pub fn parse(raw: &'a str) -> Result<Self, usize> {
        let mut parts = raw.split(FIELD_DELIMITER);
        let title = parts.next().unwrap_or_default();
        match parts.next() {
            Some(block) => Ok(Self {
                title,
                bullets: block.split(BULLET_DELIMITER).collect(),
            }),
            None => Err(1),
        }
    }
}

/// Splits on `,` and rejoins with `, ` without trimming, so `"a, b"` becomes
/// `"a,  b"`.
pub fn rejoin_comma_list(raw: &str) -> String {
    raw.split(',').collect::<Vec<_>>().join(", ")
}
