use serde::{Deserialize, Serialize};
use strum::Display;

/// Which of the two dynamic entry sequences an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntryKind {
    Education,
    Experience,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EducationEntry {
    /// Description text when one was actually provided.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Newline-delimited bullet lines. Read through `derive_responsibility_lines`.
    pub responsibilities: String,
}

/// The resume aggregate. Missing JSON fields deserialize to their empty value so
/// that `validate` can report them instead of the extractor rejecting the body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Empty means "not provided".
    pub linkedin: String,
    /// Empty means "not provided".
    pub portfolio: String,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Comma-delimited skill names. Read through `derive_skill_list`.
    pub skills: String,
}

impl ResumeRecord {
    pub fn has_links(&self) -> bool {
        !self.linkedin.is_empty() || !self.portfolio.is_empty()
    }
}

/// The zero-value record a new editing session starts from.
pub fn default_record() -> ResumeRecord {
    ResumeRecord::default()
}

/// A sequence element that carries a stable identifier and has a blank form.
pub trait Entry: Clone {
    const KIND: EntryKind;

    /// A new entry with the given id and every other field empty.
    fn blank(id: String) -> Self;

    fn id(&self) -> &str;
}

impl Entry for EducationEntry {
    const KIND: EntryKind = EntryKind::Education;

    fn blank(id: String) -> Self {
        EducationEntry {
            id,
            description: Some(String::new()),
            ..Default::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entry for ExperienceEntry {
    const KIND: EntryKind = EntryKind::Experience;

    fn blank(id: String) -> Self {
        ExperienceEntry {
            id,
            ..Default::default()
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let r = default_record();
        assert!(r.name.is_empty());
        assert!(r.email.is_empty());
        assert!(r.linkedin.is_empty());
        assert!(r.skills.is_empty());
        assert!(r.education.is_empty());
        assert!(r.experience.is_empty());
        assert_eq!(r, default_record());
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let r: ResumeRecord = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(r.name, "Ada");
        assert!(r.portfolio.is_empty());
        assert!(r.education.is_empty());
    }

    #[test]
    fn test_camel_case_wire_shape() {
        let json = r#"{
            "experience": [{
                "id": "x1", "company": "Acme", "position": "Dev",
                "startDate": "2020-01", "endDate": "Present",
                "responsibilities": "Built X"
            }]
        }"#;
        let r: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.experience[0].start_date, "2020-01");
        assert_eq!(r.experience[0].end_date, "Present");

        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["experience"][0]["startDate"], "2020-01");
    }

    #[test]
    fn test_blank_entries_carry_only_id() {
        let edu = EducationEntry::blank("e1".to_string());
        assert_eq!(edu.id(), "e1");
        assert!(edu.institution.is_empty());
        assert_eq!(edu.description.as_deref(), Some(""));
        assert_eq!(edu.description_text(), None);

        let exp = ExperienceEntry::blank("x1".to_string());
        assert_eq!(exp.id(), "x1");
        assert!(exp.responsibilities.is_empty());
    }

    #[test]
    fn test_has_links() {
        let mut r = default_record();
        assert!(!r.has_links());
        r.portfolio = "https://ada.dev".to_string();
        assert!(r.has_links());
    }

    #[test]
    fn test_entry_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&EntryKind::Education).unwrap(),
            "\"education\""
        );
        assert_eq!(EntryKind::Experience.to_string(), "experience");
    }
}
