//! The form reducer: `(record, edit) -> record'`.
//!
//! The form layer owns the current record and sends one `ResumeEdit` per user
//! action. `apply_edit` never mutates its input. Entry ids are assigned by
//! `AddEntry` and cannot be edited afterwards.

use serde::{Deserialize, Serialize};

use crate::resume::entries::{add_entry, remove_entry, ModelError};
use crate::resume::ids::IdGenerator;
use crate::resume::models::{default_record, EntryKind, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Name,
    Email,
    Phone,
    Address,
    Linkedin,
    Portfolio,
    Summary,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company,
    Position,
    StartDate,
    EndDate,
    Responsibilities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResumeEdit {
    SetField {
        field: ScalarField,
        value: String,
    },
    SetEducationField {
        index: usize,
        field: EducationField,
        value: String,
    },
    SetExperienceField {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    AddEntry {
        kind: EntryKind,
    },
    RemoveEntry {
        kind: EntryKind,
        index: usize,
    },
    Reset,
}

pub fn apply_edit(
    record: &ResumeRecord,
    edit: ResumeEdit,
    ids: &dyn IdGenerator,
) -> Result<ResumeRecord, ModelError> {
    let mut next = record.clone();

    match edit {
        ResumeEdit::SetField { field, value } => {
            let slot = match field {
                ScalarField::Name => &mut next.name,
                ScalarField::Email => &mut next.email,
                ScalarField::Phone => &mut next.phone,
                ScalarField::Address => &mut next.address,
                ScalarField::Linkedin => &mut next.linkedin,
                ScalarField::Portfolio => &mut next.portfolio,
                ScalarField::Summary => &mut next.summary,
                ScalarField::Skills => &mut next.skills,
            };
            *slot = value;
        }
        ResumeEdit::SetEducationField {
            index,
            field,
            value,
        } => {
            let len = next.education.len();
            let entry = next
                .education
                .get_mut(index)
                .ok_or(ModelError::IndexOutOfRange {
                    kind: EntryKind::Education,
                    index,
                    len,
                })?;
            match field {
                EducationField::Institution => entry.institution = value,
                EducationField::Degree => entry.degree = value,
                EducationField::StartDate => entry.start_date = value,
                EducationField::EndDate => entry.end_date = value,
                EducationField::Description => entry.description = Some(value),
            }
        }
        ResumeEdit::SetExperienceField {
            index,
            field,
            value,
        } => {
            let len = next.experience.len();
            let entry = next
                .experience
                .get_mut(index)
                .ok_or(ModelError::IndexOutOfRange {
                    kind: EntryKind::Experience,
                    index,
                    len,
                })?;
            match field {
                ExperienceField::Company => entry.company = value,
                ExperienceField::Position => entry.position = value,
                ExperienceField::StartDate => entry.start_date = value,
                ExperienceField::EndDate => entry.end_date = value,
                ExperienceField::Responsibilities => entry.responsibilities = value,
            }
        }
        ResumeEdit::AddEntry { kind } => match kind {
            EntryKind::Education => next.education = add_entry(&next.education, ids),
            EntryKind::Experience => next.experience = add_entry(&next.experience, ids),
        },
        ResumeEdit::RemoveEntry { kind, index } => match kind {
            EntryKind::Education => next.education = remove_entry(&next.education, index)?,
            EntryKind::Experience => next.experience = remove_entry(&next.experience, index)?,
        },
        ResumeEdit::Reset => next = default_record(),
    }

    Ok(next)
}
