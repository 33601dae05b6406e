use thiserror::Error;

use crate::resume::ids::IdGenerator;
use crate::resume::models::{Entry, EntryKind};

/// Caller contract violations. These never come from user input through a
/// correctly wired form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: EntryKind,
        index: usize,
        len: usize,
    },
}

/// Returns a copy of `entries` with one blank entry appended. The input is left
/// untouched; callers replace their stored sequence with the result.
pub fn add_entry<E: Entry>(entries: &[E], ids: &dyn IdGenerator) -> Vec<E> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.extend_from_slice(entries);
    next.push(E::blank(ids.next_id()));
    next
}

/// Returns a copy of `entries` without the entry at `index`, keeping the order
/// of the rest.
pub fn remove_entry<E: Entry>(entries: &[E], index: usize) -> Result<Vec<E>, ModelError> {
    if index >= entries.len() {
        return Err(ModelError::IndexOutOfRange {
            kind: E::KIND,
            index,
            len: entries.len(),
        });
    }

    Ok(entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, e)| e.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::resume::ids::SequentialIds;
    use crate::resume::models::{EducationEntry, ExperienceEntry};

    fn experience(company: &str) -> ExperienceEntry {
        ExperienceEntry {
            id: format!("id-{company}"),
            company: company.to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "Present".to_string(),
            responsibilities: "Shipped things".to_string(),
        }
    }

    #[test]
    fn test_add_entry_appends_blank_with_fresh_id() {
        let ids = SequentialIds::new("edu");
        let original: Vec<EducationEntry> = vec![];
        let next = add_entry(&original, &ids);

        assert!(original.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].id, "edu-1");
        assert!(next[0].institution.is_empty());
        assert!(next[0].degree.is_empty());
    }

    #[test]
    fn test_add_entry_preserves_existing() {
        let ids = SequentialIds::new("exp");
        let original = vec![experience("Acme")];
        let next = add_entry(&original, &ids);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0], original[0]);
        assert!(next[1].company.is_empty());
    }

    #[test]
    fn test_repeated_adds_produce_distinct_ids() {
        let ids = SequentialIds::new("exp");
        let mut entries: Vec<ExperienceEntry> = vec![];
        for _ in 0..20 {
            entries = add_entry(&entries, &ids);
        }
        let unique: HashSet<_> = entries.iter().map(|e| e.id.clone()).collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_remove_entry_keeps_order() {
        let original = vec![experience("A"), experience("B"), experience("C")];
        let next = remove_entry(&original, 1).unwrap();
        let companies: Vec<_> = next.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["A", "C"]);
        assert_eq!(original.len(), 3);
    }

    #[test]
    fn test_remove_entry_out_of_range() {
        let original = vec![experience("A")];
        let err = remove_entry(&original, 1).unwrap_err();
        assert_eq!(
            err,
            ModelError::IndexOutOfRange {
                kind: EntryKind::Experience,
                index: 1,
                len: 1
            }
        );
        assert!(remove_entry::<EducationEntry>(&[], 0).is_err());
    }

    #[test]
    fn test_add_then_remove_is_identity_on_content() {
        let ids = SequentialIds::new("exp");
        let original = vec![experience("A"), experience("B")];
        let added = add_entry(&original, &ids);
        let back = remove_entry(&added, added.len() - 1).unwrap();
        assert_eq!(back, original);
    }
}
