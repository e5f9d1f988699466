//! Reference resolution.
//!
//! Maps a label chosen at a prompt back to the id of the row it was built
//! from. The prompt choices and the candidates come from the same fetched
//! row set, so a label without a match is an internal inconsistency and is
//! reported as such rather than defaulted.

use std::collections::HashMap;

use crate::errors::{ExError, RosterError};
use crate::model::{Department, EmployeeName, Role};

/// Choice label meaning "this employee has no manager".
pub const NO_MANAGER: &str = "no manager";

/// A fetched row that can be offered as a prompt choice.
pub trait Labelled {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
}

impl Labelled for Department {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Labelled for Role {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Labelled for EmployeeName {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.full_name
    }
}

/// An `{id, label}` pair offered at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: i64,
    pub label: String,
}

impl Candidate {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Candidates built from one fetched row set, in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates(Vec<Candidate>);

impl Candidates {
    /// Build candidates whose labels can be told apart.
    ///
    /// A label shared by several rows, or equal to one of `reserved`, is
    /// shown as `"<label> (#<id>)"`. A raw label can itself look like a
    /// suffixed one, so collisions are rechecked after every pass until
    /// no two candidates share a label.
    pub fn from_entries<T: Labelled>(entries: &[T], reserved: &[&str]) -> Self {
        let mut suffixed: Vec<bool> = entries
            .iter()
            .map(|entry| reserved.contains(&entry.label()))
            .collect();

        // A suffixed label ends in its own id, so two suffixed labels never
        // collide. Each pass suffixes at least one more entry or stops.
        loop {
            let labels = label_entries(entries, &suffixed);
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for label in &labels {
                *counts.entry(label.as_str()).or_insert(0) += 1;
            }

            let mut changed = false;
            for (index, label) in labels.iter().enumerate() {
                if !suffixed[index] && counts.get(label.as_str()).copied().unwrap_or(0) > 1 {
                    suffixed[index] = true;
                    changed = true;
                }
            }

            if !changed {
                let candidates = entries
                    .iter()
                    .zip(labels)
                    .map(|(entry, label)| Candidate::new(entry.id(), label))
                    .collect();
                return Self(candidates);
            }
        }
    }

    /// Labels in candidate order, ready to use as prompt choices.
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|c| c.label.clone()).collect()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }
}

fn label_entries<T: Labelled>(entries: &[T], suffixed: &[bool]) -> Vec<String> {
    entries
        .iter()
        .zip(suffixed)
        .map(|(entry, &suffix)| {
            if suffix {
                format!("{} (#{})", entry.label(), entry.id())
            } else {
                entry.label().to_string()
            }
        })
        .collect()
}

/// Resolve a label to the id of the first candidate carrying it exactly.
///
/// # Errors
///
/// - `ExErrorKind::ResolutionMismatch` if no candidate carries `label`.
pub fn resolve(label: &str, candidates: &[Candidate]) -> Result<i64, ExError> {
    candidates
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.id)
        .ok_or_else(|| {
            tracing::debug!(label, candidates = candidates.len(), "label did not resolve");
            RosterError::UnresolvedLabel {
                label: label.to_string(),
                candidate_count: candidates.len(),
            }
            .into()
        })
}

/// Resolve a manager choice; the [`NO_MANAGER`] sentinel yields `None`.
///
/// # Errors
///
/// - `ExErrorKind::ResolutionMismatch` if `label` is neither the sentinel nor a candidate.
pub fn resolve_manager(label: &str, candidates: &[Candidate]) -> Result<Option<i64>, ExError> {
    if label == NO_MANAGER {
        return Ok(None);
    }
    resolve(label, candidates).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ExErrorKind, Step};

    fn names(entries: &[(i64, &str)]) -> Vec<EmployeeName> {
        entries
            .iter()
            .map(|(id, name)| EmployeeName {
                id: *id,
                full_name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_resolve_returns_matching_id() {
        let candidates = vec![Candidate::new(4, "Sales"), Candidate::new(9, "Engineering")];
        assert_eq!(resolve("Engineering", &candidates).unwrap(), 9);
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let candidates = vec![Candidate::new(1, "Ops"), Candidate::new(2, "Ops")];
        assert_eq!(resolve("Ops", &candidates).unwrap(), 1);
    }

    #[test]
    fn test_resolve_is_exact() {
        let candidates = vec![Candidate::new(1, "Engineering")];
        assert!(resolve("engineering", &candidates).is_err());
        assert!(resolve("Engineering ", &candidates).is_err());
    }

    #[test]
    fn test_resolve_miss_is_resolution_mismatch() {
        let err = resolve("Legal", &[Candidate::new(1, "Sales")]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::ResolutionMismatch);
        assert_eq!(err.step(), Some(Step::Resolve));
        assert!(err.message().contains("Legal"));
    }

    #[test]
    fn test_resolve_manager_sentinel_skips_scan() {
        assert_eq!(resolve_manager(NO_MANAGER, &[]).unwrap(), None);
        let candidates = vec![Candidate::new(3, "Grace Hopper")];
        assert_eq!(resolve_manager(NO_MANAGER, &candidates).unwrap(), None);
        assert_eq!(resolve_manager("Grace Hopper", &candidates).unwrap(), Some(3));
    }

    #[test]
    fn test_from_entries_keeps_unique_labels() {
        let candidates = Candidates::from_entries(&names(&[(1, "Ada Lovelace"), (2, "Alan Turing")]), &[]);
        assert_eq!(candidates.labels(), vec!["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn test_from_entries_disambiguates_duplicates() {
        let candidates = Candidates::from_entries(
            &names(&[(1, "John Smith"), (2, "Ada Lovelace"), (5, "John Smith")]),
            &[],
        );
        assert_eq!(
            candidates.labels(),
            vec!["John Smith (#1)", "Ada Lovelace", "John Smith (#5)"]
        );
        assert_eq!(resolve("John Smith (#5)", candidates.as_slice()).unwrap(), 5);
    }

    #[test]
    fn test_from_entries_suffixes_raw_label_that_looks_suffixed() {
        let candidates = Candidates::from_entries(
            &names(&[(1, "John Smith"), (2, "John Smith"), (3, "John Smith (#2)")]),
            &[],
        );
        assert_eq!(
            candidates.labels(),
            vec!["John Smith (#1)", "John Smith (#2)", "John Smith (#2) (#3)"]
        );
        assert_eq!(resolve("John Smith (#2)", candidates.as_slice()).unwrap(), 2);
        assert_eq!(resolve("John Smith (#2) (#3)", candidates.as_slice()).unwrap(), 3);
    }

    #[test]
    fn test_from_entries_rechecks_until_unique() {
        // Suffixing row 2 produces "A (#2)", which row 3 already carries raw.
        let candidates =
            Candidates::from_entries(&names(&[(2, "A"), (7, "A"), (3, "A (#2)")]), &[]);
        assert_eq!(candidates.labels(), vec!["A (#2)", "A (#7)", "A (#2) (#3)"]);
    }

    #[test]
    fn test_from_entries_disambiguates_reserved_labels() {
        let candidates = Candidates::from_entries(&names(&[(8, "no manager")]), &[NO_MANAGER]);
        assert_eq!(candidates.labels(), vec!["no manager (#8)"]);
        assert_eq!(
            resolve_manager("no manager (#8)", candidates.as_slice()).unwrap(),
            Some(8)
        );
    }
}
