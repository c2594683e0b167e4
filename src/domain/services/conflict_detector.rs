//! Conflict Detector Domain Service
//!
//! Finds candidate operations whose full name is already taken by an
//! operation of a sibling description of the same client.

use std::collections::{BTreeMap, HashSet};

use crate::domain::entities::{Client, Operation, ServiceDescription};
use crate::domain::value_objects::{DescriptionId, FullName};

/// Which of the client's descriptions take part in conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictScope {
    /// Every description (registering a new one).
    AllDescriptions,
    /// Every description except the one being rebuilt.
    Excluding(DescriptionId),
}

impl ConflictScope {
    pub fn includes(&self, description: &ServiceDescription) -> bool {
        match self {
            ConflictScope::AllDescriptions => true,
            ConflictScope::Excluding(id) => description.id != *id,
        }
    }
}

/// An existing operation that a candidate collides with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictedOperation {
    pub full_name: FullName,
    /// Source locator of the description owning the existing operation.
    pub source_url: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// Existing operations in `scope` that share a full name with any of
    /// `candidates`, ordered by full name then source.
    pub fn detect(
        &self,
        client: &Client,
        candidates: &[Operation],
        scope: ConflictScope,
    ) -> Vec<ConflictedOperation> {
        let wanted: HashSet<FullName> = candidates.iter().map(Operation::full_name).collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        let mut found: BTreeMap<(String, String), ConflictedOperation> = BTreeMap::new();
        for (description, operation) in client.operations_where(move |d| scope.includes(d)) {
            let full_name = operation.full_name();
            if wanted.contains(&full_name) {
                found
                    .entry((full_name.key().to_string(), description.url.clone()))
                    .or_insert_with(|| ConflictedOperation {
                        full_name,
                        source_url: description.url.clone(),
                    });
            }
        }
        found.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_DISABLED_NOTICE;
    use crate::domain::value_objects::ClientId;
    use chrono::Utc;

    fn op(code: &str, version: &str) -> Operation {
        Operation::new(code, Some(version), "http://backend")
    }

    fn client_with(descriptions: &[(u64, &str, &[(&str, &str)])]) -> Client {
        let id = ClientId::member("EE", "GOV", "1");
        let mut client = Client::new(id.clone());
        for (desc_id, url, ops) in descriptions {
            client.add_description(ServiceDescription::new_wsdl(
                DescriptionId(*desc_id),
                id.clone(),
                url,
                DEFAULT_DISABLED_NOTICE,
                Utc::now(),
                ops.iter().map(|(c, v)| op(c, v)).collect(),
            ));
        }
        client
    }

    #[test]
    fn no_conflict_for_disjoint_names() {
        let client = client_with(&[(1, "http://x/a.wsdl", &[("a", "v1")])]);
        let conflicts =
            ConflictDetector::new().detect(&client, &[op("b", "v1")], ConflictScope::AllDescriptions);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn conflict_reports_existing_name_and_owner_url() {
        let client = client_with(&[
            (1, "http://x/a.wsdl", &[("getUser", "v1")]),
            (2, "http://x/b.wsdl", &[("other", "v1")]),
        ]);
        let conflicts = ConflictDetector::new().detect(
            &client,
            &[op("GETUSER", "V1"), op("fresh", "v1")],
            ConflictScope::AllDescriptions,
        );
        assert_eq!(
            conflicts,
            vec![ConflictedOperation {
                full_name: FullName::from("getUser.v1"),
                source_url: "http://x/a.wsdl".to_string(),
            }]
        );
        assert_eq!(conflicts[0].full_name.as_str(), "getUser.v1");
    }

    #[test]
    fn excluded_description_does_not_conflict_with_itself() {
        let client = client_with(&[(1, "http://x/a.wsdl", &[("a", "v1")])]);
        let conflicts = ConflictDetector::new().detect(
            &client,
            &[op("a", "v1")],
            ConflictScope::Excluding(DescriptionId(1)),
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn exclusion_still_checks_siblings() {
        let client = client_with(&[
            (1, "http://x/a.wsdl", &[("a", "v1")]),
            (2, "http://x/b.wsdl", &[("b", "v1")]),
        ]);
        let conflicts = ConflictDetector::new().detect(
            &client,
            &[op("a", "v1"), op("b", "v1")],
            ConflictScope::Excluding(DescriptionId(1)),
        );
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].source_url, "http://x/b.wsdl");
    }

    #[test]
    fn duplicate_candidates_are_reported_once() {
        let client = client_with(&[(1, "http://x/a.wsdl", &[("a", "v1")])]);
        let conflicts = ConflictDetector::new().detect(
            &client,
            &[op("a", "v1"), op("A", "v1")],
            ConflictScope::AllDescriptions,
        );
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn empty_candidates_never_conflict() {
        let client = client_with(&[(1, "http://x/a.wsdl", &[("a", "v1")])]);
        assert!(ConflictDetector::new()
            .detect(&client, &[], ConflictScope::AllDescriptions)
            .is_empty());
    }
}
