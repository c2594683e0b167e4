//! Client aggregate
//!
//! A client owns its service descriptions exclusively. The whole aggregate is
//! loaded, changed in memory and saved back as one unit.

use std::collections::HashSet;

use crate::domain::value_objects::{ClientId, DescriptionId};

use super::{Operation, ServiceDescription};

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: ClientId,
    descriptions: Vec<ServiceDescription>,
}

impl Client {
    pub fn new(id: ClientId) -> Self {
        Self {
            id,
            descriptions: Vec::new(),
        }
    }

    pub fn with_descriptions(id: ClientId, descriptions: Vec<ServiceDescription>) -> Self {
        Self { id, descriptions }
    }

    pub fn descriptions(&self) -> &[ServiceDescription] {
        &self.descriptions
    }

    pub fn description(&self, id: DescriptionId) -> Option<&ServiceDescription> {
        self.descriptions.iter().find(|d| d.id == id)
    }

    pub fn description_mut(&mut self, id: DescriptionId) -> Option<&mut ServiceDescription> {
        self.descriptions.iter_mut().find(|d| d.id == id)
    }

    pub fn add_description(&mut self, description: ServiceDescription) {
        self.descriptions.push(description);
    }

    pub fn remove_description(&mut self, id: DescriptionId) -> Option<ServiceDescription> {
        let index = self.descriptions.iter().position(|d| d.id == id)?;
        Some(self.descriptions.remove(index))
    }

    /// Whether a description other than `excluding` already uses `url`.
    pub fn has_source(&self, url: &str, excluding: Option<DescriptionId>) -> bool {
        self.descriptions
            .iter()
            .filter(|d| Some(d.id) != excluding)
            .any(|d| d.has_source(url))
    }

    /// Operations of every description accepted by `include`, paired with
    /// their owning description.
    pub fn operations_where<'a, F>(
        &'a self,
        include: F,
    ) -> impl Iterator<Item = (&'a ServiceDescription, &'a Operation)> + 'a
    where
        F: Fn(&ServiceDescription) -> bool + 'a,
    {
        self.descriptions
            .iter()
            .filter(move |d| include(*d))
            .flat_map(|d| d.operations().iter().map(move |op| (d, op)))
    }

    /// Whether no two operations across all descriptions share a full name.
    pub fn has_unique_full_names(&self) -> bool {
        let mut seen = HashSet::new();
        self.operations_where(|_| true)
            .all(|(_, op)| seen.insert(op.full_name()))
    }
}
