//! Product version constraints.

use serde::{Deserialize, Serialize};

/// Supported reference abbreviations and the product names they expand to.
pub const PRODUCT_ABBREVIATIONS: &[(&str, &str)] = &[
    ("OCP", "Red Hat OpenShift Container Platform"),
    ("ACM", "Red Hat Advanced Cluster Management for Kubernetes"),
    ("QUAY", "Red Hat Quay"),
    ("ODF", "Red Hat OpenShift Data Foundation"),
];

/// Expands a reference abbreviation (case-insensitive) to its product name.
pub fn product_for_abbreviation(abbreviation: &str) -> Option<&'static str> {
    PRODUCT_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(abbreviation))
        .map(|(_, product)| *product)
}

/// A required version token for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConstraint {
    pub product: String,
    pub version: String,
}

/// Product name → version token, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionConstraints {
    entries: Vec<VersionConstraint>,
}

impl VersionConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the version for `product`; a repeated product keeps its first position.
    pub fn insert(&mut self, product: impl Into<String>, version: impl Into<String>) {
        let product = product.into();
        let version = version.into();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.product.eq_ignore_ascii_case(&product))
        {
            Some(existing) => existing.version = version,
            None => self.entries.push(VersionConstraint { product, version }),
        }
    }

    /// Looks up the version token for a product name (case-insensitive).
    pub fn get(&self, product: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.product.eq_ignore_ascii_case(product.trim()))
            .map(|entry| entry.version.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionConstraint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
