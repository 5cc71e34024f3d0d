use serde::{Deserialize, Serialize};

/// A normalized `operator → product` request.
///
/// `product` is empty when the operator has no mapping; `release_hint` is
/// empty when no release label accompanied the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchItem {
    pub operator: String,
    pub product: String,
    pub release_hint: String,
}

impl SearchItem {
    pub fn new(
        operator: impl Into<String>,
        product: impl Into<String>,
        release_hint: impl Into<String>,
    ) -> Self {
        Self {
            operator: operator.into(),
            product: product.into(),
            release_hint: release_hint.into(),
        }
    }

    /// An operator with no product mapping.
    pub fn unmapped(operator: impl Into<String>) -> Self {
        Self::new(operator, "", "")
    }

    pub fn is_mapped(&self) -> bool {
        !self.product.is_empty()
    }

    pub fn release_hint(&self) -> Option<&str> {
        if self.release_hint.is_empty() {
            None
        } else {
            Some(self.release_hint.as_str())
        }
    }
}
