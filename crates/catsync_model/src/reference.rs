//! References to other resources.

use serde::{Deserialize, Serialize};

/// A reference to another resource.
///
/// A reference identifies its target by `type_id` and `id`. Remote
/// representations sometimes travel with a denormalized expansion of the
/// target; such fields are not part of the reference's identity and are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// The referenced resource type (e.g. `"category"`, `"tax-category"`).
    pub type_id: String,
    /// The referenced resource identifier.
    pub id: String,
}

impl Reference {
    /// Creates a new reference.
    pub fn new(type_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            id: id.into(),
        }
    }

    /// Creates a category reference.
    pub fn category(id: impl Into<String>) -> Self {
        Self::new("category", id)
    }

    /// Returns true if both references point at the same resource.
    ///
    /// Identity is by `id` only; the `type_id` is fixed per field, so two
    /// references in the same position always share it.
    pub fn same_target(&self, other: &Reference) -> bool {
        self.id == other.id
    }
}

/// Identity equality over optional references.
pub fn opt_same_target(a: Option<&Reference>, b: Option<&Reference>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_target(b),
        _ => false,
    }
}
