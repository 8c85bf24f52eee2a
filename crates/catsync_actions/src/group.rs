//! Action groups and their fixed ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named bucket of related actions with a fixed position in the overall
/// action sequence.
///
/// The declaration order of the variants is the group ordering contract:
/// the orchestrator always emits groups in this order, and `Ord` follows it.
/// Reordering the variants is a breaking change for consumers that depend on
/// positional semantics of the emitted action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionGroup {
    /// Simple identity and descriptive fields.
    Base,
    /// Single-valued reference fields.
    References,
    /// Master-level price list.
    Prices,
    /// Master-level custom attributes.
    Attributes,
    /// Master-level ordered image list.
    Images,
    /// Variant list and per-variant nested changes.
    Variants,
    /// Category memberships.
    Categories,
}

/// The fixed, public ordering of all action groups.
pub const GROUP_ORDER: [ActionGroup; 7] = [
    ActionGroup::Base,
    ActionGroup::References,
    ActionGroup::Prices,
    ActionGroup::Attributes,
    ActionGroup::Images,
    ActionGroup::Variants,
    ActionGroup::Categories,
];

impl ActionGroup {
    /// Returns the group's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionGroup::Base => "base",
            ActionGroup::References => "references",
            ActionGroup::Prices => "prices",
            ActionGroup::Attributes => "attributes",
            ActionGroup::Images => "images",
            ActionGroup::Variants => "variants",
            ActionGroup::Categories => "categories",
        }
    }

    /// Returns the group's position in [`GROUP_ORDER`].
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ActionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
