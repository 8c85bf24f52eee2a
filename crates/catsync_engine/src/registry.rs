//! The action-group registry.

use crate::differs;
use crate::options::DiffOptions;
use catsync_actions::{ActionGroup, UpdateAction};
use catsync_model::ProductData;

/// A differ: the pure function computing one group's action subsequence.
pub type DifferFn = fn(&ProductData, &ProductData, &DiffOptions) -> Vec<UpdateAction>;

/// The registry is a compile-time-ordered table, not configuration: its
/// order is the correctness invariant callers and downstream validation
/// depend on, so it is never mutable at runtime.
static REGISTRY: [(ActionGroup, DifferFn); 7] = [
    (ActionGroup::Base, differs::base::diff),
    (ActionGroup::References, differs::references::diff),
    (ActionGroup::Prices, differs::prices::diff),
    (ActionGroup::Attributes, differs::attributes::diff),
    (ActionGroup::Images, differs::images::diff),
    (ActionGroup::Variants, differs::variants::diff),
    (ActionGroup::Categories, differs::categories::diff),
];

/// Returns the ordered table binding each action group to its differ.
pub fn registry() -> &'static [(ActionGroup, DifferFn); 7] {
    &REGISTRY
}
