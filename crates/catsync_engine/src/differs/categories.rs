//! Differ for category memberships.

use crate::compare::set_diff;
use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::ProductData;

/// Diffs the category membership set.
///
/// Categories are set-like: elements are compared by identifier only.
/// Removals come first, in current-list order, so a membership slot is
/// never transiently duplicated on the remote side; additions follow in
/// target-list order.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    _options: &DiffOptions,
) -> Vec<UpdateAction> {
    let delta = set_diff(&target.categories, &current.categories, |r| r.id.clone());
    let mut actions = Vec::new();

    for category in &delta.to_remove {
        actions.push(UpdateAction::RemoveFromCategory {
            category: (*category).clone(),
        });
    }
    for category in &delta.to_add {
        actions.push(UpdateAction::AddToCategory {
            category: (*category).clone(),
        });
    }

    actions
}
