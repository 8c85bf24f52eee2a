//! Differ for single-valued reference fields.

use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::{opt_same_target, ProductData};

/// Diffs the reference field group.
///
/// References are compared by target identity only; denormalized fields
/// travelling alongside a reference never produce a diff. A reference absent
/// on the target side where the current side has one emits a clearing setter.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    _options: &DiffOptions,
) -> Vec<UpdateAction> {
    let mut actions = Vec::new();

    if !opt_same_target(target.tax_category.as_ref(), current.tax_category.as_ref()) {
        actions.push(UpdateAction::SetTaxCategory {
            tax_category: target.tax_category.clone(),
        });
    }
    if !opt_same_target(target.state.as_ref(), current.state.as_ref()) {
        actions.push(UpdateAction::SetState {
            state: target.state.clone(),
        });
    }

    actions
}
