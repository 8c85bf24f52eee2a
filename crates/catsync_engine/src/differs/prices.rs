//! Differ for price lists.

use crate::compare::keyed_list_diff;
use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::{Price, ProductData, VariantKey};

/// Diffs the master-level price list.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    _options: &DiffOptions,
) -> Vec<UpdateAction> {
    diff_scoped(&target.prices, &current.prices, None)
}

/// Diffs two price lists, matching by [`Price::key`].
///
/// Emission order: removals in current-list order, then changes for matched
/// pairs in target-list order, then additions in target-list order. A change
/// is only emitted when some sub-field actually differs.
pub(crate) fn diff_scoped(
    target: &[Price],
    current: &[Price],
    scope: Option<&VariantKey>,
) -> Vec<UpdateAction> {
    let delta = keyed_list_diff(target, current, |p| p.key());
    let mut actions = Vec::new();

    for price in &delta.removed {
        actions.push(UpdateAction::RemovePrice {
            variant: scope.cloned(),
            price_id: price.key(),
        });
    }
    for (target_price, current_price) in &delta.matched {
        if target_price.differs_from(current_price) {
            actions.push(UpdateAction::ChangePrice {
                variant: scope.cloned(),
                price_id: current_price.key(),
                price: (*target_price).clone(),
            });
        }
    }
    for price in &delta.added {
        actions.push(UpdateAction::AddPrice {
            variant: scope.cloned(),
            price: (*price).clone(),
        });
    }

    actions
}
