//! Differ for the variant list.

use crate::compare::keyed_list_diff;
use crate::differs::{attributes, images, prices};
use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::{ProductData, ProductVariant};

/// Diffs the variant group.
///
/// Master variants are matched explicitly (target master against current
/// master, regardless of key); the remaining variant lists are matched by
/// [`ProductVariant::key`]. Each matched pair reuses the price, attribute,
/// and image differs scoped with the variant's identity. Unmatched target
/// variants are added carrying the full draft; unmatched current variants
/// are removed by key.
///
/// Emission order: nested changes for matched pairs (master first, then
/// target-list order), then removals, then additions.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    options: &DiffOptions,
) -> Vec<UpdateAction> {
    let mut actions = Vec::new();

    if let (Some(target_master), Some(current_master)) =
        (&target.master_variant, &current.master_variant)
    {
        actions.extend(diff_matched(target_master, current_master, options));
    }

    let delta = keyed_list_diff(&target.variants, &current.variants, |v| v.key());
    for (target_variant, current_variant) in &delta.matched {
        actions.extend(diff_matched(target_variant, current_variant, options));
    }

    // A master present on only one side goes through the same add/remove
    // path as any other variant, ahead of its list peers.
    if let (None, Some(current_master)) = (&target.master_variant, &current.master_variant) {
        actions.push(UpdateAction::RemoveVariant {
            variant: current_master.key(),
        });
    }
    for variant in &delta.removed {
        actions.push(UpdateAction::RemoveVariant {
            variant: variant.key(),
        });
    }
    if let (Some(target_master), None) = (&target.master_variant, &current.master_variant) {
        actions.push(UpdateAction::AddVariant {
            variant: target_master.clone(),
        });
    }
    for variant in &delta.added {
        actions.push(UpdateAction::AddVariant {
            variant: (*variant).clone(),
        });
    }

    actions
}

/// Diffs one matched variant pair, scoping nested actions with the current
/// side's key (the identity the remote service knows).
fn diff_matched(
    target: &ProductVariant,
    current: &ProductVariant,
    options: &DiffOptions,
) -> Vec<UpdateAction> {
    let scope = current.key();
    let mut actions = prices::diff_scoped(&target.prices, &current.prices, Some(&scope));
    actions.extend(attributes::diff_scoped(
        &target.attributes,
        &current.attributes,
        Some(&scope),
    ));
    actions.extend(images::diff_scoped(
        &target.images,
        &current.images,
        Some(&scope),
        options,
    ));
    actions
}
