//! Differ for ordered image lists.

use crate::options::{DiffOptions, ImageReorder};
use catsync_actions::UpdateAction;
use catsync_model::{Image, ProductData, VariantKey};
use std::collections::HashSet;

/// Diffs the master-level image list.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    options: &DiffOptions,
) -> Vec<UpdateAction> {
    diff_scoped(&target.images, &current.images, None, options)
}

/// Diffs two ordered image lists, keyed by URL.
///
/// Position matters: beyond additions and removals, an image present on both
/// sides whose position changed produces either a `moveImage` with its
/// target position or, under [`ImageReorder::RemoveAdd`], a remove-then-add
/// pair for every image displaced by the change. Removals always precede
/// additions, additions precede moves.
pub(crate) fn diff_scoped(
    target: &[Image],
    current: &[Image],
    scope: Option<&VariantKey>,
    options: &DiffOptions,
) -> Vec<UpdateAction> {
    let target = dedupe(target);
    let current = dedupe(current);
    let target_urls: HashSet<&str> = target.iter().map(|i| i.url.as_str()).collect();
    let current_urls: HashSet<&str> = current.iter().map(|i| i.url.as_str()).collect();

    match options.image_reorder {
        ImageReorder::Move => {
            let mut actions = Vec::new();
            for image in &current {
                if !target_urls.contains(image.url.as_str()) {
                    actions.push(remove(image, scope));
                }
            }
            for image in &target {
                if !current_urls.contains(image.url.as_str()) {
                    actions.push(add(image, scope));
                }
            }

            // Working order after the removals land and the additions are
            // appended; moves splice it into target order.
            let mut working: Vec<&str> = current
                .iter()
                .filter(|i| target_urls.contains(i.url.as_str()))
                .chain(
                    target
                        .iter()
                        .filter(|i| !current_urls.contains(i.url.as_str())),
                )
                .map(|i| i.url.as_str())
                .collect();
            for (position, image) in target.iter().enumerate() {
                let want = image.url.as_str();
                if working[position] == want {
                    continue;
                }
                let found = working[position..]
                    .iter()
                    .position(|u| *u == want)
                    .map(|offset| position + offset);
                if let Some(index) = found {
                    working.remove(index);
                    working.insert(position, want);
                    actions.push(UpdateAction::MoveImage {
                        variant: scope.cloned(),
                        image_url: want.to_string(),
                        position,
                    });
                }
            }
            actions
        }
        ImageReorder::RemoveAdd => {
            // Without a move action, additions can only append, so the kept
            // images must form a prefix of the target order. Everything from
            // the first positional divergence onward is re-uploaded.
            let mut kept_candidates = current
                .iter()
                .map(|i| i.url.as_str())
                .filter(|u| target_urls.contains(u));
            let mut kept: HashSet<&str> = HashSet::new();
            for image in &target {
                let url = image.url.as_str();
                if !current_urls.contains(url) || kept_candidates.next() != Some(url) {
                    break;
                }
                kept.insert(url);
            }

            let mut actions = Vec::new();
            for image in &current {
                if !kept.contains(image.url.as_str()) {
                    actions.push(remove(image, scope));
                }
            }
            for image in &target {
                if !kept.contains(image.url.as_str()) {
                    actions.push(add(image, scope));
                }
            }
            actions
        }
    }
}

/// Keeps the first occurrence of each URL.
fn dedupe(images: &[Image]) -> Vec<&Image> {
    let mut seen = HashSet::new();
    images
        .iter()
        .filter(|i| seen.insert(i.url.as_str()))
        .collect()
}

fn add(image: &Image, scope: Option<&VariantKey>) -> UpdateAction {
    UpdateAction::AddExternalImage {
        variant: scope.cloned(),
        image: image.clone(),
    }
}

fn remove(image: &Image, scope: Option<&VariantKey>) -> UpdateAction {
    UpdateAction::RemoveImage {
        variant: scope.cloned(),
        image_url: image.url.clone(),
    }
}
