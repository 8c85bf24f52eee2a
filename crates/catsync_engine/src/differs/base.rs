//! Differ for simple identity and descriptive fields.

use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::{opt_eq_normalized, LocalizedString, ProductData};

/// Returns the clearable payload for an optional localized field: the target
/// value when it has any non-empty text, otherwise `None` (a clear).
fn clearable(value: &Option<LocalizedString>) -> Option<LocalizedString> {
    value.as_ref().filter(|ls| !ls.is_blank()).cloned()
}

/// Diffs the base field group.
///
/// Each changed field emits exactly one action carrying the target value;
/// unchanged fields emit nothing. `name` and `slug` are mandatory change
/// actions, the rest are clearable setters.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    _options: &DiffOptions,
) -> Vec<UpdateAction> {
    let mut actions = Vec::new();

    if !target.name.eq_normalized(&current.name) {
        actions.push(UpdateAction::ChangeName {
            name: target.name.clone(),
        });
    }
    if !target.slug.eq_normalized(&current.slug) {
        actions.push(UpdateAction::ChangeSlug {
            slug: target.slug.clone(),
        });
    }
    if !opt_eq_normalized(target.description.as_ref(), current.description.as_ref()) {
        actions.push(UpdateAction::SetDescription {
            description: clearable(&target.description),
        });
    }
    if !opt_eq_normalized(target.meta_title.as_ref(), current.meta_title.as_ref()) {
        actions.push(UpdateAction::SetMetaTitle {
            meta_title: clearable(&target.meta_title),
        });
    }
    if !opt_eq_normalized(
        target.meta_description.as_ref(),
        current.meta_description.as_ref(),
    ) {
        actions.push(UpdateAction::SetMetaDescription {
            meta_description: clearable(&target.meta_description),
        });
    }
    if !opt_eq_normalized(
        target.search_keywords.as_ref(),
        current.search_keywords.as_ref(),
    ) {
        actions.push(UpdateAction::SetSearchKeywords {
            search_keywords: clearable(&target.search_keywords),
        });
    }

    actions
}
