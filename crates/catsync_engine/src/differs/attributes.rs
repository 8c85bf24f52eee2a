//! Differ for custom attributes.

use crate::compare::keyed_list_diff;
use crate::options::DiffOptions;
use catsync_actions::UpdateAction;
use catsync_model::{Attribute, ProductData, VariantKey};

/// Diffs the master-level attribute list.
pub(crate) fn diff(
    target: &ProductData,
    current: &ProductData,
    _options: &DiffOptions,
) -> Vec<UpdateAction> {
    diff_scoped(&target.attributes, &current.attributes, None)
}

/// Diffs two attribute lists, matching by `(name, locale)`.
///
/// A target attribute with the absent value (JSON `null`) where the current
/// side has a value emits a removal, never a no-op set; a `null` target
/// attribute with no current counterpart emits nothing at all.
pub(crate) fn diff_scoped(
    target: &[Attribute],
    current: &[Attribute],
    scope: Option<&VariantKey>,
) -> Vec<UpdateAction> {
    let delta = keyed_list_diff(target, current, |a| a.key());
    let mut actions = Vec::new();

    for attr in &delta.removed {
        actions.push(remove(attr, scope));
    }
    for (target_attr, current_attr) in &delta.matched {
        if target_attr.is_absent() {
            if !current_attr.is_absent() {
                actions.push(remove(target_attr, scope));
            }
        } else if target_attr.value != current_attr.value {
            actions.push(set(target_attr, scope));
        }
    }
    for attr in &delta.added {
        if !attr.is_absent() {
            actions.push(set(attr, scope));
        }
    }

    actions
}

fn set(attr: &Attribute, scope: Option<&VariantKey>) -> UpdateAction {
    UpdateAction::SetAttribute {
        variant: scope.cloned(),
        name: attr.name.clone(),
        locale: attr.locale.clone(),
        value: attr.value.clone(),
    }
}

fn remove(attr: &Attribute, scope: Option<&VariantKey>) -> UpdateAction {
    UpdateAction::RemoveAttribute {
        variant: scope.cloned(),
        name: attr.name.clone(),
        locale: attr.locale.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn new_attribute_is_set() {
        let target = vec![Attribute::new("color", json!("red"))];
        let actions = diff_scoped(&target, &[], None);
        assert_eq!(
            actions,
            vec![UpdateAction::SetAttribute {
                variant: None,
                name: "color".into(),
                locale: None,
                value: json!("red"),
            }]
        );
    }

    #[test]
    fn missing_target_attribute_is_removed() {
        let current = vec![Attribute::new("color", json!("red"))];
        let actions = diff_scoped(&[], &current, None);
        assert_eq!(
            actions,
            vec![UpdateAction::RemoveAttribute {
                variant: None,
                name: "color".into(),
                locale: None,
            }]
        );
    }

    #[test]
    fn null_target_value_removes_instead_of_setting() {
        let target = vec![Attribute::new("color", Value::Null)];
        let current = vec![Attribute::new("color", json!("red"))];
        let actions = diff_scoped(&target, &current, None);
        assert_eq!(
            actions,
            vec![UpdateAction::RemoveAttribute {
                variant: None,
                name: "color".into(),
                locale: None,
            }]
        );
    }

    #[test]
    fn null_on_both_sides_is_silent() {
        let target = vec![Attribute::new("color", Value::Null)];
        let actions = diff_scoped(&target, &[], None);
        assert!(actions.is_empty());

        let current = vec![Attribute::new("color", Value::Null)];
        assert!(diff_scoped(&target, &current, None).is_empty());
    }

    #[test]
    fn locale_is_part_of_the_key() {
        let target = vec![Attribute::localized("blurb", "en", json!("text"))];
        let current = vec![Attribute::localized("blurb", "de", json!("Text"))];
        let actions = diff_scoped(&target, &current, None);
        assert_eq!(
            actions,
            vec![
                UpdateAction::RemoveAttribute {
                    variant: None,
                    name: "blurb".into(),
                    locale: Some("de".into()),
                },
                UpdateAction::SetAttribute {
                    variant: None,
                    name: "blurb".into(),
                    locale: Some("en".into()),
                    value: json!("text"),
                },
            ]
        );
    }

    #[test]
    fn changed_structured_value_is_set() {
        let target = vec![Attribute::new("size", json!({"w": 10, "h": 20}))];
        let current = vec![Attribute::new("size", json!({"w": 10, "h": 30}))];
        let actions = diff_scoped(&target, &current, None);
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], UpdateAction::SetAttribute { .. }));
    }
}
