//! The closed sum type of partial-update actions.

use crate::group::ActionGroup;
use catsync_model::{Image, LocalizedString, Price, PriceKey, ProductVariant, Reference, VariantKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One atomic partial-update action.
///
/// Each variant serializes as `{"action": "<kind>", ...payload}`. The kind
/// names form a closed enumeration; an unknown kind fails at
/// deserialization, not at the API boundary.
///
/// Price, attribute, and image actions carry an optional `variant` scope:
/// `None` targets the master-level lists, `Some(key)` targets one variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UpdateAction {
    // -- base -------------------------------------------------------------
    /// Replaces the product name.
    ChangeName {
        /// The target name.
        name: LocalizedString,
    },
    /// Replaces the URL slug.
    ChangeSlug {
        /// The target slug.
        slug: LocalizedString,
    },
    /// Sets or clears the description.
    SetDescription {
        /// The target description; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<LocalizedString>,
    },
    /// Sets or clears the meta title.
    SetMetaTitle {
        /// The target meta title; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta_title: Option<LocalizedString>,
    },
    /// Sets or clears the meta description.
    SetMetaDescription {
        /// The target meta description; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meta_description: Option<LocalizedString>,
    },
    /// Sets or clears the search keywords.
    SetSearchKeywords {
        /// The target search keywords; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        search_keywords: Option<LocalizedString>,
    },

    // -- references -------------------------------------------------------
    /// Sets or clears the tax category reference.
    SetTaxCategory {
        /// The target reference; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tax_category: Option<Reference>,
    },
    /// Sets or clears the workflow state reference.
    SetState {
        /// The target reference; absent clears.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<Reference>,
    },

    // -- prices -----------------------------------------------------------
    /// Adds a price.
    AddPrice {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// The price to add.
        price: Price,
    },
    /// Replaces a matched price whose sub-fields differ.
    ChangePrice {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// Key of the price being replaced.
        price_id: PriceKey,
        /// The target price.
        price: Price,
    },
    /// Removes a price.
    RemovePrice {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// Key of the price being removed.
        price_id: PriceKey,
    },

    // -- attributes -------------------------------------------------------
    /// Sets an attribute value.
    SetAttribute {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// Attribute name.
        name: String,
        /// Locale scope for localized attributes, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
        /// The target value.
        value: Value,
    },
    /// Removes an attribute.
    RemoveAttribute {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// Attribute name.
        name: String,
        /// Locale scope for localized attributes, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },

    // -- images -----------------------------------------------------------
    /// Appends an image to the image list.
    AddExternalImage {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// The image to add.
        image: Image,
    },
    /// Removes an image from the image list.
    RemoveImage {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// URL of the image being removed.
        image_url: String,
    },
    /// Moves an image to a new position in the image list.
    MoveImage {
        /// Variant scope; absent targets the master-level list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variant: Option<VariantKey>,
        /// URL of the image being moved.
        image_url: String,
        /// Target position, zero-based.
        position: usize,
    },

    // -- variants ---------------------------------------------------------
    /// Adds a variant, carrying the full target draft.
    AddVariant {
        /// The variant to add.
        variant: ProductVariant,
    },
    /// Removes a variant by key.
    RemoveVariant {
        /// Key of the variant being removed.
        variant: VariantKey,
    },

    // -- categories -------------------------------------------------------
    /// Adds the product to a category.
    AddToCategory {
        /// The category to join.
        category: Reference,
    },
    /// Removes the product from a category.
    RemoveFromCategory {
        /// The category to leave.
        category: Reference,
    },
}

impl UpdateAction {
    /// Returns the group this action belongs to.
    pub fn group(&self) -> ActionGroup {
        match self {
            UpdateAction::ChangeName { .. }
            | UpdateAction::ChangeSlug { .. }
            | UpdateAction::SetDescription { .. }
            | UpdateAction::SetMetaTitle { .. }
            | UpdateAction::SetMetaDescription { .. }
            | UpdateAction::SetSearchKeywords { .. } => ActionGroup::Base,
            UpdateAction::SetTaxCategory { .. } | UpdateAction::SetState { .. } => {
                ActionGroup::References
            }
            UpdateAction::AddPrice { variant, .. }
            | UpdateAction::ChangePrice { variant, .. }
            | UpdateAction::RemovePrice { variant, .. } => match variant {
                Some(_) => ActionGroup::Variants,
                None => ActionGroup::Prices,
            },
            UpdateAction::SetAttribute { variant, .. }
            | UpdateAction::RemoveAttribute { variant, .. } => match variant {
                Some(_) => ActionGroup::Variants,
                None => ActionGroup::Attributes,
            },
            UpdateAction::AddExternalImage { variant, .. }
            | UpdateAction::RemoveImage { variant, .. }
            | UpdateAction::MoveImage { variant, .. } => match variant {
                Some(_) => ActionGroup::Variants,
                None => ActionGroup::Images,
            },
            UpdateAction::AddVariant { .. } | UpdateAction::RemoveVariant { .. } => {
                ActionGroup::Variants
            }
            UpdateAction::AddToCategory { .. } | UpdateAction::RemoveFromCategory { .. } => {
                ActionGroup::Categories
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn change_name_wire_shape() {
        let action = UpdateAction::ChangeName {
            name: LocalizedString::of("en", "Car"),
        };
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire, json!({"action": "changeName", "name": {"en": "Car"}}));
    }

    #[test]
    fn clearing_setter_omits_payload() {
        let action = UpdateAction::SetDescription { description: None };
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire, json!({"action": "setDescription"}));
    }

    #[test]
    fn variant_scoped_attribute_wire_shape() {
        let action = UpdateAction::SetAttribute {
            variant: Some(VariantKey::Sku("SKU-1".into())),
            name: "color".into(),
            locale: None,
            value: json!("red"),
        };
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(
            wire,
            json!({
                "action": "setAttribute",
                "variant": "SKU-1",
                "name": "color",
                "value": "red",
            })
        );
    }

    #[test]
    fn category_actions_wire_shape() {
        let action = UpdateAction::RemoveFromCategory {
            category: Reference::category("c1"),
        };
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(
            wire,
            json!({
                "action": "removeFromCategory",
                "category": {"typeId": "category", "id": "c1"},
            })
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let wire = json!({"action": "explodeProduct"});
        assert!(serde_json::from_value::<UpdateAction>(wire).is_err());
    }

    #[test]
    fn group_mapping() {
        let name = UpdateAction::ChangeName {
            name: LocalizedString::new(),
        };
        assert_eq!(name.group(), ActionGroup::Base);

        let tax = UpdateAction::SetTaxCategory { tax_category: None };
        assert_eq!(tax.group(), ActionGroup::References);

        let master_price = UpdateAction::RemovePrice {
            variant: None,
            price_id: PriceKey::Id("p1".into()),
        };
        assert_eq!(master_price.group(), ActionGroup::Prices);

        let variant_price = UpdateAction::RemovePrice {
            variant: Some(VariantKey::Id(2)),
            price_id: PriceKey::Id("p1".into()),
        };
        assert_eq!(variant_price.group(), ActionGroup::Variants);

        let join = UpdateAction::AddToCategory {
            category: Reference::category("c1"),
        };
        assert_eq!(join.group(), ActionGroup::Categories);
    }
}
