//! The product representation diffed by the engine.

use crate::attribute::Attribute;
use crate::image::Image;
use crate::localized::LocalizedString;
use crate::price::Price;
use crate::reference::Reference;
use crate::variant::ProductVariant;
use serde::{Deserialize, Serialize};

/// One resource representation: either the desired (target) state or the
/// state currently held by the remote service.
///
/// All fields are optional or default to empty; an all-default value is the
/// fully absent representation, and diffing two of those yields no actions.
/// Unknown fields in a remote JSON document are ignored on deserialization,
/// so new remote fields do not break older sync logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    /// Product name.
    #[serde(default, skip_serializing_if = "LocalizedString::is_empty")]
    pub name: LocalizedString,
    /// URL slug.
    #[serde(default, skip_serializing_if = "LocalizedString::is_empty")]
    pub slug: LocalizedString,
    /// Long description, clearable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedString>,
    /// Meta title for search engines, clearable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<LocalizedString>,
    /// Meta description for search engines, clearable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<LocalizedString>,
    /// Search keywords, clearable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<LocalizedString>,
    /// Tax category reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_category: Option<Reference>,
    /// Workflow state reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Reference>,
    /// Master-level price list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
    /// Master-level custom attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Master-level ordered image list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    /// The master variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_variant: Option<ProductVariant>,
    /// Further variants, matched by SKU or id.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,
    /// Category memberships, set-like.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Reference>,
}

impl ProductData {
    /// Creates the fully absent representation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    pub fn with_name(mut self, name: LocalizedString) -> Self {
        self.name = name;
        self
    }

    /// Sets the slug.
    pub fn with_slug(mut self, slug: LocalizedString) -> Self {
        self.slug = slug;
        self
    }

    /// Sets the category memberships.
    pub fn with_categories(mut self, categories: Vec<Reference>) -> Self {
        self.categories = categories;
        self
    }
}
