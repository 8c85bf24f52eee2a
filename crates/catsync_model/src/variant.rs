//! Product variants and their natural keys.

use crate::attribute::Attribute;
use crate::image::Image;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// One product variant with its prices, attributes, and images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Remote-assigned numeric identifier.
    #[serde(default)]
    pub id: u64,
    /// Stock keeping unit, the preferred matching key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// The variant's price list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<Price>,
    /// The variant's custom attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// The variant's ordered image list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
}

impl ProductVariant {
    /// Creates a variant keyed by SKU.
    pub fn with_sku(sku: impl Into<String>) -> Self {
        Self {
            sku: Some(sku.into()),
            ..Self::default()
        }
    }

    /// Creates a variant keyed by numeric id.
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Returns the natural key used to match this variant across
    /// representations: the SKU when present, otherwise the numeric id.
    pub fn key(&self) -> VariantKey {
        match &self.sku {
            Some(sku) => VariantKey::Sku(sku.clone()),
            None => VariantKey::Id(self.id),
        }
    }
}

/// Natural key of a variant.
///
/// Serializes untagged: a SKU key is a JSON string, an id key a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantKey {
    /// Stock keeping unit.
    Sku(String),
    /// Remote-assigned numeric identifier.
    Id(u64),
}
