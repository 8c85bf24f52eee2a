//! Prices and their natural keys.

use crate::reference::{opt_same_target, Reference};
use serde::{Deserialize, Serialize};

/// A monetary amount in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Amount in the currency's minor unit (cents).
    pub cent_amount: i64,
}

impl Money {
    /// Creates a new amount.
    pub fn new(currency_code: impl Into<String>, cent_amount: i64) -> Self {
        Self {
            currency_code: currency_code.into(),
            cent_amount,
        }
    }
}

/// One price entry in a price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Remote-assigned price identifier, absent on drafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The amount.
    pub value: Money,
    /// Country scope (ISO 3166-1 alpha-2), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Customer-group scope, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<Reference>,
    /// Start of the validity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// End of the validity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

impl Price {
    /// Creates a price with only an amount.
    pub fn new(value: Money) -> Self {
        Self {
            id: None,
            value,
            country: None,
            customer_group: None,
            valid_from: None,
            valid_until: None,
        }
    }

    /// Sets the price identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the country scope.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Returns the natural key used to match this price across
    /// representations.
    pub fn key(&self) -> PriceKey {
        match &self.id {
            Some(id) => PriceKey::Id(id.clone()),
            None => PriceKey::Scope {
                currency: self.value.currency_code.clone(),
                country: self.country.clone(),
            },
        }
    }

    /// Returns true if any diffable sub-field differs from `other`.
    ///
    /// The `id` is excluded: it is the matching key, not a value.
    pub fn differs_from(&self, other: &Price) -> bool {
        self.value != other.value
            || self.country != other.country
            || !opt_same_target(self.customer_group.as_ref(), other.customer_group.as_ref())
            || self.valid_from != other.valid_from
            || self.valid_until != other.valid_until
    }
}

/// Natural key of a price: the remote identifier when present, otherwise the
/// currency/country scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceKey {
    /// Remote-assigned identifier.
    Id(String),
    /// Scope composite for prices that have no identifier yet.
    Scope {
        /// ISO 4217 currency code.
        currency: String,
        /// Country scope, if any.
        country: Option<String>,
    },
}
