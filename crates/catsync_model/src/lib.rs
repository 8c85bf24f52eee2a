//! # Catsync Model
//!
//! Resource representations for catsync.
//!
//! This crate provides the data shapes shared by the diff engine and the
//! service client:
//! - `ProductData` for one versioned resource representation
//! - `LocalizedString` with locale-keyed structural equality
//! - `Reference`, `Price`, `Attribute`, `Image`, `ProductVariant`
//! - Natural-key types (`PriceKey`, `AttributeKey`, `VariantKey`) used to
//!   match collection elements across representations
//!
//! This is a pure data crate with no I/O operations. Representations are
//! read-only inputs to the engine and are never mutated by it.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod attribute;
mod image;
mod localized;
mod price;
mod product;
mod reference;
mod variant;

pub use attribute::{Attribute, AttributeKey};
pub use image::{Image, ImageDimensions};
pub use localized::{opt_eq_normalized, LocalizedString};
pub use price::{Money, Price, PriceKey};
pub use product::ProductData;
pub use reference::{opt_same_target, Reference};
pub use variant::{ProductVariant, VariantKey};
