//! Property-based tests for the engine's core guarantees: idempotence,
//! determinism, and group-order invariance.

use catsync_engine::build_actions;
use catsync_model::{
    Attribute, Image, LocalizedString, Money, Price, ProductData, ProductVariant, Reference,
};
use proptest::prelude::*;

fn localized_strategy() -> impl Strategy<Value = LocalizedString> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["en", "de", "fr"]),
            "[a-zA-Z ]{0,8}",
        ),
        0..3,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(locale, text)| (locale.to_string(), text))
            .collect()
    })
}

fn reference_strategy(type_id: &'static str) -> impl Strategy<Value = Reference> {
    "[a-z0-9]{1,4}".prop_map(move |id| Reference::new(type_id, id))
}

fn price_strategy() -> impl Strategy<Value = Price> {
    (
        prop::option::of("[a-z0-9]{1,4}"),
        prop::sample::select(vec!["EUR", "USD", "GBP"]),
        0i64..10_000,
        prop::option::of(prop::sample::select(vec!["DE", "US"])),
    )
        .prop_map(|(id, currency, cents, country)| {
            let mut price = Price::new(Money::new(currency, cents));
            price.id = id;
            price.country = country.map(str::to_string);
            price
        })
}

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    (
        "[a-z]{1,6}",
        prop::option::of(prop::sample::select(vec!["en", "de"])),
        prop_oneof![
            Just(serde_json::Value::Null),
            "[a-z]{0,6}".prop_map(serde_json::Value::from),
            any::<i32>().prop_map(serde_json::Value::from),
        ],
    )
        .prop_map(|(name, locale, value)| Attribute {
            name,
            locale: locale.map(str::to_string),
            value,
        })
}

fn image_strategy() -> impl Strategy<Value = Image> {
    "[a-z0-9]{1,6}".prop_map(|name| Image::new(format!("https://img.example.com/{name}.png")))
}

fn variant_strategy() -> impl Strategy<Value = ProductVariant> {
    (
        1u64..50,
        prop::option::of("[A-Z0-9]{1,6}"),
        prop::collection::vec(price_strategy(), 0..3),
        prop::collection::vec(attribute_strategy(), 0..3),
        prop::collection::vec(image_strategy(), 0..3),
    )
        .prop_map(|(id, sku, prices, attributes, images)| ProductVariant {
            id,
            sku,
            prices,
            attributes,
            images,
        })
}

fn product_strategy() -> impl Strategy<Value = ProductData> {
    (
        (
            localized_strategy(),
            localized_strategy(),
            prop::option::of(localized_strategy()),
            prop::option::of(reference_strategy("tax-category")),
        ),
        (
            prop::collection::vec(price_strategy(), 0..3),
            prop::collection::vec(attribute_strategy(), 0..3),
            prop::collection::vec(image_strategy(), 0..3),
        ),
        (
            prop::option::of(variant_strategy()),
            prop::collection::vec(variant_strategy(), 0..3),
            prop::collection::vec(reference_strategy("category"), 0..4),
        ),
    )
        .prop_map(
            |(
                (name, slug, description, tax_category),
                (prices, attributes, images),
                (master_variant, variants, categories),
            )| ProductData {
                name,
                slug,
                description,
                tax_category,
                prices,
                attributes,
                images,
                master_variant,
                variants,
                categories,
                ..ProductData::default()
            },
        )
}

proptest! {
    #[test]
    fn diffing_a_representation_with_itself_is_empty(product in product_strategy()) {
        let actions = build_actions(&product, &product.clone());
        prop_assert!(actions.is_empty(), "self-diff produced {actions:?}");
    }

    #[test]
    fn output_is_deterministic(
        target in product_strategy(),
        current in product_strategy(),
    ) {
        let first = build_actions(&target, &current);
        let second = build_actions(&target, &current);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn group_membership_is_monotone(
        target in product_strategy(),
        current in product_strategy(),
    ) {
        let actions = build_actions(&target, &current);
        let positions: Vec<usize> = actions.iter().map(|a| a.group().position()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }
}
