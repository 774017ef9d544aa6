//! Product page → cart → checkout against the bundled catalog.

use chrono::{TimeZone, Utc};
use garment_commerce::prelude::*;

fn catalog() -> Catalog {
    Catalog::bundled().expect("bundled catalog parses")
}

fn shipping() -> ShippingDetails {
    ShippingDetails {
        name: "Ravi Kumar".to_string(),
        email: "ravi@example.com".to_string(),
        phone: "9000000001".to_string(),
        address: "4 Park Street".to_string(),
        city: "Kolkata".to_string(),
        state: "West Bengal".to_string(),
        pincode: "700016".to_string(),
    }
}

#[test]
fn product_page_selection_adds_sku_lines() {
    let catalog = catalog();
    let tee = catalog.require(&ProductId::new("1")).unwrap();
    let mut cart = CartStore::new(catalog.currency);

    let mut selection = VariantSelection::new();
    assert_eq!(selection.colors(&tee.variants), vec!["Black", "White", "Navy"]);

    selection.select_color("Black");
    assert_eq!(selection.sizes(&tee.variants), vec!["M", "L"]);

    selection.select_size("M");
    assert_eq!(selection.materials(&tee.variants), vec!["Cotton", "Bamboo"]);

    let implicit = selection.resolve(&tee.variants).unwrap();
    assert!(implicit.implicit);
    assert_eq!(implicit.variant.sku, "CCT-BLK-M-COT");
    cart.add_units(tee.variant_candidate(implicit.variant), 2);

    selection.select_material("Bamboo");
    let explicit = selection.resolve(&tee.variants).unwrap();
    assert_eq!(explicit.variant.sku, "CCT-BLK-M-BAM");
    cart.add_item(tee.variant_candidate(explicit.variant));

    assert_eq!(cart.unique_item_count(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total().amount, 3 * 599);
}

#[test]
fn switching_color_invalidates_size_that_does_not_exist_there() {
    let catalog = catalog();
    let tee = catalog.require(&ProductId::new("1")).unwrap();

    let mut selection = VariantSelection::new();
    selection.select_color("Black");
    selection.select_size("L");
    selection.select_color("White");

    assert!(matches!(
        selection.resolve(&tee.variants),
        Err(CommerceError::SelectionIncomplete)
    ));
    assert!(!selection.sizes(&tee.variants).contains(&"L"));
}

#[test]
fn listing_and_variant_adds_are_separate_lines() {
    let catalog = catalog();
    let shirt = catalog.require(&ProductId::new("2")).unwrap();
    let mut cart = CartStore::new(catalog.currency);

    cart.add_item(shirt.catalog_candidate());
    cart.add_item(shirt.variant_candidate(&shirt.variants[0]));
    cart.add_item(shirt.catalog_candidate());

    assert_eq!(cart.unique_item_count(), 2);
    assert_eq!(cart.get(&ItemId::new("2")).unwrap().quantity, 2);
}

#[test]
fn checkout_places_order_and_empties_cart() {
    let catalog = catalog();
    let hoodie = catalog.require(&ProductId::new("5")).unwrap();
    let now = Utc.timestamp_millis_opt(1_720_000_000_000).unwrap();
    let mut session = SessionState::new(catalog.currency, now);

    session.cart.add_item(hoodie.catalog_candidate());
    let mut flow = CheckoutFlow::default();
    assert_eq!(flow.summary(&session.cart).grand_total.amount, 1899 + 100);

    flow.proceed_to_payment(&session.cart, shipping()).unwrap();
    flow.submit_payment(PaymentMethod::Card(CardDetails::new(
        "4111 1111 1111 1111",
        "RAVI KUMAR",
        "09/27",
        "321",
    )))
    .unwrap();

    let confirmation = flow.complete(&mut session.cart, now).unwrap().clone();
    session.last_order = Some(confirmation.clone());

    assert_eq!(confirmation.order_id.as_str(), "ORD-1720000000000");
    assert_eq!(confirmation.summary.grand_total.amount, 1999);
    assert!(session.cart.is_empty());
    assert_eq!(session.cart.total().amount, 0);

    let restored = SessionState::from_json(&session.to_json().unwrap()).unwrap();
    assert_eq!(restored.last_order, Some(confirmation));
}

#[test]
fn browse_by_category_and_price() {
    let catalog = catalog();
    let query = CatalogQuery::new().with_sort(SortOption::PriceHigh);
    let prices: Vec<i64> = catalog.browse(&query).iter().map(|p| p.price).collect();

    let mut sorted = prices.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(prices, sorted);

    let shirts = catalog.browse(&CatalogQuery::new().with_category("Shirts"));
    assert!(shirts.iter().all(|p| p.category == "Shirts"));
    assert!(!shirts.is_empty());
}
