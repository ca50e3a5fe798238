//! Integration tests for the browse -> cart -> order flow.

use rust_decimal::dec;

use sk_accessories_core::{Category, Price};
use sk_accessories_integration_tests::test_config;
use sk_accessories_storefront::catalog::CatalogFilter;
use sk_accessories_storefront::order::CustomerDetails;
use sk_accessories_storefront::reconcile::{self, ImportedRow};
use sk_accessories_storefront::state::AppState;
use sk_accessories_storefront::store::{ProductEdit, ProductStore};

/// Seed a catalog on the config's store path and return a state that sees it.
fn seeded_state(config: &sk_accessories_storefront::config::StorefrontConfig) -> AppState {
    let mut store = ProductStore::empty(&config.products_path);
    reconcile::reconcile(
        &mut store,
        vec![
            ImportedRow::new("SKB100", "Bell Switch", dec!(50), "pc").expect("row"),
            ImportedRow::new("SKW10", "Copper Wire", dec!(2.50), "coil").expect("row"),
            ImportedRow::new("SKFAN5", "Ceiling Fan", dec!(900), "pc").expect("row"),
        ],
    )
    .expect("seed catalog");
    AppState::new(config)
}

#[test]
fn test_browse_filter_add_and_place_order() {
    let config = test_config();
    let mut state = seeded_state(&config);

    // Category browse preserves insertion order; search is ANDed on top.
    let bekolite = state.catalog(&CatalogFilter::category(Category::Bekolite));
    assert_eq!(bekolite.len(), 1);
    let switch_id = bekolite.first().expect("product").id;

    let wires = state.catalog(&CatalogFilter::search("copper"));
    let wire_id = wires.first().expect("product").id;

    let summary = state.add_to_cart(switch_id, 2);
    assert_eq!(summary.item_count, 2);
    let summary = state.add_to_cart(wire_id, 4);
    assert_eq!(summary.item_count, 6);
    assert_eq!(summary.total, dec!(110));

    let details = CustomerDetails::new("Mehta Electricals", "12 Market Road", "9876543210", "Pune")
        .expect("details");
    let order = state.place_order(details).expect("order");
    assert_eq!(order.lines().len(), 2);
    assert_eq!(order.grand_total(), dec!(110));

    // Finishing the confirmation clears the cart without touching the order.
    let summary = state.complete_order();
    assert_eq!(summary.item_count, 0);
    assert_eq!(order.grand_total(), dec!(110));
    assert!(order.share_message().contains("*Grand Total: Rs. 110.00*"));

    let _ = std::fs::remove_file(&config.products_path);
}

#[test]
fn test_price_edit_flows_into_cart_total_and_next_order() {
    let config = test_config();
    let mut state = seeded_state(&config);

    let switch_id = state
        .products()
        .find_by_code("SKB100")
        .expect("product")
        .id;
    state.add_to_cart(switch_id, 2);
    assert_eq!(state.cart_summary().total, dec!(100));

    let edit = ProductEdit::new(
        "Bell Switch",
        "SKB100",
        Price::new(dec!(60)).expect("price"),
        "pc",
    )
    .expect("edit");
    state.update_product(switch_id, edit).expect("update");

    // No cart mutation, new total.
    assert_eq!(state.cart_summary().total, dec!(120));

    let details = CustomerDetails::new("Shop", "Addr", "123", "Pune").expect("details");
    let order = state.place_order(details).expect("order");
    assert_eq!(order.grand_total(), dec!(120));

    let _ = std::fs::remove_file(&config.products_path);
}

#[test]
fn test_missing_address_rejected_and_cart_preserved() {
    let config = test_config();
    let mut state = seeded_state(&config);
    let switch_id = state
        .products()
        .find_by_code("SKB100")
        .expect("product")
        .id;
    state.add_to_cart(switch_id, 1);

    assert!(CustomerDetails::new("Shop", "   ", "123", "Pune").is_err());
    assert_eq!(state.cart_summary().item_count, 1);

    let _ = std::fs::remove_file(&config.products_path);
}
