//! Tests for bazaar payload decoding.
use satei::market::parse_products;

const BAZAAR_FIXTURE: &str = r#"{
    "success": true,
    "lastUpdated": 1700000000000,
    "products": {
        "RAW_ORE": {
            "product_id": "RAW_ORE",
            "sell_summary": [
                { "amount": 640, "pricePerUnit": 100.0, "orders": 3 },
                { "amount": 1280, "pricePerUnit": 101.5, "orders": 1 }
            ],
            "buy_summary": []
        },
        "DUSTY_RELIC": {
            "product_id": "DUSTY_RELIC",
            "sell_summary": [],
            "buy_summary": []
        }
    }
}"#;

#[test]
fn test_parse_best_sell_price() {
    let snapshot = parse_products(BAZAAR_FIXTURE).unwrap();
    assert_eq!(snapshot.len(), 2);

    let quote = snapshot.quote("RAW_ORE").unwrap();
    // The first sell_summary entry is the cheapest active order.
    assert_eq!(quote.best_sell_unit_price, Some(100.0));
    assert!(quote.has_sell_orders());
}

#[test]
fn test_empty_sell_summary_means_no_orders() {
    let snapshot = parse_products(BAZAAR_FIXTURE).unwrap();
    let quote = snapshot.quote("DUSTY_RELIC").unwrap();
    assert!(!quote.has_sell_orders());
    assert_eq!(quote.best_sell_unit_price, None);
}

#[test]
fn test_unknown_item_is_absent() {
    let snapshot = parse_products(BAZAAR_FIXTURE).unwrap();
    assert!(snapshot.quote("NOT_LISTED").is_none());
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(parse_products("{ not json").is_err());
}
