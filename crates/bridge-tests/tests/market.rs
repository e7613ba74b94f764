//! Market quote endpoint tests.

use bridge_tests::{create_test_client, fresh_server};

#[tokio::test]
async fn test_synthetic_quote_ranges() {
    if !fresh_server() {
        return;
    }
    let client = create_test_client().await.expect("Failed to create client");

    for _ in 0..20 {
        let quote = client
            .get_synthetic_quote("HG=F")
            .await
            .expect("Failed to get quote");

        assert_eq!(quote.symbol, "HG=F");
        assert!((100.0..=150.0).contains(&quote.last_price));
        assert!((0.0..=5.0).contains(&quote.change));
        assert!((0.0..=2.0).contains(&quote.change_percent));
    }
}

#[tokio::test]
async fn test_market_quote_raw_json() {
    let client = create_test_client().await.expect("Failed to create client");

    let body = client
        .get_market_quote("ALI")
        .await
        .expect("Failed to get quote");

    assert!(body.is_object());
}
