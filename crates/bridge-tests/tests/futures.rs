//! Futures contract endpoint tests.

use bridge_client::CreateFuturesContractRequest;
use bridge_tests::{create_test_client, fresh_server};

fn contract(contract_type: &str) -> CreateFuturesContractRequest {
    CreateFuturesContractRequest {
        commodity: "HG=F".to_string(),
        quantity: 25000.0,
        expiration_date: "2025-12-31".to_string(),
        target_price: 4.15,
        contract_type: contract_type.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_list_futures() {
    let client = create_test_client().await.expect("Failed to create client");

    let long = client
        .create_futures_contract(&contract("long"))
        .await
        .expect("Failed to create contract");
    let short = client
        .create_futures_contract(&contract("short"))
        .await
        .expect("Failed to create contract");

    assert_eq!(long.contract_type, "long");
    assert_eq!(short.id, long.id + 1);
    if fresh_server() {
        assert_eq!(long.id, 1);
    }

    let listed = client
        .list_futures_contracts()
        .await
        .expect("Failed to list contracts");
    assert!(listed.contains(&long));
    assert!(listed.contains(&short));
}

#[tokio::test]
async fn test_futures_accepts_free_form_contract_type() {
    let client = create_test_client().await.expect("Failed to create client");

    let created = client
        .create_futures_contract(&contract("calendar spread"))
        .await
        .expect("Failed to create contract");

    assert_eq!(created.contract_type, "calendar spread");
}

#[tokio::test]
async fn test_futures_empty_contract_type_rejected() {
    let client = create_test_client().await.expect("Failed to create client");

    let err = client
        .create_futures_contract(&contract(""))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
}
