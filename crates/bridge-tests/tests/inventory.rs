//! Inventory record endpoint tests.

use bridge_client::{CreateInventoryRequest, Error};
use bridge_tests::{create_test_client, fresh_server};

fn lot(metal_type: &str, quantity: f64, condition: &str) -> CreateInventoryRequest {
    CreateInventoryRequest {
        metal_type: metal_type.to_string(),
        quantity,
        condition: condition.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_list_inventory() {
    let client = create_test_client().await.expect("Failed to create client");

    let lots = [
        lot("copper", 1200.0, "clean"),
        lot("aluminum", 850.5, "mixed"),
        lot("brass", 40.0, "plated"),
    ];

    let mut created = Vec::new();
    for request in &lots {
        let record = client
            .create_inventory(request)
            .await
            .expect("Failed to create inventory record");
        assert_eq!(record.metal_type, request.metal_type);
        assert_eq!(record.quantity, request.quantity);
        assert_eq!(record.condition, request.condition);
        created.push(record);
    }

    if fresh_server() {
        let ids: Vec<u64> = created.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    let listed = client
        .list_inventory()
        .await
        .expect("Failed to list inventory");
    for record in &created {
        assert!(listed.contains(record));
    }
}

#[tokio::test]
async fn test_inventory_ids_increase() {
    let client = create_test_client().await.expect("Failed to create client");

    let first = client
        .create_inventory(&lot("steel", 5000.0, "heavy melt"))
        .await
        .unwrap();
    let second = client
        .create_inventory(&lot("steel", 2500.0, "shredded"))
        .await
        .unwrap();

    assert_eq!(second.id, first.id + 1);
}

#[tokio::test]
async fn test_inventory_empty_condition_rejected() {
    let client = create_test_client().await.expect("Failed to create client");
    let before = client.list_inventory().await.unwrap().len();

    let err = client
        .create_inventory(&lot("copper", 10.0, ""))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("condition"));
        }
        other => panic!("Unexpected error: {other}"),
    }

    if fresh_server() {
        let after = client.list_inventory().await.unwrap().len();
        assert_eq!(after, before);
    }
}

#[tokio::test]
async fn test_inventory_listing_idempotent() {
    let client = create_test_client().await.expect("Failed to create client");
    client
        .create_inventory(&lot("zinc", 75.0, "clean"))
        .await
        .unwrap();

    if fresh_server() {
        let first = client.list_inventory().await.unwrap();
        let second = client.list_inventory().await.unwrap();
        assert_eq!(first, second);
    }
}
