//! Mock KMS Client Unit Tests

use chrono::Utc;
use kms_client::error::KmsClientError;
use kms_client::mock::MockKmsClient;
use kms_client::traits::KmsKeyClient;
use keywarden_types::{KeyManager, KeyMetadata, RotationStatus};
use uuid::Uuid;

fn customer_key(key_id: &str) -> KeyMetadata {
    KeyMetadata {
        key_id: key_id.to_string(),
        key_state: "Enabled".to_string(),
        key_manager: KeyManager::Customer,
        creation_date: Utc::now(),
    }
}

fn rotating(period_days: u32) -> RotationStatus {
    RotationStatus {
        rotation_enabled: true,
        rotation_period_days: Some(period_days),
        next_rotation_date: Some(Utc::now()),
    }
}

#[tokio::test]
async fn test_list_keys_preserves_insertion_order() {
    let ids: Vec<String> = (0..4).map(|_| Uuid::new_v4().to_string()).collect();

    let mut client = MockKmsClient::new();
    for id in &ids {
        client = client.with_key(customer_key(id), Ok(rotating(90)));
    }

    let listed = client.list_keys().await.unwrap();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_describe_key_returns_metadata() {
    let client = MockKmsClient::new().with_key(customer_key("key-1"), Ok(rotating(90)));

    let metadata = client.describe_key("key-1").await.unwrap();
    assert_eq!(metadata.key_id, "key-1");
    assert_eq!(metadata.key_manager, KeyManager::Customer);
}

#[tokio::test]
async fn test_describe_unknown_key_fails() {
    let client = MockKmsClient::new();

    let result = client.describe_key("missing").await;
    assert!(matches!(result, Err(KmsClientError::DescribeKey { .. })));
}

#[tokio::test]
async fn test_rotation_denial_surfaces_as_error() {
    let client = MockKmsClient::new().with_key(
        customer_key("denied-key"),
        Err("AccessDeniedException".to_string()),
    );

    let result = client.get_rotation_status("denied-key").await;
    match result {
        Err(KmsClientError::RotationStatus { key_id, message }) => {
            assert_eq!(key_id, "denied-key");
            assert_eq!(message, "AccessDeniedException");
        }
        other => panic!("Expected rotation status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_failure_flag() {
    let client = MockKmsClient::new().with_list_failure();

    let result = client.list_keys().await;
    assert!(matches!(result, Err(KmsClientError::ListKeys(_))));
}

#[tokio::test]
async fn test_describe_failure_flag() {
    let client = MockKmsClient::new()
        .with_key(customer_key("key-1"), Ok(rotating(30)))
        .with_describe_failure("key-1");

    // Listing still works, only describe fails
    assert_eq!(client.list_keys().await.unwrap(), vec!["key-1"]);
    assert!(client.describe_key("key-1").await.is_err());
}
