//! Traits for key-management provider clients

use async_trait::async_trait;
use keywarden_types::{KeyMetadata, RotationStatus};

use crate::error::Result;

/// Trait for key-management provider clients
#[async_trait]
pub trait KmsKeyClient: Send + Sync {
    /// List the identifiers of every key in the account.
    /// Implementations iterate provider pagination to exhaustion.
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Fetch metadata for a single key
    async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata>;

    /// Fetch the rotation status for a single key.
    /// May fail independently per key; callers decide how to degrade.
    async fn get_rotation_status(&self, key_id: &str) -> Result<RotationStatus>;

    /// Get the client type name
    fn client_type(&self) -> &str;
}
