//! In-memory key-management client for tests
// Copyright 2025 Francisco F. Pinochet
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use async_trait::async_trait;
use keywarden_types::{KeyMetadata, RotationStatus};

use crate::error::{KmsClientError, Result};
use crate::traits::KmsKeyClient;

/// A key registered with the mock client
#[derive(Debug, Clone)]
struct MockKey {
    metadata: KeyMetadata,
    /// The rotation answer the provider would give for this key;
    /// `Err` simulates a per-key denial (e.g. missing permission)
    rotation: std::result::Result<RotationStatus, String>,
}

/// Mock key-management client backed by an in-memory key list
///
/// Keys are listed in insertion order. List and describe calls can be
/// flagged to fail for exercising the fatal paths.
#[derive(Debug, Default)]
pub struct MockKmsClient {
    keys: Vec<MockKey>,
    fail_list: bool,
    fail_describe: Vec<String>,
}

impl MockKmsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a key with the rotation answer the provider would return
    pub fn with_key(
        mut self,
        metadata: KeyMetadata,
        rotation: std::result::Result<RotationStatus, String>,
    ) -> Self {
        self.keys.push(MockKey { metadata, rotation });
        self
    }

    /// Make `list_keys` fail
    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `describe_key` fail for the given key
    pub fn with_describe_failure(mut self, key_id: impl Into<String>) -> Self {
        self.fail_describe.push(key_id.into());
        self
    }

    fn find(&self, key_id: &str) -> Option<&MockKey> {
        self.keys.iter().find(|k| k.metadata.key_id == key_id)
    }
}

#[async_trait]
impl KmsKeyClient for MockKmsClient {
    async fn list_keys(&self) -> Result<Vec<String>> {
        if self.fail_list {
            return Err(KmsClientError::ListKeys(
                "simulated list failure".to_string(),
            ));
        }

        Ok(self
            .keys
            .iter()
            .map(|k| k.metadata.key_id.clone())
            .collect())
    }

    async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata> {
        if self.fail_describe.iter().any(|id| id == key_id) {
            return Err(KmsClientError::DescribeKey {
                key_id: key_id.to_string(),
                message: "simulated describe failure".to_string(),
            });
        }

        self.find(key_id)
            .map(|k| k.metadata.clone())
            .ok_or_else(|| KmsClientError::DescribeKey {
                key_id: key_id.to_string(),
                message: "key not found".to_string(),
            })
    }

    async fn get_rotation_status(&self, key_id: &str) -> Result<RotationStatus> {
        let key = self.find(key_id).ok_or_else(|| KmsClientError::RotationStatus {
            key_id: key_id.to_string(),
            message: "key not found".to_string(),
        })?;

        key.rotation
            .clone()
            .map_err(|message| KmsClientError::RotationStatus {
                key_id: key_id.to_string(),
                message,
            })
    }

    fn client_type(&self) -> &str {
        "mock"
    }
}
