//! AWS KMS implementation of the key-management client
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
use aws_sdk_kms::primitives::DateTime as SdkDateTime;
use aws_sdk_kms::types::KeyManagerType;
use chrono::{DateTime, Utc};
use keywarden_types::{KeyManager, KeyMetadata, RotationStatus};
use tracing::info;

use crate::error::{KmsClientError, Result};
use crate::traits::KmsKeyClient;

/// AWS KMS key-management client
///
/// Credential and region resolution is delegated to the SDK's default
/// provider chain; no credentials are handled here.
pub struct AwsKmsClient {
    client: aws_sdk_kms::Client,
}

impl AwsKmsClient {
    /// Create a new client from the default credential and region chain
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = aws_sdk_kms::Client::new(&config);

        info!(
            region = config.region().map(|r| r.as_ref()).unwrap_or("default"),
            "AWS KMS client initialized"
        );

        Self { client }
    }
}

/// Convert an SDK timestamp to a UTC instant
fn to_utc(timestamp: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

#[async_trait]
impl KmsKeyClient for AwsKmsClient {
    async fn list_keys(&self) -> Result<Vec<String>> {
        let mut key_ids = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let mut request = self.client.list_keys();
            if let Some(m) = &marker {
                request = request.marker(m);
            }

            let response = request
                .send()
                .await
                .map_err(|e| KmsClientError::ListKeys(e.to_string()))?;

            for entry in response.keys() {
                if let Some(key_id) = entry.key_id() {
                    key_ids.push(key_id.to_string());
                }
            }

            match response.next_marker() {
                Some(next) if response.truncated() => {
                    marker = Some(next.to_string());
                }
                _ => break,
            }
        }

        Ok(key_ids)
    }

    async fn describe_key(&self, key_id: &str) -> Result<KeyMetadata> {
        let response = self
            .client
            .describe_key()
            .key_id(key_id)
            .send()
            .await
            .map_err(|e| KmsClientError::DescribeKey {
                key_id: key_id.to_string(),
                message: e.to_string(),
            })?;

        let metadata =
            response
                .key_metadata()
                .ok_or_else(|| KmsClientError::MalformedResponse {
                    key_id: key_id.to_string(),
                    message: "response contained no key metadata".to_string(),
                })?;

        let creation_date = metadata
            .creation_date()
            .and_then(to_utc)
            .ok_or_else(|| KmsClientError::MalformedResponse {
                key_id: key_id.to_string(),
                message: "response contained no creation date".to_string(),
            })?;

        // Anything the provider does not manage itself falls under the
        // customer rotation policy.
        let key_manager = match metadata.key_manager() {
            Some(KeyManagerType::Aws) => KeyManager::Service,
            _ => KeyManager::Customer,
        };

        let key_state = metadata
            .key_state()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());

        Ok(KeyMetadata {
            key_id: metadata.key_id().to_string(),
            key_state,
            key_manager,
            creation_date,
        })
    }

    async fn get_rotation_status(&self, key_id: &str) -> Result<RotationStatus> {
        let response = self
            .client
            .get_key_rotation_status()
            .key_id(key_id)
            .send()
            .await
            .map_err(|e| KmsClientError::RotationStatus {
                key_id: key_id.to_string(),
                message: e.to_string(),
            })?;

        Ok(RotationStatus {
            rotation_enabled: response.key_rotation_enabled(),
            rotation_period_days: response
                .rotation_period_in_days()
                .and_then(|d| u32::try_from(d).ok()),
            next_rotation_date: response.next_rotation_date().and_then(to_utc),
        })
    }

    fn client_type(&self) -> &str {
        "aws-kms"
    }
}
