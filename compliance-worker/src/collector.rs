//! Per-key fact collection
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


use kms_client::traits::KmsKeyClient;
use keywarden_types::{KeyMetadata, RotationFacts};
use std::sync::Arc;
use tracing::warn;

/// Collects provider facts for one key per call
///
/// Metadata lookup failures propagate to the caller and abort the run.
/// Rotation-status lookups may fail independently per key (the provider
/// denies them for some key types); those keys are reported as
/// non-rotating and the audit continues.
pub struct KeyFactCollector {
    client: Arc<dyn KmsKeyClient>,
}

impl KeyFactCollector {
    /// Create a collector backed by the given provider client
    pub fn new(client: Arc<dyn KmsKeyClient>) -> Self {
        Self { client }
    }

    /// Collect metadata and normalized rotation facts for `key_id`
    pub async fn collect(&self, key_id: &str) -> anyhow::Result<(KeyMetadata, RotationFacts)> {
        let metadata = self.client.describe_key(key_id).await?;

        let facts = match self.client.get_rotation_status(key_id).await {
            Ok(status) => RotationFacts::from_status(status),
            Err(e) => {
                warn!(
                    key_id = %key_id,
                    error = %e,
                    "Failed to get rotation status, reporting key as non-rotating"
                );
                RotationFacts::not_rotating()
            }
        };

        Ok((metadata, facts))
    }
}
