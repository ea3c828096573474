//! Compliance Worker - Audit Pipeline
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


use crate::collector::KeyFactCollector;
use crate::policy::{evaluate, key_age_days};
use chrono::Utc;
use kms_client::traits::KmsKeyClient;
use keywarden_types::ComplianceRecord;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Compliance worker that audits every key in the account
pub struct ComplianceWorker {
    client: Arc<dyn KmsKeyClient>,
    collector: KeyFactCollector,
}

impl ComplianceWorker {
    /// Create a new compliance worker backed by the given provider client
    pub fn new(client: Arc<dyn KmsKeyClient>) -> Self {
        let collector = KeyFactCollector::new(client.clone());
        Self { client, collector }
    }

    /// Run the audit - enumerate all keys and produce one record per key
    ///
    /// Records come back in enumeration order, unfiltered. A failure to
    /// list keys or to describe any single key aborts the run;
    /// rotation-status failures degrade per key inside the collector.
    pub async fn run(&self) -> anyhow::Result<Vec<ComplianceRecord>> {
        let run_id = Uuid::new_v4();

        info!(run_id = %run_id, "Starting key rotation compliance audit");

        let key_ids = self.client.list_keys().await?;

        info!(
            run_id = %run_id,
            key_count = key_ids.len(),
            "Enumerated account keys"
        );

        let mut records = Vec::with_capacity(key_ids.len());

        for key_id in &key_ids {
            let (metadata, facts) = self.collector.collect(key_id).await?;

            let key_age_days = key_age_days(metadata.creation_date, Utc::now());
            let compliance_status = evaluate(
                metadata.key_manager,
                facts.rotation_enabled,
                facts.rotation_period_days,
            );

            records.push(ComplianceRecord {
                key_id: metadata.key_id,
                key_state: metadata.key_state,
                key_manager: metadata.key_manager,
                rotation_enabled: facts.rotation_enabled,
                key_creation_date: metadata.creation_date,
                key_age_days,
                next_rotation_date: facts.next_rotation_date,
                rotation_period_days: facts.rotation_period_days,
                compliance_status,
            });
        }

        let failed = records
            .iter()
            .filter(|r| !r.compliance_status.is_pass())
            .count();

        info!(
            run_id = %run_id,
            record_count = records.len(),
            passed = records.len() - failed,
            failed = failed,
            "Compliance audit complete"
        );

        Ok(records)
    }
}
