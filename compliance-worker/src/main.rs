//! Compliance Worker
//!
//! Audits rotation compliance for every key in the account and writes a
//! CSV report. One run, one report file; a fatal provider error aborts
//! the run before any report is written.

use anyhow::Result;
use compliance_worker::report;
use compliance_worker::worker::ComplianceWorker;
use keywarden_config::AuditConfig;
use keywarden_logging::init_logging;
use kms_client::aws::AwsKmsClient;
use kms_client::traits::KmsKeyClient;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AuditConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging("compliance-worker", config.log_level(), config.log_json);

    info!(
        report_path = config.report_output_path(),
        "Starting Compliance Worker"
    );

    // Build the provider client
    let client: Arc<dyn KmsKeyClient> = Arc::new(AwsKmsClient::new().await);

    info!(client_type = client.client_type(), "Provider client ready");

    // Run the audit
    let worker = ComplianceWorker::new(client);
    let records = worker.run().await?;

    // Write the report
    let path = Path::new(config.report_output_path());
    report::write_report(path, &records)
        .map_err(|e| anyhow::anyhow!("Failed to write report {}: {}", path.display(), e))?;

    info!(
        report_path = %path.display(),
        record_count = records.len(),
        "KMS key compliance report generated"
    );

    Ok(())
}
