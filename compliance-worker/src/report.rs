//! CSV report generation
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


use keywarden_types::{ComplianceRecord, NOT_APPLICABLE};
use std::fs;
use std::path::Path;

/// Column header row, in report column order
pub const CSV_HEADER: &str = "KeyId,KeyState,KeyManager,RotationEnabled,KeyCreationDate,KeyAge,NextRotationDate,RotationPeriodInDays,ComplianceStatus";

/// Render the full CSV document for a set of compliance records
pub fn csv_content(records: &[ComplianceRecord]) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for record in records {
        csv.push_str(&csv_row(record));
        csv.push('\n');
    }

    csv
}

/// Write the report file, replacing any previous report at `path`
pub fn write_report(path: &Path, records: &[ComplianceRecord]) -> std::io::Result<()> {
    fs::write(path, csv_content(records))
}

fn csv_row(record: &ComplianceRecord) -> String {
    let next_rotation = record
        .next_rotation_date
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());

    let rotation_period = record
        .rotation_period_days
        .map(|d| d.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());

    format!(
        "{},{},{},{},{},{},{},{},{}",
        record.key_id,
        record.key_state,
        record.key_manager,
        record.rotation_enabled,
        record.key_creation_date.to_rfc3339(),
        record.key_age_days,
        next_rotation,
        rotation_period,
        record.compliance_status,
    )
}
