//! CSV Report Tests

use chrono::{TimeZone, Utc};
use compliance_worker::report::{csv_content, write_report, CSV_HEADER};
use keywarden_types::{ComplianceRecord, ComplianceStatus, KeyManager};

fn compliant_record() -> ComplianceRecord {
    ComplianceRecord {
        key_id: "1234abcd".to_string(),
        key_state: "Enabled".to_string(),
        key_manager: KeyManager::Customer,
        rotation_enabled: true,
        key_creation_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        key_age_days: 120,
        next_rotation_date: Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap()),
        rotation_period_days: Some(90),
        compliance_status: ComplianceStatus::Pass,
    }
}

fn non_rotating_record() -> ComplianceRecord {
    ComplianceRecord {
        key_id: "5678efgh".to_string(),
        key_state: "Enabled".to_string(),
        key_manager: KeyManager::Customer,
        rotation_enabled: false,
        key_creation_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        key_age_days: 486,
        next_rotation_date: None,
        rotation_period_days: None,
        compliance_status: ComplianceStatus::RotationDisabled,
    }
}

#[test]
fn test_header_row_and_column_order() {
    assert_eq!(
        CSV_HEADER,
        "KeyId,KeyState,KeyManager,RotationEnabled,KeyCreationDate,KeyAge,NextRotationDate,RotationPeriodInDays,ComplianceStatus"
    );

    let content = csv_content(&[]);
    assert_eq!(content, format!("{}\n", CSV_HEADER));
}

#[test]
fn test_row_rendering() {
    let content = csv_content(&[compliant_record()]);
    let row = content.lines().nth(1).unwrap();

    assert_eq!(
        row,
        "1234abcd,Enabled,CUSTOMER,true,2024-01-01T00:00:00+00:00,120,2024-04-01T00:00:00+00:00,90,PASS"
    );
}

#[test]
fn test_not_applicable_sentinels() {
    let content = csv_content(&[non_rotating_record()]);
    let row = content.lines().nth(1).unwrap();

    assert_eq!(
        row,
        "5678efgh,Enabled,CUSTOMER,false,2023-01-01T00:00:00+00:00,486,N/A,N/A,FAIL (rotation disabled)"
    );
}

#[test]
fn test_one_row_per_record() {
    let content = csv_content(&[compliant_record(), non_rotating_record()]);
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_write_report_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    write_report(&path, &[compliant_record(), non_rotating_record()]).unwrap();
    write_report(&path, &[compliant_record()]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.starts_with(CSV_HEADER));
}
