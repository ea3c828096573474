//! Compliance verdict and report record definitions

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::keys::{KeyManager, NOT_APPLICABLE};

/// Longest rotation period, in days, a customer-managed key may use
pub const MAX_ROTATION_PERIOD_DAYS: u32 = 90;

/// Compliance verdict for a single key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceStatus {
    /// Customer-managed key rotating within the policy period
    Pass,
    /// Provider-managed key, exempt from the rotation policy
    ServiceManaged,
    /// Customer-managed key with rotation disabled
    RotationDisabled,
    /// Rotation period exceeds the policy limit, or never resolved
    PeriodTooLong(Option<u32>),
}

impl ComplianceStatus {
    /// Whether this verdict is a pass, with or without an exemption reason
    pub fn is_pass(&self) -> bool {
        matches!(
            self,
            ComplianceStatus::Pass | ComplianceStatus::ServiceManaged
        )
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::Pass => write!(f, "PASS"),
            ComplianceStatus::ServiceManaged => write!(f, "PASS (service-managed)"),
            ComplianceStatus::RotationDisabled => write!(f, "FAIL (rotation disabled)"),
            ComplianceStatus::PeriodTooLong(Some(days)) => write!(
                f,
                "FAIL (rotation period {} days > {})",
                days, MAX_ROTATION_PERIOD_DAYS
            ),
            ComplianceStatus::PeriodTooLong(None) => write!(
                f,
                "FAIL (rotation period {} days > {})",
                NOT_APPLICABLE, MAX_ROTATION_PERIOD_DAYS
            ),
        }
    }
}

impl Serialize for ComplianceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One row of the compliance report
///
/// Built once per key per audit run and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceRecord {
    pub key_id: String,
    pub key_state: String,
    pub key_manager: KeyManager,
    pub rotation_enabled: bool,
    pub key_creation_date: DateTime<Utc>,
    pub key_age_days: i64,
    pub next_rotation_date: Option<DateTime<Utc>>,
    pub rotation_period_days: Option<u32>,
    pub compliance_status: ComplianceStatus,
}
