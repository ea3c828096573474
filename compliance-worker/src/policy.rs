//! Rotation compliance policy
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


use chrono::{DateTime, Utc};
use keywarden_types::{ComplianceStatus, KeyManager, MAX_ROTATION_PERIOD_DAYS};

/// Age of a key in whole days at `now`
///
/// Truncates toward zero; a creation date after `now` yields a negative age.
pub fn key_age_days(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created).num_days()
}

/// Evaluate rotation compliance for a single key
///
/// - service-managed keys are exempt regardless of rotation state
/// - customer-managed keys must have rotation enabled
/// - the rotation period must be at most [`MAX_ROTATION_PERIOD_DAYS`]
///
/// First match wins. An enabled key whose period never resolved falls
/// through to the period verdict with the `N/A` sentinel interpolated.
pub fn evaluate(
    key_manager: KeyManager,
    rotation_enabled: bool,
    rotation_period_days: Option<u32>,
) -> ComplianceStatus {
    match key_manager {
        KeyManager::Service => return ComplianceStatus::ServiceManaged,
        KeyManager::Customer => {}
    }

    if !rotation_enabled {
        return ComplianceStatus::RotationDisabled;
    }

    match rotation_period_days {
        Some(days) if days <= MAX_ROTATION_PERIOD_DAYS => ComplianceStatus::Pass,
        other => ComplianceStatus::PeriodTooLong(other),
    }
}
