//! Key metadata and rotation fact definitions
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
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered text for a rotation period or date that does not apply
pub const NOT_APPLICABLE: &str = "N/A";

/// Who controls a key's rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyManager {
    /// Rotation is fully controlled by the platform provider
    Service,
    /// Rotation is configured and owned by the account holder
    Customer,
}

impl KeyManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyManager::Service => "SERVICE",
            KeyManager::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for KeyManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-sourced metadata for a single key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyMetadata {
    /// Key identifier
    pub key_id: String,
    /// Current lifecycle state, as reported by the provider
    pub key_state: String,
    /// Who controls this key's rotation
    pub key_manager: KeyManager,
    /// When the key material was created
    pub creation_date: DateTime<Utc>,
}

/// Raw rotation answer from the provider for a single key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationStatus {
    pub rotation_enabled: bool,
    pub rotation_period_days: Option<u32>,
    pub next_rotation_date: Option<DateTime<Utc>>,
}

/// Normalized rotation facts for a single key
///
/// Invariant: when `rotation_enabled` is false, `rotation_period_days` and
/// `next_rotation_date` are both `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationFacts {
    pub rotation_enabled: bool,
    pub rotation_period_days: Option<u32>,
    pub next_rotation_date: Option<DateTime<Utc>>,
}

impl RotationFacts {
    /// Facts for a key that is not rotating (rotation disabled, or the
    /// rotation status could not be fetched)
    pub fn not_rotating() -> Self {
        Self {
            rotation_enabled: false,
            rotation_period_days: None,
            next_rotation_date: None,
        }
    }

    /// Normalize a provider rotation answer
    ///
    /// Any period or next-rotation value the provider reports for a
    /// non-rotating key is dropped.
    pub fn from_status(status: RotationStatus) -> Self {
        if status.rotation_enabled {
            Self {
                rotation_enabled: true,
                rotation_period_days: status.rotation_period_days,
                next_rotation_date: status.next_rotation_date,
            }
        } else {
            Self::not_rotating()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_carries_rotation_details() {
        let facts = RotationFacts::from_status(RotationStatus {
            rotation_enabled: true,
            rotation_period_days: Some(180),
            next_rotation_date: Some(Utc::now()),
        });

        assert!(facts.rotation_enabled);
        assert_eq!(facts.rotation_period_days, Some(180));
        assert!(facts.next_rotation_date.is_some());
    }

    #[test]
    fn test_from_status_drops_residual_details_when_disabled() {
        let facts = RotationFacts::from_status(RotationStatus {
            rotation_enabled: false,
            rotation_period_days: Some(180),
            next_rotation_date: Some(Utc::now()),
        });

        assert!(!facts.rotation_enabled);
        assert_eq!(facts.rotation_period_days, None);
        assert_eq!(facts.next_rotation_date, None);
    }

    #[test]
    fn test_key_manager_display() {
        assert_eq!(KeyManager::Service.to_string(), "SERVICE");
        assert_eq!(KeyManager::Customer.to_string(), "CUSTOMER");
    }
}
