//! Truck model
//!
//! This module contains the Truck row struct and its status enum,
//! mapped to the `trucks` table and the `truck_status` PostgreSQL enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::AppError;

/// Truck status - maps to the ENUM truck_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "truck_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruckStatus {
    Active,
    InMaintenance,
    Retired,
}

impl TruckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Active => "ACTIVE",
            TruckStatus::InMaintenance => "IN_MAINTENANCE",
            TruckStatus::Retired => "RETIRED",
        }
    }
}

impl FromStr for TruckStatus {
    type Err = AppError;

    // Wire input is case-insensitive; the stored value is always one of the
    // three upper-case variants.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_uppercase().as_str() {
            "ACTIVE" => Ok(TruckStatus::Active),
            "IN_MAINTENANCE" => Ok(TruckStatus::InMaintenance),
            "RETIRED" => Ok(TruckStatus::Retired),
            _ => Err(AppError::InvalidStatus(raw.to_string())),
        }
    }
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Truck - maps exactly to the trucks table
#[derive(Debug, Clone, FromRow)]
pub struct Truck {
    pub id: i64,
    pub model: String,
    pub status: TruckStatus,
    pub details: String,
}

/// A truck that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewTruck {
    pub model: String,
    pub status: TruckStatus,
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!("active".parse::<TruckStatus>().unwrap(), TruckStatus::Active);
        assert_eq!("Active".parse::<TruckStatus>().unwrap(), TruckStatus::Active);
        assert_eq!("ACTIVE".parse::<TruckStatus>().unwrap(), TruckStatus::Active);
        assert_eq!(
            "in_maintenance".parse::<TruckStatus>().unwrap(),
            TruckStatus::InMaintenance
        );
        assert_eq!(
            "In_Maintenance".parse::<TruckStatus>().unwrap(),
            TruckStatus::InMaintenance
        );
        assert_eq!("retired".parse::<TruckStatus>().unwrap(), TruckStatus::Retired);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = "bogus".parse::<TruckStatus>().unwrap_err();
        match err {
            AppError::InvalidStatus(raw) => assert_eq!(raw, "bogus"),
            other => panic!("expected InvalidStatus, got {:?}", other),
        }

        assert!("".parse::<TruckStatus>().is_err());
        assert!("ACTIVE ".parse::<TruckStatus>().is_err());
    }

    #[test]
    fn test_status_renders_upper_case() {
        assert_eq!(TruckStatus::Active.as_str(), "ACTIVE");
        assert_eq!(TruckStatus::InMaintenance.as_str(), "IN_MAINTENANCE");
        assert_eq!(TruckStatus::Retired.to_string(), "RETIRED");
    }
}
