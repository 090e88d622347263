use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portal role. Determines the dashboard, navigation items and page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    Pharma,
}

/// All roles in display order.
pub const ALL_ROLES: &[Role] = &[Role::Patient, Role::Doctor, Role::Pharma];

impl Role {
    /// Lowercase key used in storage and in role-scoped paths (`/dashboard-{key}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Pharma => "pharma",
        }
    }

    /// Parse a stored value. Unknown or missing values fall back to Patient.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Title shown on the role selection cards.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Pharma => "Pharma Owner",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Patient => "Access health records, book appointments, order medicines",
            Role::Doctor => "Manage appointments, patient consultations, medical records",
            Role::Pharma => "Manage inventory, orders, sales analytics, suppliers",
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Exact, case-sensitive match against the stored keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            "pharma" => Ok(Role::Pharma),
            other => Err(AppError::invalid_role(other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
