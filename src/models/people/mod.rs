//! Employee directory and profile models.
//!
//! Records arrive from the employee service in loosely-specified JSON; the
//! normalization rules here turn them into fully-populated values so views
//! never deal with missing fields.

use serde::{Deserialize, Serialize};

/// Shown in place of any field the backend left empty.
pub const FIELD_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "ACTIVE",
            EmployeeStatus::Inactive => "INACTIVE",
        }
    }

    /// Anything other than the exact marker the backend uses counts as
    /// inactive.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "ACTIVE" {
            EmployeeStatus::Active
        } else {
            EmployeeStatus::Inactive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_code: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub classification: String,
    pub status: EmployeeStatus,
}

/// The signed-in user's card shown on the daily-wins page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub initials: String,
    pub name: String,
    pub team: String,
    pub badge: String,
}

impl UserProfile {
    /// First letter of each name word, uppercased, at most two.
    pub fn initials_from_name(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .take(2)
            .collect()
    }
}
