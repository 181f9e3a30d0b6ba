use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One directory record. The `id` is assigned by the store and never changes
/// afterwards; all other fields are free text supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating a record: every field except the id, which the store
/// allocates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: u32) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            role: self.role,
        }
    }
}

/// Partial update for an existing record. `None` fields are left untouched;
/// the id itself can never be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

impl EmployeeUpdate {
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(v) = &self.first_name {
            employee.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            employee.last_name = v.clone();
        }
        if let Some(v) = &self.email {
            employee.email = v.clone();
        }
        if let Some(v) = &self.department {
            employee.department = v.clone();
        }
        if let Some(v) = &self.role {
            employee.role = v.clone();
        }
    }
}

/// The closed set of fields a listing can be sorted by. Unknown names coming
/// in from the view layer are rejected at parse time rather than silently
/// producing an unsorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl SortField {
    pub fn key_of(self, employee: &Employee) -> &str {
        match self {
            Self::FirstName => &employee.first_name,
            Self::LastName => &employee.last_name,
            Self::Email => &employee.email,
            Self::Department => &employee.department,
            Self::Role => &employee.role,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Email => "email",
            Self::Department => "department",
            Self::Role => "role",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-name" | "firstName" => Ok(Self::FirstName),
            "last-name" | "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "department" => Ok(Self::Department),
            "role" => Ok(Self::Role),
            other => Err(RosterError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
