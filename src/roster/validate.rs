//! # Validation Engine
//!
//! Form validation for the add/edit employee form. Rules run in a fixed
//! order per field — required, then minimum length, then maximum length,
//! then pattern — and the first failing rule produces that field's message.
//! Whole-form validation runs every field and returns the complete error
//! map, not just the first failure.
//!
//! Independent of the store and session; the view layer feeds it raw string
//! input and renders whatever comes back.

use crate::error::RosterError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("Valid regex pattern"));

// local@domain.tld shape: no whitespace, one @, a dot after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid regex pattern"));

/// The closed set of validated form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Department,
        Self::Role,
    ];

    /// Human-readable name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Role => "Role",
        }
    }

    fn rules(self) -> FieldRules {
        match self {
            Self::FirstName | Self::LastName => FieldRules {
                min_length: Some(2),
                max_length: Some(50),
                pattern: Some(Pattern::Name),
            },
            Self::Email => FieldRules {
                min_length: None,
                max_length: None,
                pattern: Some(Pattern::Email),
            },
            Self::Department | Self::Role => FieldRules {
                min_length: None,
                max_length: None,
                pattern: None,
            },
        }
    }
}

impl fmt::Display for FormField {
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

impl FromStr for FormField {
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

enum Pattern {
    Name,
    Email,
}

struct FieldRules {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Pattern>,
}

/// Raw form input: the five fields as the user typed them. Every field is
/// required, so there are no options here.
#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl EmployeeForm {
    fn value_of(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Department => &self.department,
            FormField::Role => &self.role,
        }
    }
}

/// Outcome of whole-form validation. `errors` maps each failing field to
/// its message; a field absent from the map passed all its rules.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: BTreeMap<FormField, String>,
}

/// Validate a single field value. Returns the first failing rule's message,
/// or `None` when the value passes.
pub fn validate_field(field: FormField, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{} is required", field.display_name()));
    }

    let rules = field.rules();
    if let Some(min) = rules.min_length {
        if trimmed.chars().count() < min {
            return Some(format!(
                "{} must be at least {} characters",
                field.display_name(),
                min
            ));
        }
    }
    if let Some(max) = rules.max_length {
        if trimmed.chars().count() > max {
            return Some(format!(
                "{} must be no more than {} characters",
                field.display_name(),
                max
            ));
        }
    }
    if let Some(pattern) = rules.pattern {
        let ok = match pattern {
            Pattern::Name => NAME_PATTERN.is_match(trimmed),
            Pattern::Email => EMAIL_PATTERN.is_match(trimmed),
        };
        if !ok {
            let message = match pattern {
                Pattern::Name => {
                    format!("{} can only contain letters and spaces", field.display_name())
                }
                Pattern::Email => "Please enter a valid email address".to_string(),
            };
            return Some(message);
        }
    }

    None
}

/// Validate every field and collect the full error map.
pub fn validate_form(form: &EmployeeForm) -> ValidationReport {
    let mut errors = BTreeMap::new();
    for field in FormField::ALL {
        if let Some(message) = validate_field(field, form.value_of(field)) {
            errors.insert(field, message);
        }
    }
    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
