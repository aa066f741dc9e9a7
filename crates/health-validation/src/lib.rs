//! Health Records Validation
//!
//! Pure validation functions shared by the records store and the HTTP
//! service. Nothing in here performs I/O.
//!
//! - Patient identifier format (`PT-IND-` followed by 8 ASCII digits)
//! - Date of birth (`YYYY-MM-DD`, real calendar date)
//! - Required text fields and e-mail addresses

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed prefix of every patient identifier
pub const PATIENT_ID_PREFIX: &str = "PT-IND-";

/// Number of decimal digits following the prefix
pub const PATIENT_ID_DIGITS: usize = 8;

/// Human-readable template shown to clients that send a malformed ID
pub const PATIENT_ID_TEMPLATE: &str = "PT-IND-XXXXXXXX";

/// Validation error with detailed context
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: ValidationErrorCode,
}

/// Specific validation error codes for programmatic handling
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValidationErrorCode {
    Required,
    InvalidFormat,
    OutOfRange,
    TooLong,
    TooShort,
    InvalidCharacters,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({:?})", self.field, self.message, self.code)
    }
}

impl std::error::Error for ValidationError {}

/// Validation result that can accumulate multiple errors
#[derive(Clone, Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, field: &str, message: &str, code: ValidationErrorCode) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
            code,
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any accumulated error carries `code`
    pub fn has_code(&self, code: ValidationErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Collapse into a `Result`, joining every message on failure
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(format!("Validation failed: {}", messages.join("; ")))
        }
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// Check a patient identifier against `^PT-IND-\d{8}$`.
///
/// Digits are ASCII only and no normalization is applied, so
/// `" PT-IND-12345678"` and `"pt-ind-12345678"` are both rejected.
pub fn is_valid_patient_id(id: &str) -> bool {
    match id.strip_prefix(PATIENT_ID_PREFIX) {
        Some(digits) => {
            digits.len() == PATIENT_ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Validate a patient identifier, reporting why it was rejected.
///
/// Accepts exactly the strings [`is_valid_patient_id`] accepts.
pub fn validate_patient_id(id: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if id.is_empty() {
        result.add_error("patientId", "Patient ID is required", ValidationErrorCode::Required);
        return result;
    }

    let Some(digits) = id.strip_prefix(PATIENT_ID_PREFIX) else {
        result.add_error(
            "patientId",
            &format!("Patient ID must start with '{}'", PATIENT_ID_PREFIX),
            ValidationErrorCode::InvalidFormat,
        );
        return result;
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        result.add_error(
            "patientId",
            "Patient ID suffix can only contain digits 0-9",
            ValidationErrorCode::InvalidCharacters,
        );
    }

    let count = digits.chars().count();
    if count < PATIENT_ID_DIGITS {
        result.add_error(
            "patientId",
            &format!("Patient ID needs {} digits after the prefix", PATIENT_ID_DIGITS),
            ValidationErrorCode::TooShort,
        );
    } else if count > PATIENT_ID_DIGITS {
        result.add_error(
            "patientId",
            &format!("Patient ID cannot exceed {} digits after the prefix", PATIENT_ID_DIGITS),
            ValidationErrorCode::TooLong,
        );
    }

    result
}

/// Validate a date of birth in `YYYY-MM-DD` form
pub fn validate_date_of_birth(date: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if date.is_empty() {
        result.add_error("dateOfBirth", "Date of birth is required", ValidationErrorCode::Required);
        return result;
    }

    if !is_valid_date_format(date) {
        result.add_error(
            "dateOfBirth",
            "Date of birth must be in YYYY-MM-DD format",
            ValidationErrorCode::InvalidFormat,
        );
        return result;
    }

    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        result.add_error(
            "dateOfBirth",
            "Date of birth is not a calendar date",
            ValidationErrorCode::OutOfRange,
        );
    }

    result
}

/// Validate that a text field is present and not just whitespace
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if value.trim().is_empty() {
        result.add_error(
            field_name,
            &format!("{} is required", field_name),
            ValidationErrorCode::Required,
        );
    }

    result
}

/// Validate an e-mail address (structural check only)
pub fn validate_email(email: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if email.is_empty() {
        result.add_error("email", "Email is required", ValidationErrorCode::Required);
        return result;
    }

    let parts: Vec<&str> = email.split('@').collect();
    let well_formed = match parts.as_slice() {
        [local, domain] => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    };

    if !well_formed {
        result.add_error(
            "email",
            "Email must have the form local@domain.tld",
            ValidationErrorCode::InvalidFormat,
        );
    }

    if email.chars().any(char::is_whitespace) {
        result.add_error("email", "Email cannot contain whitespace", ValidationErrorCode::InvalidCharacters);
    }

    result
}

fn is_valid_date_format(date: &str) -> bool {
    // Basic YYYY-MM-DD validation
    if date.len() != 10 {
        return false;
    }
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    parts[0].len() == 4
        && parts[1].len() == 2
        && parts[2].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}
