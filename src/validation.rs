use crate::error::{AppError, Result};

/// Builds the validation error for a required-field check, naming every
/// missing field rather than the first one encountered.
pub fn missing_error(checks: &[(&str, bool)]) -> AppError {
    let missing: Vec<&str> = checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    AppError::Validation(format!("Missing required fields: {}", missing.join(", ")))
}

/// Checks a declarative `(field, present)` list and fails if any field is absent.
pub fn require_fields(checks: &[(&str, bool)]) -> Result<()> {
    if checks.iter().all(|(_, present)| *present) {
        Ok(())
    } else {
        Err(missing_error(checks))
    }
}
