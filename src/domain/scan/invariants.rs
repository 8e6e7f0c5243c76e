use super::entity::RawCode;
use crate::domain::{DomainError, DomainResult};

/// Validates all RawCode invariants
pub fn validate_raw_code(raw_code: &RawCode) -> DomainResult<()> {
    validate_value(raw_code)?;
    validate_symbology(raw_code)?;
    Ok(())
}

/// Scanned value must be non-empty (the camera never reports empty codes,
/// but the gate must not let one start a cycle)
fn validate_value(raw_code: &RawCode) -> DomainResult<()> {
    if raw_code.value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Scanned code value cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Symbology name must be present so presentation can label the code
fn validate_symbology(raw_code: &RawCode) -> DomainResult<()> {
    if raw_code.symbology.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Scanned code symbology cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scan::{Detection, RawCode};

    #[test]
    fn test_valid_raw_code() {
        let raw = RawCode::from_detection(&Detection::new("LOT-42", "code-128"));
        assert!(validate_raw_code(&raw).is_ok());
    }

    #[test]
    fn test_empty_value_fails() {
        let raw = RawCode::from_detection(&Detection::new("   ", "qr"));
        assert!(validate_raw_code(&raw).is_err());
    }

    #[test]
    fn test_empty_symbology_fails() {
        let raw = RawCode::from_detection(&Detection::new("Q1", ""));
        assert!(validate_raw_code(&raw).is_err());
    }
}
