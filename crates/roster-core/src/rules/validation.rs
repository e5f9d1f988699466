use crate::errors::{Result, RosterError};

/// Reject empty or whitespace-only text for a required field
///
/// # Errors
/// * `EmptyField` - If `value` has no non-whitespace characters
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Parse salary input typed at the prompt
///
/// Surrounding whitespace is ignored. Accepts anything `f64` parses that is
/// finite and not negative.
///
/// # Errors
/// * `InvalidSalary` - If the input is empty, not a number, infinite, NaN or negative
pub fn parse_salary(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let invalid = || RosterError::InvalidSalary {
        input: input.to_string(),
    };

    let salary: f64 = trimmed.parse().map_err(|_| invalid())?;
    validate_salary(salary).map_err(|_| invalid())?;
    Ok(salary)
}

/// Check a salary value that did not come through the prompt
///
/// # Errors
/// * `InvalidSalary` - If the value is NaN, infinite or negative
pub fn validate_salary(salary: f64) -> Result<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RosterError::InvalidSalary {
            input: salary.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_accepts_text() {
        assert!(validate_required("Department name", "Engineering").is_ok());
    }

    #[test]
    fn test_required_rejects_empty_and_blank() {
        for value in ["", "   ", "\t"] {
            let err = validate_required("First name", value).unwrap_err();
            assert_eq!(
                err,
                RosterError::EmptyField {
                    field: "First name".to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_salary_accepts_numbers() {
        assert_eq!(parse_salary("80000").unwrap(), 80000.0);
        assert_eq!(parse_salary(" 1234.50 ").unwrap(), 1234.5);
        assert_eq!(parse_salary("1e3").unwrap(), 1000.0);
        assert_eq!(parse_salary("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_salary_rejects_non_numeric() {
        for input in ["", "abc", "12k", "NaN", "inf", "-5"] {
            assert!(
                matches!(parse_salary(input), Err(RosterError::InvalidSalary { .. })),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_validate_salary_rejects_non_finite() {
        assert!(validate_salary(f64::NAN).is_err());
        assert!(validate_salary(f64::INFINITY).is_err());
        assert!(validate_salary(-0.01).is_err());
        assert!(validate_salary(55000.0).is_ok());
    }
}
