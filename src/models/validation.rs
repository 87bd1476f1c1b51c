// ============================================================================
// VALIDATION - Chequeos de formulario antes de cualquier request
// ============================================================================
// Las reglas replican las restricciones del backend para que un formulario
// inválido nunca llegue a la red.
// ============================================================================

use crate::services::error::ClientError;
use crate::utils::constants::MIN_PASSWORD_LENGTH;

pub trait Validate {
    fn validate(&self) -> Result<(), ClientError>;
}

pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ClientError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ClientError::validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(ClientError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn require_email(value: &str) -> Result<(), ClientError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ClientError::validation("Please enter a valid email address"))
    }
}

pub fn require_password_length(password: &str) -> Result<(), ClientError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ClientError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn require_matching_passwords(password: &str, confirm: &str) -> Result<(), ClientError> {
    if password != confirm {
        return Err(ClientError::validation("Passwords do not match"));
    }
    Ok(())
}

/// Regla de cuentas nuevas: longitud mínima, al menos una letra y un número
pub fn require_strong_password(password: &str) -> Result<(), ClientError> {
    require_password_length(password)?;
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ClientError::validation("Password must contain at least one letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ClientError::validation("Password must contain at least one number"));
    }
    Ok(())
}

pub fn require_range(field: &str, value: i64, min: i64, max: Option<i64>) -> Result<(), ClientError> {
    if value < min || max.map_or(false, |max| value > max) {
        let message = match max {
            Some(max) => format!("{} must be between {} and {}", field, min, max),
            None => format!("{} must be {} or later", field, min),
        };
        return Err(ClientError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), ClientError>) -> String {
        result.unwrap_err().user_message("")
    }

    #[test]
    fn length_is_counted_on_trimmed_chars() {
        assert!(require_length("Name", "  Al  ", 2, 100).is_ok());
        assert_eq!(message(require_length("Name", " A ", 2, 100)), "Name must be at least 2 characters");
        assert_eq!(message(require_length("Code", "ABCDEF", 2, 5)), "Code must be at most 5 characters");
    }

    #[test]
    fn email_shape() {
        assert!(require_email("user@example.com").is_ok());
        for bad in ["", "user", "@example.com", "user@example", "user@.com", "a b@example.com", "a@b@c.com"] {
            assert!(require_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn password_rules() {
        assert_eq!(message(require_password_length("short1")), "Password must be at least 8 characters");
        assert!(require_password_length("validpass123").is_ok());
        assert_eq!(message(require_matching_passwords("abc123", "abc124")), "Passwords do not match");
        assert_eq!(
            message(require_strong_password("onlyletters")),
            "Password must contain at least one number"
        );
        assert_eq!(
            message(require_strong_password("1234567890")),
            "Password must contain at least one letter"
        );
        assert!(require_strong_password("letters123").is_ok());
    }

    #[test]
    fn ranges() {
        assert!(require_range("Semester", 1, 1, Some(10)).is_ok());
        assert_eq!(message(require_range("Semester", 11, 1, Some(10))), "Semester must be between 1 and 10");
        assert_eq!(message(require_range("Batch year", 2019, 2020, None)), "Batch year must be 2020 or later");
    }
}
