use crate::domains::auth::AuthError;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 128;

pub fn validate_username(username: &str) -> Result<(), AuthError> {
    let len = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(AuthError::Validation(format!(
            "Username must be between {} and {} characters.",
            USERNAME_MIN, USERNAME_MAX
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AuthError::Validation(
            "Username may only contain letters, digits, underscores and hyphens.".to_string(),
        ));
    }
    Ok(())
}

/// Requires an `@` followed somewhere by a `.`.
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let valid = email
        .split_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(AuthError::Validation("Email must be a valid email address.".to_string()))
    }
}

pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let len = password.chars().count();
    if (PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        Ok(())
    } else {
        Err(AuthError::Validation(format!(
            "Password must be between {} and {} characters.",
            PASSWORD_MIN, PASSWORD_MAX
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("user_name-42").is_ok());
        assert!(validate_username(&"a".repeat(50)).is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("émile").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("reader@example.com").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("dot.before@nodot").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password(&"p".repeat(128)).is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
