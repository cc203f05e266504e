//! Field Validation
//!
//! Pre-submit checks shared by the settings, profile and password forms.
//! Violations abort the submission locally; nothing reaches the network.

/// Loose email shape check: something before `@`, and a dot somewhere in
/// a non-empty domain
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
        && !domain.contains(char::is_whitespace)
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Keystroke filter for the numeric-only contact field: a value holding
/// anything but digits is rejected wholesale (the input keeps its old
/// text), matching a digits-or-nothing input mask
pub fn accepts_numeric_input(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// New-password rules: minimum length and matching confirmation
pub fn validate_password_change(new_password: &str, confirm_password: &str) -> Result<(), String> {
    if new_password.is_empty() {
        return Err("New password is required".to_string());
    }
    if new_password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    if confirm_password.is_empty() {
        return Err("Please confirm your password".to_string());
    }
    if new_password != confirm_password {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("a.b@sub.example.co"));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("admin@example"));
        assert!(!is_valid_email("admin@.com"));
        assert!(!is_valid_email("ad min@example.com"));
    }

    #[test]
    fn test_digit_checks() {
        assert!(is_digits("0123456789"));
        assert!(!is_digits(""));
        assert!(!is_digits("12a4"));

        // the input mask accepts an empty value (clearing the field)
        assert!(accepts_numeric_input(""));
        assert!(accepts_numeric_input("042"));
        assert!(!accepts_numeric_input("+42"));
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password_change("secret1", "secret1").is_ok());
        assert!(validate_password_change("", "").is_err());
        assert!(validate_password_change("short", "short").is_err());
        assert!(validate_password_change("secret1", "").is_err());
        assert!(validate_password_change("secret1", "secret2").is_err());
    }
}
