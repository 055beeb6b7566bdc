//! Sign-in form model and client-side validation.

/// What the user typed into the sign-in form.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Field-level validation messages. Both fields are checked in one pass so
/// the form can show every problem at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl Credentials {
    pub fn validate(&self) -> CredentialErrors {
        let email = if self.email.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(&self.email) {
            Some("Please enter a valid email")
        } else {
            None
        };

        let password = if self.password.is_empty() {
            Some("Password is required")
        } else {
            None
        };

        CredentialErrors { email, password }
    }
}

/// Accepts `local@domain.tld` where no part contains whitespace or a second
/// `@`, and the domain has a non-empty label on each side of its last dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials {
            email: "aryan@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(creds.validate().is_empty());
    }

    #[test]
    fn test_both_fields_empty_reports_both() {
        let errors = Credentials::default().validate();
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
    }

    #[test]
    fn test_malformed_email() {
        for email in [
            "no-at-sign",
            "two@@signs.com",
            "@missing-local.com",
            "spaces in@mail.com",
            "no-dot@domain",
            "trailing-dot@domain.",
            "dot-first@.com",
        ] {
            let creds = Credentials {
                email: email.to_string(),
                password: "x".to_string(),
            };
            assert_eq!(
                creds.validate().email,
                Some("Please enter a valid email"),
                "expected '{}' to be rejected",
                email
            );
        }
    }

    #[test]
    fn test_subdomains_accepted() {
        let creds = Credentials {
            email: "dev@mail.internal.example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(creds.validate().is_empty());
    }
}
