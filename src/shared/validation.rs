/**
 * Input Validation
 *
 * Each request body type has an explicit list of rules. A rule names the
 * field it guards, the message shown when it fails, and a plain predicate.
 * Validation runs every rule and collects all failures so forms can show
 * them per field.
 *
 * # Rules
 *
 * | Input | Field | Rule |
 * |---|---|---|
 * | login | email | well-formed address |
 * | login | password | not empty |
 * | create user | email | well-formed address |
 * | create user | firstName, lastName | at least 2 characters |
 * | create user | password | at least 6 characters |
 * | update user | same as create, only for fields that are present |
 */

use serde::{Deserialize, Serialize};

use crate::shared::account::{CreateUserRequest, LoginRequest, UpdateUserRequest};

/// Minimum password length for new or changed passwords
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum length of first and last names
pub const MIN_NAME_LEN: usize = 2;

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A validation rule over an input of type `T`
struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: fn(&T) -> bool,
}

fn run<T>(rules: &[Rule<T>], input: &T) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules
        .iter()
        .filter(|rule| !(rule.check)(input))
        .map(|rule| FieldError::new(rule.field, rule.message))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Basic structural email check
///
/// One `@`, a non-empty local part, a dotted domain, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let labels_ok = labels.clone().all(|label| !label.is_empty());
    labels_ok && labels.nth(1).is_some()
}

fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LEN
}

fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

const LOGIN_RULES: &[Rule<LoginRequest>] = &[
    Rule {
        field: "email",
        message: "Email must be a valid address",
        check: |r| is_valid_email(&r.email),
    },
    Rule {
        field: "password",
        message: "Password is required",
        check: |r| !r.password.is_empty(),
    },
];

const CREATE_USER_RULES: &[Rule<CreateUserRequest>] = &[
    Rule {
        field: "email",
        message: "Email must be a valid address",
        check: |r| is_valid_email(&r.email),
    },
    Rule {
        field: "firstName",
        message: "First name must be at least 2 characters",
        check: |r| is_valid_name(&r.first_name),
    },
    Rule {
        field: "lastName",
        message: "Last name must be at least 2 characters",
        check: |r| is_valid_name(&r.last_name),
    },
    Rule {
        field: "password",
        message: "Password must be at least 6 characters",
        check: |r| is_valid_password(&r.password),
    },
];

const UPDATE_USER_RULES: &[Rule<UpdateUserRequest>] = &[
    Rule {
        field: "email",
        message: "Email must be a valid address",
        check: |r| r.email.as_deref().map_or(true, is_valid_email),
    },
    Rule {
        field: "firstName",
        message: "First name must be at least 2 characters",
        check: |r| r.first_name.as_deref().map_or(true, is_valid_name),
    },
    Rule {
        field: "lastName",
        message: "Last name must be at least 2 characters",
        check: |r| r.last_name.as_deref().map_or(true, is_valid_name),
    },
    Rule {
        field: "password",
        message: "Password must be at least 6 characters",
        check: |r| r.password.as_deref().map_or(true, is_valid_password),
    },
];

/// Validate a login request
pub fn validate_login(request: &LoginRequest) -> Result<(), Vec<FieldError>> {
    run(LOGIN_RULES, request)
}

/// Validate a create-user request
pub fn validate_create_user(request: &CreateUserRequest) -> Result<(), Vec<FieldError>> {
    run(CREATE_USER_RULES, request)
}

/// Validate an update-user request
pub fn validate_update_user(request: &UpdateUserRequest) -> Result<(), Vec<FieldError>> {
    run(UPDATE_USER_RULES, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: Vec<FieldError>) -> Vec<String> {
        errors.into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email(" a.b+c@sub.example.org "));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("admin@localhost"));
        assert!(!is_valid_email("admin@@example.com"));
        assert!(!is_valid_email("ad min@example.com"));
        assert!(!is_valid_email("admin@example..com"));
    }

    #[test]
    fn test_login_rules() {
        let ok = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_login(&ok).is_ok());

        let bad = LoginRequest::default();
        assert_eq!(fields(validate_login(&bad).unwrap_err()), vec!["email", "password"]);
    }

    #[test]
    fn test_create_rules_collect_every_failure() {
        let request = CreateUserRequest {
            email: "nope".to_string(),
            first_name: "J".to_string(),
            last_name: "Doe".to_string(),
            password: "12345".to_string(),
            ..Default::default()
        };
        assert_eq!(
            fields(validate_create_user(&request).unwrap_err()),
            vec!["email", "firstName", "password"]
        );
    }

    #[test]
    fn test_create_rules_accept_valid_input() {
        let request = CreateUserRequest {
            email: "jane@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        };
        assert!(validate_create_user(&request).is_ok());
    }

    #[test]
    fn test_update_rules_only_check_present_fields() {
        assert!(validate_update_user(&UpdateUserRequest::default()).is_ok());

        let request = UpdateUserRequest {
            password: Some("short".to_string()),
            ..Default::default()
        };
        assert_eq!(fields(validate_update_user(&request).unwrap_err()), vec!["password"]);
    }
}
