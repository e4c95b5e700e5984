//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::config::{is_valid_role, MIN_PASSWORD_LENGTH, ROLE_ADMIN, ROLE_USER, VALID_ROLES};
use crate::errors::Violation;

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => ROLE_ADMIN.to_string(),
            UserRole::User => ROLE_USER.to_string(),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<UserRole>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Role names as plain strings, for JWT claims and storage
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.to_string()).collect()
    }
}

/// Input for creating a user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Collect every field violation on a user creation input.
pub fn check_new_user(input: &NewUser) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !input.email.validate_email() {
        violations.push(Violation::new("email", "Email is not a valid email address"));
    }
    if (input.password.len() as u64) < MIN_PASSWORD_LENGTH {
        violations.push(Violation::new(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    if !is_valid_role(&input.role) {
        violations.push(Violation::new(
            "role",
            format!("Role must be one of: {}", VALID_ROLES.join(", ")),
        ));
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewUser {
        NewUser {
            email: "krum@codixis.com".to_string(),
            password: "aBcd@5678yilnjvgtiuh".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn valid_input_has_no_violations() {
        assert!(check_new_user(&valid_input()).is_empty());
    }

    #[test]
    fn bad_email_is_reported() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();

        let violations = check_new_user(&input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "email");
    }

    #[test]
    fn short_password_is_reported() {
        let mut input = valid_input();
        input.password = "short".to_string();

        let violations = check_new_user(&input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }

    #[test]
    fn unknown_role_is_reported() {
        let mut input = valid_input();
        input.role = "superuser".to_string();

        let violations = check_new_user(&input);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "role");
        assert!(violations[0].message.contains("user, admin"));
    }

    #[test]
    fn every_bad_field_is_reported_together() {
        let input = NewUser {
            email: "nope".to_string(),
            password: "x".to_string(),
            role: "root".to_string(),
        };

        let fields: Vec<_> = check_new_user(&input)
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["email", "password", "role"]);
    }

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(UserRole::from("admin"), UserRole::Admin);
        assert_eq!(UserRole::from("user"), UserRole::User);
        assert_eq!(String::from(UserRole::Admin), "admin");
    }
}
