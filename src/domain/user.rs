//! User domain entity, role enumeration and request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::{ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_FINANCE};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Finance,
    Employee,
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            ROLE_FINANCE => UserRole::Finance,
            _ => UserRole::Employee,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => f.write_str(ROLE_ADMIN),
            UserRole::Finance => f.write_str(ROLE_FINANCE),
            UserRole::Employee => f.write_str(ROLE_EMPLOYEE),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the repository on first save
    pub id: Option<i32>,
    pub email: String,
    /// Argon2 hash, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    /// Create a not-yet-persisted user with the default role
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            role: UserRole::Employee,
        }
    }
}

/// User registration payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// User partial-update payload; email and/or password, at least one.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "at_least_one_user_field"))]
pub struct UpdateUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

fn at_least_one_user_field(update: &UpdateUser) -> Result<(), ValidationError> {
    if update.email.is_none() && update.password.is_none() {
        let mut err = ValidationError::new("at_least_one_field");
        err.message =
            Some("At least one field (email or password) must be provided for update.".into());
        return Err(err);
    }
    Ok(())
}

/// User representation safe to return to clients; carries no password
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Option<i32>,
    #[schema(example = "user@example.com")]
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_get_the_employee_role() {
        let user = User::new("a@b.com".to_string(), "hash".to_string());
        assert_eq!(user.role, UserRole::Employee);
    }

    #[test]
    fn role_parses_from_stored_strings() {
        assert_eq!(UserRole::from("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from("FINANCE"), UserRole::Finance);
        assert_eq!(UserRole::from("anything-else"), UserRole::Employee);
    }

    #[test]
    fn response_drops_password_material() {
        let user = User {
            id: Some(3),
            email: "a@b.com".to_string(),
            password_hash: "secret-hash".to_string(),
            role: UserRole::Employee,
        };
        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn short_password_is_rejected() {
        let create = CreateUser {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
        };
        assert!(create.validate().is_err());
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(UpdateUser::default().validate().is_err());
    }
}
