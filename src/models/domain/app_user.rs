use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Teacher" => Ok(Role::Teacher),
            "Student" => Ok(Role::Student),
            other => Err(AppError::invalid(format!("Unknown role '{}'", other))),
        }
    }
}

/// A stored identity. `password_hash` is a bcrypt hash and never leaves the
/// server; see `UserDto` for the outward form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUser {
    pub app_user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl AppUser {
    /// Builds an identity that has not been assigned an id yet.
    pub fn new(
        first_name: &str,
        last_name: &str,
        username: &str,
        password_hash: &str,
        roles: Vec<Role>,
    ) -> Self {
        AppUser {
            app_user_id: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
impl AppUser {
    pub fn test_user(app_user_id: i64, username: &str, roles: Vec<Role>) -> Self {
        let mut user = AppUser::new("Test", "User", username, "not-a-real-hash", roles);
        user.app_user_id = app_user_id;
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert!(matches!(
            "teacher".parse::<Role>(),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_role_wire_form() {
        let json = serde_json::to_string(&vec![Role::Teacher, Role::Student]).unwrap();
        assert_eq!(json, r#"["Teacher","Student"]"#);
    }

    #[test]
    fn test_app_user_creation() {
        let user = AppUser::new("Ada", "Lovelace", "ada", "hash", vec![Role::Teacher]);
        assert_eq!(user.app_user_id, 0);
        assert!(user.has_role(Role::Teacher));
        assert!(!user.has_role(Role::Student));
    }

    #[test]
    fn test_app_user_serializes_camel_case() {
        let user = AppUser::test_user(7, "ada", vec![Role::Student]);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["appUserId"], 7);
        assert_eq!(json["firstName"], "Test");
    }
}
