use serde::Serialize;

use crate::models::domain::{AppUser, Role};

/// Outward form of an identity; the password hash is left behind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub app_user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub roles: Vec<Role>,
}

impl From<AppUser> for UserDto {
    fn from(user: AppUser) -> Self {
        UserDto {
            app_user_id: user.app_user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            roles: user.roles,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub jwt_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub app_user_id: i64,
}
