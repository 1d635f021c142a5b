use std::sync::Arc;

use crate::{
    auth::{password::verify_password, JwtService},
    errors::{AppError, AppResult},
    models::dto::response::UserDto,
    repositories::UserRepository,
};

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    jwt_service: Arc<JwtService>,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, jwt_service: Arc<JwtService>) -> Self {
        Self { users, jwt_service }
    }

    /// Checks the credentials and issues a session token carrying the
    /// identity and its roles. Unknown user and wrong password fail the same
    /// way.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<String> {
        let bad_credentials = || AppError::Unauthorized("Bad credentials".to_string());

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(bad_credentials)?;

        if !verify_password(password, &user.password_hash).await? {
            return Err(bad_credentials());
        }

        self.jwt_service.create_token(&user)
    }

    pub async fn get_user(&self, username: &str) -> AppResult<UserDto> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No user found with username {}", username))
            })?;

        Ok(user.into())
    }
}
