use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password::hash_password,
    errors::{AppError, AppResult},
    models::{
        domain::{AppUser, Role},
        dto::request::RegisterRequest,
    },
    repositories::{TeacherRepository, UserRepository},
};

pub struct Registrar {
    users: Arc<dyn UserRepository>,
    teachers: Arc<dyn TeacherRepository>,
    bcrypt_cost: u32,
}

impl Registrar {
    pub fn new(
        users: Arc<dyn UserRepository>,
        teachers: Arc<dyn TeacherRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            teachers,
            bcrypt_cost,
        }
    }

    /// Creates an identity and, for teachers, its teacher profile. Returns the
    /// new identity id.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<i64> {
        let roles = validate_registration(&request)?;

        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::DuplicateIdentity(
                "The provided username already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password, self.bcrypt_cost).await?;
        let user = AppUser::new(
            &request.first_name,
            &request.last_name,
            &request.username,
            &password_hash,
            roles,
        );
        let user = self.users.create(user).await?;
        log::info!(
            "Registered user '{}' (id {}) with roles {:?}",
            user.username,
            user.app_user_id,
            user.roles
        );

        if user.has_role(Role::Teacher) {
            match self.teachers.create(user.app_user_id).await {
                Ok(teacher) => log::info!(
                    "Provisioned teacher profile {} for user {}",
                    teacher.teacher_id,
                    user.app_user_id
                ),
                Err(AppError::DuplicateProfile(_)) => {}
                // The identity is already stored; `QuizService` provisions the
                // profile on the teacher's first quiz.
                Err(e) => log::error!(
                    "Teacher profile for user {} not provisioned at registration: {}",
                    user.app_user_id,
                    e
                ),
            }
        }

        Ok(user.app_user_id)
    }
}

/// Field checks first, then role names. Returns the parsed, de-duplicated
/// role set.
fn validate_registration(request: &RegisterRequest) -> AppResult<Vec<Role>> {
    request.validate()?;

    let mut roles = Vec::new();
    let mut unknown = Vec::new();
    for name in &request.roles {
        match name.parse::<Role>() {
            Ok(role) if !roles.contains(&role) => roles.push(role),
            Ok(_) => {}
            Err(e) => unknown.extend(e.messages()),
        }
    }

    if unknown.is_empty() {
        Ok(roles)
    } else {
        Err(AppError::InvalidInput(unknown))
    }
}
