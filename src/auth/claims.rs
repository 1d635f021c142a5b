use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{AppUser, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub app_user_id: i64,
    pub roles: Vec<Role>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user: &AppUser, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user.username.clone(),
            app_user_id: user.app_user_id,
            roles: user.roles.clone(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

/// The authenticated caller, handed explicitly to every service call that
/// depends on who is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub app_user_id: i64,
    pub username: String,
    pub roles: Vec<Role>,
}

impl CallerIdentity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl From<Claims> for CallerIdentity {
    fn from(claims: Claims) -> Self {
        CallerIdentity {
            app_user_id: claims.app_user_id,
            username: claims.sub,
            roles: claims.roles,
        }
    }
}
