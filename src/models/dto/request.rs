use serde::Deserialize;
use validator::Validate;

// Text fields default to empty so that a missing field is reported by
// validation instead of failing JSON extraction.

#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "First name is required."))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Last name is required."))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "At least one role is required."))]
    pub roles: Vec<String>,
}

/// Body of `POST /quizzes` and `PUT /quizzes/{id}`.
///
/// `teacher_id` is accepted so that clients echoing a stored quiz back do not
/// fail to deserialize, but the server never reads it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "quizJSON")]
    pub quiz_json: String,
    #[serde(default)]
    pub teacher_id: Option<i64>,
}
