use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::dto::request::QuizRequest;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_id: i64, // Assigned by the store on create
    #[validate(length(min = 1, message = "Quiz title cannot be null or empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Quiz description cannot be null or empty."))]
    pub description: String,
    #[serde(rename = "quizJSON")]
    #[validate(length(min = 1, message = "Quiz JSON content cannot be null or empty."))]
    pub quiz_json: String, // Opaque to the server
    pub teacher_id: i64,   // Always derived from the caller, never the request body
}

impl Quiz {
    /// Builds an unsaved quiz owned by `teacher_id`. Whatever teacher id the
    /// request carried is dropped here.
    pub fn from_request(request: QuizRequest, teacher_id: i64) -> Self {
        Quiz {
            quiz_id: 0,
            title: request.title,
            description: request.description,
            quiz_json: request.quiz_json,
            teacher_id,
        }
    }
}

#[cfg(test)]
impl Quiz {
    pub fn test_quiz(quiz_id: i64, title: &str, teacher_id: i64) -> Self {
        Quiz {
            quiz_id,
            title: title.to_string(),
            description: "basics".to_string(),
            quiz_json: r#"{"questions":[]}"#.to_string(),
            teacher_id,
        }
    }
}
