use serde::{Deserialize, Serialize};

/// Links an identity to quiz ownership. At most one per `app_user_id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub teacher_id: i64,
    pub app_user_id: i64,
}

impl Teacher {
    pub fn new(teacher_id: i64, app_user_id: i64) -> Self {
        Teacher {
            teacher_id,
            app_user_id,
        }
    }
}
