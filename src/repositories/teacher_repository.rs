use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{is_duplicate_key, AppError, AppResult},
    models::domain::Teacher,
};

pub const TEACHER_SEQUENCE: &str = "teacher_id";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_by_user_id(&self, app_user_id: i64) -> AppResult<Option<Teacher>>;
    /// Provisions the profile for `app_user_id`. Fails with `DuplicateProfile`
    /// when one already exists, including one created concurrently.
    async fn create(&self, app_user_id: i64) -> AppResult<Teacher>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTeacherRepository {
    db: Database,
    collection: Collection<Teacher>,
}

impl MongoTeacherRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("teachers");
        Self {
            db: db.clone(),
            collection,
        }
    }
}

#[async_trait]
impl TeacherRepository for MongoTeacherRepository {
    async fn find_by_user_id(&self, app_user_id: i64) -> AppResult<Option<Teacher>> {
        let teacher = self
            .collection
            .find_one(doc! { "appUserId": app_user_id })
            .await?;
        Ok(teacher)
    }

    async fn create(&self, app_user_id: i64) -> AppResult<Teacher> {
        let teacher_id = self.db.next_id(TEACHER_SEQUENCE).await?;
        let teacher = Teacher::new(teacher_id, app_user_id);

        match self.collection.insert_one(&teacher).await {
            Ok(_) => Ok(teacher),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateProfile(format!(
                "Teacher profile for user {} already exists",
                app_user_id
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let user_index = IndexModel::builder()
            .keys(doc! { "appUserId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("app_user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_index).await?;
        log::info!("Ensured indexes for teachers collection");

        Ok(())
    }
}
