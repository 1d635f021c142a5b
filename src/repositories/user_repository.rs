use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{is_duplicate_key, AppError, AppResult},
    models::domain::AppUser,
};

pub const USER_SEQUENCE: &str = "app_user_id";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists `user` under a freshly allocated id and returns the stored
    /// record. A taken username yields `DuplicateIdentity`.
    async fn create(&self, user: AppUser) -> AppResult<AppUser>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AppUser>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoUserRepository {
    db: Database,
    collection: Collection<AppUser>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users");
        Self {
            db: db.clone(),
            collection,
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: AppUser) -> AppResult<AppUser> {
        user.app_user_id = self.db.next_id(USER_SEQUENCE).await?;

        match self.collection.insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateIdentity(
                "The provided username already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AppUser>> {
        let user = self
            .collection
            .find_one(doc! { "username": username })
            .await?;
        Ok(user)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();
        let id_index = IndexModel::builder()
            .keys(doc! { "appUserId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("app_user_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes(vec![username_index, id_index])
            .await?;
        log::info!("Ensured indexes for users collection");

        Ok(())
    }
}
