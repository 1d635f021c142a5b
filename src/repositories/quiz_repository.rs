use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

#[cfg(test)]
use mockall::automock;

use crate::{db::Database, errors::AppResult, models::domain::Quiz};

pub const QUIZ_SEQUENCE: &str = "quiz_id";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    async fn find_all(&self) -> AppResult<Vec<Quiz>>;
    /// Stores `quiz` under a freshly allocated id.
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    /// Replaces title, description and payload of the quiz with `quiz.quiz_id`.
    /// The stored owner is left untouched. `None` when no row matches.
    async fn update(&self, quiz: Quiz) -> AppResult<Option<Quiz>>;
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quizzes");
        Self {
            db: db.clone(),
            collection,
        }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "quizId": id }).await?;
        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "quizId": 1 })
            .await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn create(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.quiz_id = self.db.next_id(QUIZ_SEQUENCE).await?;
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Option<Quiz>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! { "quizId": quiz.quiz_id },
                doc! { "$set": {
                    "title": quiz.title.as_str(),
                    "description": quiz.description.as_str(),
                    "quizJSON": quiz.quiz_json.as_str(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "quizId": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "quizId": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("quiz_id_unique".to_string())
                    .build(),
            )
            .build();
        let teacher_index = IndexModel::builder()
            .keys(doc! { "teacherId": 1 })
            .build();

        self.collection
            .create_indexes(vec![id_index, teacher_index])
            .await?;
        log::info!("Ensured indexes for quizzes collection");

        Ok(())
    }
}
