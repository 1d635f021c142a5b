#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use quizgen_server::{
    app_state::AppState,
    auth::JwtService,
    db::HealthCheck,
    errors::{AppError, AppResult},
    models::domain::{AppUser, Quiz, Teacher},
    repositories::{QuizRepository, TeacherRepository, UserRepository},
};

pub const TEST_SECRET: &str = "integration_test_secret_key";

pub struct InMemoryUserRepository {
    users_by_username: RwLock<HashMap<String, AppUser>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users_by_username: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn count(&self) -> usize {
        self.users_by_username.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: AppUser) -> AppResult<AppUser> {
        let mut users = self.users_by_username.write().await;
        if users.contains_key(&user.username) {
            return Err(AppError::DuplicateIdentity(
                "The provided username already exists".to_string(),
            ));
        }

        user.app_user_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AppUser>> {
        let users = self.users_by_username.read().await;
        Ok(users.get(username).cloned())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryTeacherRepository {
    teachers_by_user: RwLock<HashMap<i64, Teacher>>,
    next_id: AtomicI64,
}

impl InMemoryTeacherRepository {
    pub fn new() -> Self {
        Self {
            teachers_by_user: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(100),
        }
    }

    pub async fn count(&self) -> usize {
        self.teachers_by_user.read().await.len()
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn find_by_user_id(&self, app_user_id: i64) -> AppResult<Option<Teacher>> {
        let teachers = self.teachers_by_user.read().await;
        Ok(teachers.get(&app_user_id).cloned())
    }

    async fn create(&self, app_user_id: i64) -> AppResult<Teacher> {
        let mut teachers = self.teachers_by_user.write().await;
        if teachers.contains_key(&app_user_id) {
            return Err(AppError::DuplicateProfile(format!(
                "Teacher profile for user {} already exists",
                app_user_id
            )));
        }

        let teacher = Teacher::new(self.next_id.fetch_add(1, Ordering::SeqCst), app_user_id);
        teachers.insert(app_user_id, teacher.clone());
        Ok(teacher)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct InMemoryQuizRepository {
    quizzes: RwLock<BTreeMap<i64, Quiz>>,
    next_id: AtomicI64,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self {
            quizzes: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn count(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.values().cloned().collect())
    }

    async fn create(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        quiz.quiz_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        quizzes.insert(quiz.quiz_id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Option<Quiz>> {
        let mut quizzes = self.quizzes.write().await;
        let Some(stored) = quizzes.get_mut(&quiz.quiz_id) else {
            return Ok(None);
        };

        stored.title = quiz.title;
        stored.description = quiz.description;
        stored.quiz_json = quiz.quiz_json;
        Ok(Some(stored.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        Ok(quizzes.remove(&id).is_some())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthCheck for AlwaysHealthy {
    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub jwt_service: Arc<JwtService>,
    pub users: Arc<InMemoryUserRepository>,
    pub teachers: Arc<InMemoryTeacherRepository>,
    pub quizzes: Arc<InMemoryQuizRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let teachers = Arc::new(InMemoryTeacherRepository::new());
        let quizzes = Arc::new(InMemoryQuizRepository::new());
        let jwt_service = Arc::new(JwtService::new(
            &SecretString::from(TEST_SECRET.to_string()),
            1,
        ));

        let state = AppState::from_repositories(
            users.clone(),
            teachers.clone(),
            quizzes.clone(),
            Arc::new(AlwaysHealthy),
            jwt_service.clone(),
            4,
        );

        Self {
            state,
            jwt_service,
            users,
            teachers,
            quizzes,
        }
    }
}

/// Builds the full application (access filter included) over a `TestContext`.
macro_rules! test_app {
    ($ctx:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($ctx.state.clone()))
                .app_data(actix_web::web::Data::from($ctx.jwt_service.clone()))
                .wrap(quizgen_server::auth::AccessFilter)
                .configure(quizgen_server::handlers::configure),
        )
        .await
    };
}

/// Registers `$username` with password `"p"` and returns the new id.
macro_rules! register_user {
    ($app:expr, $username:expr, $roles:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/user/register")
            .set_json(serde_json::json!({
                "firstName": "A",
                "lastName": "B",
                "username": $username,
                "password": "p",
                "roles": $roles,
            }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        body["appUserId"].as_i64().expect("appUserId should be an integer")
    }};
}

/// Authenticates `$username` with password `"p"` and returns the bearer token.
macro_rules! login {
    ($app:expr, $username:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/api/user/authenticate")
            .set_json(serde_json::json!({ "username": $username, "password": "p" }))
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        body["jwt_token"]
            .as_str()
            .expect("jwt_token should be a string")
            .to_string()
    }};
}
