use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::{Database, HealthCheck},
    errors::AppResult,
    repositories::{
        MongoQuizRepository, MongoTeacherRepository, MongoUserRepository, QuizRepository,
        TeacherRepository, UserRepository,
    },
    services::{Authenticator, QuizService, Registrar},
};

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<Authenticator>,
    pub registrar: Arc<Registrar>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let db = Database::connect(config).await?;

        let users = Arc::new(MongoUserRepository::new(&db));
        users.ensure_indexes().await?;
        let teachers = Arc::new(MongoTeacherRepository::new(&db));
        teachers.ensure_indexes().await?;
        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self::from_repositories(
            users,
            teachers,
            quizzes,
            Arc::new(db),
            jwt_service,
            config.bcrypt_cost,
        ))
    }

    /// Wires the services over any store implementation.
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        teachers: Arc<dyn TeacherRepository>,
        quizzes: Arc<dyn QuizRepository>,
        health: Arc<dyn HealthCheck>,
        jwt_service: Arc<JwtService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            authenticator: Arc::new(Authenticator::new(users.clone(), jwt_service.clone())),
            registrar: Arc::new(Registrar::new(users, teachers.clone(), bcrypt_cost)),
            quiz_service: Arc::new(QuizService::new(quizzes, teachers)),
            jwt_service,
            health,
        }
    }
}
