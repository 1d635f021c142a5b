pub mod quiz_repository;
pub mod teacher_repository;
pub mod user_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use teacher_repository::{MongoTeacherRepository, TeacherRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use teacher_repository::MockTeacherRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
