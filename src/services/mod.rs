pub mod authenticator;
pub mod http_helpers;
pub mod quiz_service;
pub mod registrar;

pub use authenticator::Authenticator;
pub use quiz_service::QuizService;
pub use registrar::Registrar;
