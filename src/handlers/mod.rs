pub mod health_handler;
pub mod quiz_handler;
pub mod user_handler;

use actix_web::web;

/// Registers every route of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(user_handler::authenticate)
        .service(user_handler::register)
        .service(user_handler::get_user)
        .service(quiz_handler::list_quizzes)
        .service(quiz_handler::create_quiz)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::update_quiz)
        .service(quiz_handler::delete_quiz);
}
