use actix_web::HttpResponse;

/// Creates a not found response with a plain text message body
pub fn not_found(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::NotFound().body(message.to_string())
}

/// Creates an empty forbidden response
pub fn forbidden() -> HttpResponse {
    HttpResponse::Forbidden().finish()
}
