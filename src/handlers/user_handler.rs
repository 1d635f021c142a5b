use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{AuthenticateRequest, RegisterRequest},
        response::{RegisterResponse, TokenResponse},
    },
    services::http_helpers::forbidden,
};

#[get("/api/user/{username}")]
pub async fn get_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.authenticator.get_user(&username).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Any failure, expected or not, is answered with a bare 403 so callers
/// cannot tell unknown users from wrong passwords or internal faults. That
/// includes bodies that are not valid JSON.
#[post("/api/user/authenticate")]
pub async fn authenticate(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let credentials: AuthenticateRequest = match serde_json::from_slice(&body) {
        Ok(credentials) => credentials,
        Err(e) => {
            log::warn!("Rejected malformed authentication request: {}", e);
            return forbidden();
        }
    };

    match state
        .authenticator
        .authenticate(&credentials.username, &credentials.password)
        .await
    {
        Ok(jwt_token) => HttpResponse::Ok().json(TokenResponse { jwt_token }),
        Err(AppError::Unauthorized(msg)) => {
            log::warn!("Authentication failed for '{}': {}", credentials.username, msg);
            forbidden()
        }
        Err(e) => {
            log::error!("Authentication error for '{}': {}", credentials.username, e);
            forbidden()
        }
    }
}

#[post("/api/user/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let app_user_id = state.registrar.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(RegisterResponse { app_user_id }))
}
