use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{Header, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{
        claims::{CallerIdentity, Claims},
        jwt::JwtService,
        policy::{authorize, required_access, Access},
    },
    errors::{AppError, AppResult},
};

/// Validates the bearer token on every request and applies the route policy
/// before the request reaches a handler. Accepted claims are stored in the
/// request extensions for `AuthenticatedUser`.
pub struct AccessFilter;

impl<S, B> Transform<S, ServiceRequest> for AccessFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessFilterService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessFilterService {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessFilterService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            // Match on the percent-decoded path the router resolves, not the raw URI.
            let path = req.match_info().as_str().to_string();
            let access = required_access(req.method().as_str(), &path);

            let verdict = resolve_claims(&req, access)
                .and_then(|claims| authorize(access, claims.as_ref()).map(|_| claims));

            match verdict {
                Ok(claims) => {
                    if let Some(claims) = claims {
                        req.extensions_mut().insert(claims);
                    }
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    log::debug!("Rejected {} {}: {}", req.method(), path, err);
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Reads and verifies the bearer token, if any.
///
/// On public routes a missing or unusable token is not an error; the request
/// simply proceeds without claims.
fn resolve_claims(req: &ServiceRequest, access: Access) -> AppResult<Option<Claims>> {
    if !req.headers().contains_key(AUTHORIZATION) {
        return Ok(None);
    }

    let jwt_service = req
        .app_data::<web::Data<JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let verified = Authorization::<Bearer>::parse(req)
        .map_err(|_| AppError::Unauthorized("Invalid authorization header format".to_string()))
        .and_then(|auth| jwt_service.validate_token(auth.into_scheme().token()));

    match verified {
        Ok(claims) => Ok(Some(claims)),
        Err(_) if access == Access::Public => Ok(None),
        Err(err) => Err(err),
    }
}

/// Extractor for the caller attached by `AccessFilter`.
pub struct AuthenticatedUser(pub CallerIdentity);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let caller = req
            .extensions()
            .get::<Claims>()
            .cloned()
            .map(CallerIdentity::from)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()));

        ready(caller.map(AuthenticatedUser))
    }
}
