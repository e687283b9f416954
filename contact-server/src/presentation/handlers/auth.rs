use crate::application::auth_service::AuthService;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{
    LoginRequest, MessageResponse, ProfileResponse, SignupRequest, TokenResponse,
};
use crate::presentation::utils::{AuthenticatedUser, request_id};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

pub async fn signup<R: UserRepository + 'static>(
    req: HttpRequest,
    service: web::Data<AuthService<R>>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, DomainError> {
    let signup = payload.into_inner().validate()?;
    let user = service
        .register(signup.name, signup.email, signup.password)
        .await?;

    info!(request_id = %request_id(&req), user_id = %user.id, "user registered");

    Ok(HttpResponse::Ok().json(MessageResponse::new("User registered successfully!")))
}

pub async fn login<R: UserRepository + 'static>(
    req: HttpRequest,
    service: web::Data<AuthService<R>>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, DomainError> {
    let login = payload.into_inner().validate()?;
    let token = service.login(&login.email, &login.password).await?;

    info!(request_id = %request_id(&req), email = %login.email, "user logged in");

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub async fn profile<R: UserRepository + 'static>(
    user: AuthenticatedUser,
    service: web::Data<AuthService<R>>,
) -> Result<HttpResponse, DomainError> {
    let user = service.get_user(user.id).await?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(user)))
}
