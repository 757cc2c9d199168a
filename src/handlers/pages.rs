//! 페이지 렌더링 핸들러

use actix_web::{get, web, HttpResponse};
use crate::{
    core::AppContext,
    domain::models::auth::{AuthenticatedUser, OptionalUser},
    errors::AppError,
    handlers::html,
    views,
};

#[get("/")]
pub async fn home() -> HttpResponse {
    html(views::home_page())
}

#[get("/login")]
pub async fn login_form() -> HttpResponse {
    html(views::login_page())
}

#[get("/register")]
pub async fn register_form() -> HttpResponse {
    html(views::register_page())
}

/// 모든 사용자의 시크릿 목록 (로그인 불필요)
#[get("/secrets")]
pub async fn secrets(
    ctx: web::Data<AppContext>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let secrets = ctx.user_service.list_secrets().await?;

    Ok(html(views::secrets_page(&secrets, user.is_authenticated())))
}

#[get("/submit")]
pub async fn submit_form(_user: AuthenticatedUser) -> HttpResponse {
    html(views::submit_page())
}
