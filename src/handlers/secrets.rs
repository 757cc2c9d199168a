//! 시크릿 제출 핸들러

use actix_web::{post, web, HttpResponse};
use crate::{
    core::AppContext,
    domain::{dto::users::request::SubmitSecretForm, models::auth::AuthenticatedUser},
    errors::AppError,
    handlers::redirect,
    utils::string_utils::is_blank,
};

/// 호출자의 시크릿을 덮어쓰고 `/secrets`로 이동합니다.
///
/// 익명 요청은 `AuthenticatedUser` 추출 단계에서 `/login`으로 돌아가며
/// 저장소는 변경되지 않습니다.
#[post("/submit")]
pub async fn submit_secret(
    ctx: web::Data<AppContext>,
    user: AuthenticatedUser,
    form: web::Form<SubmitSecretForm>,
) -> Result<HttpResponse, AppError> {
    if is_blank(&form.secret) {
        log::debug!("빈 시크릿 제출, 폼으로 돌아감");
        return Ok(redirect("/submit"));
    }

    let user_id = user.user_id()
        .ok_or_else(|| AppError::InternalError("세션 사용자에 ID가 없습니다".to_string()))?;

    ctx.user_service.submit_secret(&user_id, &form).await?;

    Ok(redirect("/secrets"))
}
