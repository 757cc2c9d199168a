//! Authentication HTTP Handlers
//!
//! 로컬 가입/로그인/로그아웃과 OAuth 2.0 페더레이션 로그인을 처리합니다.
//! 성공하면 세션 쿠키를 발급하고 `/secrets`로, 실패하면 입력 폼으로 리다이렉트합니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: 사용자명/패스워드 (`POST /register`, `POST /login`)
//! - **Google**: `GET /auth/google` → `GET /auth/google/secrets`
//! - **Twitter**: `GET /auth/twitter` → `GET /auth/twitter/secrets` (PKCE)
use actix_web::{get, http::header, post, web, HttpResponse};
use uuid::Uuid;
use crate::{
    config::AuthProvider,
    core::AppContext,
    domain::{
        dto::users::request::{CredentialsForm, OAuthCallbackQuery},
        entities::users::User,
        models::auth::{CurrentSession, PendingOAuth},
    },
    errors::AppError,
    handlers::redirect,
    services::auth::pkce,
};

#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    session: CurrentSession,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let user = match ctx.user_service.register(&form).await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("회원가입 실패 - 사용자: {}, 에러: {}", form.username, e);
            return Ok(redirect("/register"));
        }
    };

    login_and_redirect(&ctx, &session, &user).await
}

#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    session: CurrentSession,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let user = match ctx.user_service.authenticate(&form).await {
        Ok(user) => user,
        Err(AppError::AuthenticationError(_)) => return Ok(redirect("/login")),
        Err(e) => return Err(e),
    };

    login_and_redirect(&ctx, &session, &user).await
}

/// 세션을 삭제하고 쿠키를 만료시킵니다. 익명 요청이면 아무것도 하지 않습니다.
#[get("/logout")]
pub async fn logout(
    ctx: web::Data<AppContext>,
    session: CurrentSession,
) -> Result<HttpResponse, AppError> {
    let Some(session_id) = session.session_id() else {
        return Ok(redirect("/"));
    };

    ctx.sessions.destroy(session_id).await?;
    log::info!("👋 로그아웃");

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .cookie(ctx.sessions.removal_cookie())
        .finish())
}

/// 프로바이더 동의 화면으로 보냅니다.
///
/// state(와 PKCE verifier)는 세션에 보관되어 콜백에서 한 번만 확인됩니다.
#[get("/auth/{provider:google|twitter}")]
pub async fn oauth_begin(
    ctx: web::Data<AppContext>,
    session: CurrentSession,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;
    let oauth = ctx.oauth_provider(provider)?;

    let state = Uuid::new_v4().simple().to_string();
    let verifier = oauth.uses_pkce().then(pkce::generate_verifier);
    let challenge = verifier.as_deref().map(pkce::challenge_s256);

    let login_url = oauth.authorization_url(&state, challenge.as_deref());
    let cookie = ctx.sessions
        .begin_oauth(
            session.0.as_ref(),
            PendingOAuth {
                provider: oauth.provider(),
                state,
                pkce_verifier: verifier,
            },
        )
        .await?;

    log::debug!("{} OAuth 시작", provider.as_str());

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, login_url))
        .cookie(cookie)
        .finish())
}

/// OAuth 콜백
///
/// 동의 거부, state 불일치, 토큰 교환 실패는 모두 `/login`으로 돌아갑니다.
#[get("/auth/{provider:google|twitter}/secrets")]
pub async fn oauth_callback(
    ctx: web::Data<AppContext>,
    session: CurrentSession,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&path)?;

    let Some(current) = session.0.as_ref() else {
        log::warn!("{} OAuth 콜백: 세션 없음", provider.as_str());
        return Ok(redirect("/login"));
    };

    let pending = ctx.sessions.take_pending_oauth(current).await?;

    if let Some(error) = &query.error {
        log::warn!(
            "{} OAuth 에러: {} - {}",
            provider.as_str(),
            error,
            query.error_description.as_deref().unwrap_or("OAuth 인증이 취소되었거나 실패했습니다")
        );
        return Ok(redirect("/login"));
    }

    let Some((code, state)) = query.code_and_state() else {
        log::warn!("{} OAuth 콜백: code 또는 state 누락", provider.as_str());
        return Ok(redirect("/login"));
    };

    let Some(pending) = pending.filter(|p| p.matches(provider, state)) else {
        log::warn!("{} OAuth 콜백: state 불일치", provider.as_str());
        return Ok(redirect("/login"));
    };

    let oauth = ctx.oauth_provider(provider)?;
    let profile = match oauth.fetch_profile(code, pending.pkce_verifier.as_deref()).await {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("{} 프로필 조회 실패: {}", provider.as_str(), e);
            return Ok(redirect("/login"));
        }
    };

    let user = ctx.user_service.find_or_create(&profile).await?;

    login_and_redirect(&ctx, &session, &user).await
}

/// 새 세션을 발급하고 `/secrets`로 이동합니다.
async fn login_and_redirect(
    ctx: &AppContext,
    session: &CurrentSession,
    user: &User,
) -> Result<HttpResponse, AppError> {
    let user_id = user.id_string()
        .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

    let cookie = ctx.sessions.establish(session.session_id(), &user_id).await?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/secrets"))
        .cookie(cookie)
        .finish())
}

fn parse_provider(name: &str) -> Result<AuthProvider, AppError> {
    match AuthProvider::from_str(name) {
        Ok(AuthProvider::Local) | Err(_) => Err(AppError::NotFound(format!("OAuth provider {}", name))),
        Ok(provider) => Ok(provider),
    }
}
