//! 라우트 설정 모듈
//!
//! 서버 렌더링 페이지, 로컬 인증, OAuth 콜백과 헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | 인증 | 동작 |
//! |---|---|---|---|
//! | GET | `/` | - | 랜딩 페이지 |
//! | GET | `/login`, `/register` | - | 입력 폼 |
//! | GET | `/secrets` | - | 공개 시크릿 목록 |
//! | GET | `/submit` | 필요 | 시크릿 입력 폼 |
//! | POST | `/submit` | 필요 | 시크릿 저장 → `/secrets` |
//! | POST | `/register`, `/login` | - | 세션 발급 → `/secrets` |
//! | GET | `/logout` | - | 세션 삭제 → `/` |
//! | GET | `/auth/{google,twitter}` | - | OAuth 시작 |
//! | GET | `/auth/{google,twitter}/secrets` | - | OAuth 콜백 |
//! | GET | `/health` | - | 헬스체크 |
//!
//! 인증이 필요한 라우트에서 익명 요청은 `/login`으로 리다이렉트됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(context.clone())
//!     .wrap(SessionMiddleware)
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_form)
        .service(handlers::pages::register_form)
        .service(handlers::pages::secrets)
        .service(handlers::pages::submit_form)
        .service(handlers::secrets::submit_secret);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout)
        .service(handlers::auth::oauth_begin)
        .service(handlers::auth::oauth_callback);
}

/// 헬스체크 엔드포인트
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_web",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
