//! # HTTP Request Handlers Module
//!
//! 서버 렌더링 페이지와 폼 POST, OAuth 리다이렉트를 처리하는 핸들러들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (form POST, redirect)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   SessionMiddleware - 쿠키 → 세션 → 사용자
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 인가 확인, 렌더/리다이렉트   ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 로컬/페더레이션 인증, 세션           ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore, SessionStore       ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`pages`**: `GET /`, `/login`, `/register`, `/secrets`, `/submit`
//! - **`auth`**: 가입/로그인/로그아웃, `/auth/{google,twitter}` 및 콜백
//! - **`secrets`**: `POST /submit`
//!
//! ## 인가
//!
//! 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::AuthenticatedUser)를
//! 인자로 받습니다. 익명 요청은 핸들러 본문이 실행되기 전에 `/login`으로 리다이렉트됩니다.

pub mod pages;
pub mod auth;
pub mod secrets;


use actix_web::http::header;
use actix_web::HttpResponse;

/// 302 Found 리다이렉트
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// `text/html` 200 응답
pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
