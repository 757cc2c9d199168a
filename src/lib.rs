//! Secrets 웹 서비스
//!
//! 사용자가 로컬 계정, Google, Twitter로 로그인하여 하나의 "시크릿"을 남기고,
//! 모든 시크릿을 `/secrets`에서 익명으로 공개하는 서버 렌더링 웹 애플리케이션입니다.
//!
//! # Features
//!
//! - **로컬 인증**: 사용자명/패스워드 가입 및 로그인 (bcrypt)
//! - **OAuth 2.0**: Google, Twitter(PKCE) 소셜 로그인
//! - **세션**: HMAC 서명 쿠키 + 서버 측 세션 저장소 (인메모리 또는 Redis)
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지, 폼 POST, OAuth 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │SessionMiddleware│ ← 쿠키 → 세션 → 사용자
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 인가, 렌더/리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 로컬/페더레이션 인증, 세션 관리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use secrets_web::core::AppContext;
//! use secrets_web::middlewares::SessionMiddleware;
//! use secrets_web::routes::configure_all_routes;
//!
//! let context = web::Data::new(AppContext::from_env().await?);
//!
//! let app = App::new()
//!     .app_data(context.clone())
//!     .wrap(SessionMiddleware)
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
