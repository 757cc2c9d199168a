//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 서명된 세션 쿠키 검증
//! - 세션 저장소에서 세션 데이터 로드
//! - 세션의 사용자를 조회하여 request extension에 저장
//! - 실패하면 익명 요청으로 계속 진행 (요청을 막지 않음)
//!
//! 인증이 필요한 핸들러는 [`AuthenticatedUser`](crate::domain::AuthenticatedUser)
//! 추출기로 익명 요청을 `/login`으로 돌려보냅니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::SessionMiddleware;
//!
//! App::new()
//!     .app_data(context.clone())
//!     .wrap(SessionMiddleware)
//!     .configure(configure_all_routes)
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
