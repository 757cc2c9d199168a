//! # Core Module
//!
//! 애플리케이션 전역 의존성을 담는 [`AppContext`]를 제공합니다.
//!
//! 시작 시 설정에 따라 저장소 구현을 고르고 서비스를 한 번 조립한 뒤,
//! `web::Data<AppContext>`로 모든 워커와 핸들러가 공유합니다.
//!
//! ```text
//! main ──► AppContext::from_env()
//!            ├─ UserStore     (MongoDB | 인메모리)
//!            ├─ SessionStore  (인메모리 | Redis)
//!            ├─ UserService
//!            ├─ SessionService
//!            └─ OAuthProvider (Google, Twitter)
//! ```

pub mod context;

pub use context::AppContext;
