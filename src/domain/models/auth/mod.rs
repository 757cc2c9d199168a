//! 세션/인증 모델
//!
//! 세션 미들웨어가 요청 확장(extensions)에 넣는 값과 이를 꺼내는 추출기를 정의합니다.

pub mod authenticated_user;
pub mod session_data;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use session_data::{CurrentSession, PendingOAuth, SessionContext, SessionData};
