//! OAuth 프로필 모델
//!
//! 프로바이더별 사용자 정보 응답과 이를 정규화한 [`ProviderProfile`]입니다.

pub mod google_user;
pub mod twitter_user;
pub mod provider_profile;

pub use provider_profile::ProviderProfile;
