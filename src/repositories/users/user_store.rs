//! # Credential Store 인터페이스
//!
//! 핸들러와 서비스는 구체적인 저장소 대신 이 trait에만 의존합니다.
//! find-or-create는 저장소가 아니라 호출하는 쪽
//! ([`UserService::find_or_create`](crate::services::users::UserService::find_or_create))에서
//! `find_by_provider_id`와 `create`를 조합하여 구현합니다.

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// ObjectId 문자열로 조회. 잘못된 형식은 `ValidationError`
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명은 유일하지 않으므로 일치하는 모든 레코드를 반환합니다.
    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>>;

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    ///
    /// 같은 프로바이더 ID가 이미 있으면 `ConflictError`
    async fn create(&self, user: User) -> AppResult<User>;

    /// 시크릿을 덮어쓰고 갱신된 사용자를 반환합니다. 없는 사용자면 `None`
    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>>;

    /// 비어 있지 않은 시크릿을 가진 모든 사용자
    async fn find_with_secret(&self) -> AppResult<Vec<User>>;
}
