//! # 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserStore`] 구현입니다.
//! 핸들러 통합 테스트와 `USER_STORE=memory` 로컬 데모에서 사용합니다.
//! 재시작하면 모든 데이터가 사라집니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    config::AuthProvider,
    domain::entities::users::User,
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let users = self.users.read().context("사용자 저장소 잠금 실패")?;
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;

        Ok(users
            .iter()
            .filter(|u| u.username == username)
            .cloned()
            .collect())
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;

        Ok(users
            .iter()
            .find(|u| u.provider_id(provider) == Some(provider_id))
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        // Mongo의 유니크 sparse 인덱스와 같은 제약
        for provider in [AuthProvider::Google, AuthProvider::Twitter] {
            if let Some(provider_id) = user.provider_id(provider) {
                if users.iter().any(|u| u.provider_id(provider) == Some(provider_id)) {
                    return Err(AppError::ConflictError(
                        "이미 등록된 프로바이더 계정입니다".to_string(),
                    ));
                }
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let mut users = self.users.write().context("사용자 저장소 잠금 실패")?;

        Ok(users.iter_mut().find(|u| u.id == Some(object_id)).map(|user| {
            user.secret = Some(secret.to_string());
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }

    async fn find_with_secret(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().context("사용자 저장소 잠금 실패")?;

        Ok(users.iter().filter(|u| u.has_secret()).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_duplicate_usernames_are_kept() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new_local("alice".to_string(), "h1".to_string())).await.unwrap();
        repo.create(User::new_local("alice".to_string(), "h2".to_string())).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_ne!(found[0].id, found[1].id);
    }

    #[actix_web::test]
    async fn test_duplicate_provider_id_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new_federated(AuthProvider::Google, "g-1".to_string())).await.unwrap();

        let result = repo
            .create(User::new_federated(AuthProvider::Google, "g-1".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(repo.len(), 1);

        // 다른 프로바이더의 같은 ID는 별개의 계정입니다.
        repo.create(User::new_federated(AuthProvider::Twitter, "g-1".to_string())).await.unwrap();
        assert_eq!(repo.len(), 2);
    }

    #[actix_web::test]
    async fn test_update_secret_and_listing() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.create(User::new_local("alice".to_string(), "h".to_string())).await.unwrap();
        repo.create(User::new_local("bob".to_string(), "h".to_string())).await.unwrap();

        assert!(repo.find_with_secret().await.unwrap().is_empty());

        let id = alice.id_string().unwrap();
        let updated = repo.update_secret(&id, "hi").await.unwrap().unwrap();
        assert_eq!(updated.secret.as_deref(), Some("hi"));

        let listed = repo.find_with_secret().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].username, "alice");

        let missing = repo.update_secret(&ObjectId::new().to_hex(), "x").await.unwrap();
        assert!(missing.is_none());
    }

    #[actix_web::test]
    async fn test_find_by_id_rejects_invalid_id() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(
            repo.find_by_id("nope").await,
            Err(AppError::ValidationError(_))
        ));
    }
}
