//! # 사용자 서비스 구현
//!
//! 로컬 인증 전략(가입, 패스워드 검증)과 페더레이션 사용자의 find-or-create,
//! 시크릿 제출/조회를 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! POST /register ──► register() ──► bcrypt hash ──► UserStore::create
//! POST /login    ──► authenticate() ──► UserStore::find_by_username ──► bcrypt verify
//! OAuth callback ──► find_or_create() ──► find_by_provider_id ──► (없으면) create
//! POST /submit   ──► submit_secret() ──► UserStore::update_secret
//! GET  /secrets  ──► list_secrets() ──► UserStore::find_with_secret
//! ```
//!
//! ## 사용자명 중복
//!
//! 사용자명은 유일하지 않습니다. 같은 사용자명으로 여러 번 가입할 수 있으며,
//! 이 경우 경고 로그만 남깁니다. 로그인 시에는 같은 사용자명을 가진 모든
//! 레코드를 순서대로 검증하고 패스워드가 맞는 첫 레코드로 로그인합니다.
//!
//! bcrypt 해싱과 검증은 `web::block`으로 블로킹 스레드 풀에서 실행합니다.

use std::sync::Arc;
use actix_web::web;
use bcrypt::hash;
use validator::Validate;
use crate::{
    config::AuthProvider,
    domain::{
        dto::users::request::{CredentialsForm, SubmitSecretForm},
        entities::users::User,
        models::oauth::ProviderProfile,
    },
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

/// 사용자 비즈니스 로직 서비스
///
/// 저장소는 [`UserStore`] trait 객체로 주입되므로
/// MongoDB와 인메모리 구현을 동일하게 사용합니다.
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()), 4);
/// let user = service.register(&form).await?;
/// ```
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { user_store, bcrypt_cost }
    }

    /// 새 로컬 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - ID가 할당된 사용자
    /// * `Err(AppError::ValidationError)` - 빈 사용자명 또는 비밀번호
    /// * `Err(AppError::InternalError)` - 해싱 실패
    pub async fn register(&self, form: &CredentialsForm) -> AppResult<User> {
        form.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let existing = self.user_store.find_by_username(&form.username).await?;
        if !existing.is_empty() {
            log::warn!(
                "⚠️ 중복 사용자명으로 가입: {} (기존 {}건)",
                form.username,
                existing.len()
            );
        }

        let hash_start = std::time::Instant::now();
        let password = form.password.clone();
        let cost = self.bcrypt_cost;
        let password_hash = web::block(move || hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.user_store
            .create(User::new_local(form.username.clone(), password_hash))
            .await?;

        log::info!("✅ 로컬 사용자 가입: {} ({})", user.username, user.id_string().unwrap_or_default());
        Ok(user)
    }

    /// 사용자명/비밀번호 검증
    ///
    /// 실패 사유(없는 사용자, 틀린 비밀번호, 페더레이션 전용 계정)는 구분하지 않고
    /// 모두 `AuthenticationError`로 반환합니다.
    pub async fn authenticate(&self, form: &CredentialsForm) -> AppResult<User> {
        form.validate()
            .map_err(|_| AppError::AuthenticationError("사용자명과 비밀번호가 필요합니다".to_string()))?;

        let candidates: Vec<User> = self.user_store
            .find_by_username(&form.username)
            .await?
            .into_iter()
            .filter(User::can_authenticate_with_password)
            .collect();

        let matched = if candidates.is_empty() {
            None
        } else {
            let password = form.password.clone();
            web::block(move || {
                candidates
                    .into_iter()
                    .find(|candidate| password_matches(&password, candidate))
            })
            .await
            .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
        };

        match matched {
            Some(user) => {
                log::info!("🔑 로컬 로그인 성공: {}", user.username);
                Ok(user)
            }
            None => {
                log::info!("로컬 로그인 실패: {}", form.username);
                Err(AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호".to_string()))
            }
        }
    }

    /// 프로바이더 ID로 사용자를 찾고, 없으면 새로 만듭니다.
    ///
    /// 같은 프로바이더 ID로 동시에 첫 로그인이 일어나 `create`가 충돌하면
    /// 먼저 생성된 레코드를 다시 읽어 반환하므로 레코드는 하나만 남습니다.
    pub async fn find_or_create(&self, profile: &ProviderProfile) -> AppResult<User> {
        if profile.provider == AuthProvider::Local {
            return Err(AppError::ValidationError("로컬 계정은 find-or-create 대상이 아닙니다".to_string()));
        }

        if let Some(user) = self.user_store
            .find_by_provider_id(profile.provider, &profile.id)
            .await?
        {
            log::info!("🔑 {} 로그인: {}", profile.provider.as_str(), profile.id);
            return Ok(user);
        }

        match self.user_store
            .create(User::new_federated(profile.provider, profile.id.clone()))
            .await
        {
            Ok(user) => {
                log::info!(
                    "✅ 새 {} 사용자 생성: {} ({})",
                    profile.provider.as_str(),
                    profile.id,
                    profile.display_name.as_deref().unwrap_or("-")
                );
                Ok(user)
            }
            Err(AppError::ConflictError(_)) => {
                log::debug!("동시 생성 충돌, 기존 레코드 재조회: {}", profile.id);
                self.user_store
                    .find_by_provider_id(profile.provider, &profile.id)
                    .await?
                    .ok_or_else(|| AppError::InternalError(
                        "충돌 이후 사용자를 찾을 수 없습니다".to_string(),
                    ))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.user_store.find_by_id(id).await
    }

    /// 호출자의 시크릿을 덮어씁니다.
    ///
    /// 세션에는 있지만 저장소에서 사라진 사용자는 `NotFound`
    pub async fn submit_secret(&self, user_id: &str, form: &SubmitSecretForm) -> AppResult<User> {
        form.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let user = self.user_store
            .update_secret(user_id, &form.secret)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자 {}", user_id)))?;

        log::info!("📝 시크릿 저장: {}", user_id);
        Ok(user)
    }

    /// 공개 목록에 표시할 시크릿들
    pub async fn list_secrets(&self) -> AppResult<Vec<String>> {
        let users = self.user_store.find_with_secret().await?;

        Ok(users
            .into_iter()
            .filter_map(|u| u.secret.filter(|s| !s.is_empty()))
            .collect())
    }
}

fn password_matches(password: &str, candidate: &User) -> bool {
    let Some(password_hash) = candidate.password_hash.as_deref() else {
        return false;
    };

    match bcrypt::verify(password, password_hash) {
        Ok(matched) => matched,
        Err(e) => {
            log::warn!("저장된 패스워드 해시 검증 실패 ({}): {}", candidate.username, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use mongodb::bson::oid::ObjectId;
    use crate::repositories::users::InMemoryUserRepository;

    /// 다른 요청이 먼저 같은 프로바이더 ID로 사용자를 만든 상황을 흉내 내는 저장소
    ///
    /// 첫 `find_by_provider_id`는 `None`, 이후에는 `winner`를 반환하고
    /// `create`는 항상 충돌합니다.
    struct RacingUserStore {
        winner: Option<User>,
        lookups: AtomicUsize,
        creates: AtomicUsize,
    }

    impl RacingUserStore {
        fn new(winner: Option<User>) -> Self {
            Self {
                winner,
                lookups: AtomicUsize::new(0),
                creates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl UserStore for RacingUserStore {
        async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
            Ok(None)
        }

        async fn find_by_username(&self, _username: &str) -> AppResult<Vec<User>> {
            Ok(Vec::new())
        }

        async fn find_by_provider_id(&self, _provider: AuthProvider, _provider_id: &str) -> AppResult<Option<User>> {
            if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
                return Ok(None);
            }
            Ok(self.winner.clone())
        }

        async fn create(&self, _user: User) -> AppResult<User> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Err(AppError::ConflictError("duplicate key".to_string()))
        }

        async fn update_secret(&self, _id: &str, _secret: &str) -> AppResult<Option<User>> {
            Ok(None)
        }

        async fn find_with_secret(&self) -> AppResult<Vec<User>> {
            Ok(Vec::new())
        }
    }

    fn service() -> (UserService, Arc<InMemoryUserRepository>) {
        let store = Arc::new(InMemoryUserRepository::new());
        (UserService::new(store.clone(), 4), store)
    }

    fn credentials(username: &str, password: &str) -> CredentialsForm {
        CredentialsForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn google_profile(id: &str) -> ProviderProfile {
        ProviderProfile {
            provider: AuthProvider::Google,
            id: id.to_string(),
            display_name: None,
        }
    }

    #[actix_web::test]
    async fn test_register_then_authenticate() {
        let (service, _) = service();

        let registered = service.register(&credentials("alice", "p1")).await.unwrap();
        assert_ne!(registered.password_hash.as_deref(), Some("p1"));

        let user = service.authenticate(&credentials("alice", "p1")).await.unwrap();
        assert_eq!(user.id, registered.id);
    }

    #[actix_web::test]
    async fn test_wrong_password_is_rejected() {
        let (service, _) = service();
        service.register(&credentials("alice", "p1")).await.unwrap();

        let result = service.authenticate(&credentials("alice", "nope")).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));

        let result = service.authenticate(&credentials("nobody", "p1")).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_register_rejects_empty_fields() {
        let (service, store) = service();

        let result = service.register(&credentials("", "p1")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_username_each_password_works() {
        let (service, store) = service();
        let first = service.register(&credentials("alice", "p1")).await.unwrap();
        let second = service.register(&credentials("alice", "p2")).await.unwrap();
        assert_eq!(store.len(), 2);

        assert_eq!(service.authenticate(&credentials("alice", "p1")).await.unwrap().id, first.id);
        assert_eq!(service.authenticate(&credentials("alice", "p2")).await.unwrap().id, second.id);
    }

    #[actix_web::test]
    async fn test_federated_user_cannot_password_login() {
        let (service, _) = service();
        service.find_or_create(&google_profile("12345")).await.unwrap();

        // 페더레이션 사용자의 username은 프로바이더 ID입니다.
        let result = service.authenticate(&credentials("12345", "anything")).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_find_or_create_is_idempotent() {
        let (service, store) = service();

        let first = service.find_or_create(&google_profile("g-1")).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(first.username, "g-1");

        let second = service.find_or_create(&google_profile("g-1")).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(first.id, second.id);
    }

    #[actix_web::test]
    async fn test_submit_secret_overwrites_and_lists() {
        let (service, _) = service();
        let user = service.register(&credentials("alice", "p1")).await.unwrap();
        let id = user.id_string().unwrap();

        let form = SubmitSecretForm { secret: "first".to_string() };
        service.submit_secret(&id, &form).await.unwrap();
        let form = SubmitSecretForm { secret: "hi".to_string() };
        service.submit_secret(&id, &form).await.unwrap();

        assert_eq!(service.list_secrets().await.unwrap(), vec!["hi".to_string()]);
    }

    #[actix_web::test]
    async fn test_submit_secret_for_missing_user() {
        let (service, _) = service();
        let form = SubmitSecretForm { secret: "hi".to_string() };

        let result = service
            .submit_secret(&mongodb::bson::oid::ObjectId::new().to_hex(), &form)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_find_or_create_conflict_returns_existing_user() {
        let mut winner = User::new_federated(AuthProvider::Google, "g-1".to_string());
        winner.id = Some(ObjectId::new());

        let store = Arc::new(RacingUserStore::new(Some(winner.clone())));
        let service = UserService::new(store.clone(), 4);

        let user = service.find_or_create(&google_profile("g-1")).await.unwrap();

        assert_eq!(user.id, winner.id);
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
        assert_eq!(store.lookups.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_find_or_create_conflict_without_existing_user() {
        let store = Arc::new(RacingUserStore::new(None));
        let service = UserService::new(store.clone(), 4);

        let result = service.find_or_create(&google_profile("g-1")).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
    }
}
