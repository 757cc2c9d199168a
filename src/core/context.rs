//! 애플리케이션 컨텍스트 조립

use std::sync::Arc;
use crate::{
    caching::redis::RedisClient,
    config::{
        AuthProvider, GoogleOAuthConfig, PasswordConfig, SessionConfig, StorageConfig,
        StoreBackend, TwitterOAuthConfig,
    },
    db::Database,
    errors::{AppError, AppResult},
    repositories::{
        sessions::{MemorySessionStore, RedisSessionStore, SessionStore},
        users::{InMemoryUserRepository, MongoUserRepository, UserStore},
    },
    services::{
        auth::{GoogleAuthService, OAuthProvider, SessionService, TwitterAuthService},
        users::UserService,
    },
};

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
pub struct AppContext {
    pub user_service: UserService,
    pub sessions: SessionService,
    pub google: Arc<dyn OAuthProvider>,
    pub twitter: Arc<dyn OAuthProvider>,
}

impl AppContext {
    pub fn new(
        user_service: UserService,
        sessions: SessionService,
        google: Arc<dyn OAuthProvider>,
        twitter: Arc<dyn OAuthProvider>,
    ) -> Self {
        Self {
            user_service,
            sessions,
            google,
            twitter,
        }
    }

    /// 환경 변수 설정으로 저장소에 연결하고 서비스를 조립합니다.
    ///
    /// # Errors
    ///
    /// * `DatabaseError` - `USER_STORE=mongo`인데 MongoDB 연결 또는 인덱스 생성 실패
    /// * `RedisError` - `SESSION_STORE=redis`인데 Redis 연결 실패
    /// * `InternalError` - 운영 환경인데 `SESSION_SECRET` 미설정
    pub async fn from_env() -> AppResult<Self> {
        let session_settings = SessionConfig::settings()?;

        let user_store: Arc<dyn UserStore> = match StorageConfig::user_store() {
            StoreBackend::Memory => {
                log::warn!("⚠️ 인메모리 사용자 저장소 사용 중 (재시작 시 데이터 소실)");
                Arc::new(InMemoryUserRepository::new())
            }
            _ => {
                log::info!("📡 데이터베이스 연결 중...");
                let database = Arc::new(Database::new().await?);
                let repo = MongoUserRepository::new(database);
                repo.create_indexes().await?;
                Arc::new(repo)
            }
        };

        let session_store: Arc<dyn SessionStore> = match StorageConfig::session_store() {
            StoreBackend::Redis => {
                let redis = Arc::new(RedisClient::new().await?);
                Arc::new(RedisSessionStore::new(redis))
            }
            _ => {
                log::info!("인메모리 세션 저장소 사용");
                Arc::new(MemorySessionStore::new())
            }
        };

        let bcrypt_cost = PasswordConfig::bcrypt_cost();
        log::info!("🔐 bcrypt cost: {}", bcrypt_cost);

        Ok(Self::new(
            UserService::new(user_store, bcrypt_cost),
            SessionService::new(session_store, &session_settings),
            Arc::new(GoogleAuthService::new(GoogleOAuthConfig::settings())),
            Arc::new(TwitterAuthService::new(TwitterOAuthConfig::settings())),
        ))
    }

    /// 경로의 프로바이더에 해당하는 OAuth 구현
    pub fn oauth_provider(&self, provider: AuthProvider) -> AppResult<Arc<dyn OAuthProvider>> {
        match provider {
            AuthProvider::Google => Ok(self.google.clone()),
            AuthProvider::Twitter => Ok(self.twitter.clone()),
            AuthProvider::Local => Err(AppError::NotFound("local OAuth provider".to_string())),
        }
    }
}
