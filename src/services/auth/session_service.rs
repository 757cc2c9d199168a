//! # 세션 관리 서비스
//!
//! 서명된 세션 쿠키와 서버 측 세션 저장소를 연결합니다.
//!
//! ## 쿠키
//!
//! - 이름: `SESSION_COOKIE_NAME` (기본값 `secrets.sid`)
//! - 값: 무작위 세션 ID + HMAC 서명 (`SESSION_SECRET`에서 유도한 키)
//! - 속성: `HttpOnly`, `SameSite=Lax`, `Path=/`, `Max-Age`, 스테이징/운영 환경에서 `Secure`
//!
//! ## 세션 수명
//!
//! ```text
//! 익명 ──(OAuth 시작)──► pending_oauth만 있는 세션
//!      ──(로그인 성공)──► 새 세션 ID로 교체, user_id 저장
//!      ──(로그아웃)────► 세션 삭제, 쿠키 만료
//! ```
//!
//! 저장할 값이 없으면 세션을 만들지 않습니다.

use std::sync::Arc;
use actix_web::cookie::{time::Duration, Cookie, CookieJar, Key, SameSite};
use sha2::{Digest, Sha512};
use uuid::Uuid;
use crate::{
    config::SessionSettings,
    domain::models::auth::{PendingOAuth, SessionContext, SessionData},
    errors::AppResult,
    repositories::sessions::SessionStore,
};

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    key: Key,
    cookie_name: String,
    ttl_seconds: u64,
    secure_cookie: bool,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, settings: &SessionSettings) -> Self {
        // Key는 64바이트 이상의 마스터 키가 필요하므로 SHA-512로 늘립니다.
        let digest = Sha512::digest(settings.secret.as_bytes());

        Self {
            store,
            key: Key::from(digest.as_slice()),
            cookie_name: settings.cookie_name.clone(),
            ttl_seconds: settings.ttl_seconds,
            secure_cookie: settings.secure_cookie,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// 요청 쿠키에서 세션을 복원합니다.
    ///
    /// 서명이 틀리거나 세션이 만료/삭제되었으면 `None`
    pub async fn resolve(&self, cookie: &Cookie<'_>) -> AppResult<Option<SessionContext>> {
        let Some(session_id) = self.verify(cookie) else {
            log::debug!("세션 쿠키 서명 검증 실패");
            return Ok(None);
        };

        let data = self.store.load(&session_id).await?;

        Ok(data.map(|data| SessionContext { session_id, data }))
    }

    /// 로그인 성공 시 새 세션을 발급합니다.
    ///
    /// 기존 세션은 삭제되고 새 ID가 쓰이므로 세션 고정 공격이 통하지 않습니다.
    pub async fn establish(&self, current_session_id: Option<&str>, user_id: &str) -> AppResult<Cookie<'static>> {
        if let Some(old_id) = current_session_id {
            self.store.destroy(old_id).await?;
        }

        let session_id = new_session_id();
        self.store
            .save(&session_id, &SessionData::for_user(user_id.to_string()), self.ttl_seconds)
            .await?;

        log::debug!("세션 발급: user={}", user_id);
        Ok(self.signed_cookie(&session_id))
    }

    /// OAuth 시작 시 state/verifier를 세션에 보관합니다.
    ///
    /// 기존 세션이 있으면 그 세션에, 없으면 새 세션에 저장합니다.
    pub async fn begin_oauth(&self, current: Option<&SessionContext>, pending: PendingOAuth) -> AppResult<Cookie<'static>> {
        let (session_id, mut data) = match current {
            Some(ctx) => (ctx.session_id.clone(), ctx.data.clone()),
            None => (new_session_id(), SessionData::default()),
        };

        data.pending_oauth = Some(pending);
        self.store.save(&session_id, &data, self.ttl_seconds).await?;

        Ok(self.signed_cookie(&session_id))
    }

    /// 보관해 둔 OAuth 상태를 꺼내고 세션에서 지웁니다.
    ///
    /// state는 한 번만 사용할 수 있습니다.
    pub async fn take_pending_oauth(&self, current: &SessionContext) -> AppResult<Option<PendingOAuth>> {
        let mut data = current.data.clone();
        let pending = data.pending_oauth.take();

        if pending.is_none() {
            return Ok(None);
        }

        if data.is_empty() {
            self.store.destroy(&current.session_id).await?;
        } else {
            self.store.save(&current.session_id, &data, self.ttl_seconds).await?;
        }

        Ok(pending)
    }

    pub async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.store.destroy(session_id).await
    }

    /// 브라우저의 세션 쿠키를 지우는 만료 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookie)
            .finish();
        cookie.make_removal();
        cookie
    }

    fn signed_cookie(&self, session_id: &str) -> Cookie<'static> {
        let cookie = Cookie::build(self.cookie_name.clone(), session_id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookie)
            .max_age(Duration::seconds(self.ttl_seconds as i64))
            .finish();

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key).add(cookie);

        match jar.get(&self.cookie_name) {
            Some(signed) => signed.clone(),
            None => Cookie::new(self.cookie_name.clone(), String::new()),
        }
    }

    fn verify(&self, cookie: &Cookie<'_>) -> Option<String> {
        let mut jar = CookieJar::new();
        jar.add_original(Cookie::new(self.cookie_name.clone(), cookie.value().to_string()));

        jar.signed(&self.key)
            .get(&self.cookie_name)
            .map(|verified| verified.value().to_string())
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::repositories::sessions::MemorySessionStore;

    fn settings(secret: &str) -> SessionSettings {
        SessionSettings {
            secret: secret.to_string(),
            cookie_name: "secrets.sid".to_string(),
            ttl_seconds: 3600,
            secure_cookie: false,
        }
    }

    fn service() -> (SessionService, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        (SessionService::new(store.clone(), &settings("test-secret")), store)
    }

    #[actix_web::test]
    async fn test_establish_and_resolve() {
        let (service, _) = service();

        let cookie = service.establish(None, "user-1").await.unwrap();
        assert_eq!(cookie.name(), "secrets.sid");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));

        let ctx = service.resolve(&cookie).await.unwrap().unwrap();
        assert_eq!(ctx.data.user_id.as_deref(), Some("user-1"));
        // 쿠키 값은 세션 ID 그대로가 아니라 서명이 붙은 값입니다.
        assert_ne!(cookie.value(), ctx.session_id);
    }

    #[actix_web::test]
    async fn test_tampered_cookie_is_anonymous() {
        let (service, _) = service();
        let cookie = service.establish(None, "user-1").await.unwrap();

        let forged = Cookie::new("secrets.sid", format!("{}x", cookie.value()));
        assert!(service.resolve(&forged).await.unwrap().is_none());

        let raw = Cookie::new("secrets.sid", "0123456789abcdef");
        assert!(service.resolve(&raw).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_cookie_from_other_secret_is_rejected() {
        let store: Arc<MemorySessionStore> = Arc::new(MemorySessionStore::new());
        let ours = SessionService::new(store.clone(), &settings("ours"));
        let theirs = SessionService::new(store, &settings("theirs"));

        let cookie = theirs.establish(None, "user-1").await.unwrap();
        assert!(ours.resolve(&cookie).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_establish_replaces_previous_session() {
        let (service, store) = service();

        let first = service.establish(None, "user-1").await.unwrap();
        let first_ctx = service.resolve(&first).await.unwrap().unwrap();

        let second = service.establish(Some(&first_ctx.session_id), "user-2").await.unwrap();
        assert!(service.resolve(&first).await.unwrap().is_none());
        assert!(service.resolve(&second).await.unwrap().is_some());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_pending_oauth_is_single_use() {
        let (service, store) = service();
        let pending = PendingOAuth {
            provider: AuthProvider::Twitter,
            state: "st".to_string(),
            pkce_verifier: Some("v".to_string()),
        };

        let cookie = service.begin_oauth(None, pending.clone()).await.unwrap();
        let ctx = service.resolve(&cookie).await.unwrap().unwrap();

        assert_eq!(service.take_pending_oauth(&ctx).await.unwrap(), Some(pending));
        // 사용자 정보가 없는 세션은 비워지면 삭제됩니다.
        assert!(store.is_empty());
        assert!(service.resolve(&cookie).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_begin_oauth_keeps_logged_in_user() {
        let (service, _) = service();
        let cookie = service.establish(None, "user-1").await.unwrap();
        let ctx = service.resolve(&cookie).await.unwrap().unwrap();

        let pending = PendingOAuth {
            provider: AuthProvider::Google,
            state: "st".to_string(),
            pkce_verifier: None,
        };
        let cookie = service.begin_oauth(Some(&ctx), pending).await.unwrap();
        let ctx = service.resolve(&cookie).await.unwrap().unwrap();
        assert_eq!(ctx.data.user_id.as_deref(), Some("user-1"));

        service.take_pending_oauth(&ctx).await.unwrap();
        let ctx = service.resolve(&cookie).await.unwrap().unwrap();
        assert_eq!(ctx.data, SessionData::for_user("user-1".to_string()));
    }

    #[test]
    fn test_removal_cookie_expires() {
        let (service, _) = service();
        let cookie = service.removal_cookie();

        assert_eq!(cookie.name(), "secrets.sid");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
