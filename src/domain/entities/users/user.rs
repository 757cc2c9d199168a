//! User Entity Implementation
//!
//! 로컬 인증과 페더레이션(Google, Twitter) 인증을 모두 표현하는 단일 사용자 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서 하나에 대응합니다. 사용자명은 유일하지 않으며,
/// 페더레이션 사용자는 프로바이더 ID를 사용자명으로 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 핸들 (중복 허용)
    pub username: String,
    /// bcrypt 해시 (로컬 사용자만 존재)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    /// 사용자가 제출한 시크릿 (제출 전에는 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (사용자명/패스워드)
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            password_hash: Some(password_hash),
            google_id: None,
            twitter_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 첫 페더레이션 로그인 시 생성되는 사용자
    ///
    /// 사용자명은 프로바이더 ID 그대로 사용합니다.
    pub fn new_federated(provider: AuthProvider, provider_id: String) -> Self {
        let now = DateTime::now();
        let mut user = Self {
            id: None,
            username: provider_id.clone(),
            password_hash: None,
            google_id: None,
            twitter_id: None,
            secret: None,
            created_at: now,
            updated_at: now,
        };

        match provider {
            AuthProvider::Google => user.google_id = Some(provider_id),
            AuthProvider::Twitter => user.twitter_id = Some(provider_id),
            AuthProvider::Local => {}
        }

        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 프로바이더에서의 사용자 ID
    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::Twitter => self.twitter_id.as_deref(),
        }
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// 공개 목록에 노출될 시크릿이 있는지 확인
    pub fn has_secret(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_federated_uses_provider_id_as_username() {
        let user = User::new_federated(AuthProvider::Twitter, "1234".to_string());

        assert_eq!(user.username, "1234");
        assert_eq!(user.provider_id(AuthProvider::Twitter), Some("1234"));
        assert_eq!(user.provider_id(AuthProvider::Google), None);
        assert!(!user.can_authenticate_with_password());
    }

    #[test]
    fn test_secret_absent_until_submitted() {
        let mut user = User::new_local("alice".to_string(), "hash".to_string());
        assert!(!user.has_secret());

        user.secret = Some(String::new());
        assert!(!user.has_secret());

        user.secret = Some("hi".to_string());
        assert!(user.has_secret());
    }

    #[test]
    fn test_optional_fields_are_not_serialized() {
        let user = User::new_local("alice".to_string(), "hash".to_string());
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert!(doc.contains_key("password_hash"));
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("google_id"));
        assert!(!doc.contains_key("secret"));
    }
}
