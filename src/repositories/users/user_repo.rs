//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `username` (일반 인덱스, 중복 허용)
//! - `google_id`, `twitter_id` (유니크 + sparse) - 동시 첫 로그인 시 중복 생성 방지
//! - `created_at` (내림차순)

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

const COLLECTION_NAME: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// 단일 문서 단위의 원자적 읽기/수정/쓰기만 사용하며
/// 다중 문서 트랜잭션은 필요하지 않습니다.
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .name("username_idx".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        let twitter_id_index = IndexModel::builder()
            .keys(doc! { "twitter_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("twitter_id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, google_id_index, twitter_id_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ {}.{} 인덱스 준비 완료", self.db.database_name(), COLLECTION_NAME);
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Vec<User>> {
        let cursor = self.collection()
            .find(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_provider_id(&self, provider: AuthProvider, provider_id: &str) -> AppResult<Option<User>> {
        let field = provider.id_field().ok_or_else(|| {
            AppError::ValidationError(format!("{} 프로바이더는 외부 ID가 없습니다", provider.as_str()))
        })?;

        let mut filter = Document::new();
        filter.insert(field, provider_id);

        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 등록된 프로바이더 계정입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(format!("예상하지 못한 inserted_id: {}", result.inserted_id))
        })?;
        user.id = Some(inserted_id);

        Ok(user)
    }

    async fn update_secret(&self, id: &str, secret: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_with_secret(&self) -> AppResult<Vec<User>> {
        // $nin에 null을 포함하면 필드가 없는 문서도 제외됩니다.
        let cursor = self.collection()
            .find(doc! { "secret": { "$nin": [Bson::Null, ""] } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect::<Vec<User>>()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}
