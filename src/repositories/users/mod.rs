//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_store::UserStore) trait과 두 가지 구현체를 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - `users` 컬렉션
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 테스트/데모용

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::UserStore;
pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;
