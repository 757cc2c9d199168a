//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 세션 저장소, 서버, 환경 관련 설정
//! - [`auth_config`] - 세션 쿠키, OAuth 프로바이더 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="secrets_dev"
//! export USER_STORE="mongo"        # mongo | memory
//! export SESSION_STORE="memory"    # memory | redis
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export SESSION_SECRET="long-random-secret"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
