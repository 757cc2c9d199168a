//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 세션 저장소, 서버, 환경 및 보안 관련 설정을 관리합니다.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 있으면 그 값을, 없으면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    Memory,
    Mongo,
    Redis,
}

pub struct StorageConfig;

impl StorageConfig {
    /// 사용자 저장소: `mongo`(기본) 또는 `memory`
    pub fn user_store() -> StoreBackend {
        match env::var("USER_STORE").unwrap_or_default().to_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }

    /// 세션 저장소: `memory`(기본) 또는 `redis`
    pub fn session_store() -> StoreBackend {
        match env::var("SESSION_STORE").unwrap_or_default().to_lowercase().as_str() {
            "redis" => StoreBackend::Redis,
            _ => StoreBackend::Memory,
        }
    }
}
