//! Twitter `/2/users/me` 사용자 모델

use serde::Deserialize;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderProfile;

#[derive(Debug, Deserialize)]
pub struct TwitterUserInfo {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

impl From<TwitterUserInfo> for ProviderProfile {
    fn from(info: TwitterUserInfo) -> Self {
        ProviderProfile {
            provider: AuthProvider::Twitter,
            id: info.id,
            display_name: info.name.or(info.username),
        }
    }
}
