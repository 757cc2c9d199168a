use crate::config::AuthProvider;

/// 프로바이더에 상관없이 find-or-create에 필요한 최소 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    /// 프로바이더가 발급한 안정적인 사용자 ID
    pub id: String,
    pub display_name: Option<String>,
}
