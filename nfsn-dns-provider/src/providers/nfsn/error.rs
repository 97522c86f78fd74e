//! NFSN 错误映射

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{NFSN_PROVIDER, NfsnProvider};

/// NFSN 错误响应体
#[derive(Debug, Deserialize)]
struct NfsnErrorBody {
    error: String,
    #[serde(default)]
    debug: Option<String>,
}

/// 按 HTTP 状态码映射；响应体原样保留在错误中
impl ProviderErrorMapper for NfsnProvider {
    fn provider_name(&self) -> &'static str {
        NFSN_PROVIDER
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let operation = context.operation.as_deref().unwrap_or_default();
        let domain = context.domain.as_deref().unwrap_or_default();
        let record_name = context.record_name.as_deref().unwrap_or("@");

        match serde_json::from_str::<NfsnErrorBody>(&raw.body) {
            Ok(body) => log::error!(
                "[{}] {operation} {record_name}/{domain} 失败: {} - {} {}",
                self.provider_name(),
                raw.status,
                body.error,
                body.debug.unwrap_or_default()
            ),
            Err(_) => log::error!(
                "[{}] {operation} {record_name}/{domain} 失败: {}",
                self.provider_name(),
                raw.status
            ),
        }

        match raw.status_code {
            // 认证错误
            401 | 403 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                status: raw.status,
                raw_message: raw.body,
            },
            // 其他错误 fallback
            _ => self.unknown_error(raw),
        }
    }
}
