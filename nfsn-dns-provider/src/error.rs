//! Provider 错误类型

use thiserror::Error;

/// 统一的 Provider 错误
///
/// 服务端拒绝类错误（`InvalidCredentials` / `RequestRejected`）同时携带
/// 状态行与原始响应体，便于排查签名或参数问题。
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 请求参数非法（发送前校验失败）
    #[error("[{provider}] 参数 {param} 非法: {detail}")]
    InvalidInput {
        provider: String,
        param: String,
        detail: String,
    },

    /// 客户端配置错误
    #[error("[{provider}] 配置错误: {detail}")]
    Configuration { provider: String, detail: String },

    /// 网络错误
    #[error("[{provider}] 网络错误: {detail}")]
    NetworkError { provider: String, detail: String },

    /// 请求超时
    #[error("[{provider}] 请求超时: {detail}")]
    Timeout { provider: String, detail: String },

    /// 认证失败 (401 / 403)
    #[error("[{provider}] 认证失败 {status}: {raw_message}")]
    InvalidCredentials {
        provider: String,
        status: String,
        raw_message: String,
    },

    /// 其他非 200 响应
    #[error("[{provider}] 请求被拒绝 {status}: {raw_message}")]
    RequestRejected {
        provider: String,
        status: String,
        raw_message: String,
    },

    /// 响应解析失败
    #[error("[{provider}] 响应解析失败: {detail}")]
    ParseError { provider: String, detail: String },
}

impl ProviderError {
    /// 服务端返回的 HTTP 状态行（仅拒绝类错误）
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::InvalidCredentials { status, .. } | Self::RequestRejected { status, .. } => {
                Some(status.as_str())
            }
            _ => None,
        }
    }

    /// 是否为超时错误
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
