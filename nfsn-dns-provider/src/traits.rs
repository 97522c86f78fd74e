//! Provider 抽象 Trait 与错误映射

use std::fmt::Display;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{DnsRecord, RecordDescriptor};

/// DNS Provider Trait
///
/// 实现必须线程安全，允许多个调用方并发使用同一实例。
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 添加记录
    ///
    /// # Arguments
    /// * `domain` - 托管的域名，如 `example.com`
    /// * `record` - 要添加的记录
    async fn add_record(&self, domain: &str, record: &RecordDescriptor) -> Result<()>;

    /// 删除记录
    ///
    /// name/type/data 必须与服务端保存的记录一致。
    async fn remove_record(&self, domain: &str, record: &RecordDescriptor) -> Result<()>;

    /// 列出记录，`filter` 中非空字段作为筛选条件
    async fn list_records(&self, domain: &str, filter: &RecordDescriptor)
    -> Result<Vec<DnsRecord>>;
}

/// 错误上下文，用于生成更具体的错误信息
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub domain: Option<String>,
    pub record_name: Option<String>,
    pub operation: Option<String>,
}

impl ErrorContext {
    pub fn new(domain: &str, operation: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            record_name: None,
            operation: Some(operation.to_string()),
        }
    }

    #[must_use]
    pub fn with_record_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.record_name = Some(name.to_string());
        }
        self
    }
}

/// 服务端原始错误响应
#[derive(Debug, Clone)]
pub struct RawApiError {
    /// HTTP 状态码
    pub status_code: u16,
    /// 状态行，如 `403 Forbidden`
    pub status: String,
    /// 响应体原文
    pub body: String,
}

impl RawApiError {
    pub fn new(status_code: u16, status: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status_code,
            status: status.into(),
            body: body.into(),
        }
    }
}

/// 原始错误到 `ProviderError` 的映射
pub trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    fn invalid_input(&self, param: &str, detail: impl Display) -> ProviderError {
        ProviderError::InvalidInput {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }

    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::RequestRejected {
            provider: self.provider_name().to_string(),
            status: raw.status,
            raw_message: raw.body,
        }
    }
}
