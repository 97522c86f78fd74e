//! 通用 HTTP 请求处理
//!
//! 统一发送请求、日志记录、读取响应；签名由 Provider 自己完成后再交给这里。

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;

/// HTTP 工具函数集
pub struct HttpUtils;

impl HttpUtils {
    /// 执行 HTTP 请求并返回状态码和响应文本
    ///
    /// # Arguments
    /// * `request_builder` - 已配置好的请求构造器（包含 URL、headers、body）
    /// * `provider_name` - Provider 名称（用于日志和错误）
    /// * `method_name` - 请求方法名（用于日志）
    /// * `url` - 请求地址（用于日志）
    ///
    /// # Returns
    /// * `Ok((status, response_text))`
    /// * `Err(ProviderError::Timeout)` - 超过客户端超时
    /// * `Err(ProviderError::NetworkError)` - 其他网络错误
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(StatusCode, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| Self::transport_error(provider_name, &e))?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| Self::transport_error(provider_name, &e))?;

        log::debug!("[{provider_name}] Response Body: {response_text}");

        Ok((status, response_text))
    }

    /// 解析 JSON 响应
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON 解析失败: {e}");
            log::error!("[{provider_name}] 原始响应: {response_text}");
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    fn transport_error(provider_name: &str, err: &reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            log::warn!("[{provider_name}] 请求超时: {err}");
            ProviderError::Timeout {
                provider: provider_name.to_string(),
                detail: err.to_string(),
            }
        } else {
            ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: err.to_string(),
            }
        }
    }
}
