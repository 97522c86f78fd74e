//! NearlyFreeSpeech.NET DNS Provider
//! 参考: <https://members.nearlyfreespeech.net/wiki/API/Introduction>

mod error;
mod http;
mod provider;
pub mod sign;

use std::sync::Arc;

use reqwest::{Client, Url};

use crate::config::ClientConfig;
use crate::error::{ProviderError, Result};
use crate::types::Credentials;

pub use sign::{Clock, SaltSource, Signer};

pub(crate) const NFSN_PROVIDER: &str = "nfsn";
pub(crate) const NFSN_AUTH_HEADER: &str = "X-NFSN-Authentication";
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// NFSN DNS Provider
///
/// 除连接池外无可变状态，可以在多个任务间共享同一实例。
#[derive(Debug)]
pub struct NfsnProvider {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) signer: Signer,
}

impl NfsnProvider {
    /// 使用默认配置（官方地址，10 秒超时）创建
    pub fn new(login: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(login, api_key), ClientConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ProviderError::Configuration {
            provider: NFSN_PROVIDER.to_string(),
            detail: format!("无效的 base_url {}: {e}", config.base_url),
        })?;

        if config.timeout.is_zero() {
            return Err(ProviderError::Configuration {
                provider: NFSN_PROVIDER.to_string(),
                detail: "timeout 必须大于 0".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Configuration {
                provider: NFSN_PROVIDER.to_string(),
                detail: format!("创建 HTTP 客户端失败: {e}"),
            })?;

        Ok(Self {
            client,
            base_url,
            signer: Signer::new(credentials),
        })
    }

    /// 替换时间来源
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.signer = self.signer.with_clock(clock);
        self
    }

    /// 替换 salt 来源
    #[must_use]
    pub fn with_salt_source(mut self, salt_source: Arc<dyn SaltSource>) -> Self {
        self.signer = self.signer.with_salt_source(salt_source);
        self
    }
}
