//! 客户端配置
//!
//! 只描述传输层参数；凭证与配置文件的加载由调用方负责。

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// NFSN API 地址
pub const NFSN_API_BASE: &str = "https://api.nearlyfreespeech.net";

/// 默认请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 传输配置
///
/// 配置文件中超时以秒填写（`timeout_secs`），必须大于 0。
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "deserialize_secs"
    )]
    pub timeout: Duration,
}

fn default_base_url() -> String {
    NFSN_API_BASE.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
