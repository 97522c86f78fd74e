//! NFSN `X-NFSN-Authentication` 签名
//!
//! 头部格式 `login;timestamp;salt;hash`，其中
//! `hash = SHA1(login;timestamp;salt;api_key;request_path;SHA1(body))`。
//! 每次请求重新生成 salt 与 timestamp，签名不可复用。

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::providers::common::sha1_hex;
use crate::types::Credentials;

/// salt 长度
pub const SALT_LENGTH: usize = 16;

/// 时间来源
pub trait Clock: Send + Sync {
    /// 当前 Unix 时间（秒）
    fn unix_timestamp(&self) -> i64;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 固定时间，用于测试
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

/// salt 来源
pub trait SaltSource: Send + Sync {
    /// 生成 `SALT_LENGTH` 个 `[a-zA-Z0-9]` 字符
    fn salt(&self) -> String;
}

/// 线程本地 CSPRNG，每次调用独立取值
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSalt;

impl SaltSource for RandomSalt {
    fn salt(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SALT_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// 固定 salt，用于测试
#[derive(Debug, Clone)]
pub struct FixedSalt(pub String);

impl SaltSource for FixedSalt {
    fn salt(&self) -> String {
        self.0.clone()
    }
}

/// 按给定的 timestamp 和 salt 计算签名头
pub fn compute_signature(
    login: &str,
    api_key: &str,
    timestamp: i64,
    salt: &str,
    request_path: &str,
    body: &str,
) -> String {
    let body_hash = sha1_hex(body.as_bytes());
    let hash_input = format!("{login};{timestamp};{salt};{api_key};{request_path};{body_hash}");
    let hash = sha1_hex(hash_input.as_bytes());

    format!("{login};{timestamp};{salt};{hash}")
}

/// 请求签名器
///
/// 无可变状态，可在多个任务间共享。
#[derive(Clone)]
pub struct Signer {
    credentials: Credentials,
    clock: Arc<dyn Clock>,
    salt_source: Arc<dyn SaltSource>,
}

impl Signer {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            clock: Arc::new(SystemClock),
            salt_source: Arc::new(RandomSalt),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_salt_source(mut self, salt_source: Arc<dyn SaltSource>) -> Self {
        self.salt_source = salt_source;
        self
    }

    /// 为一次请求生成签名头
    ///
    /// # Arguments
    /// * `request_path` - URL 的绝对路径部分（不含 scheme、host、query）
    /// * `body` - 将要发送的请求体原文
    pub fn sign(&self, request_path: &str, body: &str) -> String {
        compute_signature(
            &self.credentials.login,
            &self.credentials.api_key,
            self.clock.unix_timestamp(),
            &self.salt_source.salt(),
            request_path,
            body,
        )
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
