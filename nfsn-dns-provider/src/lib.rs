//! NearlyFreeSpeech.NET DNS API 客户端
//!
//! 通过 `addRR` / `removeRR` / `listRRs` 管理 DNS 记录，典型用途是 ACME DNS-01 验证。
//! 每个请求都携带一次性的 `X-NFSN-Authentication` 签名头。
//!
//! ```no_run
//! use nfsn_dns_provider::{DnsProvider, NfsnProvider, RecordDescriptor};
//!
//! # async fn run() -> nfsn_dns_provider::Result<()> {
//! let provider = NfsnProvider::new("login", "api-key")?;
//! let record = RecordDescriptor::txt("_acme-challenge", "token");
//! provider.add_record("example.com", &record).await?;
//! provider.remove_record("example.com", &record).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
mod http_client;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS, NFSN_API_BASE};
pub use error::{ProviderError, Result};
pub use providers::nfsn::NfsnProvider;
pub use providers::nfsn::sign::{
    Clock, FixedClock, FixedSalt, RandomSalt, SALT_LENGTH, SaltSource, Signer, SystemClock,
    compute_signature,
};
pub use traits::{DnsProvider, ErrorContext, ProviderErrorMapper, RawApiError};
pub use types::{Credentials, DnsRecord, RecordDescriptor, relative_name};
