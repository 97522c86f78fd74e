//! Provider 共用的摘要工具

use sha1::{Digest, Sha1};

/// SHA-1 摘要，小写十六进制
pub(crate) fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}
