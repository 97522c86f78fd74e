//! 公共类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// API 凭证
///
/// 构造后不可变；`Debug` 输出不包含 API Key。
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("api_key", &"***")
            .finish()
    }
}

/// 要添加/删除的 DNS 记录
///
/// 空字符串与为 0 的 TTL 视为未设置，编码请求体时整体省略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// 相对于域名的子域标签，可为空（表示域名本身）
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub data: String,
    /// 秒，0 表示不指定
    #[serde(default)]
    pub ttl: u32,
}

impl RecordDescriptor {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            data: data.into(),
            ttl: 0,
        }
    }

    /// TXT 记录，DNS-01 challenge 的常见形式
    pub fn txt(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(name, "TXT", data)
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// 按 name, type, data, ttl 的顺序列出非空字段
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if !self.record_type.is_empty() {
            pairs.push(("type", self.record_type.clone()));
        }
        if !self.data.is_empty() {
            pairs.push(("data", self.data.clone()));
        }
        if self.ttl != 0 {
            pairs.push(("ttl", self.ttl.to_string()));
        }
        pairs
    }

    /// 编码为 `application/x-www-form-urlencoded` 请求体
    pub fn to_form_body(&self) -> String {
        self.form_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// `listRRs` 返回的记录
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    #[serde(default)]
    pub ttl: u32,
    /// 记录归属，如 `member`、`system`
    #[serde(default)]
    pub scope: Option<String>,
}

impl From<&DnsRecord> for RecordDescriptor {
    fn from(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type.clone(),
            data: record.data.clone(),
            ttl: record.ttl,
        }
    }
}

/// 计算 FQDN 相对于 zone 的记录名
///
/// `_acme-challenge.www.example.com.` 在 `example.com` 下得到 `_acme-challenge.www`；
/// FQDN 等于 zone 时返回空串，不属于该 zone 时返回 `None`。
pub fn relative_name(fqdn: &str, zone: &str) -> Option<String> {
    let fqdn = fqdn.trim_end_matches('.');
    let zone = zone.trim_end_matches('.');

    if fqdn.eq_ignore_ascii_case(zone) {
        return Some(String::new());
    }

    let split = fqdn.len().checked_sub(zone.len() + 1)?;
    let suffix = fqdn.get(split..)?.strip_prefix('.')?;
    let prefix = &fqdn[..split];
    if suffix.eq_ignore_ascii_case(zone) && !prefix.is_empty() {
        Some(prefix.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_omits_empty_fields() {
        let record = RecordDescriptor::new("", "TXT", "value");
        assert_eq!(record.to_form_body(), "type=TXT&data=value");
    }

    #[test]
    fn test_form_body_field_order() {
        let record = RecordDescriptor::txt("_acme-challenge", "tok123").with_ttl(300);
        assert_eq!(
            record.to_form_body(),
            "name=_acme-challenge&type=TXT&data=tok123&ttl=300"
        );
    }

    #[test]
    fn test_form_body_percent_encodes_values() {
        let record = RecordDescriptor::txt("", "v=spf1 include:a.example ~all");
        assert_eq!(
            record.to_form_body(),
            "type=TXT&data=v%3Dspf1%20include%3Aa.example%20~all"
        );
    }

    #[test]
    fn test_empty_descriptor_encodes_to_empty_body() {
        assert_eq!(RecordDescriptor::default().to_form_body(), "");
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = Credentials::new("alice", "super-secret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_relative_name() {
        assert_eq!(
            relative_name("_acme-challenge.www.example.com.", "example.com"),
            Some("_acme-challenge.www".to_string())
        );
        assert_eq!(
            relative_name("_acme-challenge.Example.COM", "example.com."),
            Some("_acme-challenge".to_string())
        );
        assert_eq!(relative_name("example.com.", "example.com"), Some(String::new()));
        assert_eq!(relative_name("www.other.com", "example.com"), None);
        assert_eq!(relative_name("badexample.com", "example.com"), None);
        assert_eq!(relative_name("com", "example.com"), None);
    }

    #[test]
    fn test_dns_record_parse() {
        let json = r#"[{"name":"www","type":"A","data":"192.0.2.1","ttl":3600,"scope":"member"},
                       {"name":"","type":"NS","data":"ns.phx1.nearlyfreespeech.net.","ttl":3600,"scope":"system"}]"#;
        let records: Vec<DnsRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].record_type, "A");
        assert_eq!(records[1].scope.as_deref(), Some("system"));

        let descriptor = RecordDescriptor::from(&records[0]);
        assert_eq!(descriptor.to_form_body(), "name=www&type=A&data=192.0.2.1&ttl=3600");
    }
}
