//! NFSN HTTP 请求方法

use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{FORM_CONTENT_TYPE, NFSN_AUTH_HEADER, NfsnProvider};

impl NfsnProvider {
    /// 构造 `{base}/dns/{domain}/{operation}`
    pub(crate) fn endpoint(&self, domain: &str, operation: &str) -> Result<Url> {
        if domain.is_empty() {
            return Err(self.invalid_input("domain", "域名不能为空"));
        }
        if domain
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(self.invalid_input("domain", format!("域名包含非法字符: {domain:?}")));
        }
        // 空 label 会让 `.`、`..` 这类路径段被 Url 归一化掉
        if domain.split('.').any(str::is_empty) {
            return Err(self.invalid_input("domain", format!("域名包含空 label: {domain:?}")));
        }

        let path = format!(
            "{}/dns/{domain}/{operation}",
            self.base_url.path().trim_end_matches('/')
        );

        let mut url = self.base_url.clone();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    /// 执行签名后的 POST 请求，200 时返回响应体
    ///
    /// 每次调用都重新签名；失败不重试。
    pub(crate) async fn post(
        &self,
        domain: &str,
        operation: &str,
        body: String,
        ctx: ErrorContext,
    ) -> Result<String> {
        let url = self.endpoint(domain, operation)?;
        let authentication = self.signer.sign(url.path(), &body);

        log::debug!("Request Body: {body}");

        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(NFSN_AUTH_HEADER, authentication)
            .body(body);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", url.as_str())
                .await?;

        if status != StatusCode::OK {
            return Err(self.map_error(
                RawApiError::new(status.as_u16(), status.to_string(), response_text),
                ctx,
            ));
        }

        Ok(response_text)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::error::ProviderError;
    use crate::types::Credentials;

    use super::*;

    fn provider(base_url: &str) -> NfsnProvider {
        NfsnProvider::with_config(
            Credentials::new("testuser", "secret"),
            ClientConfig::default().with_base_url(base_url),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_default_base() {
        let url = provider("https://api.nearlyfreespeech.net")
            .endpoint("example.com", "addRR")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.nearlyfreespeech.net/dns/example.com/addRR"
        );
        assert_eq!(url.path(), "/dns/example.com/addRR");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = provider("http://localhost:8080/nfsn/")
            .endpoint("example.com", "removeRR")
            .unwrap();
        assert_eq!(url.path(), "/nfsn/dns/example.com/removeRR");
    }

    #[test]
    fn test_endpoint_rejects_bad_domain() {
        let provider = provider("https://api.nearlyfreespeech.net");
        for domain in ["", "example.com/../x", "exa mple.com", "example.com?a=b"] {
            let err = provider.endpoint(domain, "addRR").unwrap_err();
            assert!(matches!(err, ProviderError::InvalidInput { .. }), "{domain}");
        }
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let provider = provider("https://api.nearlyfreespeech.net");
        for domain in [
            ".",
            "..",
            "%2e%2e",
            "%2E.",
            "example..com",
            ".example.com",
            "example.com.",
            "..\\x",
        ] {
            let err = provider.endpoint(domain, "addRR").unwrap_err();
            assert!(matches!(err, ProviderError::InvalidInput { .. }), "{domain}");
        }
    }

    #[test]
    fn test_endpoint_accepts_subdomain_zone() {
        let url = provider("https://api.nearlyfreespeech.net")
            .endpoint("sub.example-1.co.uk", "listRRs")
            .unwrap();
        assert_eq!(url.path(), "/dns/sub.example-1.co.uk/listRRs");
    }
}
