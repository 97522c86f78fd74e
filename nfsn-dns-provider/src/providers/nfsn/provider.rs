//! NFSN `DnsProvider` 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{DnsRecord, RecordDescriptor};

use super::NfsnProvider;

#[async_trait]
impl DnsProvider for NfsnProvider {
    async fn add_record(&self, domain: &str, record: &RecordDescriptor) -> Result<()> {
        let ctx = ErrorContext::new(domain, "addRR").with_record_name(&record.name);
        self.post(domain, "addRR", record.to_form_body(), ctx).await?;

        log::info!(
            "[{}] 已添加 {} 记录 {} ({domain})",
            self.provider_name(),
            record.record_type,
            display_name(&record.name)
        );
        Ok(())
    }

    async fn remove_record(&self, domain: &str, record: &RecordDescriptor) -> Result<()> {
        let ctx = ErrorContext::new(domain, "removeRR").with_record_name(&record.name);
        self.post(domain, "removeRR", record.to_form_body(), ctx).await?;

        log::info!(
            "[{}] 已删除 {} 记录 {} ({domain})",
            self.provider_name(),
            record.record_type,
            display_name(&record.name)
        );
        Ok(())
    }

    async fn list_records(
        &self,
        domain: &str,
        filter: &RecordDescriptor,
    ) -> Result<Vec<DnsRecord>> {
        let ctx = ErrorContext::new(domain, "listRRs").with_record_name(&filter.name);
        let response_text = self
            .post(domain, "listRRs", filter.to_form_body(), ctx)
            .await?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "@" } else { name }
}
