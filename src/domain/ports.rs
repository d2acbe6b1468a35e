use crate::domain::model::{InquiryReceipt, ServiceInquiry};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Client-side transport that carries a validated inquiry to the agency API.
pub trait InquiryTransport: Send + Sync {
    fn submit(
        &self,
        inquiry: &ServiceInquiry,
    ) -> impl std::future::Future<Output = Result<InquiryReceipt>> + Send;
}

/// Server-side destination for inquiries that passed validation.
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn record(&self, inquiry: &ServiceInquiry, receipt: &InquiryReceipt) -> Result<()>;
}

pub trait SiteSettings: Send + Sync {
    fn agency_name(&self) -> &str;
    fn bind_addr(&self) -> &str;
    fn max_body_bytes(&self) -> usize;
}
