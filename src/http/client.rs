use crate::domain::model::{InquiryReceipt, ServiceInquiry};
use crate::domain::ports::InquiryTransport;
use crate::http::wire::{SubmitAck, SubmitFault, SubmitRejection};
use crate::utils::error::{AgencyError, Result};
use crate::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Safe default for a user-facing form submission.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CONTACT_PATH: &str = "/api/contact";

/// Submits inquiries to a running agency API over HTTP.
pub struct HttpInquiryTransport {
    client: Client,
    contact_url: String,
}

impl HttpInquiryTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("endpoint", base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            contact_url: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        })
    }
}

impl InquiryTransport for HttpInquiryTransport {
    async fn submit(&self, inquiry: &ServiceInquiry) -> Result<InquiryReceipt> {
        tracing::debug!("Posting inquiry to: {}", self.contact_url);
        let response = self.client.post(&self.contact_url).json(inquiry).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            let ack: SubmitAck = response.json().await?;
            return Ok(ack.data);
        }

        if status == StatusCode::BAD_REQUEST {
            let rejection: SubmitRejection = response.json().await?;
            return Err(AgencyError::RejectedError {
                message: rejection.message,
                errors: rejection.errors,
            });
        }

        // 500 and anything unexpected. The body may not be our envelope at
        // all (gateways, proxies), so fall back to the status line.
        let message = match response.json::<SubmitFault>().await {
            Ok(fault) => fault.error,
            Err(_) => format!("unexpected status {}", status),
        };
        Err(AgencyError::ServerError { message })
    }
}
