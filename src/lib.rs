pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use crate::config::{site_config::SiteConfig, CliConfig};
pub use crate::core::form::{FormController, SubmitOutcome};
pub use crate::core::validate::validate_inquiry;
pub use crate::domain::model::{ServiceCategory, ServiceInquiry};
pub use crate::http::{client::HttpInquiryTransport, server::LogSink};
pub use crate::utils::error::{AgencyError, Result};
