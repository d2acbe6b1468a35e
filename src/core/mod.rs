pub mod form;
pub mod validate;

pub use crate::domain::model::{FieldError, InquiryReceipt, ServiceInquiry};
pub use crate::domain::ports::{InquirySink, InquiryTransport, SiteSettings};
pub use crate::utils::error::Result;
