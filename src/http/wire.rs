//! Response bodies for the contact endpoint, shared by the server handlers
//! and the client transport.

use crate::domain::model::{FieldError, InquiryReceipt};
use serde::{Deserialize, Serialize};

pub const ACK_MESSAGE: &str = "Form submitted successfully";
pub const REJECTION_MESSAGE: &str = "Validation error";
pub const FAULT_MESSAGE: &str = "An error occurred while processing your request";

/// 200 body: the inquiry was accepted and a receipt issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub success: bool,
    pub message: String,
    pub data: InquiryReceipt,
}

impl SubmitAck {
    pub fn new(receipt: InquiryReceipt) -> Self {
        Self {
            success: true,
            message: ACK_MESSAGE.to_string(),
            data: receipt,
        }
    }
}

/// 400 body: the candidate failed validation; every violation is listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRejection {
    pub success: bool,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl SubmitRejection {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: REJECTION_MESSAGE.to_string(),
            errors,
        }
    }
}

/// 500 body: the request could not be processed. `error` carries a short
/// description only, never internal detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitFault {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl SubmitFault {
    pub fn new(detail: &str) -> Self {
        Self {
            success: false,
            message: FAULT_MESSAGE.to_string(),
            error: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_ack_wire_shape() {
        let timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let ack = SubmitAck::new(InquiryReceipt {
            inquiry_id: "INQ-1748779200000".to_string(),
            timestamp,
        });

        let json = serde_json::to_value(&ack).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Form submitted successfully");
        assert_eq!(json["data"]["inquiryId"], "INQ-1748779200000");
        assert!(json["data"]["timestamp"]
            .as_str()
            .unwrap()
            .starts_with("2025-06-01T12:00:00"));
    }

    #[test]
    fn test_rejection_wire_shape() {
        let rejection =
            SubmitRejection::new(vec![FieldError::new("email", "Invalid email address")]);

        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Validation error");
        assert_eq!(json["errors"][0]["field"], "email");
        assert_eq!(json["errors"][0]["message"], "Invalid email address");
    }

    #[test]
    fn test_fault_wire_shape() {
        let fault = SubmitFault::new("sink unavailable");

        let json = serde_json::to_value(&fault).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "An error occurred while processing your request"
        );
        assert_eq!(json["error"], "sink unavailable");
    }
}
