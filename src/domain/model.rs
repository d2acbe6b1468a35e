use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of services the agency offers. The wire identifier is the
/// kebab-case slug; matching is byte-for-byte, never case-folded.
///
/// This enum also owns the canonical slug/title/icon mapping consumed by
/// presentational collaborators, so the valid set and its display metadata
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    WebDevelopment,
    DigitalStrategy,
    UxDesign,
    MobileSolutions,
    CloudServices,
    DigitalMarketing,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::WebDevelopment,
        ServiceCategory::DigitalStrategy,
        ServiceCategory::UxDesign,
        ServiceCategory::MobileSolutions,
        ServiceCategory::CloudServices,
        ServiceCategory::DigitalMarketing,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceCategory::WebDevelopment => "web-development",
            ServiceCategory::DigitalStrategy => "digital-strategy",
            ServiceCategory::UxDesign => "ux-design",
            ServiceCategory::MobileSolutions => "mobile-solutions",
            ServiceCategory::CloudServices => "cloud-services",
            ServiceCategory::DigitalMarketing => "digital-marketing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ServiceCategory::WebDevelopment => "Web Development",
            ServiceCategory::DigitalStrategy => "Digital Strategy",
            ServiceCategory::UxDesign => "UX/UI Design",
            ServiceCategory::MobileSolutions => "Mobile Solutions",
            ServiceCategory::CloudServices => "Cloud Services",
            ServiceCategory::DigitalMarketing => "Digital Marketing",
        }
    }

    /// Outline icon identifier used by the site's category cards.
    pub fn icon(&self) -> &'static str {
        match self {
            ServiceCategory::WebDevelopment => "code",
            ServiceCategory::DigitalStrategy => "chart-bar",
            ServiceCategory::UxDesign => "color-swatch",
            ServiceCategory::MobileSolutions => "device-mobile",
            ServiceCategory::CloudServices => "cloud",
            ServiceCategory::DigitalMarketing => "chart-pie",
        }
    }

    /// Exact-match lookup over [`ServiceCategory::ALL`].
    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.slug() == value)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Project budget bracket offered on the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "10k-25k")]
    Range10kTo25k,
    #[serde(rename = "25k-50k")]
    Range25kTo50k,
    #[serde(rename = "50k-100k")]
    Range50kTo100k,
    #[serde(rename = "100k+")]
    Over100k,
}

impl Budget {
    pub const ALL: [Budget; 4] = [
        Budget::Range10kTo25k,
        Budget::Range25kTo50k,
        Budget::Range50kTo100k,
        Budget::Over100k,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Budget::Range10kTo25k => "10k-25k",
            Budget::Range25kTo50k => "25k-50k",
            Budget::Range50kTo100k => "50k-100k",
            Budget::Over100k => "100k+",
        }
    }

    /// Human-readable range shown in the form's dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Range10kTo25k => "$10,000 - $25,000",
            Budget::Range25kTo50k => "$25,000 - $50,000",
            Budget::Range50kTo100k => "$50,000 - $100,000",
            Budget::Over100k => "$100,000+",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.slug() == value)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Expected project timeline offered on the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "1-3 months")]
    OneToThreeMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6+ months")]
    SixPlusMonths,
}

impl Timeline {
    pub const ALL: [Timeline; 3] = [
        Timeline::OneToThreeMonths,
        Timeline::ThreeToSixMonths,
        Timeline::SixPlusMonths,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Timeline::OneToThreeMonths => "1-3 months",
            Timeline::ThreeToSixMonths => "3-6 months",
            Timeline::SixPlusMonths => "6+ months",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.slug() == value)
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A validated service inquiry. Instances only exist on the far side of
/// [`crate::core::validate::validate_inquiry`]; nothing is persisted, so the
/// value is transmitted, acknowledged, and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub service_category: ServiceCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

/// One violated constraint: the wire-cased field path (dot-separated when
/// nested) and a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Acknowledgment issued for an accepted inquiry: a reference token built
/// from a fixed prefix plus the submission's unix-millisecond timestamp, and
/// the submission instant itself. The token is the inquiry's only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryReceipt {
    pub inquiry_id: String,
    pub timestamp: DateTime<Utc>,
}

impl InquiryReceipt {
    pub fn issue_at(now: DateTime<Utc>) -> Self {
        Self {
            inquiry_id: format!("INQ-{}", now.timestamp_millis()),
            timestamp: now,
        }
    }

    pub fn issue() -> Self {
        Self::issue_at(Utc::now())
    }
}
