use crate::domain::model::{Budget, FieldError, ServiceCategory, ServiceInquiry, Timeline};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const CATEGORY_MESSAGE: &str = "Must be one of the recognized service categories";
const BUDGET_MESSAGE: &str = "Must be one of the recognized budget ranges";
const TIMELINE_MESSAGE: &str = "Must be one of the recognized project timelines";

/// The inquiry fields, in wire declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    ServiceCategory,
    Message,
    Budget,
    Timeline,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Phone,
        Field::ServiceCategory,
        Field::Message,
        Field::Budget,
        Field::Timeline,
    ];

    /// Wire-cased field name as it appears in request bodies and error lists.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::ServiceCategory => "serviceCategory",
            Field::Message => "message",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Phone => "Phone",
            Field::ServiceCategory => "Service category",
            Field::Message => "Message",
            Field::Budget => "Budget",
            Field::Timeline => "Timeline",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::ServiceCategory | Field::Message
        )
    }
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    // One non-whitespace local part, an @, a domain with at least one dot.
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Checks one field's content against its rule, returning the violation
/// message if any. Empty optional fields are considered not provided and
/// should not be checked here; required fields get their length/format
/// message even when empty.
pub fn check_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name => {
            let len = value.chars().count();
            if len < 2 {
                Some("Name must be at least 2 characters".to_string())
            } else if len > 100 {
                Some("Name must be less than 100 characters".to_string())
            } else {
                None
            }
        }
        Field::Email => {
            if email_pattern().is_match(value) {
                None
            } else {
                Some("Invalid email address".to_string())
            }
        }
        Field::Company | Field::Phone => None,
        Field::ServiceCategory => {
            if ServiceCategory::from_slug(value).is_some() {
                None
            } else {
                Some(CATEGORY_MESSAGE.to_string())
            }
        }
        Field::Message => {
            let len = value.chars().count();
            if len < 10 {
                Some("Message must be at least 10 characters".to_string())
            } else if len > 1000 {
                Some("Message must be less than 1000 characters".to_string())
            } else {
                None
            }
        }
        Field::Budget => {
            if Budget::from_slug(value).is_some() {
                None
            } else {
                Some(BUDGET_MESSAGE.to_string())
            }
        }
        Field::Timeline => {
            if Timeline::from_slug(value).is_some() {
                None
            } else {
                Some(TIMELINE_MESSAGE.to_string())
            }
        }
    }
}

/// Validates an untrusted JSON candidate against the inquiry schema.
///
/// Every field is checked independently and ALL violations are collected,
/// in declaration order; unknown fields are ignored. Returns the typed
/// inquiry only when the whole candidate is clean.
pub fn validate_inquiry(candidate: &Value) -> Result<ServiceInquiry, Vec<FieldError>> {
    let Some(obj) = candidate.as_object() else {
        return Err(vec![FieldError::new("", "Expected a JSON object")]);
    };

    let mut errors = Vec::new();

    let name = checked_text(obj, Field::Name, &mut errors);
    let email = checked_text(obj, Field::Email, &mut errors);
    let company = optional_text(obj, Field::Company, &mut errors);
    let phone = optional_text(obj, Field::Phone, &mut errors);
    let service_category = checked_category(obj, &mut errors);
    let message = checked_text(obj, Field::Message, &mut errors);
    let budget = checked_budget(obj, &mut errors);
    let timeline = checked_timeline(obj, &mut errors);

    match (name, email, service_category, message) {
        (Some(name), Some(email), Some(service_category), Some(message))
            if errors.is_empty() =>
        {
            Ok(ServiceInquiry {
                name,
                email,
                company,
                phone,
                service_category,
                message,
                budget,
                timeline,
            })
        }
        _ => Err(errors),
    }
}

fn required_raw<'a>(
    obj: &'a Map<String, Value>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match obj.get(field.wire_name()) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(
                field.wire_name(),
                format!("{} is required", field.label()),
            ));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(
                field.wire_name(),
                format!("{} must be a string", field.label()),
            ));
            None
        }
    }
}

fn optional_raw<'a>(
    obj: &'a Map<String, Value>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match obj.get(field.wire_name()) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(
                field.wire_name(),
                format!("{} must be a string", field.label()),
            ));
            None
        }
    }
}

fn checked_text(
    obj: &Map<String, Value>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = required_raw(obj, field, errors)?;
    if let Some(message) = check_field(field, raw) {
        errors.push(FieldError::new(field.wire_name(), message));
        return None;
    }
    Some(raw.to_owned())
}

fn optional_text(
    obj: &Map<String, Value>,
    field: Field,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = optional_raw(obj, field, errors)?;
    Some(raw.to_owned())
}

fn checked_category(
    obj: &Map<String, Value>,
    errors: &mut Vec<FieldError>,
) -> Option<ServiceCategory> {
    let raw = required_raw(obj, Field::ServiceCategory, errors)?;
    let parsed = ServiceCategory::from_slug(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(
            Field::ServiceCategory.wire_name(),
            CATEGORY_MESSAGE,
        ));
    }
    parsed
}

fn checked_budget(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Budget> {
    let raw = optional_raw(obj, Field::Budget, errors)?;
    let parsed = Budget::from_slug(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(Field::Budget.wire_name(), BUDGET_MESSAGE));
    }
    parsed
}

fn checked_timeline(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<Timeline> {
    let raw = optional_raw(obj, Field::Timeline, errors)?;
    let parsed = Timeline::from_slug(raw);
    if parsed.is_none() {
        errors.push(FieldError::new(
            Field::Timeline.wire_name(),
            TIMELINE_MESSAGE,
        ));
    }
    parsed
}
