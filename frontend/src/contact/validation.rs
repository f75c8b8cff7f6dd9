use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;

/// The three tracked inputs of the enquiry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Phone,
    EventType,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Phone, FieldName::EventType];

    pub fn id(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Phone => "phone",
            FieldName::EventType => "eventType",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name (min 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid 10-digit Indian mobile number")]
    InvalidPhone,
    #[error("Please select an event type")]
    EventTypeMissing,
}

/// Raw values as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub event_type: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub name: Option<ValidationError>,
    pub phone: Option<ValidationError>,
    pub event_type: Option<ValidationError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.event_type.is_none()
    }

    pub fn error_for(&self, field: FieldName) -> Option<ValidationError> {
        match field {
            FieldName::Name => self.name,
            FieldName::Phone => self.phone,
            FieldName::EventType => self.event_type,
        }
    }

    pub fn error_count(&self) -> usize {
        FieldName::ALL
            .iter()
            .filter(|f| self.error_for(**f).is_some())
            .count()
    }
}

/// A phone number format, checked after spaces and hyphens are stripped.
#[derive(Clone, Debug)]
pub struct PhoneRule {
    pattern: Regex,
}

impl PhoneRule {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Optional +91/91 prefix, then a 6-9 digit and nine more digits.
    pub fn indian_mobile() -> Self {
        Self {
            pattern: Regex::new(r"^(\+91|91)?[6-9][0-9]{9}$").expect("static phone pattern"),
        }
    }

    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect()
    }

    pub fn matches(&self, raw: &str) -> bool {
        let phone = Self::normalize(raw);
        !phone.is_empty() && self.pattern.is_match(&phone)
    }
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self::indian_mobile()
    }
}

impl PartialEq for PhoneRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str()
    }
}

pub fn validate_name(value: &str) -> Option<ValidationError> {
    if value.trim().chars().count() < NAME_MIN_CHARS {
        Some(ValidationError::NameTooShort)
    } else {
        None
    }
}

pub fn validate_phone(rule: &PhoneRule, value: &str) -> Option<ValidationError> {
    if rule.matches(value) {
        None
    } else {
        Some(ValidationError::InvalidPhone)
    }
}

pub fn validate_event_type(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::EventTypeMissing)
    } else {
        None
    }
}

/// Runs every rule, so all failing fields are reported together.
pub fn validate(details: &ContactDetails, phone_rule: &PhoneRule) -> ValidationResult {
    ValidationResult {
        name: validate_name(&details.name),
        phone: validate_phone(phone_rule, &details.phone),
        event_type: validate_event_type(&details.event_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, phone: &str, event_type: &str) -> ContactDetails {
        ContactDetails {
            name: name.to_string(),
            phone: phone.to_string(),
            event_type: event_type.to_string(),
        }
    }

    #[test]
    fn name_needs_two_trimmed_characters() {
        assert_eq!(validate_name("Jo"), None);
        assert_eq!(validate_name("  Priya Sharma "), None);
        assert_eq!(validate_name(""), Some(ValidationError::NameTooShort));
        assert_eq!(validate_name("   "), Some(ValidationError::NameTooShort));
        assert_eq!(validate_name(" J "), Some(ValidationError::NameTooShort));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert_eq!(validate_name("अ"), Some(ValidationError::NameTooShort));
        assert_eq!(validate_name("अज"), None);
    }

    #[test]
    fn accepts_indian_mobile_numbers() {
        let rule = PhoneRule::indian_mobile();
        for phone in [
            "9876543210",
            "6000000000",
            "7123456789",
            "8123456789",
            "+919876543210",
            "919876543210",
            "98765 43210",
            "98765-43210",
            " +91 98765-43210 ",
        ] {
            assert_eq!(validate_phone(&rule, phone), None, "{phone}");
        }
    }

    #[test]
    fn rejects_other_phone_strings() {
        let rule = PhoneRule::indian_mobile();
        for phone in [
            "",
            "123",
            "987654321",
            "98765432100",
            "5876543210",
            "0876543210",
            "98765abcde",
            "+9298765432",
            "+91 5876543210",
            "(987) 654-3210",
            "9८७६५४३२१०",
            "9٨٧٦٥٤٣٢١٠",
            "+91९८७६५४३२१०",
        ] {
            assert_eq!(
                validate_phone(&rule, phone),
                Some(ValidationError::InvalidPhone),
                "{phone}"
            );
        }
    }

    #[test]
    fn phone_rule_is_replaceable() {
        let rule = PhoneRule::new(r"^\d{4}$").unwrap();
        assert!(rule.matches("12-34"));
        assert!(!rule.matches("9876543210"));
        assert!(PhoneRule::new("(").is_err());
    }

    #[test]
    fn event_type_requires_a_selection() {
        assert_eq!(validate_event_type("wedding"), None);
        assert_eq!(validate_event_type(""), Some(ValidationError::EventTypeMissing));
    }

    #[test]
    fn all_valid_details_pass() {
        let result = validate(&details("Jo", "9876543210", "wedding"), &PhoneRule::default());
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let result = validate(&details("", "123", ""), &PhoneRule::default());
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 3);
        assert_eq!(
            result.error_for(FieldName::Name).map(|e| e.to_string()).as_deref(),
            Some("Please enter your full name (min 2 characters)")
        );
        assert_eq!(
            result.error_for(FieldName::Phone).map(|e| e.to_string()).as_deref(),
            Some("Please enter a valid 10-digit Indian mobile number")
        );
        assert_eq!(
            result.error_for(FieldName::EventType),
            Some(ValidationError::EventTypeMissing)
        );
    }

    #[test]
    fn only_failing_fields_carry_errors() {
        let result = validate(&details("Ravi", "12345", "birthday"), &PhoneRule::default());
        assert_eq!(result.name, None);
        assert_eq!(result.phone, Some(ValidationError::InvalidPhone));
        assert_eq!(result.event_type, None);
    }
}
