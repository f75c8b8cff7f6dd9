use log::{debug, info};

use super::validation::{validate, ContactDetails, FieldName, PhoneRule, ValidationError, ValidationResult};
use crate::config::SiteConfig;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormField {
    pub value: String,
    pub error: Option<ValidationError>,
}

impl FormField {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Pending => "pending",
            SubmissionState::Succeeded => "succeeded",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    FieldEdited(FieldName, String),
    SubmitAttempted,
    SubmissionCompleted,
    BannerExpired(u32),
}

/// Work the caller has to schedule after an event was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEffect {
    ScheduleCompletion { after_ms: u32 },
    ScheduleBannerHide { generation: u32, after_ms: u32 },
}

pub const SEND_LABEL: &str = "Send Enquiry";
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: FormField,
    pub phone: FormField,
    pub event_type: FormField,
    state: SubmissionState,
    banner_visible: bool,
    banner_generation: u32,
    last_result: Option<ValidationResult>,
    phone_rule: PhoneRule,
    submit_latency_ms: u32,
    banner_visible_ms: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(PhoneRule::default(), &SiteConfig::default())
    }
}

impl ContactForm {
    pub fn new(phone_rule: PhoneRule, config: &SiteConfig) -> Self {
        Self {
            name: FormField::default(),
            phone: FormField::default(),
            event_type: FormField::default(),
            state: SubmissionState::Idle,
            banner_visible: false,
            banner_generation: 0,
            last_result: None,
            phone_rule,
            submit_latency_ms: config.submit_latency_ms,
            banner_visible_ms: config.banner_visible_ms,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Phone => &self.phone,
            FieldName::EventType => &self.event_type,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Phone => &mut self.phone,
            FieldName::EventType => &mut self.event_type,
        }
    }

    pub fn trigger_disabled(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.trigger_disabled() {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.value.clone(),
            phone: self.phone.value.clone(),
            event_type: self.event_type.value.clone(),
        }
    }

    pub fn apply(&mut self, event: FormEvent) -> Vec<FormEffect> {
        match event {
            FormEvent::FieldEdited(field, value) => {
                let field = self.field_mut(field);
                field.value = value;
                field.error = None;
                Vec::new()
            }
            FormEvent::SubmitAttempted => self.attempt_submit(),
            FormEvent::SubmissionCompleted => self.complete_submission(),
            FormEvent::BannerExpired(generation) => {
                if generation == self.banner_generation {
                    self.banner_visible = false;
                }
                Vec::new()
            }
        }
    }

    fn attempt_submit(&mut self) -> Vec<FormEffect> {
        if self.state == SubmissionState::Pending {
            debug!("Submit ignored, enquiry already sending");
            return Vec::new();
        }

        // A finished submission returns to idle before the next attempt.
        self.state = SubmissionState::Idle;
        self.banner_visible = false;

        let result = validate(&self.details(), &self.phone_rule);
        for name in FieldName::ALL {
            self.field_mut(name).error = result.error_for(name);
        }
        let valid = result.is_valid();
        self.last_result = Some(result);

        if !valid {
            return Vec::new();
        }

        if let Ok(payload) = serde_json::to_string(&self.details()) {
            debug!("Enquiry payload: {}", payload);
        }
        info!("Sending enquiry");
        self.state = SubmissionState::Pending;
        vec![FormEffect::ScheduleCompletion {
            after_ms: self.submit_latency_ms,
        }]
    }

    fn complete_submission(&mut self) -> Vec<FormEffect> {
        if self.state != SubmissionState::Pending {
            return Vec::new();
        }

        info!("Enquiry sent");
        self.state = SubmissionState::Succeeded;
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.banner_visible = true;
        self.banner_generation = self.banner_generation.wrapping_add(1);
        vec![FormEffect::ScheduleBannerHide {
            generation: self.banner_generation,
            after_ms: self.banner_visible_ms,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, phone: &str, event_type: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormEvent::FieldEdited(FieldName::Name, name.to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::Phone, phone.to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::EventType, event_type.to_string()));
        form
    }

    #[test]
    fn starts_idle_with_enabled_trigger() {
        let form = ContactForm::default();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(!form.trigger_disabled());
        assert_eq!(form.trigger_label(), SEND_LABEL);
        assert!(!form.banner_visible());
    }

    #[test]
    fn valid_submit_goes_pending_then_succeeded() {
        let mut form = filled("Jo", "9876543210", "wedding");

        let effects = form.apply(FormEvent::SubmitAttempted);
        assert_eq!(effects, vec![FormEffect::ScheduleCompletion { after_ms: 1800 }]);
        assert_eq!(form.state(), SubmissionState::Pending);
        assert!(form.trigger_disabled());
        assert_eq!(form.trigger_label(), SENDING_LABEL);

        let effects = form.apply(FormEvent::SubmissionCompleted);
        assert_eq!(
            effects,
            vec![FormEffect::ScheduleBannerHide { generation: 1, after_ms: 5000 }]
        );
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert!(!form.trigger_disabled());
        assert_eq!(form.trigger_label(), SEND_LABEL);
        assert!(form.banner_visible());
        for name in FieldName::ALL {
            assert_eq!(form.field(name), &FormField::default());
        }

        form.apply(FormEvent::BannerExpired(1));
        assert!(!form.banner_visible());
        assert_eq!(form.state(), SubmissionState::Succeeded);
    }

    #[test]
    fn invalid_submit_stays_idle_and_marks_every_failing_field() {
        let mut form = filled("", "123", "");

        let effects = form.apply(FormEvent::SubmitAttempted);
        assert!(effects.is_empty());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.name.error, Some(ValidationError::NameTooShort));
        assert_eq!(form.phone.error, Some(ValidationError::InvalidPhone));
        assert_eq!(form.event_type.error, Some(ValidationError::EventTypeMissing));
        assert_eq!(form.last_result().map(|r| r.error_count()), Some(3));
        // Values are kept so the visitor can correct them.
        assert_eq!(form.phone.value, "123");
    }

    #[test]
    fn passing_fields_show_no_error() {
        let mut form = filled("Anita", "12345", "corporate");
        form.apply(FormEvent::SubmitAttempted);
        assert!(!form.name.has_error());
        assert!(form.phone.has_error());
        assert!(!form.event_type.has_error());
    }

    #[test]
    fn editing_clears_only_that_field_without_revalidating() {
        let mut form = filled("", "123", "");
        form.apply(FormEvent::SubmitAttempted);

        form.apply(FormEvent::FieldEdited(FieldName::Phone, "12".to_string()));
        assert!(!form.phone.has_error());
        assert!(form.name.has_error());
        assert!(form.event_type.has_error());
    }

    #[test]
    fn retry_after_fixing_input_succeeds() {
        let mut form = filled("", "123", "");
        form.apply(FormEvent::SubmitAttempted);
        form.apply(FormEvent::SubmitAttempted);
        assert_eq!(form.state(), SubmissionState::Idle);

        form.apply(FormEvent::FieldEdited(FieldName::Name, "Jo".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::Phone, "+91 98765-43210".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::EventType, "birthday".to_string()));
        form.apply(FormEvent::SubmitAttempted);
        assert_eq!(form.state(), SubmissionState::Pending);
    }

    #[test]
    fn submit_while_pending_is_ignored() {
        let mut form = filled("Jo", "9876543210", "wedding");
        form.apply(FormEvent::SubmitAttempted);
        let effects = form.apply(FormEvent::SubmitAttempted);
        assert!(effects.is_empty());
        assert_eq!(form.state(), SubmissionState::Pending);
    }

    #[test]
    fn completion_outside_pending_is_ignored() {
        let mut form = filled("Jo", "9876543210", "wedding");
        assert!(form.apply(FormEvent::SubmissionCompleted).is_empty());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.name.value, "Jo");
    }

    #[test]
    fn new_attempt_hides_banner_and_returns_to_idle() {
        let mut form = filled("Jo", "9876543210", "wedding");
        form.apply(FormEvent::SubmitAttempted);
        form.apply(FormEvent::SubmissionCompleted);
        assert!(form.banner_visible());

        form.apply(FormEvent::SubmitAttempted);
        assert!(!form.banner_visible());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.last_result().map(|r| r.error_count()), Some(3));
    }

    #[test]
    fn stale_banner_timer_does_not_hide_newer_banner() {
        let mut form = filled("Jo", "9876543210", "wedding");
        form.apply(FormEvent::SubmitAttempted);
        form.apply(FormEvent::SubmissionCompleted);

        form.apply(FormEvent::FieldEdited(FieldName::Name, "Meera".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::Phone, "7012345678".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::EventType, "anniversary".to_string()));
        form.apply(FormEvent::SubmitAttempted);
        let effects = form.apply(FormEvent::SubmissionCompleted);
        assert_eq!(
            effects,
            vec![FormEffect::ScheduleBannerHide { generation: 2, after_ms: 5000 }]
        );

        form.apply(FormEvent::BannerExpired(1));
        assert!(form.banner_visible());
        form.apply(FormEvent::BannerExpired(2));
        assert!(!form.banner_visible());
    }

    #[test]
    fn latency_comes_from_config() {
        let config = SiteConfig {
            submit_latency_ms: 10,
            banner_visible_ms: 20,
            ..SiteConfig::default()
        };
        let mut form = ContactForm::new(PhoneRule::default(), &config);
        form.apply(FormEvent::FieldEdited(FieldName::Name, "Jo".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::Phone, "9876543210".to_string()));
        form.apply(FormEvent::FieldEdited(FieldName::EventType, "wedding".to_string()));
        assert_eq!(
            form.apply(FormEvent::SubmitAttempted),
            vec![FormEffect::ScheduleCompletion { after_ms: 10 }]
        );
        assert_eq!(
            form.apply(FormEvent::SubmissionCompleted),
            vec![FormEffect::ScheduleBannerHide { generation: 1, after_ms: 20 }]
        );
    }
}
