use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::form::{ContactForm, FormEffect, FormEvent};
use super::validation::{FieldName, PhoneRule};
use crate::config::get_site_config;

pub static EVENT_TYPES: [(&str, &str); 6] = [
    ("wedding", "Wedding"),
    ("birthday", "Birthday Party"),
    ("corporate", "Corporate Event"),
    ("engagement", "Engagement"),
    ("anniversary", "Anniversary"),
    ("other", "Other"),
];

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub phone_rule: PhoneRule,
}

pub enum ContactFormMsg {
    Edit(FieldName, String),
    Submit,
    SubmissionCompleted,
    BannerExpired(u32),
}

pub struct ContactFormView {
    form: ContactForm,
    // Dropping a Timeout cancels it, so unmounting stops both timers.
    pending_timer: Option<Timeout>,
    banner_timer: Option<Timeout>,
}

impl Component for ContactFormView {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(ctx.props().phone_rule.clone(), &get_site_config()),
            pending_timer: None,
            banner_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let event = match msg {
            ContactFormMsg::Edit(field, value) => FormEvent::FieldEdited(field, value),
            ContactFormMsg::Submit => FormEvent::SubmitAttempted,
            ContactFormMsg::SubmissionCompleted => {
                self.pending_timer = None;
                FormEvent::SubmissionCompleted
            }
            ContactFormMsg::BannerExpired(generation) => FormEvent::BannerExpired(generation),
        };

        for effect in self.form.apply(event) {
            match effect {
                FormEffect::ScheduleCompletion { after_ms } => {
                    let link = ctx.link().clone();
                    self.pending_timer = Some(Timeout::new(after_ms, move || {
                        link.send_message(ContactFormMsg::SubmissionCompleted);
                    }));
                }
                FormEffect::ScheduleBannerHide { generation, after_ms } => {
                    let link = ctx.link().clone();
                    self.banner_timer = Some(Timeout::new(after_ms, move || {
                        link.send_message(ContactFormMsg::BannerExpired(generation));
                    }));
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_name = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Edit(FieldName::Name, input.value())
        });
        let on_phone = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Edit(FieldName::Phone, input.value())
        });
        let on_event_type = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::Edit(FieldName::EventType, select.value())
        });

        let event_type = &self.form.event_type.value;

        html! {
            <form class="contact-form" id="contactForm" data-state={self.form.state().as_str()} {onsubmit} novalidate=true>
                <div class="form-group">
                    <label for="name">{"Full Name *"}</label>
                    <input
                        type="text"
                        id="name"
                        placeholder="Your full name"
                        class={classes!(self.form.name.has_error().then(|| "error"))}
                        value={self.form.name.value.clone()}
                        oninput={on_name}
                    />
                    { self.error_message(FieldName::Name) }
                </div>
                <div class="form-group">
                    <label for="phone">{"Phone Number *"}</label>
                    <input
                        type="tel"
                        id="phone"
                        placeholder="+91 98765 43210"
                        class={classes!(self.form.phone.has_error().then(|| "error"))}
                        value={self.form.phone.value.clone()}
                        oninput={on_phone}
                    />
                    { self.error_message(FieldName::Phone) }
                </div>
                <div class="form-group">
                    <label for="eventType">{"Event Type *"}</label>
                    <select
                        id="eventType"
                        class={classes!(self.form.event_type.has_error().then(|| "error"))}
                        onchange={on_event_type}
                    >
                        <option value="" selected={event_type.is_empty()}>{"Select an event"}</option>
                        { for EVENT_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={event_type == value}>{*label}</option>
                        }) }
                    </select>
                    { self.error_message(FieldName::EventType) }
                </div>
                <button type="submit" id="submitBtn" class="btn btn-primary" disabled={self.form.trigger_disabled()}>
                    { if self.form.trigger_disabled() { sending_icon() } else { send_icon() } }
                    { self.form.trigger_label() }
                </button>
                <div id="formSuccess" class={classes!("form-success", self.form.banner_visible().then(|| "show"))}>
                    {"Thank you! We'll call you back within 24 hours."}
                </div>
            </form>
        }
    }
}

impl ContactFormView {
    fn error_message(&self, field: FieldName) -> Html {
        let error = self.form.field(field).error;
        html! {
            <span
                id={format!("{}Error", field.id().trim_end_matches("Type"))}
                class={classes!("form-error", error.is_some().then(|| "show"))}
            >
                { error.map(|e| e.to_string()).unwrap_or_default() }
            </span>
        }
    }
}

fn send_icon() -> Html {
    html! {
        <svg width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <line x1="22" y1="2" x2="11" y2="13"/>
            <polygon points="22 2 15 22 11 13 2 9 22 2"/>
        </svg>
    }
}

fn sending_icon() -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M12 2v4M12 18v4M4.93 4.93l2.83 2.83M16.24 16.24l2.83 2.83M2 12h4M18 12h4M4.93 19.07l2.83-2.83M16.24 7.76l2.83-2.83"/>
        </svg>
    }
}
