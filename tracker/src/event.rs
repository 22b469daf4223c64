use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::TrackerError;

/// Authentication actions reported by the login and signup forms.
/// The action doubles as the event name on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    SignUp,
}

impl AuthAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthAction::Login => "login",
            AuthAction::SignUp => "sign_up",
        }
    }
}

/// One tracked user interaction. Each variant carries exactly the fields
/// its event needs, so call sites cannot forget or misspell a property.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    PdfUpload {
        language: String,
        has_template: bool,
    },
    ManualQuestions {
        question_count: u32,
        language: String,
    },
    Authentication {
        action: AuthAction,
        method: String,
    },
    CheckoutStarted {
        plan_id: String,
        amount: f64,
    },
    Purchase {
        plan_id: String,
        amount: f64,
        order_id: String,
    },
    PaymentFailed {
        plan_id: String,
        amount: f64,
        reason: String,
    },
    FileDownload {
        file_type: String,
        processing_time: f64,
    },
    TemplateUsage {
        template_type: String,
    },
    CustomizationUsed,
    FormInteraction {
        form_type: String,
        action: String,
    },
    ErrorReport {
        error_type: String,
        message: String,
    },
    ButtonClick {
        button_name: String,
        location: String,
    },
    ModalInteraction {
        modal_name: String,
        action: String,
    },
    /// Derived metric: a scroll-depth milestone was crossed.
    ScrollDepth {
        milestone: u32,
    },
    /// Derived metric: seconds between page ready and unload.
    TimeOnPage {
        seconds: u64,
    },
}

impl AppEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::PdfUpload { .. } => "pdf_upload",
            AppEvent::ManualQuestions { .. } => "manual_questions",
            AppEvent::Authentication { action, .. } => action.as_str(),
            AppEvent::CheckoutStarted { .. } => "begin_checkout",
            AppEvent::Purchase { .. } => "purchase",
            AppEvent::PaymentFailed { .. } => "payment_failed",
            AppEvent::FileDownload { .. } => "file_download",
            AppEvent::TemplateUsage { .. } => "template_usage",
            AppEvent::CustomizationUsed => "customization_used",
            AppEvent::FormInteraction { .. } => "form_interaction",
            AppEvent::ErrorReport { .. } => "exception",
            AppEvent::ButtonClick { .. } => "button_click",
            AppEvent::ModalInteraction { .. } => "modal_interaction",
            AppEvent::ScrollDepth { .. } => "scroll_depth",
            AppEvent::TimeOnPage { .. } => "time_on_page",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            AppEvent::PdfUpload { .. }
            | AppEvent::ManualQuestions { .. }
            | AppEvent::FileDownload { .. }
            | AppEvent::FormInteraction { .. }
            | AppEvent::ButtonClick { .. }
            | AppEvent::ModalInteraction { .. }
            | AppEvent::ScrollDepth { .. }
            | AppEvent::TimeOnPage { .. } => "engagement",
            AppEvent::Authentication { .. } => "user_authentication",
            AppEvent::CheckoutStarted { .. }
            | AppEvent::Purchase { .. }
            | AppEvent::PaymentFailed { .. } => "ecommerce",
            AppEvent::TemplateUsage { .. } | AppEvent::CustomizationUsed => "features",
            AppEvent::ErrorReport { .. } => "errors",
        }
    }

    pub fn label(&self) -> Option<String> {
        match self {
            AppEvent::PdfUpload { language, .. } => Some(language.clone()),
            AppEvent::ManualQuestions { language, .. } => Some(language.clone()),
            AppEvent::Authentication { method, .. } => Some(method.clone()),
            AppEvent::PaymentFailed { reason, .. } => Some(reason.clone()),
            AppEvent::FileDownload { file_type, .. } => Some(file_type.clone()),
            AppEvent::TemplateUsage { template_type } => Some(template_type.clone()),
            AppEvent::CustomizationUsed => Some(String::from("document_styling")),
            AppEvent::FormInteraction { form_type, action } => {
                Some(format!("{}_{}", form_type, action))
            }
            AppEvent::ButtonClick { button_name, .. } => Some(button_name.clone()),
            AppEvent::ModalInteraction { modal_name, action } => {
                Some(format!("{}_{}", modal_name, action))
            }
            AppEvent::ScrollDepth { milestone } => Some(format!("{}%", milestone)),
            AppEvent::CheckoutStarted { .. }
            | AppEvent::Purchase { .. }
            | AppEvent::ErrorReport { .. }
            | AppEvent::TimeOnPage { .. } => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            AppEvent::ManualQuestions { question_count, .. } => Some(f64::from(*question_count)),
            AppEvent::CheckoutStarted { amount, .. }
            | AppEvent::Purchase { amount, .. }
            | AppEvent::PaymentFailed { amount, .. } => Some(*amount),
            AppEvent::FileDownload {
                processing_time, ..
            } => Some(processing_time.round()),
            AppEvent::ScrollDepth { milestone } => Some(f64::from(*milestone)),
            AppEvent::TimeOnPage { seconds } => Some(*seconds as f64),
            _ => None,
        }
    }

    pub fn parameters(&self) -> HashMap<String, Value> {
        match self {
            AppEvent::PdfUpload {
                language,
                has_template,
            } => HashMap::from([
                (String::from("programming_language"), json!(language)),
                (
                    String::from("has_template"),
                    json!(if *has_template { "yes" } else { "no" }),
                ),
            ]),
            AppEvent::ManualQuestions {
                question_count,
                language,
            } => HashMap::from([
                (String::from("question_count"), json!(question_count)),
                (String::from("programming_language"), json!(language)),
            ]),
            AppEvent::Authentication { method, .. } => {
                HashMap::from([(String::from("auth_method"), json!(method))])
            }
            AppEvent::CheckoutStarted { plan_id, amount } => HashMap::from([
                (String::from("currency"), json!("INR")),
                (String::from("items"), json!([cart_item(plan_id, *amount)])),
            ]),
            AppEvent::Purchase {
                plan_id,
                amount,
                order_id,
            } => HashMap::from([
                (String::from("transaction_id"), json!(order_id)),
                (String::from("currency"), json!("INR")),
                (String::from("items"), json!([cart_item(plan_id, *amount)])),
            ]),
            AppEvent::PaymentFailed {
                plan_id, reason, ..
            } => HashMap::from([
                (String::from("plan_type"), json!(plan_id)),
                (String::from("failure_reason"), json!(reason)),
            ]),
            AppEvent::FileDownload {
                file_type,
                processing_time,
            } => HashMap::from([
                (String::from("file_type"), json!(file_type)),
                (
                    String::from("processing_time_seconds"),
                    json!(processing_time),
                ),
            ]),
            AppEvent::TemplateUsage { template_type } => {
                HashMap::from([(String::from("template_type"), json!(template_type))])
            }
            AppEvent::CustomizationUsed => HashMap::new(),
            AppEvent::FormInteraction { form_type, action } => HashMap::from([
                (String::from("form_type"), json!(form_type)),
                (String::from("interaction"), json!(action)),
            ]),
            AppEvent::ErrorReport {
                error_type,
                message,
            } => HashMap::from([
                (
                    String::from("description"),
                    json!(format!("{}: {}", error_type, message)),
                ),
                (String::from("fatal"), json!(false)),
                (String::from("error_type"), json!(error_type)),
                (String::from("error_message"), json!(message)),
            ]),
            AppEvent::ButtonClick {
                button_name,
                location,
            } => HashMap::from([
                (String::from("button_name"), json!(button_name)),
                (String::from("page_location"), json!(location)),
            ]),
            AppEvent::ModalInteraction { modal_name, action } => HashMap::from([
                (String::from("modal_name"), json!(modal_name)),
                (String::from("action"), json!(action)),
            ]),
            AppEvent::ScrollDepth { .. } => HashMap::new(),
            AppEvent::TimeOnPage { seconds } => {
                HashMap::from([(String::from("seconds_on_page"), json!(seconds))])
            }
        }
    }
}

fn cart_item(plan_id: &str, amount: f64) -> Value {
    json!({
        "item_id": plan_id,
        "item_name": format!("{}_plan", plan_id),
        "category": "credits",
        "quantity": 1,
        "price": amount,
    })
}

/// The normalized payload handed to the sink. Ephemeral: built and sent
/// in the same call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventPayload {
    pub uuid: Uuid,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default)]
    pub parameters: HashMap<String, Value>,
    pub sent_at: String,
}

impl EventPayload {
    pub fn from_event(event: &AppEvent, sent_at: String) -> Result<EventPayload, TrackerError> {
        let name = event.name();
        if name.is_empty() {
            return Err(TrackerError::MissingEventName);
        }
        let category = event.category();
        if category.is_empty() {
            return Err(TrackerError::MissingEventCategory);
        }

        Ok(EventPayload {
            uuid: Uuid::now_v7(),
            name: name.to_owned(),
            category: category.to_owned(),
            label: event.label(),
            value: event.value(),
            parameters: event.parameters(),
            sent_at,
        })
    }
}
