use serde::{Deserialize, Serialize};

use crate::currency::{format_amount, CurrencyCode, LocaleConfig};
use crate::domain::Student;

pub const NAME_PLACEHOLDER: &str = "[NAME]";
pub const BALANCE_PLACEHOLDER: &str = "[BALANCE]";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageTemplate {
    pub name: String,
    pub text: String,
}

impl MessageTemplate {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

pub fn builtin_templates() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate::new(
            "Defaulter Reminder",
            "Dear Student/Parent, you have a pending balance of Rs. [BALANCE]. Please deposit it urgently to avoid late fines. Regards GIMS.",
        ),
        MessageTemplate::new(
            "Fee Deposit",
            "Dear Parent, Rs. [AMOUNT] has been received in GIMS Account. New Balance: Rs. [BALANCE]. Thank you.",
        ),
        MessageTemplate::new(
            "General Announcement",
            "GIMS Alert: Tomorrow the Institute will remain closed. Online classes will be held as per schedule.",
        ),
    ]
}

pub fn find_template(name: &str) -> Option<MessageTemplate> {
    builtin_templates()
        .into_iter()
        .find(|template| template.name.eq_ignore_ascii_case(name))
}

/// Fills `[NAME]` and `[BALANCE]` for `student`; other placeholders stay as written.
///
/// Every occurrence is replaced, not only the first one.
pub fn render_message(
    body: &str,
    student: &Student,
    locale: &LocaleConfig,
    currency: &CurrencyCode,
) -> String {
    body.replace(NAME_PLACEHOLDER, &student.name).replace(
        BALANCE_PLACEHOLDER,
        &format_amount(locale, currency, student.balance),
    )
}
