use std::{collections::HashSet, thread, time::Duration};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::{CurrencyCode, LocaleConfig};
use crate::domain::Student;
use crate::errors::NotifyError;

use super::templates::render_message;

/// Outbound message transport.
pub trait SmsGateway {
    fn send(&mut self, number: &str, message: &str) -> Result<(), NotifyError>;
}

/// Gateway that only logs and keeps an outbox; nothing leaves the process.
#[derive(Debug, Default)]
pub struct SimulatedGateway {
    outbox: Vec<(String, String)>,
    rejected: HashSet<String>,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sends to `number` fail, for exercising failure paths.
    pub fn rejecting(mut self, number: impl Into<String>) -> Self {
        self.rejected.insert(number.into());
        self
    }

    pub fn outbox(&self) -> &[(String, String)] {
        &self.outbox
    }
}

impl SmsGateway for SimulatedGateway {
    fn send(&mut self, number: &str, message: &str) -> Result<(), NotifyError> {
        if self.rejected.contains(number) {
            return Err(NotifyError::Gateway {
                number: number.to_string(),
                reason: "number rejected by simulated gateway".into(),
            });
        }
        tracing::info!(number, message, "[SMS] sending");
        self.outbox.push((number.to_string(), message.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchLog {
    pub admission_no: String,
    pub number: Option<String>,
    pub status: DeliveryStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProgress {
    pub processed: usize,
    pub total: usize,
    pub percent: u8,
}

impl DispatchProgress {
    fn after(processed: usize, total: usize) -> Self {
        let percent = ((processed as f64 / total as f64) * 100.0).round() as u8;
        Self {
            processed,
            total,
            percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchReport {
    pub batch_id: Uuid,
    pub entries: Vec<DispatchLog>,
}

impl DispatchReport {
    pub fn sent(&self) -> usize {
        self.count(|status| matches!(status, DeliveryStatus::Sent))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, DeliveryStatus::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, DeliveryStatus::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&DeliveryStatus) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.status))
            .count()
    }
}

/// Sends one personalised message per selected student, one after another.
pub struct BulkDispatcher<G: SmsGateway> {
    gateway: G,
    delay: Duration,
    locale: LocaleConfig,
    currency: CurrencyCode,
}

impl<G: SmsGateway> BulkDispatcher<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            delay: Duration::ZERO,
            locale: LocaleConfig::default(),
            currency: CurrencyCode::default(),
        }
    }

    /// Pause inserted before each send.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_formatting(mut self, locale: LocaleConfig, currency: CurrencyCode) -> Self {
        self.locale = locale;
        self.currency = currency;
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Sends a single message without templating.
    pub fn send_quick(&mut self, number: &str, body: &str) -> Result<(), NotifyError> {
        if body.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        if number.trim().is_empty() {
            return Err(NotifyError::NoRecipients);
        }
        self.gateway.send(number.trim(), body)
    }

    pub fn send_bulk(
        &mut self,
        students: &[Student],
        selected: &[String],
        body: &str,
        mut on_progress: impl FnMut(DispatchProgress),
    ) -> Result<DispatchReport, NotifyError> {
        if body.trim().is_empty() {
            return Err(NotifyError::EmptyMessage);
        }
        if selected.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let batch_id = Uuid::new_v4();
        tracing::info!(%batch_id, recipients = selected.len(), "bulk dispatch started");
        let mut entries = Vec::with_capacity(selected.len());

        for (idx, admission_no) in selected.iter().enumerate() {
            let entry = self.deliver(students, admission_no, body);
            entries.push(entry);
            on_progress(DispatchProgress::after(idx + 1, selected.len()));
        }

        let report = DispatchReport { batch_id, entries };
        tracing::info!(
            %batch_id,
            sent = report.sent(),
            skipped = report.skipped(),
            failed = report.failed(),
            "bulk dispatch finished"
        );
        Ok(report)
    }

    fn deliver(&mut self, students: &[Student], admission_no: &str, body: &str) -> DispatchLog {
        let Some(student) = students.iter().find(|s| s.admission_no == admission_no) else {
            tracing::debug!(admission_no, "skipping unknown student");
            return DispatchLog {
                admission_no: admission_no.to_string(),
                number: None,
                status: DeliveryStatus::Skipped("student not found".into()),
            };
        };
        let Some(number) = student.reachable_number() else {
            tracing::debug!(admission_no, "skipping student without sms number");
            return DispatchLog {
                admission_no: admission_no.to_string(),
                number: None,
                status: DeliveryStatus::Skipped("no sms number on file".into()),
            };
        };

        let message = render_message(body, student, &self.locale, &self.currency);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let status = match self.gateway.send(number, &message) {
            Ok(()) => DeliveryStatus::Sent,
            Err(err) => {
                tracing::warn!(admission_no, error = %err, "delivery failed");
                DeliveryStatus::Failed(err.to_string())
            }
        };
        DispatchLog {
            admission_no: admission_no.to_string(),
            number: Some(number.to_string()),
            status,
        }
    }
}
