use crate::config::ReportConfig;
use crate::domain::Student;
use crate::notify::{
    defaulters, BulkDispatcher, DefaulterFilter, DispatchProgress, DispatchReport, SmsGateway,
};

use super::{ServiceError, ServiceResult};

pub struct NotificationService;

impl NotificationService {
    pub fn defaulters<'a>(students: &'a [Student], filter: &DefaulterFilter) -> Vec<&'a Student> {
        let found = defaulters(students, filter);
        tracing::debug!(count = found.len(), ?filter, "selected defaulters");
        found
    }

    /// Builds a dispatcher with the configured pacing and number formatting.
    pub fn dispatcher<G: SmsGateway>(gateway: G, config: &ReportConfig) -> BulkDispatcher<G> {
        BulkDispatcher::new(gateway)
            .with_delay(config.sms.dispatch_delay())
            .with_formatting(config.locale.clone(), config.currency.clone())
    }

    /// Messages every defaulter matching `filter`.
    pub fn notify_defaulters<G: SmsGateway>(
        dispatcher: &mut BulkDispatcher<G>,
        students: &[Student],
        filter: &DefaulterFilter,
        body: &str,
        on_progress: impl FnMut(DispatchProgress),
    ) -> ServiceResult<DispatchReport> {
        let selected: Vec<String> = Self::defaulters(students, filter)
            .into_iter()
            .map(|student| student.admission_no.clone())
            .collect();
        dispatcher
            .send_bulk(students, &selected, body, on_progress)
            .map_err(ServiceError::from)
    }
}
