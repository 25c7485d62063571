//! Fee-defaulter selection and simulated SMS delivery over the student roster.

pub mod dispatch;
pub mod templates;

pub use dispatch::{
    BulkDispatcher, DeliveryStatus, DispatchLog, DispatchProgress, DispatchReport, SimulatedGateway,
    SmsGateway,
};
pub use templates::{builtin_templates, render_message, MessageTemplate};

use serde::{Deserialize, Serialize};

use crate::domain::Student;

/// Roster filter; `None` on a field means every value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaulterFilter {
    pub campus: Option<String>,
    pub program: Option<String>,
    pub semester: Option<String>,
}

impl DefaulterFilter {
    pub fn matches(&self, student: &Student) -> bool {
        field_matches(&self.campus, &student.campus)
            && field_matches(&self.program, &student.program)
            && field_matches(&self.semester, &student.semester)
    }
}

fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().map_or(true, |value| value == actual)
}

/// Students with an outstanding balance that match `filter`, in roster order.
pub fn defaulters<'a>(students: &'a [Student], filter: &DefaulterFilter) -> Vec<&'a Student> {
    students
        .iter()
        .filter(|student| student.balance > 0.0 && filter.matches(student))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Student> {
        vec![
            Student::new("A-1", "Ali", 1500.0).enrolled("Main", "MBBS", "1"),
            Student::new("A-2", "Sara", 0.0).enrolled("Main", "MBBS", "1"),
            Student::new("A-3", "Hina", 200.0).enrolled("City", "BDS", "2"),
            Student::new("A-4", "Omar", -50.0).enrolled("City", "BDS", "2"),
        ]
    }

    #[test]
    fn only_positive_balances_are_defaulters() {
        let students = roster();
        let found = defaulters(&students, &DefaulterFilter::default());
        let ids: Vec<_> = found.iter().map(|s| s.admission_no.as_str()).collect();
        assert_eq!(ids, vec!["A-1", "A-3"]);
    }

    #[test]
    fn filter_narrows_by_campus_and_program() {
        let students = roster();
        let filter = DefaulterFilter {
            campus: Some("City".into()),
            program: Some("BDS".into()),
            semester: None,
        };
        let found = defaulters(&students, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Hina");
    }
}
