use serde::{Deserialize, Serialize};

use crate::domain::common::{Identifiable, NamedEntity};

/// A student on the roster with their outstanding fee balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub admission_no: String,
    pub name: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_number: Option<String>,
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub semester: String,
}

impl Student {
    pub fn new(admission_no: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        Self {
            admission_no: admission_no.into(),
            name: name.into(),
            balance,
            sms_number: None,
            campus: String::new(),
            program: String::new(),
            semester: String::new(),
        }
    }

    pub fn with_sms_number(mut self, number: impl Into<String>) -> Self {
        self.sms_number = Some(number.into());
        self
    }

    pub fn enrolled(
        mut self,
        campus: impl Into<String>,
        program: impl Into<String>,
        semester: impl Into<String>,
    ) -> Self {
        self.campus = campus.into();
        self.program = program.into();
        self.semester = semester.into();
        self
    }

    /// The number to notify, if one is on file.
    pub fn reachable_number(&self) -> Option<&str> {
        self.sms_number
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
    }
}

impl Identifiable for Student {
    fn key(&self) -> &str {
        &self.admission_no
    }
}

impl NamedEntity for Student {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campus {
    pub name: String,
}

/// Enumerations the roster is filtered by.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MasterData {
    #[serde(default)]
    pub campuses: Vec<Campus>,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub semesters: Vec<String>,
}

impl MasterData {
    pub fn has_campus(&self, name: &str) -> bool {
        self.campuses.iter().any(|campus| campus.name == name)
    }

    pub fn has_program(&self, name: &str) -> bool {
        self.programs.iter().any(|program| program == name)
    }

    pub fn has_semester(&self, name: &str) -> bool {
        self.semesters.iter().any(|semester| semester == name)
    }
}
