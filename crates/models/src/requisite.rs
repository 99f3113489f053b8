use crate::course_data::CourseCode;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Which requisite table an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum RequisiteKind {
    #[strum(serialize = "PreRequisites")]
    Pre,
    #[strum(serialize = "AntiRequisites")]
    Anti,
}

/// A directed requisite relationship from `course` to `requisite`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequisiteEdge {
    pub course: CourseCode,
    pub requisite: CourseCode,
}

impl RequisiteEdge {
    pub fn new(course: CourseCode, requisite: CourseCode) -> Self {
        Self { course, requisite }
    }

    pub fn is_self_reference(&self) -> bool {
        self.course == self.requisite
    }
}

/// A requisite row as it appears in the sample CSV files
///
/// Pre- and anti-requisite files share the same column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisiteRecord {
    pub subject: String,
    pub course_number: String,
    #[serde(alias = "pre_requisite_subject", alias = "anti_requisite_subject")]
    pub requisite_subject: String,
    #[serde(alias = "pre_requisite_number", alias = "anti_requisite_number")]
    pub requisite_number: String,
}

impl From<RequisiteRecord> for RequisiteEdge {
    fn from(record: RequisiteRecord) -> Self {
        RequisiteEdge::new(
            CourseCode::new(record.subject, record.course_number),
            CourseCode::new(record.requisite_subject, record.requisite_number),
        )
    }
}
