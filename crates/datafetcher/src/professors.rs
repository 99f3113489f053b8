use models::{catalog::ProfessorRecord, uwaterloo::ClassSchedule};
use std::collections::HashSet;

/// Tracks which instructors have been stored during one population run
#[derive(Debug, Default)]
pub struct ProfessorRegistry {
    seen: HashSet<String>,
}

impl ProfessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the professor to insert for `schedule`, if it names an instructor
    /// that has not been seen yet. Only the first listed instructor is considered.
    pub fn admit(&mut self, schedule: &ClassSchedule) -> Option<ProfessorRecord> {
        let instructor = schedule.primary_instructor()?;

        self.seen
            .insert(instructor.instructor_unique_identifier.clone())
            .then(|| ProfessorRecord::from(instructor))
    }
}
