//! Rows of the course catalog schema.
//!
//! These are the shapes the population pipeline writes and the sample CSV
//! files are read into. Column names follow the CSV headers.

use crate::{
    course_data::{BuildingRoom, CourseCode, time_of_day},
    days::DaySet,
    uwaterloo::{ClassSchedule, Course, InstructorData},
};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub subject: String,
    pub course_number: String,
    pub name: String,
    pub description: Option<String>,
}

impl CourseRecord {
    pub fn code(&self) -> CourseCode {
        CourseCode::new(&self.subject, &self.course_number)
    }
}

impl From<&Course> for CourseRecord {
    fn from(course: &Course) -> Self {
        Self {
            subject: course.subject_code.clone(),
            course_number: course.catalog_number.clone(),
            name: course.title.clone(),
            description: course.description.clone(),
        }
    }
}

/// Marks a course as graded numerically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageCourseRecord {
    pub subject: String,
    pub course_number: String,
}

impl From<CourseCode> for PercentageCourseRecord {
    fn from(code: CourseCode) -> Self {
        Self {
            subject: code.subject,
            course_number: code.number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorRecord {
    pub uid: String,
    pub name: String,
}

impl From<&InstructorData> for ProfessorRecord {
    fn from(instructor: &InstructorData) -> Self {
        Self {
            uid: instructor.instructor_unique_identifier.clone(),
            name: instructor.display_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub section: i32,
    pub subject: String,
    pub course_number: String,
    /// Component code, e.g. `LEC`, `TUT`
    #[serde(rename = "type")]
    pub component: String,
    pub professor_id: Option<String>,
    pub days: Option<DaySet>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location_building: Option<String>,
    pub location_room: Option<String>,
}

impl SectionRecord {
    /// Derives a section row from a class schedule entry of `course`
    ///
    /// Only the first meeting and first instructor of the entry are recorded.
    pub fn from_schedule(course: &CourseCode, schedule: &ClassSchedule) -> Self {
        let meeting = schedule.primary_meeting();
        let location = meeting.and_then(|m| BuildingRoom::parse(m.location_name.as_deref()));

        Self {
            section: schedule.class_section,
            subject: course.subject.clone(),
            course_number: course.number.clone(),
            component: schedule.course_component.clone(),
            professor_id: schedule
                .primary_instructor()
                .map(|i| i.instructor_unique_identifier.clone()),
            days: meeting.and_then(|m| {
                DaySet::from_week_pattern(m.class_meeting_week_pattern_code.as_deref())
            }),
            start_time: meeting
                .and_then(|m| m.class_meeting_start_time.as_deref())
                .and_then(time_of_day),
            end_time: meeting
                .and_then(|m| m.class_meeting_end_time.as_deref())
                .and_then(time_of_day),
            location_building: location.as_ref().map(|l| l.building.clone()),
            location_room: location.map(|l| l.room),
        }
    }

    pub fn code(&self) -> CourseCode {
        CourseCode::new(&self.subject, &self.course_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::uwaterloo::ScheduleData;
    use chrono::Timelike;

    fn schedule(
        meeting: Option<ScheduleData>,
        instructors: Option<Vec<InstructorData>>,
    ) -> ClassSchedule {
        ClassSchedule {
            class_section: 1,
            course_component: "LEC".to_string(),
            schedule_data: meeting.map(|m| vec![m]),
            instructor_data: instructors,
        }
    }

    fn instructor(uid: &str) -> InstructorData {
        InstructorData {
            instructor_unique_identifier: uid.to_string(),
            instructor_first_name: Some("Jane".to_string()),
            instructor_last_name: Some("Smith".to_string()),
        }
    }

    #[test]
    fn test_section_from_full_schedule() {
        let meeting = ScheduleData {
            class_meeting_start_time: Some("2023-09-06T08:30:00".to_string()),
            class_meeting_end_time: Some("2023-09-06T09:20:00".to_string()),
            class_meeting_week_pattern_code: Some("YNYNYNN".to_string()),
            location_name: Some("MC 2065".to_string()),
        };
        let code = CourseCode::new("MATH", "135");
        let instructors = vec![instructor("JSMITH"), instructor("ADOE")];
        let schedule = schedule(Some(meeting), Some(instructors));
        let section = SectionRecord::from_schedule(&code, &schedule);

        assert_eq!(section.code(), code);
        assert_eq!(section.component, "LEC");
        assert_eq!(section.professor_id.as_deref(), Some("JSMITH"));
        assert_eq!(section.days.map(DaySet::bits), Some(0b1010100));
        assert_eq!(section.start_time.map(|t| t.hour()), Some(8));
        assert_eq!(section.end_time.map(|t| t.minute()), Some(20));
        assert_eq!(section.location_building.as_deref(), Some("MC"));
        assert_eq!(section.location_room.as_deref(), Some("2065"));
    }

    #[test]
    fn test_section_without_meeting_or_instructor() {
        let section =
            SectionRecord::from_schedule(&CourseCode::new("MATH", "137"), &schedule(None, None));

        assert_eq!(section.professor_id, None);
        assert_eq!(section.days, None);
        assert_eq!(section.start_time, None);
        assert_eq!(section.end_time, None);
        assert_eq!(section.location_building, None);
        assert_eq!(section.location_room, None);
    }

    #[test]
    fn test_section_single_token_location() {
        let meeting = ScheduleData {
            class_meeting_start_time: None,
            class_meeting_end_time: None,
            class_meeting_week_pattern_code: None,
            location_name: Some("ONLINE".to_string()),
        };
        let section = SectionRecord::from_schedule(
            &CourseCode::new("CS", "135"),
            &schedule(Some(meeting), Some(Vec::new())),
        );

        assert_eq!(section.location_building, None);
        assert_eq!(section.location_room, None);
        assert_eq!(section.professor_id, None);
    }

    #[test]
    fn test_professor_from_instructor() {
        let professor = ProfessorRecord::from(&instructor("JSMITH"));
        assert_eq!(professor.uid, "JSMITH");
        assert_eq!(professor.name, "Jane Smith");
    }
}
