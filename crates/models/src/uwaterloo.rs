//! Payloads returned by the University of Waterloo Open Data API (v3).
//!
//! Only the fields the population pipeline reads are modelled; everything
//! else in the responses is ignored during deserialization.

use crate::course_data::{ComponentCode, CourseCode, NUMERIC_GRADING_BASIS};
use serde::Deserialize;

/// `GET Terms/current`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub term_code: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of `GET Courses/{term}`; a course appears once per component
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub subject_code: String,
    pub catalog_number: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grading_basis: Option<String>,
    pub course_component_code: String,
    #[serde(default)]
    pub requirements_description: Option<String>,
}

impl Course {
    pub fn code(&self) -> CourseCode {
        CourseCode::new(&self.subject_code, &self.catalog_number)
    }

    pub fn component(&self) -> ComponentCode {
        ComponentCode::from_code(&self.course_component_code)
    }

    /// Whether the course is graded on a percentage basis
    pub fn is_percentage_graded(&self) -> bool {
        self.grading_basis.as_deref() == Some(NUMERIC_GRADING_BASIS)
    }
}

/// One entry of `GET ClassSchedules/{term}/{subject}/{number}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub class_section: i32,
    pub course_component: String,
    #[serde(default)]
    pub schedule_data: Option<Vec<ScheduleData>>,
    #[serde(default)]
    pub instructor_data: Option<Vec<InstructorData>>,
}

impl ClassSchedule {
    /// The first listed instructor, who is the one recorded for the section
    pub fn primary_instructor(&self) -> Option<&InstructorData> {
        self.instructor_data.as_deref().and_then(<[_]>::first)
    }

    /// The first meeting entry, which is the one recorded for the section
    pub fn primary_meeting(&self) -> Option<&ScheduleData> {
        self.schedule_data.as_deref().and_then(<[_]>::first)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    #[serde(default)]
    pub class_meeting_start_time: Option<String>,
    #[serde(default)]
    pub class_meeting_end_time: Option<String>,
    /// Seven `Y`/`N` flags, Monday first
    #[serde(default)]
    pub class_meeting_week_pattern_code: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorData {
    pub instructor_unique_identifier: String,
    #[serde(default)]
    pub instructor_first_name: Option<String>,
    #[serde(default)]
    pub instructor_last_name: Option<String>,
}

impl InstructorData {
    pub fn display_name(&self) -> String {
        [&self.instructor_first_name, &self.instructor_last_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SCHEDULE_JSON: &str = r#"[
        {
            "courseId": "006950",
            "courseOfferNumber": 1,
            "sessionCode": "1",
            "classSection": 1,
            "termCode": "1239",
            "classNumber": 4518,
            "courseComponent": "LEC",
            "maxEnrollmentCapacity": 90,
            "enrolledStudents": 88,
            "scheduleData": [
                {
                    "classMeetingStartTime": "2023-09-06T08:30:00",
                    "classMeetingEndTime": "2023-09-06T09:20:00",
                    "classMeetingWeekPatternCode": "YNYNYNN",
                    "locationName": "MC 2065"
                }
            ],
            "instructorData": [
                {
                    "instructorUniqueIdentifier": "JSMITH",
                    "instructorFirstName": "Jane",
                    "instructorLastName": "Smith",
                    "instructorRoleCode": "PI"
                },
                {
                    "instructorUniqueIdentifier": "ADOE",
                    "instructorFirstName": "Alex",
                    "instructorLastName": "Doe"
                }
            ]
        },
        {
            "classSection": 101,
            "courseComponent": "TUT",
            "scheduleData": null,
            "instructorData": null
        }
    ]"#;

    #[test]
    fn test_deserialize_class_schedules() {
        let schedules: Vec<ClassSchedule> = serde_json::from_str(SCHEDULE_JSON).unwrap();
        assert_eq!(schedules.len(), 2);

        let lecture = &schedules[0];
        assert_eq!(lecture.class_section, 1);
        assert_eq!(
            lecture.primary_instructor().unwrap().instructor_unique_identifier,
            "JSMITH"
        );
        assert_eq!(
            lecture.primary_meeting().unwrap().location_name.as_deref(),
            Some("MC 2065")
        );

        let tutorial = &schedules[1];
        assert!(tutorial.primary_instructor().is_none());
        assert!(tutorial.primary_meeting().is_none());
    }

    #[test]
    fn test_deserialize_course() {
        let json = r#"{
            "courseId": "006950",
            "subjectCode": "MATH",
            "catalogNumber": "135",
            "title": "Algebra for Honours Mathematics",
            "description": "An introduction to the language of mathematics.",
            "gradingBasis": "NUM",
            "courseComponentCode": "LEC",
            "requirementsDescription": null
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.code(), CourseCode::new("MATH", "135"));
        assert!(course.component().is_lecture());
        assert!(course.is_percentage_graded());
        assert_eq!(course.requirements_description, None);
    }

    #[test]
    fn test_deserialize_term() {
        let term: Term =
            serde_json::from_str(r#"{"termCode": "1239", "name": "Fall 2023"}"#).unwrap();
        assert_eq!(term.term_code, "1239");
    }

    #[test]
    fn test_instructor_display_name() {
        let instructor = InstructorData {
            instructor_unique_identifier: "JSMITH".to_string(),
            instructor_first_name: Some("Jane".to_string()),
            instructor_last_name: Some("Smith".to_string()),
        };
        assert_eq!(instructor.display_name(), "Jane Smith");

        let instructor = InstructorData {
            instructor_last_name: None,
            ..instructor
        };
        assert_eq!(instructor.display_name(), "Jane");
    }
}
