use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{AsRefStr, EnumString};

/// Natural key of a course, e.g. `MATH 135`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseCode {
    pub subject: String,
    pub number: String,
}

impl CourseCode {
    pub fn new(subject: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            number: number.into(),
        }
    }
}

impl Display for CourseCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.subject, self.number)
    }
}

/// Delivery type of a course offering, as coded by the course-data API
#[derive(Debug, Clone, PartialEq, Eq, EnumString, AsRefStr)]
pub enum ComponentCode {
    #[strum(serialize = "LEC")]
    Lecture,
    #[strum(serialize = "LAB")]
    Lab,
    #[strum(serialize = "TUT")]
    Tutorial,
    #[strum(serialize = "SEM")]
    Seminar,
    #[strum(default)]
    Other(String),
}

impl ComponentCode {
    /// Reads an API component code; unknown codes become [`ComponentCode::Other`]
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| Self::Other(code.to_string()))
    }

    pub fn is_lecture(&self) -> bool {
        matches!(self, Self::Lecture)
    }
}

/// Grading basis code for courses graded numerically
pub const NUMERIC_GRADING_BASIS: &str = "NUM";

/// A meeting location split into building and room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingRoom {
    pub building: String,
    pub room: String,
}

impl BuildingRoom {
    /// Splits a location such as `"MC 2065"` on whitespace.
    ///
    /// Returns `None` unless there is a second token; anything after the room is ignored.
    pub fn parse(location: Option<&str>) -> Option<Self> {
        let mut parts = location?.split_whitespace();
        let building = parts.next()?;
        let room = parts.next()?;

        Some(Self {
            building: building.to_string(),
            room: room.to_string(),
        })
    }
}

/// Extracts the time of day from a timestamp such as `2023-09-06T08:30:00`
///
/// # Returns
/// `None` if there is no date/time separator or the time part does not parse
pub fn time_of_day(timestamp: &str) -> Option<NaiveTime> {
    let (_, time) = timestamp.split_once('T')?;
    NaiveTime::parse_from_str(time, "%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_building_room_split() {
        let location = BuildingRoom::parse(Some("MC 2065")).unwrap();
        assert_eq!(location.building, "MC");
        assert_eq!(location.room, "2065");
    }

    #[test]
    fn test_building_room_extra_tokens_ignored() {
        let location = BuildingRoom::parse(Some("  STC   0010  annex ")).unwrap();
        assert_eq!(location.building, "STC");
        assert_eq!(location.room, "0010");
    }

    #[test]
    fn test_building_room_missing() {
        assert_eq!(BuildingRoom::parse(None), None);
        assert_eq!(BuildingRoom::parse(Some("")), None);
        assert_eq!(BuildingRoom::parse(Some("ONLINE")), None);
        assert_eq!(BuildingRoom::parse(Some("   ")), None);
    }

    #[test]
    fn test_time_of_day() {
        let time = time_of_day("2023-09-06T08:30:00").unwrap();
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);

        let time = time_of_day("2023-09-06T14:20:00.000").unwrap();
        assert_eq!(time.hour(), 14);
        assert_eq!(time.minute(), 20);
    }

    #[test]
    fn test_time_of_day_invalid() {
        assert_eq!(time_of_day("08:30:00"), None);
        assert_eq!(time_of_day("2023-09-06T"), None);
        assert_eq!(time_of_day("2023-09-06Tnoon"), None);
    }

    #[test]
    fn test_component_code() {
        assert!(ComponentCode::from_code("LEC").is_lecture());
        assert_eq!(ComponentCode::from_code("TUT"), ComponentCode::Tutorial);
        assert_eq!(ComponentCode::from_code("LAB").as_ref(), "LAB");
        assert_eq!(
            ComponentCode::from_code("PRJ"),
            ComponentCode::Other("PRJ".to_string())
        );
        assert!(!ComponentCode::from_code("PRJ").is_lecture());
    }

    #[test]
    fn test_course_code_display() {
        assert_eq!(CourseCode::new("MATH", "135").to_string(), "MATH 135");
    }
}
