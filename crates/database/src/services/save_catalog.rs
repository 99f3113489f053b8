use crate::entities::{
    anti_requisite, course, percentage_course, pre_requisite, professor, section, user,
};
use log::debug;
use models::{
    catalog::{CourseRecord, PercentageCourseRecord, ProfessorRecord, SectionRecord, UserRecord},
    days::DaySet,
    requisite::{RequisiteEdge, RequisiteKind},
};
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};
use uuid::Uuid;

/// Writes catalog rows one statement at a time.
///
/// Every value is bound as a statement parameter; nothing from the source
/// data is ever spliced into SQL text.
pub struct SaveCatalogService;

impl SaveCatalogService {
    pub async fn save_user<C: ConnectionTrait>(db: &C, user: &UserRecord) -> Result<(), DbErr> {
        user::Entity::insert(Self::user_to_active_model(user))
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    pub async fn save_course<C: ConnectionTrait>(
        db: &C,
        course: &CourseRecord,
    ) -> Result<(), DbErr> {
        debug!("Saving course {}", course.code());
        course::Entity::insert(Self::course_to_active_model(course))
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    pub async fn save_percentage_course<C: ConnectionTrait>(
        db: &C,
        marker: &PercentageCourseRecord,
    ) -> Result<(), DbErr> {
        percentage_course::Entity::insert(percentage_course::ActiveModel {
            subject: Set(marker.subject.clone()),
            course_number: Set(marker.course_number.clone()),
        })
        .exec_without_returning(db)
        .await?;
        Ok(())
    }

    pub async fn save_professor<C: ConnectionTrait>(
        db: &C,
        professor: &ProfessorRecord,
    ) -> Result<(), DbErr> {
        professor::Entity::insert(professor::ActiveModel {
            uid: Set(professor.uid.clone()),
            name: Set(professor.name.clone()),
        })
        .exec_without_returning(db)
        .await?;
        Ok(())
    }

    pub async fn save_section<C: ConnectionTrait>(
        db: &C,
        section: &SectionRecord,
    ) -> Result<(), DbErr> {
        section::Entity::insert(Self::section_to_active_model(section))
            .exec_without_returning(db)
            .await?;
        Ok(())
    }

    /// Inserts a batch of requisite edges in one transaction
    ///
    /// # Returns
    /// The number of rows inserted
    pub async fn save_requisites(
        db: &DatabaseConnection,
        kind: RequisiteKind,
        edges: &[RequisiteEdge],
    ) -> Result<u64, DbErr> {
        if edges.is_empty() {
            return Ok(0);
        }

        let txn = db.begin().await?;
        let inserted = match kind {
            RequisiteKind::Pre => {
                pre_requisite::Entity::insert_many(edges.iter().map(Self::pre_requisite_model))
                    .exec_without_returning(&txn)
                    .await?
            }
            RequisiteKind::Anti => {
                anti_requisite::Entity::insert_many(edges.iter().map(Self::anti_requisite_model))
                    .exec_without_returning(&txn)
                    .await?
            }
        };
        txn.commit().await?;

        debug!("Saved {inserted} {kind} rows");
        Ok(inserted)
    }

    fn user_to_active_model(user: &UserRecord) -> user::ActiveModel {
        user::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            is_admin: Set(user.is_admin),
        }
    }

    fn course_to_active_model(course: &CourseRecord) -> course::ActiveModel {
        course::ActiveModel {
            subject: Set(course.subject.clone()),
            course_number: Set(course.course_number.clone()),
            name: Set(course.name.clone()),
            description: Set(course.description.clone()),
        }
    }

    fn section_to_active_model(section: &SectionRecord) -> section::ActiveModel {
        section::ActiveModel {
            id: Set(Uuid::new_v4()),
            section: Set(section.section),
            subject: Set(section.subject.clone()),
            course_number: Set(section.course_number.clone()),
            component: Set(section.component.clone()),
            professor_id: Set(section.professor_id.clone()),
            days: Set(section.days.map(|d| i16::from(d.bits()))),
            start_time: Set(section.start_time),
            end_time: Set(section.end_time),
            location_building: Set(section.location_building.clone()),
            location_room: Set(section.location_room.clone()),
        }
    }

    fn pre_requisite_model(edge: &RequisiteEdge) -> pre_requisite::ActiveModel {
        pre_requisite::ActiveModel {
            subject: Set(edge.course.subject.clone()),
            course_number: Set(edge.course.number.clone()),
            requisite_subject: Set(edge.requisite.subject.clone()),
            requisite_number: Set(edge.requisite.number.clone()),
        }
    }

    fn anti_requisite_model(edge: &RequisiteEdge) -> anti_requisite::ActiveModel {
        anti_requisite::ActiveModel {
            subject: Set(edge.course.subject.clone()),
            course_number: Set(edge.course.number.clone()),
            requisite_subject: Set(edge.requisite.subject.clone()),
            requisite_number: Set(edge.requisite.number.clone()),
        }
    }
}

/// Converts a stored day mask back into a [`DaySet`]
pub fn days_from_column(days: Option<i16>) -> Option<DaySet> {
    days.and_then(|d| u8::try_from(d).ok()).map(DaySet::from_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use models::course_data::CourseCode;
    use sea_orm::ActiveValue;

    fn section() -> SectionRecord {
        SectionRecord {
            section: 1,
            subject: "MATH".to_string(),
            course_number: "135".to_string(),
            component: "LEC".to_string(),
            professor_id: Some("JSMITH".to_string()),
            days: "YNYNYNN".parse().ok(),
            start_time: NaiveTime::from_hms_opt(8, 30, 0),
            end_time: NaiveTime::from_hms_opt(9, 20, 0),
            location_building: Some("MC".to_string()),
            location_room: Some("2065".to_string()),
        }
    }

    #[test]
    fn test_section_to_active_model() {
        let model = SaveCatalogService::section_to_active_model(&section());

        assert_eq!(model.days, ActiveValue::Set(Some(0b1010100)));
        assert_eq!(model.component, ActiveValue::Set("LEC".to_string()));
        assert_eq!(
            model.professor_id,
            ActiveValue::Set(Some("JSMITH".to_string()))
        );
        assert_eq!(
            model.location_room,
            ActiveValue::Set(Some("2065".to_string()))
        );
    }

    #[test]
    fn test_requisite_models_keep_direction() {
        let edge = RequisiteEdge::new(
            CourseCode::new("MATH", "135"),
            CourseCode::new("MATH", "137"),
        );

        let pre = SaveCatalogService::pre_requisite_model(&edge);
        assert_eq!(pre.subject, ActiveValue::Set("MATH".to_string()));
        assert_eq!(pre.course_number, ActiveValue::Set("135".to_string()));
        assert_eq!(pre.requisite_number, ActiveValue::Set("137".to_string()));

        let anti = SaveCatalogService::anti_requisite_model(&edge);
        assert_eq!(anti.requisite_subject, ActiveValue::Set("MATH".to_string()));
        assert_eq!(anti.requisite_number, ActiveValue::Set("137".to_string()));
    }

    #[test]
    fn test_days_round_trip_through_column() {
        let days = section().days;
        let column = days.map(|d| i16::from(d.bits()));
        assert_eq!(days_from_column(column), days);
        assert_eq!(days_from_column(None), None);
        assert_eq!(days_from_column(Some(-1)), None);
    }
}
