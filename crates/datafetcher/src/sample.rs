//! Population from the static CSV files shipped in the data directory.

use crate::{
    error::PipelineError,
    pipeline::{CatalogSink, PopulationReport},
    util::read_csv_file,
};
use log::info;
use models::{
    catalog::{CourseRecord, PercentageCourseRecord, ProfessorRecord, SectionRecord, UserRecord},
    requisite::{RequisiteEdge, RequisiteKind, RequisiteRecord},
};
use std::path::{Path, PathBuf};

pub const USER_FILE: &str = "User.csv";
pub const COURSE_FILE: &str = "Course.csv";
pub const PERCENTAGE_COURSE_FILE: &str = "PercentageCourse.csv";
pub const PROFESSOR_FILE: &str = "Professor.csv";
pub const SECTION_FILE: &str = "Section.csv";
pub const PRE_REQUISITE_FILE: &str = "PreRequisites.csv";
pub const ANTI_REQUISITE_FILE: &str = "AntiRequisites.csv";

/// Loads every sample table from one directory, parents before children
pub struct SampleLoader {
    dir: PathBuf,
}

impl SampleLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn load<K: CatalogSink>(
        &self,
        sink: &mut K,
    ) -> Result<PopulationReport, PipelineError> {
        info!("Loading sample data from {}", self.dir.display());

        let mut report = load_users(sink, &self.dir.join(USER_FILE)).await?;

        for course in read_csv_file::<CourseRecord>(&self.dir.join(COURSE_FILE))? {
            sink.save_course(&course)
                .await
                .map_err(PipelineError::store)?;
            report.courses += 1;
        }

        for marker in
            read_csv_file::<PercentageCourseRecord>(&self.dir.join(PERCENTAGE_COURSE_FILE))?
        {
            sink.save_percentage_course(&marker)
                .await
                .map_err(PipelineError::store)?;
            report.percentage_courses += 1;
        }

        for professor in read_csv_file::<ProfessorRecord>(&self.dir.join(PROFESSOR_FILE))? {
            sink.save_professor(&professor)
                .await
                .map_err(PipelineError::store)?;
            report.professors += 1;
        }

        for section in read_csv_file::<SectionRecord>(&self.dir.join(SECTION_FILE))? {
            sink.save_section(&section)
                .await
                .map_err(PipelineError::store)?;
            report.sections += 1;
        }

        for (kind, file) in [
            (RequisiteKind::Pre, PRE_REQUISITE_FILE),
            (RequisiteKind::Anti, ANTI_REQUISITE_FILE),
        ] {
            let edges: Vec<RequisiteEdge> = read_csv_file::<RequisiteRecord>(&self.dir.join(file))?
                .into_iter()
                .map(RequisiteEdge::from)
                .collect();

            let inserted = sink
                .save_requisites(kind, &edges)
                .await
                .map_err(PipelineError::store)?;
            report.record_requisites(kind, inserted);
        }

        Ok(report)
    }
}

/// Loads the accounts listed in a `User.csv` file
pub async fn load_users<K: CatalogSink>(
    sink: &mut K,
    path: &Path,
) -> Result<PopulationReport, PipelineError> {
    let mut report = PopulationReport::default();

    for user in read_csv_file::<UserRecord>(path)? {
        sink.save_user(&user).await.map_err(PipelineError::store)?;
        report.users += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::MemorySink;
    use models::{course_data::CourseCode, days::DaySet};
    use std::fs;

    /// Writes a complete sample directory under the system temp dir
    fn sample_dir(name: &str) -> PathBuf {
        let dir_name = format!("catalog-sample-{name}-{}", std::process::id());
        let dir = std::env::temp_dir().join(dir_name);
        fs::create_dir_all(&dir).unwrap();

        let files = [
            (USER_FILE, "username,email,is_admin\nadmin,admin@example.com,true\n"),
            (
                COURSE_FILE,
                "subject,course_number,name,description\n\
                 MATH,135,Algebra for Honours Mathematics,Proof techniques\n\
                 MATH,136,Linear Algebra 1 for Honours Mathematics,\n",
            ),
            (PERCENTAGE_COURSE_FILE, "subject,course_number\nMATH,135\n"),
            (PROFESSOR_FILE, "uid,name\nJSMITH,Jane Smith\n"),
            (
                SECTION_FILE,
                "section,subject,course_number,type,professor_id,days,start_time,end_time,location_building,location_room\n\
                 1,MATH,135,LEC,JSMITH,84,08:30:00,09:20:00,MC,2065\n\
                 101,MATH,135,TUT,,,,,,\n",
            ),
            (
                PRE_REQUISITE_FILE,
                "subject,course_number,pre_requisite_subject,pre_requisite_number\nMATH,136,MATH,135\n",
            ),
            (
                ANTI_REQUISITE_FILE,
                "subject,course_number,anti_requisite_subject,anti_requisite_number\n",
            ),
        ];

        for (file, contents) in files {
            fs::write(dir.join(file), contents).unwrap();
        }

        dir
    }

    #[tokio::test]
    async fn test_load_sample_directory() {
        let dir = sample_dir("full");
        let mut sink = MemorySink::default();

        let report = SampleLoader::new(&dir).load(&mut sink).await.unwrap();

        assert_eq!(report.users, 1);
        assert_eq!(report.courses, 2);
        assert_eq!(report.percentage_courses, 1);
        assert_eq!(report.professors, 1);
        assert_eq!(report.sections, 2);
        assert_eq!(report.pre_requisites, 1);
        assert_eq!(report.anti_requisites, 0);

        assert!(sink.users[0].is_admin);
        assert_eq!(
            sink.sections[0].days,
            Some(DaySet::MONDAY | DaySet::WEDNESDAY | DaySet::FRIDAY)
        );
        assert_eq!(sink.sections[1].professor_id, None);
        assert_eq!(sink.sections[1].start_time, None);
        assert_eq!(
            sink.pre_requisites[0],
            RequisiteEdge::new(
                CourseCode::new("MATH", "136"),
                CourseCode::new("MATH", "135")
            )
        );

        fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_missing_file_names_the_file() {
        let dir = sample_dir("missing");
        fs::remove_file(dir.join(SECTION_FILE)).unwrap();
        let mut sink = MemorySink::default();

        let err = SampleLoader::new(&dir).load(&mut sink).await.unwrap_err();

        match err {
            PipelineError::DataFile { path, .. } => assert!(path.ends_with(SECTION_FILE)),
            other => panic!("unexpected error: {other}"),
        }
        // Tables before the missing file were already written
        assert_eq!(sink.courses.len(), 2);

        fs::remove_dir_all(dir).ok();
    }
}
