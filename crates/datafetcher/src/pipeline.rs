//! Production population of the catalog from the course-data API.
//!
//! Stages run strictly in order, one request or insert at a time:
//! resolve the term, fetch the term's lecture courses, then for each course
//! insert it, queue its requisites, fetch its sections and insert their
//! professors and the sections themselves. Requisite edges are only written
//! once every course of the term exists, so both ends of each edge are valid.

use crate::{
    error::{FetchError, PipelineError},
    professors::ProfessorRegistry,
    requisites::{RequisiteResolver, extract_requisites},
};
use log::{debug, info, warn};
use models::{
    catalog::{CourseRecord, PercentageCourseRecord, ProfessorRecord, SectionRecord, UserRecord},
    course_data::CourseCode,
    requisite::{RequisiteEdge, RequisiteKind},
    uwaterloo::{ClassSchedule, Course, Term},
};
use std::{
    collections::HashSet,
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
    ops::AddAssign,
};

/// Read side of the pipeline: the remote course-data API
#[allow(async_fn_in_trait)]
pub trait CourseSource {
    async fn current_term(&self) -> Result<Term, FetchError>;

    async fn courses(&self, term: &str) -> Result<Vec<Course>, FetchError>;

    async fn class_schedules(
        &self,
        term: &str,
        subject: &str,
        number: &str,
    ) -> Result<Vec<ClassSchedule>, FetchError>;
}

/// Write side of the pipeline: the catalog tables
#[allow(async_fn_in_trait)]
pub trait CatalogSink {
    type Error: StdError + Send + Sync + 'static;

    async fn save_user(&mut self, user: &UserRecord) -> Result<(), Self::Error>;

    async fn save_course(&mut self, course: &CourseRecord) -> Result<(), Self::Error>;

    async fn save_percentage_course(
        &mut self,
        marker: &PercentageCourseRecord,
    ) -> Result<(), Self::Error>;

    async fn save_professor(&mut self, professor: &ProfessorRecord) -> Result<(), Self::Error>;

    async fn save_section(&mut self, section: &SectionRecord) -> Result<(), Self::Error>;

    /// Inserts a batch of edges, completing before it returns
    ///
    /// # Returns
    /// The number of rows inserted
    async fn save_requisites(
        &mut self,
        kind: RequisiteKind,
        edges: &[RequisiteEdge],
    ) -> Result<u64, Self::Error>;
}

/// Rows inserted into each table during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationReport {
    pub users: u64,
    pub courses: u64,
    pub percentage_courses: u64,
    pub professors: u64,
    pub sections: u64,
    pub pre_requisites: u64,
    pub anti_requisites: u64,
}

impl PopulationReport {
    pub fn record_requisites(&mut self, kind: RequisiteKind, inserted: u64) {
        match kind {
            RequisiteKind::Pre => self.pre_requisites += inserted,
            RequisiteKind::Anti => self.anti_requisites += inserted,
        }
    }
}

impl AddAssign for PopulationReport {
    fn add_assign(&mut self, rhs: Self) {
        self.users += rhs.users;
        self.courses += rhs.courses;
        self.percentage_courses += rhs.percentage_courses;
        self.professors += rhs.professors;
        self.sections += rhs.sections;
        self.pre_requisites += rhs.pre_requisites;
        self.anti_requisites += rhs.anti_requisites;
    }
}

impl Display for PopulationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let rows = [
            ("User", self.users),
            ("Course", self.courses),
            ("PreRequisites", self.pre_requisites),
            ("AntiRequisites", self.anti_requisites),
            ("Section", self.sections),
            ("PercentageCourse", self.percentage_courses),
            ("Professor", self.professors),
        ];

        for (idx, (table, count)) in rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "> '{table}' - ({count} rows)")?;
        }

        Ok(())
    }
}

/// Loads one term of production data from `source` into `sink`
pub struct ProductionPipeline<'a, S, K> {
    source: S,
    sink: &'a mut K,
}

impl<'a, S, K> ProductionPipeline<'a, S, K>
where
    S: CourseSource,
    K: CatalogSink,
{
    pub fn new(source: S, sink: &'a mut K) -> Self {
        Self { source, sink }
    }

    /// Runs every stage to completion
    ///
    /// Fails without writing anything if the current term cannot be resolved.
    /// A course whose sections cannot be fetched is loaded with no sections.
    pub async fn run(&mut self) -> Result<PopulationReport, PipelineError> {
        let term = self
            .source
            .current_term()
            .await
            .map_err(PipelineError::Term)?;
        info!("Populating term {}", term.term_code);

        let courses = self.lecture_courses(&term.term_code).await?;
        info!("Fetched {} lecture courses", courses.len());

        let mut report = PopulationReport::default();
        let mut professors = ProfessorRegistry::new();
        let mut requisites = RequisiteResolver::new();

        for (idx, course) in courses.iter().enumerate() {
            if idx % 100 == 0 {
                info!("Loading course {}/{}", idx + 1, courses.len());
            }

            let code = course.code();
            self.load_course(course, &mut report).await?;
            requisites.defer(
                &code,
                extract_requisites(course.requirements_description.as_deref()),
            );

            let schedules = self.fetch_schedules(&term.term_code, &code).await;
            self.load_sections(&code, &schedules, &mut professors, &mut report)
                .await?;
        }

        // Every course now exists, so requisite foreign keys are valid
        let known: HashSet<CourseCode> = courses.iter().map(Course::code).collect();
        for kind in [RequisiteKind::Pre, RequisiteKind::Anti] {
            let edges = requisites.resolve(kind, &known);
            debug!(
                "{} of {} pending {kind} edges reference a course of this term",
                edges.len(),
                requisites.pending(kind)
            );

            let inserted = self
                .sink
                .save_requisites(kind, &edges)
                .await
                .map_err(PipelineError::store)?;
            report.record_requisites(kind, inserted);
        }

        Ok(report)
    }

    /// Fetches the term's courses, keeping the first lecture record of each course
    async fn lecture_courses(&self, term: &str) -> Result<Vec<Course>, PipelineError> {
        let courses = self
            .source
            .courses(term)
            .await
            .map_err(|source| PipelineError::Courses {
                term: term.to_string(),
                source,
            })?;

        let mut seen = HashSet::new();
        Ok(courses
            .into_iter()
            .filter(|course| course.component().is_lecture())
            .filter(|course| seen.insert(course.code()))
            .collect())
    }

    async fn load_course(
        &mut self,
        course: &Course,
        report: &mut PopulationReport,
    ) -> Result<(), PipelineError> {
        self.sink
            .save_course(&CourseRecord::from(course))
            .await
            .map_err(PipelineError::store)?;
        report.courses += 1;

        if course.is_percentage_graded() {
            self.sink
                .save_percentage_course(&PercentageCourseRecord::from(course.code()))
                .await
                .map_err(PipelineError::store)?;
            report.percentage_courses += 1;
        }

        Ok(())
    }

    /// Fetches the sections of a course; any failure counts as "no sections"
    async fn fetch_schedules(&self, term: &str, code: &CourseCode) -> Vec<ClassSchedule> {
        match self
            .source
            .class_schedules(term, &code.subject, &code.number)
            .await
        {
            Ok(schedules) => schedules,
            Err(e) => {
                warn!("No sections loaded for {code}: {e}");
                Vec::new()
            }
        }
    }

    async fn load_sections(
        &mut self,
        code: &CourseCode,
        schedules: &[ClassSchedule],
        professors: &mut ProfessorRegistry,
        report: &mut PopulationReport,
    ) -> Result<(), PipelineError> {
        // Professors first so every section's professor reference is valid
        for schedule in schedules {
            if let Some(professor) = professors.admit(schedule) {
                self.sink
                    .save_professor(&professor)
                    .await
                    .map_err(PipelineError::store)?;
                report.professors += 1;
            }
        }

        for schedule in schedules {
            self.sink
                .save_section(&SectionRecord::from_schedule(code, schedule))
                .await
                .map_err(PipelineError::store)?;
            report.sections += 1;
        }

        Ok(())
    }
}
