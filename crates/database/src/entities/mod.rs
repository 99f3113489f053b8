pub mod anti_requisite;
pub mod course;
pub mod percentage_course;
pub mod pre_requisite;
pub mod professor;
pub mod section;
pub mod user;
