pub mod query_course;
pub mod query_user;
pub mod save_catalog;
