pub mod catalog;
pub mod course_data;
pub mod days;
pub mod requisite;
pub mod uwaterloo;
