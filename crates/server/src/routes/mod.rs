pub mod course;
pub mod health;
pub mod professor;
pub mod user;
