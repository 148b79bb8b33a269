pub mod course;
pub mod teacher;
