pub mod application;
pub mod job;
pub mod profile;
pub mod resume;
pub mod saved_job;
