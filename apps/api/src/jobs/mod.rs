// Job catalog: filtered, paginated queries over the seeded, read-only job list.

pub mod handlers;
pub mod query;
pub mod repository;
pub mod salary;
