pub mod chart;
pub mod dashboard;
pub mod datetime;
pub mod summary;
