pub mod app;
pub mod git;
pub mod listing;
pub mod summary;
pub mod types;
