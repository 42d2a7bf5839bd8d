pub mod dashboard;
pub mod prompt;
pub mod register_table;
