pub mod config;
pub mod grading;
pub mod menu;
pub mod output;
pub mod roster;
