pub mod store;
pub mod types;

pub use store::Roster;
pub use types::Student;
