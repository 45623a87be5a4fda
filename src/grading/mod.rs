pub mod letter;
pub mod policy;
pub mod validation;

pub use letter::LetterGrade;
pub use policy::{GradePolicy, Weighting, WeightingError};
pub use validation::validate_weighting;
