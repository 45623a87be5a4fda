/// One student's record. Scores are stored as entered, without clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub last_name: String,
    pub first_name: String,
    pub student_number: String,
    pub midterm1: f64,
    pub midterm2: f64,
    pub final_exam: f64,
}

impl Student {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        student_number: impl Into<String>,
        midterm1: f64,
        midterm2: f64,
        final_exam: f64,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            student_number: student_number.into(),
            midterm1,
            midterm2,
            final_exam,
        }
    }

    /// "Last, First" as shown in listings
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}
