use std::fmt;

use super::letter::LetterGrade;
use crate::roster::Student;

/// Fractional contribution of each graded component.
///
/// The three fields always sum to 1.0 once produced by [`Weighting::normalized`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighting {
    pub midterm1: f64,
    pub midterm2: f64,
    pub final_exam: f64,
}

impl Default for Weighting {
    fn default() -> Self {
        Self {
            midterm1: 0.25,
            midterm2: 0.25,
            final_exam: 0.50,
        }
    }
}

impl Weighting {
    /// Normalize three raw values (usually percentages) so they sum to 1.0.
    ///
    /// Individual values are not range-checked; a zero total is rejected, and
    /// so is any NaN or infinite input or total.
    pub fn normalized(midterm1: f64, midterm2: f64, final_exam: f64) -> Result<Self, WeightingError> {
        let total = midterm1 + midterm2 + final_exam;
        if !total.is_finite() {
            return Err(WeightingError::NonFinite);
        }
        if total == 0.0 {
            return Err(WeightingError::ZeroTotal);
        }

        Ok(Self {
            midterm1: midterm1 / total,
            midterm2: midterm2 / total,
            final_exam: final_exam / total,
        })
    }

    /// Weights scaled to percentages, in (midterm1, midterm2, final) order
    pub fn percentages(&self) -> (f64, f64, f64) {
        (
            self.midterm1 * 100.0,
            self.midterm2 * 100.0,
            self.final_exam * 100.0,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeightingError {
    ZeroTotal,
    NonFinite,
}

impl fmt::Display for WeightingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightingError::ZeroTotal => write!(f, "Invalid weighting. Total should not be 0."),
            WeightingError::NonFinite => write!(f, "Invalid weighting. Values must be finite numbers."),
        }
    }
}

impl std::error::Error for WeightingError {}

/// Computes averages and letter grades under the active weighting.
///
/// Owned by the menu controller and handed to whatever needs to grade a
/// record; replacing the weighting retroactively changes every reported
/// average.
#[derive(Debug, Clone, Default)]
pub struct GradePolicy {
    weighting: Weighting,
}

impl GradePolicy {
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Replace the weighting with the normalized form of the given values.
    /// On a zero or non-finite total the previous weighting is kept.
    pub fn set_weights(&mut self, midterm1: f64, midterm2: f64, final_exam: f64) -> Result<(), WeightingError> {
        self.weighting = Weighting::normalized(midterm1, midterm2, final_exam)?;
        Ok(())
    }

    pub fn average(&self, student: &Student) -> f64 {
        student.midterm1 * self.weighting.midterm1
            + student.midterm2 * self.weighting.midterm2
            + student.final_exam * self.weighting.final_exam
    }

    pub fn letter_grade(&self, student: &Student) -> LetterGrade {
        LetterGrade::from_average(self.average(student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn student(m1: f64, m2: f64, f: f64) -> Student {
        Student::new("Doe", "Jane", "S1", m1, m2, f)
    }

    #[test]
    fn test_default_weighting() {
        let policy = GradePolicy::default();
        assert_eq!(policy.weighting(), Weighting { midterm1: 0.25, midterm2: 0.25, final_exam: 0.5 });
    }

    #[test]
    fn test_average_default_weights() {
        let policy = GradePolicy::default();
        let s = student(80.0, 60.0, 100.0);
        assert!((policy.average(&s) - 85.0).abs() < EPSILON);
        assert_eq!(policy.letter_grade(&s), LetterGrade::B);
    }

    #[test]
    fn test_set_weights_normalizes() {
        let mut policy = GradePolicy::default();
        policy.set_weights(20.0, 30.0, 50.0).unwrap();
        let w = policy.weighting();
        assert!((w.midterm1 - 0.2).abs() < EPSILON);
        assert!((w.midterm2 - 0.3).abs() < EPSILON);
        assert!((w.final_exam - 0.5).abs() < EPSILON);
        assert!((w.midterm1 + w.midterm2 + w.final_exam - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_weights_scale_invariant() {
        let mut a = GradePolicy::default();
        let mut b = GradePolicy::default();
        a.set_weights(1.0, 2.0, 7.0).unwrap();
        b.set_weights(10.0, 20.0, 70.0).unwrap();
        let (wa, wb) = (a.weighting(), b.weighting());
        assert!((wa.midterm1 - wb.midterm1).abs() < EPSILON);
        assert!((wa.midterm2 - wb.midterm2).abs() < EPSILON);
        assert!((wa.final_exam - wb.final_exam).abs() < EPSILON);
    }

    #[test]
    fn test_zero_total_rejected_and_previous_kept() {
        let mut policy = GradePolicy::default();
        policy.set_weights(10.0, 10.0, 80.0).unwrap();
        let before = policy.weighting();

        let result = policy.set_weights(0.0, 0.0, 0.0);
        assert_eq!(result, Err(WeightingError::ZeroTotal));
        assert_eq!(policy.weighting(), before);
    }

    #[test]
    fn test_negative_weights_cancelling_to_zero_rejected() {
        let mut policy = GradePolicy::default();
        assert!(policy.set_weights(50.0, -50.0, 0.0).is_err());
        assert_eq!(policy.weighting(), Weighting::default());
    }

    #[test]
    fn test_negative_weight_accepted() {
        let mut policy = GradePolicy::default();
        assert!(policy.set_weights(-10.0, 60.0, 50.0).is_ok());
        assert!((policy.weighting().midterm1 + 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_reweighting_changes_average_not_scores() {
        let mut policy = GradePolicy::default();
        let s = student(100.0, 0.0, 50.0);
        assert!((policy.average(&s) - 50.0).abs() < EPSILON);

        policy.set_weights(100.0, 0.0, 0.0).unwrap();
        assert!((policy.average(&s) - 100.0).abs() < EPSILON);
        assert_eq!(s.midterm1, 100.0);
        assert_eq!(s.final_exam, 50.0);
    }

    #[test]
    fn test_flat_eighty_stays_c_after_final_only() {
        let mut policy = GradePolicy::default();
        let s = student(80.0, 80.0, 80.0);
        assert!((policy.average(&s) - 80.0).abs() < EPSILON);
        assert_eq!(policy.letter_grade(&s), LetterGrade::C);

        policy.set_weights(0.0, 0.0, 100.0).unwrap();
        assert!((policy.average(&s) - 80.0).abs() < EPSILON);
        assert_eq!(policy.letter_grade(&s), LetterGrade::C);
    }

    #[test]
    fn test_out_of_range_scores_not_clamped() {
        let policy = GradePolicy::default();
        let s = student(120.0, 120.0, 120.0);
        assert!((policy.average(&s) - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_percentages() {
        let (m1, m2, f) = Weighting::default().percentages();
        assert_eq!((m1, m2, f), (25.0, 25.0, 50.0));
    }

    #[test]
    fn test_non_finite_weights_rejected_and_previous_kept() {
        let mut policy = GradePolicy::default();
        policy.set_weights(10.0, 10.0, 80.0).unwrap();
        let before = policy.weighting();

        assert_eq!(policy.set_weights(f64::NAN, 0.0, 100.0), Err(WeightingError::NonFinite));
        assert_eq!(policy.set_weights(f64::INFINITY, 0.0, 0.0), Err(WeightingError::NonFinite));
        assert_eq!(
            policy.set_weights(f64::INFINITY, f64::NEG_INFINITY, 1.0),
            Err(WeightingError::NonFinite)
        );
        // Finite inputs whose sum overflows
        assert_eq!(
            policy.set_weights(f64::MAX, f64::MAX, 0.0),
            Err(WeightingError::NonFinite)
        );
        assert_eq!(policy.weighting(), before);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            WeightingError::ZeroTotal.to_string(),
            "Invalid weighting. Total should not be 0."
        );
    }
}
