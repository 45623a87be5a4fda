use std::fmt;

/// Letter grade derived from a weighted average.
///
/// | Average     | Grade |
/// |-------------|-------|
/// | > 90        | A     |
/// | > 80        | B     |
/// | > 70        | C     |
/// | > 60        | D     |
/// | otherwise   | F     |
///
/// Thresholds are strict: an average of exactly 90.0 is a B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn from_average(avg: f64) -> Self {
        match avg {
            a if a > 90.0 => LetterGrade::A,
            a if a > 80.0 => LetterGrade::B,
            a if a > 70.0 => LetterGrade::C,
            a if a > 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
