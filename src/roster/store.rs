use super::types::Student;

/// Ordered in-memory collection of students.
///
/// Insertion order is preserved. Student numbers are not required to be
/// unique; every lookup resolves to the first match.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a student to the end of the roster
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Index of the first student whose number matches exactly (case-sensitive)
    pub fn find_index(&self, student_number: &str) -> Option<usize> {
        self.students
            .iter()
            .position(|s| s.student_number == student_number)
    }

    pub fn find(&self, student_number: &str) -> Option<&Student> {
        self.find_index(student_number).and_then(|i| self.get(i))
    }

    /// Remove the first student with this number.
    /// Returns the removed record, or None if nobody matched (roster unchanged).
    pub fn remove(&mut self, student_number: &str) -> Option<Student> {
        let index = self.find_index(student_number)?;
        Some(self.students.remove(index))
    }

    /// Drop every record. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.students.len();
        self.students.clear();
        count
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
