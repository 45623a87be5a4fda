use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::grading::{GradePolicy, LetterGrade, Weighting};
use crate::roster::{Roster, Student};

pub const EMPTY_ROSTER: &str = "No students to display.";
pub const STUDENT_NOT_FOUND: &str = "Student not found.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render a number the way a person would type it: "80", "85.5", "33.3333".
/// At most four decimals, trailing zeros dropped.
/// Magnitudes below 0.00005 therefore render as "0".
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn colored_letter(letter: LetterGrade) -> String {
    match letter {
        LetterGrade::A | LetterGrade::B => letter.green().to_string(),
        LetterGrade::C => letter.yellow().to_string(),
        LetterGrade::D | LetterGrade::F => letter.red().to_string(),
    }
}

/// Format one student as a single line with scores, average and letter grade
/// Format: "{last}, {first} ({number}) - Midterm1: .., Midterm2: .., Final: .., Avg: 80.00%, Letter: C"
pub fn format_student(student: &Student, policy: &GradePolicy, use_colors: bool) -> String {
    let average = policy.average(student);
    let letter = policy.letter_grade(student);

    if use_colors {
        format!(
            "{} ({}) - Midterm1: {}, Midterm2: {}, Final: {}, Avg: {:.2}%, Letter: {}",
            student.display_name().bold(),
            student.student_number.cyan(),
            format_number(student.midterm1),
            format_number(student.midterm2),
            format_number(student.final_exam),
            average,
            colored_letter(letter)
        )
    } else {
        format!(
            "{} ({}) - Midterm1: {}, Midterm2: {}, Final: {}, Avg: {:.2}%, Letter: {}",
            student.display_name(),
            student.student_number,
            format_number(student.midterm1),
            format_number(student.midterm2),
            format_number(student.final_exam),
            average,
            letter
        )
    }
}

fn format_listing<'a, I>(header: &str, students: I, policy: &GradePolicy, use_colors: bool) -> String
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut lines = vec![header.to_string()];
    lines.extend(
        students
            .into_iter()
            .map(|s| format_student(s, policy, use_colors)),
    );
    lines.join("\n")
}

/// Format every student in stored order, preceded by a header line
pub fn format_roster(students: &[Student], policy: &GradePolicy, use_colors: bool) -> String {
    if students.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    format_listing("List of all students:", students, policy, use_colors)
}

/// Students ordered by last name, then first name.
/// Works on a vector of references; the input slice is never reordered.
pub fn sorted_by_name(students: &[Student]) -> Vec<&Student> {
    let mut sorted: Vec<&Student> = students.iter().collect();
    // Vec::sort_by is stable, so full-name ties keep insertion order
    sorted.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    sorted
}

/// Format every student sorted by last name, then first name
pub fn format_roster_sorted(students: &[Student], policy: &GradePolicy, use_colors: bool) -> String {
    if students.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    format_listing(
        "Students sorted by last name, then first name:",
        sorted_by_name(students),
        policy,
        use_colors,
    )
}

/// Format the first student matching `student_number`, or the not-found message
pub fn format_student_lookup(
    roster: &Roster,
    student_number: &str,
    policy: &GradePolicy,
    use_colors: bool,
) -> String {
    match roster.find(student_number) {
        Some(student) => format_student(student, policy, use_colors),
        None => STUDENT_NOT_FOUND.to_string(),
    }
}

/// Single-line weighting summary: "Midterm1: 25%, Midterm2: 25%, Final: 50%"
pub fn format_weighting(weighting: &Weighting) -> String {
    let (m1, m2, f) = weighting.percentages();
    format!(
        "Midterm1: {}%, Midterm2: {}%, Final: {}%",
        format_number(m1),
        format_number(m2),
        format_number(f)
    )
}

/// Titled weighting block, one component per line
pub fn format_weighting_block(title: &str, weighting: &Weighting) -> String {
    let (m1, m2, f) = weighting.percentages();
    format!(
        "{}\nMidterm1: {}%\nMidterm2: {}%\nFinal: {}%",
        title,
        format_number(m1),
        format_number(m2),
        format_number(f)
    )
}

/// Explanation shown by the "letter grade calculation info" menu entry
pub fn format_weighting_info(weighting: &Weighting) -> String {
    format!(
        "Letter grades are always calculated based on current weightings:\n{}\nUse the \"Set Grade Weighting\" option (option 9) to adjust.",
        format_weighting(weighting)
    )
}
