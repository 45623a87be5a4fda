pub mod formatter;

pub use formatter::{
    format_number, format_roster, format_roster_sorted, format_student, format_student_lookup,
    format_weighting, format_weighting_block, format_weighting_info, should_use_colors,
    sorted_by_name, EMPTY_ROSTER, STUDENT_NOT_FOUND,
};
