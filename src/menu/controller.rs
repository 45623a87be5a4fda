use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use super::command::MenuCommand;
use super::input::TokenReader;
use crate::grading::GradePolicy;
use crate::output;
use crate::roster::{Roster, Student};

pub const MENU_TEXT: &str = "\n=== Student Information System Menu ===\n\
1. Print all students\n\
2. Print all students (sorted by last name, then first name)\n\
3. Add a student\n\
4. Display letter grade calculation info (and current weighting)\n\
5. Print data of a specific student\n\
6. Remove a particular student\n\
7. Delete all student data\n\
8. Exit\n\
9. Set Grade Weighting\n\
Select an option: ";

const INVALID_CHOICE: &str = "Invalid choice. Please choose again.";
const GOODBYE: &str = "Exiting the program. Goodbye!";

/// What the loop does after a command finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Interactive menu loop over a roster and its grading policy.
///
/// Generic over input and output so whole sessions can run against
/// in-memory buffers.
pub struct MenuController<R, W> {
    input: TokenReader<R>,
    output: W,
    roster: Roster,
    policy: GradePolicy,
    use_colors: bool,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(input: R, output: W, policy: GradePolicy, use_colors: bool) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            roster: Roster::new(),
            policy,
            use_colors,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn policy(&self) -> &GradePolicy {
        &self.policy
    }

    /// Consume the controller and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU_TEXT).context("Failed to write menu")?;
            self.output.flush().context("Failed to flush stdout")?;

            let token = match self.input.next_token()? {
                Some(token) => token,
                None => {
                    self.finish(Flow::EndOfInput)?;
                    return Ok(());
                }
            };
            self.input.discard_line();

            let flow = match MenuCommand::parse(&token) {
                Some(command) => {
                    debug!(?command, "Dispatching menu command");
                    self.dispatch(command)?
                }
                None => {
                    debug!(token = %token, "Rejected menu choice");
                    self.say(INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow != Flow::Continue {
                self.finish(flow)?;
                return Ok(());
            }
        }
    }

    fn finish(&mut self, flow: Flow) -> Result<()> {
        if flow == Flow::EndOfInput {
            debug!("End of input, leaving menu loop");
            // The user never pressed enter after the last prompt
            writeln!(self.output).context("Failed to write output")?;
        }
        self.say(GOODBYE)?;
        self.output.flush().context("Failed to flush stdout")
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        match command {
            MenuCommand::PrintAll => {
                let text = output::format_roster(self.roster.all(), &self.policy, self.use_colors);
                self.say(&text)?;
                Ok(Flow::Continue)
            }
            MenuCommand::PrintSorted => {
                let text =
                    output::format_roster_sorted(self.roster.all(), &self.policy, self.use_colors);
                self.say(&text)?;
                Ok(Flow::Continue)
            }
            MenuCommand::AddStudent => self.add_student(),
            MenuCommand::WeightingInfo => {
                let text = output::format_weighting_info(&self.policy.weighting());
                self.say(&text)?;
                Ok(Flow::Continue)
            }
            MenuCommand::PrintStudent => self.print_student(),
            MenuCommand::RemoveStudent => self.remove_student(),
            MenuCommand::ClearAll => {
                let cleared = self.roster.clear();
                info!(cleared, "Cleared all student data");
                self.say("All student data has been cleared.")?;
                Ok(Flow::Continue)
            }
            MenuCommand::Exit => Ok(Flow::Exit),
            MenuCommand::SetWeighting => self.set_weighting(),
        }
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(first_name) = self.prompt("Enter student's first name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(last_name) = self.prompt("Enter student's last name: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(student_number) = self.prompt("Enter student's number: ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(midterm1) = self.prompt_number("Enter midterm #1 grade (0-100): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(midterm2) = self.prompt_number("Enter midterm #2 grade (0-100): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(final_exam) = self.prompt_number("Enter final exam grade (0-100): ")? else {
            return Ok(Flow::EndOfInput);
        };

        let student = Student::new(
            last_name,
            first_name,
            student_number,
            midterm1,
            midterm2,
            final_exam,
        );
        info!(student_number = %student.student_number, "Student added");
        self.roster.add(student);

        self.say("Student added successfully!")?;
        Ok(Flow::Continue)
    }

    fn print_student(&mut self) -> Result<Flow> {
        if self.roster.is_empty() {
            self.say("No students in the list.")?;
            return Ok(Flow::Continue);
        }

        let Some(student_number) = self.prompt("Enter the student number to search for: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let text = output::format_student_lookup(
            &self.roster,
            &student_number,
            &self.policy,
            self.use_colors,
        );
        self.say(&text)?;
        Ok(Flow::Continue)
    }

    fn remove_student(&mut self) -> Result<Flow> {
        if self.roster.is_empty() {
            self.say("No students to remove.")?;
            return Ok(Flow::Continue);
        }

        let Some(student_number) =
            self.prompt("Enter the student number of the student to remove: ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        match self.roster.remove(&student_number) {
            Some(_) => {
                info!(student_number = %student_number, "Student removed");
                self.say("Student removed successfully.")?;
            }
            None => {
                debug!(student_number = %student_number, "Remove target not found");
                self.say(output::STUDENT_NOT_FOUND)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn set_weighting(&mut self) -> Result<Flow> {
        let current = output::format_weighting_block("Current Weighting:", &self.policy.weighting());
        self.say(&current)?;

        let Some(midterm1) = self.prompt_number("Enter new percentage for Midterm #1 (0-100): ")?
        else {
            return Ok(Flow::EndOfInput);
        };
        let Some(midterm2) = self.prompt_number("Enter new percentage for Midterm #2 (0-100): ")?
        else {
            return Ok(Flow::EndOfInput);
        };
        let Some(final_exam) = self.prompt_number("Enter new percentage for Final (0-100): ")?
        else {
            return Ok(Flow::EndOfInput);
        };

        match self.policy.set_weights(midterm1, midterm2, final_exam) {
            Ok(()) => {
                info!(?midterm1, ?midterm2, ?final_exam, "Grade weighting updated");
                let updated =
                    output::format_weighting_block("New Weighting Set:", &self.policy.weighting());
                self.say(&updated)?;
            }
            Err(e) => {
                warn!(%e, "Rejected grade weighting");
                self.say(&e.to_string())?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Print a line of output
    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write output")
    }

    /// Show a prompt and read one whitespace-delimited token.
    /// None means input ended.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        self.input.next_token()
    }

    /// Prompt until the user enters something that parses as a finite number.
    fn prompt_number(&mut self, message: &str) -> Result<Option<f64>> {
        loop {
            let Some(token) = self.prompt(message)? else {
                return Ok(None);
            };
            // "nan" and "inf" parse as f64 but are not numbers anyone can grade with
            match token.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                _ => {
                    debug!(token = %token, "Unparseable numeric input");
                    self.say(&format!("  Invalid: '{}' is not a number. Try again.", token))?;
                }
            }
        }
    }
}
