use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::interpreter::Factory;
use crate::manager::Outcome;
use crate::session::Session;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;
use tracing::{error, info};

/// Built-in commands known to the interpreter at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly in-process against the session's [`ClassroomManager`].
///
/// [`ClassroomManager`]: crate::manager::ClassroomManager
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "add_classroom" or "list_students".
    fn name() -> &'static str;

    /// Executes the command against the session.
    ///
    /// Listing output goes to `stdout`; informational reports go to the log.
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        session: &mut Session,
    ) -> Result<ExitCode> {
        match T::execute(*self, stdout, session) {
            Ok(x) => Ok(x),
            Err(e) => {
                // Data errors are reported, never fatal: the REPL keeps going.
                error!("{e}");
                Ok(1)
            }
        }
    }
}

struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        _session: &mut Session,
    ) -> Result<ExitCode> {
        if self.is_error {
            error!("Error processing command: {}", self.output.trim_end());
            Ok(1)
        } else {
            // argh early exit with success is the generated help text.
            stdout.write_all(self.output.as_bytes())?;
            Ok(0)
        }
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Create a classroom with an empty roster and assignment list.
pub struct AddClassroom {
    #[argh(positional)]
    /// unique name of the classroom to create
    pub class_name: String,
}

impl BuiltinCommand for AddClassroom {
    fn name() -> &'static str {
        "add_classroom"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        match session.manager.add_classroom(&self.class_name) {
            Outcome::Created => info!("Classroom {} has been created.", self.class_name),
            Outcome::AlreadyExists => info!("Classroom {} already exists.", self.class_name),
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Enroll a student in an existing classroom.
pub struct AddStudent {
    #[argh(positional)]
    /// identifier of the student to enroll
    pub student_id: String,
    #[argh(positional)]
    /// name of the classroom to enroll into
    pub class_name: String,
}

impl BuiltinCommand for AddStudent {
    fn name() -> &'static str {
        "add_student"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        match session.manager.add_student(&self.student_id, &self.class_name)? {
            Outcome::Created => info!(
                "Student {} has been enrolled in {}.",
                self.student_id, self.class_name
            ),
            Outcome::AlreadyExists => info!(
                "Student {} is already enrolled in {}.",
                self.student_id, self.class_name
            ),
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Schedule an assignment for an existing classroom.
pub struct ScheduleAssignment {
    #[argh(positional)]
    /// name of the classroom to schedule for
    pub class_name: String,
    #[argh(positional, greedy)]
    /// free-text assignment details; remaining words are joined with spaces
    pub details: Vec<String>,
}

impl BuiltinCommand for ScheduleAssignment {
    fn name() -> &'static str {
        "schedule_assignment"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        if self.details.is_empty() {
            return Err(anyhow::anyhow!(
                "schedule_assignment: missing assignment details"
            ));
        }
        session
            .manager
            .schedule_assignment(&self.class_name, &self.details.join(" "))?;
        info!("Assignment for {} has been scheduled.", self.class_name);
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Record a student's submission in a classroom the student is enrolled in.
pub struct SubmitAssignment {
    #[argh(positional)]
    /// identifier of the submitting student
    pub student_id: String,
    #[argh(positional)]
    /// name of the classroom the submission belongs to
    pub class_name: String,
    #[argh(positional, greedy)]
    /// free-text submission details; remaining words are joined with spaces
    pub details: Vec<String>,
}

impl BuiltinCommand for SubmitAssignment {
    fn name() -> &'static str {
        "submit_assignment"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        if self.details.is_empty() {
            return Err(anyhow::anyhow!(
                "submit_assignment: missing assignment details"
            ));
        }
        session.manager.submit_assignment(
            &self.student_id,
            &self.class_name,
            &self.details.join(" "),
        )?;
        info!(
            "Assignment submitted by student {} in {}.",
            self.student_id, self.class_name
        );
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print all classroom names in creation order, one per line.
pub struct ListClassrooms {}

impl BuiltinCommand for ListClassrooms {
    fn name() -> &'static str {
        "list_classrooms"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let names = session.manager.list_classrooms();
        if names.is_empty() {
            info!("No classrooms available.");
            return Ok(0);
        }
        for name in names {
            writeln!(stdout, "{name}")?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Print the roster of a classroom in enrollment order, one student per line.
pub struct ListStudents {
    #[argh(positional)]
    /// name of the classroom whose roster to print
    pub class_name: String,
}

impl BuiltinCommand for ListStudents {
    fn name() -> &'static str {
        "list_students"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        let roster = session.manager.list_students(&self.class_name)?;
        if roster.is_empty() {
            info!("No students enrolled in {}.", self.class_name);
            return Ok(0);
        }
        for student in roster {
            writeln!(stdout, "{student}")?;
        }
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Leave the interactive session.
pub struct Exit {}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<ExitCode> {
        session.should_exit = true;
        Ok(0)
    }
}
