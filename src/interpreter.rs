use crate::command::{CommandFactory, ExitCode};
use crate::manager::ClassroomManager;
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::Write;
use tracing::error;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the built-in classroom commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A line-oriented interpreter for the classroom administration commands.
///
/// The interpreter owns a [`Session`] and a list of [`CommandFactory`] objects
/// that are queried to create commands by name. See [`Default`] for the
/// built-in commands included out of the box.
///
/// Example
/// ```
/// use classroom_commands::Interpreter;
/// let mut interp = Interpreter::default();
/// let code = interp.run("add_classroom", &["Math"]).unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    session: Session,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            session: Session::new(),
            commands,
        }
    }

    /// Read-only view of the classroom registry, for embedding and tests.
    pub fn manager(&self) -> &ClassroomManager {
        &self.session.manager
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Listing output goes to standard output. Returns the command's exit
    /// code, or an error if the command name is not recognized.
    pub fn run(&mut self, name: &str, args: &[&str]) -> anyhow::Result<ExitCode> {
        self.run_with_output(name, args, &mut std::io::stdout())
    }

    /// Same as [`run`](Self::run) but with a caller-provided output stream.
    pub fn run_with_output(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, args) {
                return cmd.execute(stdout, &mut self.session);
            }
        }
        Err(anyhow::anyhow!("Unknown command."))
    }

    /// Tokenize a single input line and dispatch it to the matching command.
    ///
    /// Blank lines are ignored. Errors are reported and swallowed so that the
    /// caller can keep feeding lines regardless of outcome.
    pub fn dispatch_line(&mut self, line: &str) {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return;
        };
        let args: Vec<&str> = words.collect();
        if let Err(e) = self.run(name, &args) {
            error!("{e}");
        }
    }

    /// Interactive Read-Eval-Print Loop over standard input.
    ///
    /// Terminates on `exit`, end of input, or interrupt; never on a data error.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("classroom> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    self.dispatch_line(&line);
                    if self.session.should_exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the full set of classroom commands:
    /// `add_classroom`, `add_student`, `schedule_assignment`,
    /// `submit_assignment`, `list_classrooms`, `list_students`, `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<AddClassroom>::default()),
            Box::new(Factory::<AddStudent>::default()),
            Box::new(Factory::<ScheduleAssignment>::default()),
            Box::new(Factory::<SubmitAssignment>::default()),
            Box::new(Factory::<ListClassrooms>::default()),
            Box::new(Factory::<ListStudents>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}
