use crate::manager::ClassroomManager;

/// Mutable state shared by every command the interpreter dispatches.
///
/// The session contains:
/// - `manager`: the classroom registry that all commands read and mutate.
/// - `should_exit`: a flag that a REPL loop can check to know when to terminate.
///
/// Note: fields are public for simplicity to keep the crate small.
#[derive(Debug, Default)]
pub struct Session {
    /// The single classroom registry for this process.
    pub manager: ClassroomManager,
    /// When set to true, indicates that an interactive loop should exit.
    pub should_exit: bool,
}

impl Session {
    /// Start a session with an empty classroom registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.manager.list_classrooms().is_empty());
        assert!(!session.should_exit);
    }
}
