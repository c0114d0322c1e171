use std::collections::HashMap;

/// Errors produced by [`ClassroomManager`] operations.
///
/// Every variant is recoverable: the caller reports it and keeps accepting
/// commands. Duplicate classrooms or enrollments are deliberately *not*
/// errors — see [`Outcome::AlreadyExists`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManagerError {
    /// The operation referenced a classroom that was never created.
    #[error("Classroom {0} does not exist.")]
    ClassroomNotFound(String),
    /// A submission was attempted by a student absent from the classroom roster.
    #[error("Student {student_id} is not enrolled in {class_name}.")]
    NotEnrolled {
        /// The student that tried to submit.
        student_id: String,
        /// The classroom the submission was aimed at.
        class_name: String,
    },
}

/// Result of an insertion that tolerates duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new entry was created.
    Created,
    /// The entry was already present; state is unchanged.
    AlreadyExists,
}

/// A named classroom: its roster and its scheduled assignments.
#[derive(Debug, Clone)]
struct Classroom {
    name: String,
    /// Student identifiers in enrollment order, no duplicates.
    roster: Vec<String>,
    /// Assignment details in scheduling order, duplicates allowed.
    assignments: Vec<String>,
}

/// In-memory registry of classrooms, enrollments, and submissions.
///
/// All state is owned here and mutated only through the methods below. The
/// manager lives for a single process session; there is no persistence.
/// Collections are small and every lookup is a linear scan, which keeps the
/// representation simple and the classroom creation order intact.
#[derive(Debug, Default)]
pub struct ClassroomManager {
    classrooms: Vec<Classroom>,
    /// (student_id, class_name) -> submitted assignment details, append-only.
    submissions: HashMap<(String, String), Vec<String>>,
}

impl ClassroomManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    fn classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.name == name)
    }

    fn classroom_mut(&mut self, name: &str) -> Option<&mut Classroom> {
        self.classrooms.iter_mut().find(|c| c.name == name)
    }

    /// Register a classroom with an empty roster and assignment list.
    ///
    /// Creating a classroom that already exists is a no-op, reported as
    /// [`Outcome::AlreadyExists`].
    pub fn add_classroom(&mut self, name: &str) -> Outcome {
        if self.classroom(name).is_some() {
            return Outcome::AlreadyExists;
        }
        self.classrooms.push(Classroom {
            name: name.to_owned(),
            roster: Vec::new(),
            assignments: Vec::new(),
        });
        Outcome::Created
    }

    /// Enroll a student in a classroom.
    ///
    /// Fails with [`ManagerError::ClassroomNotFound`] if the classroom is
    /// absent. Enrolling a student twice is a no-op.
    pub fn add_student(
        &mut self,
        student_id: &str,
        class_name: &str,
    ) -> Result<Outcome, ManagerError> {
        let classroom = self
            .classroom_mut(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_owned()))?;
        if classroom.roster.iter().any(|s| s == student_id) {
            return Ok(Outcome::AlreadyExists);
        }
        classroom.roster.push(student_id.to_owned());
        Ok(Outcome::Created)
    }

    /// Schedule an assignment for a classroom.
    ///
    /// Details are appended as-is; scheduling the same details twice keeps
    /// both entries.
    pub fn schedule_assignment(
        &mut self,
        class_name: &str,
        details: &str,
    ) -> Result<(), ManagerError> {
        let classroom = self
            .classroom_mut(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_owned()))?;
        classroom.assignments.push(details.to_owned());
        Ok(())
    }

    /// Record a student's submission in a classroom.
    ///
    /// The classroom must exist and the student must be on its roster; the
    /// submission list for the (student, classroom) pair is created lazily
    /// on first submission.
    pub fn submit_assignment(
        &mut self,
        student_id: &str,
        class_name: &str,
        details: &str,
    ) -> Result<(), ManagerError> {
        let classroom = self
            .classroom(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_owned()))?;
        if !classroom.roster.iter().any(|s| s == student_id) {
            return Err(ManagerError::NotEnrolled {
                student_id: student_id.to_owned(),
                class_name: class_name.to_owned(),
            });
        }
        self.submissions
            .entry((student_id.to_owned(), class_name.to_owned()))
            .or_default()
            .push(details.to_owned());
        Ok(())
    }

    /// All classroom names in creation order.
    pub fn list_classrooms(&self) -> Vec<&str> {
        self.classrooms.iter().map(|c| c.name.as_str()).collect()
    }

    /// The roster of a classroom in enrollment order.
    pub fn list_students(&self, class_name: &str) -> Result<&[String], ManagerError> {
        self.classroom(class_name)
            .map(|c| c.roster.as_slice())
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_owned()))
    }

    /// The assignments scheduled for a classroom, in scheduling order.
    pub fn assignments(&self, class_name: &str) -> Result<&[String], ManagerError> {
        self.classroom(class_name)
            .map(|c| c.assignments.as_slice())
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_owned()))
    }

    /// Submissions recorded for a (student, classroom) pair, if any.
    pub fn submissions(&self, student_id: &str, class_name: &str) -> Option<&[String]> {
        self.submissions
            .get(&(student_id.to_owned(), class_name.to_owned()))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_classroom_is_idempotent() {
        let mut mgr = ClassroomManager::new();
        assert_eq!(mgr.add_classroom("Math"), Outcome::Created);
        assert_eq!(mgr.add_classroom("Math"), Outcome::AlreadyExists);

        assert_eq!(mgr.list_classrooms(), vec!["Math"]);
        assert!(mgr.list_students("Math").unwrap().is_empty());
        assert!(mgr.assignments("Math").unwrap().is_empty());
    }

    #[test]
    fn test_add_student_to_missing_classroom() {
        let mut mgr = ClassroomManager::new();
        let err = mgr.add_student("s1", "Physics").unwrap_err();
        assert_eq!(err, ManagerError::ClassroomNotFound("Physics".to_string()));
        assert!(mgr.list_classrooms().is_empty());
    }

    #[test]
    fn test_enrollment_is_unique() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("Math");
        assert_eq!(mgr.add_student("s1", "Math"), Ok(Outcome::Created));
        assert_eq!(mgr.add_student("s1", "Math"), Ok(Outcome::AlreadyExists));
        assert_eq!(mgr.list_students("Math").unwrap(), ["s1".to_string()]);
    }

    #[test]
    fn test_schedule_requires_existing_classroom() {
        let mut mgr = ClassroomManager::new();
        let err = mgr.schedule_assignment("Math", "HW1").unwrap_err();
        assert_eq!(err, ManagerError::ClassroomNotFound("Math".to_string()));
    }

    #[test]
    fn test_schedule_keeps_duplicates_in_order() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("Math");
        mgr.schedule_assignment("Math", "HW1").unwrap();
        mgr.schedule_assignment("Math", "HW2").unwrap();
        mgr.schedule_assignment("Math", "HW1").unwrap();
        assert_eq!(
            mgr.assignments("Math").unwrap(),
            ["HW1".to_string(), "HW2".to_string(), "HW1".to_string()]
        );
    }

    #[test]
    fn test_classrooms_listed_in_creation_order() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("A");
        mgr.add_classroom("B");
        mgr.add_classroom("C");
        assert_eq!(mgr.list_classrooms(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_submission_happy_path() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("Math");
        mgr.add_student("s1", "Math").unwrap();
        mgr.schedule_assignment("Math", "HW1").unwrap();
        mgr.submit_assignment("s1", "Math", "HW1 answer").unwrap();

        assert_eq!(
            mgr.submissions("s1", "Math").unwrap(),
            ["HW1 answer".to_string()]
        );
    }

    #[test]
    fn test_submission_requires_enrollment() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("Math");
        mgr.add_student("s1", "Math").unwrap();

        let err = mgr.submit_assignment("s2", "Math", "x").unwrap_err();
        assert_eq!(
            err,
            ManagerError::NotEnrolled {
                student_id: "s2".to_string(),
                class_name: "Math".to_string(),
            }
        );
        assert!(mgr.submissions("s2", "Math").is_none());
    }

    #[test]
    fn test_submission_requires_classroom() {
        let mut mgr = ClassroomManager::new();
        let err = mgr.submit_assignment("s1", "Math", "x").unwrap_err();
        assert_eq!(err, ManagerError::ClassroomNotFound("Math".to_string()));
        assert!(mgr.submissions("s1", "Math").is_none());
    }

    #[test]
    fn test_submissions_append_for_same_pair() {
        let mut mgr = ClassroomManager::new();
        mgr.add_classroom("Math");
        mgr.add_student("s1", "Math").unwrap();
        mgr.submit_assignment("s1", "Math", "first").unwrap();
        mgr.submit_assignment("s1", "Math", "second").unwrap();
        assert_eq!(
            mgr.submissions("s1", "Math").unwrap(),
            ["first".to_string(), "second".to_string()]
        );
    }
}
