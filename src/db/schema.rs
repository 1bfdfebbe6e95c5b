//! Database schema types.
//!
//! Row types mirror the `teacher`, `student` and `teacher_student` tables
//! created by the bundled migration.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

/// Maximum length of a teacher name.
pub const TEACHER_NAME_MAX_LEN: usize = 100;
/// Maximum length of a teacher subject.
pub const TEACHER_SUBJECT_MAX_LEN: usize = 50;
/// Maximum length of a student name.
pub const STUDENT_NAME_MAX_LEN: usize = 100;
/// Maximum length of an email address, for both entities.
pub const EMAIL_MAX_LEN: usize = 120;

/// Teacher record from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    /// Storage-generated identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Subject taught.
    pub subject: String,
    /// Email address, unique among teachers.
    pub email: String,
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Teacher {}>", self.name)
    }
}

/// Student record from the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    /// Storage-generated identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Age in years, if known.
    pub age: Option<i64>,
    /// Email address, unique among students.
    pub email: String,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Student {}>", self.name)
    }
}

/// Row of the `teacher_student` association table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeacherStudent {
    /// Teaching teacher.
    pub teacher_id: i64,
    /// Taught student.
    pub student_id: i64,
}

/// Fields for inserting a teacher.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewTeacher {
    /// Full name.
    pub name: String,
    /// Subject taught.
    pub subject: String,
    /// Email address.
    pub email: String,
}

impl NewTeacher {
    /// Creates a new teacher payload.
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            email: email.into(),
        }
    }
}

/// Fields for inserting a student.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewStudent {
    /// Full name.
    pub name: String,
    /// Optional age.
    pub age: Option<i64>,
    /// Email address.
    pub email: String,
}

impl NewStudent {
    /// Creates a new student payload.
    pub fn new(name: impl Into<String>, age: Option<i64>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// Partial update of a teacher. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TeacherUpdate {
    /// New full name.
    pub name: Option<String>,
    /// New subject.
    pub subject: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

/// Partial update of a student. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    /// New full name.
    pub name: Option<String>,
    /// New age; `Some(None)` clears it.
    pub age: Option<Option<i64>>,
    /// New email address.
    pub email: Option<String>,
}
