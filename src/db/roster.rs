//! Teacher and student persistence.
//!
//! The many-to-many relationship lives in a single `teacher_student` table.
//! It is read through two independent accessors, [`Roster::students_of`]
//! and [`Roster::teachers_of`]; both query storage on every call.

use super::{
    DatabasePool, NewStudent, NewTeacher, StoreError, Student, StudentUpdate, Teacher,
    TeacherStudent, TeacherUpdate,
};
use tracing::debug;


const TEACHER_COLUMNS: &str = "id, name, subject, email";
const STUDENT_COLUMNS: &str = "id, name, age, email";

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    /// Number of teachers.
    pub teachers: i64,
    /// Number of students.
    pub students: i64,
    /// Number of teacher/student links.
    pub links: i64,
}

/// Store for teachers, students and their links.
#[derive(Clone)]
pub struct Roster {
    db: DatabasePool,
}

impl Roster {
    /// Creates a roster over an initialized database.
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }

    /// Returns the database pool backing this roster.
    #[must_use]
    pub fn database(&self) -> &DatabasePool {
        &self.db
    }

    // ========================================================================
    // Teachers
    // ========================================================================

    /// Inserts a teacher and returns the stored row.
    ///
    /// # Errors
    /// Fails with a `Unique` constraint error if the email is taken by
    /// another teacher, or `Check` if a column exceeds its length limit.
    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Teacher, StoreError> {
        let created: Teacher = sqlx::query_as(&format!(
            "INSERT INTO teacher (name, subject, email) VALUES (?, ?, ?) RETURNING {TEACHER_COLUMNS}"
        ))
        .bind(&teacher.name)
        .bind(&teacher.subject)
        .bind(&teacher.email)
        .fetch_one(self.db.pool())
        .await?;

        debug!(id = created.id, "Created {}", created);
        Ok(created)
    }

    /// Fetches a teacher by id.
    pub async fn teacher(&self, id: i64) -> Result<Option<Teacher>, StoreError> {
        let teacher: Option<Teacher> =
            sqlx::query_as(&format!("SELECT {TEACHER_COLUMNS} FROM teacher WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(teacher)
    }

    /// Fetches a teacher by email.
    pub async fn teacher_by_email(&self, email: &str) -> Result<Option<Teacher>, StoreError> {
        let teacher: Option<Teacher> =
            sqlx::query_as(&format!("SELECT {TEACHER_COLUMNS} FROM teacher WHERE email = ?"))
                .bind(email)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(teacher)
    }

    /// Lists all teachers ordered by id.
    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        let teachers: Vec<Teacher> =
            sqlx::query_as(&format!("SELECT {TEACHER_COLUMNS} FROM teacher ORDER BY id"))
                .fetch_all(self.db.pool())
                .await?;
        Ok(teachers)
    }

    /// Applies a partial update; returns `None` if the teacher does not exist.
    ///
    /// # Errors
    /// Fails with a constraint error if the new values violate the schema.
    pub async fn update_teacher(
        &self,
        id: i64,
        update: &TeacherUpdate,
    ) -> Result<Option<Teacher>, StoreError> {
        let teacher: Option<Teacher> = sqlx::query_as(&format!(
            r#"
            UPDATE teacher
            SET name = COALESCE(?, name),
                subject = COALESCE(?, subject),
                email = COALESCE(?, email)
            WHERE id = ?
            RETURNING {TEACHER_COLUMNS}
            "#
        ))
        .bind(update.name.as_deref())
        .bind(update.subject.as_deref())
        .bind(update.email.as_deref())
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(teacher)
    }

    /// Deletes a teacher and its links; returns whether a row was removed.
    pub async fn delete_teacher(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM teacher WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ========================================================================
    // Students
    // ========================================================================

    /// Inserts a student and returns the stored row.
    ///
    /// # Errors
    /// Fails with a `Unique` constraint error if the email is taken by
    /// another student, or `Check` if a column exceeds its length limit.
    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, StoreError> {
        let created: Student = sqlx::query_as(&format!(
            "INSERT INTO student (name, age, email) VALUES (?, ?, ?) RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.email)
        .fetch_one(self.db.pool())
        .await?;

        debug!(id = created.id, "Created {}", created);
        Ok(created)
    }

    /// Fetches a student by id.
    pub async fn student(&self, id: i64) -> Result<Option<Student>, StoreError> {
        let student: Option<Student> =
            sqlx::query_as(&format!("SELECT {STUDENT_COLUMNS} FROM student WHERE id = ?"))
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(student)
    }

    /// Fetches a student by email.
    pub async fn student_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        let student: Option<Student> =
            sqlx::query_as(&format!("SELECT {STUDENT_COLUMNS} FROM student WHERE email = ?"))
                .bind(email)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(student)
    }

    /// Lists all students ordered by id.
    pub async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let students: Vec<Student> =
            sqlx::query_as(&format!("SELECT {STUDENT_COLUMNS} FROM student ORDER BY id"))
                .fetch_all(self.db.pool())
                .await?;
        Ok(students)
    }

    /// Applies a partial update; returns `None` if the student does not exist.
    ///
    /// # Errors
    /// Fails with a constraint error if the new values violate the schema.
    pub async fn update_student(
        &self,
        id: i64,
        update: &StudentUpdate,
    ) -> Result<Option<Student>, StoreError> {
        let student: Option<Student> = sqlx::query_as(&format!(
            r#"
            UPDATE student
            SET name = COALESCE(?, name),
                age = CASE WHEN ? THEN ? ELSE age END,
                email = COALESCE(?, email)
            WHERE id = ?
            RETURNING {STUDENT_COLUMNS}
            "#
        ))
        .bind(update.name.as_deref())
        .bind(update.age.is_some())
        .bind(update.age.flatten())
        .bind(update.email.as_deref())
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(student)
    }

    /// Deletes a student and its links; returns whether a row was removed.
    pub async fn delete_student(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM student WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ========================================================================
    // Links
    // ========================================================================

    /// Records that `teacher_id` teaches `student_id`.
    ///
    /// Returns `false` if the link already existed.
    ///
    /// # Errors
    /// Fails with a `ForeignKey` constraint error if either id is unknown.
    pub async fn assign(&self, teacher_id: i64, student_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO teacher_student (teacher_id, student_id)
            VALUES (?, ?)
            ON CONFLICT (teacher_id, student_id) DO NOTHING
            "#,
        )
        .bind(teacher_id)
        .bind(student_id)
        .execute(self.db.pool())
        .await?;

        let inserted = result.rows_affected() > 0;
        debug!(teacher_id, student_id, inserted, "Assigned student to teacher");
        Ok(inserted)
    }

    /// Removes a link; returns whether one existed.
    pub async fn unassign(&self, teacher_id: i64, student_id: i64) -> Result<bool, StoreError> {
        let result =
            sqlx::query("DELETE FROM teacher_student WHERE teacher_id = ? AND student_id = ?")
                .bind(teacher_id)
                .bind(student_id)
                .execute(self.db.pool())
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Students taught by a teacher, ordered by id.
    pub async fn students_of(&self, teacher_id: i64) -> Result<Vec<Student>, StoreError> {
        let students: Vec<Student> = sqlx::query_as(
            r#"
            SELECT s.id, s.name, s.age, s.email
            FROM student s
            JOIN teacher_student ts ON ts.student_id = s.id
            WHERE ts.teacher_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(teacher_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(students)
    }

    /// Teachers of a student, ordered by id.
    pub async fn teachers_of(&self, student_id: i64) -> Result<Vec<Teacher>, StoreError> {
        let teachers: Vec<Teacher> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, t.subject, t.email
            FROM teacher t
            JOIN teacher_student ts ON ts.teacher_id = t.id
            WHERE ts.student_id = ?
            ORDER BY t.id
            "#,
        )
        .bind(student_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(teachers)
    }

    /// All association rows.
    pub async fn links(&self) -> Result<Vec<TeacherStudent>, StoreError> {
        let links: Vec<TeacherStudent> = sqlx::query_as(
            "SELECT teacher_id, student_id FROM teacher_student ORDER BY teacher_id, student_id",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(links)
    }

    /// Counts rows in each table.
    pub async fn stats(&self) -> Result<RosterStats, StoreError> {
        let (teachers, students, links): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM teacher),
                (SELECT COUNT(*) FROM student),
                (SELECT COUNT(*) FROM teacher_student)
            "#,
        )
        .fetch_one(self.db.pool())
        .await?;

        Ok(RosterStats {
            teachers,
            students,
            links,
        })
    }
}
