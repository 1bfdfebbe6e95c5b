//! # School Roster Backend
//!
//! Persistence layer for a school roster: teachers and students in a
//! many-to-many relationship, stored in SQLite through
//! [sqlx](https://crates.io/crates/sqlx), plus a development HTTP server
//! built with [Axum](https://crates.io/crates/axum).
//!
//! ## Data Model
//!
//! ```text
//! teacher (id, name, subject, email)
//!    └── teacher_student (teacher_id, student_id)   composite primary key
//!          └── student (id, name, age, email)
//! ```
//!
//! - `name` is required and at most 100 characters for both entities.
//! - `subject` is required and at most 50 characters.
//! - `email` is required, at most 120 characters and unique within its own
//!   table. A teacher and a student may share an address.
//! - Deleting a teacher or a student deletes its association rows.
//!
//! The relationship is read with two explicit accessors,
//! [`db::Roster::students_of`] and [`db::Roster::teachers_of`], each of which
//! queries storage when called.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Health check and router configuration |
//! | [`config`] | TOML configuration with environment overrides |
//! | [`db`] | Connection pool, schema types and the roster store |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//!
//! Importing the library has no side effects. The schema is created by the
//! `school-roster-backend` binary on startup.
//!
//! ## Example Usage
//!
//! ```bash
//! # Creates ./school.db and listens on 127.0.0.1:5000
//! cargo run
//!
//! # Custom storage location and port
//! DATABASE_URL=sqlite://data/school.db PORT=8080 cargo run
//!
//! curl http://127.0.0.1:5000/health
//! ```
//!
//! ## Dependencies
//!
//! - **axum** (0.8): Async web framework
//! - **tower-http** (0.6): Request tracing middleware
//! - **sqlx** (0.8): SQLite pool, queries and embedded migrations
//! - **utoipa** (5.4): OpenAPI documentation generation
//! - **tokio** (1.49): Async runtime
//! - **tracing** (0.1): Structured logging

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
