//! # Storage Module
//!
//! Persistence for teacher records.
//!
//! The domain layer talks to storage only through [`TeacherStorage`], so the
//! SQLite repository can be swapped for another backend (or a test double)
//! without touching the service or the REST layer.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite through SQLx, schema created on connect
//! - **Tests**: in-memory SQLite, one fresh database per test
//!
//! Each call is a single statement, so every operation is atomic on its own.
//! There is no cross-request transaction and no concurrency token: two
//! updates to the same record resolve as last write wins.

pub mod connection;
pub mod teacher_repository;
pub mod traits;

pub use connection::DbConnection;
pub use teacher_repository::TeacherRepository;
pub use traits::TeacherStorage;
