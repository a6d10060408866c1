//! Domain models for academic records.
//!
//! This module contains the core domain types including people, courses,
//! grades, the keyed entity store and the registry that ties them together.

mod config;
pub use config::{Config, ConfigError};

/// Strongly-typed entity identifiers.
pub mod id;
pub use id::{CourseId, StudentId, TeacherId};

/// Students and teachers.
pub mod person;
pub use person::{PersonError, Student, Teacher};

/// Courses, their rosters, attendance and grade books.
pub mod course;
pub use course::{AttendanceError, Course, CourseError, CourseKind, CourseType, Difficulty};

mod grade;
pub use grade::{Grade, GradeError};

/// Keyed storage for entities.
pub mod store;
pub use store::{Entity, Store};

mod university;
pub use university::{RegistryError, University};

/// Serialisable read-only projections of entities.
pub mod view;
pub use view::{CourseDetails, CourseView, StudentView, TeacherView};
