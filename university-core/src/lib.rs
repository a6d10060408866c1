//! Core types and logic for in-memory university academic records.
//!
//! This crate provides students, teachers and courses, and the [`University`]
//! registry which owns them and keeps the relationships between them
//! consistent.

/// Domain types and business logic.
pub mod domain;
pub use domain::{
    Config, Course, CourseId, CourseKind, Difficulty, Grade, RegistryError, Student, StudentId,
    Teacher, TeacherId, University,
};
