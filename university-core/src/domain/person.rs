use std::collections::BTreeSet;

use non_empty_string::NonEmptyString;
use thiserror::Error;

use crate::domain::{
    CourseId, StudentId, TeacherId,
    store::Entity,
    view::{StudentView, TeacherView},
};

/// Errors that can occur when constructing a student or teacher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    /// The name is empty or only whitespace.
    #[error("name must be a non-empty string")]
    EmptyName,
    /// The contact info is empty or only whitespace.
    #[error("contact info must be a non-empty string")]
    EmptyContactInfo,
    /// A specialization is empty or only whitespace.
    #[error("specializations must be non-empty strings")]
    BlankSpecialization,
}

fn non_blank(value: String, error: PersonError) -> Result<NonEmptyString, PersonError> {
    NonEmptyString::new(value.trim().to_string()).map_err(|_| error)
}

/// A student, who may be enrolled in any number of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    name: NonEmptyString,
    contact_info: NonEmptyString,
    enrolled_courses: BTreeSet<CourseId>,
}

impl Student {
    /// Creates a new student with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or contact info is blank.
    pub fn new(
        name: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Result<Self, PersonError> {
        Ok(Self {
            id: StudentId::new(),
            name: non_blank(name.into(), PersonError::EmptyName)?,
            contact_info: non_blank(contact_info.into(), PersonError::EmptyContactInfo)?,
            enrolled_courses: BTreeSet::new(),
        })
    }

    /// The student's identifier.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// The student's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// How to reach the student.
    #[must_use]
    pub fn contact_info(&self) -> &str {
        self.contact_info.as_str()
    }

    /// The courses this student is enrolled in.
    #[must_use]
    pub const fn enrolled_courses(&self) -> &BTreeSet<CourseId> {
        &self.enrolled_courses
    }

    pub(crate) fn enroll_in_course(&mut self, course: CourseId) {
        self.enrolled_courses.insert(course);
    }

    pub(crate) fn withdraw_from_course(&mut self, course: &CourseId) {
        self.enrolled_courses.remove(course);
    }

    /// A serialisable snapshot of this student.
    #[must_use]
    pub fn view(&self) -> StudentView<'_> {
        StudentView {
            id: self.id,
            name: self.name(),
            contact_info: self.contact_info(),
            enrolled_courses: self.enrolled_courses.iter().copied().collect(),
        }
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> StudentId {
        self.id
    }
}

/// A teacher, who may be assigned to teach any number of courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    id: TeacherId,
    name: NonEmptyString,
    contact_info: NonEmptyString,
    specializations: BTreeSet<String>,
    assigned_courses: BTreeSet<CourseId>,
}

impl Teacher {
    /// Creates a new teacher with a freshly generated identifier.
    ///
    /// Specializations are trimmed and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, contact info or any specialization is
    /// blank.
    pub fn new<I, S>(
        name: impl Into<String>,
        contact_info: impl Into<String>,
        specializations: I,
    ) -> Result<Self, PersonError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let specializations = specializations
            .into_iter()
            .map(|s| {
                let s: String = s.into();
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Err(PersonError::BlankSpecialization)
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            id: TeacherId::new(),
            name: non_blank(name.into(), PersonError::EmptyName)?,
            contact_info: non_blank(contact_info.into(), PersonError::EmptyContactInfo)?,
            specializations,
            assigned_courses: BTreeSet::new(),
        })
    }

    /// The teacher's identifier.
    #[must_use]
    pub const fn id(&self) -> TeacherId {
        self.id
    }

    /// The teacher's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// How to reach the teacher.
    #[must_use]
    pub fn contact_info(&self) -> &str {
        self.contact_info.as_str()
    }

    /// Subject areas the teacher specializes in.
    #[must_use]
    pub const fn specializations(&self) -> &BTreeSet<String> {
        &self.specializations
    }

    /// The courses this teacher is assigned to.
    #[must_use]
    pub const fn assigned_courses(&self) -> &BTreeSet<CourseId> {
        &self.assigned_courses
    }

    pub(crate) fn assign_course(&mut self, course: CourseId) {
        self.assigned_courses.insert(course);
    }

    pub(crate) fn remove_course(&mut self, course: &CourseId) {
        self.assigned_courses.remove(course);
    }

    /// A serialisable snapshot of this teacher.
    #[must_use]
    pub fn view(&self) -> TeacherView<'_> {
        TeacherView {
            id: self.id,
            name: self.name(),
            contact_info: self.contact_info(),
            specializations: self.specializations.iter().map(String::as_str).collect(),
            assigned_courses: self.assigned_courses.iter().copied().collect(),
        }
    }
}

impl Entity for Teacher {
    type Id = TeacherId;

    fn id(&self) -> TeacherId {
        self.id
    }
}
