use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    num::NonZeroUsize,
    str::FromStr,
};

use chrono::NaiveDate;
use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    CourseId, Grade, GradeError, StudentId, TeacherId,
    store::Entity,
    view::{CourseDetails, CourseView},
};

/// The broad category of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// A mathematics course, graded by difficulty.
    Math,
    /// An art course, which may require materials.
    Art,
}

impl CourseType {
    /// The lowercase wire name of this course type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Art => "art",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseType {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(Self::Math),
            "art" => Ok(Self::Art),
            other => Err(CourseError::UnknownType(other.to_string())),
        }
    }
}

/// Difficulty level of a math course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Introductory material.
    Beginner,
    /// Assumes some prior study.
    Intermediate,
    /// Assumes substantial prior study.
    Advanced,
}

impl Difficulty {
    /// The lowercase wire name of this difficulty level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CourseError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Type-specific course data.
///
/// Each course type carries exactly the fields that make sense for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseKind {
    /// A mathematics course.
    Math {
        /// How demanding the course is.
        difficulty: Difficulty,
    },
    /// An art course.
    Art {
        /// Materials students must bring.
        materials: BTreeSet<String>,
    },
}

impl CourseKind {
    /// Creates an art course kind from a list of materials.
    ///
    /// Materials are trimmed and deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::BlankMaterial`] if any material is blank.
    pub fn art<I, S>(materials: I) -> Result<Self, CourseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let materials = materials
            .into_iter()
            .map(|material| {
                let material: String = material.into();
                let trimmed = material.trim();
                if trimmed.is_empty() {
                    Err(CourseError::BlankMaterial)
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self::Art { materials })
    }

    /// Builds a course kind from loosely-typed request fields.
    ///
    /// Art courses default to requiring no materials. A field that belongs to
    /// the other course type is rejected rather than ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the course type is unknown, a math course has a
    /// missing or invalid difficulty level, an art course lists a blank
    /// material, or a field of the other course type is present.
    pub fn parse(
        course_type: &str,
        difficulty_level: Option<&str>,
        materials_required: Option<Vec<String>>,
    ) -> Result<Self, CourseError> {
        match course_type.parse::<CourseType>()? {
            CourseType::Math => {
                if materials_required.is_some() {
                    return Err(CourseError::UnexpectedField {
                        course_type: CourseType::Math,
                        field: "materials_required",
                    });
                }
                let difficulty = difficulty_level
                    .ok_or(CourseError::MissingDifficulty)?
                    .parse::<Difficulty>()?;
                Ok(Self::Math { difficulty })
            }
            CourseType::Art => {
                if difficulty_level.is_some() {
                    return Err(CourseError::UnexpectedField {
                        course_type: CourseType::Art,
                        field: "difficulty_level",
                    });
                }
                Self::art(materials_required.unwrap_or_default())
            }
        }
    }

    /// The course type tag of this kind.
    #[must_use]
    pub const fn course_type(&self) -> CourseType {
        match self {
            Self::Math { .. } => CourseType::Math,
            Self::Art { .. } => CourseType::Art,
        }
    }
}

/// Errors that can occur when constructing a course.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// The course name is empty or only whitespace.
    #[error("course name must be a non-empty string")]
    EmptyName,
    /// The maximum capacity is zero.
    #[error("max capacity must be a positive integer")]
    ZeroCapacity,
    /// The course type is not recognised.
    #[error("unknown course type '{0}', expected 'math' or 'art'")]
    UnknownType(String),
    /// A math course was given no difficulty level.
    #[error("math courses require a difficulty level")]
    MissingDifficulty,
    /// A math course was given an unrecognised difficulty level.
    #[error("invalid difficulty level '{0}', expected 'beginner', 'intermediate' or 'advanced'")]
    InvalidDifficulty(String),
    /// An art course lists a blank material.
    #[error("materials must be non-empty strings")]
    BlankMaterial,
    /// A field belonging to the other course type was supplied.
    #[error("{course_type} courses do not accept '{field}'")]
    UnexpectedField {
        /// The type of the course being constructed.
        course_type: CourseType,
        /// The offending field.
        field: &'static str,
    },
}

/// Errors that can occur when recording attendance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    /// More students were marked present than are enrolled.
    #[error("{present} students marked present but only {enrolled} enrolled")]
    TooManyPresent {
        /// Number of students marked present.
        present: usize,
        /// Number of students on the roster.
        enrolled: usize,
    },
    /// A student marked present is not on the roster.
    #[error("student {0} is not enrolled in this course")]
    NotEnrolled(StudentId),
}

/// A course, with its roster, teacher, attendance log and grade book.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    name: NonEmptyString,
    max_capacity: NonZeroUsize,
    kind: CourseKind,
    students: BTreeSet<StudentId>,
    teacher: Option<TeacherId>,
    attendance: BTreeMap<NaiveDate, BTreeSet<StudentId>>,
    grades: BTreeMap<StudentId, Grade>,
}

impl Course {
    /// Creates a new course with a freshly generated identifier, an empty
    /// roster and no teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the capacity is zero.
    pub fn new(
        name: impl Into<String>,
        max_capacity: usize,
        kind: CourseKind,
    ) -> Result<Self, CourseError> {
        let name = NonEmptyString::new(name.into().trim().to_string())
            .map_err(|_| CourseError::EmptyName)?;
        let max_capacity = NonZeroUsize::new(max_capacity).ok_or(CourseError::ZeroCapacity)?;

        Ok(Self {
            id: CourseId::new(),
            name,
            max_capacity,
            kind,
            students: BTreeSet::new(),
            teacher: None,
            attendance: BTreeMap::new(),
            grades: BTreeMap::new(),
        })
    }

    /// The course identifier.
    #[must_use]
    pub const fn id(&self) -> CourseId {
        self.id
    }

    /// The course name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The maximum number of students that may enroll.
    #[must_use]
    pub const fn max_capacity(&self) -> NonZeroUsize {
        self.max_capacity
    }

    /// The type-specific data of the course.
    #[must_use]
    pub const fn kind(&self) -> &CourseKind {
        &self.kind
    }

    /// The students currently enrolled.
    #[must_use]
    pub const fn students(&self) -> &BTreeSet<StudentId> {
        &self.students
    }

    /// Whether the given student is on the roster.
    #[must_use]
    pub fn has_student(&self, student: &StudentId) -> bool {
        self.students.contains(student)
    }

    /// Whether the roster has reached the maximum capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.students.len() >= self.max_capacity.get()
    }

    /// The teacher assigned to the course, if any.
    #[must_use]
    pub const fn teacher(&self) -> Option<TeacherId> {
        self.teacher
    }

    /// The attendance log, keyed by date.
    #[must_use]
    pub const fn attendance(&self) -> &BTreeMap<NaiveDate, BTreeSet<StudentId>> {
        &self.attendance
    }

    /// The grade book, keyed by student.
    #[must_use]
    pub const fn grades(&self) -> &BTreeMap<StudentId, Grade> {
        &self.grades
    }

    /// The grade recorded for a student, if any.
    #[must_use]
    pub fn grade(&self, student: &StudentId) -> Option<Grade> {
        self.grades.get(student).copied()
    }

    pub(crate) fn add_student(&mut self, student: StudentId) {
        self.students.insert(student);
    }

    pub(crate) fn remove_student(&mut self, student: &StudentId) {
        self.students.remove(student);
    }

    pub(crate) const fn set_teacher(&mut self, teacher: Option<TeacherId>) {
        self.teacher = teacher;
    }

    /// Records which students were present on a given date.
    ///
    /// Any attendance previously recorded for that date is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the log untouched, if more students are
    /// marked present than are enrolled or if any of them is not enrolled.
    pub fn record_attendance(
        &mut self,
        date: NaiveDate,
        present: BTreeSet<StudentId>,
    ) -> Result<(), AttendanceError> {
        if present.len() > self.students.len() {
            return Err(AttendanceError::TooManyPresent {
                present: present.len(),
                enrolled: self.students.len(),
            });
        }
        if let Some(absent) = present.iter().find(|id| !self.students.contains(*id)) {
            return Err(AttendanceError::NotEnrolled(*absent));
        }

        self.attendance.insert(date, present);
        Ok(())
    }

    /// Assigns a grade to an enrolled student, replacing any previous grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the student is not enrolled or the grade is not in
    /// `[0, 100]`.
    pub fn assign_grade(&mut self, student: StudentId, grade: f64) -> Result<Grade, GradeError> {
        if !self.students.contains(&student) {
            return Err(GradeError::NotEnrolled(student));
        }
        let grade = Grade::new(grade)?;
        self.grades.insert(student, grade);
        Ok(grade)
    }

    /// A serialisable snapshot of this course.
    #[must_use]
    pub fn view(&self) -> CourseView<'_> {
        let details = match &self.kind {
            CourseKind::Math { difficulty } => CourseDetails::Math {
                difficulty_level: *difficulty,
            },
            CourseKind::Art { materials } => CourseDetails::Art {
                materials_required: materials.iter().map(String::as_str).collect(),
            },
        };

        CourseView {
            id: self.id,
            name: self.name(),
            max_capacity: self.max_capacity.get(),
            enrollment: self.students.iter().copied().collect(),
            teacher_id: self.teacher,
            details,
        }
    }
}

impl Entity for Course {
    type Id = CourseId;

    fn id(&self) -> CourseId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn calculus(capacity: usize) -> Course {
        Course::new(
            "Calculus I",
            capacity,
            CourseKind::Math {
                difficulty: Difficulty::Intermediate,
            },
        )
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
    }

    #[test]
    fn new_course_is_empty() {
        let course = calculus(2);
        assert!(course.students().is_empty());
        assert!(course.teacher().is_none());
        assert!(course.attendance().is_empty());
        assert!(course.grades().is_empty());
        assert_eq!(course.kind().course_type(), CourseType::Math);
    }

    #[test]
    fn blank_name_is_rejected() {
        let kind = CourseKind::art(Vec::<String>::new()).unwrap();
        assert_eq!(Course::new(" ", 3, kind), Err(CourseError::EmptyName));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let kind = CourseKind::art(["brush"]).unwrap();
        assert_eq!(Course::new("Painting", 0, kind), Err(CourseError::ZeroCapacity));
    }

    #[test_case("beginner", Difficulty::Beginner)]
    #[test_case("intermediate", Difficulty::Intermediate)]
    #[test_case("advanced", Difficulty::Advanced)]
    fn parses_math_difficulty(raw: &str, expected: Difficulty) {
        assert_eq!(
            CourseKind::parse("math", Some(raw), None),
            Ok(CourseKind::Math {
                difficulty: expected
            })
        );
    }

    #[test_case("math", Some("expert"), None => CourseError::InvalidDifficulty("expert".into()); "invalid difficulty")]
    #[test_case("math", None, None => CourseError::MissingDifficulty; "missing difficulty")]
    #[test_case("history", None, None => CourseError::UnknownType("history".into()); "unknown type")]
    #[test_case("art", None, Some(vec![String::new()]) => CourseError::BlankMaterial; "blank material")]
    #[test_case("art", Some("beginner"), None => CourseError::UnexpectedField { course_type: CourseType::Art, field: "difficulty_level" }; "art with difficulty")]
    #[test_case("math", Some("beginner"), Some(vec![]) => CourseError::UnexpectedField { course_type: CourseType::Math, field: "materials_required" }; "math with materials")]
    fn rejects_invalid_kind(
        course_type: &str,
        difficulty: Option<&str>,
        materials: Option<Vec<String>>,
    ) -> CourseError {
        CourseKind::parse(course_type, difficulty, materials).unwrap_err()
    }

    #[test]
    fn art_without_materials_defaults_to_empty_set() {
        assert_eq!(
            CourseKind::parse("art", None, None),
            Ok(CourseKind::Art {
                materials: BTreeSet::new()
            })
        );
    }

    #[test]
    fn is_full_tracks_capacity() {
        let mut course = calculus(1);
        assert!(!course.is_full());
        course.add_student(StudentId::new());
        assert!(course.is_full());
    }

    #[test]
    fn attendance_for_enrolled_students_is_recorded() {
        let mut course = calculus(3);
        let (a, b) = (StudentId::new(), StudentId::new());
        course.add_student(a);
        course.add_student(b);

        course.record_attendance(date(1), [a].into()).unwrap();
        assert_eq!(course.attendance()[&date(1)], BTreeSet::from([a]));

        // a later record for the same date replaces the earlier one
        course.record_attendance(date(1), [a, b].into()).unwrap();
        assert_eq!(course.attendance()[&date(1)], BTreeSet::from([a, b]));
        assert_eq!(course.attendance().len(), 1);
    }

    #[test]
    fn attendance_naming_unenrolled_student_is_rejected() {
        let mut course = calculus(3);
        let enrolled = StudentId::new();
        let stranger = StudentId::new();
        course.add_student(enrolled);
        course.record_attendance(date(2), [enrolled].into()).unwrap();

        let result = course.record_attendance(date(2), [stranger].into());

        assert_eq!(result, Err(AttendanceError::NotEnrolled(stranger)));
        assert_eq!(course.attendance()[&date(2)], BTreeSet::from([enrolled]));
    }

    #[test]
    fn attendance_larger_than_roster_is_rejected() {
        let mut course = calculus(3);
        course.add_student(StudentId::new());

        let result = course.record_attendance(date(3), [StudentId::new(), StudentId::new()].into());

        assert_eq!(
            result,
            Err(AttendanceError::TooManyPresent {
                present: 2,
                enrolled: 1
            })
        );
        assert!(course.attendance().is_empty());
    }

    #[test_case(0.0 => true; "zero is accepted")]
    #[test_case(100.0 => true; "hundred is accepted")]
    #[test_case(-1.0 => false; "negative is rejected")]
    #[test_case(101.0 => false; "above hundred is rejected")]
    fn grade_boundaries(value: f64) -> bool {
        let mut course = calculus(1);
        let student = StudentId::new();
        course.add_student(student);
        course.assign_grade(student, value).is_ok()
    }

    #[test]
    fn grading_unenrolled_student_is_rejected() {
        let mut course = calculus(1);
        let student = StudentId::new();
        assert_eq!(
            course.assign_grade(student, 50.0),
            Err(GradeError::NotEnrolled(student))
        );
        assert!(course.grade(&student).is_none());
    }

    #[test]
    fn regrading_overwrites_previous_grade() {
        let mut course = calculus(1);
        let student = StudentId::new();
        course.add_student(student);
        course.assign_grade(student, 40.0).unwrap();
        course.assign_grade(student, 90.0).unwrap();
        assert_eq!(course.grade(&student), Some(Grade::new(90.0).unwrap()));
    }
}
