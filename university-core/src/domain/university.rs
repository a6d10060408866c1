//! The in-memory registry of students, teachers and courses.
//!
//! The [`University`] is the only owner of stored entities. It enforces every
//! rule that spans more than one entity, and keeps the student↔course and
//! teacher↔course relations symmetric.

use std::{
    collections::{BTreeMap, BTreeSet},
    num::NonZeroUsize,
};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::domain::{
    AttendanceError, Config, ConfigError, Course, CourseId, Grade, GradeError, Student, StudentId, Teacher,
    TeacherId,
    store::Store,
    view::{CourseView, StudentView},
};

/// Errors that can occur when operating on the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// No student with this identifier exists.
    #[error("student {0} not found")]
    StudentNotFound(StudentId),
    /// No teacher with this identifier exists.
    #[error("teacher {0} not found")]
    TeacherNotFound(TeacherId),
    /// No course with this identifier exists.
    #[error("course {0} not found")]
    CourseNotFound(CourseId),
    /// The course roster has reached its maximum capacity.
    #[error("course {course} is full (capacity {capacity})")]
    CourseFull {
        /// The full course.
        course: CourseId,
        /// Its maximum capacity.
        capacity: NonZeroUsize,
    },
    /// The student is not enrolled in the course.
    #[error("student {student} is not enrolled in course {course}")]
    NotEnrolled {
        /// The student.
        student: StudentId,
        /// The course.
        course: CourseId,
    },
    /// The course rejected the attendance record.
    #[error(transparent)]
    Attendance(#[from] AttendanceError),
    /// The course rejected the grade.
    #[error(transparent)]
    Grade(#[from] GradeError),
    /// The course falls outside the configured limits.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RegistryError {
    /// Whether the failure is due to an unknown identifier.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound(_) | Self::TeacherNotFound(_) | Self::CourseNotFound(_)
        )
    }

    /// A stable, machine-readable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::StudentNotFound(_) => "student_not_found",
            Self::TeacherNotFound(_) => "teacher_not_found",
            Self::CourseNotFound(_) => "course_not_found",
            Self::CourseFull { .. } => "course_full",
            Self::NotEnrolled { .. } | Self::Grade(GradeError::NotEnrolled(_)) => "not_enrolled",
            Self::Attendance(AttendanceError::TooManyPresent { .. }) => "too_many_present",
            Self::Attendance(AttendanceError::NotEnrolled(_)) => "attendee_not_enrolled",
            Self::Grade(GradeError::OutOfRange(_)) => "grade_out_of_range",
            Self::Config(ConfigError::CapacityAboveLimit { .. }) => "capacity_above_limit",
        }
    }
}

/// A relationship between two entities that is stored on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Enrollment {
        student: StudentId,
        course: CourseId,
    },
    Teaching {
        teacher: TeacherId,
        course: CourseId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Attach,
    Detach,
}

/// The registry of all students, teachers and courses.
#[derive(Debug, Default)]
pub struct University {
    config: Config,
    students: Store<Student>,
    teachers: Store<Teacher>,
    courses: Store<Course>,
}

impl University {
    /// Creates an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The registry's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a student and returns their identifier.
    pub fn add_student(&mut self, student: Student) -> StudentId {
        info!(id = %student.id(), name = student.name(), "adding student");
        self.students.insert(student)
    }

    /// Adds a teacher and returns their identifier.
    pub fn add_teacher(&mut self, teacher: Teacher) -> TeacherId {
        info!(id = %teacher.id(), name = teacher.name(), "adding teacher");
        self.teachers.insert(teacher)
    }

    /// Adds a course and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the course's capacity is above the configured
    /// ceiling. Nothing is stored on failure.
    pub fn add_course(&mut self, course: Course) -> Result<CourseId, RegistryError> {
        self.config.check_course_capacity(course.max_capacity().get())?;
        info!(id = %course.id(), name = course.name(), "adding course");
        Ok(self.courses.insert(course))
    }

    /// All stored students.
    #[must_use]
    pub const fn students(&self) -> &Store<Student> {
        &self.students
    }

    /// All stored teachers.
    #[must_use]
    pub const fn teachers(&self) -> &Store<Teacher> {
        &self.teachers
    }

    /// All stored courses.
    #[must_use]
    pub const fn courses(&self) -> &Store<Course> {
        &self.courses
    }

    /// Retrieves a student by identifier.
    #[must_use]
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Retrieves a teacher by identifier.
    #[must_use]
    pub fn teacher(&self, id: TeacherId) -> Option<&Teacher> {
        self.teachers.get(&id)
    }

    /// Retrieves a course by identifier.
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    fn require_student(&self, id: StudentId) -> Result<&Student, RegistryError> {
        self.students
            .get(&id)
            .ok_or(RegistryError::StudentNotFound(id))
    }

    fn require_teacher(&self, id: TeacherId) -> Result<&Teacher, RegistryError> {
        self.teachers
            .get(&id)
            .ok_or(RegistryError::TeacherNotFound(id))
    }

    fn require_course(&self, id: CourseId) -> Result<&Course, RegistryError> {
        self.courses.get(&id).ok_or(RegistryError::CourseNotFound(id))
    }

    fn course_mut(&mut self, id: CourseId) -> Result<&mut Course, RegistryError> {
        self.courses
            .get_mut(&id)
            .ok_or(RegistryError::CourseNotFound(id))
    }

    /// Applies a change to both sides of a relation.
    ///
    /// Both endpoints are resolved before anything is modified, so either both
    /// sides change or neither does.
    fn relate(&mut self, link: Link, change: Change) -> Result<(), RegistryError> {
        match link {
            Link::Enrollment { student, course } => {
                let student_entry = self
                    .students
                    .get_mut(&student)
                    .ok_or(RegistryError::StudentNotFound(student))?;
                let course_entry = self
                    .courses
                    .get_mut(&course)
                    .ok_or(RegistryError::CourseNotFound(course))?;
                match change {
                    Change::Attach => {
                        course_entry.add_student(student);
                        student_entry.enroll_in_course(course);
                    }
                    Change::Detach => {
                        course_entry.remove_student(&student);
                        student_entry.withdraw_from_course(&course);
                    }
                }
            }
            Link::Teaching { teacher, course } => {
                let teacher_entry = self
                    .teachers
                    .get_mut(&teacher)
                    .ok_or(RegistryError::TeacherNotFound(teacher))?;
                let course_entry = self
                    .courses
                    .get_mut(&course)
                    .ok_or(RegistryError::CourseNotFound(course))?;
                match change {
                    Change::Attach => {
                        course_entry.set_teacher(Some(teacher));
                        teacher_entry.assign_course(course);
                    }
                    Change::Detach => {
                        if course_entry.teacher() == Some(teacher) {
                            course_entry.set_teacher(None);
                        }
                        teacher_entry.remove_course(&course);
                    }
                }
            }
        }
        Ok(())
    }

    /// Enrolls a student in a course.
    ///
    /// A full course rejects every enrollment, including one for a student
    /// already on its roster. Otherwise enrolling a student who is already on
    /// the roster succeeds without changing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is unknown or the course is at
    /// capacity. The roster is unchanged on failure.
    #[instrument(skip(self))]
    pub fn enroll_student(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistryError> {
        self.require_student(student_id)?;
        let course = self.require_course(course_id)?;

        if course.is_full() {
            debug!("course is full");
            return Err(RegistryError::CourseFull {
                course: course_id,
                capacity: course.max_capacity(),
            });
        }
        if course.has_student(&student_id) {
            debug!("student already enrolled");
            return Ok(());
        }

        self.relate(
            Link::Enrollment {
                student: student_id,
                course: course_id,
            },
            Change::Attach,
        )
    }

    /// Withdraws a student from a course.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is unknown or the student is not
    /// enrolled in the course.
    #[instrument(skip(self))]
    pub fn withdraw_student(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Result<(), RegistryError> {
        let student = self.require_student(student_id)?;
        self.require_course(course_id)?;

        if !student.enrolled_courses().contains(&course_id) {
            debug!("student not enrolled");
            return Err(RegistryError::NotEnrolled {
                student: student_id,
                course: course_id,
            });
        }

        self.relate(
            Link::Enrollment {
                student: student_id,
                course: course_id,
            },
            Change::Detach,
        )
    }

    /// Assigns a teacher to a course.
    ///
    /// If the course already has a teacher, that teacher is detached first.
    /// Re-assigning the current teacher detaches and re-attaches them.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is unknown.
    #[instrument(skip(self))]
    pub fn assign_teacher(
        &mut self,
        teacher_id: TeacherId,
        course_id: CourseId,
    ) -> Result<(), RegistryError> {
        self.require_teacher(teacher_id)?;
        let previous = self.require_course(course_id)?.teacher();

        if let Some(previous) = previous {
            debug!(%previous, "detaching previous teacher");
            self.relate(
                Link::Teaching {
                    teacher: previous,
                    course: course_id,
                },
                Change::Detach,
            )?;
        }

        self.relate(
            Link::Teaching {
                teacher: teacher_id,
                course: course_id,
            },
            Change::Attach,
        )
    }

    /// The students enrolled in a course.
    ///
    /// Returns `None` if the course is unknown. Roster entries with no stored
    /// student are skipped.
    #[must_use]
    pub fn get_course_roster(&self, course_id: CourseId) -> Option<Vec<StudentView<'_>>> {
        let course = self.courses.get(&course_id)?;
        Some(
            course
                .students()
                .iter()
                .filter_map(|id| self.students.get(id))
                .map(Student::view)
                .collect(),
        )
    }

    /// The courses a teacher is assigned to.
    ///
    /// Returns `None` if the teacher is unknown. Assignments with no stored
    /// course are skipped.
    #[must_use]
    pub fn get_teacher_courses(&self, teacher_id: TeacherId) -> Option<Vec<CourseView<'_>>> {
        let teacher = self.teachers.get(&teacher_id)?;
        Some(self.course_views(teacher.assigned_courses()))
    }

    /// The courses a student is enrolled in.
    ///
    /// Returns `None` if the student is unknown. Enrollments with no stored
    /// course are skipped.
    #[must_use]
    pub fn get_student_courses(&self, student_id: StudentId) -> Option<Vec<CourseView<'_>>> {
        let student = self.students.get(&student_id)?;
        Some(self.course_views(student.enrolled_courses()))
    }

    fn course_views(&self, ids: &BTreeSet<CourseId>) -> Vec<CourseView<'_>> {
        ids.iter()
            .filter_map(|id| self.courses.get(id))
            .map(Course::view)
            .collect()
    }

    /// Records attendance for a course on a given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the course is unknown, or wraps the course's
    /// reason for rejecting the record.
    #[instrument(skip(self, present))]
    pub fn record_attendance(
        &mut self,
        course_id: CourseId,
        date: NaiveDate,
        present: BTreeSet<StudentId>,
    ) -> Result<(), RegistryError> {
        let course = self.course_mut(course_id)?;
        course.record_attendance(date, present).map_err(|error| {
            debug!(%error, "attendance rejected");
            RegistryError::from(error)
        })
    }

    /// Assigns a grade to a student in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if either identifier is unknown, or wraps the course's
    /// reason for rejecting the grade.
    #[instrument(skip(self))]
    pub fn assign_grade(
        &mut self,
        course_id: CourseId,
        student_id: StudentId,
        grade: f64,
    ) -> Result<Grade, RegistryError> {
        self.require_student(student_id)?;
        let course = self.course_mut(course_id)?;
        course.assign_grade(student_id, grade).map_err(|error| {
            debug!(%error, "grade rejected");
            RegistryError::from(error)
        })
    }

    /// A copy of a course's grade book, or `None` if the course is unknown.
    #[must_use]
    pub fn get_course_grades(&self, course_id: CourseId) -> Option<BTreeMap<StudentId, Grade>> {
        self.courses.get(&course_id).map(|c| c.grades().clone())
    }

    /// A copy of a course's attendance log, or `None` if the course is
    /// unknown.
    #[must_use]
    pub fn get_course_attendance(
        &self,
        course_id: CourseId,
    ) -> Option<BTreeMap<NaiveDate, BTreeSet<StudentId>>> {
        self.courses.get(&course_id).map(|c| c.attendance().clone())
    }

    /// A student's grades across every course they are enrolled in.
    ///
    /// Courses without a grade for the student map to `None`. Enrollments with
    /// no stored course are skipped. Returns `None` if the student is unknown.
    #[must_use]
    pub fn get_student_grades(
        &self,
        student_id: StudentId,
    ) -> Option<BTreeMap<CourseId, Option<Grade>>> {
        let student = self.students.get(&student_id)?;
        Some(
            student
                .enrolled_courses()
                .iter()
                .filter_map(|id| self.courses.get(id))
                .map(|course| (course.id(), course.grade(&student_id)))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CourseKind, Difficulty};

    fn student(university: &mut University, name: &str) -> StudentId {
        university.add_student(Student::new(name, format!("{name}@example.com")).unwrap())
    }

    fn teacher(university: &mut University, name: &str) -> TeacherId {
        university.add_teacher(Teacher::new(name, format!("{name}@example.com"), ["math"]).unwrap())
    }

    fn math_course(university: &mut University, capacity: usize) -> CourseId {
        university.add_course(
            Course::new(
                "Calculus I",
                capacity,
                CourseKind::Math {
                    difficulty: Difficulty::Intermediate,
                },
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()
    }

    fn is_symmetric(university: &University) -> bool {
        university.courses().iter().all(|course| {
            course.students().iter().all(|s| {
                university
                    .student(*s)
                    .is_some_and(|s| s.enrolled_courses().contains(&course.id()))
            }) && course.teacher().is_none_or(|t| {
                university
                    .teacher(t)
                    .is_some_and(|t| t.assigned_courses().contains(&course.id()))
            })
        }) && university.students().iter().all(|s| {
            s.enrolled_courses().iter().all(|c| {
                university
                    .course(*c)
                    .is_some_and(|c| c.has_student(&s.id()))
            })
        })
    }

    #[test]
    fn enrollment_beyond_capacity_fails() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let (a, b, c) = (
            student(&mut university, "a"),
            student(&mut university, "b"),
            student(&mut university, "c"),
        );

        university.enroll_student(a, course).unwrap();
        university.enroll_student(b, course).unwrap();
        let result = university.enroll_student(c, course);

        assert!(matches!(result, Err(RegistryError::CourseFull { .. })));
        assert_eq!(university.course(course).unwrap().students().len(), 2);
        assert!(university.student(c).unwrap().enrolled_courses().is_empty());
        assert!(is_symmetric(&university));
    }

    #[test]
    fn capacity_holds_for_any_enrollment_order() {
        let mut university = University::default();
        let courses: Vec<_> = (1..=3).map(|n| math_course(&mut university, n)).collect();
        let students: Vec<_> = (0..5)
            .map(|n| student(&mut university, &format!("s{n}")))
            .collect();

        for (i, s) in students.iter().enumerate() {
            for (j, c) in courses.iter().enumerate() {
                if (i + j) % 2 == 0 {
                    let _ = university.enroll_student(*s, *c);
                }
                let _ = university.enroll_student(*s, courses[(i + j) % courses.len()]);
            }
        }

        for course in university.courses().iter() {
            assert!(course.students().len() <= course.max_capacity().get());
        }
        assert!(is_symmetric(&university));
    }

    #[test]
    fn enrollment_with_unknown_ids_fails() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");

        let unknown_student = StudentId::new();
        let unknown_course = CourseId::new();

        assert_eq!(
            university.enroll_student(unknown_student, course),
            Err(RegistryError::StudentNotFound(unknown_student))
        );
        assert_eq!(
            university.enroll_student(s, unknown_course),
            Err(RegistryError::CourseNotFound(unknown_course))
        );
    }

    #[test]
    fn course_above_configured_ceiling_is_rejected() {
        let mut config = Config::default();
        config.set_max_course_capacity(NonZeroUsize::new(30));
        let mut university = University::with_config(config);

        let at_limit = math_course(&mut university, 30);
        let too_large = Course::new(
            "Calculus II",
            31,
            CourseKind::Math {
                difficulty: Difficulty::Advanced,
            },
        )
        .unwrap();
        let error = university.add_course(too_large).unwrap_err();

        assert_eq!(error.code(), "capacity_above_limit");
        assert!(!error.is_not_found());
        assert_eq!(university.courses().len(), 1);
        assert!(university.course(at_limit).is_some());
    }

    #[test]
    fn re_enrolling_is_a_no_op() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");

        university.enroll_student(s, course).unwrap();
        university.enroll_student(s, course).unwrap();

        assert_eq!(university.course(course).unwrap().students().len(), 1);
        assert!(is_symmetric(&university));
    }

    #[test]
    fn re_enrolling_into_full_course_fails() {
        let mut university = University::default();
        let course = math_course(&mut university, 1);
        let s = student(&mut university, "a");
        university.enroll_student(s, course).unwrap();

        assert_eq!(
            university.enroll_student(s, course),
            Err(RegistryError::CourseFull {
                course,
                capacity: NonZeroUsize::new(1).unwrap(),
            })
        );
        assert_eq!(university.course(course).unwrap().students().len(), 1);
        assert!(university.student(s).unwrap().enrolled_courses().contains(&course));
    }

    #[test]
    fn withdraw_restores_pre_enrollment_state() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");
        let roster_before = university.course(course).unwrap().students().clone();
        let enrolled_before = university.student(s).unwrap().enrolled_courses().clone();

        university.enroll_student(s, course).unwrap();
        university.withdraw_student(s, course).unwrap();

        assert_eq!(university.course(course).unwrap().students(), &roster_before);
        assert_eq!(
            university.student(s).unwrap().enrolled_courses(),
            &enrolled_before
        );
    }

    #[test]
    fn withdraw_when_not_enrolled_fails() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");

        let error = university.withdraw_student(s, course).unwrap_err();

        assert_eq!(
            error,
            RegistryError::NotEnrolled {
                student: s,
                course
            }
        );
        assert_eq!(error.code(), "not_enrolled");
        assert!(!error.is_not_found());
    }

    #[test]
    fn reassigning_teacher_detaches_previous() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let t1 = teacher(&mut university, "t1");
        let t2 = teacher(&mut university, "t2");

        university.assign_teacher(t1, course).unwrap();
        university.assign_teacher(t2, course).unwrap();

        assert!(!university.teacher(t1).unwrap().assigned_courses().contains(&course));
        assert!(university.teacher(t2).unwrap().assigned_courses().contains(&course));
        assert_eq!(university.course(course).unwrap().teacher(), Some(t2));
        assert!(is_symmetric(&university));
    }

    #[test]
    fn reassigning_same_teacher_is_stable() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let t = teacher(&mut university, "t");

        university.assign_teacher(t, course).unwrap();
        university.assign_teacher(t, course).unwrap();

        assert_eq!(university.course(course).unwrap().teacher(), Some(t));
        assert_eq!(
            university.teacher(t).unwrap().assigned_courses(),
            &BTreeSet::from([course])
        );
    }

    #[test]
    fn assign_unknown_teacher_fails() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let unknown = TeacherId::new();

        let error = university.assign_teacher(unknown, course).unwrap_err();

        assert_eq!(error, RegistryError::TeacherNotFound(unknown));
        assert!(error.is_not_found());
        assert!(university.course(course).unwrap().teacher().is_none());
    }

    #[test]
    fn attendance_with_unenrolled_student_keeps_log() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let enrolled = student(&mut university, "a");
        let outsider = student(&mut university, "b");
        university.enroll_student(enrolled, course).unwrap();
        university
            .record_attendance(course, date(), [enrolled].into())
            .unwrap();

        let error = university
            .record_attendance(course, date(), [outsider].into())
            .unwrap_err();

        assert_eq!(
            error,
            RegistryError::Attendance(AttendanceError::NotEnrolled(outsider))
        );
        assert_eq!(error.code(), "attendee_not_enrolled");
        assert_eq!(
            university.get_course_attendance(course).unwrap()[&date()],
            BTreeSet::from([enrolled])
        );
    }

    #[test]
    fn attendance_for_unknown_course_fails() {
        let mut university = University::default();
        let unknown = CourseId::new();
        assert_eq!(
            university.record_attendance(unknown, date(), BTreeSet::new()),
            Err(RegistryError::CourseNotFound(unknown))
        );
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");
        university.enroll_student(s, course).unwrap();

        assert!(university.assign_grade(course, s, 0.0).is_ok());
        assert!(university.assign_grade(course, s, 100.0).is_ok());

        let error = university.assign_grade(course, s, -1.0).unwrap_err();
        assert_eq!(error.code(), "grade_out_of_range");
        let error = university.assign_grade(course, s, 101.0).unwrap_err();
        assert_eq!(error, RegistryError::Grade(GradeError::OutOfRange(101.0)));

        assert_eq!(
            university.get_course_grades(course).unwrap()[&s],
            Grade::new(100.0).unwrap()
        );
    }

    #[test]
    fn grading_requires_known_student() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let unknown = StudentId::new();

        assert_eq!(
            university.assign_grade(course, unknown, 50.0),
            Err(RegistryError::StudentNotFound(unknown))
        );
    }

    #[test]
    fn student_grades_mark_ungraded_courses() {
        let mut university = University::default();
        let graded = math_course(&mut university, 2);
        let ungraded = math_course(&mut university, 2);
        let s = student(&mut university, "a");
        university.enroll_student(s, graded).unwrap();
        university.enroll_student(s, ungraded).unwrap();
        university.assign_grade(graded, s, 88.0).unwrap();

        let grades = university.get_student_grades(s).unwrap();

        assert_eq!(grades.len(), 2);
        assert_eq!(grades[&graded], Some(Grade::new(88.0).unwrap()));
        assert_eq!(grades[&ungraded], None);
        assert_eq!(grades.values().flatten().count(), 1);
    }

    #[test]
    fn grades_survive_withdrawal() {
        let mut university = University::default();
        let course = math_course(&mut university, 2);
        let s = student(&mut university, "a");
        university.enroll_student(s, course).unwrap();
        university.assign_grade(course, s, 75.0).unwrap();
        university.withdraw_student(s, course).unwrap();

        assert!(university.get_course_grades(course).unwrap().contains_key(&s));
        assert!(university.get_student_grades(s).unwrap().is_empty());
    }

    #[test]
    fn projections_return_none_for_unknown_roots() {
        let university = University::default();
        assert!(university.get_course_roster(CourseId::new()).is_none());
        assert!(university.get_teacher_courses(TeacherId::new()).is_none());
        assert!(university.get_student_courses(StudentId::new()).is_none());
        assert!(university.get_course_grades(CourseId::new()).is_none());
        assert!(university.get_student_grades(StudentId::new()).is_none());
        assert!(university.get_course_attendance(CourseId::new()).is_none());
    }

    #[test]
    fn projections_list_related_entities() {
        let mut university = University::default();
        let course = math_course(&mut university, 3);
        let s = student(&mut university, "a");
        let t = teacher(&mut university, "t");
        university.enroll_student(s, course).unwrap();
        university.assign_teacher(t, course).unwrap();

        let roster = university.get_course_roster(course).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, s);

        let teaching = university.get_teacher_courses(t).unwrap();
        assert_eq!(teaching.len(), 1);
        assert_eq!(teaching[0].teacher_id, Some(t));

        let studying = university.get_student_courses(s).unwrap();
        assert_eq!(studying.len(), 1);
        assert_eq!(studying[0].enrollment, vec![s]);
    }
}
