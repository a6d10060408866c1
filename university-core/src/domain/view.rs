// Borrowed views of stored entities, for serialization.

use serde::Serialize;

use crate::domain::{CourseId, Difficulty, StudentId, TeacherId};

/// A borrowed view of a student, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentView<'a> {
    /// The student's identifier.
    pub id: StudentId,
    /// The student's name.
    pub name: &'a str,
    /// How to reach the student.
    pub contact_info: &'a str,
    /// Courses the student is enrolled in, in identifier order.
    pub enrolled_courses: Vec<CourseId>,
}

/// A borrowed view of a teacher, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherView<'a> {
    /// The teacher's identifier.
    pub id: TeacherId,
    /// The teacher's name.
    pub name: &'a str,
    /// How to reach the teacher.
    pub contact_info: &'a str,
    /// Subject areas, sorted.
    pub specializations: Vec<&'a str>,
    /// Courses the teacher is assigned to, in identifier order.
    pub assigned_courses: Vec<CourseId>,
}

/// A borrowed view of a course, suitable for serialization.
///
/// The type-specific fields are flattened next to the common ones, together
/// with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseView<'a> {
    /// The course identifier.
    pub id: CourseId,
    /// The course name.
    pub name: &'a str,
    /// Maximum number of enrolled students.
    pub max_capacity: usize,
    /// Students currently enrolled, in identifier order.
    pub enrollment: Vec<StudentId>,
    /// The assigned teacher, if any.
    pub teacher_id: Option<TeacherId>,
    /// Type-specific fields.
    #[serde(flatten)]
    pub details: CourseDetails<'a>,
}

/// Type-specific fields of a [`CourseView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CourseDetails<'a> {
    /// Fields of a math course.
    Math {
        /// How demanding the course is.
        difficulty_level: Difficulty,
    },
    /// Fields of an art course.
    Art {
        /// Materials students must bring, sorted.
        materials_required: Vec<&'a str>,
    },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{Course, CourseKind, Student, Teacher};

    #[test]
    fn math_course_serializes_difficulty() {
        let course = Course::new(
            "Calculus I",
            2,
            CourseKind::Math {
                difficulty: crate::Difficulty::Intermediate,
            },
        )
        .unwrap();

        let value = serde_json::to_value(course.view()).unwrap();

        assert_eq!(value["type"], "math");
        assert_eq!(value["name"], "Calculus I");
        assert_eq!(value["max_capacity"], 2);
        assert_eq!(value["difficulty_level"], "intermediate");
        assert_eq!(value["enrollment"], json!([]));
        assert!(value["teacher_id"].is_null());
        assert!(value.get("materials_required").is_none());
    }

    #[test]
    fn art_course_serializes_materials_as_sequence() {
        let course = Course::new("Painting", 5, CourseKind::art(["canvas", "brush"]).unwrap())
            .unwrap();

        let value = serde_json::to_value(course.view()).unwrap();

        assert_eq!(value["type"], "art");
        let materials = value["materials_required"].as_array().unwrap();
        assert_eq!(materials.len(), 2);
        assert!(materials.contains(&json!("brush")));
        assert!(materials.contains(&json!("canvas")));
        assert!(value.get("difficulty_level").is_none());
    }

    #[test]
    fn person_views_carry_contact_details() {
        let student = Student::new("Ada", "ada@example.com").unwrap();
        let teacher = Teacher::new("Grace", "grace@example.com", ["logic"]).unwrap();

        let student = serde_json::to_value(student.view()).unwrap();
        let teacher = serde_json::to_value(teacher.view()).unwrap();

        assert_eq!(student["contact_info"], "ada@example.com");
        assert_eq!(student["enrolled_courses"], json!([]));
        assert_eq!(teacher["specializations"], json!(["logic"]));
        assert_eq!(teacher["assigned_courses"], json!([]));
    }
}
