use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};
use university_core::{CourseId, StudentId, TeacherId, domain::view::CourseView};

use crate::server::UniversityServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct EnrollmentParams {
    /// Identifier of the course.
    pub course_id: String,
    /// Identifier of the student.
    pub student_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AssignTeacherParams {
    /// Identifier of the course.
    pub course_id: String,
    /// Identifier of the teacher to assign.
    pub teacher_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct StudentCoursesParams {
    /// Identifier of the student.
    pub student_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct TeacherCoursesParams {
    /// Identifier of the teacher.
    pub teacher_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

#[derive(Debug, Serialize)]
struct CoursesResponse<'a> {
    courses: Vec<CourseView<'a>>,
}

fn enrollment_ids(params: &EnrollmentParams) -> Result<(CourseId, StudentId), McpError> {
    Ok((
        UniversityServer::parse_id(&params.course_id, "course_id")?,
        UniversityServer::parse_id(&params.student_id, "student_id")?,
    ))
}

fn message(text: String) -> Result<CallToolResult, McpError> {
    let data = UniversityServer::serialize(
        MessageResponse {
            message: text.clone(),
        },
        "message response",
    )?;
    Ok(UniversityServer::success(text, data))
}

pub(super) async fn enroll_student(
    server: &UniversityServer,
    params: Parameters<EnrollmentParams>,
) -> Result<CallToolResult, McpError> {
    let (course_id, student_id) = enrollment_ids(&params.0)?;

    server
        .state
        .university
        .write()
        .await
        .enroll_student(student_id, course_id)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    message(format!("Enrolled student {student_id} in course {course_id}"))
}

pub(super) async fn withdraw_student(
    server: &UniversityServer,
    params: Parameters<EnrollmentParams>,
) -> Result<CallToolResult, McpError> {
    let (course_id, student_id) = enrollment_ids(&params.0)?;

    server
        .state
        .university
        .write()
        .await
        .withdraw_student(student_id, course_id)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    message(format!(
        "Withdrew student {student_id} from course {course_id}"
    ))
}

pub(super) async fn assign_teacher(
    server: &UniversityServer,
    params: Parameters<AssignTeacherParams>,
) -> Result<CallToolResult, McpError> {
    let course_id: CourseId = UniversityServer::parse_id(&params.0.course_id, "course_id")?;
    let teacher_id: TeacherId = UniversityServer::parse_id(&params.0.teacher_id, "teacher_id")?;

    server
        .state
        .university
        .write()
        .await
        .assign_teacher(teacher_id, course_id)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    message(format!(
        "Assigned teacher {teacher_id} to course {course_id}"
    ))
}

pub(super) async fn get_student_courses(
    server: &UniversityServer,
    params: Parameters<StudentCoursesParams>,
) -> Result<CallToolResult, McpError> {
    let student_id: StudentId = UniversityServer::parse_id(&params.0.student_id, "student_id")?;

    let university = server.state.university.read().await;
    let Some(courses) = university.get_student_courses(student_id) else {
        return Err(UniversityServer::not_found("student", student_id));
    };
    let response = CoursesResponse { courses };
    let summary = format!("Student is enrolled in {} courses", response.courses.len());
    let data = UniversityServer::serialize(response, "get_student_courses response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}

pub(super) async fn get_teacher_courses(
    server: &UniversityServer,
    params: Parameters<TeacherCoursesParams>,
) -> Result<CallToolResult, McpError> {
    let teacher_id: TeacherId = UniversityServer::parse_id(&params.0.teacher_id, "teacher_id")?;

    let university = server.state.university.read().await;
    let Some(courses) = university.get_teacher_courses(teacher_id) else {
        return Err(UniversityServer::not_found("teacher", teacher_id));
    };
    let response = CoursesResponse { courses };
    let summary = format!("Teacher is assigned to {} courses", response.courses.len());
    let data = UniversityServer::serialize(response, "get_teacher_courses response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}
