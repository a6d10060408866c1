use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};
use university_core::{
    Course, CourseId, CourseKind,
    domain::view::{CourseView, StudentView},
};

use super::people::CreatedResponse;
use crate::server::UniversityServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreateCourseParams {
    /// Course type, either "math" or "art".
    #[serde(rename = "type")]
    pub course_type: String,
    /// Course name.
    pub name: String,
    /// Maximum number of students that may enroll (must be positive).
    pub max_capacity: usize,
    /// Difficulty of a math course: "beginner", "intermediate" or "advanced".
    #[serde(default)]
    pub difficulty_level: Option<String>,
    /// Materials required by an art course.
    #[serde(default)]
    pub materials_required: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CourseParams {
    /// Identifier of the course.
    pub course_id: String,
}

#[derive(Debug, Serialize)]
struct ListCoursesResponse<'a> {
    courses: Vec<CourseView<'a>>,
}

#[derive(Debug, Serialize)]
struct RosterResponse<'a> {
    course_id: CourseId,
    students: Vec<StudentView<'a>>,
}

pub(super) async fn create_course(
    server: &UniversityServer,
    params: Parameters<CreateCourseParams>,
) -> Result<CallToolResult, McpError> {
    let params = params.0;

    let kind = CourseKind::parse(
        &params.course_type,
        params.difficulty_level.as_deref(),
        params.materials_required,
    )
    .map_err(|error| UniversityServer::invalid("invalid course", error))?;
    let course = Course::new(params.name, params.max_capacity, kind)
        .map_err(|error| UniversityServer::invalid("invalid course", error))?;

    let id = server
        .state
        .university
        .write()
        .await
        .add_course(course)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    let response = CreatedResponse { id: id.to_string() };
    Ok(UniversityServer::success(
        format!("Created course {id}"),
        UniversityServer::serialize(response, "create_course response")?,
    ))
}

pub(super) async fn list_courses(server: &UniversityServer) -> Result<CallToolResult, McpError> {
    let university = server.state.university.read().await;
    let response = ListCoursesResponse {
        courses: university.courses().iter().map(Course::view).collect(),
    };
    let summary = format!("Found {} courses", response.courses.len());
    let data = UniversityServer::serialize(response, "list_courses response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}

pub(super) async fn get_course(
    server: &UniversityServer,
    params: Parameters<CourseParams>,
) -> Result<CallToolResult, McpError> {
    let id: CourseId = UniversityServer::parse_id(&params.0.course_id, "course_id")?;

    let university = server.state.university.read().await;
    let Some(course) = university.course(id) else {
        return Err(UniversityServer::not_found("course", id));
    };
    let data = UniversityServer::serialize(course.view(), "get_course response")?;
    drop(university);

    Ok(UniversityServer::success(format!("Fetched course {id}"), data))
}

pub(super) async fn get_course_roster(
    server: &UniversityServer,
    params: Parameters<CourseParams>,
) -> Result<CallToolResult, McpError> {
    let course_id: CourseId = UniversityServer::parse_id(&params.0.course_id, "course_id")?;

    let university = server.state.university.read().await;
    let Some(students) = university.get_course_roster(course_id) else {
        return Err(UniversityServer::not_found("course", course_id));
    };
    let response = RosterResponse {
        course_id,
        students,
    };
    let summary = format!("{} students enrolled", response.students.len());
    let data = UniversityServer::serialize(response, "get_course_roster response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}
