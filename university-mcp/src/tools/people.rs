use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};
use university_core::{
    Student, StudentId, Teacher, TeacherId,
    domain::view::{StudentView, TeacherView},
};

use crate::server::UniversityServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreateStudentParams {
    /// Full name of the student.
    pub name: String,
    /// How to reach the student, e.g. an email address.
    pub contact_info: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreateTeacherParams {
    /// Full name of the teacher.
    pub name: String,
    /// How to reach the teacher, e.g. an email address.
    pub contact_info: String,
    /// Subject areas the teacher specializes in.
    #[serde(default)]
    pub specializations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct CreatedResponse {
    /// Identifier of the newly created entity.
    pub id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetStudentParams {
    /// Identifier of the student to look up.
    pub student_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetTeacherParams {
    /// Identifier of the teacher to look up.
    pub teacher_id: String,
}

#[derive(Debug, Serialize)]
struct ListStudentsResponse<'a> {
    students: Vec<StudentView<'a>>,
}

#[derive(Debug, Serialize)]
struct ListTeachersResponse<'a> {
    teachers: Vec<TeacherView<'a>>,
}

pub(super) async fn create_student(
    server: &UniversityServer,
    params: Parameters<CreateStudentParams>,
) -> Result<CallToolResult, McpError> {
    let params = params.0;
    let student = Student::new(params.name, params.contact_info)
        .map_err(|error| UniversityServer::invalid("invalid student", error))?;

    let id = server.state.university.write().await.add_student(student);

    let response = CreatedResponse { id: id.to_string() };
    Ok(UniversityServer::success(
        format!("Created student {id}"),
        UniversityServer::serialize(response, "create_student response")?,
    ))
}

pub(super) async fn create_teacher(
    server: &UniversityServer,
    params: Parameters<CreateTeacherParams>,
) -> Result<CallToolResult, McpError> {
    let params = params.0;
    let teacher = Teacher::new(params.name, params.contact_info, params.specializations)
        .map_err(|error| UniversityServer::invalid("invalid teacher", error))?;

    let id = server.state.university.write().await.add_teacher(teacher);

    let response = CreatedResponse { id: id.to_string() };
    Ok(UniversityServer::success(
        format!("Created teacher {id}"),
        UniversityServer::serialize(response, "create_teacher response")?,
    ))
}

pub(super) async fn list_students(server: &UniversityServer) -> Result<CallToolResult, McpError> {
    let university = server.state.university.read().await;
    let response = ListStudentsResponse {
        students: university.students().iter().map(Student::view).collect(),
    };
    let summary = format!("Found {} students", response.students.len());
    let data = UniversityServer::serialize(response, "list_students response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}

pub(super) async fn list_teachers(server: &UniversityServer) -> Result<CallToolResult, McpError> {
    let university = server.state.university.read().await;
    let response = ListTeachersResponse {
        teachers: university.teachers().iter().map(Teacher::view).collect(),
    };
    let summary = format!("Found {} teachers", response.teachers.len());
    let data = UniversityServer::serialize(response, "list_teachers response")?;
    drop(university);

    Ok(UniversityServer::success(summary, data))
}

pub(super) async fn get_student(
    server: &UniversityServer,
    params: Parameters<GetStudentParams>,
) -> Result<CallToolResult, McpError> {
    let id: StudentId = UniversityServer::parse_id(&params.0.student_id, "student_id")?;

    let university = server.state.university.read().await;
    let Some(student) = university.student(id) else {
        return Err(UniversityServer::not_found("student", id));
    };
    let data = UniversityServer::serialize(student.view(), "get_student response")?;
    drop(university);

    Ok(UniversityServer::success(format!("Fetched student {id}"), data))
}

pub(super) async fn get_teacher(
    server: &UniversityServer,
    params: Parameters<GetTeacherParams>,
) -> Result<CallToolResult, McpError> {
    let id: TeacherId = UniversityServer::parse_id(&params.0.teacher_id, "teacher_id")?;

    let university = server.state.university.read().await;
    let Some(teacher) = university.teacher(id) else {
        return Err(UniversityServer::not_found("teacher", id));
    };
    let data = UniversityServer::serialize(teacher.view(), "get_teacher response")?;
    drop(university);

    Ok(UniversityServer::success(format!("Fetched teacher {id}"), data))
}
