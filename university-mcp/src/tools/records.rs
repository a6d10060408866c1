use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rmcp::{ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult};
use serde::{Deserialize, Serialize};
use university_core::{CourseId, Grade, StudentId};

use super::courses::CourseParams;
use crate::server::UniversityServer;

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct RecordAttendanceParams {
    /// Identifier of the course.
    pub course_id: String,
    /// Date of the session, formatted as YYYY-MM-DD.
    pub date: String,
    /// Identifiers of the students who were present.
    pub present_student_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AssignGradeParams {
    /// Identifier of the course.
    pub course_id: String,
    /// Identifier of the student being graded.
    pub student_id: String,
    /// Numeric grade between 0 and 100 inclusive.
    pub grade: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
pub struct StudentGradesParams {
    /// Identifier of the student.
    pub student_id: String,
}

#[derive(Debug, Serialize)]
struct AttendanceRecorded {
    course_id: CourseId,
    date: NaiveDate,
    present: usize,
}

#[derive(Debug, Serialize)]
struct GradeAssigned {
    course_id: CourseId,
    student_id: StudentId,
    grade: Grade,
}

#[derive(Debug, Serialize)]
struct CourseGradesResponse {
    course_id: CourseId,
    grades: BTreeMap<StudentId, Grade>,
}

/// Grades keyed by course; `null` marks a course with no grade yet.
#[derive(Debug, Serialize)]
struct StudentGradesResponse {
    student_id: StudentId,
    grades: BTreeMap<CourseId, Option<Grade>>,
}

#[derive(Debug, Serialize)]
struct AttendanceResponse {
    course_id: CourseId,
    attendance: BTreeMap<NaiveDate, BTreeSet<StudentId>>,
}

pub(super) async fn record_attendance(
    server: &UniversityServer,
    params: Parameters<RecordAttendanceParams>,
) -> Result<CallToolResult, McpError> {
    let params = params.0;
    let course_id: CourseId = UniversityServer::parse_id(&params.course_id, "course_id")?;
    let date: NaiveDate = params
        .date
        .trim()
        .parse::<NaiveDate>()
        .map_err(|error| UniversityServer::invalid("invalid `date` provided", error))?;
    let present = params
        .present_student_ids
        .iter()
        .map(|raw| UniversityServer::parse_id::<StudentId>(raw, "present_student_ids"))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let count = present.len();

    server
        .state
        .university
        .write()
        .await
        .record_attendance(course_id, date, present)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    let response = AttendanceRecorded {
        course_id,
        date,
        present: count,
    };
    Ok(UniversityServer::success(
        format!("Recorded {count} present for course {course_id} on {date}"),
        UniversityServer::serialize(response, "record_attendance response")?,
    ))
}

pub(super) async fn assign_grade(
    server: &UniversityServer,
    params: Parameters<AssignGradeParams>,
) -> Result<CallToolResult, McpError> {
    let params = params.0;
    let course_id: CourseId = UniversityServer::parse_id(&params.course_id, "course_id")?;
    let student_id: StudentId = UniversityServer::parse_id(&params.student_id, "student_id")?;

    let grade = server
        .state
        .university
        .write()
        .await
        .assign_grade(course_id, student_id, params.grade)
        .map_err(|error| UniversityServer::registry_error(&error))?;

    let response = GradeAssigned {
        course_id,
        student_id,
        grade,
    };
    Ok(UniversityServer::success(
        format!("Assigned grade {grade} to student {student_id} in course {course_id}"),
        UniversityServer::serialize(response, "assign_grade response")?,
    ))
}

pub(super) async fn get_course_grades(
    server: &UniversityServer,
    params: Parameters<CourseParams>,
) -> Result<CallToolResult, McpError> {
    let course_id: CourseId = UniversityServer::parse_id(&params.0.course_id, "course_id")?;

    let grades = server
        .state
        .university
        .read()
        .await
        .get_course_grades(course_id)
        .ok_or_else(|| UniversityServer::not_found("course", course_id))?;

    let response = CourseGradesResponse { course_id, grades };
    let summary = format!("{} grades recorded", response.grades.len());
    Ok(UniversityServer::success(
        summary,
        UniversityServer::serialize(response, "get_course_grades response")?,
    ))
}

pub(super) async fn get_student_grades(
    server: &UniversityServer,
    params: Parameters<StudentGradesParams>,
) -> Result<CallToolResult, McpError> {
    let student_id: StudentId = UniversityServer::parse_id(&params.0.student_id, "student_id")?;

    let grades = server
        .state
        .university
        .read()
        .await
        .get_student_grades(student_id)
        .ok_or_else(|| UniversityServer::not_found("student", student_id))?;

    let graded = grades.values().flatten().count();
    let response = StudentGradesResponse { student_id, grades };
    let summary = format!(
        "{graded} of {} enrolled courses graded",
        response.grades.len()
    );
    Ok(UniversityServer::success(
        summary,
        UniversityServer::serialize(response, "get_student_grades response")?,
    ))
}

pub(super) async fn get_course_attendance(
    server: &UniversityServer,
    params: Parameters<CourseParams>,
) -> Result<CallToolResult, McpError> {
    let course_id: CourseId = UniversityServer::parse_id(&params.0.course_id, "course_id")?;

    let attendance = server
        .state
        .university
        .read()
        .await
        .get_course_attendance(course_id)
        .ok_or_else(|| UniversityServer::not_found("course", course_id))?;

    let response = AttendanceResponse {
        course_id,
        attendance,
    };
    let summary = format!("{} sessions recorded", response.attendance.len());
    Ok(UniversityServer::success(
        summary,
        UniversityServer::serialize(response, "get_course_attendance response")?,
    ))
}
