mod courses;
mod enrollment;
mod people;
mod records;

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::server::UniversityServer;

#[tool_router]
impl UniversityServer {
    #[tool(
        description = "Create a student from a name and contact info; returns the new student id",
        annotations(
            title = "Create Student",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn create_student(
        &self,
        params: Parameters<people::CreateStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        people::create_student(self, params).await
    }

    #[tool(
        description = "Create a teacher from a name, contact info and specializations; returns \
                       the new teacher id",
        annotations(
            title = "Create Teacher",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn create_teacher(
        &self,
        params: Parameters<people::CreateTeacherParams>,
    ) -> Result<CallToolResult, McpError> {
        people::create_teacher(self, params).await
    }

    #[tool(
        description = "Create a math course (with difficulty_level) or an art course (with \
                       materials_required); returns the new course id",
        annotations(
            title = "Create Course",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn create_course(
        &self,
        params: Parameters<courses::CreateCourseParams>,
    ) -> Result<CallToolResult, McpError> {
        courses::create_course(self, params).await
    }

    #[tool(
        description = "List all students",
        annotations(
            title = "List Students",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn list_students(&self) -> Result<CallToolResult, McpError> {
        people::list_students(self).await
    }

    #[tool(
        description = "List all teachers",
        annotations(
            title = "List Teachers",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn list_teachers(&self) -> Result<CallToolResult, McpError> {
        people::list_teachers(self).await
    }

    #[tool(
        description = "List all courses",
        annotations(
            title = "List Courses",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn list_courses(&self) -> Result<CallToolResult, McpError> {
        courses::list_courses(self).await
    }

    #[tool(
        description = "Get a student by id, including enrolled course ids",
        annotations(
            title = "Get Student",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_student(
        &self,
        params: Parameters<people::GetStudentParams>,
    ) -> Result<CallToolResult, McpError> {
        people::get_student(self, params).await
    }

    #[tool(
        description = "Get a teacher by id, including assigned course ids",
        annotations(
            title = "Get Teacher",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_teacher(
        &self,
        params: Parameters<people::GetTeacherParams>,
    ) -> Result<CallToolResult, McpError> {
        people::get_teacher(self, params).await
    }

    #[tool(
        description = "Get a course by id, including enrollment and teacher",
        annotations(
            title = "Get Course",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_course(
        &self,
        params: Parameters<courses::CourseParams>,
    ) -> Result<CallToolResult, McpError> {
        courses::get_course(self, params).await
    }

    #[tool(
        description = "List the students enrolled in a course",
        annotations(
            title = "Get Course Roster",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_course_roster(
        &self,
        params: Parameters<courses::CourseParams>,
    ) -> Result<CallToolResult, McpError> {
        courses::get_course_roster(self, params).await
    }

    #[tool(
        description = "Enroll a student in a course; fails if the course is full",
        annotations(
            title = "Enroll Student",
            read_only_hint = false,
            destructive_hint = false,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn enroll_student(
        &self,
        params: Parameters<enrollment::EnrollmentParams>,
    ) -> Result<CallToolResult, McpError> {
        enrollment::enroll_student(self, params).await
    }

    #[tool(
        description = "Withdraw a student from a course they are enrolled in",
        annotations(
            title = "Withdraw Student",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = false,
            open_world_hint = false
        )
    )]
    async fn withdraw_student(
        &self,
        params: Parameters<enrollment::EnrollmentParams>,
    ) -> Result<CallToolResult, McpError> {
        enrollment::withdraw_student(self, params).await
    }

    #[tool(
        description = "Assign a teacher to a course, replacing any current teacher",
        annotations(
            title = "Assign Teacher",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn assign_teacher(
        &self,
        params: Parameters<enrollment::AssignTeacherParams>,
    ) -> Result<CallToolResult, McpError> {
        enrollment::assign_teacher(self, params).await
    }

    #[tool(
        description = "List the courses a student is enrolled in",
        annotations(
            title = "Get Student Courses",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_student_courses(
        &self,
        params: Parameters<enrollment::StudentCoursesParams>,
    ) -> Result<CallToolResult, McpError> {
        enrollment::get_student_courses(self, params).await
    }

    #[tool(
        description = "List the courses a teacher is assigned to",
        annotations(
            title = "Get Teacher Courses",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_teacher_courses(
        &self,
        params: Parameters<enrollment::TeacherCoursesParams>,
    ) -> Result<CallToolResult, McpError> {
        enrollment::get_teacher_courses(self, params).await
    }

    #[tool(
        description = "Record which enrolled students were present on a date (YYYY-MM-DD); \
                       replaces any earlier record for that date",
        annotations(
            title = "Record Attendance",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn record_attendance(
        &self,
        params: Parameters<records::RecordAttendanceParams>,
    ) -> Result<CallToolResult, McpError> {
        records::record_attendance(self, params).await
    }

    #[tool(
        description = "Assign a grade between 0 and 100 to an enrolled student",
        annotations(
            title = "Assign Grade",
            read_only_hint = false,
            destructive_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn assign_grade(
        &self,
        params: Parameters<records::AssignGradeParams>,
    ) -> Result<CallToolResult, McpError> {
        records::assign_grade(self, params).await
    }

    #[tool(
        description = "Get every grade recorded for a course, keyed by student id",
        annotations(
            title = "Get Course Grades",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_course_grades(
        &self,
        params: Parameters<courses::CourseParams>,
    ) -> Result<CallToolResult, McpError> {
        records::get_course_grades(self, params).await
    }

    #[tool(
        description = "Get a student's grade in each enrolled course; null marks an ungraded \
                       course",
        annotations(
            title = "Get Student Grades",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_student_grades(
        &self,
        params: Parameters<records::StudentGradesParams>,
    ) -> Result<CallToolResult, McpError> {
        records::get_student_grades(self, params).await
    }

    #[tool(
        description = "Get the attendance log of a course, keyed by date",
        annotations(
            title = "Get Course Attendance",
            read_only_hint = true,
            idempotent_hint = true,
            open_world_hint = false
        )
    )]
    async fn get_course_attendance(
        &self,
        params: Parameters<courses::CourseParams>,
    ) -> Result<CallToolResult, McpError> {
        records::get_course_attendance(self, params).await
    }
}

impl UniversityServer {
    pub(crate) fn build_tool_router() -> rmcp::handler::server::router::tool::ToolRouter<Self> {
        Self::tool_router()
    }
}
