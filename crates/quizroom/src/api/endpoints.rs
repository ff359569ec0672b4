//! Endpoint path definitions and auth request/response types.
//!
//! One constant per logical backend operation, resolved against the
//! configured [`BaseUrl`](crate::BaseUrl) at dispatch time.

use serde::{Deserialize, Serialize};

// ============================================================================
// Auth
// ============================================================================

/// POST: create a session from credentials.
pub const AUTH_SIGN_IN: &str = "/auth/user/signin";

/// POST: exchange the refresh token for a new access token.
pub const AUTH_REFRESH: &str = "/auth/user/refresh";

/// Substring identifying sign-in endpoints. Responses from matching URLs
/// never trigger a token refresh.
pub(crate) const SIGN_IN_MARKER: &str = "signin";

// ============================================================================
// Resources
// ============================================================================

pub const CATEGORY_GET_ALL: &str = "/category/get-all";
pub const CATEGORY_GET: &str = "/category/get";
pub const CATEGORY_CREATE: &str = "/category/create";
pub const CATEGORY_UPDATE: &str = "/category/update";
pub const CATEGORY_DELETE: &str = "/category/delete";

pub const COURSE_GET_ALL: &str = "/course/get-all";
pub const COURSE_GET: &str = "/course/get";
pub const COURSE_CREATE: &str = "/course/create";
pub const COURSE_UPDATE: &str = "/course/update";
pub const COURSE_DELETE: &str = "/course/delete";

pub const STUDENT_GET_ALL: &str = "/student/get-all";
pub const STUDENT_GET: &str = "/student/get";
pub const STUDENT_CREATE: &str = "/student/create";
pub const STUDENT_UPDATE: &str = "/student/update";
pub const STUDENT_DELETE: &str = "/student/delete";

pub const TEACHER_GET_ALL: &str = "/teacher/get-all";
pub const TEACHER_GET: &str = "/teacher/get";
pub const TEACHER_CREATE: &str = "/teacher/create";
pub const TEACHER_UPDATE: &str = "/teacher/update";
pub const TEACHER_DELETE: &str = "/teacher/delete";

pub const QUIZ_GET_ALL: &str = "/quiz/get-all";
pub const QUIZ_GET: &str = "/quiz/get";
pub const QUIZ_CREATE: &str = "/quiz/create";
pub const QUIZ_UPDATE: &str = "/quiz/update";
pub const QUIZ_DELETE: &str = "/quiz/delete";

pub const QUESTION_GET_ALL: &str = "/question/get-all";
pub const QUESTION_GET: &str = "/question/get";
pub const QUESTION_CREATE: &str = "/question/create";
pub const QUESTION_UPDATE: &str = "/question/update";
pub const QUESTION_DELETE: &str = "/question/delete";

pub const ONLINE_QUIZ_GET_ALL: &str = "/online-quiz/get-all";
pub const ONLINE_QUIZ_GET: &str = "/online-quiz/get";
pub const ONLINE_QUIZ_CREATE: &str = "/online-quiz/create";
pub const ONLINE_QUIZ_DELETE: &str = "/online-quiz/delete";

pub const ESSAY_EXAM_GET_ALL: &str = "/essay-exam/get-all";
pub const ESSAY_EXAM_GET: &str = "/essay-exam/get";
pub const ESSAY_EXAM_CREATE: &str = "/essay-exam/create";
pub const ESSAY_EXAM_UPDATE: &str = "/essay-exam/update";
pub const ESSAY_EXAM_DELETE: &str = "/essay-exam/delete";

/// Websocket path prefix for live quiz waiting rooms.
pub const WAITING_ROOM: &str = "/waiting-room";

// ============================================================================
// Auth Request/Response Types
// ============================================================================

/// Request body for sign-in.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from sign-in.
#[derive(Debug, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Request body for token refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response from token refresh.
///
/// Only a new access token is issued; the refresh token stays valid.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Backend error response format.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
