//! Mock backend tests for the quizroom library.
//!
//! These tests use wiremock to simulate the platform backend and test the
//! library's behavior without requiring network access or real credentials.

use std::sync::Arc;

use quizroom::api::{NewCourse, NewQuestion};
use quizroom::{AccessToken, BaseUrl, Credentials, MemoryTokenStore, RefreshToken, ResourceId};
use quizroom::{Error, Session, TokenStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(server.uri()).unwrap()
}

/// Helper to build a session with preset tokens and no sign-in round trip.
fn restored_session(
    server: &MockServer,
    access: Option<&str>,
    refresh: Option<&str>,
) -> (Session, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    if let Some(access) = access {
        store.set_tokens(
            AccessToken::new(access),
            refresh.map(RefreshToken::new),
        );
    }

    let session = Session::from_store(mock_base_url(server), store.clone());
    (session, store)
}

/// Matches requests that carry no Authorization header at all.
struct NoAuthorizationHeader;

impl wiremock::Match for NoAuthorizationHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/user/signin"))
        .and(body_json(json!({
            "email": "admin@school.edu",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "refresh_token": "test-refresh-token",
            "name": "Admin"
        })))
        .mount(&server)
        .await;

    let base = mock_base_url(&server);
    let credentials = Credentials::new("admin@school.edu", "secret123");
    let session = Session::login(&base, credentials).await.unwrap();

    assert_eq!(
        session.access_token().unwrap().as_str(),
        "test-access-token"
    );
    assert_eq!(
        session.refresh_token().unwrap().as_str(),
        "test-refresh-token"
    );
}

#[tokio::test]
async fn test_login_invalid_credentials_triggers_no_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/user/signin"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "InvalidCredentials",
            "message": "Wrong email or password"
        })))
        .mount(&server)
        .await;

    // A 401 from a sign-in URL must never reach the refresh endpoint.
    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let base = mock_base_url(&server);
    let credentials = Credentials::new("bad@user", "wrongpass");
    let result = Session::login(&base, credentials).await;

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("401"));
}

#[tokio::test]
async fn test_logout_clears_store() {
    let server = MockServer::start().await;
    let (session, store) = restored_session(&server, Some("abc"), Some("r1"));

    session.logout();

    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

// ============================================================================
// Request Signing Tests
// ============================================================================

#[tokio::test]
async fn test_bearer_header_matches_stored_token() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let courses = session.courses().list().await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_missing_token_sends_unauthenticated_request() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, None, None);

    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let courses = session.courses().list().await.unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_empty_token_sends_unauthenticated_request() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some(""), None);

    Mock::given(method("GET"))
        .and(path("/student/get-all"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let students = session.students().list().await.unwrap();
    assert!(students.is_empty());
}

// ============================================================================
// Refresh-on-401 Tests
// ============================================================================

#[tokio::test]
async fn test_401_refreshes_and_replays_once() {
    let server = MockServer::start().await;
    let (session, store) = restored_session(&server, Some("abc"), Some("r1"));

    // The stale token is rejected once
    Mock::given(method("GET"))
        .and(path("/quiz/get"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "ExpiredToken",
            "message": "Token has expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Exactly one refresh call, carrying the refresh token in the body
    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .and(body_json(json!({ "refreshToken": "r1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "xyz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // The replay carries the fresh token
    Mock::given(method("GET"))
        .and(path("/quiz/get"))
        .and(header("authorization", "Bearer xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "q1",
            "title": "Midterm"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = ResourceId::new("q1").unwrap();
    let quiz = session.quizzes().get(&id).await.unwrap();

    assert_eq!(quiz.title, "Midterm");
    assert_eq!(store.access_token().unwrap().as_str(), "xyz");
    // The refresh token is untouched by a refresh
    assert_eq!(store.refresh_token().unwrap().as_str(), "r1");
}

#[tokio::test]
async fn test_replay_happens_exactly_once() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), Some("r1"));

    // Both the original attempt and the single replay are rejected:
    // two calls total, never a third.
    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "ExpiredToken"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "xyz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = session.courses().list().await;

    // The replay's 401 surfaces unmodified
    match result {
        Err(Error::Api(e)) => assert_eq!(e.status, 401),
        other => panic!("expected API 401, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_concurrent_401s_each_refresh_independently() {
    let server = MockServer::start().await;
    let (session, store) = restored_session(&server, Some("abc"), Some("r1"));

    // Both initial attempts and both replays are rejected: four calls.
    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "ExpiredToken"
        })))
        .expect(4)
        .mount(&server)
        .await;

    // There is no coalescing of in-flight refreshes: each 401 triggers
    // its own refresh call. The delay keeps both refreshes in flight at
    // the same time.
    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(50))
                .set_body_json(json!({ "access_token": "xyz" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let courses_a = session.courses();
    let courses_b = session.courses();
    let (first, second) = tokio::join!(courses_a.list(), courses_b.list());

    assert!(first.is_err());
    assert!(second.is_err());
    assert_eq!(store.access_token().unwrap().as_str(), "xyz");
}

#[tokio::test]
async fn test_refresh_failure_propagates_without_replay() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), Some("expired-refresh"));

    // Only the initial attempt; no replay after a failed refresh
    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "ExpiredToken"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "ExpiredToken",
            "message": "Refresh token has expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = session.courses().list().await;

    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.error.as_deref(), Some("ExpiredToken"));
        }
        other => panic!("expected refresh API error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_missing_refresh_token_fails_fast() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), None);

    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    // Without a refresh token the refresh endpoint is never contacted
    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = session.courses().list().await;

    assert!(matches!(
        result,
        Err(Error::Auth(
            quizroom::error::AuthError::MissingRefreshToken
        ))
    ));
}

#[tokio::test]
async fn test_401_from_refresh_endpoint_does_not_recurse() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), Some("r1"));

    // The refresh endpoint rejecting with 401 must not trigger another
    // refresh: exactly one call.
    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "InvalidToken"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = session.refresh().await;

    match result {
        Err(Error::Api(e)) => assert_eq!(e.status, 401),
        other => panic!("expected API 401, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_non_401_errors_pass_through_untouched() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("abc"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/course/get"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "NotFound",
            "message": "No such course"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/user/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let id = ResourceId::new("nope").unwrap();
    let result = session.courses().get(&id).await;

    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.error.as_deref(), Some("NotFound"));
        }
        other => panic!("expected API 404, got {:?}", other.map(|_| ())),
    }
}

// ============================================================================
// Resource Operation Tests
// ============================================================================

#[tokio::test]
async fn test_course_list_success() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/course/get-all"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c1",
                "name": "Algebra I",
                "categoryId": "cat-math"
            },
            {
                "id": "c2",
                "name": "Biology",
                "description": "Intro course"
            }
        ])))
        .mount(&server)
        .await;

    let courses = session.courses().list().await.unwrap();

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].name, "Algebra I");
    assert_eq!(courses[0].category_id.as_ref().unwrap().as_str(), "cat-math");
    assert_eq!(courses[1].description.as_deref(), Some("Intro course"));
}

#[tokio::test]
async fn test_course_create_success() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("POST"))
        .and(path("/course/create"))
        .and(header("authorization", "Bearer access-token"))
        .and(body_json(json!({ "name": "Chemistry" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c3",
            "name": "Chemistry"
        })))
        .mount(&server)
        .await;

    let new_course = NewCourse {
        name: "Chemistry".to_string(),
        description: None,
        category_id: None,
        teacher_id: None,
    };
    let course = session.courses().create(&new_course).await.unwrap();

    assert_eq!(course.id.as_str(), "c3");
}

#[tokio::test]
async fn test_course_update_includes_id_in_body() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("POST"))
        .and(path("/course/update"))
        .and(body_json(json!({ "id": "c1", "name": "Algebra II" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "name": "Algebra II"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = ResourceId::new("c1").unwrap();
    let changes = NewCourse {
        name: "Algebra II".to_string(),
        description: None,
        category_id: None,
        teacher_id: None,
    };
    let course = session.courses().update(&id, &changes).await.unwrap();

    assert_eq!(course.name, "Algebra II");
}

#[tokio::test]
async fn test_course_delete_success() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("DELETE"))
        .and(path("/course/delete"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let id = ResourceId::new("c1").unwrap();
    assert!(session.courses().delete(&id).await.is_ok());
}

#[tokio::test]
async fn test_question_bank_list_for_quiz() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/question/get-all"))
        .and(wiremock::matchers::query_param("quizId", "q1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "qq1",
                "quizId": "q1",
                "prompt": "2 + 2 = ?",
                "options": ["3", "4", "5"],
                "answerIndex": 1
            }
        ])))
        .mount(&server)
        .await;

    let quiz = ResourceId::new("q1").unwrap();
    let questions = session.question_banks().list_for_quiz(&quiz).await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].prompt, "2 + 2 = ?");
    assert_eq!(questions[0].answer_index, 1);
}

#[tokio::test]
async fn test_question_create() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("POST"))
        .and(path("/question/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "qq2",
            "quizId": "q1",
            "prompt": "Capital of France?",
            "options": ["Paris", "Lyon"],
            "answerIndex": 0
        })))
        .mount(&server)
        .await;

    let question = NewQuestion {
        quiz_id: ResourceId::new("q1").unwrap(),
        prompt: "Capital of France?".to_string(),
        options: vec!["Paris".to_string(), "Lyon".to_string()],
        answer_index: 0,
    };
    let created = session.question_banks().create(&question).await.unwrap();

    assert_eq!(created.id.as_str(), "qq2");
}

#[tokio::test]
async fn test_online_quiz_list() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/online-quiz/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "oq1",
                "quizId": "q1",
                "pin": "482913",
                "status": "waiting"
            }
        ])))
        .mount(&server)
        .await;

    let online = session.online_quizzes().list().await.unwrap();

    assert_eq!(online.len(), 1);
    assert_eq!(online[0].pin, "482913");
    assert_eq!(
        online[0].status,
        quizroom::api::OnlineQuizStatus::Waiting
    );
}

#[tokio::test]
async fn test_empty_list() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/teacher/get-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let teachers = session.teachers().list().await.unwrap();
    assert!(teachers.is_empty());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/category/get-all"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let result = session.categories().list().await;

    // Should handle non-JSON error gracefully
    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.status, 500);
            assert!(e.error.is_none());
        }
        other => panic!("expected API 500, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_empty_error_response() {
    let server = MockServer::start().await;
    let (session, _) = restored_session(&server, Some("access-token"), Some("r1"));

    Mock::given(method("GET"))
        .and(path("/student/get-all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = session.students().list().await;

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("503"));
}
