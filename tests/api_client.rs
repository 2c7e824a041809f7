//! HTTP gateway behavior against a mock REST backend.

mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{client_for, date};
use gradebook::api::{ApiErrorKind, GradeGateway, StudentGateway};
use gradebook::model::{LoadStudentsParams, NewGrade, NewStudent, SortField, SortOrder};

#[tokio::test]
async fn list_students_sends_filters_as_query() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json(
        r#"[{"id":1,"firstName":"Ann","lastName":"Lee","groupName":"G1"}]"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let params = LoadStudentsParams {
        first_name_filter: Some("An".into()),
        last_name_filter: Some("  ".into()),
        sort_by: Some(SortField::LastName),
        sort_order: Some(SortOrder::Desc),
    };
    let students = StudentGateway::list(&client, &params).await.unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].first_name, "Ann");

    let request = api.last_request().await;
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/students");
    let query = request.query.unwrap_or_default();
    assert!(query.contains("firstNameFilter=An"), "query was {query}");
    assert!(query.contains("sortOrder=desc"), "query was {query}");
    assert!(!query.contains("lastNameFilter"), "blank filter leaked: {query}");
}

#[tokio::test]
async fn list_students_without_params_has_no_query() {
    let api = MockApi::start().await;
    let client = client_for(&api.base_url());

    let students = StudentGateway::list(&client, &LoadStudentsParams::default())
        .await
        .unwrap();

    assert!(students.is_empty());
    assert_eq!(api.last_request().await.query, None);
}

#[tokio::test]
async fn create_student_posts_camel_case_body() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json(
        r#"{"id":12,"firstName":"Ada","lastName":"Lovelace","groupName":"CS-1"}"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let created = StudentGateway::create(
        &client,
        &NewStudent {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            group_name: "CS-1".into(),
        },
    )
    .await
    .unwrap();

    assert_eq!(created.id, 12);
    let request = api.last_request().await;
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/students");
    let body = request.json_body();
    assert_eq!(body["firstName"], "Ada");
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn update_student_puts_to_its_id() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json(
        r#"{"id":4,"firstName":"Bo","lastName":"Ng","groupName":"G2"}"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let student = common::student(4, "Bo", "Ng", "G2");
    let updated = StudentGateway::update(&client, &student).await.unwrap();

    assert_eq!(updated, student);
    let request = api.last_request().await;
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/students/4");
}

#[tokio::test]
async fn delete_student_accepts_empty_body() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::status(204, "")).await;
    let client = client_for(&api.base_url());

    StudentGateway::delete(&client, 5).await.unwrap();

    let request = api.last_request().await;
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/students/5");
}

#[tokio::test]
async fn grades_for_student_use_nested_path() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json(
        r#"[{"id":3,"studentId":4,"subject":"Math","score":95,"gradeDate":"2024-01-10"}]"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let grades = client.list_for_student(4).await.unwrap();

    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].grade_date, date(2024, 1, 10));
    assert_eq!(api.last_request().await.path, "/api/students/4/grades");
}

#[tokio::test]
async fn create_grade_posts_under_its_student() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json(
        r#"{"id":31,"studentId":4,"subject":"Math","score":95,"gradeDate":"2024-01-10"}"#,
    ))
    .await;
    let client = client_for(&api.base_url());

    let grade = GradeGateway::create(
        &client,
        &NewGrade {
            student_id: 4,
            subject: "Math".into(),
            score: 95.0,
            grade_date: date(2024, 1, 10),
        },
    )
    .await
    .unwrap();

    assert_eq!(grade.id, 31);
    let request = api.last_request().await;
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/students/4/grades");
    assert_eq!(request.json_body()["gradeDate"], "2024-01-10");
}

#[tokio::test]
async fn client_errors_are_validation_errors() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::status(400, "firstName must not be blank"))
        .await;
    let client = client_for(&api.base_url());

    let err = StudentGateway::get(&client, 1).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.status(), Some(400));
    assert!(err.detail().contains("firstName"));
}

#[tokio::test]
async fn server_errors_are_server_errors() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::status(503, "")).await;
    let client = client_for(&api.base_url());

    let err = GradeGateway::list(&client).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.detail(), "HTTP 503");
}

#[tokio::test]
async fn malformed_json_is_a_server_error() {
    let api = MockApi::start().await;
    api.enqueue(MockResponse::json("{not json")).await;
    let client = client_for(&api.base_url());

    let err = GradeGateway::get(&client, 2).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{port}/api"));

    let err = StudentGateway::list(&client, &LoadStudentsParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Network);
    assert_eq!(err.status(), None);
}
