//! Tests for the page endpoints.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{DemoUserDirectory, FixtureCourseCatalogue, MockStudentRepository};
use crate::domain::{NewStudent, StudentId};
use crate::inbound::http::error::{json_config, query_config};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::test_utils::{admin_user, session_cookie, test_session_middleware};
use crate::outbound::persistence::InMemoryStudentRepository;

fn roster(count: usize) -> Vec<Student> {
    (1..=count)
        .map(|n| {
            Student::from_new(
                StudentId::new(format!("s{n}")).expect("id"),
                NewStudent {
                    name: format!("Student {n}"),
                    email: format!("student{n}@example.com"),
                    registration_number: format!("REG-{n:03}"),
                    major: if n % 2 == 0 { "Physics" } else { "Biology" }.into(),
                    date_of_birth: "2001-01-01".into(),
                    gpa: 3.5,
                    avatar: None,
                    enrolled_courses: vec!["CS101".into(), "BIO101".into()],
                },
            )
        })
        .collect()
}

fn state_with(count: usize) -> HttpState {
    HttpState::new(
        Arc::new(InMemoryStudentRepository::with_students(roster(count))),
        Arc::new(FixtureCourseCatalogue::default()),
        Arc::new(DemoUserDirectory::default()),
    )
}

fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(query_config())
        .wrap(test_session_middleware())
        .route(
            "/test-sign-in",
            web::post().to(|session: SessionContext| async move {
                session.persist_user(&admin_user())?;
                Ok::<_, crate::domain::Error>(HttpResponse::Ok().finish())
            }),
        )
        .configure(configure)
}

#[actix_web::test]
async fn dashboard_shows_the_signed_in_user_and_four_cards() {
    let app = test::init_service(test_app(state_with(2))).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri("/test-sign-in").to_request(),
    )
    .await;
    let request = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(session_cookie(&signed_in))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["user"]["name"], "Admin User");
    let titles: Vec<&str> = body["statCards"]
        .as_array()
        .expect("cards")
        .iter()
        .filter_map(|card| card["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        ["Total Students", "Total Courses", "Average GPA", "Active Semesters"]
    );
    assert_eq!(body["summary"]["averageGpa"], "3.50");
}

async fn signed_in_dashboard(state: HttpState) -> Value {
    let app = test::init_service(test_app(state)).await;
    let signed_in = test::call_service(
        &app,
        test::TestRequest::post().uri("/test-sign-in").to_request(),
    )
    .await;
    let request = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(session_cookie(&signed_in))
        .to_request();
    test::call_and_read_body_json(&app, request).await
}

#[actix_web::test]
async fn dashboard_lists_five_recent_students_without_actions() {
    let body = signed_in_dashboard(state_with(7)).await;

    let headers: Vec<&str> = body["recentStudents"]["columns"]
        .as_array()
        .expect("columns")
        .iter()
        .filter_map(|column| column["text"].as_str())
        .collect();
    assert_eq!(headers, ["Name", "Reg No", "Major", "GPA", "Courses"]);
    let ids: Vec<&str> = body["recentStudents"]["rows"]
        .as_array()
        .expect("rows")
        .iter()
        .filter_map(|row| row["id"].as_str())
        .collect();
    assert_eq!(ids, ["s1", "s2", "s3", "s4", "s5"]);
    assert_eq!(body["recentStudentsPager"]["limit"], 5);
    assert_eq!(body["recentStudentsPager"]["next"], 2);
}

#[actix_web::test]
async fn dashboard_shows_the_first_three_courses() {
    let body = signed_in_dashboard(state_with(0)).await;

    let codes: Vec<&str> = body["recentCourses"]
        .as_array()
        .expect("courses")
        .iter()
        .filter_map(|card| card["code"].as_str())
        .collect();
    assert_eq!(codes, ["CS101", "CS201", "BIO101"]);
    assert!(body["recentStudents"]["emptyMessage"].is_string());
}

#[actix_web::test]
async fn dashboard_without_session_is_unauthorised() {
    let app = test::init_service(test_app(state_with(0))).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/dashboard").to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn student_list_defaults_to_ten_rows_with_pager() {
    let app = test::init_service(test_app(state_with(23))).await;
    let request = test::TestRequest::get().uri("/students").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["table"]["rows"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["table"]["columns"][0]["text"], "Name");
    assert_eq!(body["pager"]["limit"], 10);
    assert_eq!(body["pager"]["showing"]["first"], 1);
    assert_eq!(body["pager"]["showing"]["last"], 10);
    assert_eq!(body["pager"]["pageSizeOptions"], json!([5, 10, 25, 50]));
}

#[actix_web::test]
async fn student_list_search_narrows_rows() {
    let app = test::init_service(test_app(state_with(6))).await;
    let request = test::TestRequest::get()
        .uri("/students?search=physics&limit=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    let ids: Vec<&str> = body["table"]["rows"]
        .as_array()
        .expect("rows")
        .iter()
        .filter_map(|row| row["id"].as_str())
        .collect();
    assert_eq!(ids, ["s2", "s4", "s6"]);
    assert_eq!(body["search"], "physics");
}

#[actix_web::test]
async fn empty_list_carries_the_empty_message() {
    let app = test::init_service(test_app(state_with(0))).await;
    let request = test::TestRequest::get().uri("/students").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert!(body["table"]["emptyMessage"].is_string());
    assert_eq!(body["pager"]["showing"]["first"], 0);
}

#[actix_web::test]
async fn new_form_is_not_mistaken_for_a_student_id() {
    let app = test::init_service(test_app(state_with(1))).await;
    let request = test::TestRequest::get().uri("/students/new").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["action"], "/students/new");
    assert_eq!(body["form"]["name"], "");
    assert_eq!(body["errors"], json!({}));
}

#[actix_web::test]
async fn valid_new_form_creates_and_redirects_to_the_list() {
    let app = test::init_service(test_app(state_with(0))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/new")
            .set_json(json!({
                "name": "Jane Smith",
                "email": "jane@example.com",
                "registrationNumber": "REG-9",
                "major": "Biology",
                "dateOfBirth": "2002-03-04",
                "gpa": 3.9,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
        Some("/students")
    );

    let request = test::TestRequest::get().uri("/students").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["table"]["rows"].as_array().map(Vec::len), Some(1));
}

#[rstest]
#[case(json!({"email": "not-an-email", "gpa": 4.2}))]
#[actix_web::test]
async fn invalid_new_form_returns_field_messages(#[case] form: Value) {
    let app = test::init_service(test_app(state_with(0))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/new")
            .set_json(form)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["errors"]["name"], "Name is required");
    assert_eq!(body["errors"]["email"], "Please enter a valid email address");
    assert_eq!(body["errors"]["gpa"], "GPA must be between 0 and 4.0");
    assert_eq!(body["form"]["email"], "not-an-email");
}

#[actix_web::test]
async fn detail_resolves_courses_and_credits() {
    let app = test::init_service(test_app(state_with(1))).await;
    let request = test::TestRequest::get().uri("/students/s1").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["student"]["id"], "s1");
    assert_eq!(body["courses"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["totalCredits"], 6);
    assert_eq!(body["editUrl"], "/students/s1/edit");
    assert_eq!(body["deleteUrl"], "/students/s1/delete");
}

#[actix_web::test]
async fn delete_from_the_page_redirects_to_the_list() {
    let app = test::init_service(test_app(state_with(2))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post().uri("/students/s1/delete").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/students")
    );

    let gone =
        test::call_service(&app, test::TestRequest::get().uri("/students/s1").to_request()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleting_an_unknown_student_is_not_found() {
    let app = test::init_service(test_app(state_with(1))).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/nobody/delete")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "Student not found");
}

#[actix_web::test]
async fn edit_of_a_record_removed_meanwhile_is_not_found() {
    let existing = roster(1).remove(0);
    let mut repo = MockStudentRepository::new();
    repo.expect_find_by_id()
        .returning(move |_| Ok(Some(existing.clone())));
    repo.expect_update().returning(|_, _| Ok(None));
    let state = HttpState::new(
        Arc::new(repo),
        Arc::new(FixtureCourseCatalogue::default()),
        Arc::new(DemoUserDirectory::default()),
    );
    let app = test::init_service(test_app(state)).await;

    let request = test::TestRequest::get().uri("/students/s1/edit").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/s1/edit")
            .set_json(body["form"].clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn edit_form_is_prefilled_and_saves() {
    let app = test::init_service(test_app(state_with(1))).await;
    let request = test::TestRequest::get().uri("/students/s1/edit").to_request();
    let mut body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["action"], "/students/s1/edit");
    assert_eq!(body["form"]["registrationNumber"], "REG-001");

    body["form"]["major"] = json!("Chemistry");
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/students/s1/edit")
            .set_json(body["form"].clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let request = test::TestRequest::get().uri("/students/s1").to_request();
    let detail: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(detail["student"]["major"], "Chemistry");
    assert_eq!(detail["student"]["enrolledCourses"], json!(["CS101", "BIO101"]));
}

#[rstest]
#[case("/students/nobody")]
#[case("/students/nobody/edit")]
#[actix_web::test]
async fn unknown_student_pages_are_not_found(#[case] uri: &str) {
    let app = test::init_service(test_app(state_with(1))).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn course_cards_show_enrolment_counts() {
    let app = test::init_service(test_app(state_with(0))).await;
    let request = test::TestRequest::get().uri("/courses").to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body[3]["code"], "MATH101");
    assert_eq!(body[3]["enrolment"], "2 students");
}

#[rstest]
#[case("/login", "/dashboard")]
#[case("/login?callbackUrl=/students/s1", "/students/s1")]
#[case("/login?callbackUrl=https://evil.example", "/dashboard")]
#[case("/login?callbackUrl=//evil.example", "/dashboard")]
#[actix_web::test]
async fn login_page_echoes_local_callbacks(#[case] uri: &str, #[case] expected: &str) {
    let app = test::init_service(test_app(state_with(0))).await;
    let request = test::TestRequest::get().uri(uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["callbackUrl"], expected);
}
