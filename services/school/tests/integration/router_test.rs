use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{Value, json};

use campus_school::router::build_router;
use campus_school::state::AppState;
use campus_school_schema::{classes, meals};
use campus_testing::auth::MockAuth;

fn server(db: MockDatabase) -> TestServer {
    let state = AppState {
        db: Arc::new(db.into_connection()),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn empty_server() -> TestServer {
    server(MockDatabase::new(DatabaseBackend::Postgres))
}

fn class_model(id: i32, letter: &str) -> classes::Model {
    classes::Model {
        class_id: id,
        room_number: 100 + id,
        letter: letter.to_owned(),
        year: "2024".to_owned(),
    }
}

fn meal_body() -> Value {
    json!({
        "name": "Pasta",
        "description": "Pasta with tomato sauce",
        "calories": "650",
        "allergies": "gluten",
        "extra": "parmesan",
        "ingredients": "pasta, tomato, basil",
        "day": "Wednesday",
    })
}

#[tokio::test]
async fn should_answer_healthz() {
    let response = empty_server().get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_reject_request_without_role_header() {
    let response = empty_server().get("/classes/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_forbid_student_from_reading_class() {
    let (name, value) = MockAuth::student().header();
    let response = empty_server()
        .get("/classes/1")
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "FORBIDDEN");
    assert_eq!(body["message"], "Student is not allowed to get a class by ID");
}

#[tokio::test]
async fn should_return_class_json_for_admin() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![class_model(1, "A")]]);
    let (name, value) = MockAuth::admin().header();
    let response = server(db).get("/classes/1").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "classID": 1, "roomNumber": 101, "letter": "A", "year": "2024" })
    );
}

#[tokio::test]
async fn should_return_404_for_missing_class() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<classes::Model>::new()]);
    let (name, value) = MockAuth::teacher().header();
    let response = server(db).get("/classes/9").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "CLASS_NOT_FOUND");
}

#[tokio::test]
async fn should_list_classes_by_year_for_teacher() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![class_model(1, "A"), class_model(2, "B")]]);
    let (name, value) = MockAuth::teacher().header();
    let response = server(db)
        .get("/classes")
        .add_query_param("year", "2024")
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["classID"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn should_forbid_student_from_creating_class() {
    let (name, value) = MockAuth::student().header();
    let response = empty_server()
        .post("/classes")
        .add_header(name, value)
        .json(&json!({ "roomNumber": 3, "year": "2025", "letter": "C" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["message"],
        "Student is not allowed to create a new class"
    );
}

#[tokio::test]
async fn should_reject_meal_without_day() {
    let mut body = meal_body();
    body.as_object_mut().unwrap().remove("day");
    let (name, value) = MockAuth::admin().header();
    let response = empty_server()
        .post("/meals")
        .add_header(name, value)
        .json(&body)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "INVALID_MEAL");
    assert_eq!(body["message"], "day must not be empty");
}

#[tokio::test]
async fn should_reject_meal_with_numeric_calories() {
    let mut body = meal_body();
    body["calories"] = json!(650);
    let (name, value) = MockAuth::admin().header();
    let response = empty_server()
        .post("/meals")
        .add_header(name, value)
        .json(&body)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_forbid_student_before_reading_class_body() {
    let (name, value) = MockAuth::student().header();
    let response = empty_server()
        .post("/classes")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["message"],
        "Student is not allowed to create a new class"
    );
}

#[tokio::test]
async fn should_forbid_teacher_before_reading_meal_body() {
    let (name, value) = MockAuth::teacher().header();
    let response = empty_server()
        .post("/meals")
        .add_header(name, value)
        .json(&json!({ "calories": 650 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["message"],
        "Teacher is not allowed to create a meal"
    );
}

#[tokio::test]
async fn should_reject_incomplete_class_body_for_admin() {
    let (name, value) = MockAuth::admin().header();
    let response = empty_server()
        .post("/classes")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_create_class_for_admin() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![class_model(3, "C")]])
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            },
        ]);
    let (name, value) = MockAuth::admin().header();
    let response = server(db)
        .post("/classes")
        .add_header(name, value)
        .json(&json!({
            "roomNumber": 103,
            "year": "2024",
            "letter": "C",
            "teachers": [1],
            "students": [3, 4],
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "classID": 3, "roomNumber": 103, "letter": "C", "year": "2024" })
    );
}

#[tokio::test]
async fn should_create_meal_for_admin() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
        meals::Model {
            meal_id: 5,
            name: "Pasta".to_owned(),
            description: "Pasta with tomato sauce".to_owned(),
            calories: "650".to_owned(),
            allergies: "gluten".to_owned(),
            extra: "parmesan".to_owned(),
            ingredients: "pasta, tomato, basil".to_owned(),
            day: "Wednesday".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 9, 2, 11, 30, 0).unwrap(),
        },
    ]]);
    let (name, value) = MockAuth::admin().header();
    let response = server(db)
        .post("/meals")
        .add_header(name, value)
        .json(&meal_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["mealID"], 5);
    assert_eq!(body["day"], "Wednesday");
    assert_eq!(body["createdAt"], "2024-09-02T11:30:00.000Z");
    assert_eq!(body["allergyList"], json!(["gluten"]));
    assert_eq!(body["ingredientList"], json!(["pasta", "tomato", "basil"]));
}
