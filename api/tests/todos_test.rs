mod helpers;

use axum::http::StatusCode;
use db::models::user::Role;
use helpers::{
    json_body, make_database_app, make_memory_app, request, seed_student_with_token, seed_user,
    session_token,
};
use serde_json::json;
use serial_test::serial;

#[tokio::test]
async fn todo_round_trip() {
    let (app, state) = make_memory_app();
    let (_student, token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({ "text": "Buy milk" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await["data"].clone();
    assert_eq!(created["completed"], false);
    let id = created["id"].as_i64().unwrap();

    let res = request(
        &app,
        "PUT",
        &format!("/api/todos/{id}"),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = request(&app, "GET", "/api/todos", Some(&token), None).await;
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["completed"], true);
    assert_eq!(listed[0]["text"], "Buy milk");
}

#[tokio::test]
async fn todos_of_other_users_are_untouchable_and_invisible() {
    let (app, state) = make_memory_app();
    let owner = seed_user(&state, "owner", Role::Student).await;
    let owner_token = session_token(&state, &owner).await;
    let intruder = seed_user(&state, "intruder", Role::Student).await;
    let intruder_token = session_token(&state, &intruder).await;

    let res = request(
        &app,
        "POST",
        "/api/todos",
        Some(&owner_token),
        Some(json!({ "text": "secret plan" })),
    )
    .await;
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    // Not listed for the intruder.
    let res = request(&app, "GET", "/api/todos", Some(&intruder_token), None).await;
    assert!(json_body(res).await["data"].as_array().unwrap().is_empty());

    // Update and delete are rejected and leave the record untouched.
    let res = request(
        &app,
        "PUT",
        &format!("/api/todos/{id}"),
        Some(&intruder_token),
        Some(json!({ "text": "defaced", "completed": true })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "DELETE",
        &format!("/api/todos/{id}"),
        Some(&intruder_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(&app, "GET", "/api/todos", Some(&owner_token), None).await;
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["text"], "secret plan");
    assert_eq!(listed[0]["completed"], false);
}

#[tokio::test]
async fn todo_update_of_unknown_id_is_404() {
    let (app, state) = make_memory_app();
    let (_student, token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "PUT",
        "/api/todos/42",
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request(&app, "GET", "/api/todos", Some(&token), None).await;
    assert!(json_body(res).await["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn todo_delete_is_204_once_then_404() {
    let (app, state) = make_memory_app();
    let (_student, token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({ "text": "one shot" })),
    )
    .await;
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    let res = request(&app, "DELETE", &format!("/api/todos/{id}"), Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = request(&app, "DELETE", &format!("/api/todos/{id}"), Some(&token), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_todo_text_is_rejected() {
    let (app, state) = make_memory_app();
    let (_student, token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({ "text": "" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn todo_round_trip_against_the_database_backend() {
    let (app, state) = make_database_app().await;
    let (_student, token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/todos",
        Some(&token),
        Some(json!({ "text": "Buy milk" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    let res = request(
        &app,
        "PUT",
        &format!("/api/todos/{id}"),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = request(&app, "GET", "/api/todos", Some(&token), None).await;
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["completed"], true);
    assert_eq!(listed[0]["text"], "Buy milk");
}
