mod helpers;

use axum::http::StatusCode;
use helpers::{
    json_body, make_memory_app, request, seed_admin_with_token, seed_student_with_token,
};
use serde_json::json;

#[tokio::test]
async fn admin_creates_and_everyone_reads() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/assignments",
        Some(&admin_token),
        Some(json!({
            "title": "Database Normalization Exercise",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "due_date": "2026-08-20"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await["data"].clone();
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_i64().unwrap();

    let res = request(
        &app,
        "GET",
        &format!("/api/assignments/{id}"),
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = json_body(res).await["data"].clone();
    assert_eq!(fetched, created);

    let res = request(&app, "GET", "/api/assignments", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn students_cannot_mutate_even_with_garbage_payloads() {
    let (app, state) = make_memory_app();
    let (_student, student_token) = seed_student_with_token(&state).await;

    // The role gate runs before body parsing: even an empty body is a 403,
    // not a 400.
    let res = request(&app, "POST", "/api/assignments", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "POST",
        "/api/assignments",
        Some(&student_token),
        Some(json!({ "nonsense": true })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "PUT",
        "/api/assignments/1",
        Some(&student_token),
        Some(json!({ "title": "hijack" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(&app, "DELETE", "/api/assignments/1", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_of_unknown_id_is_404_and_creates_nothing() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "PUT",
        "/api/assignments/42",
        Some(&admin_token),
        Some(json!({ "title": "phantom" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = request(&app, "GET", "/api/assignments", Some(&admin_token), None).await;
    assert!(json_body(res).await["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_204_once_then_404() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/assignments",
        Some(&admin_token),
        Some(json!({
            "title": "To be removed",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "due_date": "2026-08-20"
        })),
    )
    .await;
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    let res = request(
        &app,
        "DELETE",
        &format!("/api/assignments/{id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = request(
        &app,
        "DELETE",
        &format!("/api/assignments/{id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_invalid_payloads_before_storage() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/assignments",
        Some(&admin_token),
        Some(json!({
            "title": "",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "due_date": "2026-08-20"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = request(&app, "GET", "/api/assignments", Some(&admin_token), None).await;
    assert!(json_body(res).await["data"].as_array().unwrap().is_empty());
}
