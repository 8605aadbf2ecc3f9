mod helpers;

use axum::http::StatusCode;
use helpers::{
    json_body, make_memory_app, request, seed_admin_with_token, seed_student_with_token,
};
use serde_json::json;

#[tokio::test]
async fn schedule_day_filter_and_cancellation() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/schedule",
        Some(&admin_token),
        Some(json!({
            "day": "Thursday",
            "start_time": "10:00",
            "end_time": "11:30",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "room": "Lab 3",
            "slot_type": "Lab"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await["data"].clone();
    assert_eq!(created["status"], "Active");
    let id = created["id"].as_i64().unwrap();

    let res = request(
        &app,
        "POST",
        "/api/schedule",
        Some(&admin_token),
        Some(json!({
            "day": "Monday",
            "start_time": "09:00",
            "end_time": "10:30",
            "course": "Network Security",
            "course_code": "CSE-305",
            "slot_type": "Lecture"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = request(
        &app,
        "GET",
        "/api/schedule?day=Thursday",
        Some(&student_token),
        None,
    )
    .await;
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["course_code"], "CSE-301");

    let res = request(
        &app,
        "PUT",
        &format!("/api/schedule/{id}"),
        Some(&admin_token),
        Some(json!({ "status": "Cancelled" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["data"]["status"], "Cancelled");
}

#[tokio::test]
async fn schedule_mutations_are_admin_only() {
    let (app, state) = make_memory_app();
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(&app, "POST", "/api/schedule", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "PUT",
        "/api/schedule/1",
        Some(&student_token),
        Some(json!({ "status": "Cancelled" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn schedule_rejects_malformed_times() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/schedule",
        Some(&admin_token),
        Some(json!({
            "day": "Thursday",
            "start_time": "ten o'clock",
            "end_time": "11:30",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "slot_type": "Lab"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn events_are_listed_by_anyone_and_created_by_admins() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/events",
        Some(&student_token),
        Some(json!({
            "title": "Unofficial party",
            "date": "2026-09-01",
            "category": "Holiday"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "POST",
        "/api/events",
        Some(&admin_token),
        Some(json!({
            "title": "Database Systems Exam",
            "date": "2026-08-16",
            "category": "Exam",
            "description": "Midterm exam covering chapters 1-6"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = request(&app, "GET", "/api/events", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["title"], "Database Systems Exam");
}

#[tokio::test]
async fn notices_flow() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(&app, "POST", "/api/notices", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "POST",
        "/api/notices",
        Some(&admin_token),
        Some(json!({
            "title": "Lab Cancelled",
            "content": "The Database Systems lab scheduled for Oct 12 has been cancelled.",
            "category": "Urgent"
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    let res = request(
        &app,
        "GET",
        &format!("/api/notices/{id}"),
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["data"]["title"], "Lab Cancelled");

    let res = request(&app, "GET", "/api/notices/4242", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_needs_no_session() {
    let (app, _state) = make_memory_app();

    let res = request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await;
    assert_eq!(body["data"]["status"], "ok");
}
