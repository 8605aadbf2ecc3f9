mod helpers;

use axum::http::StatusCode;
use db::models::user::Role;
use helpers::{
    json_body, make_memory_app, request, seed_admin_with_token, seed_student_with_token, seed_user,
    session_token,
};
use serde_json::json;

async fn seed_assignment(app: &axum::Router, admin_token: &str, due_date: &str) -> i64 {
    let res = request(
        app,
        "POST",
        "/api/assignments",
        Some(admin_token),
        Some(json!({
            "title": "Database Normalization Exercise",
            "course": "Database Systems",
            "course_code": "CSE-301",
            "due_date": due_date
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    json_body(res).await["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn student_submits_and_resubmits() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (student, student_token) = seed_student_with_token(&state).await;
    let assignment_id = seed_assignment(&app, &admin_token, "2099-01-01").await;

    for _ in 0..2 {
        let res = request(
            &app,
            "POST",
            "/api/submissions",
            Some(&student_token),
            Some(json!({ "assignment_id": assignment_id })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = json_body(res).await;
        assert_eq!(body["data"]["student_id"], student.id);
        assert_eq!(body["data"]["status"], "submitted");
    }

    let res = request(&app, "GET", "/api/submissions", Some(&student_token), None).await;
    assert_eq!(json_body(res).await["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn late_submission_is_marked_late() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;
    let assignment_id = seed_assignment(&app, &admin_token, "2020-01-01").await;

    let res = request(
        &app,
        "POST",
        "/api/submissions",
        Some(&student_token),
        Some(json!({ "assignment_id": assignment_id })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(json_body(res).await["data"]["status"], "late");
}

#[tokio::test]
async fn submission_for_unknown_assignment_is_404() {
    let (app, state) = make_memory_app();
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/submissions",
        Some(&student_token),
        Some(json!({ "assignment_id": 4242 })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admins_cannot_submit_but_can_see_everything() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let assignment_id = seed_assignment(&app, &admin_token, "2099-01-01").await;

    // Submission creation is student-only.
    let res = request(
        &app,
        "POST",
        "/api/submissions",
        Some(&admin_token),
        Some(json!({ "assignment_id": assignment_id })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let alice = seed_user(&state, "alice", Role::Student).await;
    let alice_token = session_token(&state, &alice).await;
    let bob = seed_user(&state, "bob", Role::Student).await;
    let bob_token = session_token(&state, &bob).await;

    for token in [&alice_token, &bob_token] {
        let res = request(
            &app,
            "POST",
            "/api/submissions",
            Some(token),
            Some(json!({ "assignment_id": assignment_id })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // Students only ever see their own, even when asking for someone else's.
    let res = request(
        &app,
        "GET",
        &format!("/api/submissions?student_id={}", bob.id),
        Some(&alice_token),
        None,
    )
    .await;
    let body = json_body(res).await;
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["student_id"], alice.id);

    // Admins can filter freely.
    let res = request(
        &app,
        "GET",
        &format!("/api/submissions?student_id={}", bob.id),
        Some(&admin_token),
        None,
    )
    .await;
    let body = json_body(res).await;
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["student_id"], bob.id);

    let res = request(&app, "GET", "/api/submissions", Some(&admin_token), None).await;
    assert_eq!(json_body(res).await["data"].as_array().unwrap().len(), 2);
}
