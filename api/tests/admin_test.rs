mod helpers;

use axum::http::StatusCode;
use helpers::{
    json_body, make_memory_app, request, seed_admin_with_token, seed_student_with_token,
};
use serde_json::json;

#[tokio::test]
async fn roster_is_admin_only() {
    let (app, state) = make_memory_app();
    let (_student, student_token) = seed_student_with_token(&state).await;

    let res = request(&app, "GET", "/api/admin/students", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(&app, "POST", "/api/admin/student-ids", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "PUT",
        "/api/admin/student-ids/1",
        Some(&student_token),
        Some(json!({ "section": "A" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_creates_and_lists_students() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/admin/student-ids",
        Some(&admin_token),
        Some(json!({
            "username": "arif",
            "password": "strongpassword",
            "full_name": "Arif Hossain",
            "student_number": "2023-1-60-042",
            "section": "B",
            "department": "Computer Science & Engineering",
            "year": 3
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = json_body(res).await["data"].clone();
    assert_eq!(created["role"], "student");
    assert_eq!(created["student_number"], "2023-1-60-042");

    let res = request(&app, "GET", "/api/admin/students", Some(&admin_token), None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap().clone();
    // Only the student appears; the admin account is not part of the roster.
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["username"], "arif");
}

#[tokio::test]
async fn roster_update_changes_profile_but_not_identity() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let res = request(
        &app,
        "POST",
        "/api/admin/student-ids",
        Some(&admin_token),
        Some(json!({
            "username": "arif",
            "password": "strongpassword",
            "full_name": "Arif Hossain",
            "student_number": "2023-1-60-042"
        })),
    )
    .await;
    let id = json_body(res).await["data"]["id"].as_i64().unwrap();

    let res = request(
        &app,
        "PUT",
        &format!("/api/admin/student-ids/{id}"),
        Some(&admin_token),
        Some(json!({ "section": "A", "cgpa": "3.85" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = json_body(res).await["data"].clone();
    assert_eq!(updated["section"], "A");
    assert_eq!(updated["cgpa"], "3.85");
    assert_eq!(updated["username"], "arif");
    assert_eq!(updated["role"], "student");
}

#[tokio::test]
async fn roster_rejects_duplicates_and_unknown_ids() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let payload = json!({
        "username": "arif",
        "password": "strongpassword",
        "full_name": "Arif Hossain",
        "student_number": "2023-1-60-042"
    });
    let res = request(
        &app,
        "POST",
        "/api/admin/student-ids",
        Some(&admin_token),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = request(
        &app,
        "POST",
        "/api/admin/student-ids",
        Some(&admin_token),
        Some(payload),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = request(
        &app,
        "PUT",
        "/api/admin/student-ids/4242",
        Some(&admin_token),
        Some(json!({ "section": "A" })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
