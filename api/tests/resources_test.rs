mod helpers;

use axum::http::StatusCode;
use helpers::{
    json_body, make_memory_app, request, seed_admin_with_token, seed_student_with_token,
};
use serde_json::json;

async fn create_resource(
    app: &axum::Router,
    token: &str,
    title: &str,
    category: &str,
) -> serde_json::Value {
    let res = request(
        app,
        "POST",
        "/api/resources",
        Some(token),
        Some(json!({
            "title": title,
            "category": category,
            "file_type": "PDF",
            "file_url": format!("/resources/{title}.pdf")
        })),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    json_body(res).await["data"].clone()
}

#[tokio::test]
async fn category_filter_returns_only_matches() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    create_resource(&app, &admin_token, "notes-w8", "Lecture Notes").await;
    let textbook = create_resource(&app, &admin_token, "db-concepts", "Textbooks").await;

    let res = request(
        &app,
        "GET",
        "/api/resources?category=Textbooks",
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed = json_body(res).await["data"].clone();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], textbook["id"]);

    let res = request(&app, "GET", "/api/resources", Some(&student_token), None).await;
    assert_eq!(json_body(res).await["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn students_cannot_create_or_delete_resources() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;
    let (_student, student_token) = seed_student_with_token(&state).await;

    let resource = create_resource(&app, &admin_token, "db-concepts", "Textbooks").await;
    let id = resource["id"].as_i64().unwrap();

    // 403 regardless of payload validity.
    let res = request(&app, "POST", "/api/resources", Some(&student_token), None).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = request(
        &app,
        "DELETE",
        &format!("/api/resources/{id}"),
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Still there.
    let res = request(
        &app,
        "GET",
        &format!("/api/resources/{id}"),
        Some(&student_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_resource_is_idempotent() {
    let (app, state) = make_memory_app();
    let (_admin, admin_token) = seed_admin_with_token(&state).await;

    let resource = create_resource(&app, &admin_token, "db-concepts", "Textbooks").await;
    let id = resource["id"].as_i64().unwrap();

    let res = request(
        &app,
        "DELETE",
        &format!("/api/resources/{id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = request(
        &app,
        "DELETE",
        &format!("/api/resources/{id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
