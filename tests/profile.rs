mod common;

use axum::http::{Method, StatusCode};
use chrono::Duration;
use common::{Part, TestApp};
use serde_json::Value;
use ulid::Ulid;

#[tokio::test]
async fn health_check_is_public() {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn profile_requires_a_valid_session() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;
    let expired = app.seed_session(&user.id, -Duration::minutes(5)).await;

    let (status, _) = app.call(Method::GET, "/api/users/profile", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .call(Method::GET, "/api/users/profile", Some("not-a-token"))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .call(Method::GET, "/api/users/profile", Some(&expired))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Session token has expired");
}

#[tokio::test]
async fn get_profile_returns_the_full_record() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    let (status, body) = app
        .call(Method::GET, "/api/users/profile", Some(&user.token))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.as_str());
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["is_admin"], false);
    assert_eq!(body["cart"], serde_json::json!([]));
}

#[tokio::test]
async fn update_profile_sets_phone_and_keeps_picture_without_file() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&user.token),
            &[Part::File("profile_picture", "me.png", b"first picture")],
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let picture = body["user"]["profile_picture"].clone();
    assert!(picture.is_string());

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&user.token),
            &[Part::Text("phone", "+2348012345678")],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User updated successfully");
    assert_eq!(body["user"]["phone"], "+2348012345678");
    assert_eq!(body["user"]["profile_picture"], picture);
}

#[tokio::test]
async fn update_profile_clears_phone_when_it_is_omitted() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    app.call_multipart(
        Method::PATCH,
        "/api/users/profile",
        Some(&user.token),
        &[Part::Text("phone", "+2348012345678")],
    )
    .await;

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&user.token),
            &[Part::Text("nickname", "ignored")],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["phone"], Value::Null);
}

#[tokio::test]
async fn update_profile_stores_the_uploaded_picture() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&user.token),
            &[
                Part::Text("phone", "+2348012345678"),
                Part::File("profile_picture", "avatar.jpg", b"\xff\xd8\xff not really a jpeg"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let path = body["user"]["profile_picture"].as_str().unwrap().to_string();
    assert!(path.starts_with(app.upload_dir.path().to_str().unwrap()));
    assert!(path.ends_with(".jpg"));
    assert_eq!(
        std::fs::read(&path).unwrap(),
        b"\xff\xd8\xff not really a jpeg".to_vec()
    );
}

#[tokio::test]
async fn update_profile_of_a_missing_user_reports_a_null_user() {
    let app = TestApp::new();
    let token = app
        .seed_session(&Ulid::new().to_string(), Duration::hours(1))
        .await;

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&token),
            &[Part::Text("phone", "+2348012345678")],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], Value::Null);
}

#[tokio::test]
async fn picture_uploaded_for_a_missing_user_is_not_kept() {
    let app = TestApp::new();
    let token = app
        .seed_session(&Ulid::new().to_string(), Duration::hours(1))
        .await;

    let (status, body) = app
        .call_multipart(
            Method::PATCH,
            "/api/users/profile",
            Some(&token),
            &[Part::File("profile_picture", "me.png", b"orphan")],
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], Value::Null);
    let stored = std::fs::read_dir(app.upload_dir.path()).unwrap().count();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn deleted_profile_reads_back_as_null() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    let (status, body) = app
        .call(Method::DELETE, "/api/users/profile", Some(&user.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account deleted successfully");

    let (status, body) = app
        .call(Method::GET, "/api/users/profile", Some(&user.token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn deleting_twice_still_succeeds() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", false).await;

    for _ in 0..2 {
        let (status, _) = app
            .call(Method::DELETE, "/api/users/profile", Some(&user.token))
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn preview_returns_any_user_without_a_session() {
    let app = TestApp::new();
    let user = app.seed_user("a@x.com", true).await;

    let (status, body) = app
        .call(Method::GET, &format!("/api/users/{}", user.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id.as_str());
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["is_admin"], true);
}

#[tokio::test]
async fn preview_of_an_unknown_user_is_null() {
    let app = TestApp::new();

    let (status, body) = app
        .call(
            Method::GET,
            &format!("/api/users/{}", Ulid::new()),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn preview_of_a_malformed_id_fails_without_leaking_details() {
    let app = TestApp::new();

    let (status, body) = app.call(Method::GET, "/api/users/not-an-id", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch user preview");
}
