//! Authentication test helpers

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

/// Sign a user up and return the new id
pub async fn signup_user(server: &TestServer, email: &str, password: &str, username: &str) -> i64 {
    let response = server
        .post("/signup")
        .json(&json!({ "email": email, "password": password, "username": username }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<serde_json::Value>()["userId"]
        .as_i64()
        .expect("userId should be an integer")
}

/// Sign in and return the token
pub async fn signin_token(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/signin")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}

/// Sign up then sign in, returning `(user_id, token)`
pub async fn registered_user(server: &TestServer, email: &str) -> (i64, String) {
    let id = signup_user(server, email, "p1", "Tester").await;
    let token = signin_token(server, email, "p1").await;
    (id, token)
}

/// POST /room with an optional raw `authorization` value
pub async fn post_room(server: &TestServer, token: Option<&str>, name: &str) -> TestResponse {
    let mut request = server.post("/room").json(&json!({ "name": name }));
    if let Some(token) = token {
        request = request.add_header(
            AUTHORIZATION,
            HeaderValue::from_str(token).expect("token should be a valid header value"),
        );
    }
    request.await
}
