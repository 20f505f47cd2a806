//! Helpers for registering users through the public API.

use serde_json::{json, Value};

use super::TestApp;

/// A registered user plus the token the API issued for it.
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub token: String,
}

/// Register a user through POST /api/users and return the issued identity.
pub async fn register_user(app: &TestApp, email: &str, password: &str, name: &str) -> TestUser {
    let response = app
        .server
        .post("/api/users")
        .json(&json!({
            "email": email,
            "password": password,
            "name": name,
        }))
        .await;

    assert_eq!(response.status_code(), 200, "registration failed: {}", response.text());
    let body: Value = response.json();

    TestUser {
        id: body["user"]["id"].as_i64().expect("user id"),
        email: email.to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}
