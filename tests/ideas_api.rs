//! End-to-end tests for the owner-scoped idea endpoints.

mod common;

use common::auth_helpers::register_user;
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn idea_body(noun: &str) -> Value {
    json!({
        "img": "https://example.com/cat.png",
        "adj": "luminous",
        "adjDef": "emitting light",
        "noun": noun,
        "nounDef": "a thing",
    })
}

#[tokio::test]
async fn created_ideas_are_listed_newest_first() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    for noun in ["first", "second", "third"] {
        let response = app
            .server
            .post(&format!("/api/users/{}/ideas", user.id))
            .add_header("authorization", user.token.clone())
            .json(&idea_body(noun))
            .await;
        assert_eq!(response.status_code(), 200);
        let body: Value = response.json();
        assert_eq!(body["idea"]["noun"], noun);
        assert_eq!(body["idea"]["adjDef"], "emitting light");
    }

    let response = app
        .server
        .get(&format!("/api/users/{}/ideas", user.id))
        .add_header("authorization", user.token.clone())
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let nouns: Vec<&str> = body["ideas"]
        .as_array()
        .unwrap()
        .iter()
        .map(|idea| idea["noun"].as_str().unwrap())
        .collect();
    assert_eq!(nouns, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn idea_creation_with_missing_fields_is_a_400() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .server
        .post(&format!("/api/users/{}/ideas", user.id))
        .add_header("authorization", user.token.clone())
        .json(&json!({"img": "x", "adj": "y"}))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn a_valid_token_cannot_reach_another_users_ideas() {
    let app = TestApp::new().await;
    let alice = register_user(&app, "alice@x.com", "pw", "Alice").await;
    let bob = register_user(&app, "bob@x.com", "pw", "Bob").await;

    let get = app
        .server
        .get(&format!("/api/users/{}/ideas", bob.id))
        .add_header("authorization", alice.token.clone())
        .await;
    assert_eq!(get.status_code(), 403);

    let post = app
        .server
        .post(&format!("/api/users/{}/ideas", bob.id))
        .add_header("authorization", alice.token.clone())
        .json(&idea_body("intrusion"))
        .await;
    assert_eq!(post.status_code(), 403);

    let delete = app
        .server
        .delete(&format!("/api/users/{}/ideas/1", bob.id))
        .add_header("authorization", alice.token.clone())
        .await;
    assert_eq!(delete.status_code(), 403);
}

#[tokio::test]
async fn ideas_require_a_token() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .server
        .get(&format!("/api/users/{}/ideas", user.id))
        .await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn deleting_an_own_idea_removes_it() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let created = app
        .server
        .post(&format!("/api/users/{}/ideas", user.id))
        .add_header("authorization", user.token.clone())
        .json(&idea_body("ephemeral"))
        .await;
    let idea_id = created.json::<Value>()["idea"]["id"].as_i64().unwrap();

    let response = app
        .server
        .delete(&format!("/api/users/{}/ideas/{}", user.id, idea_id))
        .add_header("authorization", user.token.clone())
        .await;
    assert_eq!(response.status_code(), 200);

    let list = app
        .server
        .get(&format!("/api/users/{}/ideas", user.id))
        .add_header("authorization", user.token.clone())
        .await;
    assert_eq!(list.json::<Value>()["ideas"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn delete_through_own_path_cannot_remove_anothers_idea() {
    let app = TestApp::new().await;
    let alice = register_user(&app, "alice@x.com", "pw", "Alice").await;
    let bob = register_user(&app, "bob@x.com", "pw", "Bob").await;

    let created = app
        .server
        .post(&format!("/api/users/{}/ideas", bob.id))
        .add_header("authorization", bob.token.clone())
        .json(&idea_body("bobs"))
        .await;
    let idea_id = created.json::<Value>()["idea"]["id"].as_i64().unwrap();

    // Alice addresses her own path, so the ownership check passes, but the
    // delete is store-scoped to her rows and removes nothing.
    let response = app
        .server
        .delete(&format!("/api/users/{}/ideas/{}", alice.id, idea_id))
        .add_header("authorization", alice.token.clone())
        .await;
    assert_eq!(response.status_code(), 200);

    let list = app
        .server
        .get(&format!("/api/users/{}/ideas", bob.id))
        .add_header("authorization", bob.token.clone())
        .await;
    assert_eq!(list.json::<Value>()["ideas"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_missing_idea_is_still_a_200() {
    let app = TestApp::new().await;
    let user = register_user(&app, "a@x.com", "pw", "A").await;

    let response = app
        .server
        .delete(&format!("/api/users/{}/ideas/9999", user.id))
        .add_header("authorization", user.token.clone())
        .await;

    assert_eq!(response.status_code(), 200);
}
