mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn list_projects_returns_empty_array() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/projects", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!([]));

    app.cleanup().await;
}

#[tokio::test]
async fn get_project_aggregates_images_in_position_order() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let project_id = app.insert_project("Stage Door", "A drama in two acts").await;
    // Insert out of order; the response must come back sorted by position
    app.insert_image(project_id, "/uploads/c.jpg", 2).await;
    app.insert_image(project_id, "/uploads/a.jpg", 0).await;
    app.insert_image(project_id, "/uploads/b.jpg", 1).await;

    let response = client
        .get(format!("{}/projects/{}", app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["id"], project_id);
    assert_eq!(body["title"], "Stage Door");
    assert_eq!(body["description"], "A drama in two acts");
    assert_eq!(body["coverImage"], serde_json::Value::Null);

    let images = body["images"].as_array().expect("images must be an array");
    assert_eq!(images.len(), 3);
    assert_eq!(images[0]["url"], "/uploads/a.jpg");
    assert_eq!(images[0]["position"], 0);
    assert_eq!(images[1]["url"], "/uploads/b.jpg");
    assert_eq!(images[2]["url"], "/uploads/c.jpg");

    app.cleanup().await;
}

#[tokio::test]
async fn get_unknown_project_returns_404() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/projects/999999", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Project not found");

    app.cleanup().await;
}

#[tokio::test]
async fn list_projects_includes_empty_image_arrays() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let first = app.insert_project("Harbor Lights", "First").await;
    let second = app.insert_project("Stage Door", "Second").await;
    app.insert_image(second, "/uploads/x.jpg", 0).await;

    let response = client
        .get(format!("{}/projects", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let projects = body.as_array().expect("body must be an array");
    assert_eq!(projects.len(), 2);

    // Ordered by project id
    assert_eq!(projects[0]["id"], first);
    assert_eq!(projects[0]["images"], json!([]));
    assert_eq!(projects[1]["id"], second);
    assert_eq!(projects[1]["images"].as_array().unwrap().len(), 1);

    app.cleanup().await;
}

#[tokio::test]
async fn search_filters_by_title_case_insensitive() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    app.insert_project("Harbor Lights", "First").await;
    let matching = app.insert_project("Stage Door", "Second").await;

    let response = client
        .get(format!("{}/projects?search=DOOR", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let projects = body.as_array().expect("body must be an array");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], matching);

    app.cleanup().await;
}

#[tokio::test]
async fn attach_cover_image_updates_project() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let project_id = app.insert_project("Stage Door", "Drama").await;

    let response = client
        .put(format!("{}/projects/images", app.address))
        .json(&json!({
            "project_id": project_id,
            "image_url": "/uploads/cover.jpg",
            "type": "cover"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["project_id"], project_id);
    assert_eq!(body["title"], "Stage Door");
    assert_eq!(body["cover_image_url"], "/uploads/cover.jpg");

    // The cover shows up on subsequent reads
    let fetched: serde_json::Value = client
        .get(format!("{}/projects/{}", app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(fetched["coverImage"], "/uploads/cover.jpg");

    app.cleanup().await;
}

#[tokio::test]
async fn attach_gallery_image_inserts_row() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let project_id = app.insert_project("Stage Door", "Drama").await;

    let response = client
        .put(format!("{}/projects/images", app.address))
        .json(&json!({
            "project_id": project_id,
            "image_url": "/uploads/scene.jpg",
            "position": 3
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["image_url"], "/uploads/scene.jpg");
    assert_eq!(body["position"], 3);
    assert!(body["image_id"].is_number());

    let fetched: serde_json::Value = client
        .get(format!("{}/projects/{}", app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let images = fetched["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["url"], "/uploads/scene.jpg");
    assert_eq!(images[0]["position"], 3);

    app.cleanup().await;
}

#[tokio::test]
async fn attach_image_requires_project_id_and_url() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{}/projects/images", app.address))
        .json(&json!({ "image_url": "/uploads/scene.jpg" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "project_id and image_url are required");

    app.cleanup().await;
}

#[tokio::test]
async fn attach_cover_to_unknown_project_returns_404() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{}/projects/images", app.address))
        .json(&json!({
            "project_id": 999999,
            "image_url": "/uploads/cover.jpg",
            "type": "cover"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    app.cleanup().await;
}

#[tokio::test]
async fn attach_gallery_to_unknown_project_returns_404() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .put(format!("{}/projects/images", app.address))
        .json(&json!({
            "project_id": 999999,
            "image_url": "/uploads/scene.jpg"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, response.status());

    app.cleanup().await;
}
