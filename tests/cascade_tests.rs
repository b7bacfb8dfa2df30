mod test_utils;

use reqwest::{multipart, StatusCode};
use serde_json::{json, Value};
use test_utils::*;

const PNG_BYTES: [u8; 16] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

const TASK_CHILDREN: [&str; 5] = [
    "applicants",
    "contributors",
    "task_skill_requirements",
    "task_language_requirements",
    "user_ratings",
];

const PROFILE_REFERENCES: [(&str, &str); 10] = [
    ("SELECT COUNT(*) FROM profile_skills WHERE profile_id = $1", "profile_skills"),
    ("SELECT COUNT(*) FROM profile_languages WHERE profile_id = $1", "profile_languages"),
    ("SELECT COUNT(*) FROM applicants WHERE profile_id = $1", "applicants"),
    ("SELECT COUNT(*) FROM contributors WHERE profile_id = $1", "contributors"),
    ("SELECT COUNT(*) FROM user_ratings WHERE employer_id = $1", "ratings given"),
    ("SELECT COUNT(*) FROM user_ratings WHERE freelancer_id = $1", "ratings received"),
    ("SELECT COUNT(*) FROM notifications WHERE sender_id = $1", "notifications sent"),
    ("SELECT COUNT(*) FROM notifications WHERE recipient_id = $1", "notifications received"),
    ("SELECT COUNT(*) FROM projects WHERE leader_id = $1", "projects led"),
    ("SELECT COUNT(*) FROM profiles WHERE user_id = $1", "profile"),
];

async fn count(app: &TestApp, sql: &str, id: &str) -> i64 {
    let id: uuid::Uuid = id.parse().unwrap();
    sqlx::query_scalar(sql).bind(id).fetch_one(&app.db_pool).await.unwrap()
}

async fn count_for(app: &TestApp, sql: &str, id: uuid::Uuid) -> i64 {
    sqlx::query_scalar(sql).bind(id).fetch_one(&app.db_pool).await.unwrap()
}

/// Sends a JSON body with the given method and returns the created or updated row.
async fn send_json(app: &TestApp, method: reqwest::Method, path: &str, body: &Value) -> Value {
    let response = app.client
        .request(method, app.url(path))
        .json(body)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success(), "{path} answered {}", response.status());
    response.json().await.unwrap()
}

async fn create_skill(app: &TestApp) -> String {
    let skill = send_json(app, reqwest::Method::POST, "/api/skills", &json!({ "skill_name": unique("rust") })).await;
    skill["id"].as_str().unwrap().to_string()
}

async fn create_language(app: &TestApp) -> String {
    let language = send_json(app, reqwest::Method::POST, "/api/languages", &json!({ "language_name": unique("en") })).await;
    language["id"].as_str().unwrap().to_string()
}

#[actix_rt::test]
async fn task_count_follows_task_inserts_and_deletes() {
    let Some(app) = TestApp::spawn().await else { return };
    let leader = app.register("leader").await;
    let project = app.create_project(leader).await;
    let project_id = project["id"].as_str().unwrap();
    assert_eq!(project["task_count"], 0);

    let first = app.create_task(project_id).await;
    app.create_task(project_id).await;
    assert_eq!(app.task_count(project_id).await, 2);

    let response = app.client
        .delete(app.url(&format!("/api/tasks/{}", first["id"].as_str().unwrap())))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.task_count(project_id).await, 1);
}

#[actix_rt::test]
async fn deleting_a_project_removes_its_tasks_and_applications() {
    let Some(app) = TestApp::spawn().await else { return };
    let leader = app.register("leader").await;
    let student = app.register("student").await;
    let project = app.create_project(leader).await;
    let project_id = project["id"].as_str().unwrap();
    let task = app.create_task(project_id).await;
    let task_id = task["id"].as_str().unwrap();

    let applied = app
        .post_json(&format!("/api/tasks/{task_id}/applicants"), &json!({ "profile_id": student }))
        .await;
    assert_eq!(applied.status(), StatusCode::CREATED);

    let again = app
        .post_json(&format!("/api/tasks/{task_id}/applicants"), &json!({ "profile_id": student }))
        .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let skill_id = create_skill(&app).await;
    let language_id = create_language(&app).await;
    let put = reqwest::Method::PUT;
    send_json(&app, reqwest::Method::POST, &format!("/api/tasks/{task_id}/contributors"), &json!({ "profile_id": student })).await;
    send_json(&app, put.clone(), &format!("/api/tasks/{task_id}/skills"), &json!({
        "skill_id": skill_id,
        "proficiency_level_required": 2,
    })).await;
    send_json(&app, put, &format!("/api/tasks/{task_id}/languages"), &json!({
        "language_id": language_id,
        "fluency_level_required": 1,
    })).await;
    send_json(&app, reqwest::Method::POST, &format!("/api/tasks/{task_id}/rating"), &json!({
        "employer_id": leader,
        "freelancer_id": student,
        "employer_rating": 4.5,
        "freelancer_rating": 4.0,
    })).await;

    for table in TASK_CHILDREN {
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE task_id = $1");
        assert_eq!(count(&app, &sql, task_id).await, 1, "{table} row missing before delete");
    }

    let deleted = app.client
        .delete(app.url(&format!("/api/projects/{project_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert_eq!(count(&app, "SELECT COUNT(*) FROM tasks WHERE project_id = $1", project_id).await, 0);
    for table in TASK_CHILDREN {
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE task_id = $1");
        assert_eq!(count(&app, &sql, task_id).await, 0, "{table} rows survived the project");
    }
}

#[actix_rt::test]
async fn deleting_a_profile_removes_its_image_and_references() {
    let Some(app) = TestApp::spawn().await else { return };
    let leader = app.register("leader").await;
    let project = app.create_project(leader).await;
    let project_id = project["id"].as_str().unwrap().to_string();

    let form = multipart::Form::new().part(
        "image",
        multipart::Part::bytes(PNG_BYTES.to_vec())
            .file_name("me.png")
            .mime_str("image/png")
            .unwrap(),
    );
    let uploaded = app.client
        .put(app.url(&format!("/api/profiles/{leader}/image")))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(uploaded.status(), StatusCode::OK);

    let profile: Value = uploaded.json().await.unwrap();
    let image_path = profile["image_path"].as_str().unwrap().to_string();
    assert!(image_path.starts_with("profiles/"));
    let image_file = app.media_dir.path().join(&image_path);
    assert!(image_file.exists());

    let peer = app.register("peer").await;
    let peer_project = app.create_project(peer).await;
    let peer_project_id = peer_project["id"].as_str().unwrap();
    let worked = app.create_task(peer_project_id).await;
    let worked_id = worked["id"].as_str().unwrap();
    let hired = app.create_task(peer_project_id).await;
    let hired_id = hired["id"].as_str().unwrap();
    let post = reqwest::Method::POST;

    send_json(&app, reqwest::Method::PUT, &format!("/api/profiles/{leader}/skills"), &json!({
        "skill_id": create_skill(&app).await,
        "level_of_proficiency": 3,
    })).await;
    send_json(&app, reqwest::Method::PUT, &format!("/api/profiles/{leader}/languages"), &json!({
        "language_id": create_language(&app).await,
        "level_of_fluency": 2,
    })).await;
    send_json(&app, post.clone(), &format!("/api/tasks/{worked_id}/applicants"), &json!({ "profile_id": leader })).await;
    send_json(&app, post.clone(), &format!("/api/tasks/{worked_id}/contributors"), &json!({ "profile_id": leader })).await;
    send_json(&app, post.clone(), &format!("/api/tasks/{worked_id}/rating"), &json!({
        "employer_id": peer,
        "freelancer_id": leader,
        "employer_rating": 3.5,
        "freelancer_rating": 5.0,
    })).await;
    send_json(&app, post.clone(), &format!("/api/tasks/{hired_id}/rating"), &json!({
        "employer_id": leader,
        "freelancer_id": peer,
        "employer_rating": 4.0,
        "freelancer_rating": 2.5,
    })).await;
    send_json(&app, post.clone(), "/api/notifications", &json!({
        "sender_id": leader,
        "recipient_id": peer,
        "message": "Submitted my work",
    })).await;
    send_json(&app, post, "/api/notifications", &json!({
        "sender_id": peer,
        "recipient_id": leader,
        "message": "Thanks, verified",
    })).await;

    for (sql, what) in PROFILE_REFERENCES {
        assert_eq!(count_for(&app, sql, leader).await, 1, "{what} missing before delete");
    }

    let deleted = app.client
        .delete(app.url(&format!("/api/profiles/{leader}")))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    assert!(!image_file.exists());
    assert_eq!(count(&app, "SELECT COUNT(*) FROM projects WHERE id = $1", &project_id).await, 0);
    for (sql, what) in PROFILE_REFERENCES {
        assert_eq!(count_for(&app, sql, leader).await, 0, "{what} survived the profile");
    }
    assert_eq!(count_for(&app, "SELECT COUNT(*) FROM profiles WHERE user_id = $1", peer).await, 1);
    assert_eq!(app.task_count(peer_project_id).await, 2);
}

#[actix_rt::test]
async fn deleting_a_profile_whose_image_is_missing_still_succeeds() {
    let Some(app) = TestApp::spawn().await else { return };
    let user = app.register("ghost").await;

    sqlx::query("UPDATE profiles SET image_path = 'profiles/never-written.png' WHERE user_id = $1")
        .bind(user)
        .execute(&app.db_pool)
        .await
        .unwrap();

    let deleted = app.client
        .delete(app.url(&format!("/api/profiles/{user}")))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn reading_a_notification_stamps_received_at_once() {
    let Some(app) = TestApp::spawn().await else { return };
    let sender = app.register("sender").await;
    let recipient = app.register("recipient").await;

    let sent: Value = app
        .post_json("/api/notifications", &json!({
            "sender_id": sender,
            "recipient_id": recipient,
            "message": "You have been selected",
        }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(sent["has_read"], false);
    assert!(sent["received_at"].is_null());

    let read_url = app.url(&format!("/api/notifications/{}/read", sent["id"].as_str().unwrap()));
    let first: Value = app.client.post(&read_url).send().await.unwrap().json().await.unwrap();
    let second: Value = app.client.post(&read_url).send().await.unwrap().json().await.unwrap();

    assert_eq!(first["has_read"], true);
    assert_eq!(first["received_at"], second["received_at"]);

    let unread: Value = app.client
        .get(app.url(&format!("/api/profiles/{recipient}/notifications?unread_only=true")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(unread.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn out_of_set_choices_are_rejected() {
    let Some(app) = TestApp::spawn().await else { return };
    let user = app.register("chooser").await;

    let response = app.client
        .patch(app.url(&format!("/api/profiles/{user}")))
        .json(&json!({ "batch_year": "UG-9" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
