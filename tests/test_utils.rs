#![allow(dead_code)]

use std::{net::TcpListener, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use reqwest::{header, redirect::Policy, Client, Response};
use serde_json::Value;
use sqlx::PgPool;
use tempfile::TempDir;
use uuid::Uuid;

use student_portal::{
    db::postgres::{create_pool, run_migrations},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};

pub const TEST_DATABASE_ENV: &str = "APP_TEST_DATABASE_URL";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub client: Client,
    pub config: AppConfig,
    pub media_dir: TempDir,
}

impl TestApp {
    /// Spawns the server against the database named by `APP_TEST_DATABASE_URL`,
    /// or returns `None` so the calling test can skip.
    pub async fn spawn() -> Option<Self> {
        let Ok(database_url) = std::env::var(TEST_DATABASE_ENV) else {
            eprintln!("{TEST_DATABASE_ENV} not set, skipping database test");
            return None;
        };

        let media_dir = tempfile::tempdir().expect("Failed to create media dir");
        let config = test_config(database_url, &media_dir);

        let db_pool = create_pool(&config.database_url, config.db_max_connections)
            .await
            .expect("Failed to create test DB pool");
        run_migrations(&db_pool).await.expect("Failed to run migrations");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, db_pool.clone()));
        let app_config = config.clone();
        let server = HttpServer::new(move || {
            let config = app_config.clone();
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .configure(move |cfg| configure_routes(cfg, &config))
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();
        while client.get(format!("{}/admin/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Some(Self { address, db_pool, client, config, media_dir })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn signup(&self, username: &str, passwd1: &str, passwd2: &str, email: &str, bio: &str) -> Response {
        self.client
            .post(self.url("/auth/signup"))
            .form(&[
                ("username", username),
                ("passwd1", passwd1),
                ("passwd2", passwd2),
                ("email", email),
                ("bio", bio),
            ])
            .send()
            .await
            .expect("Failed to submit signup form")
    }

    /// Follows a flash redirect and returns the messages shown on the target page.
    pub async fn follow_flash(&self, response: &Response) -> Vec<String> {
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        let cookie = flash_cookie(response).expect("Redirect carried no flash cookie");

        let page: Value = self.client
            .get(self.url(&location))
            .header(header::COOKIE, cookie)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        page["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["message"].as_str().unwrap().to_string())
            .collect()
    }

    /// Registers a fresh account and returns its id, which is also its profile id.
    pub async fn register(&self, prefix: &str) -> Uuid {
        let username = unique(prefix);
        let response = self
            .signup(&username, "pw123", "pw123", &format!("{username}@example.com"), "bio")
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);

        sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(&username)
            .fetch_one(&self.db_pool)
            .await
            .expect("Registered user not found")
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> Response {
        self.client.post(self.url(path)).json(body).send().await.unwrap()
    }

    pub async fn create_project(&self, leader_id: Uuid) -> Value {
        let response = self
            .post_json("/api/projects", &serde_json::json!({
                "project_name": unique("project"),
                "description": "A test project",
                "leader_id": leader_id,
                "deadline": "2030-01-31",
            }))
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.unwrap()
    }

    pub async fn create_task(&self, project_id: &str) -> Value {
        let response = self
            .post_json(&format!("/api/projects/{project_id}/tasks"), &serde_json::json!({
                "task_name": unique("task"),
                "task_description": "Do the thing",
                "deadline": "2030-01-15",
            }))
            .await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.unwrap()
    }

    pub async fn task_count(&self, project_id: &str) -> i64 {
        let project: Value = self.client
            .get(self.url(&format!("/api/projects/{project_id}")))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        project["task_count"].as_i64().unwrap()
    }
}

/// Names that stay unique across runs against a shared database.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", &Uuid::new_v4().simple().to_string()[..12])
}

fn flash_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

fn test_config(database_url: String, media_dir: &TempDir) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Student Portal Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url,
        db_max_connections: 5,
        cors_allowed_origins: vec!["*".to_string()],
        trust_forwarded_for: false,
        media_root: media_dir.path().to_string_lossy().into_owned(),
        max_image_bytes: 5 * 1024 * 1024,
    }
}
