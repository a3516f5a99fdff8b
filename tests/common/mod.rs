#![allow(dead_code)]

use todo_service::config::TodoConfig;
use todo_service::services::TodoDb;
use todo_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: TodoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("todo_test_{}", Uuid::new_v4());

        let mut config = TodoConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Create a task through the API and return its assigned identifier.
    pub async fn create_task(&self, client: &reqwest::Client, text: &str) -> String {
        let response = client
            .post(format!("{}/todos", self.address))
            .json(&serde_json::json!({ "task": text }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), 201);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["_id"]
            .as_str()
            .expect("Created task has no identifier")
            .to_string()
    }

    /// Cleanup test resources (drops the test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
