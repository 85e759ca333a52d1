#![allow(dead_code)]

use journal_app::{AppState, EntryStore, router};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// The router served in-process on an ephemeral port, backed by an in-memory store.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

pub async fn spawn_app() -> TestApp {
    let store = EntryStore::open_in_memory().expect("open in-memory store");
    let app = router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind random port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read(response).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        read(response).await
    }

    pub async fn list(&self) -> Vec<Value> {
        let (status, body) = self.get("/get/").await;
        assert_eq!(status, StatusCode::OK);
        let mut entries = body.as_array().expect("list body is an array").clone();
        entries.sort_by(|a, b| a["id"].as_str().cmp(&b["id"].as_str()));
        entries
    }
}

async fn read(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json().await.expect("json body");
    (status, body)
}
