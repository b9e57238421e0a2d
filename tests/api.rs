//! End-to-end tests over a real TCP socket against the in-memory store.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use quiz_service::api::dto::{AnswerResponse, ChoiceResponse, QuestionResponse};
use quiz_service::app_state::AppState;
use quiz_service::build_app;
use quiz_service::persistence::MemoryQuizStore;
use reqwest::StatusCode;
use serde_json::json;

async fn spawn_server() -> SocketAddr {
    let app = build_app(AppState::new(Arc::new(MemoryQuizStore::new())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn question_lifecycle_over_http() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}/quiz/questions");

    let response = client
        .post(&base)
        .json(&json!({
            "question_text": "2+2=?",
            "choices": [
                {"choice_text": "4", "is_correct": true},
                {"choice_text": "5", "is_correct": false},
            ],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: QuestionResponse = response.json().await.unwrap();
    let texts: Vec<&str> = created
        .choices
        .iter()
        .map(|c| c.choice_text.as_str())
        .collect();
    assert_eq!(texts, ["4", "5"]);

    let Some(right) = created.choices.iter().find(|c| c.is_correct) else {
        panic!("created question lost its correct choice");
    };
    let Some(wrong) = created.choices.iter().find(|c| !c.is_correct) else {
        panic!("created question lost its wrong choice");
    };

    let duplicate = client
        .post(&base)
        .json(&json!({"question_text": "2+2=?", "choices": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    let fetched: QuestionResponse = client
        .get(format!("{base}/{}", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let answer: ChoiceResponse = client
        .get(format!("{base}/{}/answer", created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(&answer, right);

    let verdict: AnswerResponse = client
        .get(format!("{base}/{}/answer/{}", created.id, wrong.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!verdict.is_correct);
    assert_eq!(verdict.message, "NO!");

    let missing = client.get(format!("{base}/4242")).send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_distinct_creates_all_succeed() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();
    let base = format!("http://{addr}/quiz/questions");

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let client = client.clone();
            let base = base.clone();
            tokio::spawn(async move {
                client
                    .post(&base)
                    .json(&json!({"question_text": format!("{i}+{i}=?"), "choices": []}))
                    .send()
                    .await
                    .map(|r| r.status())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), StatusCode::CREATED);
    }

    let all: Vec<QuestionResponse> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(all.len(), 10);
}
