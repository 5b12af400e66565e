//! # Módulo Web — A Interface da Entrevista
//!
//! Camada web construída com **Axum** + **HTMX** + **Maud** + **SSE**.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX + SSE)                                    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /                  → chat da entrevista       │
//! │  ├── POST /chat              → HTMX fragment do turno   │
//! │  ├── GET  /results           → portal de reflexão       │
//! │  ├── GET  /report            → JSON (download)          │
//! │  ├── GET  /timeline          → JSON                     │
//! │  ├── GET  /status            → JSON: progresso          │
//! │  ├── GET  /events            → SSE stream               │
//! │  └── POST /interview/reset   → recomeça                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`events`] | Enum de eventos SSE |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod events;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    Router::new()
        // ── Páginas HTML ──────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/results", get(handlers::results))
        // ── API JSON ──────────────────────────────────────────
        .route("/report", get(handlers::report))
        .route("/timeline", get(handlers::timeline))
        .route("/status", get(handlers::interview_status))
        .route("/events", get(handlers::sse_events))
        // ── HTMX fragments ───────────────────────────────────
        .route("/chat", post(handlers::chat))
        .route("/interview/reset", post(handlers::reset_interview))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::core::{SentimentState, TimelineEntry};
    use crate::nlu::question::INTERVIEW_SCRIPT;
    use crate::web::events::InterviewEvent;
    use crate::web::handlers::StatusResponse;

    fn test_state() -> AppState {
        AppState::new(Config::default(), 16)
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn answer(text: &str) -> Request<Body> {
        let body = format!("message={}", text.replace(' ', "+"));
        Request::post("/chat")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn index_renders_first_question() {
        let app = create_router(test_state());
        let (status, body) = send(app, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Question 1 of 5"));
        assert!(body.contains("Tell me about yourself"));
    }

    #[tokio::test]
    async fn chat_scores_answer_and_publishes_event() {
        let state = test_state();
        let mut rx = state.events_tx.subscribe();
        let app = create_router(state.clone());

        let (status, body) = send(app, answer("I am nervous and worried")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Anxious"));
        assert!(body.contains("Take a deep breath"));
        assert!(body.contains("Question 2 of 5"));

        match rx.try_recv().unwrap() {
            InterviewEvent::TurnScored {
                question,
                sentiment,
                confidence,
                ..
            } => {
                assert_eq!(question, 0);
                assert_eq!(sentiment, SentimentState::Anxious);
                assert_eq!(confidence, 40);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_answer_returns_empty_fragment() {
        let state = test_state();
        let (status, body) = send(create_router(state.clone()), answer("   ")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(state.session.lock().answered(), 0);
    }

    #[tokio::test]
    async fn full_interview_then_report_and_timeline() {
        let state = test_state();
        for _ in 0..5 {
            send(create_router(state.clone()), answer("I am confident")).await;
        }

        let (_, body) = send(create_router(state.clone()), answer("one more")).await;
        assert!(body.contains("already complete"));

        let res = create_router(state.clone())
            .oneshot(Request::get("/report").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let disposition = res.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.starts_with("attachment; filename=\"fairhire-report-"));
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["confidenceScore"], 100);
        assert_eq!(json["totalQuestions"], 5);

        let (_, body) = send(
            create_router(state.clone()),
            Request::get("/timeline").body(Body::empty()).unwrap(),
        )
        .await;
        let timeline: Vec<TimelineEntry> = serde_json::from_str(&body).unwrap();
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[4].confidence, 100);

        let (_, body) = send(
            create_router(state),
            Request::get("/status").body(Body::empty()).unwrap(),
        )
        .await;
        let status: StatusResponse = serde_json::from_str(&body).unwrap();
        assert!(status.complete);
        assert_eq!(status.current_question, None);
    }

    #[tokio::test]
    async fn results_page_renders_reflection() {
        let state = test_state();
        send(create_router(state.clone()), answer("Sorry what do you mean")).await;
        let (status, body) = send(
            create_router(state),
            Request::get("/results").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Your Reflection Portal"));
        assert!(body.contains("Seeking Clarity"));
        assert!(body.contains(INTERVIEW_SCRIPT[1].simplified));
    }

    #[tokio::test]
    async fn events_endpoint_streams_sse() {
        let res = create_router(test_state())
            .oneshot(Request::get("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/event-stream"));
    }

    #[tokio::test]
    async fn assets_are_served_from_configured_dir() {
        let config = Config {
            assets_dir: std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
            ..Config::default()
        };
        let app = create_router(AppState::new(config, 16));
        let (status, body) = send(
            app,
            Request::get("/assets/style.css").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".chat-panel"));
    }

    #[tokio::test]
    async fn reset_starts_over() {
        let state = test_state();
        send(create_router(state.clone()), answer("I am confident")).await;
        let before = state.session.lock().id();

        let res = create_router(state.clone())
            .oneshot(Request::post("/interview/reset").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.headers()["HX-Redirect"], "/");

        let session = state.session.lock();
        assert_ne!(session.id(), before);
        assert_eq!(session.answered(), 0);
    }
}
