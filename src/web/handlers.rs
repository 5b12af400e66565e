//! # Handlers HTTP — Os Endpoints da Entrevista
//!
//! Cada função pública é um handler Axum mapeado em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Chat da entrevista |
//! | `chat` | POST | HTMX fragment | Processa uma resposta |
//! | `results` | GET | HTML completo | Portal de reflexão |
//! | `report` | GET | JSON (download) | Relatório baixável |
//! | `timeline` | GET | JSON | Timeline emocional |
//! | `interview_status` | GET | JSON | Progresso da entrevista |
//! | `sse_events` | GET | SSE stream | Eventos de turno |
//! | `reset_interview` | POST | redirect HTMX | Recomeça a entrevista |
//!
//! O lock da sessão nunca atravessa um `.await`: cada handler copia o que
//! precisa e solta o lock antes de responder.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use futures_util::stream::StreamExt;
use maud::html;
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

use super::state::AppState;
use super::templates;
use crate::core::TimelineEntry;
use crate::nlu::QUESTION_COUNT;
use crate::orchestrator::{InterviewError, MessageRole};
use crate::report::{InterviewReport, Reflection};
use crate::web::events::InterviewEvent;

/// Resposta do endpoint `/status`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct StatusResponse {
    pub session: Uuid,
    /// Respostas já registradas.
    pub answered: usize,
    pub total: usize,
    /// Índice (0-based) da pergunta aguardando resposta; `null` se concluída.
    pub current_question: Option<usize>,
    pub complete: bool,
    pub confidence: u8,
}

/// Dados do formulário de chat (campo `message`).
#[derive(serde::Deserialize)]
pub struct ChatForm {
    pub message: String,
}

fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/`: Página do chat com todo o histórico da sessão.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock();
    markup_to_html(templates::chat_page(&session))
}

/// POST `/chat`: Pontua uma resposta e devolve o fragmento do turno.
///
/// ```text
/// 1. Adquire o lock da sessão
/// 2. submit_answer() → TurnOutcome
/// 3. Renderiza fragmento (resposta + apartes + próxima pergunta)
/// 4. Solta o lock e publica TurnScored (e Completed, se for o último)
/// ```
pub async fn chat(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ChatForm>,
) -> Html<String> {
    let mut session = state.session.lock();
    let session_id = session.id();

    let outcome = match session.submit_answer(&form.message) {
        Ok(outcome) => outcome,
        Err(InterviewError::EmptyAnswer) => return markup_to_html(html! {}),
        Err(e @ InterviewError::AlreadyComplete) => {
            tracing::warn!(session = %session_id, "Resposta recebida após o fim da entrevista");
            return markup_to_html(templates::notice(&format!(
                "{}. Restart to begin a new interview.",
                capitalize(&e.to_string())
            )));
        }
    };

    let fragment = templates::turn_fragment(&outcome, &session);
    let confidence = session.confidence();
    let answered = session.answered();
    drop(session); // libera o lock antes de publicar

    state.publish(InterviewEvent::turn_scored(
        session_id,
        &outcome.entry,
        outcome.scores.word_count,
    ));
    if outcome.complete {
        tracing::info!(session = %session_id, confidence, "Entrevista concluída");
        state.publish(InterviewEvent::Completed {
            session: session_id,
            confidence_score: confidence,
            total_questions: answered,
        });
    }

    markup_to_html(fragment)
}

/// GET `/results`: Portal de reflexão (funciona também com a entrevista em andamento).
pub async fn results(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock();
    let reflection = Reflection::from_session(&session);
    markup_to_html(templates::results_page(&reflection, &session))
}

/// GET `/report`: Relatório JSON como anexo para download.
pub async fn report(State(state): State<AppState>) -> Response {
    let report = {
        let session = state.session.lock();
        InterviewReport::from_session(&session, Utc::now())
    };

    match serde_json::to_string_pretty(&report) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.file_name()),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Falha ao serializar relatório");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET `/timeline`: Timeline emocional como JSON.
pub async fn timeline(State(state): State<AppState>) -> Json<Vec<TimelineEntry>> {
    let session = state.session.lock();
    Json(session.timeline().to_vec())
}

/// GET `/status`: Progresso da entrevista.
pub async fn interview_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let session = state.session.lock();
    Json(StatusResponse {
        session: session.id(),
        answered: session.answered(),
        total: QUESTION_COUNT,
        current_question: session.current_question(),
        complete: session.is_complete(),
        confidence: session.confidence(),
    })
}

/// GET `/events`: Stream SSE de [`InterviewEvent`].
///
/// Keep-alive a cada 15s. Mensagens atrasadas (assinante lento) são descartadas.
pub async fn sse_events(
    State(state): State<AppState>,
) -> Sse<impl futures_util::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => {
                let data = serde_json::to_string(&event).ok()?;
                Some(Ok(SseEvent::default().data(data)))
            }
            Err(_) => None,
        }
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// POST `/interview/reset`: Descarta a sessão atual e recomeça.
///
/// Responde com `HX-Redirect: /` para o HTMX recarregar o chat.
pub async fn reset_interview(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = {
        let mut session = state.session.lock();
        session.reset();
        session.id()
    };
    state.publish(InterviewEvent::Reset {
        session: session_id,
    });

    (
        [("HX-Redirect", "/")],
        markup_to_html(templates::notice("Interview restarted.")),
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ─── Extensões de MessageRole para HTML ──────────────────────────

impl MessageRole {
    /// Classe CSS da mensagem no frontend.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Interviewer => "interviewer",
            MessageRole::Encouragement => "encouragement",
            MessageRole::System => "system",
        }
    }

    /// Label exibido acima do conteúdo.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Interviewer => "Interviewer",
            MessageRole::Encouragement => "Interviewer",
            MessageRole::System => "FairHire AI",
        }
    }
}
