//! # Estado da Aplicação Web
//!
//! Uma única entrevista em memória, compartilhada por todos os handlers.
//! Não há sessões por usuário: quem abrir a página conduz a mesma entrevista.
//!
//! ```text
//! AppState
//!  ├── session   Arc<Mutex<InterviewSession>>
//!  ├── events_tx broadcast → /events (SSE)
//!  └── config    Arc<Config>
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::orchestrator::InterviewSession;
use crate::web::events::InterviewEvent;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// A entrevista corrente. O lock é mantido só durante o processamento de um turno.
    pub session: Arc<Mutex<InterviewSession>>,
    /// Canal broadcast para eventos SSE.
    pub events_tx: Arc<broadcast::Sender<InterviewEvent>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Cria o estado com uma entrevista nova e um canal de `capacity` eventos.
    pub fn new(config: Config, capacity: usize) -> Self {
        let (events_tx, _) = broadcast::channel(capacity);
        Self {
            session: Arc::new(Mutex::new(InterviewSession::new())),
            events_tx: Arc::new(events_tx),
            config: Arc::new(config),
        }
    }

    /// Publica um evento. Sem assinantes, o evento é simplesmente descartado.
    pub fn publish(&self, event: InterviewEvent) {
        let _ = self.events_tx.send(event);
    }
}
