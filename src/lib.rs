//! # FairHire AI — Entrevista Adaptativa
//!
//! Uma entrevista simulada de 5 perguntas que se adapta ao tom emocional
//! das respostas do candidato.
//!
//! ## Fluxo de um Turno
//!
//! ```text
//! Resposta do candidato
//!   ├── nlu::classify()             → SentimentState
//!   ├── core::aggregate_confidence() → score [0, 100] (histórico completo)
//!   └── nlu::next_question()        → próxima pergunta (redação por sentimento)
//! ```
//!
//! O núcleo de decisão (`core` + `nlu`) é puro e nunca falha. A sessão
//! (`orchestrator`), o painel (`report`) e o servidor (`web`) são seus
//! consumidores.

/// Módulo `config`: configuração via variáveis de ambiente.
pub mod config;

/// Módulo `core`: tipos fundamentais (SentimentState, histórico, timeline, confiança).
pub mod core;

/// Módulo `nlu`: classificador de sentimento e seletor de perguntas.
pub mod nlu;

/// Módulo `orchestrator`: a sessão de entrevista e sua máquina de estados.
pub mod orchestrator;

/// Módulo `report`: relatório JSON e dados do portal de reflexão.
pub mod report;

/// Módulo `web`: servidor axum, handlers HTTP, templates e SSE.
pub mod web;
