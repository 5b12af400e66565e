//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Tipos compartilhados por todo o sistema de entrevista adaptativa:
//!
//! - [`SentimentState`]: os quatro tons emocionais de uma resposta
//! - [`SentimentHistory`]: sequência append-only dos sentimentos da entrevista
//! - [`TimelineEntry`]: ponto `(pergunta, sentimento, confiança)` para o painel
//! - [`aggregate_confidence`]: score `[0, 100]` a partir do histórico
//! - [`ConfidenceBand`]: faixa qualitativa do score
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use adaptive_interview::core::{aggregate_confidence, SentimentState};
//!
//! let score = aggregate_confidence(&[SentimentState::Confident, SentimentState::Anxious]);
//! assert_eq!(score, 55);
//! ```

/// Sub-módulo com o enum [`SentimentState`].
pub mod sentiment;

/// Sub-módulo com o agregador de confiança e [`ConfidenceBand`].
pub mod confidence;

/// Sub-módulo com [`SentimentHistory`] e [`TimelineEntry`].
pub mod timeline;

pub use confidence::{aggregate_confidence, ConfidenceBand};
pub use sentiment::SentimentState;
pub use timeline::{SentimentHistory, TimelineEntry};
