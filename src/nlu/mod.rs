//! # Núcleo de Decisão — Classificação e Seleção de Perguntas
//!
//! Três funções puras formam o núcleo da entrevista adaptativa:
//!
//! ```text
//! Resposta do candidato
//!   ├── classify()              → SentimentState
//!   ├── aggregate_confidence()  → score [0, 100]   (crate::core)
//!   └── next_question()         → texto da próxima pergunta
//! ```
//!
//! Nenhuma delas guarda estado nem falha: podem ser chamadas de qualquer
//! thread, quantas vezes for preciso, com o mesmo resultado.
//!
//! ## Sub-módulos
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`classifier`] | Keywords → [`SentimentState`](crate::core::SentimentState) |
//! | [`question`] | Roteiro de 5 perguntas + redação por sentimento |

/// Sub-módulo do classificador de sentimento por keywords.
pub mod classifier;

/// Sub-módulo do roteiro e do seletor de perguntas.
pub mod question;

pub use classifier::{classify, score, KeywordScores};
pub use question::{
    empathetic_aside, encouraging_reply, next_question, QuestionVariantSet, COMPLETION_MESSAGE,
    INTERVIEW_SCRIPT, QUESTION_COUNT,
};
