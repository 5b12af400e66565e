//! # Eventos SSE da Entrevista
//!
//! Emitidos em `/events` para que o painel de resultados acompanhe a
//! entrevista ao vivo.
//!
//! ```text
//! TurnScored × N → Completed
//!        Reset (a qualquer momento)
//! ```
//!
//! Serializado com `#[serde(tag = "type")]`:
//!
//! ```json
//! { "type": "TurnScored", "question": 0, "sentiment": "CONFIDENT", "confidence": 65 }
//! ```

use serde::Serialize;
use uuid::Uuid;

use crate::core::{SentimentState, TimelineEntry};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum InterviewEvent {
    /// Uma resposta foi classificada.
    TurnScored {
        session: Uuid,
        /// Índice (0-based) da pergunta respondida.
        question: usize,
        sentiment: SentimentState,
        /// Confiança agregada após este turno.
        confidence: u8,
        word_count: usize,
    },

    /// A quinta resposta foi registrada.
    Completed {
        session: Uuid,
        confidence_score: u8,
        total_questions: usize,
    },

    /// A entrevista foi reiniciada pelo usuário.
    Reset { session: Uuid },
}

impl InterviewEvent {
    /// Evento de turno a partir de uma entrada da timeline.
    pub fn turn_scored(session: Uuid, entry: &TimelineEntry, word_count: usize) -> Self {
        InterviewEvent::TurnScored {
            session,
            question: entry.question,
            sentiment: entry.sentiment,
            confidence: entry.confidence,
            word_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_serialization() {
        let entry = TimelineEntry {
            question: 1,
            sentiment: SentimentState::Confused,
            confidence: 50,
        };
        let event = InterviewEvent::turn_scored(Uuid::nil(), &entry, 4);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TurnScored");
        assert_eq!(json["sentiment"], "CONFUSED");
        assert_eq!(json["word_count"], 4);
    }
}
