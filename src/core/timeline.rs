//! # Histórico e Timeline Emocional
//!
//! - [`SentimentHistory`]: sequência append-only de sentimentos, um por turno.
//! - [`TimelineEntry`]: registro `(pergunta, sentimento, confiança)` consumido
//!   apenas pelo painel de resultados; nunca realimenta a classificação.

use serde::{Deserialize, Serialize};

use super::confidence::aggregate_confidence;
use super::sentiment::SentimentState;

/// Histórico de sentimentos de uma entrevista.
///
/// A ordem de inserção é a ordem dos turnos. Não há API de remoção nem
/// de edição: o histórico só cresce.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SentimentHistory(Vec<SentimentState>);

impl SentimentHistory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Registra o sentimento do turno mais recente.
    pub fn push(&mut self, state: SentimentState) {
        self.0.push(state);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[SentimentState] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &SentimentState> {
        self.0.iter()
    }

    /// Quantas vezes `state` aparece no histórico.
    pub fn count(&self, state: SentimentState) -> usize {
        self.0.iter().filter(|s| **s == state).count()
    }

    /// Último sentimento registrado (ou `Neutral` se ainda não houve turnos).
    pub fn last(&self) -> SentimentState {
        self.0.last().copied().unwrap_or_default()
    }

    /// Score de confiança do histórico completo.
    pub fn confidence(&self) -> u8 {
        aggregate_confidence(&self.0)
    }
}

/// Ponto da timeline emocional: um por turno respondido.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Índice (0-based) da pergunta respondida neste turno.
    pub question: usize,
    /// Sentimento classificado da resposta.
    pub sentiment: SentimentState,
    /// Score agregado do histórico até este turno, inclusive.
    pub confidence: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_counts_and_confidence() {
        let mut history = SentimentHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.last(), SentimentState::Neutral);

        history.push(SentimentState::Confident);
        history.push(SentimentState::Anxious);
        history.push(SentimentState::Confident);

        assert_eq!(history.len(), 3);
        assert_eq!(history.count(SentimentState::Confident), 2);
        assert_eq!(history.count(SentimentState::Confused), 0);
        assert_eq!(history.last(), SentimentState::Confident);
        assert_eq!(history.confidence(), 70);
    }

    #[test]
    fn timeline_entry_serializes_flat() {
        let entry = TimelineEntry {
            question: 2,
            sentiment: SentimentState::Anxious,
            confidence: 40,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "question": 2, "sentiment": "ANXIOUS", "confidence": 40 })
        );
    }
}
