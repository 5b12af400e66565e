//! # Agregador de Confiança
//!
//! Converte o histórico de sentimentos em um único score inteiro em `[0, 100]`:
//!
//! ```text
//! score = 50 + 15 × (#CONFIDENT) − 10 × (#ANXIOUS)
//! ```
//!
//! `CONFUSED` e `NEUTRAL` não contribuem. O resultado é **saturado** nos
//! limites (nunca dá a volta). Um histórico vazio retorna o score base.

use super::sentiment::SentimentState;

/// Score de partida, antes de qualquer resposta.
pub const BASE_SCORE: i64 = 50;

/// Bônus por resposta confiante.
pub const CONFIDENT_BOOST: i64 = 15;

/// Penalidade por resposta ansiosa.
pub const ANXIOUS_PENALTY: i64 = 10;

/// Calcula o score de confiança para uma sequência de sentimentos.
///
/// Função pura e total: qualquer fatia (inclusive vazia) produz um valor.
pub fn aggregate_confidence(history: &[SentimentState]) -> u8 {
    let (confident, anxious) = history.iter().fold((0i64, 0i64), |(c, a), s| match s {
        SentimentState::Confident => (c + 1, a),
        SentimentState::Anxious => (c, a + 1),
        SentimentState::Neutral | SentimentState::Confused => (c, a),
    });

    let raw = BASE_SCORE + CONFIDENT_BOOST * confident - ANXIOUS_PENALTY * anxious;
    raw.clamp(0, 100) as u8
}

/// Faixa qualitativa de um score, usada no painel de resultados.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// Score ≥ 75.
    Excellent,
    /// Score ≥ 50.
    Solid,
    /// Abaixo de 50.
    Growing,
}

impl ConfidenceBand {
    /// Classifica um score em sua faixa.
    pub fn for_score(score: u8) -> Self {
        match score {
            75.. => ConfidenceBand::Excellent,
            50..=74 => ConfidenceBand::Solid,
            _ => ConfidenceBand::Growing,
        }
    }

    /// Frase exibida sob o score.
    pub fn headline(&self) -> &'static str {
        match self {
            ConfidenceBand::Excellent => "Excellent performance!",
            ConfidenceBand::Solid => "Good solid responses",
            ConfidenceBand::Growing => "Room for growth",
        }
    }
}
