//! # SentimentState — O Tom Emocional de uma Resposta
//!
//! Cada resposta do candidato recebe exatamente um dos quatro estados:
//!
//! | Estado | Significado | Efeito na próxima pergunta |
//! |--------|-------------|----------------------------|
//! | [`Anxious`](SentimentState::Anxious) | Nervosismo, insegurança | Versão encorajadora |
//! | [`Confident`](SentimentState::Confident) | Segurança, entusiasmo | Versão padrão |
//! | [`Neutral`](SentimentState::Neutral) | Sem sinal claro | Versão padrão |
//! | [`Confused`](SentimentState::Confused) | Pediu esclarecimento | Versão simplificada |
//!
//! ## Serialização
//!
//! Serializado em `SCREAMING_SNAKE_CASE` (`"ANXIOUS"`, `"CONFIDENT"`...),
//! o mesmo formato usado no relatório JSON e nos eventos SSE.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Estado emocional discreto atribuído a uma resposta do candidato.
///
/// O valor padrão é [`Neutral`](SentimentState::Neutral): usado como
/// fallback sempre que um valor desconhecido aparece (ver [`FromStr`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentState {
    /// Candidato demonstra nervosismo ou insegurança.
    Anxious,
    /// Candidato demonstra segurança ou responde em detalhe.
    Confident,
    /// Nenhum sinal forte: o default.
    #[default]
    Neutral,
    /// Candidato pediu esclarecimento sobre a pergunta.
    Confused,
}

impl SentimentState {
    /// Os quatro estados, na ordem de declaração.
    pub const ALL: [SentimentState; 4] = [
        SentimentState::Anxious,
        SentimentState::Confident,
        SentimentState::Neutral,
        SentimentState::Confused,
    ];

    /// Nome canônico (o mesmo da serialização).
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentState::Anxious => "ANXIOUS",
            SentimentState::Confident => "CONFIDENT",
            SentimentState::Neutral => "NEUTRAL",
            SentimentState::Confused => "CONFUSED",
        }
    }

    /// Label legível exibido no painel de resultados.
    pub fn label(&self) -> &'static str {
        match self {
            SentimentState::Anxious => "Anxious",
            SentimentState::Confident => "Confident",
            SentimentState::Neutral => "Neutral",
            SentimentState::Confused => "Seeking Clarity",
        }
    }

    /// Classe CSS usada para colorir badges e pontos da timeline.
    pub fn css_class(&self) -> &'static str {
        match self {
            SentimentState::Anxious => "sentiment-anxious",
            SentimentState::Confident => "sentiment-confident",
            SentimentState::Neutral => "sentiment-neutral",
            SentimentState::Confused => "sentiment-confused",
        }
    }
}

impl fmt::Display for SentimentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing leniente: nunca falha.
///
/// Aceita o nome canônico em qualquer caixa (com espaços nas bordas).
/// Qualquer outro texto vira [`Neutral`](SentimentState::Neutral).
impl FromStr for SentimentState {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s.trim().to_ascii_uppercase().as_str() {
            "ANXIOUS" => SentimentState::Anxious,
            "CONFIDENT" => SentimentState::Confident,
            "CONFUSED" => SentimentState::Confused,
            _ => SentimentState::Neutral,
        };
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert_eq!(SentimentState::default(), SentimentState::Neutral);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("anxious".parse::<SentimentState>(), Ok(SentimentState::Anxious));
        assert_eq!(" Confused ".parse::<SentimentState>(), Ok(SentimentState::Confused));
    }

    /// Valores desconhecidos caem no default em vez de falhar
    #[test]
    fn unknown_text_falls_back_to_neutral() {
        assert_eq!("ELATED".parse::<SentimentState>(), Ok(SentimentState::Neutral));
        assert_eq!("".parse::<SentimentState>(), Ok(SentimentState::Neutral));
    }

    #[test]
    fn serializes_as_screaming_case() {
        let json = serde_json::to_string(&SentimentState::Confident).unwrap();
        assert_eq!(json, "\"CONFIDENT\"");
        let back: SentimentState = serde_json::from_str("\"CONFUSED\"").unwrap();
        assert_eq!(back, SentimentState::Confused);
    }

    #[test]
    fn display_matches_canonical_name() {
        for state in SentimentState::ALL {
            assert_eq!(state.to_string(), state.as_str());
        }
    }
}
