//! # Roteiro de Perguntas e Seletor Adaptativo
//!
//! A entrevista tem exatamente **5 slots** de tópico. Cada slot tem três
//! redações alternativas e o seletor escolhe uma pelo sentimento da
//! resposta anterior:
//!
//! | Sentimento | Redação |
//! |------------|---------|
//! | `ANXIOUS` | encorajadora |
//! | `CONFUSED` | simplificada |
//! | `CONFIDENT` / `NEUTRAL` | padrão |
//!
//! É um lookup plano: não há hierarquia de tipos de pergunta.
//!
//! ## Mensagens de Apoio
//!
//! [`encouraging_reply`] devolve uma frase curta por sentimento.
//! [`empathetic_aside`] é a política que decide se essa frase entra no
//! chat antes da próxima pergunta (tudo exceto `NEUTRAL`).

use crate::core::SentimentState;

/// Três redações alternativas para um mesmo tópico.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionVariantSet {
    /// Redação profissional padrão.
    pub standard: &'static str,
    /// Redação calorosa para candidatos ansiosos.
    pub encouraging: &'static str,
    /// Redação direta para candidatos confusos.
    pub simplified: &'static str,
}

impl QuestionVariantSet {
    /// Seleciona a redação adequada ao sentimento.
    pub fn phrasing(&self, sentiment: SentimentState) -> &'static str {
        match sentiment {
            SentimentState::Anxious => self.encouraging,
            SentimentState::Confused => self.simplified,
            SentimentState::Confident | SentimentState::Neutral => self.standard,
        }
    }
}

/// Número de perguntas da entrevista.
pub const QUESTION_COUNT: usize = 5;

/// O roteiro fixo da entrevista.
pub const INTERVIEW_SCRIPT: [QuestionVariantSet; QUESTION_COUNT] = [
    QuestionVariantSet {
        standard: "Tell me about yourself and what brings you to this interview today.",
        encouraging: "I'd love to hear your story. What interests you most about this opportunity? Take your time.",
        simplified: "Let's start simple - what kind of work do you enjoy doing?",
    },
    QuestionVariantSet {
        standard: "Describe a challenging project you've worked on and how you handled it.",
        encouraging: "Think about a time when you did something you're proud of. What made it special for you?",
        simplified: "Tell me about something you worked on. What did you do?",
    },
    QuestionVariantSet {
        standard: "How do you approach problem-solving in your work?",
        encouraging: "Everyone solves problems differently. What's your style? There's no wrong answer here.",
        simplified: "When something goes wrong, what do you usually do?",
    },
    QuestionVariantSet {
        standard: "What are your key strengths and how do they apply to this role?",
        encouraging: "What do you do really well? I'd love to hear about your talents.",
        simplified: "What are you good at?",
    },
    QuestionVariantSet {
        standard: "Where do you see yourself in the next few years professionally?",
        encouraging: "What are you hoping for in your future? Let's dream a little together.",
        simplified: "What would you like to do next in your career?",
    },
];

/// Devolvido pelo seletor quando o índice passa do fim do roteiro.
pub const COMPLETION_MESSAGE: &str = "Thank you for your time. That completes our interview.";

/// Primeira mensagem do entrevistador, antes da pergunta 0.
pub const WELCOME_MESSAGE: &str = "Welcome to FairHire AI. I'm here to conduct your interview in a supportive and adaptive way. I'll adjust my approach based on how you're feeling to ensure a fair evaluation. Let's begin!";

/// Última mensagem do entrevistador, após a quinta resposta.
pub const CLOSING_MESSAGE: &str = "Thank you so much for your time today. You did wonderfully! I've completed my evaluation, and your reflection portal is now ready. Click 'View Results' to see your personalized feedback.";

/// Seleciona o texto da pergunta `index` para o sentimento dado.
///
/// Índices fora do roteiro (`>= QUESTION_COUNT`) retornam
/// [`COMPLETION_MESSAGE`], que é o sinal de término, não um erro.
pub fn next_question(index: usize, sentiment: SentimentState) -> &'static str {
    match INTERVIEW_SCRIPT.get(index) {
        Some(set) => set.phrasing(sentiment),
        None => COMPLETION_MESSAGE,
    }
}

/// Frase curta de acolhimento para cada sentimento.
pub fn encouraging_reply(sentiment: SentimentState) -> &'static str {
    match sentiment {
        SentimentState::Anxious => "I can sense you might be feeling a bit nervous, and that's completely okay. Take a deep breath. There's no rush at all. Let's talk about something that really excites you.",
        SentimentState::Confused => "Let me rephrase that to make it clearer. I want to make sure we're on the same page.",
        SentimentState::Confident => "That's wonderful to hear! Your confidence really comes through.",
        SentimentState::Neutral => "Thank you for sharing that with me.",
    }
}

/// Mensagem extra a inserir antes da próxima pergunta, se houver.
///
/// `NEUTRAL` não recebe aparte: o agradecimento neutro seria ruído.
pub fn empathetic_aside(sentiment: SentimentState) -> Option<&'static str> {
    match sentiment {
        SentimentState::Neutral => None,
        other => Some(encouraging_reply(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_and_confident_get_standard() {
        assert_eq!(next_question(0, SentimentState::Neutral), INTERVIEW_SCRIPT[0].standard);
        assert_eq!(next_question(3, SentimentState::Confident), INTERVIEW_SCRIPT[3].standard);
    }

    #[test]
    fn anxious_gets_encouraging() {
        assert_eq!(
            next_question(0, SentimentState::Anxious),
            "I'd love to hear your story. What interests you most about this opportunity? Take your time."
        );
    }

    #[test]
    fn confused_gets_simplified() {
        assert_eq!(next_question(3, SentimentState::Confused), "What are you good at?");
    }

    #[test]
    fn out_of_range_is_completion() {
        for sentiment in SentimentState::ALL {
            assert_eq!(next_question(QUESTION_COUNT, sentiment), COMPLETION_MESSAGE);
            assert_eq!(next_question(usize::MAX, sentiment), COMPLETION_MESSAGE);
        }
    }

    #[test]
    fn script_variants_are_distinct() {
        for set in INTERVIEW_SCRIPT {
            assert_ne!(set.standard, set.encouraging);
            assert_ne!(set.standard, set.simplified);
            assert_ne!(set.encouraging, set.simplified);
        }
    }

    #[test]
    fn every_state_has_its_own_reply() {
        let replies: std::collections::HashSet<_> =
            SentimentState::ALL.iter().map(|s| encouraging_reply(*s)).collect();
        assert_eq!(replies.len(), 4);
    }

    #[test]
    fn aside_skips_neutral_only() {
        assert_eq!(empathetic_aside(SentimentState::Neutral), None);
        assert_eq!(
            empathetic_aside(SentimentState::Confused),
            Some(encouraging_reply(SentimentState::Confused))
        );
        assert!(empathetic_aside(SentimentState::Anxious).is_some());
        assert!(empathetic_aside(SentimentState::Confident).is_some());
    }
}
