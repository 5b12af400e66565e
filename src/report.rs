//! # Relatório e Reflexão — O Painel de Resultados
//!
//! Dois produtos derivados de uma [`InterviewSession`]:
//!
//! - [`InterviewReport`]: o JSON baixável (chaves em camelCase):
//!
//! ```json
//! {
//!   "confidenceScore": 80,
//!   "totalQuestions": 5,
//!   "sentimentBreakdown": ["CONFIDENT", "ANXIOUS", "..."],
//!   "avgResponseLength": 112,
//!   "totalWords": 97,
//!   "timestamp": "2026-10-18T12:00:00Z"
//! }
//! ```
//!
//! - [`Reflection`]: tudo que a página de resultados exibe: score e faixa,
//!   contagem por sentimento, pontos fortes, oportunidades de crescimento,
//!   análise pergunta a pergunta e a timeline.
//!
//! Nada aqui realimenta a classificação.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{aggregate_confidence, ConfidenceBand, SentimentState, TimelineEntry};
use crate::orchestrator::InterviewSession;

/// Relatório JSON oferecido para download ao fim da entrevista.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReport {
    pub confidence_score: u8,
    pub total_questions: usize,
    pub sentiment_breakdown: Vec<SentimentState>,
    /// Média de caracteres por resposta, arredondada.
    pub avg_response_length: usize,
    pub total_words: usize,
    pub timestamp: DateTime<Utc>,
}

impl InterviewReport {
    /// Monta o relatório a partir do estado atual da sessão.
    pub fn from_session(session: &InterviewSession, timestamp: DateTime<Utc>) -> Self {
        let stats = AnswerStats::of(session);
        Self {
            confidence_score: session.confidence(),
            total_questions: session.timeline().len(),
            sentiment_breakdown: session.history().as_slice().to_vec(),
            avg_response_length: stats.avg_length,
            total_words: stats.total_words,
            timestamp,
        }
    }

    /// Nome do arquivo sugerido no `Content-Disposition`.
    pub fn file_name(&self) -> String {
        format!("fairhire-report-{}.json", self.timestamp.timestamp_millis())
    }
}

/// Estatísticas de tamanho das respostas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct AnswerStats {
    avg_length: usize,
    total_words: usize,
}

impl AnswerStats {
    fn of(session: &InterviewSession) -> Self {
        let mut count = 0usize;
        let mut chars = 0usize;
        let mut words = 0usize;
        for answer in session.answers() {
            count += 1;
            chars += answer.content.chars().count();
            words += answer.word_count();
        }
        let avg_length = if count == 0 {
            0
        } else {
            (chars as f64 / count as f64).round() as usize
        };
        Self {
            avg_length,
            total_words: words,
        }
    }
}

/// Uma linha da análise pergunta a pergunta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBreakdown {
    /// Número da pergunta (1-based, para exibição).
    pub number: usize,
    /// Texto efetivamente apresentado ao candidato.
    pub question: String,
    /// Resposta, se já houve.
    pub answer: Option<String>,
    pub sentiment: Option<SentimentState>,
    pub word_count: usize,
}

/// Conteúdo completo da página de resultados.
#[derive(Clone, Debug)]
pub struct Reflection {
    pub confidence_score: u8,
    pub band: ConfidenceBand,
    /// Contagem por sentimento, na ordem da primeira aparição.
    pub sentiment_counts: Vec<(SentimentState, usize)>,
    /// Turnos em que a entrevista se adaptou (sentimento ≠ NEUTRAL).
    pub adjustments: usize,
    pub anxious_moments: usize,
    /// Confiança na primeira e na última entrada da timeline.
    pub trajectory: Option<(u8, u8)>,
    pub strengths: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub breakdown: Vec<QuestionBreakdown>,
    pub timeline: Vec<TimelineEntry>,
    pub avg_response_length: usize,
    pub total_words: usize,
}

impl Reflection {
    /// Deriva a reflexão da sessão (concluída ou não).
    pub fn from_session(session: &InterviewSession) -> Self {
        let history = session.history();
        let timeline = session.timeline().to_vec();
        let stats = AnswerStats::of(session);
        let confidence_score = aggregate_confidence(history.as_slice());

        let mut sentiment_counts: Vec<(SentimentState, usize)> = Vec::new();
        for state in history.iter() {
            match sentiment_counts.iter_mut().find(|(s, _)| s == state) {
                Some((_, n)) => *n += 1,
                None => sentiment_counts.push((*state, 1)),
            }
        }

        let confident = history.count(SentimentState::Confident);
        let anxious = history.count(SentimentState::Anxious);

        let mut strengths = Vec::new();
        if confident > 0 {
            strengths.push(format!(
                "Showed confidence in {} response{}, demonstrating strong subject knowledge",
                confident,
                if confident > 1 { "s" } else { "" }
            ));
        }
        if stats.avg_length > 100 {
            strengths.push(format!(
                "Provided detailed, thoughtful responses (avg. {} characters)",
                stats.avg_length
            ));
        }
        if stats.total_words > 50 {
            strengths.push(format!(
                "Engaged meaningfully with {} words across all responses",
                stats.total_words
            ));
        }

        let mut growth_opportunities = Vec::new();
        if anxious > 1 {
            growth_opportunities.push(
                "Practice managing interview anxiety through mock interviews and breathing techniques"
                    .to_string(),
            );
        }
        if stats.avg_length < 80 {
            growth_opportunities.push(
                "Consider elaborating more on your experiences with specific examples".to_string(),
            );
        }
        growth_opportunities.push(
            "Continue building confidence by reflecting on past achievements and successes"
                .to_string(),
        );

        let answers: Vec<_> = session.answers().collect();
        let breakdown = session
            .questions_asked()
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let answer = answers.get(i);
                QuestionBreakdown {
                    number: i + 1,
                    question: question.to_string(),
                    answer: answer.map(|a| a.content.clone()),
                    sentiment: answer.and_then(|a| a.sentiment),
                    word_count: answer.map(|a| a.word_count()).unwrap_or(0),
                }
            })
            .collect();

        let trajectory = match (timeline.first(), timeline.last()) {
            (Some(first), Some(last)) => Some((first.confidence, last.confidence)),
            _ => None,
        };

        Self {
            confidence_score,
            band: ConfidenceBand::for_score(confidence_score),
            sentiment_counts,
            adjustments: timeline
                .iter()
                .filter(|e| e.sentiment != SentimentState::Neutral)
                .count(),
            anxious_moments: anxious,
            trajectory,
            strengths,
            growth_opportunities,
            breakdown,
            timeline,
            avg_response_length: stats.avg_length,
            total_words: stats.total_words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_session() -> InterviewSession {
        let mut session = InterviewSession::new();
        session.submit_answer("I am confident").unwrap();
        session.submit_answer("I'm nervous and worried").unwrap();
        session.submit_answer("Sorry, could you repeat").unwrap();
        session.submit_answer("I build things").unwrap();
        session.submit_answer("Absolutely excited").unwrap();
        session
    }

    #[test]
    fn report_matches_session() {
        let session = finished_session();
        let now = Utc::now();
        let report = InterviewReport::from_session(&session, now);

        assert_eq!(report.total_questions, 5);
        // 50 + 2×15 − 10
        assert_eq!(report.confidence_score, 70);
        assert_eq!(
            report.sentiment_breakdown,
            vec![
                SentimentState::Confident,
                SentimentState::Anxious,
                SentimentState::Confused,
                SentimentState::Neutral,
                SentimentState::Confident,
            ]
        );
        assert_eq!(report.total_words, 3 + 4 + 4 + 3 + 2);
        assert_eq!(report.timestamp, now);
    }

    #[test]
    fn report_json_uses_camel_case() {
        let report = InterviewReport::from_session(&finished_session(), Utc::now());
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "confidenceScore",
            "totalQuestions",
            "sentimentBreakdown",
            "avgResponseLength",
            "totalWords",
            "timestamp",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(report.file_name().starts_with("fairhire-report-"));
    }

    #[test]
    fn empty_session_report_is_well_defined() {
        let report = InterviewReport::from_session(&InterviewSession::new(), Utc::now());
        assert_eq!(report.confidence_score, 50);
        assert_eq!(report.avg_response_length, 0);
        assert_eq!(report.total_words, 0);
    }

    #[test]
    fn reflection_summarizes_the_interview() {
        let reflection = Reflection::from_session(&finished_session());

        assert_eq!(reflection.band, ConfidenceBand::Solid);
        assert_eq!(
            reflection.sentiment_counts,
            vec![
                (SentimentState::Confident, 2),
                (SentimentState::Anxious, 1),
                (SentimentState::Confused, 1),
                (SentimentState::Neutral, 1),
            ]
        );
        assert_eq!(reflection.adjustments, 4);
        assert_eq!(reflection.anxious_moments, 1);
        assert_eq!(reflection.trajectory, Some((65, 70)));
        assert_eq!(reflection.breakdown.len(), 5);
        assert_eq!(reflection.breakdown[3].sentiment, Some(SentimentState::Neutral));
        assert!(reflection.strengths[0].starts_with("Showed confidence in 2 responses"));
        // respostas curtas → sugestão de elaborar
        assert!(reflection
            .growth_opportunities
            .iter()
            .any(|g| g.starts_with("Consider elaborating")));
        assert!(reflection
            .growth_opportunities
            .last()
            .unwrap()
            .starts_with("Continue building confidence"));
    }

    #[test]
    fn breakdown_shows_pending_question_without_answer() {
        let mut session = InterviewSession::new();
        session.submit_answer("I am confident").unwrap();
        let reflection = Reflection::from_session(&session);

        assert_eq!(reflection.breakdown.len(), 2);
        assert!(reflection.breakdown[1].answer.is_none());
        assert_eq!(reflection.breakdown[1].word_count, 0);
    }
}
