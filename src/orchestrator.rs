//! # Orquestrador — A Sessão de Entrevista
//!
//! O [`InterviewSession`] conduz uma entrevista do início ao fim,
//! chamando o núcleo de decisão a cada resposta do candidato.
//!
//! ## Máquina de Estados
//!
//! ```text
//! Question(0) ─resposta→ Question(1) ─→ … ─→ Question(4) ─resposta→ Complete
//! ```
//!
//! Cada transição é irreversível: não existe "responder de novo" a um
//! turno já pontuado. O único caminho de volta é [`InterviewSession::reset`].
//!
//! ## Um Turno
//!
//! ```text
//! submit_answer(texto)
//!   ├── 1. classify(texto)             → sentimento
//!   ├── 2. history.push(sentimento)    → confiança recalculada
//!   ├── 3. timeline.push(entry)
//!   ├── 4. empathetic_aside(sentimento) → mensagem extra (opcional)
//!   └── 5. próxima pergunta (índice+1, sentimento)
//!          ou mensagem de encerramento → Complete
//! ```
//!
//! ## Roles das Mensagens
//!
//! | Role | Significado |
//! |------|-------------|
//! | `User` | Resposta do candidato (com sentimento) |
//! | `Interviewer` | Pergunta do roteiro |
//! | `Encouragement` | Aparte empático antes da pergunta |
//! | `System` | Boas-vindas e encerramento |

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::{SentimentHistory, SentimentState, TimelineEntry};
use crate::nlu::{self, KeywordScores, QUESTION_COUNT};
use crate::nlu::question::{CLOSING_MESSAGE, WELCOME_MESSAGE};

/// Erros da sessão. O núcleo de decisão em si nunca falha; estes são
/// guardas de fluxo da entrevista.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterviewError {
    /// A resposta estava vazia (ou só whitespace).
    #[error("answer is empty")]
    EmptyAnswer,
    /// As cinco perguntas já foram respondidas.
    #[error("interview is already complete")]
    AlreadyComplete,
}

/// Role semântica de uma mensagem no chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Resposta do candidato.
    User,
    /// Pergunta do roteiro.
    Interviewer,
    /// Aparte empático inserido antes da próxima pergunta.
    Encouragement,
    /// Boas-vindas e encerramento.
    System,
}

/// Mensagem no chat da entrevista.
#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    /// Presente apenas em mensagens do candidato.
    pub sentiment: Option<SentimentState>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: impl Into<String>, sentiment: Option<SentimentState>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sentiment,
            timestamp: Utc::now(),
        }
    }

    /// Número de palavras do conteúdo (separadas por whitespace).
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Estágio atual da entrevista.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewStage {
    /// Aguardando a resposta da pergunta com este índice (0-based).
    Question(usize),
    /// Todas as perguntas respondidas.
    Complete,
}

/// Resultado de um turno processado.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    /// A mensagem do candidato, já com sentimento.
    pub user: ChatMessage,
    /// Mensagens do entrevistador geradas neste turno, em ordem.
    pub responses: Vec<ChatMessage>,
    /// Entrada adicionada à timeline.
    pub entry: TimelineEntry,
    /// Contagens que levaram ao sentimento.
    pub scores: KeywordScores,
    /// `true` se este turno encerrou a entrevista.
    pub complete: bool,
}

/// Uma entrevista em andamento (ou concluída).
///
/// Todo o estado vive em memória. Não é persistido.
#[derive(Clone, Debug)]
pub struct InterviewSession {
    id: Uuid,
    stage: InterviewStage,
    messages: Vec<ChatMessage>,
    history: SentimentHistory,
    timeline: Vec<TimelineEntry>,
    /// Texto efetivamente apresentado para cada pergunta, na ordem.
    questions_asked: Vec<&'static str>,
    started_at: DateTime<Utc>,
}

impl Default for InterviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewSession {
    /// Abre uma entrevista: boas-vindas + pergunta 0 na redação padrão.
    pub fn new() -> Self {
        let first = nlu::next_question(0, SentimentState::Neutral);
        Self {
            id: Uuid::new_v4(),
            stage: InterviewStage::Question(0),
            messages: vec![
                ChatMessage::new(MessageRole::System, WELCOME_MESSAGE, None),
                ChatMessage::new(MessageRole::Interviewer, first, None),
            ],
            history: SentimentHistory::new(),
            timeline: Vec::new(),
            questions_asked: vec![first],
            started_at: Utc::now(),
        }
    }

    /// Processa a resposta do candidato à pergunta atual.
    ///
    /// # Erros
    ///
    /// - [`InterviewError::EmptyAnswer`] se a resposta for vazia após `trim`
    /// - [`InterviewError::AlreadyComplete`] se a entrevista já terminou
    pub fn submit_answer(&mut self, answer: &str) -> Result<TurnOutcome, InterviewError> {
        let InterviewStage::Question(index) = self.stage else {
            return Err(InterviewError::AlreadyComplete);
        };
        let text = answer.trim();
        if text.is_empty() {
            return Err(InterviewError::EmptyAnswer);
        }

        let scores = nlu::score(text);
        let sentiment = scores.verdict();
        self.history.push(sentiment);

        let entry = TimelineEntry {
            question: index,
            sentiment,
            confidence: self.history.confidence(),
        };
        self.timeline.push(entry);

        let user = ChatMessage::new(MessageRole::User, text, Some(sentiment));
        self.messages.push(user.clone());

        let mut responses = Vec::new();
        if let Some(aside) = nlu::empathetic_aside(sentiment) {
            responses.push(ChatMessage::new(MessageRole::Encouragement, aside, None));
        }

        let next = index + 1;
        if next < QUESTION_COUNT {
            let question = nlu::next_question(next, sentiment);
            self.questions_asked.push(question);
            responses.push(ChatMessage::new(MessageRole::Interviewer, question, None));
            self.stage = InterviewStage::Question(next);
        } else {
            responses.push(ChatMessage::new(MessageRole::System, CLOSING_MESSAGE, None));
            self.stage = InterviewStage::Complete;
        }
        self.messages.extend(responses.iter().cloned());

        let complete = self.is_complete();
        tracing::info!(
            session = %self.id,
            question = index,
            sentiment = %sentiment,
            confidence = entry.confidence,
            anxious = scores.anxious,
            confident = scores.confident,
            confused = scores.confused,
            words = scores.word_count,
            complete,
            "Resposta pontuada"
        );

        Ok(TurnOutcome {
            user,
            responses,
            entry,
            scores,
            complete,
        })
    }

    /// Descarta tudo e recomeça do zero com uma nova sessão.
    pub fn reset(&mut self) {
        let previous = self.id;
        *self = Self::new();
        tracing::info!(previous = %previous, session = %self.id, "Entrevista reiniciada");
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn stage(&self) -> InterviewStage {
        self.stage
    }

    pub fn is_complete(&self) -> bool {
        self.stage == InterviewStage::Complete
    }

    /// Índice da pergunta aguardando resposta (`None` se concluída).
    pub fn current_question(&self) -> Option<usize> {
        match self.stage {
            InterviewStage::Question(i) => Some(i),
            InterviewStage::Complete => None,
        }
    }

    /// Número de perguntas já respondidas.
    pub fn answered(&self) -> usize {
        self.history.len()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn history(&self) -> &SentimentHistory {
        &self.history
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Texto apresentado para cada pergunta até agora.
    pub fn questions_asked(&self) -> &[&'static str] {
        &self.questions_asked
    }

    /// Score de confiança do histórico completo.
    pub fn confidence(&self) -> u8 {
        self.history.confidence()
    }

    /// Respostas do candidato, em ordem.
    pub fn answers(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role == MessageRole::User)
    }
}
