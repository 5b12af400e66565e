//! # Classificador de Sentimento por Palavras-Chave
//!
//! Mapeia uma resposta livre do candidato para um [`SentimentState`].
//! Não há modelo estatístico: apenas contagem de substrings em três
//! listas fixas de palavras-chave mais a contagem de palavras.
//!
//! ## Ordem de Prioridade (primeiro match vence)
//!
//! ```text
//! Resposta do candidato
//!   ├── 1. lowercase (nenhuma outra normalização)
//!   ├── 2. Alguma keyword de confusão?      → CONFUSED (curto-circuito)
//!   ├── 3. Conta keywords ansiosas e confiantes
//!   ├── 4. Conta palavras (separadas por whitespace)
//!   └── 5. ansioso > confiante              → ANXIOUS
//!          confiante > 0 ou palavras > 20   → CONFIDENT
//!          senão                            → NEUTRAL
//! ```
//!
//! ## Sobreposição de Keywords
//!
//! As listas não são normalizadas entre si: `"not sure"` conta como ansioso
//! **e** o `"sure"` contido nele conta como confiante. Empates com contagem
//! positiva resolvem para `CONFIDENT`. A confusão é checada antes de tudo,
//! então `"sorry, I'm not sure"` é `CONFUSED`.

use crate::core::SentimentState;

/// Frases que indicam que o candidato não entendeu a pergunta.
pub const CONFUSED_KEYWORDS: &[&str] = &[
    "confused",
    "unclear",
    "don't understand",
    "what do you mean",
    "could you clarify",
    "repeat",
    "explain",
    "huh",
    "sorry",
];

/// Frases que indicam nervosismo ou insegurança.
pub const ANXIOUS_KEYWORDS: &[&str] = &[
    "nervous",
    "anxious",
    "worried",
    "stressed",
    "unsure",
    "scared",
    "don't know",
    "not sure",
    "maybe",
    "struggling",
];

/// Frases que indicam segurança ou entusiasmo.
pub const CONFIDENT_KEYWORDS: &[&str] = &[
    "confident",
    "excited",
    "great",
    "excellent",
    "sure",
    "definitely",
    "absolutely",
    "successful",
    "achieved",
    "proud",
];

/// Respostas com mais palavras que isso contam como confiantes mesmo sem keywords.
pub const DETAILED_RESPONSE_WORDS: usize = 20;

/// Contagens brutas extraídas de uma resposta.
///
/// Exposto separadamente de [`classify`] para que o painel e os logs
/// possam mostrar *por que* uma resposta recebeu determinado estado.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordScores {
    /// Ocorrências de keywords de confusão.
    pub confused: usize,
    /// Ocorrências de keywords ansiosas.
    pub anxious: usize,
    /// Ocorrências de keywords confiantes.
    pub confident: usize,
    /// Palavras da resposta original.
    pub word_count: usize,
}

impl KeywordScores {
    /// Aplica as regras de prioridade às contagens.
    pub fn verdict(&self) -> SentimentState {
        if self.confused > 0 {
            return SentimentState::Confused;
        }
        if self.anxious > self.confident {
            return SentimentState::Anxious;
        }
        if self.confident > 0 || self.word_count > DETAILED_RESPONSE_WORDS {
            return SentimentState::Confident;
        }
        SentimentState::Neutral
    }
}

/// Conta keywords e palavras de uma resposta.
///
/// As contagens ansiosa/confiante só são calculadas quando não há
/// confusão: a confusão curto-circuita a classificação.
pub fn score(text: &str) -> KeywordScores {
    let lowered = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    let confused = count_occurrences(&lowered, CONFUSED_KEYWORDS);
    if confused > 0 {
        return KeywordScores {
            confused,
            word_count,
            ..KeywordScores::default()
        };
    }

    KeywordScores {
        confused,
        anxious: count_occurrences(&lowered, ANXIOUS_KEYWORDS),
        confident: count_occurrences(&lowered, CONFIDENT_KEYWORDS),
        word_count,
    }
}

/// Classifica uma resposta. Total: qualquer string (inclusive vazia) tem resultado.
pub fn classify(text: &str) -> SentimentState {
    score(text).verdict()
}

/// Soma as ocorrências (não sobrepostas) de cada keyword no texto.
fn count_occurrences(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().map(|kw| haystack.matches(kw).count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_neutral() {
        assert_eq!(classify(""), SentimentState::Neutral);
        assert_eq!(classify("   "), SentimentState::Neutral);
    }

    #[test]
    fn short_answer_without_keywords_is_neutral() {
        assert_eq!(classify("I worked at a bank"), SentimentState::Neutral);
    }

    #[test]
    fn every_confusion_keyword_wins() {
        for kw in CONFUSED_KEYWORDS {
            let text = format!("I am absolutely sure and proud, {} though", kw.to_uppercase());
            assert_eq!(classify(&text), SentimentState::Confused, "keyword {kw:?}");
        }
    }

    #[test]
    fn confusion_preempts_anxiety() {
        assert_eq!(classify("Sorry, I'm not sure"), SentimentState::Confused);
    }

    /// "not sure" → ansioso 1 + "nervous" → 2; o "sure" interno → confiante 1
    #[test]
    fn anxious_outweighs_overlapping_sure() {
        let s = score("I am not sure and nervous");
        assert_eq!(s.anxious, 2);
        assert_eq!(s.confident, 1);
        assert_eq!(s.verdict(), SentimentState::Anxious);
    }

    #[test]
    fn confident_keywords() {
        let s = score("I am absolutely sure and proud");
        assert_eq!(s.confident, 3);
        assert_eq!(classify("I am absolutely sure and proud"), SentimentState::Confident);
    }

    /// Empate com contagem positiva resolve para CONFIDENT
    #[test]
    fn tie_resolves_to_confident() {
        assert_eq!(classify("I feel nervous but excited"), SentimentState::Confident);
    }

    #[test]
    fn recurring_keyword_counts_each_time() {
        let s = score("nervous, so nervous, but great");
        assert_eq!(s.anxious, 2);
        assert_eq!(s.confident, 1);
        assert_eq!(s.verdict(), SentimentState::Anxious);
    }

    #[test]
    fn long_answer_is_confident_by_length() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua ut \
                    enim ad minim veniam quis nostrud exercitation ullamco laboris nisi \
                    aliquip ex ea commodo consequat duis aute irure dolor reprehenderit";
        assert_eq!(text.split_whitespace().count(), 40);
        assert_eq!(classify(text), SentimentState::Confident);
    }

    #[test]
    fn twenty_words_is_not_enough() {
        let text = vec!["word"; 20].join(" ");
        assert_eq!(classify(&text), SentimentState::Neutral);
        let text = vec!["word"; 21].join(" ");
        assert_eq!(classify(&text), SentimentState::Confident);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("I'm NERVOUS"), SentimentState::Anxious);
        assert_eq!(classify("DEFINITELY"), SentimentState::Confident);
    }

    /// Sem normalização Unicode: o apóstrofo tipográfico não casa com `'`
    /// e uma marca combinante não impede o match do prefixo.
    #[test]
    fn matching_is_plain_lowercase_containment() {
        assert_eq!(classify("I don\u{2019}t understand"), SentimentState::Neutral);
        assert_eq!(classify("I don\u{2019}t know"), SentimentState::Neutral);
        let s = score("I am sure\u{0301}");
        assert_eq!(s.confident, 1);
        assert_eq!(s.verdict(), SentimentState::Confident);
    }

    /// Whitespace nas bordas não gera palavras vazias.
    #[test]
    fn surrounding_whitespace_is_not_counted_as_words() {
        let text = format!("  {}\n", vec!["word"; 20].join(" "));
        assert_eq!(score(&text).word_count, 20);
        assert_eq!(classify(&text), SentimentState::Neutral);
    }

    #[test]
    fn classify_is_idempotent() {
        let text = "Maybe I could have done better, I was stressed";
        assert_eq!(classify(text), classify(text));
    }
}
