//! # Templates Maud — HTML Server-Side Rendering
//!
//! Páginas e fragmentos HTMX da entrevista. Sem SPA: o servidor devolve
//! HTML e o HTMX injeta no DOM.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`chat_page()`] | Página completa | Chat da entrevista + barra de progresso |
//! | [`turn_fragment()`] | Fragment HTMX | Resposta + apartes + próxima pergunta |
//! | [`results_page()`] | Página completa | Portal de reflexão com timeline SVG |
//!
//! ## Layout do Chat
//!
//! ```text
//! ┌──────────────── nav-bar ─────────────────────┐
//! │ FH │ Interview │ Results │ Question 2 of 5   │
//! ├──────────────────────────────────────────────┤
//! │  Welcome / perguntas / respostas             │
//! ├──────────────────────────────────────────────┤
//! │ [↺ Restart] [____________________] [Send]    │
//! └──────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::TimelineEntry;
use crate::nlu::QUESTION_COUNT;
use crate::orchestrator::{ChatMessage, InterviewSession, TurnOutcome};
use crate::report::Reflection;

/// Cabeçalho `<head>` comum às duas páginas.
fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            link rel="stylesheet" href="/assets/style.css";
            script src="https://unpkg.com/htmx.org@2.0.4" {}
        }
    }
}

/// Barra de navegação. `active` é `"interview"` ou `"results"`.
fn nav_bar(active: &str, session: &InterviewSession) -> Markup {
    html! {
        nav class="nav-bar" {
            a href="/" class="nav-brand" {
                span class="nav-brand-icon" { "FH" }
                span class="nav-brand-text" { "FairHire " em { "AI" } }
            }
            div class="nav-links" {
                a href="/" class=(if active == "interview" { "nav-link active" } else { "nav-link" }) {
                    "Interview"
                }
                a href="/results" class=(if active == "results" { "nav-link active" } else { "nav-link" }) {
                    "Results"
                }
            }
            (progress(session, false))
        }
    }
}

/// Indicador de progresso. Com `oob`, vira swap out-of-band do HTMX.
pub fn progress(session: &InterviewSession, oob: bool) -> Markup {
    html! {
        div id="progress" class="nav-status" hx-swap-oob=[oob.then_some("true")] {
            @match session.current_question() {
                Some(i) => {
                    span class="nav-status-dot" {}
                    span { (format!("Question {} of {}", i + 1, QUESTION_COUNT)) }
                }
                None => {
                    span class="nav-status-dot done" {}
                    span { "Interview complete" }
                }
            }
        }
    }
}

/// Uma mensagem do chat.
pub fn message(msg: &ChatMessage) -> Markup {
    html! {
        div class=(format!("message {}", msg.role.css_class())) {
            div class="message-role" { (msg.role.label()) }
            div class="message-content" { (msg.content) }
            @if let Some(sentiment) = msg.sentiment {
                div class="message-meta" {
                    span class=(format!("badge {}", sentiment.css_class())) { (sentiment.label()) }
                    span class="word-count" { (format!("{} words", msg.word_count())) }
                }
            }
        }
    }
}

/// Área de input, ou o link para os resultados quando a entrevista acabou.
fn input_area(session: &InterviewSession, oob: bool) -> Markup {
    html! {
        div id="chat-input-area" class="chat-input-area" hx-swap-oob=[oob.then_some("true")] {
            button class="secondary-btn"
                hx-post="/interview/reset"
                hx-confirm="Start over? The current answers will be discarded." {
                "↺ Restart"
            }
            @if session.is_complete() {
                a href="/results" class="primary-btn" { "View Results" }
            } @else {
                form id="chat-form"
                    hx-post="/chat"
                    hx-target="#chat-messages"
                    hx-swap="beforeend"
                    hx-on--after-request="this.reset()" {
                    textarea name="message"
                        placeholder="Type your response here..."
                        autocomplete="off"
                        autofocus
                        onkeydown="if(event.key==='Enter'&&!event.shiftKey){event.preventDefault();this.form.requestSubmit();}" {}
                    button type="submit" { "Send" }
                }
            }
        }
    }
}

/// Página principal: o chat da entrevista com todo o histórico.
pub fn chat_page(session: &InterviewSession) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head("FairHire AI | The Adaptive Interviewer"))
            body {
                div class="app-shell" {
                    (nav_bar("interview", session))
                    div class="chat-panel" {
                        div class="chat-header" {
                            h2 { "The Adaptive Interviewer" }
                            p { "Your AI interview partner that adapts to support you" }
                        }
                        div id="chat-messages" class="chat-messages" {
                            @for msg in session.messages() {
                                (message(msg))
                            }
                        }
                        (input_area(session, false))
                    }
                }
                (PreEscaped(r#"<script>
document.addEventListener('DOMContentLoaded', function() {
  var msgs = document.getElementById('chat-messages');
  if (msgs) {
    var observer = new MutationObserver(function() {
      msgs.scrollTop = msgs.scrollHeight;
    });
    observer.observe(msgs, { childList: true, subtree: true });
    msgs.scrollTop = msgs.scrollHeight;
  }
});
</script>"#))
            }
        }
    }
}

/// Fragmento de um turno: resposta do candidato + mensagens do entrevistador,
/// mais swaps out-of-band do progresso e da área de input.
pub fn turn_fragment(outcome: &TurnOutcome, session: &InterviewSession) -> Markup {
    html! {
        (message(&outcome.user))
        @for msg in &outcome.responses {
            (message(msg))
        }
        (progress(session, true))
        @if outcome.complete {
            (input_area(session, true))
        }
    }
}

/// Fragmento de aviso do sistema (ex: entrevista já concluída).
pub fn notice(text: &str) -> Markup {
    html! {
        div class="message system notice" {
            div class="message-role" { "System" }
            div class="message-content" { (text) }
        }
    }
}

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PAD: f64 = 30.0;

/// Coordenadas SVG de cada ponto da timeline.
fn chart_points(timeline: &[TimelineEntry]) -> Vec<(f64, f64)> {
    let inner_w = CHART_WIDTH - 2.0 * CHART_PAD;
    let inner_h = CHART_HEIGHT - 2.0 * CHART_PAD;
    let step = if timeline.len() > 1 {
        inner_w / (timeline.len() - 1) as f64
    } else {
        0.0
    };
    timeline
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let x = CHART_PAD + step * i as f64;
            let y = CHART_PAD + inner_h * (1.0 - f64::from(e.confidence) / 100.0);
            (x, y)
        })
        .collect()
}

/// Linha de confiança por pergunta, renderizada como SVG inline.
pub fn timeline_chart(timeline: &[TimelineEntry]) -> Markup {
    let points = chart_points(timeline);
    let polyline = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let baseline = CHART_PAD + (CHART_HEIGHT - 2.0 * CHART_PAD) * 0.5;

    html! {
        svg class="timeline-chart" viewBox=(format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}"))
            xmlns="http://www.w3.org/2000/svg" role="img" {
            line class="chart-baseline"
                x1=(format!("{CHART_PAD}")) y1=(format!("{baseline:.1}"))
                x2=(format!("{}", CHART_WIDTH - CHART_PAD)) y2=(format!("{baseline:.1}")) {}
            @if points.len() > 1 {
                polyline class="chart-line" points=(polyline) fill="none" {}
            }
            @for ((x, y), entry) in points.iter().zip(timeline) {
                circle class=(format!("chart-dot {}", entry.sentiment.css_class()))
                    cx=(format!("{x:.1}")) cy=(format!("{y:.1}")) r="6" {
                    title { (format!("Q{}: {} ({}%)", entry.question + 1, entry.sentiment.label(), entry.confidence)) }
                }
                text class="chart-label" x=(format!("{x:.1}")) y=(format!("{}", CHART_HEIGHT - 8.0)) text-anchor="middle" {
                    (format!("Q{}", entry.question + 1))
                }
            }
        }
    }
}

/// Portal de reflexão: o painel de resultados.
pub fn results_page(reflection: &Reflection, session: &InterviewSession) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head("FairHire AI | Your Reflection Portal"))
            body {
                div class="app-shell" {
                    (nav_bar("results", session))
                    main class="results" {
                        header class="results-header" {
                            h1 { "Your Reflection Portal" }
                            p { "A personalized analysis of your interview journey" }
                            @if !session.is_complete() {
                                p class="results-partial" {
                                    "The interview is still in progress. These results cover "
                                    (session.answered()) " of " (QUESTION_COUNT) " answers."
                                }
                            }
                        }

                        div class="card-grid" {
                            section class="card score-card" {
                                h3 { "Confidence Score" }
                                div class="score" { (reflection.confidence_score) "%" }
                                p class="muted" { (reflection.band.headline()) }
                                a href="/report" class="secondary-btn" download { "Download Report" }
                            }
                            section class="card" {
                                h3 { "Emotional Journey" }
                                @if reflection.sentiment_counts.is_empty() {
                                    p class="muted" { "No answers yet." }
                                }
                                ul class="sentiment-counts" {
                                    @for (sentiment, count) in &reflection.sentiment_counts {
                                        li {
                                            span class=(sentiment.css_class()) { (sentiment.label()) }
                                            span class="badge" { (count) "x" }
                                        }
                                    }
                                }
                            }
                            section class="card" {
                                h3 { "Bias Reduction" }
                                p { "Adaptive questioning" }
                                p class="muted" {
                                    "Our AI adjusted " (reflection.adjustments)
                                    " times to ensure you felt comfortable and understood."
                                }
                            }
                        }

                        section class="card" {
                            h3 { "Emotional Timeline" }
                            p class="muted" { "How your confidence evolved throughout the interview" }
                            (timeline_chart(&reflection.timeline))
                        }

                        div class="card-grid two" {
                            section class="card" {
                                h3 { "Key Strengths" }
                                ul {
                                    @for s in &reflection.strengths { li { (s) } }
                                }
                            }
                            section class="card" {
                                h3 { "Growth Opportunities" }
                                ul {
                                    @for g in &reflection.growth_opportunities { li { (g) } }
                                }
                            }
                        }

                        section class="card" {
                            h3 { "Interview Breakdown" }
                            @for item in &reflection.breakdown {
                                div class="breakdown-item" {
                                    span class="badge outline" { "Q" (item.number) }
                                    p class="breakdown-question" { (item.question) }
                                    @if let Some(answer) = &item.answer {
                                        p class="breakdown-answer" { (answer) }
                                    }
                                    @if let Some(sentiment) = item.sentiment {
                                        div class="message-meta" {
                                            span class=(format!("badge {}", sentiment.css_class())) { (sentiment.label()) }
                                            span class="word-count" { (item.word_count) " words" }
                                        }
                                    }
                                }
                            }
                        }

                        section class="card narrative" {
                            h3 { "Bias Reduction Narrative" }
                            ul {
                                li {
                                    strong { "Emotional Awareness: " }
                                    "We detected " (reflection.anxious_moments)
                                    " moments of anxiety and shifted to more encouraging, open-ended questions."
                                }
                                li {
                                    strong { "Clarity First: " }
                                    "When confusion was detected, we rephrased questions so you fully understood what was being asked."
                                }
                                @if let Some((first, last)) = reflection.trajectory {
                                    li {
                                        strong { "Confidence Building: " }
                                        "Your confidence moved from " (first) "% to " (last) "% over the interview."
                                    }
                                }
                                li {
                                    strong { "Fair Assessment: " }
                                    "By adjusting to your emotional state, your answers reflect your capabilities rather than interview anxiety."
                                }
                            }
                        }
                    }
                }
                (PreEscaped(r#"<script>
(function() {
  var es = new EventSource('/events');
  es.onmessage = function(e) {
    try {
      var ev = JSON.parse(e.data);
      if (ev.type === 'TurnScored' || ev.type === 'Completed' || ev.type === 'Reset') {
        window.location.reload();
      }
    } catch (_) {}
  };
})();
</script>"#))
            }
        }
    }
}
