//! # Templates Maud — HTML Server-Side Rendering
//!
//! A única página servida pelo backend é o chat do tutor. O resto da
//! interface (login, painel de livros) consome a API JSON.
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`full_page()`] | Página completa | Chat + sugestões + lista de temas |
//! | [`exchange()`] | Fragment HTMX | Pergunta do aluno + resposta do tutor |
//! | [`topic_list()`] | Fragment | Temas disponíveis no corpus |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────── nav-bar ─────────────────────┐
//! │ EduCenter │ Tutor IA                         │
//! ├──────────────────────────┬───────────────────┤
//! │    Mensagens             │ Temas disponíveis │
//! │    (boas-vindas)         │  • título (curso) │
//! │                          │                   │
//! ├──────────────────────────┴───────────────────┤
//! │ [sugestões...]   [_______________] [Enviar]  │
//! └──────────────────────────────────────────────┘
//! ```

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::core::KnowledgeEntry;

/// Mensagem inicial do tutor.
pub const WELCOME: &str = "¡Hola estudiante! 🎓 Soy tu asistente de IA educativa. Estoy aquí para ayudarte con tus tareas usando los libros oficiales del centro. ¿En qué materia necesitas ayuda hoy?";

/// Perguntas sugeridas exibidas abaixo do chat.
pub const SUGGESTIONS: &[&str] = &[
    "Explícame la fotosíntesis",
    "¿Cómo resolver ecuaciones de primer grado?",
    "Historia de la Guerra Civil Española",
    "Números racionales e irracionales",
    "El Romanticismo y Bécquer",
    "Reacciones químicas",
];

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7fb; color: #1d2333; }
.nav-bar { display: flex; gap: 1rem; align-items: center; padding: .75rem 1.25rem; background: #1d2333; color: #fff; }
.nav-brand { font-weight: 700; }
.app-container { display: grid; grid-template-columns: 1fr 300px; gap: 1rem; padding: 1rem; }
.chat-messages { min-height: 60vh; max-height: 70vh; overflow-y: auto; background: #fff; border-radius: 8px; padding: 1rem; }
.message { margin-bottom: .9rem; }
.message-role { font-size: .75rem; text-transform: uppercase; color: #6b7280; }
.message-content { white-space: pre-wrap; }
.user-message .message-content { background: #e0e7ff; padding: .5rem .75rem; border-radius: 6px; }
.suggestions { display: flex; flex-wrap: wrap; gap: .4rem; margin: .75rem 0; }
.suggestion { border: 1px solid #c7d2fe; background: #eef2ff; border-radius: 999px; padding: .25rem .7rem; cursor: pointer; }
.sidebar { background: #fff; border-radius: 8px; padding: 1rem; }
.topic { margin-bottom: .6rem; }
.topic-meta { font-size: .75rem; color: #6b7280; }
#chat-form { display: flex; gap: .5rem; }
#chat-form input { flex: 1; padding: .5rem; }
"#;

/// Página principal do chat.
///
/// O formulário faz `hx-post="/chat"` e anexa o fragmento devolvido ao
/// fim de `#chat-messages`. As sugestões preenchem o campo e enviam.
pub fn full_page(app_name: &str, topics: &[KnowledgeEntry]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (app_name) " — Tutor IA" }
                style { (PreEscaped(STYLE)) }
                script src="https://unpkg.com/htmx.org@2.0.4" {}
            }
            body {
                nav class="nav-bar" {
                    span class="nav-brand" { (app_name) }
                    span { "Tutor IA" }
                }

                div class="app-container" {
                    div class="chat-panel" {
                        div id="chat-messages" class="chat-messages" {
                            div class="message system-message welcome" {
                                div class="message-role" { "Tutor" }
                                div class="message-content" { (WELCOME) }
                            }
                        }

                        div class="suggestions" {
                            @for s in SUGGESTIONS {
                                button type="button" class="suggestion"
                                    onclick="askSuggestion(this.textContent)" { (s) }
                            }
                        }

                        form id="chat-form"
                            hx-post="/chat"
                            hx-target="#chat-messages"
                            hx-swap="beforeend" {
                            input type="text" name="message"
                                placeholder="Escribe tu pregunta..."
                                autocomplete="off"
                                autofocus;
                            button type="submit" { "Enviar" }
                        }
                    }

                    div class="sidebar" {
                        h2 { "Temas disponibles" }
                        (topic_list(topics))
                    }
                }

                (PreEscaped(r#"<script>
function askSuggestion(text) {
  var form = document.getElementById('chat-form');
  form.querySelector('input[name=message]').value = text.trim();
  form.requestSubmit();
}
document.addEventListener('DOMContentLoaded', function() {
  var msgs = document.getElementById('chat-messages');
  new MutationObserver(function() { msgs.scrollTop = msgs.scrollHeight; })
    .observe(msgs, { childList: true, subtree: true });
});
document.body.addEventListener('htmx:afterRequest', function(e) {
  if (e.detail.elt && e.detail.elt.id === 'chat-form') e.detail.elt.reset();
});
</script>"#))
            }
        }
    }
}

/// Fragmento com a pergunta e a resposta de um turno.
pub fn exchange(question: &str, answer: &str) -> Markup {
    html! {
        div class="message user-message" {
            div class="message-role" { "Tú" }
            div class="message-content" { (question) }
        }
        div class="message system-message" {
            div class="message-role" { "Tutor" }
            div class="message-content" { (answer) }
        }
    }
}

pub fn topic_list(topics: &[KnowledgeEntry]) -> Markup {
    html! {
        @if topics.is_empty() {
            p class="hint" { "No hay temas cargados." }
        }
        @for t in topics {
            div class="topic" {
                div class="topic-title" { (t.title) }
                div class="topic-meta" { (t.subject.label()) " · " (t.grade) }
            }
        }
    }
}
