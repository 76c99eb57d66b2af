//! # Compositor de Respostas
//!
//! Transforma a mensagem do aluno e as entradas encontradas pela busca
//! em um texto de resposta. É uma função pura (exceto pela escolha da
//! mensagem de ajuda, delegada a um [`HelpPicker`]) e nunca falha.
//!
//! ## Ordem de Avaliação
//!
//! ```text
//! mensagem (lowercase)
//!   ├── 1. TOPIC_RULES, em ordem
//!   │     ├── gatilho + alvo presente  → resposta temática
//!   │     ├── gatilho + fallback       → fallback (só Matemáticas)
//!   │     └── senão                    → próxima regra
//!   ├── 2. matches não vazio           → listagem numerada
//!   └── 3. nada                        → mensagem de ajuda (picker)
//! ```

pub mod help;
pub mod rules;

pub use help::{HelpPicker, UuidPicker};
pub use rules::TOPIC_RULES;

use crate::core::KnowledgeEntry;

/// Cabeçalho da listagem genérica.
pub const LISTING_HEADER: &str = "📚 **Información de nuestros libros oficiales:**\n\n";

/// Fechamento da listagem genérica.
pub const LISTING_CLOSING: &str = "💡 ¿Te gustaría que profundice en algún aspecto específico?";

/// Compõe a resposta para `message` dado o resultado da busca.
pub fn compose(
    message: &str,
    matches: &[&KnowledgeEntry],
    picker: &mut dyn HelpPicker,
) -> String {
    let message_lower = message.to_lowercase();

    for rule in TOPIC_RULES {
        if !rule.is_triggered(&message_lower) {
            continue;
        }
        if let Some(entry) = rule.target.find(matches) {
            tracing::debug!(rule = rule.name, entry = entry.id, "Regra temática aplicada");
            return rule.render(entry);
        }
        if let Some(fallback) = rule.fallback {
            tracing::debug!(rule = rule.name, "Regra sem entrada, usando fallback");
            return fallback.to_string();
        }
    }

    if !matches.is_empty() {
        return listing(matches);
    }

    help::help_prompt(picker).to_string()
}

/// Listagem numerada de todas as entradas, na ordem recebida.
fn listing(matches: &[&KnowledgeEntry]) -> String {
    let mut response = String::from(LISTING_HEADER);
    for (i, entry) in matches.iter().enumerate() {
        response.push_str(&format!(
            "**{}. {}** ({} - {})\n{}\n\n",
            i + 1,
            entry.title,
            entry.subject,
            entry.grade,
            entry.content
        ));
    }
    response.push_str(LISTING_CLOSING);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{search, StaticCorpus};
    use crate::responder::help::HELP_PROMPTS;
    use crate::responder::rules::MATH_STEPS;

    /// Picker fixo para testes determinísticos.
    struct Fixed(usize);

    impl HelpPicker for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn reply(message: &str, query: &str) -> String {
        let hits = search(&StaticCorpus, query);
        compose(message, &hits, &mut Fixed(0))
    }

    #[test]
    fn math_question_gets_math_template() {
        let text = reply("¿Cómo resolver ecuaciones de primer grado?", "ecuación");
        assert!(text.contains("Ecuaciones de primer grado"));
        assert!(text.starts_with("📚 **Ecuaciones de primer grado** (3º ESO)"));
        assert!(text.ends_with(TOPIC_RULES[0].closing));
    }

    #[test]
    fn math_trigger_without_math_entry_uses_steps() {
        // "resolver" dispara Matemáticas, mas a busca só trouxe História
        let text = reply("quiero resolver esto", "franco");
        assert_eq!(text, MATH_STEPS);
    }

    #[test]
    fn math_trigger_with_no_matches_uses_steps() {
        let text = compose("matemáticas por favor", &[], &mut Fixed(0));
        assert_eq!(text, MATH_STEPS);
    }

    #[test]
    fn biology_template() {
        let text = reply("explícame la fotosíntesis", "fotosíntesis");
        assert!(text.starts_with("🌱 **La fotosíntesis** (4º ESO)"));
        assert!(text.ends_with(TOPIC_RULES[1].closing));
    }

    #[test]
    fn history_template() {
        let text = reply("la guerra civil", "guerra civil");
        assert!(text.starts_with("📜 **Guerra Civil Española** (2º Bachillerato)"));
        assert!(text.ends_with(TOPIC_RULES[2].closing));
    }

    #[test]
    fn rationals_template_matches_by_title() {
        let text = reply("números irracionales", "irracionales");
        assert!(text.starts_with("🔢 **Números racionales e irracionales** (3º ESO)"));
        assert!(text.ends_with(TOPIC_RULES[3].closing));
    }

    #[test]
    fn literature_template() {
        let text = reply("poemas de bécquer", "bécquer");
        assert!(text.starts_with("📚 **El Romanticismo** (4º ESO)"));
        assert!(text.ends_with(TOPIC_RULES[4].closing));
    }

    #[test]
    fn chemistry_template() {
        let text = reply("una reacción de síntesis", "reactivos");
        assert!(text.starts_with("⚗️ **Reacciones químicas** (1º Bachillerato)"));
        assert!(text.ends_with(TOPIC_RULES[5].closing));
    }

    #[test]
    fn non_math_trigger_without_entry_falls_to_listing() {
        // "planta" dispara Ciencias, mas só há Química nas entradas
        let text = reply("una planta", "reactivos");
        assert!(text.starts_with(LISTING_HEADER));
        assert!(text.contains("**1. Reacciones químicas** (Química - 1º Bachillerato)"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // "ecuación química" também contém "ecuación": Matemáticas vem antes
        let text = reply("una ecuación química", "ecuación");
        assert!(text.starts_with("📚 **Ecuaciones de primer grado**"));
    }

    #[test]
    fn untriggered_matches_produce_numbered_listing_in_order() {
        let hits = search(&StaticCorpus, "de");
        let text = compose("cuéntame algo", &hits, &mut Fixed(0));
        assert!(text.starts_with(LISTING_HEADER));
        assert!(text.ends_with(LISTING_CLOSING));
        let mut last = 0;
        for (i, entry) in hits.iter().enumerate() {
            let header = format!("**{}. {}**", i + 1, entry.title);
            let pos = text.find(&header).expect("cabeçalho ausente");
            assert!(pos >= last);
            last = pos;
        }
        assert_eq!(text.matches("**1. ").count(), 1);
        assert!(!text.contains("**4. "));
    }

    #[test]
    fn listing_contains_each_title_once() {
        let hits = search(&StaticCorpus, "franco");
        let text = compose("hmm", &hits, &mut Fixed(0));
        assert_eq!(text.matches("Guerra Civil Española**").count(), 1);
    }

    #[test]
    fn nothing_found_returns_help_prompt() {
        for i in 0..4 {
            let text = compose("hola", &[], &mut Fixed(i));
            assert_eq!(text, HELP_PROMPTS[i]);
        }
        let text = compose("hola", &[], &mut UuidPicker);
        assert!(HELP_PROMPTS.contains(&text.as_str()));
    }

    #[test]
    fn empty_message_is_not_an_error() {
        let text = compose("", &[], &mut Fixed(2));
        assert_eq!(text, HELP_PROMPTS[2]);
    }
}
