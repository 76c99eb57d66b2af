//! # Tabela de Regras por Tema
//!
//! Cada [`TopicRule`] associa um conjunto de gatilhos (substrings em
//! minúsculas) a uma entrada-alvo e a uma frase de fechamento própria.
//! As regras são avaliadas na ordem de [`TOPIC_RULES`]; a primeira que
//! produz texto vence.
//!
//! | # | Gatilhos | Alvo | Fallback |
//! |---|----------|------|----------|
//! | 1 | ecuación, matemática, resolver | Matemáticas | passos de resolução |
//! | 2 | fotosíntesis, planta, biología | Ciencias Naturales | — |
//! | 3 | guerra civil, historia, españa | Historia | — |
//! | 4 | número, racional, irracional | título com "racionales" | — |
//! | 5 | romanticismo, literatura, bécquer | Lengua y Literatura | — |
//! | 6 | reacción, química, ecuación química | Química | — |

use crate::core::{KnowledgeEntry, Subject};

/// Como uma regra escolhe sua entrada entre as encontradas pela busca.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleTarget {
    /// Primeira entrada da matéria indicada.
    Subject(Subject),
    /// Primeira entrada cujo título contém o fragmento (sensível a caixa).
    TitleContains(&'static str),
}

impl RuleTarget {
    /// Localiza a entrada-alvo em `matches`, preservando a ordem.
    pub fn find<'a>(&self, matches: &[&'a KnowledgeEntry]) -> Option<&'a KnowledgeEntry> {
        matches.iter().copied().find(|e| match self {
            RuleTarget::Subject(s) => e.subject == *s,
            RuleTarget::TitleContains(fragment) => e.title.contains(*fragment),
        })
    }
}

/// Uma linha da tabela de decisão.
#[derive(Debug)]
pub struct TopicRule {
    /// Nome curto usado nos logs.
    pub name: &'static str,
    /// Substrings que disparam a regra (já em minúsculas).
    pub triggers: &'static [&'static str],
    /// Entrada que a regra apresenta.
    pub target: RuleTarget,
    /// Emoji do cabeçalho.
    pub icon: &'static str,
    /// Comentário/pergunta final específico do tema.
    pub closing: &'static str,
    /// Resposta usada quando a regra dispara mas o alvo não está presente.
    /// `None` faz a avaliação seguir para a próxima regra.
    pub fallback: Option<&'static str>,
}

impl TopicRule {
    /// `true` se alguma substring-gatilho aparece na mensagem (minúsculas).
    pub fn is_triggered(&self, message_lower: &str) -> bool {
        self.triggers.iter().any(|t| message_lower.contains(*t))
    }

    /// Formata a resposta temática para a entrada escolhida.
    pub fn render(&self, entry: &KnowledgeEntry) -> String {
        format!(
            "{} **{}** ({})\n\n{}\n\n{}",
            self.icon, entry.title, entry.grade, entry.content, self.closing
        )
    }
}

/// Passos genéricos para problemas de matemática.
pub const MATH_STEPS: &str = "🔢 **Matemáticas**\n\nPara resolver problemas matemáticos, es importante:\n1. Leer cuidadosamente el enunciado\n2. Identificar los datos conocidos\n3. Determinar qué se pide encontrar\n4. Aplicar las fórmulas correspondientes\n\n¿Podrías ser más específico sobre qué tipo de problema necesitas resolver?";

pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        name: "matematicas",
        triggers: &["ecuación", "matemática", "resolver"],
        target: RuleTarget::Subject(Subject::Mathematics),
        icon: "📚",
        closing: "💡 **Consejo**: Practica con varios ejercicios similares para dominar el método. ¿Necesitas que te explique algún paso específico?",
        fallback: Some(MATH_STEPS),
    },
    TopicRule {
        name: "ciencias",
        triggers: &["fotosíntesis", "planta", "biología"],
        target: RuleTarget::Subject(Subject::NaturalSciences),
        icon: "🌱",
        closing: "🔬 **Dato curioso**: Sin la fotosíntesis no existiría vida en la Tierra tal como la conocemos. ¿Te gustaría saber más sobre alguna fase específica?",
        fallback: None,
    },
    TopicRule {
        name: "historia",
        triggers: &["guerra civil", "historia", "españa"],
        target: RuleTarget::Subject(Subject::History),
        icon: "📜",
        closing: "📖 **Para estudiar**: Te recomiendo hacer una línea de tiempo con los eventos principales. ¿Necesitas ayuda con algún aspecto específico del conflicto?",
        fallback: None,
    },
    TopicRule {
        name: "numeros",
        triggers: &["número", "racional", "irracional"],
        target: RuleTarget::TitleContains("racionales"),
        icon: "🔢",
        closing: "✨ **Truco**: Para identificar si un decimal es racional, fíjate si es exacto o periódico. ¿Quieres practicar con algunos ejemplos?",
        fallback: None,
    },
    TopicRule {
        name: "literatura",
        triggers: &["romanticismo", "literatura", "bécquer"],
        target: RuleTarget::Subject(Subject::Literature),
        icon: "📚",
        closing: "🎭 **Actividad**: Lee algunas rimas de Bécquer para entender mejor el estilo romántico. ¿Te interesa algún autor en particular?",
        fallback: None,
    },
    TopicRule {
        name: "quimica",
        triggers: &["reacción", "química", "ecuación química"],
        target: RuleTarget::Subject(Subject::Chemistry),
        icon: "⚗️",
        closing: "🧪 **Importante**: Siempre equilibra las ecuaciones químicas para cumplir la ley de conservación de la masa. ¿Necesitas ayuda equilibrando alguna ecuación específica?",
        fallback: None,
    },
];
