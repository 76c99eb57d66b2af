//! Mensagens de ajuda e a fonte de aleatoriedade usada para escolhê-las.

use uuid::Uuid;

/// As quatro respostas de ajuda usadas quando nada foi encontrado.
pub const HELP_PROMPTS: [&str; 4] = [
    "🤔 No encontré información específica sobre esa consulta en nuestros libros oficiales. ¿Podrías ser más específico sobre qué materia o tema necesitas ayuda?",
    "📖 Para ayudarte mejor, necesito más detalles. ¿Es sobre Matemáticas, Ciencias, Historia, Literatura o alguna otra materia?",
    "🎓 Estoy aquí para ayudarte con tus tareas basándome en los libros del centro. ¿Podrías reformular tu pregunta incluyendo la materia y el tema específico?",
    "💭 Parece que necesitas ayuda con algo específico. Te sugiero que menciones la asignatura y el concepto exacto que no entiendes.",
];

/// Escolhe um índice em `0..len`.
///
/// Injetado em [`compose`](super::compose) para que a escolha da mensagem
/// de ajuda seja determinística em testes.
pub trait HelpPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Picker de produção: usa os bits aleatórios de um UUID v4.
#[derive(Default)]
pub struct UuidPicker;

impl HelpPicker for UuidPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (Uuid::new_v4().as_u128() % len as u128) as usize
    }
}

/// Devolve a mensagem de ajuda escolhida pelo picker.
///
/// Índices fora do intervalo são reduzidos módulo 4.
pub fn help_prompt(picker: &mut dyn HelpPicker) -> &'static str {
    let idx = picker.pick(HELP_PROMPTS.len()) % HELP_PROMPTS.len();
    HELP_PROMPTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(usize);

    impl HelpPicker for Always {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn uuid_picker_stays_in_range() {
        let mut p = UuidPicker;
        for _ in 0..200 {
            assert!(p.pick(4) < 4);
        }
        assert_eq!(p.pick(0), 0);
    }

    #[test]
    fn out_of_range_index_wraps() {
        assert_eq!(help_prompt(&mut Always(5)), HELP_PROMPTS[1]);
        assert_eq!(help_prompt(&mut Always(3)), HELP_PROMPTS[3]);
    }

    #[test]
    fn prompts_are_distinct() {
        let mut v = HELP_PROMPTS.to_vec();
        v.sort();
        v.dedup();
        assert_eq!(v.len(), 4);
    }
}
