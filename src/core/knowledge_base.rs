//! # KnowledgeBase — Corpus Estático e Busca por Palavra-chave
//!
//! O corpus é uma lista fixa de [`KnowledgeEntry`] acessada por meio do
//! trait [`KnowledgeSource`]. O servidor usa [`StaticCorpus`] (entradas
//! compiladas no binário); testes podem injetar qualquer outra fonte.
//!
//! ## Busca
//!
//! ```text
//! consulta ──► lowercase ──► filtra entradas (título | conteúdo | matéria)
//!                              └── mantém ordem do corpus
//!                              └── corta em MAX_MATCHES (3)
//! ```
//!
//! Não há ranking: a ordem do resultado é a ordem do corpus.

use super::entry::{KnowledgeEntry, Subject};

/// Máximo de entradas devolvidas por [`search`].
pub const MAX_MATCHES: usize = 3;

/// Fonte somente-leitura de entradas de conhecimento.
pub trait KnowledgeSource: Send + Sync {
    /// Todas as entradas, na ordem canônica.
    fn entries(&self) -> &[KnowledgeEntry];
}

/// Corpus embutido com os seis temas dos livros oficiais.
pub struct StaticCorpus;

impl KnowledgeSource for StaticCorpus {
    fn entries(&self) -> &[KnowledgeEntry] {
        CORPUS
    }
}

impl KnowledgeSource for Vec<KnowledgeEntry> {
    fn entries(&self) -> &[KnowledgeEntry] {
        self
    }
}

/// Busca as entradas que mencionam `query`, no máximo [`MAX_MATCHES`].
///
/// Consulta vazia devolve lista vazia; nunca é erro. Espaços contam como
/// texto comum: `" "` casa com toda entrada que contém um espaço.
pub fn search<'a>(source: &'a dyn KnowledgeSource, query: &str) -> Vec<&'a KnowledgeEntry> {
    let mut hits = browse(source, query);
    hits.truncate(MAX_MATCHES);
    hits
}

/// Como [`search`], mas sem limite de resultados.
///
/// Usado pelo navegador de conhecimento (`GET /api/knowledge`).
pub fn browse<'a>(source: &'a dyn KnowledgeSource, query: &str) -> Vec<&'a KnowledgeEntry> {
    if query.is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();
    source
        .entries()
        .iter()
        .filter(|e| e.mentions(&query_lower))
        .collect()
}

static CORPUS: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        id: "1",
        title: "Ecuaciones de primer grado",
        subject: Subject::Mathematics,
        grade: "3º ESO",
        content: "Una ecuación de primer grado es una igualdad algebraica que contiene una incógnita elevada a la primera potencia. Para resolverla, debemos despejar la incógnita aplicando las propiedades de las igualdades. Pasos: 1) Simplificar ambos miembros, 2) Agrupar términos semejantes, 3) Despejar la incógnita. Ejemplo: 2x + 5 = 13, entonces 2x = 13 - 5 = 8, por lo tanto x = 4.",
    },
    KnowledgeEntry {
        id: "2",
        title: "La fotosíntesis",
        subject: Subject::NaturalSciences,
        grade: "4º ESO",
        content: "La fotosíntesis es el proceso mediante el cual las plantas verdes y otros organismos transforman la energía lumínica en energía química. Este proceso ocurre en los cloroplastos y consta de dos fases: fase luminosa (en los tilacoides) donde se captura la luz solar y se produce ATP y NADPH, y fase oscura o ciclo de Calvin (en el estroma) donde se fija el CO2 para formar glucosa. Ecuación: 6CO2 + 6H2O + energía lumínica → C6H12O6 + 6O2.",
    },
    KnowledgeEntry {
        id: "3",
        title: "Guerra Civil Española",
        subject: Subject::History,
        grade: "2º Bachillerato",
        content: "La Guerra Civil Española (1936-1939) fue un conflicto bélico que enfrentó a dos bandos: el bando republicano (gobierno legítimo de la Segunda República) y el bando nacional (sublevados militares liderados por Franco). Causas: crisis política, tensiones sociales, polarización ideológica. Desarrollo: sublevación militar del 18 de julio de 1936, internacionalización del conflicto, batallas clave como Madrid, Guadalajara, Ebro. Consecuencias: victoria franquista, establecimiento de dictadura, exilio republicano.",
    },
    KnowledgeEntry {
        id: "4",
        title: "Números racionales e irracionales",
        subject: Subject::Mathematics,
        grade: "3º ESO",
        content: "Los números racionales son aquellos que pueden expresarse como fracción a/b donde a y b son enteros y b≠0. Incluyen enteros, fracciones y decimales exactos o periódicos. Los números irracionales no pueden expresarse como fracción, tienen infinitas cifras decimales no periódicas. Ejemplos de racionales: 1/2, 0.75, -3. Ejemplos de irracionales: π, √2, e. El conjunto de números reales está formado por la unión de racionales e irracionales.",
    },
    KnowledgeEntry {
        id: "5",
        title: "El Romanticismo",
        subject: Subject::Literature,
        grade: "4º ESO",
        content: "El Romanticismo es un movimiento cultural y artístico del siglo XIX que se caracteriza por la exaltación del sentimiento, la imaginación y la individualidad. Características: libertad creativa, subjetivismo, nacionalismo, amor por la naturaleza, medievalismo. Autores españoles destacados: José de Espronceda, Gustavo Adolfo Bécquer, Rosalía de Castro. Temas frecuentes: el amor imposible, la muerte, la naturaleza, la patria, lo sobrenatural.",
    },
    KnowledgeEntry {
        id: "6",
        title: "Reacciones químicas",
        subject: Subject::Chemistry,
        grade: "1º Bachillerato",
        content: "Una reacción química es un proceso en el que una o más sustancias (reactivos) se transforman en otras sustancias diferentes (productos). Se representa mediante ecuaciones químicas que deben estar equilibradas. Tipos: síntesis, descomposición, sustitución simple, doble sustitución. Factores que afectan la velocidad: temperatura, concentración, superficie de contacto, catalizadores. Ley de conservación de la masa: la masa total de reactivos es igual a la masa total de productos.",
    },
];
