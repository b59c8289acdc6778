use serde::{Deserialize, Serialize};

/// Versículo bíblico mostrado en el widget "versículo del día"
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub text: String,
    pub citation: String,
}

impl Verse {
    pub fn new(text: &str, citation: &str) -> Self {
        Self {
            text: text.to_string(),
            citation: citation.to_string(),
        }
    }
}

/// Lista fija de versículos (inmutable)
pub const VERSES: [(&str, &str); 6] = [
    (
        "Porque de tal manera amó Dios al mundo, que ha dado a su Hijo unigénito, para que todo aquel que en él cree, no se pierda, mas tenga vida eterna.",
        "Juan 3:16",
    ),
    (
        "Todo lo puedo en Cristo que me fortalece.",
        "Filipenses 4:13",
    ),
    (
        "Jehová es mi pastor; nada me faltará.",
        "Salmos 23:1",
    ),
    (
        "Fíate de Jehová de todo tu corazón, y no te apoyes en tu propia prudencia.",
        "Proverbios 3:5",
    ),
    (
        "Venid a mí todos los que estáis trabajados y cargados, y yo os haré descansar.",
        "Mateo 11:28",
    ),
    (
        "Y sabemos que a los que aman a Dios, todas las cosas les ayudan a bien.",
        "Romanos 8:28",
    ),
];

pub fn verse_list() -> Vec<Verse> {
    VERSES
        .iter()
        .map(|(text, citation)| Verse::new(text, citation))
        .collect()
}

/// Último versículo mostrado, tal como se guarda en `ultimo_versiculo`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredVerse {
    pub verse: Verse,
    /// Fecha local en la que se mostró (formato de `date_string`)
    pub date: String,
}
