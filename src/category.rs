//! Topical category of a book.
//!
//! A keyword-bucket classifier: every category owns a list of marker words,
//! and the category with the most distinct markers present in the title and
//! opening text wins. Matching is done on lowercase, diacritic-folded text, so
//! "Hábitos" and "habitos" count the same.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text::lexicon::fold_diacritics;

/// One of the fixed study categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Riqueza,
    #[default]
    DesarrolloPersonal,
    PsicologiaNegocios,
    Emprendimiento,
    HistoriasExito,
    Coaching,
    Gerencia,
    ManejoProyectos,
}

impl Category {
    /// All categories, in tie-break order.
    pub const ALL: [Category; 8] = [
        Category::Riqueza,
        Category::DesarrolloPersonal,
        Category::PsicologiaNegocios,
        Category::Emprendimiento,
        Category::HistoriasExito,
        Category::Coaching,
        Category::Gerencia,
        Category::ManejoProyectos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Riqueza => "riqueza",
            Category::DesarrolloPersonal => "desarrollo-personal",
            Category::PsicologiaNegocios => "psicologia-negocios",
            Category::Emprendimiento => "emprendimiento",
            Category::HistoriasExito => "historias-exito",
            Category::Coaching => "coaching",
            Category::Gerencia => "gerencia",
            Category::ManejoProyectos => "manejo-proyectos",
        }
    }

    /// Marker words, already lowercase and without diacritics.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Category::Riqueza => &[
                "dinero", "rico", "riqueza", "finanzas", "inversion", "millonario", "ingresos",
                "activos", "pasivos", "bolsa", "acciones", "capital", "economia", "ahorro",
                "patrimonio",
            ],
            Category::DesarrolloPersonal => &[
                "habito", "productividad", "mente", "consciencia", "paz", "felicidad",
                "crecimiento", "proposito", "vida", "motivacion", "exito", "mentalidad",
                "disciplina", "personalidad",
            ],
            Category::PsicologiaNegocios => &[
                "persuasion", "influencia", "negociacion", "liderazgo", "comportamiento",
                "psicologia", "decisiones", "emociones", "pensamiento", "cognitivo", "negocios",
            ],
            Category::Emprendimiento => &[
                "startup", "empresa", "negocio", "emprendedor", "emprender", "innovacion",
                "mercado", "cliente", "modelo de negocio", "ventaja competitiva", "fundador",
            ],
            Category::HistoriasExito => &[
                "biografia", "historia", "vida", "jornada", "camino", "trayectoria", "exito",
                "logro", "superacion", "empresario", "visionario",
            ],
            Category::Coaching => &[
                "coach", "coaching", "mentor", "guiar", "potencial", "transformacion",
                "desarrollo", "cambio", "liderazgo personal",
            ],
            Category::Gerencia => &[
                "gerente", "gestion", "administrar", "equipo", "directivo", "ejecutivo",
                "management", "organizacion", "procesos", "estrategia", "empresa",
            ],
            Category::ManejoProyectos => &[
                "proyecto", "scrum", "agile", "metodologia", "planificacion", "sprint",
                "gestion de proyectos", "kanban", "okr", "gtd", "metodo", "productividad",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Pick the category whose markers best cover `title` and `body`.
///
/// Ties keep the earlier category; no marker at all yields the default.
pub fn categorize(title: &str, body: &str) -> Category {
    let haystack = fold_diacritics(&format!("{title} {body}").to_lowercase());

    let mut best = Category::default();
    let mut best_hits = 0usize;
    for category in Category::ALL {
        let hits = category
            .markers()
            .iter()
            .filter(|m| haystack.contains(*m))
            .count();
        if hits > best_hits {
            best = category;
            best_hits = hits;
        }
    }
    tracing::debug!(category = %best, hits = best_hits, "categorized");
    best
}
