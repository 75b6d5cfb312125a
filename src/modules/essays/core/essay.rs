use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::DateOrder;
use crate::shared::infrastructure::record_store::Record;

pub const MAX_COMPETENCY_SCORE: u32 = 200;
pub const MAX_TOTAL_SCORE: u32 = 1000;

/// A graded essay. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayRecord {
    pub id: String,
    pub theme: String,
    pub date: NaiveDate,
    pub total_score: u32,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
}

impl EssayRecord {
    pub fn score(&self, competency: Competency) -> u32 {
        match competency {
            Competency::C1 => self.c1,
            Competency::C2 => self.c2,
            Competency::C3 => self.c3,
            Competency::C4 => self.c4,
            Competency::C5 => self.c5,
        }
    }

    pub fn competency_sum(&self) -> u32 {
        Competency::ALL.iter().map(|c| self.score(*c)).sum()
    }
}

/// Views `essays` sorted into `wanted` order. Same-day essays keep their
/// relative position as read in the declared `order`.
pub fn arrange(essays: &[EssayRecord], order: DateOrder, wanted: DateOrder) -> Vec<&EssayRecord> {
    let mut view = order.view(essays, wanted);
    wanted.sort_by_date(&mut view, |e| e.date);
    view
}

impl Record for EssayRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The five ENEM scoring dimensions, each worth up to 200 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competency {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Competency {
    pub const ALL: [Competency; 5] = [
        Competency::C1,
        Competency::C2,
        Competency::C3,
        Competency::C4,
        Competency::C5,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Competency::C1 => "c1",
            Competency::C2 => "c2",
            Competency::C3 => "c3",
            Competency::C4 => "c4",
            Competency::C5 => "c5",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Competency::C1 => "Norma Culta",
            Competency::C2 => "Compreensão do Tema",
            Competency::C3 => "Argumentação",
            Competency::C4 => "Coesão e Coerência",
            Competency::C5 => "Proposta de Intervenção",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Competency::C1 => {
                "Revise gramática, ortografia e concordância. Pratique escrita formal diariamente."
            }
            Competency::C2 => {
                "Leia mais sobre temas atuais. Identifique palavras-chave no tema proposto."
            }
            Competency::C3 => {
                "Fortaleça seus argumentos com dados, exemplos e citações. Use repertório sociocultural."
            }
            Competency::C4 => {
                "Utilize conectivos adequados. Organize parágrafos com tópico frasal claro."
            }
            Competency::C5 => {
                "Detalhe sua solução: agente, ação, modo/meio, efeito e detalhamento."
            }
        }
    }
}
