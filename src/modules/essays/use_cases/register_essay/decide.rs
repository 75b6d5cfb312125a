// Pure decision function for essay registration.
//
// Responsibilities
// - Enforce: non-empty theme, every competency within 0..=200.
// - Compute the total from the competencies; reject a supplied total that disagrees.
// - Never perform input or output.

use crate::modules::essays::core::essay::{Competency, EssayRecord, MAX_COMPETENCY_SCORE};
use crate::modules::essays::use_cases::register_essay::command::RegisterEssay;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("o tema da redação é obrigatório")]
    MissingTheme,

    #[error("{competency} deve estar entre 0 e 200, recebido {score}")]
    CompetencyOutOfRange {
        competency: &'static str,
        score: u32,
    },

    #[error("nota total {supplied} difere da soma das competências {computed}")]
    TotalMismatch { supplied: u32, computed: u32 },
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        ApplicationError::Rejected(reason.to_string())
    }
}

pub fn decide_register(command: RegisterEssay) -> Result<EssayRecord, DecideError> {
    let theme = command.theme.trim();
    if theme.is_empty() {
        return Err(DecideError::MissingTheme);
    }

    let essay = EssayRecord {
        id: command.essay_id,
        theme: theme.to_string(),
        date: command.date,
        total_score: 0,
        c1: command.c1,
        c2: command.c2,
        c3: command.c3,
        c4: command.c4,
        c5: command.c5,
    };

    for competency in Competency::ALL {
        let score = essay.score(competency);
        if score > MAX_COMPETENCY_SCORE {
            return Err(DecideError::CompetencyOutOfRange {
                competency: competency.key(),
                score,
            });
        }
    }

    let computed = essay.competency_sum();
    match command.total_score {
        Some(supplied) if supplied != computed => {
            Err(DecideError::TotalMismatch { supplied, computed })
        }
        _ => Ok(EssayRecord {
            total_score: computed,
            ..essay
        }),
    }
}
