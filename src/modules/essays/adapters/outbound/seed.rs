// Demo essays loaded into the in-memory store at startup.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::essays::core::essay::EssayRecord;

const DEMO_ESSAYS: [(&str, &str, [u32; 5]); 8] = [
    (
        "A importância da educação financeira nas escolas brasileiras",
        "2025-10-15",
        [180, 180, 180, 160, 180],
    ),
    (
        "Desafios da mobilidade urbana no Brasil contemporâneo",
        "2025-10-08",
        [180, 160, 180, 160, 160],
    ),
    (
        "O papel da tecnologia na democratização do ensino",
        "2025-10-01",
        [160, 160, 160, 160, 160],
    ),
    (
        "Combate ao desperdício de alimentos no Brasil",
        "2025-09-24",
        [160, 140, 160, 140, 160],
    ),
    (
        "A preservação da Amazônia e o desenvolvimento sustentável",
        "2025-09-17",
        [160, 180, 160, 160, 160],
    ),
    (
        "Saúde mental dos jovens brasileiros",
        "2025-09-10",
        [160, 160, 140, 160, 160],
    ),
    (
        "Desafios da inclusão digital no Brasil",
        "2025-09-03",
        [140, 160, 140, 140, 160],
    ),
    (
        "A valorização do trabalho doméstico no Brasil",
        "2025-08-27",
        [140, 140, 160, 140, 140],
    ),
];

pub fn demo_essays() -> Vec<EssayRecord> {
    DEMO_ESSAYS
        .iter()
        .filter_map(|(theme, date, [c1, c2, c3, c4, c5])| {
            let date = date.parse::<NaiveDate>().ok()?;
            Some(EssayRecord {
                id: Uuid::now_v7().to_string(),
                theme: theme.to_string(),
                date,
                total_score: c1 + c2 + c3 + c4 + c5,
                c1: *c1,
                c2: *c2,
                c3: *c3,
                c4: *c4,
                c5: *c5,
            })
        })
        .collect()
}

#[cfg(test)]
mod essay_seed_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_seed_consistent_essays() {
        let essays = demo_essays();
        assert_eq!(essays.len(), 8);
        assert!(essays.iter().all(|e| e.total_score == e.competency_sum()));
        assert_eq!(essays[0].total_score, 880);
        assert_eq!(essays[7].total_score, 720);
    }
}
