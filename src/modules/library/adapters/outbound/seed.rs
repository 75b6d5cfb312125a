// Demo library content loaded into the in-memory stores at startup.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::library::core::material::{Material, MaterialKind};
use crate::modules::library::core::weekly_theme::WeeklyTheme;

pub fn demo_materials() -> Vec<Material> {
    [
        (
            "Estrutura da redação dissertativo-argumentativa",
            "Introdução, desenvolvimento e conclusão passo a passo.",
            MaterialKind::Slide,
            "/materiais/estrutura-redacao.pptx",
            NaiveDate::from_ymd_opt(2025, 9, 1),
        ),
        (
            "Guia das cinco competências do ENEM",
            "O que os corretores avaliam em cada competência.",
            MaterialKind::Pdf,
            "/materiais/competencias-enem.pdf",
            NaiveDate::from_ymd_opt(2025, 9, 8),
        ),
        (
            "Repertório sociocultural",
            "Dados, autores e referências para fundamentar argumentos.",
            MaterialKind::Pdf,
            "/materiais/repertorio.pdf",
            NaiveDate::from_ymd_opt(2025, 9, 22),
        ),
    ]
    .into_iter()
    .filter_map(|(title, description, kind, file_ref, upload_date)| {
        Some(Material {
            id: Uuid::now_v7().to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            kind,
            file_ref: file_ref.to_string(),
            upload_date: upload_date?,
        })
    })
    .collect()
}

pub fn demo_weekly_themes() -> Vec<WeeklyTheme> {
    [
        (
            "Desafios da inclusão digital no Brasil",
            NaiveDate::from_ymd_opt(2025, 10, 13),
            false,
        ),
        (
            "Caminhos para combater a insegurança alimentar no Brasil",
            NaiveDate::from_ymd_opt(2025, 10, 20),
            true,
        ),
    ]
    .into_iter()
    .filter_map(|(theme, week_start, active)| {
        Some(WeeklyTheme {
            id: Uuid::now_v7().to_string(),
            theme: theme.to_string(),
            description: None,
            week_start: week_start?,
            active,
        })
    })
    .collect()
}
