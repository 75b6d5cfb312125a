// Validation for creating a weekly theme.

use chrono::NaiveDate;

use crate::modules::library::core::weekly_theme::WeeklyTheme;
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWeeklyTheme {
    pub theme_id: String,
    pub theme: String,
    pub description: Option<String>,
    pub week_start: NaiveDate,
    pub active: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("o tema da semana é obrigatório")]
    MissingTheme,
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        ApplicationError::Rejected(reason.to_string())
    }
}

pub fn decide_create(command: CreateWeeklyTheme) -> Result<WeeklyTheme, DecideError> {
    let theme = command.theme.trim();
    if theme.is_empty() {
        return Err(DecideError::MissingTheme);
    }
    Ok(WeeklyTheme {
        id: command.theme_id,
        theme: theme.to_string(),
        description: command.description.filter(|d| !d.trim().is_empty()),
        week_start: command.week_start,
        active: command.active,
    })
}

#[cfg(test)]
mod weekly_theme_decide_tests {
    use super::*;
    use rstest::rstest;

    fn command(theme: &str) -> CreateWeeklyTheme {
        CreateWeeklyTheme {
            theme_id: "theme-fixed-0001".into(),
            theme: theme.into(),
            description: None,
            week_start: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
            active: true,
        }
    }

    #[rstest]
    fn it_should_create_the_theme() {
        let theme = decide_create(command("Os desafios do voluntariado no Brasil")).unwrap();
        assert_eq!(theme.theme, "Os desafios do voluntariado no Brasil");
        assert!(theme.active);
    }

    #[rstest]
    fn it_should_require_a_theme() {
        assert_eq!(decide_create(command("  ")), Err(DecideError::MissingTheme));
    }
}
