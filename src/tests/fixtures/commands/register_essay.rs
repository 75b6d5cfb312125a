// Shared test fixture for the RegisterEssay command.

use crate::modules::essays::use_cases::register_essay::command::RegisterEssay;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEssayDto {
    pub essay_id: String,
    pub theme: String,
    pub date: NaiveDate,
    pub total_score: Option<u32>,
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
    pub c4: u32,
    pub c5: u32,
}

pub struct RegisterEssayBuilder {
    inner: RegisterEssay,
}

impl Default for RegisterEssayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterEssayBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/register_essay.json").unwrap();
        let dto: RegisterEssayDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterEssay {
                essay_id: dto.essay_id,
                theme: dto.theme,
                date: dto.date,
                c1: dto.c1,
                c2: dto.c2,
                c3: dto.c3,
                c4: dto.c4,
                c5: dto.c5,
                total_score: dto.total_score,
            },
        }
    }

    pub fn essay_id(mut self, v: impl Into<String>) -> Self {
        self.inner.essay_id = v.into();
        self
    }

    pub fn theme(mut self, v: impl Into<String>) -> Self {
        self.inner.theme = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn scores(mut self, [c1, c2, c3, c4, c5]: [u32; 5]) -> Self {
        self.inner.c1 = c1;
        self.inner.c2 = c2;
        self.inner.c3 = c3;
        self.inner.c4 = c4;
        self.inner.c5 = c5;
        self
    }

    pub fn total_score(mut self, v: Option<u32>) -> Self {
        self.inner.total_score = v;
        self
    }

    pub fn build(self) -> RegisterEssay {
        self.inner
    }
}

#[cfg(test)]
mod register_essay_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterEssayBuilder::default().build();
        assert_eq!(built.essay_id, "essay-fixed-0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());
        assert_eq!([built.c1, built.c2, built.c3, built.c4, built.c5], [180, 180, 180, 160, 180]);
        assert_eq!(built.total_score, Some(880));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterEssayBuilder::new()
            .essay_id("essay-123")
            .theme("Outro tema")
            .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .scores([1, 2, 3, 4, 5])
            .total_score(Some(15))
            .build();

        assert_eq!(custom.essay_id, "essay-123");
        assert_eq!(custom.theme, "Outro tema");
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!([custom.c1, custom.c2, custom.c3, custom.c4, custom.c5], [1, 2, 3, 4, 5]);
        assert_eq!(custom.total_score, Some(15));
    }
}
