use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::essays::use_cases::list_essays::inbound::graphql::GqlEssay;
use crate::modules::essays::use_cases::register_essay::command::RegisterEssay;
use crate::shared::infrastructure::http_error::{ApiError, INVALID_DATA};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterEssayMutation;

#[Object]
impl RegisterEssayMutation {
    #[allow(clippy::too_many_arguments)]
    async fn register_essay(
        &self,
        context: &Context<'_>,
        theme: String,
        date: String,
        c1: u32,
        c2: u32,
        c3: u32,
        c4: u32,
        c5: u32,
        total_score: Option<u32>,
    ) -> GqlResult<GqlEssay> {
        let state = context.data_unchecked::<AppState>();
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| async_graphql::Error::new(INVALID_DATA))?;

        let command = RegisterEssay {
            essay_id: Uuid::now_v7().to_string(),
            theme,
            date,
            c1,
            c2,
            c3,
            c4,
            c5,
            total_score,
        };

        let essay = state
            .register_essay
            .handle(command)
            .await
            .map_err(ApiError::from)?;
        Ok(essay.into())
    }
}
