use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::appointments::use_cases::slot_board::projection::{SlotBoard, slot_board};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::http_error::{ApiError, INVALID_DATA};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlSlot {
    pub time_slot: String,
    pub booked: bool,
}

#[derive(SimpleObject)]
pub struct GqlSlotBoard {
    pub date: String,
    pub bookable: bool,
    pub slots: Vec<GqlSlot>,
}

impl From<SlotBoard> for GqlSlotBoard {
    fn from(board: SlotBoard) -> Self {
        Self {
            date: board.date.to_string(),
            bookable: board.bookable,
            slots: board
                .slots
                .into_iter()
                .map(|s| GqlSlot {
                    time_slot: s.time_slot.to_string(),
                    booked: s.booked,
                })
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct SlotBoardQuery;

#[Object]
impl SlotBoardQuery {
    async fn slot_board(&self, context: &Context<'_>, date: String) -> GqlResult<GqlSlotBoard> {
        let state = context.data_unchecked::<AppState>();
        let date = date
            .parse::<NaiveDate>()
            .map_err(|_| async_graphql::Error::new(INVALID_DATA))?;
        let appointments = state
            .appointments
            .get_all()
            .await
            .map_err(|e| ApiError::from(ApplicationError::from(e)))?;
        Ok(slot_board(&appointments, date, state.today()).into())
    }
}
