use async_graphql::{Context, Json, Object, Result as GqlResult, SimpleObject};

use crate::modules::essays::core::analytics::window::Period;
use crate::modules::essays::use_cases::dashboard_insights::projection::{
    DashboardView, build_dashboard,
};
use crate::modules::essays::use_cases::list_essays::queries::essays_newest_first;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::DateOrder;
use crate::shared::infrastructure::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlDashboard {
    pub period: String,
    pub essay_count: u64,
    pub average_score: u32,
    pub latest_score: Option<u32>,
    pub goal_distance: i64,
    /// The complete read model, as served by the REST endpoint.
    pub view: Json<DashboardView>,
}

impl From<DashboardView> for GqlDashboard {
    fn from(view: DashboardView) -> Self {
        Self {
            period: view.period.to_string(),
            essay_count: view.essay_count as u64,
            average_score: view.average_score,
            latest_score: view.latest_score,
            goal_distance: view.goal.distance,
            view: Json(view),
        }
    }
}

#[derive(Default)]
pub struct DashboardQuery;

#[Object]
impl DashboardQuery {
    async fn dashboard(
        &self,
        context: &Context<'_>,
        period: Option<String>,
    ) -> GqlResult<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let period = match period {
            Some(tag) => tag.parse::<Period>()?,
            None => Period::default(),
        };
        let history = essays_newest_first(state.essays.as_ref())
            .await
            .map_err(|e| ApiError::from(ApplicationError::from(e)))?;
        Ok(build_dashboard(&history, DateOrder::NewestFirst, period, state.today()).into())
    }
}
